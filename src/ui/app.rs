use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, MouseButton,
    MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::api::{self, ApiClient};
use crate::config::Config;
use crate::fetch::{self, FetchHandle};
use crate::model::{Customer, InventoryItem, Order, Payment, Product, User};
use crate::state::{EventLog, PageState};

use super::banner::render_error_banner;
use super::confirm::{ConfirmState, PendingAction, render_confirm};
use super::detail::{DetailState, render_detail};
use super::help::render_help;
use super::menu::{FloatingMenu, MenuClick, MenuId};
use super::nav::{NavFrame, render_nav};
use super::prompt::{FieldEdit, PromptState, render_prompt};
use super::table::{TableContext, TableFrame, TableHit, render_table};
use super::views::{self, RowAction};

/// Width of the navigation sidebar.
const NAV_WIDTH: u16 = 22;

/// The six list views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Products,
    Orders,
    Customers,
    Users,
    Payments,
    Inventory,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Products,
        View::Orders,
        View::Customers,
        View::Users,
        View::Payments,
        View::Inventory,
    ];

    pub fn title(self) -> &'static str {
        match self {
            View::Products => "Products",
            View::Orders => "Orders",
            View::Customers => "Customers",
            View::Users => "Users",
            View::Payments => "Payments",
            View::Inventory => "Inventory",
        }
    }

    /// Resource path segment, also used as the log subject prefix.
    pub fn resource(self) -> &'static str {
        match self {
            View::Products => "products",
            View::Orders => "orders",
            View::Customers => "customers",
            View::Users => "users",
            View::Payments => "payments",
            View::Inventory => "inventory",
        }
    }

    fn next(self) -> View {
        let idx = View::ALL.iter().position(|v| *v == self).unwrap_or(0);
        View::ALL[(idx + 1) % View::ALL.len()]
    }
}

/// What to record when a mutation completes.
enum MutationKind {
    Delete,
    Refund,
    Status(&'static str),
    Field(String),
    Toggle(bool),
}

/// One in-flight mutation plus everything needed to report its outcome.
struct Mutation {
    handle: FetchHandle<()>,
    view: View,
    subject: String,
    description: String,
    kind: MutationKind,
}

/// Application state for the TUI.
pub struct App {
    /// Application configuration.
    pub config: Config,

    /// Shared API client; cloned into every request thread.
    client: ApiClient,

    /// Operation logger.
    event_log: EventLog,

    /// Which list view is showing.
    pub view: View,

    pub products: PageState<Product>,
    pub orders: PageState<Order>,
    pub customers: PageState<Customer>,
    pub users: PageState<User>,
    pub payments: PageState<Payment>,
    pub inventory: PageState<InventoryItem>,

    /// The one floating contextual menu.
    pub menu: FloatingMenu<RowAction>,

    /// Current confirmation dialog state.
    pub confirm: ConfirmState,

    /// Current edit prompt state.
    pub prompt: PromptState,

    /// Current detail popup, if any.
    pub detail: Option<DetailState>,

    /// Whether the help overlay is shown.
    pub show_help: bool,

    /// Whether the app should quit.
    pub should_quit: bool,

    /// Status message shown in the footer.
    pub status_message: Option<String>,

    /// In-flight mutations.
    mutations: Vec<Mutation>,

    /// Geometry of the last rendered table (current view only).
    table_frame: TableFrame,

    /// Geometry of the last rendered sidebar.
    nav_frame: NavFrame,

    /// Try Again button of the error banner, present only while one shows.
    try_again: Option<Rect>,
}

impl App {
    pub fn new(config: Config, client: ApiClient, event_log: EventLog) -> Self {
        let mut app = Self {
            config,
            client,
            event_log,
            view: View::default(),
            products: PageState::new(),
            orders: PageState::new(),
            customers: PageState::new(),
            users: PageState::new(),
            payments: PageState::new(),
            inventory: PageState::new(),
            menu: FloatingMenu::new(),
            confirm: ConfirmState::default(),
            prompt: PromptState::default(),
            detail: None,
            show_help: false,
            should_quit: false,
            status_message: None,
            mutations: Vec::new(),
            table_frame: TableFrame::default(),
            nav_frame: NavFrame::default(),
            try_again: None,
        };
        app.refresh();
        app
    }

    /// Run the application main loop.
    pub fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        loop {
            self.poll_pages();
            self.poll_mutations();

            terminal.draw(|frame| self.render(frame))?;

            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    // ---- fetch plumbing -------------------------------------------------

    /// Apply any completed fetches across all views.
    fn poll_pages(&mut self) {
        let log = &self.event_log;
        self.products.poll(log, View::Products.resource());
        self.orders.poll(log, View::Orders.resource());
        self.customers.poll(log, View::Customers.resource());
        self.users.poll(log, View::Users.resource());
        self.payments.poll(log, View::Payments.resource());
        self.inventory.poll(log, View::Inventory.resource());
    }

    /// Issue a fetch for the current view. Never cancels prior requests;
    /// whichever result lands last wins.
    fn refresh(&mut self) {
        self.refresh_view(self.view);
    }

    fn refresh_view(&mut self, view: View) {
        let limit = self.config.page_limit;
        let client = self.client.clone();
        match view {
            View::Products => {
                let query = self.products.query(limit);
                self.products
                    .begin(fetch::spawn(move || api::products::list(&client, &query)));
            }
            View::Orders => {
                let query = self.orders.query(limit);
                self.orders
                    .begin(fetch::spawn(move || api::orders::list(&client, &query)));
            }
            View::Customers => {
                let query = self.customers.query(limit);
                self.customers
                    .begin(fetch::spawn(move || api::customers::list(&client, &query)));
            }
            View::Users => {
                let query = self.users.query(limit);
                self.users
                    .begin(fetch::spawn(move || api::users::list(&client, &query)));
            }
            View::Payments => {
                let query = self.payments.query(limit);
                self.payments
                    .begin(fetch::spawn(move || api::payments::list(&client, &query)));
            }
            View::Inventory => {
                let query = self.inventory.query(limit);
                self.inventory
                    .begin(fetch::spawn(move || api::inventory::list(&client, &query)));
            }
        }
    }

    fn poll_mutations(&mut self) {
        let mut completed = Vec::new();
        for (i, mutation) in self.mutations.iter().enumerate() {
            if let Some(result) = mutation.handle.try_recv() {
                completed.push((i, result));
            }
        }

        // Process completed in reverse order to preserve indices.
        for (i, result) in completed.into_iter().rev() {
            let mutation = self.mutations.remove(i);
            match result {
                Ok(()) => {
                    match &mutation.kind {
                        MutationKind::Delete => {
                            self.event_log.log_entity_deleted(&mutation.subject);
                        }
                        MutationKind::Refund => {
                            self.event_log.log_refund_issued(&mutation.subject);
                        }
                        MutationKind::Status(status) => {
                            self.event_log.log_status_changed(&mutation.subject, status);
                        }
                        MutationKind::Field(details) => {
                            self.event_log.log_field_updated(&mutation.subject, details);
                        }
                        MutationKind::Toggle(active) => {
                            self.event_log.log_active_toggled(&mutation.subject, *active);
                        }
                    }
                    self.status_message = Some(mutation.description);
                    self.refresh_view(mutation.view);
                }
                Err(error) => {
                    self.event_log
                        .log_mutation_failed(&mutation.subject, &error.to_string());
                    self.status_message = Some(format!("Failed: {error}"));
                }
            }
        }
    }

    fn push_mutation(
        &mut self,
        view: View,
        id: &str,
        description: String,
        kind: MutationKind,
        handle: FetchHandle<()>,
    ) {
        self.mutations.push(Mutation {
            handle,
            view,
            subject: format!("{}/{}", view.resource(), id),
            description,
            kind,
        });
    }

    // ---- rendering ------------------------------------------------------

    fn render(&mut self, frame: &mut ratatui::Frame) {
        let area = frame.area();

        // Full-screen overlays replace everything underneath.
        if self.show_help {
            render_help(frame, area);
            return;
        }
        if self.confirm.is_active() {
            render_confirm(frame, area, &self.confirm);
            return;
        }
        if self.prompt.is_active() {
            render_prompt(frame, area, &self.prompt);
            return;
        }
        if let Some(detail) = &self.detail {
            render_detail(frame, area, detail);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(NAV_WIDTH), Constraint::Fill(1)])
            .split(area);

        let counts = [
            self.products.total,
            self.orders.total,
            self.customers.total,
            self.users.total,
            self.payments.total,
            self.inventory.total,
        ];
        self.nav_frame = render_nav(frame, chunks[0], self.view, &counts);

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Fill(1), Constraint::Length(1)])
            .split(chunks[1]);

        self.render_main(frame, main_chunks[0]);
        self.render_footer(frame, main_chunks[1]);

        // The menu floats above everything; rendering it last means the
        // table can never clip it.
        self.menu.render(frame);
    }

    fn render_main(&mut self, frame: &mut ratatui::Frame, area: Rect) {
        // Rows visible inside the table block: borders plus header line.
        let visible = area.height.saturating_sub(3) as usize;

        macro_rules! draw_view {
            ($page:expr, $columns:expr, $project:expr) => {{
                if let Some(message) = $page.error.clone() {
                    self.try_again = Some(render_error_banner(frame, area, &message));
                    self.table_frame = TableFrame::default();
                } else {
                    self.try_again = None;
                    $page.scroll_to_selected(visible);
                    let rows: Vec<_> = $page.rows.iter().map($project).collect();
                    let ctx = TableContext {
                        title: self.view.title(),
                        columns: $columns,
                        rows: &rows,
                        sort_field: $page.sort_field,
                        sort_order: $page.sort_order,
                        selected: $page.selected,
                        offset: $page.offset,
                        loading: $page.loading,
                    };
                    self.table_frame = render_table(frame, area, &ctx);
                }
            }};
        }

        match self.view {
            View::Products => {
                draw_view!(self.products, views::products::COLUMNS, views::products::row)
            }
            View::Orders => draw_view!(self.orders, views::orders::COLUMNS, views::orders::row),
            View::Customers => {
                draw_view!(
                    self.customers,
                    views::customers::COLUMNS,
                    views::customers::row
                )
            }
            View::Users => draw_view!(self.users, views::users::COLUMNS, views::users::row),
            View::Payments => {
                draw_view!(self.payments, views::payments::COLUMNS, views::payments::row)
            }
            View::Inventory => {
                draw_view!(
                    self.inventory,
                    views::inventory::COLUMNS,
                    views::inventory::row
                )
            }
        }
    }

    fn render_footer(&self, frame: &mut ratatui::Frame, area: Rect) {
        if let Some(message) = &self.status_message {
            let footer = Paragraph::new(message.as_str()).style(Style::default().fg(Color::Yellow));
            frame.render_widget(footer, area);
            return;
        }

        let (page, pages, total) = self.page_info();
        let mut spans = vec![Span::styled(
            format!(" page {page}/{}", pages.map_or("?".to_string(), |p| p.to_string())),
            Style::default().fg(Color::DarkGray),
        )];
        if let Some(total) = total {
            spans.push(Span::styled(
                format!(" · {total} rows"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans.push(Span::styled(
            " · ? for help",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn page_info(&self) -> (u32, Option<u32>, Option<u64>) {
        match self.view {
            View::Products => (self.products.page, self.products.pages, self.products.total),
            View::Orders => (self.orders.page, self.orders.pages, self.orders.total),
            View::Customers => (
                self.customers.page,
                self.customers.pages,
                self.customers.total,
            ),
            View::Users => (self.users.page, self.users.pages, self.users.total),
            View::Payments => (self.payments.page, self.payments.pages, self.payments.total),
            View::Inventory => (
                self.inventory.page,
                self.inventory.pages,
                self.inventory.total,
            ),
        }
    }

    // ---- key handling ---------------------------------------------------

    fn handle_key(&mut self, key: KeyEvent) {
        if self.confirm.is_active() {
            self.handle_confirm_key(key);
            return;
        }
        if self.prompt.is_active() {
            self.handle_prompt_key(key);
            return;
        }
        if self.detail.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.detail = None;
            }
            return;
        }
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }
        if self.menu.is_open() {
            self.handle_menu_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char(c @ '1'..='6') => {
                let idx = c as usize - '1' as usize;
                self.switch_view(View::ALL[idx]);
            }
            KeyCode::Tab => self.switch_view(self.view.next()),
            KeyCode::Char('j') | KeyCode::Down => {
                self.with_current_page(|page| page.select_next());
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.with_current_page(|page| page.select_previous());
            }
            KeyCode::Char('r') => {
                self.status_message = None;
                self.refresh();
            }
            KeyCode::Char('[') => {
                if self.with_current_page(|page| page.previous_page()) {
                    self.refresh();
                }
            }
            KeyCode::Char(']') => {
                if self.with_current_page(|page| page.next_page()) {
                    self.refresh();
                }
            }
            KeyCode::Char('o') => self.cycle_first_sort(),
            KeyCode::Enter => self.open_selected_detail(),
            KeyCode::Char('m') => self.open_actions_menu_for_selected(),
            KeyCode::Char('s') => self.open_status_menu_for_selected(),
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.menu.close(),
            KeyCode::Char('j') | KeyCode::Down => self.menu.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.menu.select_previous(),
            KeyCode::Enter => {
                let id = self.menu.active_id().cloned();
                if let (Some(id), Some(action)) = (id, self.menu.confirm()) {
                    self.dispatch_action(&id.row, action);
                }
            }
            KeyCode::Char('m') => {
                // Re-toggle for the selected row: same identity closes.
                self.open_actions_menu_for_selected();
            }
            KeyCode::Char('s') => {
                self.open_status_menu_for_selected();
            }
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('n') => self.confirm.cancel(),
            KeyCode::Enter => {
                if let Some(action) = self.confirm.confirm() {
                    self.dispatch_pending(action);
                }
            }
            KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::Char('h')
            | KeyCode::Char('l') => {
                self.confirm.toggle_selection();
            }
            KeyCode::Char('y') => {
                if let Some(action) = self.confirm.confirm_immediate() {
                    self.dispatch_pending(action);
                }
            }
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.prompt.cancel(),
            KeyCode::Enter => match self.prompt.submit() {
                Ok(Some(edit)) => self.dispatch_edit(edit),
                Ok(None) => {}
                Err(message) => self.status_message = Some(message),
            },
            KeyCode::Backspace => {
                if let Some(input) = self.prompt.current_input() {
                    input.backspace();
                }
            }
            KeyCode::Delete => {
                if let Some(input) = self.prompt.current_input() {
                    input.delete();
                }
            }
            KeyCode::Left => {
                if let Some(input) = self.prompt.current_input() {
                    input.move_left();
                }
            }
            KeyCode::Right => {
                if let Some(input) = self.prompt.current_input() {
                    input.move_right();
                }
            }
            KeyCode::Home => {
                if let Some(input) = self.prompt.current_input() {
                    input.move_start();
                }
            }
            KeyCode::End => {
                if let Some(input) = self.prompt.current_input() {
                    input.move_end();
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = self.prompt.current_input() {
                    input.insert(c);
                }
            }
            _ => {}
        }
    }

    // ---- mouse handling -------------------------------------------------

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return;
        };
        // Dialogs and overlays are keyboard-driven; a press changes nothing.
        if self.confirm.is_active()
            || self.prompt.is_active()
            || self.detail.is_some()
            || self.show_help
        {
            return;
        }

        let position = Position::new(mouse.column, mouse.row);

        // While a menu is open it sees every press first; the routing below
        // only runs when the menu was closed (or just dismissed, in which
        // case the press may still directly open another row's menu).
        let open_id = self.menu.active_id().cloned();
        let suppress = match self.menu.handle_click(position) {
            MenuClick::Item(action) => {
                if let Some(id) = open_id {
                    self.dispatch_action(&id.row, action);
                }
                return;
            }
            MenuClick::Inside => return,
            MenuClick::DismissedOutside(id) => Some(id),
            MenuClick::NotOpen => None,
        };

        if let Some(view) = self.nav_frame.hit(position) {
            self.switch_view(view);
            return;
        }

        if self.try_again.is_some_and(|button| button.contains(position)) {
            self.status_message = None;
            self.refresh();
            return;
        }

        match self.table_frame.hit(position) {
            TableHit::Header(column) => self.sort_by_column(column),
            TableHit::Cell { row, column } => self.handle_cell_click(row, column, suppress),
            TableHit::None => {}
        }
    }

    fn handle_cell_click(&mut self, row: usize, column: usize, suppress: Option<MenuId>) {
        self.with_current_page_selected(row);

        if column == self.table_frame.trigger_column() {
            let anchor = self.table_frame.cell_rect(row, column);
            self.open_actions_menu(row, anchor, suppress);
            return;
        }

        let status_column = match self.view {
            View::Orders => Some(views::orders::STATUS_COLUMN),
            View::Inventory => Some(views::inventory::STATUS_COLUMN),
            _ => None,
        };
        if status_column == Some(column) {
            let anchor = self.table_frame.cell_rect(row, column);
            self.open_status_menu(row, anchor, suppress);
        }
    }

    // ---- menus ----------------------------------------------------------

    fn open_actions_menu_for_selected(&mut self) {
        let row = self.current_selected();
        let anchor = self
            .table_frame
            .cell_rect(row, self.table_frame.trigger_column());
        self.open_actions_menu(row, anchor, None);
    }

    fn open_status_menu_for_selected(&mut self) {
        let column = match self.view {
            View::Orders => views::orders::STATUS_COLUMN,
            View::Inventory => views::inventory::STATUS_COLUMN,
            _ => return,
        };
        let row = self.current_selected();
        let anchor = self.table_frame.cell_rect(row, column);
        self.open_status_menu(row, anchor, None);
    }

    fn open_actions_menu(&mut self, row: usize, anchor: Rect, suppress: Option<MenuId>) {
        let Some((id, items)) = (match self.view {
            View::Products => self
                .products
                .rows
                .get(row)
                .map(|p| (p.id.clone(), views::products::actions(p))),
            View::Orders => self
                .orders
                .rows
                .get(row)
                .map(|o| (o.id.clone(), views::orders::actions(o))),
            View::Customers => self
                .customers
                .rows
                .get(row)
                .map(|c| (c.id.clone(), views::customers::actions(c))),
            View::Users => self
                .users
                .rows
                .get(row)
                .map(|u| (u.id.clone(), views::users::actions(u))),
            View::Payments => self
                .payments
                .rows
                .get(row)
                .map(|p| (p.id.clone(), views::payments::actions(p))),
            View::Inventory => self
                .inventory
                .rows
                .get(row)
                .map(|i| (i.id.clone(), views::inventory::actions(i))),
        }) else {
            return;
        };

        let menu_id = MenuId::actions(id);
        // A press that just dismissed this very menu must not reopen it.
        if suppress.as_ref() == Some(&menu_id) {
            return;
        }
        self.menu.toggle(menu_id, anchor, items);
    }

    fn open_status_menu(&mut self, row: usize, anchor: Rect, suppress: Option<MenuId>) {
        let Some((id, items)) = (match self.view {
            View::Orders => self
                .orders
                .rows
                .get(row)
                .map(|o| (o.id.clone(), views::orders::status_items(o))),
            View::Inventory => self
                .inventory
                .rows
                .get(row)
                .map(|i| (i.id.clone(), views::inventory::status_items(i))),
            _ => None,
        }) else {
            return;
        };

        let menu_id = MenuId::status(id);
        if suppress.as_ref() == Some(&menu_id) {
            return;
        }
        self.menu.toggle(menu_id, anchor, items);
    }

    // ---- dispatch -------------------------------------------------------

    /// Run a menu item's action for the row it was opened on. The menu is
    /// already closed by the time this runs.
    fn dispatch_action(&mut self, row_id: &str, action: RowAction) {
        match action {
            RowAction::ViewDetails => self.open_detail(row_id),
            RowAction::EditPrice => {
                let current = self
                    .products
                    .rows
                    .iter()
                    .find(|p| p.id == row_id)
                    .and_then(|p| p.price);
                self.prompt = PromptState::edit_price(row_id, current);
            }
            RowAction::EditQuantity => {
                let current = self
                    .inventory
                    .rows
                    .iter()
                    .find(|i| i.id == row_id)
                    .and_then(|i| i.quantity);
                self.prompt = PromptState::edit_quantity(row_id, current);
            }
            RowAction::Delete => {
                let label = self.row_label(row_id);
                self.confirm = ConfirmState::arm(
                    PendingAction::Delete {
                        view: self.view,
                        id: row_id.to_string(),
                    },
                    label,
                );
            }
            RowAction::Refund => {
                let label = self.row_label(row_id);
                self.confirm = ConfirmState::arm(
                    PendingAction::Refund {
                        id: row_id.to_string(),
                    },
                    label,
                );
            }
            RowAction::ToggleActive => {
                let Some(user) = self.users.rows.iter().find(|u| u.id == row_id) else {
                    return;
                };
                let activate = !user.is_active;
                let client = self.client.clone();
                let id = row_id.to_string();
                let handle = fetch::spawn(move || api::users::set_active(&client, &id, activate));
                self.push_mutation(
                    View::Users,
                    row_id,
                    format!(
                        "User {row_id} {}",
                        if activate { "activated" } else { "deactivated" }
                    ),
                    MutationKind::Toggle(activate),
                    handle,
                );
            }
            RowAction::SetProductStatus(status) => {
                let client = self.client.clone();
                let id = row_id.to_string();
                let wire = status.as_str();
                let handle =
                    fetch::spawn(move || api::products::update_status(&client, &id, wire));
                self.push_mutation(
                    View::Products,
                    row_id,
                    format!("Product {row_id} → {wire}"),
                    MutationKind::Status(wire),
                    handle,
                );
            }
            RowAction::SetOrderStatus(status) => {
                let client = self.client.clone();
                let id = row_id.to_string();
                let wire = status.as_str();
                let handle = fetch::spawn(move || api::orders::update_status(&client, &id, wire));
                self.push_mutation(
                    View::Orders,
                    row_id,
                    format!("Order {row_id} → {wire}"),
                    MutationKind::Status(wire),
                    handle,
                );
            }
            RowAction::SetInventoryStatus(status) => {
                let client = self.client.clone();
                let id = row_id.to_string();
                let wire = status.as_str();
                let handle =
                    fetch::spawn(move || api::inventory::update_status(&client, &id, wire));
                self.push_mutation(
                    View::Inventory,
                    row_id,
                    format!("Item {row_id} → {wire}"),
                    MutationKind::Status(wire),
                    handle,
                );
            }
        }
    }

    /// Run a confirmed destructive action.
    fn dispatch_pending(&mut self, action: PendingAction) {
        match action {
            PendingAction::Delete { view, id } => {
                let client = self.client.clone();
                let target = id.clone();
                let handle = fetch::spawn(move || match view {
                    View::Products => api::products::delete(&client, &target),
                    View::Customers => api::customers::delete(&client, &target),
                    View::Users => api::users::delete(&client, &target),
                    // Other views never arm a delete.
                    _ => Ok(()),
                });
                self.push_mutation(
                    view,
                    &id,
                    format!("Deleted {}/{id}", view.resource()),
                    MutationKind::Delete,
                    handle,
                );
            }
            PendingAction::Refund { id } => {
                let client = self.client.clone();
                let target = id.clone();
                let handle = fetch::spawn(move || api::payments::refund(&client, &target));
                self.push_mutation(
                    View::Payments,
                    &id,
                    format!("Refunded payment {id}"),
                    MutationKind::Refund,
                    handle,
                );
            }
        }
    }

    /// Apply a submitted edit prompt.
    fn dispatch_edit(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Price { id, price } => {
                let client = self.client.clone();
                let target = id.clone();
                let handle =
                    fetch::spawn(move || api::products::update_price(&client, &target, price));
                self.push_mutation(
                    View::Products,
                    &id,
                    format!("Product {id} price → ${price:.2}"),
                    MutationKind::Field(format!("price={price:.2}")),
                    handle,
                );
            }
            FieldEdit::Quantity { id, quantity } => {
                let client = self.client.clone();
                let target = id.clone();
                let handle = fetch::spawn(move || {
                    api::inventory::update_quantity(&client, &target, quantity)
                });
                self.push_mutation(
                    View::Inventory,
                    &id,
                    format!("Item {id} quantity → {quantity}"),
                    MutationKind::Field(format!("quantity={quantity}")),
                    handle,
                );
            }
        }
    }

    // ---- helpers --------------------------------------------------------

    fn switch_view(&mut self, view: View) {
        if self.view != view {
            self.view = view;
            self.menu.close();
            self.status_message = None;
            self.table_frame = TableFrame::default();
        }
        let unloaded = match view {
            View::Products => self.products.is_unloaded(),
            View::Orders => self.orders.is_unloaded(),
            View::Customers => self.customers.is_unloaded(),
            View::Users => self.users.is_unloaded(),
            View::Payments => self.payments.is_unloaded(),
            View::Inventory => self.inventory.is_unloaded(),
        };
        if unloaded {
            self.refresh_view(view);
        }
    }

    /// Run an operation against the current view's page state.
    fn with_current_page<R>(&mut self, op: impl FnOnce(&mut dyn PageOps) -> R) -> R {
        match self.view {
            View::Products => op(&mut self.products),
            View::Orders => op(&mut self.orders),
            View::Customers => op(&mut self.customers),
            View::Users => op(&mut self.users),
            View::Payments => op(&mut self.payments),
            View::Inventory => op(&mut self.inventory),
        }
    }

    fn with_current_page_selected(&mut self, row: usize) {
        self.with_current_page(|page| page.set_selected(row));
    }

    fn current_selected(&self) -> usize {
        match self.view {
            View::Products => self.products.selected,
            View::Orders => self.orders.selected,
            View::Customers => self.customers.selected,
            View::Users => self.users.selected,
            View::Payments => self.payments.selected,
            View::Inventory => self.inventory.selected,
        }
    }

    /// Header click: sort by the column's key, if it has one, and re-fetch.
    fn sort_by_column(&mut self, column: usize) {
        let columns = match self.view {
            View::Products => views::products::COLUMNS,
            View::Orders => views::orders::COLUMNS,
            View::Customers => views::customers::COLUMNS,
            View::Users => views::users::COLUMNS,
            View::Payments => views::payments::COLUMNS,
            View::Inventory => views::inventory::COLUMNS,
        };
        let Some(key) = columns.get(column).and_then(|c| c.sort_key) else {
            return;
        };
        self.with_current_page(|page| page.toggle_sort(key));
        self.refresh();
    }

    /// Keyboard sort: cycle direction on the view's first sortable column.
    fn cycle_first_sort(&mut self) {
        let columns = match self.view {
            View::Products => views::products::COLUMNS,
            View::Orders => views::orders::COLUMNS,
            View::Customers => views::customers::COLUMNS,
            View::Users => views::users::COLUMNS,
            View::Payments => views::payments::COLUMNS,
            View::Inventory => views::inventory::COLUMNS,
        };
        let Some(key) = columns.iter().find_map(|c| c.sort_key) else {
            return;
        };
        self.with_current_page(|page| page.toggle_sort(key));
        self.refresh();
    }

    fn open_selected_detail(&mut self) {
        let row = self.current_selected();
        let id = match self.view {
            View::Products => self.products.rows.get(row).map(|p| p.id.clone()),
            View::Orders => self.orders.rows.get(row).map(|o| o.id.clone()),
            View::Customers => self.customers.rows.get(row).map(|c| c.id.clone()),
            View::Users => self.users.rows.get(row).map(|u| u.id.clone()),
            View::Payments => self.payments.rows.get(row).map(|p| p.id.clone()),
            View::Inventory => self.inventory.rows.get(row).map(|i| i.id.clone()),
        };
        if let Some(id) = id {
            self.open_detail(&id);
        }
    }

    fn open_detail(&mut self, row_id: &str) {
        self.detail = match self.view {
            View::Products => self
                .products
                .rows
                .iter()
                .find(|p| p.id == row_id)
                .map(views::products::detail),
            View::Orders => self
                .orders
                .rows
                .iter()
                .find(|o| o.id == row_id)
                .map(views::orders::detail),
            View::Customers => self
                .customers
                .rows
                .iter()
                .find(|c| c.id == row_id)
                .map(views::customers::detail),
            View::Users => self
                .users
                .rows
                .iter()
                .find(|u| u.id == row_id)
                .map(views::users::detail),
            View::Payments => self
                .payments
                .rows
                .iter()
                .find(|p| p.id == row_id)
                .map(views::payments::detail),
            View::Inventory => self
                .inventory
                .rows
                .iter()
                .find(|i| i.id == row_id)
                .map(views::inventory::detail),
        };
    }

    /// Short human-readable summary of a row for confirm dialogs.
    fn row_label(&self, row_id: &str) -> String {
        match self.view {
            View::Products => self
                .products
                .rows
                .iter()
                .find(|p| p.id == row_id)
                .map(|p| p.name.clone()),
            View::Orders => self
                .orders
                .rows
                .iter()
                .find(|o| o.id == row_id)
                .and_then(|o| o.number.clone()),
            View::Customers => self
                .customers
                .rows
                .iter()
                .find(|c| c.id == row_id)
                .and_then(|c| c.name.clone().or_else(|| c.email.clone())),
            View::Users => self
                .users
                .rows
                .iter()
                .find(|u| u.id == row_id)
                .and_then(|u| u.email.clone().or_else(|| u.name.clone())),
            View::Payments => self
                .payments
                .rows
                .iter()
                .find(|p| p.id == row_id)
                .map(|p| p.id.clone()),
            View::Inventory => self
                .inventory
                .rows
                .iter()
                .find(|i| i.id == row_id)
                .and_then(|i| i.sku.clone()),
        }
        .unwrap_or_else(|| row_id.to_string())
    }
}

/// The page operations the app needs without knowing the row type.
trait PageOps {
    fn select_next(&mut self);
    fn select_previous(&mut self);
    fn set_selected(&mut self, row: usize);
    fn toggle_sort(&mut self, field: &'static str);
    fn next_page(&mut self) -> bool;
    fn previous_page(&mut self) -> bool;
}

impl<T> PageOps for PageState<T> {
    fn select_next(&mut self) {
        PageState::select_next(self);
    }
    fn select_previous(&mut self) {
        PageState::select_previous(self);
    }
    fn set_selected(&mut self, row: usize) {
        if row < self.rows.len() {
            self.selected = row;
        }
    }
    fn toggle_sort(&mut self, field: &'static str) {
        PageState::toggle_sort(self, field);
    }
    fn next_page(&mut self) -> bool {
        PageState::next_page(self)
    }
    fn previous_page(&mut self) -> bool {
        PageState::previous_page(self)
    }
}
