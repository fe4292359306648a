//! Floating contextual menu controller.
//!
//! At most one menu is open at a time across the whole app. The menu is
//! anchored beneath the cell that triggered it, with the anchor rectangle
//! captured at the moment of the interaction and never re-measured, and it
//! renders last in the frame so table scrolling cannot clip it.
//!
//! Click routing is scoped to the open state: the controller owns a hit
//! region that exists only while a menu is open and is dropped on every
//! closing transition, so when nothing is open an outside click is never
//! even considered.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

/// Semantic kind of a contextual menu. The kind selects the anchoring mode:
/// action menus hang from the trigger's right edge so they stay inside the
/// viewport; status pickers expand rightward from the badge's left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    Actions,
    Status,
}

/// Identifies which menu is open: the kind plus the row it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuId {
    pub kind: MenuKind,
    pub row: String,
}

impl MenuId {
    pub fn actions(row: impl Into<String>) -> Self {
        Self {
            kind: MenuKind::Actions,
            row: row.into(),
        }
    }

    pub fn status(row: impl Into<String>) -> Self {
        Self {
            kind: MenuKind::Status,
            row: row.into(),
        }
    }
}

/// One entry in a menu. Disabled entries render dimmed and never dispatch.
#[derive(Debug, Clone)]
pub struct MenuItem<A> {
    pub label: String,
    pub action: A,
    pub enabled: bool,
}

impl<A> MenuItem<A> {
    pub fn new(label: impl Into<String>, action: A) -> Self {
        Self {
            label: label.into(),
            action,
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Outcome of routing a mouse press through the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuClick<A> {
    /// No menu is open; the press was not considered at all.
    NotOpen,
    /// An enabled item was pressed; the menu is now closed.
    Item(A),
    /// The press landed on menu chrome or a disabled item; consumed.
    Inside,
    /// The press landed outside the menu; the menu closed and the press is
    /// consumed, except that the caller may still treat a press on another
    /// row's trigger as a direct replacement. The closed id is returned so
    /// a press on the same trigger does not immediately reopen it.
    DismissedOutside(MenuId),
}

#[derive(Debug)]
struct OpenMenu<A> {
    id: MenuId,
    position: (u16, u16),
    width: u16,
    items: Vec<MenuItem<A>>,
    selected: usize,
    /// Rendered rectangle, captured at draw time. This is the outside-click
    /// hit region; it lives exactly as long as the menu is open.
    hit_area: Option<Rect>,
}

/// The one-open-menu state machine: `Closed` or `Open(id, position, items)`.
#[derive(Debug, Default)]
pub struct FloatingMenu<A> {
    open: Option<OpenMenu<A>>,
}

/// Compute the menu's top-left corner from the captured anchor rectangle.
///
/// Horizontal rule per kind: left-aligned for status pickers, right-aligned
/// (`x = anchor.right() - width`) for action menus. The menu's top row is
/// the first row below the anchor. An anchor with no measurable geometry
/// degrades to `(0, 0)`; cosmetic only, never an error.
pub fn menu_position(anchor: Rect, menu_width: u16, kind: MenuKind) -> (u16, u16) {
    if anchor.width == 0 || anchor.height == 0 {
        return (0, 0);
    }
    let x = match kind {
        MenuKind::Status => anchor.left(),
        MenuKind::Actions => anchor.right().saturating_sub(menu_width),
    };
    (x, anchor.bottom())
}

impl<A> FloatingMenu<A> {
    pub fn new() -> Self {
        Self { open: None }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// The identity of the open menu, if any.
    pub fn active_id(&self) -> Option<&MenuId> {
        self.open.as_ref().map(|menu| &menu.id)
    }

    /// The position computed when the menu was opened.
    pub fn position(&self) -> Option<(u16, u16)> {
        self.open.as_ref().map(|menu| menu.position)
    }

    /// Open the menu for `id`, or close it if `id` is already active.
    ///
    /// A different id replaces the open menu directly; there is no
    /// intermediate closed state to observe.
    pub fn toggle(&mut self, id: MenuId, anchor: Rect, items: Vec<MenuItem<A>>) {
        if self.active_id() == Some(&id) {
            self.close();
            return;
        }
        if items.is_empty() {
            self.close();
            return;
        }

        let label_width = items
            .iter()
            .map(|item| item.label.width())
            .max()
            .unwrap_or(0) as u16;
        // One cell of padding and one border cell on each side.
        let width = label_width + 4;
        let selected = items.iter().position(|item| item.enabled).unwrap_or(0);

        self.open = Some(OpenMenu {
            position: menu_position(anchor, width, id.kind),
            id,
            width,
            items,
            selected,
            hit_area: None,
        });
    }

    /// Unconditionally close. Safe to call when already closed; drops the
    /// hit region along with the rest of the open state.
    pub fn close(&mut self) {
        self.open = None;
    }

    /// Move the highlight down, skipping disabled items.
    pub fn select_next(&mut self) {
        if let Some(menu) = &mut self.open {
            let len = menu.items.len();
            for step in 1..=len {
                let idx = (menu.selected + step) % len;
                if menu.items[idx].enabled {
                    menu.selected = idx;
                    return;
                }
            }
        }
    }

    /// Move the highlight up, skipping disabled items.
    pub fn select_previous(&mut self) {
        if let Some(menu) = &mut self.open {
            let len = menu.items.len();
            for step in 1..=len {
                let idx = (menu.selected + len - step % len) % len;
                if menu.items[idx].enabled {
                    menu.selected = idx;
                    return;
                }
            }
        }
    }
}

impl<A: Clone> FloatingMenu<A> {
    /// Confirm the highlighted item. Returns its action and closes the menu;
    /// a disabled highlight (possible when every item is disabled) returns
    /// nothing and leaves the menu open.
    pub fn confirm(&mut self) -> Option<A> {
        let menu = self.open.as_ref()?;
        let item = menu.items.get(menu.selected)?;
        if !item.enabled {
            return None;
        }
        let action = item.action.clone();
        self.close();
        Some(action)
    }

    /// Route a mouse press. Must be called before any other hit-testing
    /// while a menu is open; never called when closed (returns `NotOpen`).
    pub fn handle_click(&mut self, position: Position) -> MenuClick<A> {
        let Some(menu) = &self.open else {
            return MenuClick::NotOpen;
        };

        let Some(area) = menu.hit_area else {
            // Open but never rendered (e.g. terminal shrank to nothing):
            // treat every press as outside.
            let id = menu.id.clone();
            self.close();
            return MenuClick::DismissedOutside(id);
        };

        if !area.contains(position) {
            let id = menu.id.clone();
            self.close();
            return MenuClick::DismissedOutside(id);
        }

        // Item rows start below the top border.
        let row = (position.y - area.y) as usize;
        if row == 0 || row > menu.items.len() {
            return MenuClick::Inside;
        }
        let item = &menu.items[row - 1];
        if !item.enabled {
            return MenuClick::Inside;
        }

        let action = item.action.clone();
        self.close();
        MenuClick::Item(action)
    }

    /// Draw the open menu over everything else and capture its hit region.
    /// A no-op while closed.
    pub fn render(&mut self, frame: &mut Frame) {
        let Some(menu) = &mut self.open else {
            return;
        };

        let (x, y) = menu.position;
        let height = menu.items.len() as u16 + 2;
        let wanted = Rect::new(x, y, menu.width, height);
        let area = wanted.intersection(frame.area());
        menu.hit_area = Some(area);

        if area.width == 0 || area.height == 0 {
            return;
        }

        let lines: Vec<Line> = menu
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let style = if !item.enabled {
                    Style::default().fg(Color::DarkGray)
                } else if idx == menu.selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(Span::styled(format!(" {} ", item.label), style))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        frame.render_widget(Clear, area);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestAction {
        Edit,
        Delete,
    }

    fn items() -> Vec<MenuItem<TestAction>> {
        vec![
            MenuItem::new("Edit", TestAction::Edit),
            MenuItem::new("Delete", TestAction::Delete),
        ]
    }

    fn anchor() -> Rect {
        Rect::new(10, 5, 8, 1)
    }

    /// Render into a test terminal so the hit region gets captured.
    fn draw(menu: &mut FloatingMenu<TestAction>) {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| menu.render(frame)).unwrap();
    }

    #[test]
    fn test_position_right_aligned() {
        let anchor = Rect::new(100, 50, 80, 20);
        assert_eq!(menu_position(anchor, 160, MenuKind::Actions), (20, 70));
    }

    #[test]
    fn test_position_left_aligned() {
        let anchor = Rect::new(100, 50, 80, 20);
        assert_eq!(menu_position(anchor, 160, MenuKind::Status), (100, 70));
    }

    #[test]
    fn test_position_degenerate_anchor() {
        assert_eq!(
            menu_position(Rect::new(40, 12, 0, 0), 20, MenuKind::Actions),
            (0, 0)
        );
        assert_eq!(
            menu_position(Rect::new(40, 12, 5, 0), 20, MenuKind::Status),
            (0, 0)
        );
    }

    #[test]
    fn test_position_clamps_at_left_edge() {
        // Menu wider than the anchor's right offset: saturate to column 0.
        let anchor = Rect::new(2, 3, 4, 1);
        assert_eq!(menu_position(anchor, 30, MenuKind::Actions), (0, 4));
    }

    #[test]
    fn test_toggle_opens_and_same_id_closes() {
        let mut menu = FloatingMenu::new();
        assert!(!menu.is_open());

        menu.toggle(MenuId::actions("row-1"), anchor(), items());
        assert!(menu.is_open());
        assert_eq!(menu.active_id(), Some(&MenuId::actions("row-1")));

        menu.toggle(MenuId::actions("row-1"), anchor(), items());
        assert!(!menu.is_open());
    }

    #[test]
    fn test_toggle_different_id_replaces_directly() {
        let mut menu = FloatingMenu::new();
        menu.toggle(MenuId::actions("row-1"), anchor(), items());
        let first_position = menu.position();

        menu.toggle(MenuId::actions("row-2"), Rect::new(10, 9, 8, 1), items());
        assert!(menu.is_open());
        assert_eq!(menu.active_id(), Some(&MenuId::actions("row-2")));
        assert_ne!(menu.position(), first_position);
    }

    #[test]
    fn test_status_and_actions_are_distinct_identities() {
        let mut menu = FloatingMenu::new();
        menu.toggle(MenuId::actions("row-1"), anchor(), items());
        menu.toggle(MenuId::status("row-1"), anchor(), items());

        assert_eq!(menu.active_id(), Some(&MenuId::status("row-1")));
    }

    #[test]
    fn test_active_identity_is_last_toggled() {
        // For any toggle sequence the active identity is the last id, unless
        // it repeats the previous one, which closes.
        let mut menu = FloatingMenu::new();
        for row in ["a", "b", "c"] {
            menu.toggle(MenuId::actions(row), anchor(), items());
        }
        assert_eq!(menu.active_id(), Some(&MenuId::actions("c")));

        menu.toggle(MenuId::actions("c"), anchor(), items());
        assert_eq!(menu.active_id(), None);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut menu: FloatingMenu<TestAction> = FloatingMenu::new();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_click_while_closed_is_not_considered() {
        let mut menu: FloatingMenu<TestAction> = FloatingMenu::new();
        let outcome = menu.handle_click(Position::new(0, 0));
        assert_eq!(outcome, MenuClick::NotOpen);
    }

    #[test]
    fn test_outside_click_closes_and_reports_id() {
        let mut menu = FloatingMenu::new();
        menu.toggle(MenuId::actions("row-1"), anchor(), items());
        draw(&mut menu);

        let outcome = menu.handle_click(Position::new(79, 23));
        assert_eq!(
            outcome,
            MenuClick::DismissedOutside(MenuId::actions("row-1"))
        );
        assert!(!menu.is_open());

        // The hit region died with the menu: the next press is not routed.
        assert_eq!(menu.handle_click(Position::new(79, 23)), MenuClick::NotOpen);
    }

    #[test]
    fn test_item_click_returns_action_and_closes() {
        let mut menu = FloatingMenu::new();
        menu.toggle(MenuId::actions("row-1"), anchor(), items());
        draw(&mut menu);

        let (x, y) = menu.position().unwrap();
        // First item row is just below the top border.
        let outcome = menu.handle_click(Position::new(x + 2, y + 1));
        assert_eq!(outcome, MenuClick::Item(TestAction::Edit));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_disabled_item_never_dispatches() {
        let mut menu = FloatingMenu::new();
        let items = vec![
            MenuItem::new("Edit", TestAction::Edit),
            MenuItem::new("Delete", TestAction::Delete).enabled(false),
        ];
        menu.toggle(MenuId::actions("row-1"), anchor(), items);
        draw(&mut menu);

        let (x, y) = menu.position().unwrap();
        // Click the disabled second item, repeatedly.
        for _ in 0..3 {
            let outcome = menu.handle_click(Position::new(x + 2, y + 2));
            assert_eq!(outcome, MenuClick::Inside);
            assert!(menu.is_open());
        }
    }

    #[test]
    fn test_border_click_is_consumed() {
        let mut menu = FloatingMenu::new();
        menu.toggle(MenuId::actions("row-1"), anchor(), items());
        draw(&mut menu);

        let (x, y) = menu.position().unwrap();
        assert_eq!(menu.handle_click(Position::new(x, y)), MenuClick::Inside);
        assert!(menu.is_open());
    }

    #[test]
    fn test_keyboard_navigation_skips_disabled() {
        let mut menu = FloatingMenu::new();
        let items = vec![
            MenuItem::new("Edit", TestAction::Edit),
            MenuItem::new("Delete", TestAction::Delete).enabled(false),
        ];
        menu.toggle(MenuId::actions("row-1"), anchor(), items);

        menu.select_next();
        // Delete is disabled, so the highlight wraps back to Edit.
        assert_eq!(menu.confirm(), Some(TestAction::Edit));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_confirm_when_closed_is_none() {
        let mut menu: FloatingMenu<TestAction> = FloatingMenu::new();
        assert_eq!(menu.confirm(), None);
    }

    #[test]
    fn test_degenerate_anchor_still_opens_at_origin() {
        // A trigger scrolled out of the frame has no geometry; the menu
        // still opens (the action path must not be blocked), just at (0, 0).
        let mut menu = FloatingMenu::new();
        menu.toggle(MenuId::actions("row-9"), Rect::default(), items());
        assert!(menu.is_open());
        assert_eq!(menu.position(), Some((0, 0)));
    }
}
