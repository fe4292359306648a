use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Render the help overlay.
pub fn render_help(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 80, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let key = |k: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {k:<9}"), Style::default().fg(Color::Yellow)),
            Span::raw(what),
        ])
    };

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Views",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        key("1-6", "Jump to Products / Orders / Customers / Users / Payments / Inventory"),
        key("Tab", "Next view"),
        key("r", "Refresh current view (or retry after an error)"),
        key("[ / ]", "Previous / next page"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Rows",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        key("j/↓ k/↑", "Move selection"),
        key("Enter", "Row details"),
        key("m", "Open row action menu"),
        key("s", "Open status picker (orders, inventory)"),
        key("o", "Cycle sort on the first sortable column"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Menus & dialogs",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        key("j/k", "Move menu highlight"),
        key("Enter", "Choose menu item / confirm dialog"),
        key("y / n", "Confirm / cancel dialog"),
        key("Esc", "Close menu, dialog, or overlay"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Mouse",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        key("click", "Select row, sort by header, open ⋯ or status menus"),
        Line::from(""),
        key("?", "Toggle this help"),
        key("q", "Quit"),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, popup_area);
}

/// Create a centered rectangle with the given percentage width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
