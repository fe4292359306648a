use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::confirm::centered_rect;

/// Read-only detail popup for the selected row.
#[derive(Debug, Clone)]
pub struct DetailState {
    pub title: String,
    pub fields: Vec<(&'static str, String)>,
}

/// Render the detail overlay.
pub fn render_detail(frame: &mut Frame, area: Rect, detail: &DetailState) {
    let popup_area = centered_rect(55, 60, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", detail.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let label_width = detail
        .fields
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);

    let mut lines = vec![Line::from("")];
    for (label, value) in &detail.fields {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {label:>label_width$}  "),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(value.as_str(), Style::default().fg(Color::White)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Esc to close",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
