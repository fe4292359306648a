use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Render the blocking page-level error banner.
///
/// Shown instead of the table when the view's last fetch failed. Returns the
/// rectangle of the Try Again button so the caller can hit-test the next
/// mouse press against it; the rectangle is only meaningful for the frame it
/// was produced in.
pub fn render_error_banner(frame: &mut Frame, area: Rect, message: &str) -> Rect {
    let banner_height = 7;
    let banner = Rect {
        x: area.x + 2,
        y: area.y + (area.height.saturating_sub(banner_height)) / 2,
        width: area.width.saturating_sub(4),
        height: banner_height.min(area.height),
    };

    frame.render_widget(Clear, banner);

    let block = Block::default()
        .title(" Something went wrong ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(banner);
    frame.render_widget(block, banner);

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(text, inner);

    // Try Again button centered near the bottom of the banner.
    let label = "[ Try Again ]";
    let button_width = label.len() as u16;
    let button = Rect {
        x: inner.x + (inner.width.saturating_sub(button_width)) / 2,
        y: inner.y + inner.height.saturating_sub(2),
        width: button_width.min(inner.width),
        height: 1,
    };
    let button_widget = Paragraph::new(Span::styled(
        label,
        Style::default()
            .fg(Color::Black)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(button_widget, button);

    let hint = Paragraph::new(Span::styled(
        "press r to retry",
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(
        hint,
        Rect {
            x: inner.x,
            y: inner.y + inner.height.saturating_sub(1),
            width: inner.width,
            height: 1,
        },
    );

    button
}
