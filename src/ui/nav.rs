use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::app::View;

/// Geometry snapshot of the navigation sidebar for click routing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavFrame {
    area: Rect,
    first_entry_y: u16,
}

impl NavFrame {
    /// Resolve a press to the view entry under it, if any.
    pub fn hit(&self, position: Position) -> Option<View> {
        if !self.area.contains(position) || position.y < self.first_entry_y {
            return None;
        }
        let idx = (position.y - self.first_entry_y) as usize;
        View::ALL.get(idx).copied()
    }
}

/// Render the navigation sidebar and return its geometry snapshot.
pub fn render_nav(frame: &mut Frame, area: Rect, active: View, counts: &[Option<u64>]) -> NavFrame {
    let block = Block::default()
        .title(" storedesk ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = View::ALL
        .iter()
        .enumerate()
        .map(|(idx, view)| {
            let is_active = *view == active;
            let style = if is_active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let count = counts
                .get(idx)
                .copied()
                .flatten()
                .map(|n| format!(" {n}"))
                .unwrap_or_default();
            let label = format!(" {} {}{}", idx + 1, view.title(), count);
            Line::from(Span::styled(
                format!("{label:<width$}", width = inner.width as usize),
                style,
            ))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);

    NavFrame {
        area,
        first_entry_y: inner.y,
    }
}
