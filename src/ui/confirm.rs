use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::app::View;

/// Action armed behind a confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// Delete the entity with the given id from the given view.
    Delete { view: View, id: String },
    /// Refund the payment with the given id.
    Refund { id: String },
}

/// State for a confirmation dialog.
#[derive(Debug, Clone, Default)]
pub enum ConfirmState {
    /// No confirmation dialog active.
    #[default]
    None,

    /// Confirming a destructive action.
    Armed {
        action: PendingAction,
        /// Human-readable summary of the target row.
        label: String,
        /// Current selection: true = confirm, false = cancel.
        selected_confirm: bool,
    },
}

impl ConfirmState {
    /// Arm a confirmation for a destructive action.
    pub fn arm(action: PendingAction, label: String) -> Self {
        Self::Armed {
            action,
            label,
            selected_confirm: false, // Default to cancel for safety
        }
    }

    /// Check if a confirmation dialog is active.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Toggle the selection between confirm and cancel.
    pub fn toggle_selection(&mut self) {
        if let Self::Armed {
            selected_confirm, ..
        } = self
        {
            *selected_confirm = !*selected_confirm;
        }
    }

    /// Confirm. Returns the armed action if confirm was selected.
    pub fn confirm(&mut self) -> Option<PendingAction> {
        match std::mem::take(self) {
            Self::Armed {
                action,
                selected_confirm: true,
                ..
            } => Some(action),
            _ => None,
        }
    }

    /// Confirm regardless of which button is selected (the `y` shortcut).
    pub fn confirm_immediate(&mut self) -> Option<PendingAction> {
        match std::mem::take(self) {
            Self::Armed { action, .. } => Some(action),
            Self::None => None,
        }
    }

    /// Cancel the confirmation dialog.
    pub fn cancel(&mut self) {
        *self = Self::None;
    }
}

/// Render the confirmation dialog overlay.
pub fn render_confirm(frame: &mut Frame, area: Rect, confirm: &ConfirmState) {
    let (action, label, selected_confirm) = match confirm {
        ConfirmState::None => return,
        ConfirmState::Armed {
            action,
            label,
            selected_confirm,
        } => (action, label, *selected_confirm),
    };

    let (title, verb, question) = match action {
        PendingAction::Delete { .. } => ("Delete", "Delete", "Delete this record?"),
        PendingAction::Refund { .. } => ("Refund", "Refund", "Refund this payment?"),
    };

    let popup_area = centered_rect(50, 40, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            label.as_str(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "This cannot be undone.",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(question),
    ];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(inner);

    let content = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(content, chunks[0]);

    let button_cancel = if selected_confirm {
        Span::styled("  Cancel  ", Style::default().fg(Color::Gray))
    } else {
        Span::styled(
            "[ Cancel ]",
            Style::default().fg(Color::White).bg(Color::DarkGray),
        )
    };

    let button_confirm = if selected_confirm {
        Span::styled(
            format!("[ {} ]", verb),
            Style::default().fg(Color::White).bg(Color::Red),
        )
    } else {
        Span::styled(format!("  {}  ", verb), Style::default().fg(Color::Red))
    };

    let buttons = Paragraph::new(Line::from(vec![
        button_cancel,
        Span::raw("     "),
        button_confirm,
    ]))
    .alignment(Alignment::Center);

    frame.render_widget(buttons, chunks[1]);
}

/// Create a centered rectangle with the given percentage width and height.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn armed() -> ConfirmState {
        ConfirmState::arm(
            PendingAction::Delete {
                view: View::Users,
                id: "u-1".to_string(),
            },
            "ops@example.com".to_string(),
        )
    }

    #[test]
    fn test_confirm_defaults_to_cancel() {
        let mut state = armed();
        assert!(state.is_active());

        // Enter without toggling selects Cancel.
        let result = state.confirm();
        assert!(result.is_none());
        assert!(!state.is_active());
    }

    #[test]
    fn test_toggle_then_confirm_returns_action() {
        let mut state = armed();
        state.toggle_selection();

        let result = state.confirm();
        assert_eq!(
            result,
            Some(PendingAction::Delete {
                view: View::Users,
                id: "u-1".to_string(),
            })
        );
    }

    #[test]
    fn test_confirm_immediate_shortcut() {
        let mut state = armed();
        let result = state.confirm_immediate();
        assert!(result.is_some());
        assert!(!state.is_active());
    }

    #[test]
    fn test_cancel_clears_dialog() {
        let mut state = armed();
        state.cancel();
        assert!(!state.is_active());
        assert!(state.confirm().is_none());
    }
}
