use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::confirm::centered_rect;

/// State for a single-line text input.
#[derive(Debug, Clone)]
pub struct TextInput {
    /// Current input value.
    pub value: String,

    /// Cursor position in the input.
    pub cursor: usize,
}

impl TextInput {
    /// Create an input pre-filled with the current field value.
    pub fn prefilled(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self { value, cursor }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.value.remove(self.cursor);
        }
    }

    /// Delete the character at the cursor (delete).
    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }
}

/// The edit a prompt submission resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    /// New unit price for a product.
    Price { id: String, price: f64 },
    /// New on-hand quantity for an inventory item.
    Quantity { id: String, quantity: i64 },
}

/// The single-field edit prompt being shown.
#[derive(Debug, Clone, Default)]
pub enum PromptState {
    /// No prompt active.
    #[default]
    None,

    /// Editing a product's unit price.
    Price { id: String, input: TextInput },

    /// Editing an inventory item's on-hand quantity.
    Quantity { id: String, input: TextInput },
}

impl PromptState {
    pub fn edit_price(id: impl Into<String>, current: Option<f64>) -> Self {
        let value = current.map(|p| format!("{p:.2}")).unwrap_or_default();
        Self::Price {
            id: id.into(),
            input: TextInput::prefilled(value),
        }
    }

    pub fn edit_quantity(id: impl Into<String>, current: Option<i64>) -> Self {
        let value = current.map(|q| q.to_string()).unwrap_or_default();
        Self::Quantity {
            id: id.into(),
            input: TextInput::prefilled(value),
        }
    }

    /// Check if a prompt is active.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Get the current text input, if any.
    pub fn current_input(&mut self) -> Option<&mut TextInput> {
        match self {
            Self::None => None,
            Self::Price { input, .. } => Some(input),
            Self::Quantity { input, .. } => Some(input),
        }
    }

    /// Submit the prompt. Returns the parsed edit, or `Err` with the prompt
    /// left active so the operator can correct the value.
    pub fn submit(&mut self) -> Result<Option<FieldEdit>, String> {
        match std::mem::take(self) {
            Self::None => Ok(None),
            Self::Price { id, input } => match input.value.trim().parse::<f64>() {
                Ok(price) if price >= 0.0 => Ok(Some(FieldEdit::Price { id, price })),
                _ => {
                    let message = format!("not a valid price: {:?}", input.value);
                    *self = Self::Price { id, input };
                    Err(message)
                }
            },
            Self::Quantity { id, input } => match input.value.trim().parse::<i64>() {
                Ok(quantity) if quantity >= 0 => Ok(Some(FieldEdit::Quantity { id, quantity })),
                _ => {
                    let message = format!("not a valid quantity: {:?}", input.value);
                    *self = Self::Quantity { id, input };
                    Err(message)
                }
            },
        }
    }

    /// Cancel the current prompt.
    pub fn cancel(&mut self) {
        *self = Self::None;
    }
}

/// Render the current edit prompt overlay.
pub fn render_prompt(frame: &mut Frame, area: Rect, prompt: &PromptState) {
    let (title, hint, input) = match prompt {
        PromptState::None => return,
        PromptState::Price { input, .. } => ("Edit Price", "Enter new unit price:", input),
        PromptState::Quantity { input, .. } => {
            ("Edit Quantity", "Enter new on-hand quantity:", input)
        }
    };

    let popup_area = centered_rect(40, 30, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner);

    let hint_text = Paragraph::new(hint).style(Style::default().fg(Color::White));
    frame.render_widget(hint_text, chunks[0]);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let input_paragraph = Paragraph::new(Line::from(Span::raw(&input.value))).block(input_block);
    frame.render_widget(input_paragraph, chunks[1]);

    let cursor_x = chunks[1].x + 1 + input.cursor as u16;
    let cursor_y = chunks[1].y + 1;
    frame.set_cursor_position((cursor_x, cursor_y));

    let help = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(" apply  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(" cancel"),
        ]),
    ])
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_editing() {
        let mut input = TextInput::prefilled("12");
        assert_eq!(input.cursor, 2);

        input.insert('5');
        assert_eq!(input.value, "125");

        input.backspace();
        input.backspace();
        assert_eq!(input.value, "1");

        input.move_start();
        input.insert('0');
        assert_eq!(input.value, "01");
    }

    #[test]
    fn test_submit_price() {
        let mut prompt = PromptState::edit_price("p-1", Some(9.5));
        let edit = prompt.submit().unwrap();
        assert_eq!(
            edit,
            Some(FieldEdit::Price {
                id: "p-1".to_string(),
                price: 9.5,
            })
        );
        assert!(!prompt.is_active());
    }

    #[test]
    fn test_submit_invalid_price_keeps_prompt_active() {
        let mut prompt = PromptState::edit_price("p-1", None);
        if let Some(input) = prompt.current_input() {
            for c in "abc".chars() {
                input.insert(c);
            }
        }

        let result = prompt.submit();
        assert!(result.is_err());
        assert!(prompt.is_active());
    }

    #[test]
    fn test_submit_negative_quantity_rejected() {
        let mut prompt = PromptState::edit_quantity("i-1", None);
        if let Some(input) = prompt.current_input() {
            for c in "-4".chars() {
                input.insert(c);
            }
        }

        assert!(prompt.submit().is_err());
    }

    #[test]
    fn test_submit_quantity() {
        let mut prompt = PromptState::edit_quantity("i-1", Some(7));
        let edit = prompt.submit().unwrap();
        assert_eq!(
            edit,
            Some(FieldEdit::Quantity {
                id: "i-1".to_string(),
                quantity: 7,
            })
        );
    }
}
