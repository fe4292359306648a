//! Table rendering and hit-testing.
//!
//! Rendering produces a [`TableFrame`] geometry snapshot alongside the drawn
//! widget. Mouse presses on the next tick are resolved against that snapshot,
//! which is also where a menu trigger's anchor rectangle comes from: the
//! rectangle is read once at the moment of the press, never re-measured.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::state::SortOrder;

/// Width of the `⋯` action trigger column pinned to the right edge.
pub const TRIGGER_WIDTH: u16 = 3;

/// A column of a list view.
pub struct Column {
    pub title: &'static str,
    pub width: u16,
    /// Sort key sent to the API; `None` renders a plain, unclickable header.
    pub sort_key: Option<&'static str>,
}

/// One rendered cell: text plus its presentation style.
#[derive(Debug, Clone)]
pub struct TableCell {
    pub text: String,
    pub style: Style,
}

impl TableCell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// One row's presentation: the entity id plus its projected cells.
#[derive(Debug, Clone)]
pub struct TableRow {
    pub id: String,
    pub cells: Vec<TableCell>,
}

/// Everything the table renderer needs from the current view.
pub struct TableContext<'a> {
    pub title: &'a str,
    pub columns: &'a [Column],
    pub rows: &'a [TableRow],
    pub sort_field: Option<&'static str>,
    pub sort_order: SortOrder,
    pub selected: usize,
    pub offset: usize,
    pub loading: bool,
}

/// What a mouse press resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableHit {
    /// A column header; index into the data columns.
    Header(usize),
    /// A cell; `row` is the absolute row index, `column` indexes the data
    /// columns with the trigger column last.
    Cell { row: usize, column: usize },
    /// Inside the table but on nothing interactive.
    None,
}

/// Geometry snapshot of the last rendered table.
#[derive(Debug, Clone, Default)]
pub struct TableFrame {
    pub area: Rect,
    /// Absolute `(x, width)` per column; the trigger column is last.
    pub columns: Vec<(u16, u16)>,
    pub header_y: u16,
    pub first_row_y: u16,
    /// Number of rows that fit in the window.
    pub visible: usize,
    /// First row index rendered (mirrors the page's scroll offset).
    pub offset: usize,
    /// Total row count at render time.
    pub row_count: usize,
}

impl TableFrame {
    /// Index of the trigger column within [`Self::columns`].
    pub fn trigger_column(&self) -> usize {
        self.columns.len().saturating_sub(1)
    }

    /// Resolve a press position against the snapshot.
    pub fn hit(&self, position: Position) -> TableHit {
        let column = self
            .columns
            .iter()
            .position(|&(x, width)| position.x >= x && position.x < x + width);

        if position.y == self.header_y {
            if let Some(column) = column {
                if column < self.trigger_column() {
                    return TableHit::Header(column);
                }
            }
            return TableHit::None;
        }

        if position.y >= self.first_row_y && position.y < self.first_row_y + self.visible as u16 {
            let row = self.offset + (position.y - self.first_row_y) as usize;
            if row < self.row_count {
                if let Some(column) = column {
                    return TableHit::Cell { row, column };
                }
            }
        }

        TableHit::None
    }

    /// The on-screen rectangle of a cell, used as a menu anchor.
    ///
    /// A row outside the rendered window has no geometry and yields an empty
    /// rectangle, which the menu controller treats as a degenerate anchor.
    pub fn cell_rect(&self, row: usize, column: usize) -> Rect {
        if row < self.offset || row >= self.offset + self.visible || row >= self.row_count {
            return Rect::default();
        }
        let Some(&(x, width)) = self.columns.get(column) else {
            return Rect::default();
        };
        let y = self.first_row_y + (row - self.offset) as u16;
        Rect::new(x, y, width, 1)
    }
}

/// Three-way sort indicator: neutral, ascending, descending.
fn sort_indicator(column: &Column, sort_field: Option<&'static str>, order: SortOrder) -> &'static str {
    match column.sort_key {
        None => "",
        Some(key) if sort_field == Some(key) => match order {
            SortOrder::Asc => " ▲",
            SortOrder::Desc => " ▼",
        },
        Some(_) => " ↕",
    }
}

/// Truncate to `width` display columns (with an ellipsis) or pad with spaces.
fn fit(text: &str, width: u16) -> String {
    let width = width as usize;
    if width == 0 {
        return String::new();
    }
    if text.width() <= width {
        let pad = width - text.width();
        let mut out = text.to_string();
        out.extend(std::iter::repeat_n(' ', pad));
        return out;
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out.extend(std::iter::repeat_n(' ', width - used - 1));
    out
}

/// Render the table and return its geometry snapshot.
pub fn render_table(frame: &mut Frame, area: Rect, ctx: &TableContext) -> TableFrame {
    let title = if ctx.loading {
        format!(" {} (loading…) ", ctx.title)
    } else {
        format!(" {} ", ctx.title)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height < 2 {
        return TableFrame {
            area,
            ..TableFrame::default()
        };
    }

    // Column geometry: data columns flow from the left, the trigger column
    // is pinned to the right edge.
    let mut columns: Vec<(u16, u16)> = Vec::with_capacity(ctx.columns.len() + 1);
    let mut x = inner.x;
    let trigger_x = inner.right().saturating_sub(TRIGGER_WIDTH);
    for column in ctx.columns {
        if x >= trigger_x {
            break;
        }
        let width = column.width.min(trigger_x - x);
        columns.push((x, width));
        x += width + 1;
    }
    columns.push((trigger_x, TRIGGER_WIDTH));

    let visible = (inner.height - 1) as usize;
    let snapshot = TableFrame {
        area,
        columns,
        header_y: inner.y,
        first_row_y: inner.y + 1,
        visible,
        offset: ctx.offset,
        row_count: ctx.rows.len(),
    };

    // Header line.
    let mut header_spans: Vec<Span> = Vec::new();
    let mut cursor = inner.x;
    let data_columns = snapshot.columns.len() - 1;
    for (idx, column) in ctx.columns.iter().enumerate().take(data_columns) {
        let (x, width) = snapshot.columns[idx];
        if x > cursor {
            header_spans.push(Span::raw(" ".repeat((x - cursor) as usize)));
        }
        let is_active = column.sort_key.is_some() && ctx.sort_field == column.sort_key;
        let label = format!(
            "{}{}",
            column.title,
            sort_indicator(column, ctx.sort_field, ctx.sort_order)
        );
        let style = if is_active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        header_spans.push(Span::styled(fit(&label, width), style));
        cursor = x + width;
    }
    frame.render_widget(
        Paragraph::new(Line::from(header_spans)),
        Rect::new(inner.x, snapshot.header_y, inner.width, 1),
    );

    // Data rows.
    let end = (ctx.offset + visible).min(ctx.rows.len());
    for (slot, row_idx) in (ctx.offset..end).enumerate() {
        let row = &ctx.rows[row_idx];
        let is_selected = row_idx == ctx.selected;
        let y = snapshot.first_row_y + slot as u16;

        let mut spans: Vec<Span> = Vec::new();
        let mut cursor = inner.x;
        for (idx, &(x, width)) in snapshot.columns.iter().enumerate() {
            if x > cursor {
                spans.push(Span::raw(" ".repeat((x - cursor) as usize)));
            }
            let (text, style) = if idx == snapshot.trigger_column() {
                (" ⋯ ".to_string(), Style::default().fg(Color::DarkGray))
            } else {
                let cell = row.cells.get(idx);
                (
                    fit(cell.map(|c| c.text.as_str()).unwrap_or(""), width),
                    cell.map(|c| c.style).unwrap_or_default(),
                )
            };
            let style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                style
            };
            spans.push(Span::styled(text, style));
            cursor = x + width;
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(inner.x, y, inner.width, 1),
        );
    }

    if ctx.rows.is_empty() && !ctx.loading {
        let empty = Paragraph::new("No rows").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, Rect::new(inner.x + 1, snapshot.first_row_y, inner.width.saturating_sub(1), 1));
    }

    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn columns() -> Vec<Column> {
        vec![
            Column {
                title: "Name",
                width: 12,
                sort_key: Some("name"),
            },
            Column {
                title: "Status",
                width: 10,
                sort_key: None,
            },
        ]
    }

    fn rows(count: usize) -> Vec<TableRow> {
        (0..count)
            .map(|i| TableRow {
                id: format!("r-{i}"),
                cells: vec![
                    TableCell::plain(format!("row {i}")),
                    TableCell::plain("active"),
                ],
            })
            .collect()
    }

    fn render(rows: &[TableRow], offset: usize) -> TableFrame {
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let columns = columns();
        let mut snapshot = TableFrame::default();
        terminal
            .draw(|frame| {
                let ctx = TableContext {
                    title: "Products",
                    columns: &columns,
                    rows,
                    sort_field: Some("name"),
                    sort_order: SortOrder::Asc,
                    selected: 0,
                    offset,
                    loading: false,
                };
                snapshot = render_table(frame, frame.area(), &ctx);
            })
            .unwrap();
        snapshot
    }

    #[test]
    fn test_fit_pads_and_truncates() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 4), "abc…");
        assert_eq!(fit("abcd", 4), "abcd");
    }

    #[test]
    fn test_sort_indicator_three_way() {
        let column = Column {
            title: "Name",
            width: 10,
            sort_key: Some("name"),
        };
        assert_eq!(sort_indicator(&column, None, SortOrder::Asc), " ↕");
        assert_eq!(sort_indicator(&column, Some("name"), SortOrder::Asc), " ▲");
        assert_eq!(sort_indicator(&column, Some("name"), SortOrder::Desc), " ▼");
        assert_eq!(sort_indicator(&column, Some("price"), SortOrder::Asc), " ↕");

        let unsortable = Column {
            title: "Status",
            width: 10,
            sort_key: None,
        };
        assert_eq!(sort_indicator(&unsortable, Some("name"), SortOrder::Asc), "");
    }

    #[test]
    fn test_hit_header() {
        let snapshot = render(&rows(3), 0);
        let (x, _) = snapshot.columns[0];
        assert_eq!(
            snapshot.hit(Position::new(x + 1, snapshot.header_y)),
            TableHit::Header(0)
        );
    }

    #[test]
    fn test_trigger_column_header_is_not_sortable() {
        let snapshot = render(&rows(3), 0);
        let (x, _) = snapshot.columns[snapshot.trigger_column()];
        assert_eq!(
            snapshot.hit(Position::new(x + 1, snapshot.header_y)),
            TableHit::None
        );
    }

    #[test]
    fn test_hit_cell_respects_offset() {
        let snapshot = render(&rows(30), 5);
        let (x, _) = snapshot.columns[0];
        assert_eq!(
            snapshot.hit(Position::new(x, snapshot.first_row_y + 2)),
            TableHit::Cell { row: 7, column: 0 }
        );
    }

    #[test]
    fn test_hit_past_last_row_is_none() {
        let snapshot = render(&rows(2), 0);
        let (x, _) = snapshot.columns[0];
        assert_eq!(
            snapshot.hit(Position::new(x, snapshot.first_row_y + 5)),
            TableHit::None
        );
    }

    #[test]
    fn test_hit_trigger_cell() {
        let snapshot = render(&rows(3), 0);
        let trigger = snapshot.trigger_column();
        let (x, _) = snapshot.columns[trigger];
        assert_eq!(
            snapshot.hit(Position::new(x + 1, snapshot.first_row_y)),
            TableHit::Cell {
                row: 0,
                column: trigger
            }
        );
    }

    #[test]
    fn test_cell_rect_for_visible_row() {
        let snapshot = render(&rows(3), 0);
        let trigger = snapshot.trigger_column();
        let rect = snapshot.cell_rect(1, trigger);
        assert_eq!(rect.height, 1);
        assert_eq!(rect.y, snapshot.first_row_y + 1);
        assert_eq!(rect.width, TRIGGER_WIDTH);
    }

    #[test]
    fn test_cell_rect_for_scrolled_out_row_is_empty() {
        let snapshot = render(&rows(30), 10);
        let rect = snapshot.cell_rect(2, 0);
        assert_eq!(rect, Rect::default());
    }
}
