//! Cell-level table renderer
//!
//! A [`TableModel`] holds the header, rows and styling. Two [`Drawable`]
//! variants delegate to it and differ only in how the one-column spacer
//! between columns is drawn: [`PlainTable`] puts a `│` glyph there,
//! [`NoSeparatorTable`] leaves it blank.
//!
//! Layout rules:
//! - columns are `inner_width / column_count` wide unless explicit widths are
//!   given; the remainder stays as padding on the right
//! - each column starts one cell after the previous one ends
//! - text is measured in terminal cells, so double-width characters take two
//! - left-aligned cells, and any cell wider than its column, are written
//!   with a boundary check that swaps the last visible cell for `…`
//!   when the column width or the right edge is reached
//! - rows stop silently once the inner area is full

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use std::collections::HashMap;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker replacing the last visible character of a truncated cell
pub const ELLIPSIS: char = '…';

const COLUMN_GLYPH: char = '│';
const ROW_RULE: char = '─';

/// Something that renders itself into a rectangle of a buffer
pub trait Drawable {
    fn draw(&self, area: Rect, buf: &mut Buffer);
}

/// How the spacer column between two table columns is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnRule {
    Blank,
    Glyph,
}

/// Table contents and styling shared by both table variants
#[derive(Debug, Clone)]
pub struct TableModel {
    title: String,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    row_styles: HashMap<usize, Style>,
    text_style: Style,
    header_style: Style,
    border_style: Style,
    row_separator: bool,
    alignment: Alignment,
    column_widths: Option<Vec<u16>>,
}

impl TableModel {
    /// Create a table with the given header row and no data rows
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: String::new(),
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            row_styles: HashMap::new(),
            text_style: Style::default().fg(Color::White),
            header_style: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            border_style: Style::default(),
            row_separator: false,
            alignment: Alignment::Left,
            column_widths: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replace the data rows
    pub fn rows(mut self, rows: Vec<Vec<String>>) -> Self {
        self.rows = rows;
        self
    }

    /// Append one data row
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Override the style of the data row at `index` (0 = first data row)
    pub fn row_style(mut self, index: usize, style: Style) -> Self {
        self.row_styles.insert(index, style);
        self
    }

    /// Style for data rows without an override
    pub fn text_style(mut self, style: Style) -> Self {
        self.text_style = style;
        self
    }

    pub fn header_style(mut self, style: Style) -> Self {
        self.header_style = style;
        self
    }

    /// Style of the frame, the column glyph and row rules
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Draw a horizontal rule between rows
    pub fn row_separator(mut self, enabled: bool) -> Self {
        self.row_separator = enabled;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Use explicit column widths instead of an even split
    pub fn column_widths(mut self, widths: Vec<u16>) -> Self {
        self.column_widths = Some(widths);
        self
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn data_rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Effective style of the data row at `index`
    pub fn style_of_row(&self, index: usize) -> Style {
        self.row_styles
            .get(&index)
            .copied()
            .unwrap_or(self.text_style)
    }

    /// Wrap in the table variant matching `column_separators`
    pub fn into_drawable(self, column_separators: bool) -> Box<dyn Drawable> {
        if column_separators {
            Box::new(PlainTable::new(self))
        } else {
            Box::new(NoSeparatorTable::new(self))
        }
    }

    fn resolve_widths(&self, inner_width: u16) -> Vec<u16> {
        match &self.column_widths {
            Some(widths) if !widths.is_empty() => widths.clone(),
            _ => {
                let count = self.header.len();
                let each = inner_width / count.max(1) as u16;
                vec![each; count]
            }
        }
    }

    fn draw_with(&self, area: Rect, buf: &mut Buffer, rule: ColumnRule) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style);
        if !self.title.is_empty() {
            block = block.title(format!(" {} ", self.title));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if self.rows.is_empty() || self.header.is_empty() || inner.is_empty() {
            return;
        }

        let widths = self.resolve_widths(inner.width);
        let last_row = self.rows.len();
        let rows = std::iter::once((&self.header, self.header_style)).chain(
            self.rows
                .iter()
                .enumerate()
                .map(|(i, row)| (row, self.style_of_row(i))),
        );

        let mut y = inner.top();
        for (i, (cells, style)) in rows.enumerate() {
            if y >= inner.bottom() {
                break;
            }

            let mut x = inner.left() as usize;
            for (j, width) in widths.iter().enumerate() {
                if x >= inner.right() as usize {
                    break;
                }
                if let Some(text) = cells.get(j) {
                    self.draw_cell(buf, inner, x, y, *width as usize, text, style);
                }
                x += *width as usize + 1;
                if rule == ColumnRule::Glyph && j + 1 < widths.len() {
                    put(buf, inner, x - 1, y, COLUMN_GLYPH, self.border_style);
                }
            }

            y += 1;

            if self.row_separator && y < inner.bottom() && i != last_row {
                for rx in inner.left()..inner.right() {
                    put(buf, inner, rx as usize, y, ROW_RULE, self.border_style);
                }
                y += 1;
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_cell(
        &self,
        buf: &mut Buffer,
        inner: Rect,
        x: usize,
        y: u16,
        width: usize,
        text: &str,
        style: Style,
    ) {
        let right = inner.right() as usize;
        let limit = (x + width).min(right);
        let text_width = text.width();

        if text_width > width || self.alignment == Alignment::Left {
            let mut cx = x;
            let mut last_wide = false;
            for ch in text.chars() {
                let w = ch.width().unwrap_or(0);
                if w == 0 {
                    continue;
                }
                if cx + w > limit {
                    if limit > x {
                        // never leave half of a double-width character behind
                        if cx == limit && last_wide {
                            put(buf, inner, limit - 2, y, ' ', style);
                        }
                        put(buf, inner, limit - 1, y, ELLIPSIS, style);
                    }
                    return;
                }
                put(buf, inner, cx, y, ch, style);
                cx += w;
                last_wide = w > 1;
            }
            return;
        }

        let mut cx = match self.alignment {
            Alignment::Center => x + (width - text_width) / 2,
            Alignment::Right => limit.saturating_sub(text_width),
            Alignment::Left => x,
        };
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0);
            if w > 0 {
                put(buf, inner, cx, y, ch, style);
                cx += w;
            }
        }
    }
}

/// Write one character, ignoring any that would not fit entirely inside
/// `clip`. The cells covered by a double-width character are blanked.
fn put(buf: &mut Buffer, clip: Rect, x: usize, y: u16, ch: char, style: Style) {
    let w = ch.width().unwrap_or(0).max(1);
    if x < clip.left() as usize || x + w > clip.right() as usize {
        return;
    }
    if y < clip.top() || y >= clip.bottom() {
        return;
    }
    if let Some(cell) = buf.cell_mut((x as u16, y)) {
        cell.set_char(ch).set_style(style);
    }
    for k in 1..w {
        if let Some(cell) = buf.cell_mut(((x + k) as u16, y)) {
            cell.set_char(' ').set_style(style);
        }
    }
}

/// Table with a `│` between columns
#[derive(Debug, Clone)]
pub struct PlainTable {
    model: TableModel,
}

impl PlainTable {
    pub fn new(model: TableModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &TableModel {
        &self.model
    }
}

impl Drawable for PlainTable {
    fn draw(&self, area: Rect, buf: &mut Buffer) {
        self.model.draw_with(area, buf, ColumnRule::Glyph);
    }
}

/// Table whose columns are separated by blank space only
#[derive(Debug, Clone)]
pub struct NoSeparatorTable {
    model: TableModel,
}

impl NoSeparatorTable {
    pub fn new(model: TableModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &TableModel {
        &self.model
    }
}

impl Drawable for NoSeparatorTable {
    fn draw(&self, area: Rect, buf: &mut Buffer) {
        self.model.draw_with(area, buf, ColumnRule::Blank);
    }
}
