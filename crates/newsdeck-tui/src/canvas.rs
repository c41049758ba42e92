//! Deck canvas over a ratatui buffer.
//!
//! One canvas unit is one terminal cell. Everything is clipped to the deck
//! area, so pages sliding in from either side are cut at its edges.

use std::sync::Arc;

use newsdeck_core::{Canvas, Color, NewsTile, Rect as DeckRect, Segment};
use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use uuid::Uuid;

use crate::theme::{tui_color, Theme};

pub struct TerminalCanvas<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    theme: Theme,
    selected: Option<Uuid>,
    offset: (f64, f64),
    stack: Vec<(f64, f64)>,
}

impl<'a> TerminalCanvas<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect, theme: Theme) -> Self {
        Self {
            buf,
            area,
            theme,
            selected: None,
            offset: (0.0, 0.0),
            stack: Vec::new(),
        }
    }

    /// Mark the tile with this id as selected
    pub fn with_selection(mut self, selected: Option<Uuid>) -> Self {
        self.selected = selected;
        self
    }

    /// Translation snapped to whole cells. Flooring keeps two pages one
    /// viewport apart exactly, with no gap or overlap column between them.
    fn origin(&self) -> (i64, i64) {
        (self.offset.0.floor() as i64, self.offset.1.floor() as i64)
    }

    /// Buffer cell at deck coordinates, or None outside the deck area
    fn cell_mut(&mut self, x: i64, y: i64) -> Option<&mut Cell> {
        if x < 0 || y < 0 || x >= self.area.width as i64 || y >= self.area.height as i64 {
            return None;
        }
        self.buf
            .cell_mut((self.area.x + x as u16, self.area.y + y as u16))
    }

    /// Write `text` on one row, at most `width` columns wide
    fn put_text(&mut self, x: i64, y: i64, width: i64, text: &str, style: Style) {
        let mut column = 0i64;
        for ch in text.chars() {
            let char_width = ch.width().unwrap_or(0) as i64;
            if char_width == 0 {
                continue;
            }
            if column + char_width > width {
                break;
            }
            if let Some(cell) = self.cell_mut(x + column, y) {
                cell.set_char(ch).set_style(style);
            }
            for extra in 1..char_width {
                if let Some(cell) = self.cell_mut(x + column + extra, y) {
                    cell.reset();
                    cell.set_style(style);
                }
            }
            column += char_width;
        }
    }

    fn fill_row(&mut self, x: i64, y: i64, width: i64, symbol: char, style: Style) {
        for column in 0..width {
            if let Some(cell) = self.cell_mut(x + column, y) {
                cell.set_char(symbol).set_style(style);
            }
        }
    }

    fn line_cell(&mut self, x: i64, y: i64, symbol: char, color: Color) {
        let crossing = if symbol == '─' { "│" } else { "─" };
        if let Some(cell) = self.cell_mut(x, y) {
            if cell.symbol() == crossing || cell.symbol() == "┼" {
                cell.set_char('┼');
            } else {
                cell.set_char(symbol);
            }
            cell.set_fg(tui_color(color));
        }
    }
}

impl Canvas<Arc<NewsTile>> for TerminalCanvas<'_> {
    fn fill_background(&mut self, color: Color) {
        for y in 0..self.area.height as i64 {
            for x in 0..self.area.width as i64 {
                if let Some(cell) = self.cell_mut(x, y) {
                    cell.reset();
                    cell.set_bg(tui_color(color));
                }
            }
        }
    }

    fn draw_line(&mut self, segment: Segment, color: Color, stroke_width: f32) {
        // Terminal cells have one stroke; zero hides delimiters
        if stroke_width <= 0.0 {
            return;
        }

        let (dx, dy) = self.origin();
        let (x1, y1) = (segment.x1 as i64 + dx, segment.y1 as i64 + dy);
        let (x2, y2) = (segment.x2 as i64 + dx, segment.y2 as i64 + dy);

        if segment.is_horizontal() {
            for x in x1.min(x2)..x1.max(x2) {
                self.line_cell(x, y1, '─', color);
            }
        } else {
            for y in y1.min(y2)..y1.max(y2) {
                self.line_cell(x1, y, '│', color);
            }
        }
    }

    fn draw_tile(&mut self, rect: DeckRect, tile: &Arc<NewsTile>) {
        let (dx, dy) = self.origin();

        // Leave the top row and left column to the delimiters, plus one
        // column of padding on each side
        let left = rect.left as i64 + dx + 2;
        let top = rect.top as i64 + dy + 1;
        let width = rect.width() as i64 - 3;
        let height = rect.height() as i64 - 1;
        if width <= 0 || height <= 0 {
            return;
        }

        let theme = self.theme;
        let mut rows = TileRows::new(top, height);

        if self.selected == Some(tile.id) {
            for y in top..top + height {
                self.put_text(left - 1, y, 1, "▌", theme.fg(theme.accent));
            }
        }

        if tile.image_url.is_some() {
            let band = (height / 3).max(1);
            let style = theme.fg(theme.delimiter);
            for _ in 0..band {
                if let Some(y) = rows.next() {
                    self.fill_row(left, y, width, '░', style);
                }
            }
        }

        let title_style = theme.fg(theme.title).add_modifier(Modifier::BOLD);
        let title_rows = if tile.image_url.is_some() { 3 } else { 2 };
        for line in wrap(&tile.title, width as usize).into_iter().take(title_rows) {
            if let Some(y) = rows.next() {
                self.put_text(left, y, width, &line, title_style);
            }
        }

        let meta = meta_line(tile);
        if !meta.is_empty() {
            if let Some(y) = rows.next() {
                self.put_text(left, y, width, &meta, theme.fg(theme.accent));
            }
        }

        if let Some(summary) = tile.summary.as_deref() {
            for line in wrap(summary, width as usize) {
                let Some(y) = rows.next() else { break };
                self.put_text(left, y, width, &line, theme.fg(theme.text));
            }
        }
    }

    fn save(&mut self) {
        self.stack.push(self.offset);
    }

    fn restore(&mut self) {
        if let Some(offset) = self.stack.pop() {
            self.offset = offset;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.offset.0 += dx;
        self.offset.1 += dy;
    }
}

/// Hands out the rows of a tile from top to bottom
struct TileRows {
    next: i64,
    end: i64,
}

impl TileRows {
    fn new(top: i64, height: i64) -> Self {
        Self {
            next: top,
            end: top + height,
        }
    }
}

impl Iterator for TileRows {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.next >= self.end {
            return None;
        }
        self.next += 1;
        Some(self.next - 1)
    }
}

/// "Source · date", either part optional
fn meta_line(tile: &NewsTile) -> String {
    let date = tile
        .published_at
        .map(|d| d.format("%Y-%m-%d").to_string());
    match (tile.source.as_deref(), date) {
        (Some(source), Some(date)) => format!("{} · {}", source, date),
        (Some(source), None) => source.to_string(),
        (None, Some(date)) => date,
        (None, None) => String::new(),
    }
}

/// Greedy word wrap by display width; words longer than a line are split
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }

    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if current_width > 0 && current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        if current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for ch in word.chars() {
            let char_width = ch.width().unwrap_or(0);
            if current_width + char_width > width && current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += char_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
