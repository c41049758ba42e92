//! Abstract drawing surface pages render onto.
//!
//! The core never draws pixels itself. A host implements [`Canvas`] for its
//! backend (a terminal buffer, a framebuffer, a test recorder) and the page
//! view drives it with rectangles and line segments computed by the packer.

use crate::layout::{Rect, Segment};

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string
    /// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            // Short form: RGB -> RRGGBB
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                Some(Self::rgb(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            _ => None,
        }
    }
}

/// Colors and stroke used when a page draws its chrome
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageStyle {
    pub background: Color,
    pub delimiter: Color,
    pub delimiter_stroke: f32,
}

impl Default for PageStyle {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            delimiter: Color::rgb(0xcc, 0xcc, 0xcc),
            delimiter_stroke: 1.0,
        }
    }
}

/// Drawing surface with a save/restore translation stack.
///
/// `T` is the tile handle type the host knows how to render.
pub trait Canvas<T: ?Sized> {
    /// Clear the whole surface
    fn fill_background(&mut self, color: Color);

    fn draw_line(&mut self, segment: Segment, color: Color, stroke_width: f32);

    /// Render a tile's content inside `rect`
    fn draw_tile(&mut self, rect: Rect, tile: &T);

    /// Push the current translation
    fn save(&mut self);

    /// Pop back to the last saved translation
    fn restore(&mut self);

    /// Shift subsequent drawing by `(dx, dy)` in canvas units
    fn translate(&mut self, dx: f64, dy: f64);
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_full_and_short() {
        assert_eq!(Color::from_hex("#ff8000"), Some(Color::rgb(255, 128, 0)));
        assert_eq!(Color::from_hex("ff8000"), Some(Color::rgb(255, 128, 0)));
        assert_eq!(Color::from_hex("#f80"), Some(Color::rgb(255, 136, 0)));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("zzzzzz"), None);
        assert_eq!(Color::from_hex(""), None);
    }
}
