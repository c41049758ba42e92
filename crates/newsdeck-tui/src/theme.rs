use newsdeck_core::{Color, PageStyle, UiConfig};
use ratatui::style::{Color as TuiColor, Style};

/// Runtime theme resolved from the `[ui]` config section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub delimiter: Color,
    pub title: Color,
    pub text: Color,
    pub accent: Color,
    pub delimiter_stroke: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&UiConfig::default())
    }
}

impl Theme {
    /// Resolve configured hex colors, keeping the built-in color for any
    /// value that does not parse
    pub fn from_config(ui: &UiConfig) -> Self {
        Self {
            background: resolve("background", &ui.background, Color::rgb(0x1d, 0x20, 0x21)),
            delimiter: resolve("delimiter", &ui.delimiter, Color::rgb(0x50, 0x49, 0x45)),
            title: resolve("title", &ui.title, Color::rgb(0xeb, 0xdb, 0xb2)),
            text: resolve("text", &ui.text, Color::rgb(0xa8, 0x99, 0x84)),
            accent: resolve("accent", &ui.accent, Color::rgb(0xd7, 0x99, 0x21)),
            delimiter_stroke: ui.delimiter_stroke,
        }
    }

    /// Chrome colors handed to the page view
    pub fn page_style(&self) -> PageStyle {
        PageStyle {
            background: self.background,
            delimiter: self.delimiter,
            delimiter_stroke: self.delimiter_stroke,
        }
    }

    /// Foreground `color` on the deck background
    pub fn fg(&self, color: Color) -> Style {
        Style::default().fg(tui_color(color)).bg(tui_color(self.background))
    }

    /// Inverted style for the status bar
    pub fn bar(&self) -> Style {
        Style::default()
            .fg(tui_color(self.background))
            .bg(tui_color(self.text))
    }
}

#[inline]
pub fn tui_color(color: Color) -> TuiColor {
    TuiColor::Rgb(color.r, color.g, color.b)
}

fn resolve(name: &str, value: &str, fallback: Color) -> Color {
    Color::from_hex(value).unwrap_or_else(|| {
        tracing::warn!("Invalid color for ui.{}: {:?}, using default", name, value);
        fallback
    })
}
