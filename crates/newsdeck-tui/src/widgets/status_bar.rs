use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Dots are used up to this many pages, a counter beyond it
const MAX_DOTS: usize = 12;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let style = app.theme.bar();

        let pages = page_indicator(app.current_page, app.view.page_count());
        let detail = if let Some(msg) = &app.status_message {
            msg.clone()
        } else if let Some(tile) = &app.selected {
            tile.title.clone()
        } else {
            format!("{} tiles", app.tiles.len())
        };
        let status_text = format!(" {} | {}", pages, detail);

        let help_hint = " q:quit h/l:page g/G:first/last ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(status_text, style),
            Span::styled(" ".repeat(padding_len), style),
            Span::styled(help_hint, style),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}

/// "● ○ ○" for short decks, "3/40" for long ones
fn page_indicator(current: usize, count: usize) -> String {
    if count == 0 {
        return "empty".to_string();
    }
    if count > MAX_DOTS {
        return format!("{}/{}", current + 1, count);
    }
    (0..count)
        .map(|page| if page == current { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}
