use std::time::Instant;

use ratatui::{layout::Rect, Frame};

use crate::app::App;
use crate::canvas::TerminalCanvas;

pub struct DeckWidget;

impl DeckWidget {
    /// Draw the visible pages into `area`, re-paginating first if the area
    /// changed size
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App, now: Instant) {
        app.resize_deck(area, now);

        let selected = app.selected.as_ref().map(|tile| tile.id);
        let mut canvas =
            TerminalCanvas::new(frame.buffer_mut(), area, app.theme).with_selection(selected);
        app.needs_frame = app.view.draw(&mut canvas, now);
        app.current_page = app.view.current_page(now);
    }
}
