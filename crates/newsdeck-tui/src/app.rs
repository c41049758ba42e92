use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use newsdeck_core::{paginate, DeckConfig, Direction, NewsTile, Page, PageView};
use ratatui::layout::Rect;

use crate::input::Action;
use crate::theme::Theme;

/// In-progress mouse drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragState {
    last_x: u16,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<DeckConfig>,
    pub theme: Theme,
    /// Every tile in source order; pages are rebuilt from this on resize
    pub tiles: Vec<Arc<NewsTile>>,
    pub view: PageView<Arc<NewsTile>>,
    /// Screen area the deck was last drawn into
    pub deck_area: Rect,
    /// Page nearest to the position at the last draw
    pub current_page: usize,
    /// Tile picked with the mouse
    pub selected: Option<Arc<NewsTile>>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Set by the last draw while a page animation is running
    pub needs_frame: bool,
    initial_page: usize,
    laid_out: bool,
    drag: Option<DragState>,
}

impl App {
    pub fn new(
        config: Arc<DeckConfig>,
        theme: Theme,
        tiles: Vec<NewsTile>,
        initial_page: usize,
    ) -> Self {
        let view = PageView::from_config(&config).with_style(theme.page_style());
        Self {
            config,
            theme,
            tiles: tiles.into_iter().map(Arc::new).collect(),
            view,
            deck_area: Rect::default(),
            current_page: initial_page,
            selected: None,
            should_quit: false,
            status_message: None,
            needs_frame: false,
            initial_page,
            laid_out: false,
            drag: None,
        }
    }

    /// Re-paginate for a new deck area. The page holding the first tile
    /// that was visible before the resize stays in view.
    pub fn resize_deck(&mut self, area: Rect, now: Instant) {
        let size = (area.width as u32, area.height as u32);
        self.deck_area = area;
        if self.laid_out && self.view.viewport() == size {
            return;
        }

        let anchor = if self.laid_out {
            let page = self.view.current_page(now);
            Some(first_tile_of(self.view.pages(), page))
        } else {
            None
        };

        self.view.on_viewport_resized(size.0, size.1);
        let pages = paginate(self.tiles.iter().cloned(), *self.view.geometry());
        let start = match anchor {
            Some(tile) => page_containing(&pages, tile),
            None => self.initial_page,
        };

        tracing::debug!(
            "Laid out {} tiles on {} pages for {}x{}",
            self.tiles.len(),
            pages.len(),
            size.0,
            size.1
        );
        self.view.initialize(pages, start);
        self.current_page = self.view.current_page(now);
        self.laid_out = true;
        self.drag = None;
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::PageLeft => self.view.on_fling(Direction::Left, now),
            Action::PageRight => self.view.on_fling(Direction::Right, now),
            Action::JumpToFirst => self.view.jump_to(0, now),
            Action::JumpToLast => {
                let last = self.view.page_count().saturating_sub(1);
                self.view.jump_to(last, now);
            }
            Action::ClearSelection => {
                self.selected = None;
                self.clear_status();
            }
            Action::None => {}
        }

        if self.view.positions().is_animating() {
            self.needs_frame = true;
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some((x, y)) = self.deck_point(mouse.column, mouse.row) else {
                    return;
                };
                if let Some(tile) = self.view.on_down(x, y, now).cloned() {
                    tracing::debug!("Selected tile {}", tile.id);
                    self.set_status(tile.url.clone().unwrap_or_else(|| tile.title.clone()));
                    self.selected = Some(tile);
                }
                self.drag = Some(DragState {
                    last_x: mouse.column,
                });
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(drag) = self.drag.as_mut() {
                    let distance = drag.last_x as f64 - mouse.column as f64;
                    drag.last_x = mouse.column;
                    self.view.on_drag_delta(distance, now);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.drag.take().is_some() {
                    self.needs_frame = self.view.on_drag_end(now);
                }
            }
            MouseEventKind::ScrollLeft => self.handle_action(Action::PageLeft, now),
            MouseEventKind::ScrollRight => self.handle_action(Action::PageRight, now),
            _ => {}
        }
    }

    /// Screen cell to deck coordinates
    fn deck_point(&self, column: u16, row: u16) -> Option<(i32, i32)> {
        let area = self.deck_area;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        inside.then(|| ((column - area.x) as i32, (row - area.y) as i32))
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

/// Index into the full tile list of the first tile on `page`
fn first_tile_of<T>(pages: &[Page<T>], page: usize) -> usize {
    pages.iter().take(page).map(|p| p.len()).sum()
}

/// Page holding the tile at `tile_index` in pagination order
fn page_containing<T>(pages: &[Page<T>], tile_index: usize) -> usize {
    let mut seen = 0;
    for (index, page) in pages.iter().enumerate() {
        seen += page.len();
        if tile_index < seen {
            return index;
        }
    }
    pages.len().saturating_sub(1)
}
