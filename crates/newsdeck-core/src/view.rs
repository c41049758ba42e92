//! Horizontally paged deck: the pages plus the position driving them.

use std::time::Instant;

use crate::canvas::{Canvas, PageStyle};
use crate::config::{DeckConfig, GridConfig};
use crate::layout::GridGeometry;
use crate::page::{paginate, Page};
use crate::position::{AnimationParams, Direction, PositionManager};
use crate::tile::Tile;

/// Orchestrates drawing and input for a deck of pages.
///
/// At most two pages are visible at once: page `floor(position)` and the one
/// to its right. The viewport is measured in canvas units.
#[derive(Debug, Clone)]
pub struct PageView<T> {
    pages: Vec<Page<T>>,
    positions: PositionManager,
    grid: GridConfig,
    geometry: GridGeometry,
    viewport: (u32, u32),
    style: PageStyle,
}

impl<T: Tile> PageView<T> {
    pub fn new(grid: GridConfig, params: AnimationParams) -> Self {
        Self {
            pages: Vec::new(),
            positions: PositionManager::new(params),
            grid,
            geometry: GridGeometry::from_viewport(0, 0, &grid),
            viewport: (0, 0),
            style: PageStyle::default(),
        }
    }

    pub fn from_config(config: &DeckConfig) -> Self {
        Self::new(config.grid, AnimationParams::from(&config.animation))
    }

    pub fn with_style(mut self, style: PageStyle) -> Self {
        self.style = style;
        self
    }

    /// Replace the deck and settle on `start_index`
    pub fn initialize(&mut self, pages: Vec<Page<T>>, start_index: usize) {
        self.pages = pages;
        self.positions.initialize(self.pages.len(), start_index);
    }

    /// Pack `tiles` with the current geometry and show them from `start_index`
    pub fn set_tiles<I>(&mut self, tiles: I, start_index: usize)
    where
        I: IntoIterator<Item = T>,
    {
        let pages = paginate(tiles, self.geometry);
        self.initialize(pages, start_index);
    }

    /// Adopt a new viewport size. Only pages packed after this call use the
    /// new cell size; existing pages keep the geometry they were built with.
    pub fn on_viewport_resized(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        self.geometry = GridGeometry::from_viewport(width, height, &self.grid);
        tracing::debug!(
            "Viewport {}x{}, cell {}x{}",
            width,
            height,
            self.geometry.cell_width,
            self.geometry.cell_height
        );
    }

    /// Draw the visible pages. Returns true while an animation is running
    /// and the host should schedule another frame.
    pub fn draw<C: Canvas<T> + ?Sized>(&mut self, canvas: &mut C, now: Instant) -> bool {
        canvas.fill_background(self.style.background);

        let position = self.positions.current_position(now);
        let width = self.viewport_width();
        let left = position.floor();
        let offset = (left - position) * width;

        canvas.save();
        canvas.translate(offset, 0.0);
        if left >= 0.0 {
            if let Some(page) = self.pages.get_mut(left as usize) {
                page.draw(canvas, &self.style);
            }
        }

        canvas.translate(width, 0.0);
        let right = left + 1.0;
        if right >= 0.0 {
            if let Some(page) = self.pages.get_mut(right as usize) {
                page.draw(canvas, &self.style);
            }
        }
        canvas.restore();

        self.positions.is_animating()
    }

    /// Follow the pointer by `distance_x` canvas units (positive moves
    /// towards later pages)
    pub fn on_drag_delta(&mut self, distance_x: f64, now: Instant) {
        self.positions
            .scroll(distance_x, self.viewport_width(), now);
    }

    /// Pointer released; returns whether a snap animation is running
    pub fn on_drag_end(&mut self, now: Instant) -> bool {
        self.positions.resume(now)
    }

    pub fn on_fling(&mut self, direction: Direction, now: Instant) {
        self.positions.animate(direction, true, now);
    }

    pub fn jump_to(&mut self, page: usize, now: Instant) {
        self.positions.animate_to(page, now);
    }

    /// Pointer pressed at `(x, y)` in viewport coordinates. Stops any
    /// animation and returns the tile under the pointer.
    pub fn on_down(&mut self, x: i32, y: i32, now: Instant) -> Option<&T> {
        self.positions.pause(now);

        let position = self.positions.current_position(now);
        let width = self.viewport_width();
        let left = position.floor();
        let offset = (left - position) * width;

        // Undo the page translation to find which page the point lands on
        let local = x as f64 - offset;
        let (page_index, page_x) = if local < width {
            (left, local)
        } else {
            (left + 1.0, local - width)
        };

        if page_index < 0.0 {
            return None;
        }
        let page = self.pages.get(page_index as usize)?;
        page.tile_at(page_x.floor() as i32, y)
    }

    pub fn pages(&self) -> &[Page<T>] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page nearest to the current position
    pub fn current_page(&mut self, now: Instant) -> usize {
        self.positions.page_index(now)
    }

    pub fn positions(&self) -> &PositionManager {
        &self.positions
    }

    pub fn positions_mut(&mut self) -> &mut PositionManager {
        &mut self.positions
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    #[inline]
    fn viewport_width(&self) -> f64 {
        self.viewport.0 as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::testing::{Op, RecordingCanvas};
    use crate::canvas::Color;
    use std::fmt;
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(String);

    impl Tile for Item {
        fn has_large_form(&self) -> bool {
            false
        }
    }

    impl fmt::Display for Item {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(&self.0)
        }
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    /// Three pages of ten 100x50 cells each, items named "p<page>-<n>"
    fn view() -> PageView<Item> {
        let mut view = PageView::new(GridConfig::default(), AnimationParams::default());
        view.on_viewport_resized(200, 250);
        let tiles = (0..3).flat_map(|page| (0..10).map(move |n| Item(format!("p{}-{}", page, n))));
        view.set_tiles(tiles, 0);
        view
    }

    fn drawn_tiles(canvas: &RecordingCanvas, name: &str) -> Vec<f64> {
        canvas
            .tiles()
            .into_iter()
            .filter(|(_, _, tile)| tile == name)
            .map(|(_, dx, _)| dx)
            .collect()
    }

    #[test]
    fn test_pagination_uses_viewport_geometry() {
        let view = view();
        assert_eq!(view.page_count(), 3);
        assert_eq!(view.geometry().cell_width, 100);
        assert_eq!(view.geometry().cell_height, 50);
    }

    #[test]
    fn test_draw_settled_page() {
        let t0 = Instant::now();
        let mut view = view();
        let mut canvas = RecordingCanvas::default();

        assert!(!view.draw(&mut canvas, t0));
        assert_eq!(canvas.ops[0], Op::Background(PageStyle::default().background));
        assert_eq!(drawn_tiles(&canvas, "p0-0"), vec![0.0]);
        // The right-hand neighbour is laid out one viewport further along
        assert_eq!(drawn_tiles(&canvas, "p1-0"), vec![200.0]);
        assert!(drawn_tiles(&canvas, "p2-0").is_empty());
        assert_eq!(canvas.depth(), 0);
    }

    #[test]
    fn test_draw_mid_animation_requests_frames() {
        let t0 = Instant::now();
        let mut view = view();
        view.on_fling(Direction::Right, t0);

        let mut canvas = RecordingCanvas::default();
        assert!(view.draw(&mut canvas, t0 + ms(150)));
        let dx = drawn_tiles(&canvas, "p0-0");
        assert!((dx[0] + 100.0).abs() < 1e-6);
        let dx = drawn_tiles(&canvas, "p1-0");
        assert!((dx[0] - 100.0).abs() < 1e-6);

        let mut canvas = RecordingCanvas::default();
        assert!(!view.draw(&mut canvas, t0 + ms(300)));
        assert_eq!(drawn_tiles(&canvas, "p1-0"), vec![0.0]);
        assert_eq!(drawn_tiles(&canvas, "p2-0"), vec![200.0]);
        assert_eq!(view.current_page(t0 + ms(300)), 1);
    }

    #[test]
    fn test_draw_overscrolled_left_shows_first_page_only() {
        let t0 = Instant::now();
        let mut view = view();
        view.on_drag_delta(-40.0, t0);

        let mut canvas = RecordingCanvas::default();
        view.draw(&mut canvas, t0);
        let dx = drawn_tiles(&canvas, "p0-0");
        assert_eq!(dx.len(), 1);
        assert!((dx[0] - 40.0).abs() < 1e-6);
        assert!(drawn_tiles(&canvas, "p1-0").is_empty());
    }

    #[test]
    fn test_drag_then_release_snaps_to_nearest() {
        let t0 = Instant::now();
        let mut view = view();
        view.on_drag_delta(130.0, t0);
        assert!(view.on_drag_end(t0));
        assert_eq!(view.positions().target_page(), Some(1));

        let mut canvas = RecordingCanvas::default();
        assert!(!view.draw(&mut canvas, t0 + ms(300)));
        assert_eq!(view.current_page(t0 + ms(300)), 1);
    }

    #[test]
    fn test_release_on_settled_page_needs_no_frames() {
        let t0 = Instant::now();
        let mut view = view();
        assert!(!view.on_drag_end(t0));
    }

    #[test]
    fn test_on_down_hits_visible_tile() {
        let t0 = Instant::now();
        let mut view = view();

        assert_eq!(view.on_down(150, 10, t0).map(|t| t.0.as_str()), Some("p0-1"));
        assert_eq!(view.on_down(50, 240, t0).map(|t| t.0.as_str()), Some("p0-8"));
    }

    #[test]
    fn test_on_down_pauses_and_maps_into_right_page() {
        let t0 = Instant::now();
        let mut view = view();
        view.on_fling(Direction::Right, t0);

        // Position 0.5: page 0 is shifted 100 left, page 1 starts at x=100
        let hit = view.on_down(150, 60, t0 + ms(150)).map(|t| t.0.clone());
        assert_eq!(hit.as_deref(), Some("p1-2"));
        assert!(!view.positions().is_animating());

        let hit = view.on_down(50, 60, t0 + ms(200)).map(|t| t.0.clone());
        assert_eq!(hit.as_deref(), Some("p0-3"));
    }

    #[test]
    fn test_on_down_outside_deck() {
        let t0 = Instant::now();
        let mut view = view();
        view.on_drag_delta(-40.0, t0);
        assert!(view.on_down(10, 10, t0).is_none());
    }

    #[test]
    fn test_jump_to_last_page() {
        let t0 = Instant::now();
        let mut view = view();
        view.jump_to(2, t0);
        assert_eq!(view.positions().target_page(), Some(2));
        let mut canvas = RecordingCanvas::default();
        assert!(!view.draw(&mut canvas, t0 + ms(600)));
        assert_eq!(drawn_tiles(&canvas, "p2-0"), vec![0.0]);
    }

    #[test]
    fn test_resize_only_affects_later_pages() {
        let mut view = view();
        view.on_viewport_resized(400, 500);
        assert_eq!(view.pages()[0].geometry().cell_width, 100);
        assert_eq!(view.geometry().cell_width, 200);

        view.set_tiles(vec![Item("solo".into())], 0);
        assert_eq!(view.pages()[0].geometry().cell_width, 200);
    }

    #[test]
    fn test_huge_viewport_lays_out_and_draws() {
        let t0 = Instant::now();
        let mut view: PageView<Item> =
            PageView::new(GridConfig::default(), AnimationParams::default());
        view.on_viewport_resized(3_000_000_000, 500);
        view.set_tiles(vec![Item("a".into()), Item("b".into())], 0);
        assert_eq!(view.page_count(), 1);
        assert_eq!(view.geometry().cell_width, i32::MAX / 2);

        let mut canvas = RecordingCanvas::default();
        assert!(!view.draw(&mut canvas, t0));
        assert_eq!(canvas.tiles().len(), 2);
    }

    #[test]
    fn test_empty_deck_draws_background_only() {
        let t0 = Instant::now();
        let mut view: PageView<Item> =
            PageView::new(GridConfig::default(), AnimationParams::default())
                .with_style(PageStyle {
                    background: Color::BLACK,
                    ..PageStyle::default()
                });
        view.on_viewport_resized(200, 250);
        view.initialize(Vec::new(), 3);

        let mut canvas = RecordingCanvas::default();
        assert!(!view.draw(&mut canvas, t0));
        assert_eq!(canvas.ops, vec![Op::Background(Color::BLACK)]);

        view.on_fling(Direction::Right, t0);
        assert_eq!(view.positions().target_page(), Some(0));
    }
}
