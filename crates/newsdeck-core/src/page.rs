//! A single screen of packed tiles.

use std::fmt;

use crate::canvas::{Canvas, PageStyle};
use crate::layout::{GridGeometry, GridPacker, Rect};
use crate::tile::Tile;

/// Returned when a tile does not fit on a page. Carries the tile back so the
/// caller can retry it on a fresh page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOverflow<T>(pub T);

impl<T> LayoutOverflow<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Display for LayoutOverflow<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("page has no room for tile")
    }
}

/// One page of tiles plus the packer that laid them out.
///
/// Tiles are handles; index `i` of [`Page::tiles`] matches rectangle `i` of
/// [`Page::rects`].
#[derive(Debug, Clone)]
pub struct Page<T> {
    packer: GridPacker,
    tiles: Vec<T>,
    completed: bool,
}

impl<T> Page<T> {
    pub fn new(geometry: GridGeometry) -> Self {
        Self {
            packer: GridPacker::new(geometry),
            tiles: Vec::new(),
            completed: false,
        }
    }

    pub fn geometry(&self) -> &GridGeometry {
        self.packer.geometry()
    }

    pub fn tiles(&self) -> &[T] {
        &self.tiles
    }

    pub fn rects(&self) -> &[Rect] {
        self.packer.rects()
    }

    pub fn packer(&self) -> &GridPacker {
        &self.packer
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile under a point in page coordinates
    pub fn tile_at(&self, x: i32, y: i32) -> Option<&T> {
        self.packer.hit_test(x, y).map(|index| &self.tiles[index])
    }

    /// Stretch the last tile over the rest of its row. Runs at most once;
    /// after that the page layout is frozen.
    pub fn complete(&mut self) {
        if !self.completed {
            self.packer.complete();
            self.completed = true;
        }
    }
}

impl<T: Tile> Page<T> {
    /// Add a tile in arrival order
    pub fn add(&mut self, tile: T) -> Result<(), LayoutOverflow<T>> {
        if self.packer.place(tile.has_large_form()) {
            self.tiles.push(tile);
            Ok(())
        } else {
            Err(LayoutOverflow(tile))
        }
    }

    /// Finish the last row on first use, then draw delimiters and tiles
    pub fn draw<C: Canvas<T> + ?Sized>(&mut self, canvas: &mut C, style: &PageStyle) {
        self.complete();

        for segment in self.packer.delimiters() {
            canvas.draw_line(segment, style.delimiter, style.delimiter_stroke);
        }

        for (tile, rect) in self.tiles.iter().zip(self.packer.rects()) {
            canvas.draw_tile(*rect, tile);
        }
    }
}

/// Split tiles into pages: fill a page until a tile does not fit, then start
/// a new page and retry that tile there.
pub fn paginate<T, I>(tiles: I, geometry: GridGeometry) -> Vec<Page<T>>
where
    T: Tile,
    I: IntoIterator<Item = T>,
{
    let mut pages = Vec::new();
    let mut current = Page::new(geometry);

    for tile in tiles {
        let tile = match current.add(tile) {
            Ok(()) => continue,
            Err(LayoutOverflow(tile)) => tile,
        };

        // Not even an empty page can hold it
        if !GridPacker::new(geometry).place(tile.has_large_form()) {
            tracing::warn!(
                "Skipping tile that cannot fit a {}x{} grid",
                geometry.rows,
                geometry.columns
            );
            continue;
        }

        pages.push(std::mem::replace(&mut current, Page::new(geometry)));
        if current.add(tile).is_err() {
            tracing::warn!("Fresh page rejected a tile that fits an empty grid");
        }
    }

    if !current.is_empty() {
        pages.push(current);
    }

    tracing::debug!("Packed tiles into {} pages", pages.len());
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::testing::RecordingCanvas;
    use crate::layout::Segment;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        wide: bool,
    }

    impl Tile for Item {
        fn has_large_form(&self) -> bool {
            self.wide
        }
    }

    impl fmt::Display for Item {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.name)
        }
    }

    fn normal(name: &'static str) -> Item {
        Item { name, wide: false }
    }

    fn wide(name: &'static str) -> Item {
        Item { name, wide: true }
    }

    fn geometry() -> GridGeometry {
        GridGeometry::new(5, 2, 100, 50)
    }

    #[test]
    fn test_add_returns_tile_on_overflow() {
        let mut page = Page::new(geometry());
        for _ in 0..10 {
            page.add(normal("n")).unwrap();
        }
        let err = page.add(wide("w")).unwrap_err();
        assert_eq!(err.into_inner(), wide("w"));
        assert_eq!(page.len(), 10);
    }

    #[test]
    fn test_accessors_need_no_tile_bound() {
        // Hosts can inspect pages of any handle type, e.g. from generic code
        let mut page: Page<String> = Page::new(geometry());
        assert!(page.is_empty());
        assert_eq!(page.len(), 0);
        assert!(page.tiles().is_empty());
        assert!(page.rects().is_empty());
        assert_eq!(page.tile_at(10, 10), None);
        page.complete();
        assert_eq!(page.geometry().cell_width, 100);
    }

    #[test]
    fn test_tile_at() {
        let mut page = Page::new(geometry());
        page.add(normal("a")).unwrap();
        page.add(normal("b")).unwrap();
        page.add(wide("c")).unwrap();

        assert_eq!(page.tile_at(150, 25).map(|t| t.name), Some("b"));
        assert_eq!(page.tile_at(50, 120).map(|t| t.name), Some("c"));
        assert_eq!(page.tile_at(50, 240), None);
    }

    #[test]
    fn test_draw_completes_once_then_draws() {
        let mut page = Page::new(geometry());
        page.add(normal("a")).unwrap();
        page.add(normal("b")).unwrap();
        page.add(normal("c")).unwrap();

        let mut canvas = RecordingCanvas::default();
        page.draw(&mut canvas, &PageStyle::default());

        let tiles = canvas.tiles();
        assert_eq!(tiles.len(), 3);
        assert_eq!(tiles[2], (Rect::new(0, 50, 200, 100), 0.0, "c".to_string()));

        // "c" now owns the whole second row, so no vertical line there
        assert!(!canvas.lines().contains(&Segment::new(100, 50, 100, 100)));
        assert!(canvas.lines().contains(&Segment::new(100, 0, 100, 50)));

        let mut again = RecordingCanvas::default();
        page.draw(&mut again, &PageStyle::default());
        assert_eq!(again.ops, canvas.ops);
    }

    #[test]
    fn test_paginate_starts_new_page_on_overflow() {
        let mut tiles: Vec<Item> = (0..9).map(|_| normal("n")).collect();
        tiles.push(wide("w"));
        tiles.push(normal("tail"));

        let pages = paginate(tiles, geometry());
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].len(), 9);
        assert_eq!(pages[1].tiles()[0], wide("w"));
        assert_eq!(pages[1].tiles()[1], normal("tail"));
        assert_eq!(pages[1].packer().cell(2, 0), Some(1));
    }

    #[test]
    fn test_paginate_mixed_sequence() {
        let tiles = vec![
            wide("w0"),
            normal("n1"),
            normal("n2"),
            wide("w3"),
            normal("n4"),
            wide("w5"),
            normal("n6"),
        ];
        let pages = paginate(tiles, geometry());
        assert_eq!(pages.len(), 2);
        let first: Vec<_> = pages[0].tiles().iter().map(|t| t.name).collect();
        assert_eq!(first, vec!["w0", "n1", "n2", "w3"]);
        let second: Vec<_> = pages[1].tiles().iter().map(|t| t.name).collect();
        assert_eq!(second, vec!["n4", "w5", "n6"]);
        // "n4" was stretched over the first row when "w5" landed below it
        assert_eq!(pages[1].rects()[0], Rect::new(0, 0, 200, 50));
    }

    #[test]
    fn test_paginate_empty() {
        let pages: Vec<Page<Item>> = paginate(Vec::new(), geometry());
        assert!(pages.is_empty());
    }

    #[test]
    fn test_paginate_skips_tile_no_page_can_hold() {
        let narrow = GridGeometry::new(5, 1, 100, 50);
        let pages = paginate(vec![normal("a"), wide("w"), normal("b")], narrow);
        assert_eq!(pages.len(), 1);
        let names: Vec<_> = pages[0].tiles().iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
