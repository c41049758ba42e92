use crate::config::GridConfig;

/// Axis-aligned rectangle in canvas units.
///
/// Containment is half-open: the right and bottom edges belong to the
/// neighbouring rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.left < self.right
            && self.top < self.bottom
            && x >= self.left
            && x < self.right
            && y >= self.top
            && y < self.bottom
    }
}

/// A straight line from `(x1, y1)` to `(x2, y2)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Segment {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.y1 == self.y2
    }
}

/// Grid dimensions plus the cell size derived from the viewport.
///
/// Captured by value when a page is created; a later resize produces a new
/// geometry and leaves existing pages untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub rows: usize,
    pub columns: usize,
    pub cell_width: i32,
    pub cell_height: i32,
}

impl GridGeometry {
    pub fn new(rows: usize, columns: usize, cell_width: i32, cell_height: i32) -> Self {
        Self {
            rows,
            columns,
            cell_width,
            cell_height,
        }
    }

    /// Split a viewport into `grid.columns` x `grid.rows` cells.
    ///
    /// Cell sizes are capped so that the full grid extent still fits in an
    /// `i32`; huge viewports get a smaller grid instead of overflowing.
    pub fn from_viewport(width: u32, height: u32, grid: &GridConfig) -> Self {
        let columns = grid.columns.max(1);
        let rows = grid.rows.max(1);
        let cell_width = (width as usize / columns).min(i32::MAX as usize / columns) as i32;
        let cell_height = (height as usize / rows).min(i32::MAX as usize / rows) as i32;
        Self::new(grid.rows, grid.columns, cell_width, cell_height)
    }

    /// Right edge of the last column
    #[inline]
    pub fn width(&self) -> i32 {
        self.cell_width * self.columns as i32
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.cell_height * self.rows as i32
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Rectangle covering `rows` x `columns` cells from the given top-left cell
    pub fn span(&self, row: usize, column: usize, rows: usize, columns: usize) -> Rect {
        Rect::new(
            column as i32 * self.cell_width,
            row as i32 * self.cell_height,
            (column + columns) as i32 * self.cell_width,
            (row + rows) as i32 * self.cell_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_viewport_divides_evenly() {
        let geometry = GridGeometry::from_viewport(480, 800, &GridConfig::default());
        assert_eq!(geometry.cell_width, 240);
        assert_eq!(geometry.cell_height, 160);
        assert_eq!(geometry.width(), 480);
        assert_eq!(geometry.height(), 800);
    }

    #[test]
    fn test_from_viewport_truncates() {
        let geometry = GridGeometry::from_viewport(101, 52, &GridConfig::default());
        assert_eq!(geometry.cell_width, 50);
        assert_eq!(geometry.cell_height, 10);
        assert_eq!(geometry.width(), 100);
    }

    #[test]
    fn test_from_viewport_caps_huge_viewports() {
        let geometry = GridGeometry::from_viewport(u32::MAX, u32::MAX, &GridConfig::default());
        assert_eq!(geometry.cell_width, i32::MAX / 2);
        assert_eq!(geometry.cell_height, i32::MAX / 5);
        assert!(geometry.width() > 0);
        assert!(geometry.height() > 0);
        assert_eq!(geometry.span(4, 1, 1, 1).right, geometry.width());
        assert_eq!(geometry.span(4, 1, 1, 1).bottom, geometry.height());
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(0, 0, 10, 10);
        assert!(rect.contains(0, 0));
        assert!(rect.contains(9, 9));
        assert!(!rect.contains(10, 5));
        assert!(!rect.contains(5, 10));
        assert!(!rect.contains(-1, 5));
    }

    #[test]
    fn test_empty_rect_contains_nothing() {
        assert!(!Rect::new(0, 0, 0, 0).contains(0, 0));
    }

    #[test]
    fn test_span() {
        let geometry = GridGeometry::new(5, 2, 100, 50);
        assert_eq!(geometry.span(1, 0, 2, 2), Rect::new(0, 50, 200, 150));
        assert_eq!(geometry.span(4, 1, 1, 1), Rect::new(100, 200, 200, 250));
    }
}
