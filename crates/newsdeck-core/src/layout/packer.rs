//! Arrival-order grid packing.
//!
//! Tiles are placed one at a time into the first slot that fits. Normal tiles
//! take a single cell; wide tiles take a 2x2 block. The packer records which
//! tile owns every cell and a bounding rectangle per tile, indexed in arrival
//! order, so the page can hit-test and draw without re-deriving the layout.

use super::geometry::{GridGeometry, Rect, Segment};

#[derive(Debug, Clone)]
pub struct GridPacker {
    geometry: GridGeometry,
    /// Row-major occupancy, `None` for an empty cell
    cells: Vec<Option<usize>>,
    /// Bounding rectangle per placed tile
    rects: Vec<Rect>,
}

impl GridPacker {
    pub fn new(geometry: GridGeometry) -> Self {
        Self {
            geometry,
            cells: vec![None; geometry.cell_count()],
            rects: Vec::new(),
        }
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Number of placed tiles
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Index of the tile occupying a cell, if any
    pub fn cell(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.geometry.rows && column < self.geometry.columns {
            self.cells[row * self.geometry.columns + column]
        } else {
            None
        }
    }

    fn set_cell(&mut self, row: usize, column: usize, index: usize) {
        let columns = self.geometry.columns;
        self.cells[row * columns + column] = Some(index);
    }

    /// Occupancy as one vector per row
    pub fn occupancy(&self) -> Vec<Vec<Option<usize>>> {
        self.cells
            .chunks(self.geometry.columns.max(1))
            .map(|row| row.to_vec())
            .collect()
    }

    /// Place the next tile. Returns false, leaving the grid untouched, when
    /// the page has no room for it.
    pub fn place(&mut self, wide: bool) -> bool {
        if wide {
            self.place_wide()
        } else {
            self.place_normal()
        }
    }

    fn place_normal(&mut self) -> bool {
        let Some(slot) = self.cells.iter().position(Option::is_none) else {
            return false;
        };

        let columns = self.geometry.columns;
        let (row, column) = (slot / columns, slot % columns);
        let index = self.rects.len();
        self.cells[slot] = Some(index);
        self.rects.push(self.geometry.span(row, column, 1, 1));
        true
    }

    /// First top-left cell, row-major, whose own cell and diagonal
    /// bottom-right cell are both empty. The other two corners are not
    /// inspected.
    fn find_wide_slot(&self) -> Option<(usize, usize)> {
        let GridGeometry { rows, columns, .. } = self.geometry;
        if rows < 2 || columns < 2 {
            return None;
        }

        (0..rows - 1)
            .flat_map(|row| (0..columns - 1).map(move |column| (row, column)))
            .find(|&(row, column)| {
                self.cell(row, column).is_none() && self.cell(row + 1, column + 1).is_none()
            })
    }

    fn place_wide(&mut self) -> bool {
        let Some((row, column)) = self.find_wide_slot() else {
            return false;
        };

        // Stretch the tile sitting above-left over the empty cell above-right
        if row > 0 && self.cell(row - 1, column + 1).is_none() {
            if let Some(above) = self.cell(row - 1, column) {
                self.set_cell(row - 1, column + 1, above);
                self.rects[above].right += self.geometry.cell_width;
                tracing::debug!(
                    "Re-expanded tile {} over cell ({}, {})",
                    above,
                    row - 1,
                    column + 1
                );
            }
        }

        let index = self.rects.len();
        for r in row..row + 2 {
            for c in column..column + 2 {
                self.set_cell(r, c, index);
            }
        }
        self.rects.push(self.geometry.span(row, column, 2, 2));
        true
    }

    /// Widen the last tile across the empty cells to its right so the final
    /// row does not end in a dangling delimiter. Returns whether anything
    /// changed; a second call is a no-op.
    ///
    /// The tile grows only up to the first column another tile already owns
    /// in any of its rows, so it may stop short of the right edge. It never
    /// takes cells from a tile placed earlier.
    pub fn complete(&mut self) -> bool {
        let GridGeometry {
            columns,
            cell_width,
            cell_height,
            ..
        } = self.geometry;
        if cell_width <= 0 || cell_height <= 0 {
            return false;
        }
        let Some(last) = self.rects.len().checked_sub(1) else {
            return false;
        };

        let rect = self.rects[last];
        if rect.right >= self.geometry.width() {
            return false;
        }

        let row_start = (rect.top / cell_height) as usize;
        let row_end = (rect.bottom / cell_height) as usize;
        let column_start = (rect.right / cell_width) as usize;

        // Stop at the first column some row of the span already hands to
        // another tile
        let column_end = (column_start..columns)
            .find(|&c| (row_start..row_end).any(|r| self.cell(r, c).is_some()))
            .unwrap_or(columns);
        if column_end == column_start {
            return false;
        }

        for r in row_start..row_end {
            for c in column_start..column_end {
                self.set_cell(r, c, last);
            }
        }
        self.rects[last].right = column_end as i32 * cell_width;
        tracing::debug!(
            "Completed last tile {} to column {}",
            last,
            column_end
        );
        true
    }

    /// Border segments between cells owned by different tiles (or between an
    /// owned and an empty cell). Horizontal segments first, then vertical.
    pub fn delimiters(&self) -> Vec<Segment> {
        let GridGeometry {
            rows,
            columns,
            cell_width: cw,
            cell_height: ch,
        } = self.geometry;
        let mut segments = Vec::new();

        for i in 1..rows {
            for j in 0..columns {
                if self.cell(i - 1, j) != self.cell(i, j) {
                    let (x, y) = (j as i32 * cw, i as i32 * ch);
                    segments.push(Segment::new(x, y, x + cw, y));
                }
            }
        }

        for j in 1..columns {
            for i in 0..rows {
                if self.cell(i, j - 1) != self.cell(i, j) {
                    let (x, y) = (j as i32 * cw, i as i32 * ch);
                    segments.push(Segment::new(x, y, x, y + ch));
                }
            }
        }

        segments
    }

    /// First tile, in insertion order, whose rectangle contains the point
    pub fn hit_test(&self, x: i32, y: i32) -> Option<usize> {
        self.rects.iter().position(|rect| rect.contains(x, y))
    }
}
