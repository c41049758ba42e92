//! Grid layout for a single page
//!
//! - `geometry` - Pixel rectangles, line segments and cell sizing
//! - `packer` - Arrival-order placement of 1x1 and 2x2 tiles into the grid

pub mod geometry;
pub mod packer;

pub use geometry::{GridGeometry, Rect, Segment};
pub use packer::GridPacker;
