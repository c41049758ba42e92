pub mod canvas;
pub mod config;
pub mod error;
pub mod layout;
pub mod page;
pub mod position;
pub mod source;
pub mod tile;
pub mod view;

pub use canvas::{Canvas, Color, PageStyle};
pub use config::{AnimationConfig, DeckConfig, GridConfig, UiConfig};
pub use error::{Error, Result};
pub use layout::{GridGeometry, GridPacker, Rect, Segment};
pub use page::{paginate, LayoutOverflow, Page};
pub use position::{AnimationParams, Direction, PositionManager};
pub use tile::{NewsTile, Tile};
pub use view::PageView;
