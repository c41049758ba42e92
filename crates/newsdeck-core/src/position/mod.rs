//! Page position engine
//!
//! The deck's scroll state is a single continuous "page position": integers
//! are settled pages, fractions are mid-transition. It is either held still
//! while the user drags or driven by a time-based animation.
//!
//! - `timing` - Pure progress and interpolation helpers
//! - `animation` - One in-flight transition with optional edge bounce
//! - `manager` - Drag/animation mode switching and range enforcement
//!
//! # Usage
//!
//! ```ignore
//! use std::time::Instant;
//! use newsdeck_core::position::{Direction, PositionManager};
//!
//! let mut positions = PositionManager::with_defaults();
//! positions.initialize(page_count, 0);
//!
//! // Finger moved 40 units with a 400 unit wide viewport
//! positions.scroll(40.0, 400.0, Instant::now());
//!
//! // Released with a fling towards the next page
//! positions.animate(Direction::Right, true, Instant::now());
//!
//! // Every frame
//! let position = positions.current_position(Instant::now());
//! ```

pub mod timing;

pub mod animation;
pub mod manager;

pub use animation::{AnimationFrame, AnimationParams, Bounce, Direction, PositionAnimation};
pub use manager::{Mode, PositionManager};
