//! Owner of the deck's page position.
//!
//! The position is either held still (the user is dragging, or nothing is
//! moving) or driven by a [`PositionAnimation`]. Every transition between the
//! two goes through [`PositionManager::to_static`] or
//! [`PositionManager::to_animated`].

use std::time::Instant;

use super::animation::{AnimationFrame, AnimationParams, Direction, PositionAnimation};

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Static(f64),
    Animated(PositionAnimation),
}

/// Page position state machine.
///
/// The position stays within `[-bounce, last_page + bounce]`. An empty deck
/// is treated as a single page for range purposes.
#[derive(Debug, Clone)]
pub struct PositionManager {
    mode: Mode,
    page_count: usize,
    params: AnimationParams,
}

impl Default for PositionManager {
    fn default() -> Self {
        Self::new(AnimationParams::default())
    }
}

impl PositionManager {
    pub fn new(params: AnimationParams) -> Self {
        Self {
            mode: Mode::Static(0.0),
            page_count: 0,
            params,
        }
    }

    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Reset to a settled `start_index` over `page_count` pages
    pub fn initialize(&mut self, page_count: usize, start_index: usize) {
        self.page_count = page_count;
        let start = start_index.min(self.last_page());
        self.to_static(start as f64);
        tracing::debug!("Position reset to page {} of {}", start, page_count);
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    #[inline]
    pub fn last_page(&self) -> usize {
        self.page_count.saturating_sub(1)
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self.mode, Mode::Animated(_))
    }

    /// Page the running animation is heading for
    pub fn target_page(&self) -> Option<usize> {
        match &self.mode {
            Mode::Animated(animation) => Some(animation.target()),
            Mode::Static(_) => None,
        }
    }

    fn to_static(&mut self, position: f64) {
        self.mode = Mode::Static(position);
    }

    fn to_animated(&mut self, animation: PositionAnimation) {
        tracing::debug!(
            "Animating to page {} over {:?} ({:?} bounce)",
            animation.target(),
            animation.duration(),
            animation.bounce()
        );
        self.mode = Mode::Animated(animation);
    }

    /// Position at `now` without finishing the animation
    fn peek(&self, now: Instant) -> f64 {
        match &self.mode {
            Mode::Static(position) => *position,
            Mode::Animated(animation) => animation.sample(now).position(),
        }
    }

    /// Current position. Reading a finished animation settles the manager
    /// back into static mode on the target page.
    pub fn current_position(&mut self, now: Instant) -> f64 {
        let frame = match &self.mode {
            Mode::Static(position) => return *position,
            Mode::Animated(animation) => animation.sample(now),
        };

        match frame {
            AnimationFrame::Running(position) => {
                tracing::trace!("Page position {:.3}", position);
                position
            }
            AnimationFrame::Finished(position) => {
                tracing::debug!("Animation settled on page {}", position);
                self.to_static(position);
                position
            }
        }
    }

    /// Nearest settled page to the current position
    pub fn page_index(&mut self, now: Instant) -> usize {
        let position = self.current_position(now);
        let nearest = (position + 0.5).floor().max(0.0) as usize;
        nearest.min(self.last_page())
    }

    /// Follow a drag of `distance_x` canvas units over a viewport
    /// `viewport_width` units wide. Positive distances move towards later
    /// pages. Drags past either end are damped by the bounce factor.
    pub fn scroll(&mut self, distance_x: f64, viewport_width: f64, now: Instant) {
        if !distance_x.is_finite() || !viewport_width.is_finite() || viewport_width <= 0.0 {
            return;
        }

        let position = self.peek(now);
        let bounce = self.params.bounce;
        let left_border = -bounce;
        let right_edge = self.last_page() as f64;
        let right_border = right_edge + bounce;

        let delta = distance_x / viewport_width;
        let estimate = if position < 0.0 || position > right_edge {
            position + delta * bounce
        } else {
            position + delta
        };

        let clamped = if distance_x > 0.0 {
            estimate.max(left_border)
        } else {
            estimate.min(right_border)
        };

        self.to_static(clamped.clamp(left_border, right_border));
    }

    /// Fling one page in `direction`. While an animation is running the
    /// existing one is retargeted one page further instead.
    pub fn animate(&mut self, direction: Direction, bouncing: bool, now: Instant) {
        let last_page = self.last_page();

        if let Mode::Animated(animation) = &mut self.mode {
            animation.retarget(now, direction, bouncing, last_page);
            tracing::debug!(
                "Retargeted to page {} ({:?} bounce)",
                animation.target(),
                animation.bounce()
            );
            return;
        }

        let start = self.peek(now);
        let animation =
            PositionAnimation::directional(now, start, direction, bouncing, last_page, &self.params);
        self.to_animated(animation);
    }

    /// Animate straight to `page` from wherever the position is now
    pub fn animate_to(&mut self, page: usize, now: Instant) {
        let start = self.peek(now);
        let target = page.min(self.last_page());
        let animation = PositionAnimation::targeted(now, start, target, &self.params);
        self.to_animated(animation);
    }

    /// Freeze the running animation where it is
    pub fn pause(&mut self, now: Instant) {
        if self.is_animating() {
            let position = self.peek(now);
            tracing::debug!("Paused at {:.3}", position);
            self.to_static(position);
        }
    }

    /// Snap to the nearest page after a drag. Returns whether an animation is
    /// now running, i.e. whether the host should keep drawing frames.
    pub fn resume(&mut self, now: Instant) -> bool {
        let position = match &self.mode {
            Mode::Animated(_) => return true,
            Mode::Static(position) => *position,
        };

        let nearest = (position + 0.5).floor();
        if position == nearest {
            return false;
        }

        let target = nearest.clamp(0.0, self.last_page() as f64) as usize;
        let animation = PositionAnimation::targeted(now, position, target, &self.params);
        self.to_animated(animation);
        true
    }
}
