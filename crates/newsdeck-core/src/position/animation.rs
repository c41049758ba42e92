//! One in-flight page transition.
//!
//! The position is a pure function of the time elapsed since the animation
//! (re)started. Edge bounce is modelled as a single reflection: the curve
//! heads for `target ± 2·bounce` and mirrors back once it passes
//! `target ± bounce`, landing on `target` exactly when the duration ends.

use std::time::{Duration, Instant};

use super::timing::{is_complete, lerp, progress, scale};
use crate::config::AnimationConfig;

/// Which neighbouring page a fling heads for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the previous page (lower index)
    Left,
    /// Towards the next page (higher index)
    Right,
}

impl Direction {
    #[inline]
    fn step(self) -> i64 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Overshoot applied when a fling runs past the first or last page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bounce {
    #[default]
    None,
    /// Overshoot below the first page
    Left,
    /// Overshoot beyond the last page
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationParams {
    /// Duration of a one-page transition
    pub base_duration: Duration,
    /// Elastic overtravel in pages
    pub bounce: f64,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self::from(&AnimationConfig::default())
    }
}

impl From<&AnimationConfig> for AnimationParams {
    fn from(config: &AnimationConfig) -> Self {
        Self {
            base_duration: config.base_duration(),
            bounce: config.bounce,
        }
    }
}

/// Result of evaluating an animation at some instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationFrame {
    Running(f64),
    /// The duration has elapsed; the value is exactly the target page
    Finished(f64),
}

impl AnimationFrame {
    #[inline]
    pub fn position(self) -> f64 {
        match self {
            AnimationFrame::Running(position) | AnimationFrame::Finished(position) => position,
        }
    }

    #[inline]
    pub fn is_finished(self) -> bool {
        matches!(self, AnimationFrame::Finished(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionAnimation {
    start: Instant,
    start_position: f64,
    target: usize,
    duration: Duration,
    bounce: Bounce,
    params: AnimationParams,
}

impl PositionAnimation {
    /// Move one page left or right of the page nearest to `start_position`.
    ///
    /// A step past `[0, last_page]` is clamped; it bounces only when
    /// `bouncing` is set.
    pub fn directional(
        now: Instant,
        start_position: f64,
        direction: Direction,
        bouncing: bool,
        last_page: usize,
        params: &AnimationParams,
    ) -> Self {
        let base = (start_position + 0.5).floor() as i64;
        let (target, bounce) = step_target(base, direction, bouncing, last_page);

        Self {
            start: now,
            start_position,
            target,
            duration: params.base_duration,
            bounce,
            params: *params,
        }
    }

    /// Go straight to `target`, taking the base duration per page travelled
    pub fn targeted(
        now: Instant,
        start_position: f64,
        target: usize,
        params: &AnimationParams,
    ) -> Self {
        let distance = (target as f64 - start_position).abs();

        Self {
            start: now,
            start_position,
            target,
            duration: scale(params.base_duration, distance),
            bounce: Bounce::None,
            params: *params,
        }
    }

    /// Shift the target one more page and restart the clock from the
    /// position the animation has reached at `now`
    pub fn retarget(
        &mut self,
        now: Instant,
        direction: Direction,
        bouncing: bool,
        last_page: usize,
    ) {
        let live = self.sample(now).position();
        let (target, bounce) = step_target(self.target as i64, direction, bouncing, last_page);

        self.start = now;
        self.start_position = live;
        self.target = target;
        self.bounce = bounce;
        self.duration = self.params.base_duration;
    }

    /// Evaluate the position at `now`
    pub fn sample(&self, now: Instant) -> AnimationFrame {
        let target = self.target as f64;
        if is_complete(self.start, self.duration, now) {
            return AnimationFrame::Finished(target);
        }

        let t = progress(self.start, self.duration, now);
        let bounce = self.params.bounce;
        let position = match self.bounce {
            Bounce::None => lerp(self.start_position, target, t),
            Bounce::Right => {
                let value = lerp(self.start_position, target + 2.0 * bounce, t);
                let peak = target + bounce;
                if value > peak {
                    2.0 * peak - value
                } else {
                    value
                }
            }
            Bounce::Left => {
                let value = lerp(self.start_position, target - 2.0 * bounce, t);
                let trough = target - bounce;
                if value < trough {
                    2.0 * trough - value
                } else {
                    value
                }
            }
        };

        AnimationFrame::Running(position)
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn start_position(&self) -> f64 {
        self.start_position
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn bounce(&self) -> Bounce {
        self.bounce
    }

    /// When the animation will report [`AnimationFrame::Finished`]
    pub fn deadline(&self) -> Instant {
        self.start + self.duration
    }
}

/// Step `base` one page in `direction`, clamped to `[0, last_page]`
fn step_target(base: i64, direction: Direction, bouncing: bool, last_page: usize) -> (usize, Bounce) {
    let last = last_page as i64;
    let stepped = base + direction.step();

    match direction {
        Direction::Left if stepped < 0 => (0, if bouncing { Bounce::Left } else { Bounce::None }),
        Direction::Right if stepped > last => {
            (last_page, if bouncing { Bounce::Right } else { Bounce::None })
        }
        _ => (stepped.clamp(0, last) as usize, Bounce::None),
    }
}
