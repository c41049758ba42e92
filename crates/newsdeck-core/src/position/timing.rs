//! Time calculation utilities for page animations

use std::time::{Duration, Instant};

/// Calculate animation progress (0.0 to 1.0) at `now`
///
/// # Arguments
/// * `start` - Animation start time
/// * `duration` - Total animation duration
/// * `now` - Instant being evaluated
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]
#[inline]
pub fn progress(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if an animation started at `start` has run its full duration
#[inline]
pub fn is_complete(start: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Scale a duration by a non-negative factor, rounded to the nanosecond
#[inline]
pub fn scale(duration: Duration, factor: f64) -> Duration {
    if !factor.is_finite() || factor <= 0.0 {
        return Duration::ZERO;
    }
    // `as` saturates, so huge factors clamp instead of wrapping
    Duration::from_nanos((duration.as_nanos() as f64 * factor).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(2.0, 1.0, 0.25) - 1.75).abs() < 0.001);
    }

    #[test]
    fn test_progress() {
        let start = Instant::now();
        let duration = Duration::from_millis(200);
        assert!((progress(start, duration, start) - 0.0).abs() < 0.001);
        assert!((progress(start, duration, start + Duration::from_millis(50)) - 0.25).abs() < 0.001);
        assert!((progress(start, duration, start + Duration::from_secs(5)) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress(start, Duration::ZERO, start) - 1.0).abs() < 0.001);
        assert!(is_complete(start, Duration::ZERO, start));
    }

    #[test]
    fn test_progress_before_start_is_zero() {
        let now = Instant::now();
        let start = now + Duration::from_millis(10);
        assert!((progress(start, Duration::from_millis(100), now) - 0.0).abs() < 0.001);
        assert!(!is_complete(start, Duration::from_millis(100), now));
    }

    #[test]
    fn test_scale() {
        let base = Duration::from_millis(300);
        assert_eq!(scale(base, 2.0), Duration::from_millis(600));
        assert_eq!(scale(base, 0.0), Duration::ZERO);
        assert_eq!(scale(base, f64::NAN), Duration::ZERO);
    }
}
