//! Counter animation - eased interpolation toward a target value.
//!
//! Pure: the animation is a value, and the embedder's frame loop asks
//! for `value_at(elapsed)` until `is_done`. Overlapping animations for
//! the same counter are not deduplicated; the embedder tears down the
//! old one when it starts a new one.

use std::time::Duration;

/// An eased counter interpolation from `start` to `end` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    start: f64,
    end: f64,
    duration: Duration,
}

impl CounterAnimation {
    /// Animate from `start` to `end` over `duration`.
    pub fn new(start: f64, end: f64, duration: Duration) -> Self {
        Self {
            start,
            end,
            duration,
        }
    }

    /// The displayed value `elapsed` into the animation, eased with
    /// ease-out-quad (`p * (2 - p)`) and floored to a whole number.
    /// Clamps to the target at and after `duration`; a zero duration
    /// snaps straight to the target.
    pub fn value_at(&self, elapsed: Duration) -> i64 {
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        };
        let eased = progress * (2.0 - progress);
        (self.start + (self.end - self.start) * eased).floor() as i64
    }

    /// True once the animation has reached its target.
    pub fn is_done(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}
