//! Animation primitives for TradeBuilt
//!
//! Everything here is driven by frame delta time rather than wall-clock
//! callbacks, so the same code runs identically under test with simulated
//! durations.

use std::time::Duration;

/// Easing curve applied to a normalized progress value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map `t` (clamped to 0.0..=1.0) through the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::EaseOut => ease_out_quad(t),
            Easing::EaseInOut => ease_in_out_quad(t),
        }
    }
}

/// A one-shot transition between two values over a fixed duration.
#[derive(Debug, Clone)]
pub struct Fade {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Fade {
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Fade from transparent to opaque.
    pub fn fade_in(duration: Duration) -> Self {
        Self::new(0.0, 1.0, duration, Easing::EaseInOut)
    }

    /// Fade from opaque to transparent.
    pub fn fade_out(duration: Duration) -> Self {
        Self::new(1.0, 0.0, duration, Easing::EaseInOut)
    }

    /// Set the elapsed time directly (clamped to the duration).
    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed.min(self.duration);
    }

    pub fn progress(&self) -> f32 {
        progress(self.elapsed, self.duration)
    }

    pub fn value(&self) -> f32 {
        lerp(self.from, self.to, self.easing.apply(self.progress()))
    }
}

/// Normalized progress of `elapsed` through `duration`.
/// A zero duration counts as already complete.
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// Triangle wave in 0.0..=1.0: rises over `period`, falls over the next.
/// Used for auto-reversing loops such as the menu laser line.
pub fn ping_pong(elapsed: Duration, period: Duration) -> f32 {
    if period.is_zero() {
        return 0.0;
    }
    let t = (elapsed.as_secs_f32() / period.as_secs_f32()) % 2.0;
    if t <= 1.0 {
        t
    } else {
        2.0 - t
    }
}

/// Linear interpolation between two values
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Quadratic ease-out function for smooth deceleration
pub fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out: accelerate through the first half, decelerate
/// through the second.
pub fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
