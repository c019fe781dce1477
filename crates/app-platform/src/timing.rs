//! Timing curves
//!
//! A [`Curve`] maps time elapsed since an animation started to a progress
//! value. Eased curves run for a fixed duration and finish at exactly 1.0.
//! Spring curves follow a damped harmonic oscillator parameterized the way
//! mobile UI frameworks describe springs (response + damping fraction), may
//! overshoot 1.0 while underdamped, and snap to 1.0 once the motion is no
//! longer perceptible.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::time::Duration;

/// Residual amplitude below which a spring counts as settled
pub const SPRING_SETTLE_THRESHOLD: f64 = 0.001;

/// `(1 + x) * e^-x` drops below [`SPRING_SETTLE_THRESHOLD`] at about this `x`
const CRITICAL_SETTLE_FACTOR: f64 = 9.24;

/// Easing function applied to normalized time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant speed
    Linear,
    /// Slow start, fast end
    EaseIn,
    /// Fast start, slow end
    #[default]
    EaseOut,
    /// Slow start and end
    EaseInOut,
    /// Cubic deceleration, `1 - (1 - t)^3`
    EaseOutCubic,
}

impl Easing {
    /// Apply the easing function to normalized time (clamped to 0.0..=1.0)
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseOutCubic => ease_out_cubic(t),
        }
    }
}

/// Cubic ease-out: fast start, decelerating to rest at `t = 1`
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Spring described by its response (period of the undamped oscillation,
/// in seconds) and damping fraction (1.0 = critically damped)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    /// Response in seconds
    pub response: f64,
    /// Damping fraction
    pub damping_fraction: f64,
}

impl Spring {
    /// Create a spring
    pub const fn new(response: f64, damping_fraction: f64) -> Self {
        Self {
            response,
            damping_fraction,
        }
    }

    /// Undamped angular frequency
    fn omega(&self) -> f64 {
        2.0 * PI / self.response.max(f64::EPSILON)
    }

    /// Whether the parameters describe a usable spring
    pub fn is_valid(&self) -> bool {
        self.response.is_finite()
            && self.response > 0.0
            && self.damping_fraction.is_finite()
            && self.damping_fraction > 0.0
    }

    /// Time after which the spring is considered at rest
    ///
    /// A spring without positive, finite parameters has no motion and is at
    /// rest immediately.
    pub fn settle_duration(&self) -> Duration {
        if !self.is_valid() {
            return Duration::ZERO;
        }
        let omega = self.omega();
        let zeta = self.damping_fraction;
        let secs = if zeta < 1.0 {
            (1.0 / SPRING_SETTLE_THRESHOLD).ln() / (zeta * omega)
        } else {
            CRITICAL_SETTLE_FACTOR / omega
        };
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }

    /// Progress at `elapsed`, starting at 0.0 and resting at exactly 1.0
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if elapsed >= self.settle_duration() {
            return 1.0;
        }
        let t = elapsed.as_secs_f64();
        let omega = self.omega();
        let zeta = self.damping_fraction;

        if zeta < 1.0 {
            let damped = omega * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega * t).exp();
            1.0 - envelope * ((damped * t).cos() + (zeta * omega / damped) * (damped * t).sin())
        } else {
            // Overdamped springs are approximated as critically damped
            1.0 - (-omega * t).exp() * (1.0 + omega * t)
        }
    }
}

/// Timing curve for a single animated property
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    /// Fixed-duration eased curve
    Eased {
        /// Easing function
        easing: Easing,
        /// Total duration
        duration: Duration,
    },
    /// Spring curve
    Spring(Spring),
}

impl Curve {
    /// Ease-out curve of the given duration
    pub fn ease_out(duration: Duration) -> Self {
        Curve::Eased {
            easing: Easing::EaseOut,
            duration,
        }
    }

    /// Ease-in curve of the given duration
    pub fn ease_in(duration: Duration) -> Self {
        Curve::Eased {
            easing: Easing::EaseIn,
            duration,
        }
    }

    /// Spring curve
    pub fn spring(spring: Spring) -> Self {
        Curve::Spring(spring)
    }

    /// Time until the curve reaches its resting value
    pub fn duration(&self) -> Duration {
        match self {
            Curve::Eased { duration, .. } => *duration,
            Curve::Spring(spring) => spring.settle_duration(),
        }
    }

    /// Progress at `elapsed` since the curve started
    pub fn progress(&self, elapsed: Duration) -> f64 {
        match self {
            Curve::Eased { easing, duration } => {
                if duration.is_zero() || elapsed >= *duration {
                    1.0
                } else {
                    easing.apply(elapsed.as_secs_f64() / duration.as_secs_f64())
                }
            }
            Curve::Spring(spring) => spring.progress(elapsed),
        }
    }

    /// Whether the curve has come to rest at `elapsed`
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration()
    }
}
