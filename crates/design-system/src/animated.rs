//! Animated presentation values
//!
//! Logical state (on/off, selected index, collapsed) changes instantly. What
//! the host draws follows it through an [`AnimatedValue`]: a scalar that
//! interpolates from where it was to where it should be along a curve.

use app_platform::timing::Curve;
use std::time::Duration;

/// Scalar that moves toward a target along a timing curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedValue {
    from: f32,
    to: f32,
    curve: Option<Curve>,
    started_at: Duration,
}

impl AnimatedValue {
    /// Value at rest
    pub fn fixed(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            curve: None,
            started_at: Duration::ZERO,
        }
    }

    /// Start moving toward `target` at `now`, continuing from the current
    /// on-screen value so interrupted animations do not jump
    pub fn animate_to(&mut self, target: f32, curve: Curve, now: Duration) {
        self.from = self.value_at(now);
        self.to = target;
        self.curve = Some(curve);
        self.started_at = now;
    }

    /// Jump to `value` without animating
    pub fn snap_to(&mut self, value: f32) {
        *self = Self::fixed(value);
    }

    /// Value the animation is heading to
    pub fn target(&self) -> f32 {
        self.to
    }

    /// When the current animation started, if one was ever started
    pub fn started_at(&self) -> Option<Duration> {
        self.curve.map(|_| self.started_at)
    }

    /// Presentation value at `now`
    pub fn value_at(&self, now: Duration) -> f32 {
        match self.curve {
            None => self.to,
            Some(_) if now < self.started_at => self.from,
            Some(curve) => {
                let elapsed = now - self.started_at;
                if curve.is_finished(elapsed) {
                    return self.to;
                }
                let progress = curve.progress(elapsed) as f32;
                self.from + (self.to - self.from) * progress
            }
        }
    }

    /// Whether the value has come to rest at its target
    pub fn is_settled(&self, now: Duration) -> bool {
        match self.curve {
            None => true,
            Some(curve) => now >= self.started_at && curve.is_finished(now - self.started_at),
        }
    }
}
