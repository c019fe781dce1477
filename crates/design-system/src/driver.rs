//! Frame driver
//!
//! Controls are plain state machines advanced with explicit timestamps.
//! Hosts that want them to run on their own can hand one to
//! [`run_until_settled`], which ticks it on a tokio interval until every
//! animation has come to rest.

use app_platform::clock::FrameClock;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Default frame interval (60 Hz)
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// A control that can be advanced in time
pub trait Animate {
    /// Apply every effect due at or before `now`
    fn tick(&mut self, now: Duration);

    /// Whether nothing is pending and every animated value is at rest
    fn is_settled(&self, now: Duration) -> bool;
}

/// Tick `control` every `frame` until it settles; returns the settle time
///
/// Every control animation is bounded, so this always terminates.
pub async fn run_until_settled<A, C>(control: &mut A, clock: &C, frame: Duration) -> Duration
where
    A: Animate + ?Sized,
    C: FrameClock + ?Sized,
{
    let mut interval = tokio::time::interval(frame.max(Duration::from_millis(1)));
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut frames: u64 = 0;
    loop {
        interval.tick().await;
        let now = clock.now();
        control.tick(now);
        frames += 1;
        if control.is_settled(now) {
            tracing::trace!(frames, ?now, "control settled");
            return now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count_up::NumericCountUp;
    use app_platform::clock::MonotonicClock;

    #[tokio::test(start_paused = true)]
    async fn test_drives_count_up_to_completion() {
        let clock = MonotonicClock::start();
        let mut badge = NumericCountUp::new(7, 0);
        badge.mount();
        badge.set_trigger(1, clock.now());

        let settled_at = run_until_settled(&mut badge, &clock, DEFAULT_FRAME_INTERVAL).await;

        assert_eq!(badge.displayed(), 7);
        assert!(settled_at >= Duration::from_millis(800));
        assert!(settled_at < Duration::from_millis(900));
    }

    #[tokio::test(start_paused = true)]
    async fn test_settled_control_returns_on_first_frame() {
        let clock = MonotonicClock::start();
        let mut badge = NumericCountUp::new(3, 0);
        badge.mount();

        let settled_at = run_until_settled(&mut badge, &clock, DEFAULT_FRAME_INTERVAL).await;
        assert_eq!(settled_at, Duration::ZERO);
    }
}
