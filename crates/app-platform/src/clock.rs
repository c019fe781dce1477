//! Frame clocks
//!
//! Controls are advanced with explicit timestamps measured from a clock
//! origin. Hosts read those timestamps from a [`FrameClock`]; tests use a
//! [`VirtualClock`] that only moves when told to.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Source of frame timestamps
pub trait FrameClock: Send + Sync {
    /// Time elapsed since the clock's origin
    fn now(&self) -> Duration;
}

/// Clock backed by the tokio time driver
///
/// Uses [`tokio::time::Instant`], so paused-time tests observe virtual time.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Start a clock whose origin is now
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl FrameClock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Manually advanced clock
///
/// Clones share the same time, so a test can hand one clone to a driver and
/// advance another.
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    elapsed: Arc<Mutex<Duration>>,
}

impl VirtualClock {
    /// Create a clock at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `delta` and return the new time
    pub fn advance(&self, delta: Duration) -> Duration {
        let mut elapsed = self.elapsed.lock();
        *elapsed += delta;
        *elapsed
    }

    /// Jump to an absolute time. Moving backwards is ignored.
    pub fn set(&self, now: Duration) {
        let mut elapsed = self.elapsed.lock();
        if now > *elapsed {
            *elapsed = now;
        } else if now < *elapsed {
            tracing::warn!(
                requested = ?now,
                current = ?*elapsed,
                "ignoring attempt to move virtual clock backwards"
            );
        }
    }
}

impl FrameClock for VirtualClock {
    fn now(&self) -> Duration {
        *self.elapsed.lock()
    }
}
