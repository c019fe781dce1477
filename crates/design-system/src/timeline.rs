//! Deterministic effect scheduling
//!
//! Each control keeps a [`Timeline`] of delayed effects. The host advances
//! time explicitly, so phase ordering is reproducible in tests without
//! sleeping. Effects due at the same instant fire in the order they were
//! scheduled.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

#[derive(Debug, Clone)]
struct Scheduled<E> {
    due: Duration,
    seq: u64,
    effect: E,
}

impl<E> PartialEq for Scheduled<E> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<E> Eq for Scheduled<E> {}

impl<E> PartialOrd for Scheduled<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Scheduled<E> {
    // Reversed so the max-heap pops the earliest entry first
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Queue of effects waiting for their due time
#[derive(Debug, Clone)]
pub struct Timeline<E> {
    pending: BinaryHeap<Scheduled<E>>,
    next_seq: u64,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self {
            pending: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<E> Timeline<E> {
    /// Create an empty timeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `effect` to fire at `due`
    pub fn schedule(&mut self, due: Duration, effect: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Scheduled { due, seq, effect });
    }

    /// Drop every pending effect; returns how many were dropped
    ///
    /// Called when a newer trigger replaces an in-flight sequence so the old
    /// sequence can never write after the new one.
    pub fn supersede(&mut self) -> usize {
        let dropped = self.pending.len();
        if dropped > 0 {
            tracing::trace!(dropped, "superseding pending effects");
        }
        self.pending.clear();
        dropped
    }

    /// Remove and return effects due at or before `now`, earliest first
    pub fn drain_due(&mut self, now: Duration) -> Vec<(Duration, E)> {
        let mut due = Vec::new();
        while self.pending.peek().is_some_and(|entry| entry.due <= now) {
            if let Some(entry) = self.pending.pop() {
                due.push((entry.due, entry.effect));
            }
        }
        due
    }

    /// Due time of the earliest pending effect
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.peek().map(|entry| entry.due)
    }

    /// Whether nothing is pending
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of pending effects
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether the timeline is empty (same as [`Timeline::is_idle`])
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_drains_in_due_order() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(250), "late");
        timeline.schedule(ms(0), "now");
        timeline.schedule(ms(120), "mid");

        let fired: Vec<_> = timeline.drain_due(ms(300)).into_iter().map(|(_, e)| e).collect();
        assert_eq!(fired, vec!["now", "mid", "late"]);
        assert!(timeline.is_idle());
    }

    #[test]
    fn test_same_instant_keeps_schedule_order() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(100), 1);
        timeline.schedule(ms(100), 2);
        timeline.schedule(ms(100), 3);

        let fired: Vec<_> = timeline.drain_due(ms(100)).into_iter().map(|(_, e)| e).collect();
        assert_eq!(fired, vec![1, 2, 3]);
    }

    #[test]
    fn test_only_due_effects_fire() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(50), "a");
        timeline.schedule(ms(150), "b");

        assert_eq!(timeline.drain_due(ms(49)).len(), 0);
        let fired = timeline.drain_due(ms(100));
        assert_eq!(fired, vec![(ms(50), "a")]);
        assert_eq!(timeline.next_due(), Some(ms(150)));
        assert_eq!(timeline.len(), 1);
    }

    #[test]
    fn test_supersede_drops_pending() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(100), "stale");
        timeline.schedule(ms(200), "stale");

        assert_eq!(timeline.supersede(), 2);
        assert!(timeline.drain_due(ms(1000)).is_empty());
        assert_eq!(timeline.next_due(), None);
    }
}
