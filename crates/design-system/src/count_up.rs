//! Count-up numeric badge
//!
//! A badge shows an integer. When its trigger token changes it counts from 0
//! up to the target in a capped number of eased steps. The curve itself is
//! the pure function [`displayed_value`]; [`NumericCountUp`] only remembers
//! when the current run started and evaluates that function on every tick.

use crate::accessibility::AccessibilityProps;
use crate::config::CountUpConfig;
use crate::driver::Animate;
use crate::error::Result;
use crate::tokens::{self, sizing};
use app_platform::timing::ease_out_cubic;
use serde::Serialize;
use std::time::Duration;

/// Number of steps a run of `target` uses
pub fn step_count(target: i64, max_steps: u32) -> u32 {
    if target <= 0 {
        return 0;
    }
    let cap = i64::from(max_steps.max(1));
    // Bounded by `cap`, which came from a u32
    target.min(cap) as u32
}

/// Value shown after `step` of `steps` when counting to `target`
///
/// Step 0 shows 0, the last step shows exactly `target`, every step in
/// between shows at least 1.
pub fn step_value(step: u32, steps: u32, target: i64) -> i64 {
    if step == 0 {
        0
    } else if step >= steps {
        target
    } else {
        let progress = ease_out_cubic(f64::from(step) / f64::from(steps));
        ((target as f64 * progress).round() as i64).max(1)
    }
}

fn completed_steps(elapsed: Duration, duration: Duration, steps: u32) -> u32 {
    if steps == 0 {
        return 0;
    }
    let interval = duration.as_nanos() / u128::from(steps);
    if interval == 0 {
        return steps;
    }
    (elapsed.as_nanos() / interval).min(u128::from(steps)) as u32
}

/// Value displayed `elapsed` into a run toward `target`
///
/// Targets of zero or below have nothing to count and are shown as-is.
pub fn displayed_value(elapsed: Duration, target: i64, duration: Duration, max_steps: u32) -> i64 {
    if target <= 0 {
        return target;
    }
    let steps = step_count(target, max_steps);
    step_value(completed_steps(elapsed, duration, steps), steps, target)
}

/// What a trigger did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountUpOutcome {
    /// Same token as before; nothing happened
    Unchanged,
    /// Display jumped straight to the target
    Snapped,
    /// A fresh run started
    Started {
        /// Steps in the run
        steps: u32,
    },
    /// An in-flight run was abandoned and a fresh one started
    Restarted {
        /// Steps in the new run
        steps: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CountUpRun {
    started_at: Duration,
    target: i64,
    steps: u32,
}

/// Badge whose displayed number counts up when re-triggered
#[derive(Debug, Clone, PartialEq)]
pub struct NumericCountUp {
    value: i64,
    trigger_token: u64,
    duration: Duration,
    max_steps: u32,
    displayed: i64,
    mounted: bool,
    run: Option<CountUpRun>,
}

impl NumericCountUp {
    /// Badge for `value` with the default timing (0.8 s, 20 steps)
    pub fn new(value: i64, trigger_token: u64) -> Self {
        Self {
            value,
            trigger_token,
            duration: tokens::duration::COUNT_UP,
            max_steps: tokens::COUNT_UP_MAX_STEPS,
            displayed: 0,
            mounted: false,
            run: None,
        }
    }

    /// Badge with timing taken from configuration
    ///
    /// Fails with [`InvalidConfig`](crate::error::ControlError::InvalidConfig)
    /// when the timing is unusable.
    pub fn with_config(value: i64, trigger_token: u64, config: &CountUpConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(value, trigger_token).with_timing(config.duration(), config.max_steps))
    }

    /// Override the timing
    pub fn with_timing(mut self, duration: Duration, max_steps: u32) -> Self {
        self.duration = duration;
        self.max_steps = max_steps.max(1);
        self
    }

    /// First display: show the target without animating
    pub fn mount(&mut self) {
        self.mounted = true;
        self.displayed = self.value;
        self.run = None;
    }

    /// Whether [`NumericCountUp::mount`] has been called
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Target value
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Current trigger token
    pub fn trigger_token(&self) -> u64 {
        self.trigger_token
    }

    /// Value currently displayed
    pub fn displayed(&self) -> i64 {
        self.displayed
    }

    /// Whether a run is in flight
    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    /// Apply a trigger token
    ///
    /// A new non-zero token on a mounted badge starts a run from 0 (abandoning
    /// any run in flight). Token 0, an unmounted badge, or a target of zero
    /// or less snaps the display to the target.
    pub fn set_trigger(&mut self, token: u64, now: Duration) -> CountUpOutcome {
        if token == self.trigger_token {
            return CountUpOutcome::Unchanged;
        }
        self.trigger_token = token;

        if !self.mounted || token == 0 || self.value <= 0 {
            self.run = None;
            self.displayed = self.value;
            tracing::trace!(value = self.value, token, "count-up snapped");
            return CountUpOutcome::Snapped;
        }

        let steps = step_count(self.value, self.max_steps);
        let abandoned = self.run.replace(CountUpRun {
            started_at: now,
            target: self.value,
            steps,
        });
        self.displayed = 0;

        if abandoned.is_some() {
            tracing::debug!(count = self.value, steps, token, "count-up restarted");
            CountUpOutcome::Restarted { steps }
        } else {
            tracing::debug!(count = self.value, steps, token, "count-up started");
            CountUpOutcome::Started { steps }
        }
    }

    /// Start a new run with the next token
    pub fn retrigger(&mut self, now: Duration) -> CountUpOutcome {
        let next = self.trigger_token.wrapping_add(1).max(1);
        self.set_trigger(next, now)
    }

    /// Change the target without a new token
    ///
    /// The display follows immediately unless a run is in flight; the run
    /// keeps counting to the target it started with.
    pub fn set_value(&mut self, value: i64) {
        self.value = value;
        if self.mounted && self.run.is_none() {
            self.displayed = value;
        }
    }

    /// Advance to `now` and return the displayed value
    pub fn tick(&mut self, now: Duration) -> i64 {
        if let Some(run) = self.run {
            let elapsed = now.saturating_sub(run.started_at);
            self.displayed = displayed_value(elapsed, run.target, self.duration, self.max_steps);
            if completed_steps(elapsed, self.duration, run.steps) >= run.steps {
                self.run = None;
                tracing::debug!(count = run.target, "count-up finished");
            }
        }
        self.displayed
    }

    /// Accessibility: always announces the target, not the animated value
    pub fn accessibility(&self) -> AccessibilityProps {
        AccessibilityProps::labeled(format!("{} notifications", self.value))
    }

    /// Render snapshot
    pub fn view(&self) -> BadgeView {
        BadgeView {
            text: self.displayed.to_string(),
            displayed: self.displayed,
            size: sizing::badge::SIZE,
            accessibility: self.accessibility(),
        }
    }
}

impl Animate for NumericCountUp {
    fn tick(&mut self, now: Duration) {
        NumericCountUp::tick(self, now);
    }

    fn is_settled(&self, _now: Duration) -> bool {
        !self.is_animating()
    }
}

/// What the host draws for a badge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BadgeView {
    /// Text inside the badge
    pub text: String,
    /// Numeric value behind `text`
    pub displayed: i64,
    /// Badge diameter
    pub size: f32,
    /// Accessibility properties
    pub accessibility: AccessibilityProps,
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(800);

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    /// Values shown at each step boundary of a full run
    fn run_values(target: i64, max_steps: u32) -> Vec<i64> {
        let steps = step_count(target, max_steps);
        let interval = DURATION / steps;
        (1..=steps)
            .map(|k| displayed_value(interval * k, target, DURATION, max_steps))
            .collect()
    }

    #[test]
    fn test_step_count_is_capped() {
        assert_eq!(step_count(5, 20), 5);
        assert_eq!(step_count(20, 20), 20);
        assert_eq!(step_count(99, 20), 20);
        assert_eq!(step_count(0, 20), 0);
        assert_eq!(step_count(-3, 20), 0);
    }

    #[test]
    fn test_run_ends_at_target_and_never_decreases() {
        for target in [1, 2, 5, 19, 20, 21, 99, 1000] {
            let values = run_values(target, 20);
            assert_eq!(*values.last().unwrap(), target, "target {}", target);
            assert!(values.iter().all(|v| *v >= 1), "target {}", target);
            assert!(values.windows(2).all(|w| w[0] <= w[1]), "target {}", target);
        }
    }

    #[test]
    fn test_run_of_five_follows_ease_out_cubic() {
        // round(5 * (1 - (1 - k/5)^3)) for k = 1..=5
        assert_eq!(run_values(5, 20), vec![2, 4, 5, 5, 5]);
    }

    #[test]
    fn test_before_first_step_shows_zero() {
        assert_eq!(displayed_value(Duration::ZERO, 5, DURATION, 20), 0);
        assert_eq!(displayed_value(ms(159), 5, DURATION, 20), 0);
        assert_eq!(displayed_value(ms(160), 5, DURATION, 20), 2);
    }

    #[test]
    fn test_non_positive_targets_are_shown_as_is() {
        assert_eq!(displayed_value(Duration::ZERO, 0, DURATION, 20), 0);
        assert_eq!(displayed_value(ms(400), -4, DURATION, 20), -4);
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        assert_eq!(displayed_value(Duration::ZERO, 7, Duration::ZERO, 20), 7);
    }

    #[test]
    fn test_mount_shows_value_without_animation() {
        let mut badge = NumericCountUp::new(9, 0);
        assert_eq!(badge.displayed(), 0);
        badge.mount();
        assert_eq!(badge.displayed(), 9);
        assert!(!badge.is_animating());
    }

    #[test]
    fn test_trigger_runs_to_target() {
        let mut badge = NumericCountUp::new(5, 0);
        badge.mount();

        assert_eq!(badge.set_trigger(1, ms(0)), CountUpOutcome::Started { steps: 5 });
        assert_eq!(badge.displayed(), 0);

        let mut seen = Vec::new();
        for t in (0..=800).step_by(10) {
            seen.push(badge.tick(ms(t)));
        }
        assert_eq!(badge.displayed(), 5);
        assert!(!badge.is_animating());
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_same_token_is_noop() {
        let mut badge = NumericCountUp::new(5, 0);
        badge.mount();
        badge.set_trigger(1, ms(0));
        badge.tick(ms(800));

        assert_eq!(badge.set_trigger(1, ms(900)), CountUpOutcome::Unchanged);
        assert_eq!(badge.displayed(), 5);
        assert!(!badge.is_animating());
    }

    #[test]
    fn test_non_positive_target_snaps() {
        let mut badge = NumericCountUp::new(0, 0);
        badge.mount();
        assert_eq!(badge.set_trigger(1, ms(0)), CountUpOutcome::Snapped);
        assert_eq!(badge.displayed(), 0);
        assert!(!badge.is_animating());

        let mut negative = NumericCountUp::new(-2, 0);
        negative.mount();
        assert_eq!(negative.set_trigger(3, ms(0)), CountUpOutcome::Snapped);
        assert_eq!(negative.displayed(), -2);
    }

    #[test]
    fn test_token_zero_snaps() {
        let mut badge = NumericCountUp::new(5, 2);
        badge.mount();
        badge.set_trigger(3, ms(0));
        badge.tick(ms(200));

        assert_eq!(badge.set_trigger(0, ms(250)), CountUpOutcome::Snapped);
        assert_eq!(badge.displayed(), 5);
        assert!(!badge.is_animating());
    }

    #[test]
    fn test_unmounted_trigger_snaps() {
        let mut badge = NumericCountUp::new(5, 0);
        assert_eq!(badge.set_trigger(1, ms(0)), CountUpOutcome::Snapped);
        assert_eq!(badge.displayed(), 5);
    }

    #[test]
    fn test_new_token_mid_run_restarts_from_zero() {
        let mut badge = NumericCountUp::new(5, 0);
        badge.mount();
        badge.set_trigger(1, ms(0));
        assert_eq!(badge.tick(ms(480)), 5);

        assert_eq!(badge.set_trigger(2, ms(500)), CountUpOutcome::Restarted { steps: 5 });
        assert_eq!(badge.displayed(), 0);

        // The abandoned run would have finished at 800ms; the new one has not
        assert_eq!(badge.tick(ms(800)), 2);
        assert_eq!(badge.tick(ms(1300)), 5);
        assert!(!badge.is_animating());
    }

    #[test]
    fn test_retrigger_increments_token() {
        let mut badge = NumericCountUp::new(3, 4);
        badge.mount();
        badge.retrigger(ms(0));
        assert_eq!(badge.trigger_token(), 5);
    }

    #[test]
    fn test_set_value_while_idle_updates_display() {
        let mut badge = NumericCountUp::new(3, 0);
        badge.mount();
        badge.set_value(8);
        assert_eq!(badge.displayed(), 8);
        assert_eq!(badge.accessibility().label, "8 notifications");
    }

    #[test]
    fn test_custom_timing() {
        let mut badge = NumericCountUp::new(50, 0).with_timing(ms(100), 4);
        badge.mount();
        assert_eq!(badge.set_trigger(1, ms(0)), CountUpOutcome::Started { steps: 4 });
        assert_eq!(badge.tick(ms(25)), 29);
        assert_eq!(badge.tick(ms(100)), 50);
    }

    #[test]
    fn test_with_config_applies_timing() {
        let config = CountUpConfig {
            duration_secs: 0.4,
            max_steps: 8,
        };
        let mut badge = NumericCountUp::with_config(30, 0, &config).unwrap();
        badge.mount();
        assert_eq!(badge.set_trigger(1, ms(0)), CountUpOutcome::Started { steps: 8 });
        assert_eq!(badge.tick(ms(400)), 30);
        assert!(!badge.is_animating());
    }

    #[test]
    fn test_with_config_rejects_invalid_timing() {
        use crate::error::ControlError;

        for config in [
            CountUpConfig {
                duration_secs: 0.8,
                max_steps: 0,
            },
            CountUpConfig {
                duration_secs: f64::INFINITY,
                max_steps: 20,
            },
            CountUpConfig {
                duration_secs: 0.0,
                max_steps: 20,
            },
        ] {
            let result = NumericCountUp::with_config(5, 0, &config);
            assert!(
                matches!(result, Err(ControlError::InvalidConfig(_))),
                "{:?}",
                config
            );
        }
    }

    #[test]
    fn test_view() {
        let mut badge = NumericCountUp::new(12, 0);
        badge.mount();
        let view = badge.view();
        assert_eq!(view.text, "12");
        assert_eq!(view.size, 20.0);
        assert_eq!(view.accessibility.label, "12 notifications");
    }
}
