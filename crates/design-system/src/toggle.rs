//! Binary toggle switch
//!
//! Tapping the switch plays a light haptic, flips the bound value right
//! away, stretches the thumb for a moment and lets it relax 0.1 s later.
//! The flip is the only thing the host observes; the stretch is cosmetic.

use crate::accessibility::{AccessibilityProps, AccessibilityTrait};
use crate::animated::AnimatedValue;
use crate::config::ControlsConfig;
use crate::driver::Animate;
use crate::error::Result;
use crate::timeline::Timeline;
use crate::tokens::{duration, sizing::switch};
use app_platform::haptics::{HapticFeedback, ImpactStyle};
use app_platform::timing::{Curve, Spring};
use app_state::Binding;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Combined logical and cosmetic state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ToggleState {
    /// Bound value
    pub is_on: bool,
    /// Whether the thumb is (heading to) stretched
    pub is_stretching: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToggleEffect {
    EndStretch,
}

fn thumb_offset_for(is_on: bool) -> f32 {
    if is_on {
        switch::THUMB_TRAVEL / 2.0
    } else {
        -switch::THUMB_TRAVEL / 2.0
    }
}

fn track_fill_for(is_on: bool) -> f32 {
    if is_on {
        1.0
    } else {
        0.0
    }
}

/// Two-state switch bound to a host-owned boolean
pub struct BinaryToggle {
    value: Binding<bool>,
    haptics: Arc<dyn HapticFeedback>,
    spring: Spring,
    observed: bool,
    is_stretching: bool,
    thumb_offset: AnimatedValue,
    thumb_width: AnimatedValue,
    track_fill: AnimatedValue,
    timeline: Timeline<ToggleEffect>,
    activations: u64,
}

impl std::fmt::Debug for BinaryToggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinaryToggle")
            .field("observed", &self.observed)
            .field("is_stretching", &self.is_stretching)
            .field("activations", &self.activations)
            .finish_non_exhaustive()
    }
}

impl BinaryToggle {
    /// Switch with default motion
    pub fn new(value: Binding<bool>, haptics: Arc<dyn HapticFeedback>) -> Self {
        Self::build(value, haptics, &ControlsConfig::default())
    }

    /// Switch using the configured spring and haptic preference
    ///
    /// Fails with [`InvalidConfig`](crate::error::ControlError::InvalidConfig)
    /// when the configuration does not validate.
    pub fn with_config(
        value: Binding<bool>,
        haptics: Arc<dyn HapticFeedback>,
        config: &ControlsConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(value, haptics, config))
    }

    fn build(value: Binding<bool>, haptics: Arc<dyn HapticFeedback>, config: &ControlsConfig) -> Self {
        let is_on = value.get();
        Self {
            haptics: config.haptics(haptics),
            spring: config.toggle_spring,
            observed: is_on,
            is_stretching: false,
            thumb_offset: AnimatedValue::fixed(thumb_offset_for(is_on)),
            thumb_width: AnimatedValue::fixed(switch::THUMB_SIZE),
            track_fill: AnimatedValue::fixed(track_fill_for(is_on)),
            timeline: Timeline::new(),
            activations: 0,
            value,
        }
    }

    /// Current bound value
    pub fn is_on(&self) -> bool {
        self.value.get()
    }

    /// Whether the thumb is stretched or stretching
    pub fn is_stretching(&self) -> bool {
        self.is_stretching
    }

    /// Logical plus cosmetic state
    pub fn state(&self) -> ToggleState {
        ToggleState {
            is_on: self.is_on(),
            is_stretching: self.is_stretching,
        }
    }

    /// Number of activations so far
    pub fn activations(&self) -> u64 {
        self.activations
    }

    /// Tap: haptic, stretch, flip, and schedule the relax
    ///
    /// Re-activating mid-animation restarts the sequence from the current
    /// value. Returns the new value.
    pub fn activate(&mut self, now: Duration) -> bool {
        self.haptics.impact(ImpactStyle::Light);
        self.timeline.supersede();

        self.is_stretching = true;
        self.thumb_width.animate_to(
            switch::THUMB_STRETCH_WIDTH,
            Curve::ease_out(duration::TOGGLE_STRETCH),
            now,
        );

        let next = !self.value.get();
        self.value.set(next);
        self.follow(next, now);

        self.timeline
            .schedule(now + duration::TOGGLE_SETTLE_DELAY, ToggleEffect::EndStretch);
        self.activations += 1;

        tracing::debug!(is_on = next, activation = self.activations, "toggle flipped");
        next
    }

    fn follow(&mut self, is_on: bool, now: Duration) {
        let curve = Curve::spring(self.spring);
        self.observed = is_on;
        self.thumb_offset.animate_to(thumb_offset_for(is_on), curve, now);
        self.track_fill.animate_to(track_fill_for(is_on), curve, now);
    }

    /// Apply due effects and pick up writes the host made to the binding
    pub fn tick(&mut self, now: Duration) {
        for (due, effect) in self.timeline.drain_due(now) {
            match effect {
                ToggleEffect::EndStretch => {
                    self.is_stretching = false;
                    self.thumb_width
                        .animate_to(switch::THUMB_SIZE, Curve::spring(self.spring), due);
                    tracing::trace!(?due, "toggle stretch released");
                }
            }
        }

        let bound = self.value.get();
        if bound != self.observed {
            tracing::debug!(is_on = bound, "toggle value changed by host");
            self.follow(bound, now);
        }
    }

    /// Accessibility properties
    pub fn accessibility(&self) -> AccessibilityProps {
        AccessibilityProps::labeled("Toggle")
            .with_value(if self.is_on() { "On" } else { "Off" })
            .with_trait(AccessibilityTrait::Button)
    }

    /// Render snapshot at `now`
    pub fn view(&self, now: Duration) -> ToggleView {
        ToggleView {
            is_on: self.is_on(),
            is_stretching: self.is_stretching,
            thumb_offset: self.thumb_offset.value_at(now),
            thumb_width: self.thumb_width.value_at(now),
            thumb_height: switch::THUMB_SIZE,
            track_width: switch::TRACK_WIDTH,
            track_height: switch::TRACK_HEIGHT,
            track_fill: self.track_fill.value_at(now),
            accessibility: self.accessibility(),
        }
    }
}

impl Animate for BinaryToggle {
    fn tick(&mut self, now: Duration) {
        BinaryToggle::tick(self, now);
    }

    fn is_settled(&self, now: Duration) -> bool {
        self.timeline.is_idle()
            && self.thumb_offset.is_settled(now)
            && self.thumb_width.is_settled(now)
            && self.track_fill.is_settled(now)
    }
}

/// What the host draws for a switch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToggleView {
    /// Bound value
    pub is_on: bool,
    /// Cosmetic stretch phase
    pub is_stretching: bool,
    /// Thumb center offset from the track center
    pub thumb_offset: f32,
    /// Thumb width
    pub thumb_width: f32,
    /// Thumb height
    pub thumb_height: f32,
    /// Track width
    pub track_width: f32,
    /// Track height
    pub track_height: f32,
    /// Track "on" color mix, 0.0 (off) to 1.0 (on)
    pub track_fill: f32,
    /// Accessibility properties
    pub accessibility: AccessibilityProps,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ControlError;
    use app_platform::haptics::SilentHaptics;
    use app_state::SharedState;

    mockall::mock! {
        Haptics {}
        impl HapticFeedback for Haptics {
            fn impact(&self, style: ImpactStyle);
        }
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn toggle(initial: bool) -> (SharedState<bool>, BinaryToggle) {
        let state = SharedState::new(initial);
        let control = BinaryToggle::new(state.binding(), Arc::new(SilentHaptics));
        (state, control)
    }

    #[test]
    fn test_initial_presentation_matches_value() {
        let (_, control) = toggle(true);
        let view = control.view(ms(0));
        assert!(view.is_on);
        assert_eq!(view.thumb_offset, 10.0);
        assert_eq!(view.thumb_width, 28.0);
        assert_eq!(view.track_fill, 1.0);
        assert!(control.is_settled(ms(0)));
    }

    #[test]
    fn test_activate_flips_immediately() {
        let (state, mut control) = toggle(false);
        assert!(control.activate(ms(0)));
        assert!(state.get());
        assert_eq!(state.writes(), 1);
        assert!(control.is_stretching());
    }

    #[test]
    fn test_activation_fires_one_haptic() {
        let mut haptics = MockHaptics::new();
        haptics
            .expect_impact()
            .withf(|style| *style == ImpactStyle::Light)
            .times(1)
            .return_const(());

        let state = SharedState::new(false);
        let mut control = BinaryToggle::new(state.binding(), Arc::new(haptics));
        control.activate(ms(0));
    }

    #[test]
    fn test_stretch_releases_after_delay() {
        let (_, mut control) = toggle(false);
        control.activate(ms(0));

        control.tick(ms(99));
        assert!(control.is_stretching());
        assert_eq!(
            control.state(),
            ToggleState {
                is_on: true,
                is_stretching: true
            }
        );

        control.tick(ms(100));
        assert!(!control.is_stretching());
        assert!(!control.is_settled(ms(100)));
    }

    #[test]
    fn test_thumb_stretches_then_settles() {
        let (_, mut control) = toggle(false);
        control.activate(ms(0));

        control.tick(ms(100));
        assert_eq!(control.view(ms(100)).thumb_width, 34.0);

        control.tick(ms(2000));
        let view = control.view(ms(2000));
        assert_eq!(view.thumb_width, 28.0);
        assert_eq!(view.thumb_offset, 10.0);
        assert_eq!(view.track_fill, 1.0);
        assert!(control.is_settled(ms(2000)));
    }

    #[test]
    fn test_n_activations_flip_n_times() {
        let (state, mut control) = toggle(false);

        // Overlapping activations, 30 ms apart, well inside each animation
        for i in 0..7 {
            control.activate(ms(i * 30));
            control.tick(ms(i * 30 + 10));
        }

        assert_eq!(state.writes(), 7);
        assert_eq!(control.activations(), 7);
        assert!(state.get());

        control.tick(ms(3000));
        assert!(!control.is_stretching());
        assert!(control.is_settled(ms(3000)));
    }

    #[test]
    fn test_reactivation_restarts_stretch_release() {
        let (_, mut control) = toggle(false);
        control.activate(ms(0));
        control.activate(ms(80));

        // The first activation's release (due at 100 ms) was superseded
        control.tick(ms(150));
        assert!(control.is_stretching());
        control.tick(ms(180));
        assert!(!control.is_stretching());
    }

    #[test]
    fn test_host_write_moves_thumb() {
        let (state, mut control) = toggle(false);
        state.set(true);

        control.tick(ms(0));
        control.tick(ms(2000));
        assert_eq!(control.view(ms(2000)).thumb_offset, 10.0);
        assert!(!control.is_stretching());
    }

    #[test]
    fn test_with_config_uses_configured_spring() {
        let config = ControlsConfig {
            toggle_spring: Spring::new(0.2, 1.0),
            ..ControlsConfig::default()
        };
        let state = SharedState::new(false);
        let mut control =
            BinaryToggle::with_config(state.binding(), Arc::new(SilentHaptics), &config).unwrap();
        control.activate(ms(0));

        let settle = Spring::new(0.2, 1.0).settle_duration();
        control.tick(ms(100) + settle);
        assert!(control.is_settled(ms(100) + settle));
    }

    #[test]
    fn test_with_config_rejects_invalid_spring() {
        let config = ControlsConfig {
            toggle_spring: Spring::new(0.35, 0.0),
            ..ControlsConfig::default()
        };
        let state = SharedState::new(false);
        let result = BinaryToggle::with_config(state.binding(), Arc::new(SilentHaptics), &config);
        assert!(matches!(result, Err(ControlError::InvalidConfig(_))));
        assert_eq!(state.writes(), 0);
    }

    #[test]
    fn test_accessibility() {
        let (_, mut control) = toggle(false);
        let props = control.accessibility();
        assert_eq!(props.label, "Toggle");
        assert_eq!(props.value.as_deref(), Some("Off"));
        assert!(props.has_trait(AccessibilityTrait::Button));

        control.activate(ms(0));
        assert_eq!(control.accessibility().value.as_deref(), Some("On"));
    }
}
