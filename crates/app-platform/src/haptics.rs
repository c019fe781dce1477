//! Haptic feedback
//!
//! Impact feedback is fire-and-forget: controls request it and never learn
//! whether the device actually produced anything.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Impact intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactStyle {
    /// Light tap (used by selection and toggle controls)
    #[default]
    Light,
    /// Medium tap
    Medium,
    /// Heavy tap
    Heavy,
}

/// Host haptic engine
#[cfg_attr(test, mockall::automock)]
pub trait HapticFeedback: Send + Sync {
    /// Play an impact
    fn impact(&self, style: ImpactStyle);
}

/// Haptics sink for hosts without a haptic engine
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentHaptics;

impl HapticFeedback for SilentHaptics {
    fn impact(&self, style: ImpactStyle) {
        tracing::trace!(?style, "haptic impact dropped (no engine)");
    }
}

/// Wraps a haptic engine and honors the user's haptic preference
pub struct PreferenceGatedHaptics {
    inner: Arc<dyn HapticFeedback>,
    enabled: AtomicBool,
}

impl PreferenceGatedHaptics {
    /// Gate `inner` behind a preference flag
    pub fn new(inner: Arc<dyn HapticFeedback>, enabled: bool) -> Self {
        Self {
            inner,
            enabled: AtomicBool::new(enabled),
        }
    }

    /// Update the preference
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Current preference
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

impl std::fmt::Debug for PreferenceGatedHaptics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceGatedHaptics")
            .field("enabled", &self.is_enabled())
            .finish_non_exhaustive()
    }
}

impl HapticFeedback for PreferenceGatedHaptics {
    fn impact(&self, style: ImpactStyle) {
        if self.is_enabled() {
            self.inner.impact(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gated_haptics_forward_when_enabled() {
        let mut mock = MockHapticFeedback::new();
        mock.expect_impact()
            .withf(|style| *style == ImpactStyle::Light)
            .times(1)
            .return_const(());

        let gated = PreferenceGatedHaptics::new(Arc::new(mock), true);
        gated.impact(ImpactStyle::Light);
    }

    #[test]
    fn test_gated_haptics_drop_when_disabled() {
        let mut mock = MockHapticFeedback::new();
        mock.expect_impact().times(0);

        let gated = PreferenceGatedHaptics::new(Arc::new(mock), false);
        gated.impact(ImpactStyle::Light);
        assert!(!gated.is_enabled());
    }

    #[test]
    fn test_gated_haptics_preference_toggle() {
        let mut mock = MockHapticFeedback::new();
        mock.expect_impact().times(1).return_const(());

        let gated = PreferenceGatedHaptics::new(Arc::new(mock), false);
        gated.impact(ImpactStyle::Light);
        gated.set_enabled(true);
        gated.impact(ImpactStyle::Light);
    }

    #[test]
    fn test_impact_style_serialization() {
        let json = serde_json::to_string(&ImpactStyle::Light).unwrap();
        assert_eq!(json, "\"light\"");
    }
}
