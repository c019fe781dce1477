//! Control configuration
//!
//! Hosts can tune motion and feedback without touching the controls. Every
//! field has a default matching the design tokens, so an empty JSON object
//! is a valid configuration.

use crate::error::{ControlError, Result};
use crate::tokens::{self, springs};
use app_platform::haptics::{HapticFeedback, PreferenceGatedHaptics};
use app_platform::timing::Spring;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Count-up animation settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CountUpConfig {
    /// Total animation duration in seconds
    #[serde(default = "default_count_up_secs")]
    pub duration_secs: f64,
    /// Maximum number of visible steps
    #[serde(default = "default_max_steps")]
    pub max_steps: u32,
}

fn default_count_up_secs() -> f64 {
    tokens::duration::COUNT_UP.as_secs_f64()
}

fn default_max_steps() -> u32 {
    tokens::COUNT_UP_MAX_STEPS
}

impl Default for CountUpConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_count_up_secs(),
            max_steps: default_max_steps(),
        }
    }
}

impl CountUpConfig {
    /// Duration as a [`Duration`]
    ///
    /// Values no [`Duration`] can hold fall back to the default count-up
    /// duration.
    pub fn duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.duration_secs.max(0.0))
            .unwrap_or(tokens::duration::COUNT_UP)
    }

    /// Check that the timing is usable
    pub fn validate(&self) -> Result<()> {
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(ControlError::InvalidConfig(format!(
                "count_up.duration_secs must be positive, got {}",
                self.duration_secs
            )));
        }
        if self.max_steps == 0 {
            return Err(ControlError::InvalidConfig(
                "count_up.max_steps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration shared by all animated controls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlsConfig {
    /// Whether controls request haptic feedback
    #[serde(default = "default_true")]
    pub haptic_feedback: bool,
    /// Count-up settings
    #[serde(default)]
    pub count_up: CountUpConfig,
    /// Spring for the selection highlight and scroll-to-selection
    #[serde(default = "default_selection_spring")]
    pub selection_spring: Spring,
    /// Spring for the toggle thumb
    #[serde(default = "default_toggle_spring")]
    pub toggle_spring: Spring,
    /// Spring for the pill/circle morph
    #[serde(default = "default_morph_spring")]
    pub morph_spring: Spring,
}

fn default_true() -> bool {
    true
}

fn default_selection_spring() -> Spring {
    springs::SELECTION
}

fn default_toggle_spring() -> Spring {
    springs::TOGGLE
}

fn default_morph_spring() -> Spring {
    springs::MORPH
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            haptic_feedback: true,
            count_up: CountUpConfig::default(),
            selection_spring: springs::SELECTION,
            toggle_spring: springs::TOGGLE,
            morph_spring: springs::MORPH,
        }
    }
}

impl ControlsConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Disable or enable haptics
    pub fn with_haptic_feedback(mut self, enabled: bool) -> Self {
        self.haptic_feedback = enabled;
        self
    }

    /// Override count-up settings
    pub fn with_count_up(mut self, duration: Duration, max_steps: u32) -> Self {
        self.count_up = CountUpConfig {
            duration_secs: duration.as_secs_f64(),
            max_steps,
        };
        self
    }

    /// Route `engine` through the haptic preference
    pub fn haptics(&self, engine: Arc<dyn HapticFeedback>) -> Arc<dyn HapticFeedback> {
        if self.haptic_feedback {
            engine
        } else {
            Arc::new(PreferenceGatedHaptics::new(engine, false))
        }
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<()> {
        self.count_up.validate()?;
        for (name, spring) in [
            ("selection_spring", self.selection_spring),
            ("toggle_spring", self.toggle_spring),
            ("morph_spring", self.morph_spring),
        ] {
            if !spring.is_valid() {
                return Err(ControlError::InvalidConfig(format!(
                    "{} needs positive response and damping, got {:?}",
                    name, spring
                )));
            }
        }
        Ok(())
    }
}
