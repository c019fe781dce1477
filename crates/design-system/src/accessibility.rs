//! Accessibility metadata exposed by controls

use serde::{Deserialize, Serialize};

/// Traits announced by assistive technologies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessibilityTrait {
    /// Element can be activated
    Button,
    /// Element is the current selection
    Selected,
}

/// Accessibility properties for one element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityProps {
    /// Accessible label for screen readers
    pub label: String,
    /// Current value (e.g. "On")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Announced traits
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub traits: Vec<AccessibilityTrait>,
}

impl AccessibilityProps {
    /// Props with a label only
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Set the value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Add a trait (duplicates are ignored)
    pub fn with_trait(mut self, accessibility_trait: AccessibilityTrait) -> Self {
        if !self.traits.contains(&accessibility_trait) {
            self.traits.push(accessibility_trait);
        }
        self
    }

    /// Whether `accessibility_trait` is present
    pub fn has_trait(&self, accessibility_trait: AccessibilityTrait) -> bool {
        self.traits.contains(&accessibility_trait)
    }
}
