//! Animated controls for the design system
//!
//! This crate provides the interactive controls whose behavior depends on
//! time: a selectable strip with a sliding highlight, a count-up badge, a
//! binary toggle and a pill/circle morphing control. Each control is a
//! headless state machine. The host feeds it timestamps and reads back
//! presentation values to draw.
//!
//! # Modules
//!
//! - [`strip`] - Selectable strip (tabs) with highlight and auto-scroll
//! - [`count_up`] - Count-up badge and its step function
//! - [`toggle`] - Binary toggle with thumb stretch
//! - [`morph`] - Pill/circle control with ordered phases
//! - [`timeline`] - Deterministic scheduler for delayed effects
//! - [`animated`] - Interpolated presentation values
//! - [`driver`] - Tokio frame driver
//! - [`config`] - Motion and feedback configuration
//! - [`tokens`] - Design tokens (sizes, durations, springs)
//! - [`accessibility`] - Accessibility metadata
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use app_platform::{NoScroll, SilentHaptics};
//! use app_state::SharedState;
//! use design_system::{Item, SelectableStrip};
//!
//! let selection = SharedState::new(0);
//! let mut strip = SelectableStrip::new(
//!     vec![Item::new("Label 1"), Item::new("Label 2").with_badge(5)],
//!     selection.binding(),
//!     Arc::new(SilentHaptics),
//!     Arc::new(NoScroll),
//! )
//! .unwrap();
//!
//! strip.select(1, Duration::ZERO);
//! strip.tick(Duration::from_secs(2));
//!
//! assert_eq!(selection.get(), 1);
//! assert_eq!(strip.badge(1).map(|b| b.displayed()), Some(5));
//! assert_eq!(
//!     strip.accessibility_label(1).as_deref(),
//!     Some("Label 2, 5 notifications, selected")
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod accessibility;
pub mod animated;
pub mod config;
pub mod count_up;
pub mod driver;
pub mod error;
pub mod morph;
pub mod strip;
pub mod timeline;
pub mod toggle;
pub mod tokens;

// Re-export commonly used types
pub use accessibility::{AccessibilityProps, AccessibilityTrait};
pub use animated::AnimatedValue;
pub use config::{ControlsConfig, CountUpConfig};
pub use count_up::{displayed_value, BadgeView, CountUpOutcome, NumericCountUp};
pub use driver::{run_until_settled, Animate, DEFAULT_FRAME_INTERVAL};
pub use error::{ControlError, Result};
pub use morph::{AppliedEffect, MorphEffect, MorphPhase, MorphView, MorphingDualState};
pub use strip::{safe_index, Item, LayoutMode, SelectableStrip, TabView, TabWidth};
pub use timeline::Timeline;
pub use toggle::{BinaryToggle, ToggleState, ToggleView};
pub use tokens::{duration, sizing, spacing, springs};
