//! Host platform contracts for the JoJo Playground design system
//!
//! The animated controls never talk to a UI framework directly. Everything
//! they need from the host is expressed here as a small trait or value type:
//!
//! - [`haptics`] - Fire-and-forget impact feedback
//! - [`scroll`] - Scroll-to-item requests for scrollable containers
//! - [`timing`] - Eased and spring timing curves (progress over time)
//! - [`clock`] - Frame clocks, including a virtual clock for tests
//!
//! # Example
//!
//! ```rust
//! use app_platform::timing::{Curve, Spring};
//! use std::time::Duration;
//!
//! let curve = Curve::spring(Spring::new(0.35, 0.8));
//! assert_eq!(curve.progress(Duration::ZERO), 0.0);
//! assert_eq!(curve.progress(Duration::from_secs(2)), 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod haptics;
pub mod scroll;
pub mod timing;

pub use clock::{FrameClock, MonotonicClock, VirtualClock};
pub use haptics::{HapticFeedback, ImpactStyle, PreferenceGatedHaptics, SilentHaptics};
pub use scroll::{NoScroll, ScrollAnchor, ScrollController, ScrollRequest};
pub use timing::{Curve, Easing, Spring};
