//! Host-owned state for the JoJo Playground design system
//!
//! Controls never own the values a screen cares about (the selected tab, a
//! switch's on/off value). A screen keeps those in a [`SharedState`] and
//! hands each control a [`Binding`]: a getter plus a mutation callback.
//! Screens observe changes through the same watch-channel pattern used for
//! any other reactive value.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod binding;

pub use binding::{Binding, SharedState};
