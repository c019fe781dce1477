//! Morphing dual-state control
//!
//! An expanded pill (icon + label) that collapses into a circle (icon only)
//! when activated. The two presentation flags lag the external flag so the
//! phases run in a safe order:
//!
//! - collapsing: the label fades out first, the geometry follows 0.12 s later
//! - expanding: the geometry grows first, the label fades in 0.25 s later
//!
//! The label is never drawn inside geometry too small for it, and the full
//! pill never flashes up without its label.

use crate::animated::AnimatedValue;
use crate::config::ControlsConfig;
use crate::driver::Animate;
use crate::error::Result;
use crate::timeline::Timeline;
use crate::tokens::{duration, sizing::nav_search};
use app_platform::timing::{Curve, Spring};
use serde::Serialize;
use std::time::Duration;

/// A presentation change applied by the control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MorphEffect {
    /// Label starts fading out
    HideLabel,
    /// Geometry starts shrinking to the circle
    Collapse,
    /// Geometry starts growing to the pill
    Expand,
    /// Label starts fading in
    ShowLabel,
}

/// An effect together with the time it took effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppliedEffect {
    /// When the effect was applied
    pub at: Duration,
    /// The effect
    pub effect: MorphEffect,
}

/// Where the control is in its transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MorphPhase {
    /// At rest as a pill with label
    Expanded,
    /// Label dissolving, geometry not yet collapsing
    LabelFadingOut,
    /// Geometry shrinking
    Collapsing,
    /// At rest as a circle
    Collapsed,
    /// Geometry growing, label still hidden
    Expanding,
    /// Label fading back in
    LabelFadingIn,
}

/// Pill/circle control driven by an external activation flag
#[derive(Debug, Clone)]
pub struct MorphingDualState {
    active: bool,
    text_visible: bool,
    collapsed: bool,
    spring: Spring,
    label_opacity: AnimatedValue,
    width: AnimatedValue,
    timeline: Timeline<MorphEffect>,
}

fn width_for(collapsed: bool) -> f32 {
    if collapsed {
        nav_search::CIRCLE_SIZE
    } else {
        nav_search::PILL_WIDTH
    }
}

impl MorphingDualState {
    /// Control at rest in the presentation matching `active`
    pub fn new(active: bool) -> Self {
        Self::build(active, &ControlsConfig::default())
    }

    /// Control using the configured morph spring
    ///
    /// Fails with [`InvalidConfig`](crate::error::ControlError::InvalidConfig)
    /// when the configuration does not validate.
    pub fn with_config(active: bool, config: &ControlsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(active, config))
    }

    fn build(active: bool, config: &ControlsConfig) -> Self {
        Self {
            active,
            text_visible: !active,
            collapsed: active,
            spring: config.morph_spring,
            label_opacity: AnimatedValue::fixed(if active { 0.0 } else { 1.0 }),
            width: AnimatedValue::fixed(width_for(active)),
            timeline: Timeline::new(),
        }
    }

    /// Latest external flag
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the label is shown (or fading in)
    pub fn text_visible(&self) -> bool {
        self.text_visible
    }

    /// Whether the geometry is the circle (or shrinking to it)
    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    /// Start time of the most recent label fade
    pub fn label_animation_started_at(&self) -> Option<Duration> {
        self.label_opacity.started_at()
    }

    /// Start time of the most recent geometry morph
    pub fn geometry_animation_started_at(&self) -> Option<Duration> {
        self.width.started_at()
    }

    /// Follow a new external flag
    ///
    /// Schedules the phases for the new direction and drops whatever the
    /// previous direction still had pending. Returns the effects applied
    /// immediately; the delayed phase is applied by [`MorphingDualState::tick`].
    pub fn set_active(&mut self, active: bool, now: Duration) -> Vec<AppliedEffect> {
        if active == self.active {
            return Vec::new();
        }
        self.active = active;
        let superseded = self.timeline.supersede();

        if active {
            self.timeline.schedule(now, MorphEffect::HideLabel);
            self.timeline
                .schedule(now + duration::COLLAPSE_DELAY, MorphEffect::Collapse);
        } else {
            self.timeline.schedule(now, MorphEffect::Expand);
            self.timeline
                .schedule(now + duration::LABEL_REVEAL_DELAY, MorphEffect::ShowLabel);
        }
        tracing::debug!(active, superseded, "morph direction changed");

        self.tick(now)
    }

    /// Apply every phase due at or before `now`
    pub fn tick(&mut self, now: Duration) -> Vec<AppliedEffect> {
        let due = self.timeline.drain_due(now);
        let mut applied = Vec::with_capacity(due.len());
        for (at, effect) in due {
            self.apply(effect, at);
            applied.push(AppliedEffect { at, effect });
        }
        applied
    }

    fn apply(&mut self, effect: MorphEffect, at: Duration) {
        match effect {
            MorphEffect::HideLabel => {
                self.text_visible = false;
                self.label_opacity
                    .animate_to(0.0, Curve::ease_out(duration::LABEL_FADE), at);
            }
            MorphEffect::ShowLabel => {
                self.text_visible = true;
                self.label_opacity
                    .animate_to(1.0, Curve::ease_in(duration::LABEL_FADE), at);
            }
            MorphEffect::Collapse => {
                self.collapsed = true;
                self.width
                    .animate_to(width_for(true), Curve::spring(self.spring), at);
            }
            MorphEffect::Expand => {
                self.collapsed = false;
                self.width
                    .animate_to(width_for(false), Curve::spring(self.spring), at);
            }
        }
        tracing::trace!(?effect, ?at, "morph phase applied");
    }

    /// Transition phase at `now`
    pub fn phase(&self, now: Duration) -> MorphPhase {
        if self.is_settled(now) {
            return if self.active {
                MorphPhase::Collapsed
            } else {
                MorphPhase::Expanded
            };
        }
        match (self.active, self.collapsed, self.text_visible) {
            (true, false, _) => MorphPhase::LabelFadingOut,
            (true, true, _) => MorphPhase::Collapsing,
            (false, _, false) => MorphPhase::Expanding,
            (false, _, true) => MorphPhase::LabelFadingIn,
        }
    }

    /// Render snapshot at `now`
    pub fn view(&self, now: Duration) -> MorphView {
        MorphView {
            width: self.width.value_at(now),
            height: nav_search::CIRCLE_SIZE,
            label_opacity: self.label_opacity.value_at(now).clamp(0.0, 1.0),
            label_present: !self.collapsed,
            icon_gap: if self.collapsed { 0.0 } else { nav_search::ICON_GAP },
            icon_emphasized: self.collapsed,
            phase: self.phase(now),
        }
    }
}

impl Animate for MorphingDualState {
    fn tick(&mut self, now: Duration) {
        MorphingDualState::tick(self, now);
    }

    fn is_settled(&self, now: Duration) -> bool {
        self.timeline.is_idle() && self.width.is_settled(now) && self.label_opacity.is_settled(now)
    }
}

/// What the host draws for the morphing control
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MorphView {
    /// Current width (pill → circle)
    pub width: f32,
    /// Height (constant)
    pub height: f32,
    /// Label opacity, 0.0 to 1.0
    pub label_opacity: f32,
    /// Whether the label takes part in layout at all
    pub label_present: bool,
    /// Space between icon and label, zero once the label leaves layout
    pub icon_gap: f32,
    /// Whether the icon uses the emphasized color
    pub icon_emphasized: bool,
    /// Transition phase
    pub phase: MorphPhase,
}
