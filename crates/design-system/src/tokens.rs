//! Design tokens for the animated controls
//!
//! Spacing, component geometry and motion tokens shared by the controls.
//! Geometry is in points; durations are [`Duration`]s; springs use the
//! response/damping-fraction parameterization from [`app_platform::timing`].

use app_platform::timing::Spring;
use std::time::Duration;

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in points, named by size
pub mod spacing {
    /// 0pt - No spacing
    pub const NONE: f32 = 0.0;
    /// 4pt
    pub const S4: f32 = 4.0;
    /// 8pt
    pub const S8: f32 = 8.0;
    /// 16pt
    pub const S16: f32 = 16.0;
    /// 20pt
    pub const S20: f32 = 20.0;
    /// 24pt
    pub const S24: f32 = 24.0;
    /// 56pt
    pub const S56: f32 = 56.0;

    /// Get spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "none" => Some(NONE),
            "s4" => Some(S4),
            "s8" => Some(S8),
            "s16" => Some(S16),
            "s20" => Some(S20),
            "s24" => Some(S24),
            "s56" => Some(S56),
            _ => None,
        }
    }
}

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Component geometry
pub mod sizing {
    /// Tab strip geometry
    pub mod tabs {
        use crate::tokens::spacing;

        /// Row height
        pub const HEIGHT: f32 = spacing::S56;
        /// Highlight bar thickness
        pub const HIGHLIGHT_HEIGHT: f32 = spacing::S4;
        /// Horizontal padding around content-sized labels
        pub const CONTENT_PADDING: f32 = spacing::S16;
        /// Gap between a label and its badge
        pub const BADGE_GAP: f32 = spacing::S8;
    }

    /// Toggle switch geometry
    pub mod switch {
        /// Track width
        pub const TRACK_WIDTH: f32 = 52.0;
        /// Track height
        pub const TRACK_HEIGHT: f32 = 32.0;
        /// Resting thumb diameter
        pub const THUMB_SIZE: f32 = 28.0;
        /// Thumb width while stretched
        pub const THUMB_STRETCH_WIDTH: f32 = 34.0;
        /// Inset between track edge and thumb
        pub const TRACK_PADDING: f32 = 2.0;

        /// Horizontal distance the thumb's center travels between states
        pub const THUMB_TRAVEL: f32 = TRACK_WIDTH - THUMB_SIZE - TRACK_PADDING * 2.0;
    }

    /// Morphing search item geometry
    pub mod nav_search {
        /// Expanded pill width
        pub const PILL_WIDTH: f32 = 140.0;
        /// Collapsed circle diameter (also the pill height)
        pub const CIRCLE_SIZE: f32 = 40.0;
        /// Gap between icon and label
        pub const ICON_GAP: f32 = crate::tokens::spacing::S8;
    }

    /// Notification badge geometry
    pub mod badge {
        /// Badge diameter
        pub const SIZE: f32 = 20.0;
    }
}

// =============================================================================
// Motion Tokens
// =============================================================================

/// Animation durations and delays
pub mod duration {
    use super::Duration;

    /// Count-up total duration
    pub const COUNT_UP: Duration = Duration::from_millis(800);
    /// Toggle thumb stretch (ease-out)
    pub const TOGGLE_STRETCH: Duration = Duration::from_millis(100);
    /// Delay before the toggle thumb relaxes
    pub const TOGGLE_SETTLE_DELAY: Duration = Duration::from_millis(100);
    /// Label dissolve/fade for the morphing control
    pub const LABEL_FADE: Duration = Duration::from_millis(150);
    /// Delay before the geometry collapses
    pub const COLLAPSE_DELAY: Duration = Duration::from_millis(120);
    /// Delay before the label fades back in after expanding
    pub const LABEL_REVEAL_DELAY: Duration = Duration::from_millis(250);
}

/// Count-up step cap
pub const COUNT_UP_MAX_STEPS: u32 = 20;

/// Spring presets
pub mod springs {
    use super::Spring;

    /// Tab selection highlight and scroll-to-selection
    pub const SELECTION: Spring = Spring::new(0.35, 0.8);
    /// Toggle thumb slide and relax
    pub const TOGGLE: Spring = Spring::new(0.35, 0.7);
    /// Pill/circle geometry morph
    pub const MORPH: Spring = Spring::new(0.4, 0.8);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_get() {
        assert_eq!(spacing::get("s16"), Some(16.0));
        assert_eq!(spacing::get("none"), Some(0.0));
        assert_eq!(spacing::get("invalid"), None);
    }

    #[test]
    fn test_switch_travel() {
        assert_eq!(sizing::switch::THUMB_TRAVEL, 20.0);
        assert!(sizing::switch::THUMB_STRETCH_WIDTH > sizing::switch::THUMB_SIZE);
    }

    #[test]
    fn test_morph_phase_ordering() {
        // Label must be gone (or going) before the geometry starts collapsing
        assert!(duration::COLLAPSE_DELAY <= duration::LABEL_FADE);
        assert!(duration::LABEL_REVEAL_DELAY > Duration::ZERO);
    }

    #[test]
    fn test_springs_are_valid() {
        assert!(springs::SELECTION.is_valid());
        assert!(springs::TOGGLE.is_valid());
        assert!(springs::MORPH.is_valid());
    }
}
