//! Selectable strip
//!
//! A row of mutually exclusive items (tabs) with a highlight that springs
//! between them. Two items lay out as equal fixed-width columns; three or
//! more become a horizontally scrollable row where each column fits its
//! content and the selection is kept centered.
//!
//! The selected index belongs to the host. The strip reads it through a
//! [`Binding`] and only proposes changes; an out-of-range value is clamped
//! for presentation but never written back.

use crate::accessibility::{AccessibilityProps, AccessibilityTrait};
use crate::animated::AnimatedValue;
use crate::config::ControlsConfig;
use crate::count_up::{BadgeView, NumericCountUp};
use crate::driver::Animate;
use crate::error::{ControlError, Result};
use crate::tokens::sizing::tabs;
use app_platform::haptics::{HapticFeedback, ImpactStyle};
use app_platform::scroll::{ScrollController, ScrollRequest};
use app_platform::timing::{Curve, Spring};
use app_state::Binding;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Minimum number of items in a strip
pub const MIN_ITEMS: usize = 2;

/// One selectable entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Label text
    pub label: String,
    /// Badge count (e.g., unread notifications)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_count: Option<u32>,
}

impl Item {
    /// Item without a badge
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            badge_count: None,
        }
    }

    /// Set badge count
    pub fn with_badge(mut self, count: u32) -> Self {
        self.badge_count = Some(count);
        self
    }
}

/// How the strip lays out its items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Equal fixed-width columns, labels truncate, no scrolling
    Static,
    /// Content-width columns, horizontal scrolling, no truncation
    Scrollable,
}

impl LayoutMode {
    /// Layout for a strip of `count` items
    pub fn for_count(count: usize) -> Self {
        if count <= MIN_ITEMS {
            Self::Static
        } else {
            Self::Scrollable
        }
    }
}

/// Column width rule for one item
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "fraction")]
pub enum TabWidth {
    /// Fixed share of the strip width
    Equal(f32),
    /// Sized to the label (plus badge)
    Content,
}

/// Clamp an externally supplied selection into `0..count`
pub fn safe_index(selection: isize, count: usize) -> usize {
    if count == 0 || selection < 0 {
        return 0;
    }
    (selection as usize).min(count - 1)
}

/// Row of mutually exclusive items bound to a host-owned index
pub struct SelectableStrip {
    items: Vec<Item>,
    badges: Vec<Option<NumericCountUp>>,
    selection: Binding<isize>,
    haptics: Arc<dyn HapticFeedback>,
    scroller: Arc<dyn ScrollController>,
    spring: Spring,
    layout: LayoutMode,
    observed: isize,
    highlight: AnimatedValue,
}

impl std::fmt::Debug for SelectableStrip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectableStrip")
            .field("items", &self.items)
            .field("layout", &self.layout)
            .field("observed", &self.observed)
            .field("highlight", &self.highlight)
            .finish_non_exhaustive()
    }
}

impl SelectableStrip {
    /// Strip with default motion
    ///
    /// Fails with [`ControlError::InsufficientItems`] for fewer than two items.
    pub fn new(
        items: Vec<Item>,
        selection: Binding<isize>,
        haptics: Arc<dyn HapticFeedback>,
        scroller: Arc<dyn ScrollController>,
    ) -> Result<Self> {
        Self::with_config(items, selection, haptics, scroller, &ControlsConfig::default())
    }

    /// Strip using the configured spring, count-up timing and haptic preference
    ///
    /// Fails with [`ControlError::InsufficientItems`] for fewer than two items
    /// and [`ControlError::InvalidConfig`] when the configuration does not
    /// validate.
    pub fn with_config(
        items: Vec<Item>,
        selection: Binding<isize>,
        haptics: Arc<dyn HapticFeedback>,
        scroller: Arc<dyn ScrollController>,
        config: &ControlsConfig,
    ) -> Result<Self> {
        if items.len() < MIN_ITEMS {
            tracing::error!(count = items.len(), "selectable strip needs at least two items");
            return Err(ControlError::InsufficientItems(items.len()));
        }

        config.validate()?;

        let mut badges = Vec::with_capacity(items.len());
        for item in &items {
            let badge = match item.badge_count {
                Some(count) => {
                    let mut badge =
                        NumericCountUp::with_config(i64::from(count), 0, &config.count_up)?;
                    badge.mount();
                    Some(badge)
                }
                None => None,
            };
            badges.push(badge);
        }

        let observed = selection.get();
        let layout = LayoutMode::for_count(items.len());
        let highlight = AnimatedValue::fixed(safe_index(observed, items.len()) as f32);

        tracing::debug!(count = items.len(), ?layout, selection = observed, "selectable strip created");

        Ok(Self {
            haptics: config.haptics(haptics),
            spring: config.selection_spring,
            items,
            badges,
            selection,
            scroller,
            layout,
            observed,
            highlight,
        })
    }

    /// Items in display order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; a strip holds at least two items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Layout mode derived from the item count
    pub fn layout_mode(&self) -> LayoutMode {
        self.layout
    }

    /// Bound selection, possibly out of range
    pub fn selection(&self) -> isize {
        self.selection.get()
    }

    /// Bound selection clamped into range
    pub fn selected_index(&self) -> usize {
        safe_index(self.selection.get(), self.items.len())
    }

    /// Badge state for item `index`, if it carries one
    pub fn badge(&self, index: usize) -> Option<&NumericCountUp> {
        self.badges.get(index).and_then(Option::as_ref)
    }

    /// Tap on item `index`
    ///
    /// Returns whether anything happened. Selecting the current item, or an
    /// index outside the strip, changes nothing.
    pub fn select(&mut self, index: usize, now: Duration) -> bool {
        if index >= self.items.len() {
            tracing::warn!(index, count = self.items.len(), "ignoring selection outside strip");
            return false;
        }
        let requested = index as isize;
        if requested == self.selection.get() {
            return false;
        }

        self.haptics.impact(ImpactStyle::Light);

        if let Some(badge) = self.badges[index].as_mut() {
            badge.retrigger(now);
        }

        self.selection.set(requested);
        self.observed = requested;
        self.follow(index, now);

        tracing::debug!(index, label = %self.items[index].label, "strip selection changed");
        true
    }

    /// Pick up a selection written by the host
    ///
    /// The highlight retargets from where it currently is; the latest write
    /// wins. Returns whether the bound value had changed.
    pub fn sync(&mut self, now: Duration) -> bool {
        let bound = self.selection.get();
        if bound == self.observed {
            return false;
        }
        self.observed = bound;
        let index = safe_index(bound, self.items.len());
        tracing::debug!(selection = bound, index, "strip selection changed by host");
        self.follow(index, now);
        true
    }

    fn follow(&mut self, index: usize, now: Duration) {
        let curve = Curve::spring(self.spring);
        self.highlight.animate_to(index as f32, curve, now);
        if self.layout == LayoutMode::Scrollable {
            self.scroller.scroll_to(ScrollRequest::center(index, curve));
        }
    }

    /// Follow host writes and advance every badge
    pub fn tick(&mut self, now: Duration) {
        self.sync(now);
        for badge in self.badges.iter_mut().flatten() {
            badge.tick(now);
        }
    }

    /// Highlight position in item-index space at `now`
    pub fn indicator_position(&self, now: Duration) -> f32 {
        self.highlight.value_at(now)
    }

    /// Combined accessibility label for item `index`
    pub fn accessibility_label(&self, index: usize) -> Option<String> {
        let item = self.items.get(index)?;
        let mut label = item.label.clone();
        if let Some(count) = item.badge_count {
            label.push_str(&format!(", {} notifications", count));
        }
        if index == self.selected_index() {
            label.push_str(", selected");
        }
        Some(label)
    }

    /// Accessibility properties for item `index`
    pub fn accessibility(&self, index: usize) -> Option<AccessibilityProps> {
        let label = self.accessibility_label(index)?;
        let mut props = AccessibilityProps::labeled(label).with_trait(AccessibilityTrait::Button);
        if index == self.selected_index() {
            props = props.with_trait(AccessibilityTrait::Selected);
        }
        Some(props)
    }

    /// Render snapshots for every item at `now`
    pub fn tab_views(&self, now: Duration) -> Vec<TabView> {
        let selected = self.selected_index();
        let indicator = self.indicator_position(now);
        let width = match self.layout {
            LayoutMode::Static => TabWidth::Equal(1.0 / self.items.len() as f32),
            LayoutMode::Scrollable => TabWidth::Content,
        };

        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| TabView {
                index,
                label: item.label.clone(),
                truncates: self.layout == LayoutMode::Static,
                width,
                height: tabs::HEIGHT,
                padding: tabs::CONTENT_PADDING,
                badge_gap: tabs::BADGE_GAP,
                badge: self.badge(index).map(NumericCountUp::view),
                is_selected: index == selected,
                highlight: (1.0 - (indicator - index as f32).abs()).clamp(0.0, 1.0),
                highlight_height: tabs::HIGHLIGHT_HEIGHT,
                accessibility: self.accessibility(index).unwrap_or_default(),
            })
            .collect()
    }
}

impl Animate for SelectableStrip {
    fn tick(&mut self, now: Duration) {
        SelectableStrip::tick(self, now);
    }

    fn is_settled(&self, now: Duration) -> bool {
        self.selection.get() == self.observed
            && self.highlight.is_settled(now)
            && self.badges.iter().flatten().all(|badge| !badge.is_animating())
    }
}

/// What the host draws for one item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabView {
    /// Position in the strip
    pub index: usize,
    /// Label text
    pub label: String,
    /// Whether the label truncates with an ellipsis
    pub truncates: bool,
    /// Column width rule
    pub width: TabWidth,
    /// Column height
    pub height: f32,
    /// Horizontal content padding
    pub padding: f32,
    /// Space between the label and the badge
    pub badge_gap: f32,
    /// Badge snapshot, for badged items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<BadgeView>,
    /// Whether this is the selected item
    pub is_selected: bool,
    /// Highlight coverage, 1.0 when the indicator sits on this item
    pub highlight: f32,
    /// Thickness of the highlight bar
    pub highlight_height: f32,
    /// Accessibility properties
    pub accessibility: AccessibilityProps,
}
