//! Scroll requests
//!
//! Scrollable containers are owned by the host. Controls only ask for an
//! item to be brought into view.

use crate::timing::Curve;
use serde::{Deserialize, Serialize};

/// Where the target lands inside the visible region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollAnchor {
    /// Leading edge
    Leading,
    /// Visual center
    #[default]
    Center,
    /// Trailing edge
    Trailing,
}

/// Request to scroll an item into view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    /// Identity of the item (its position in the container)
    pub target: usize,
    /// Alignment of the item after scrolling
    pub anchor: ScrollAnchor,
    /// Animation applied to the scroll offset
    pub curve: Curve,
}

impl ScrollRequest {
    /// Center `target` using `curve`
    pub fn center(target: usize, curve: Curve) -> Self {
        Self {
            target,
            anchor: ScrollAnchor::Center,
            curve,
        }
    }
}

/// Host scroll container
#[cfg_attr(test, mockall::automock)]
pub trait ScrollController: Send + Sync {
    /// Scroll as requested
    fn scroll_to(&self, request: ScrollRequest);
}

/// Scroll sink for containers that cannot scroll
#[derive(Debug, Clone, Copy, Default)]
pub struct NoScroll;

impl ScrollController for NoScroll {
    fn scroll_to(&self, request: ScrollRequest) {
        tracing::trace!(target_item = request.target, "scroll request dropped");
    }
}
