//! Auto-scroll near the visible edges.
//!
//! While a row is dragged, holding the pointer close to the top or bottom of
//! the visible area scrolls the list so rows further away can be reached.
//! [`ScrollBehavior`] decides where the scroll zone starts:
//!
//! - `Early`: a band of `edge_threshold` pixels inside each visible edge.
//! - `Late`: from the edge itself outwards, so only a pointer that reaches or
//!   leaves the visible area scrolls.
//!
//! Speed ramps linearly across the zone up to `max_speed`, with a small floor
//! so a pointer resting on the zone boundary still moves the list.

use longpress_reorder_core::Rect;
use longpress_reorder_core::logging::targets;

use crate::config::{AutoScrollConfig, ScrollBehavior};

/// Fraction of `max_speed` applied as soon as the pointer enters the zone.
const MIN_SPEED_FRACTION: f32 = 0.1;

/// Computes auto-scroll velocity from the pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoScroller {
    behavior: ScrollBehavior,
    config: AutoScrollConfig,
}

impl AutoScroller {
    /// Creates a scroller for the given behavior and tuning.
    pub fn new(behavior: ScrollBehavior, config: AutoScrollConfig) -> Self {
        Self { behavior, config }
    }

    /// Scroll behavior in effect.
    pub fn behavior(&self) -> ScrollBehavior {
        self.behavior
    }

    /// Signed scroll velocity in pixels per second for a pointer at
    /// `pointer_y` (content coordinates).
    ///
    /// Negative values scroll towards the top, positive towards the bottom,
    /// zero means no scrolling.
    pub fn velocity(&self, pointer_y: f32, visible: Rect) -> f32 {
        if self.behavior == ScrollBehavior::None || self.config.max_speed <= 0.0 {
            return 0.0;
        }

        // Positive inside the visible area, negative past the edge.
        let from_top = pointer_y - visible.top();
        let from_bottom = visible.bottom() - pointer_y;

        let (distance, direction) = if from_top <= from_bottom {
            (from_top, -1.0)
        } else {
            (from_bottom, 1.0)
        };

        let Some(depth) = self.zone_depth(distance) else {
            return 0.0;
        };

        let threshold = self.config.edge_threshold;
        let fraction = if threshold > 0.0 {
            (depth / threshold).clamp(MIN_SPEED_FRACTION, 1.0)
        } else {
            1.0
        };

        let velocity = direction * self.config.max_speed * fraction;
        tracing::trace!(target: targets::AUTO_SCROLL, pointer_y, distance, velocity, "auto-scroll");
        velocity
    }

    /// How deep the pointer is inside the scroll zone, or `None` outside it.
    fn zone_depth(&self, distance: f32) -> Option<f32> {
        let threshold = self.config.edge_threshold;
        match self.behavior {
            ScrollBehavior::None => None,
            ScrollBehavior::Early => (distance <= threshold).then_some(threshold - distance),
            ScrollBehavior::Late => (distance <= 0.0).then_some(-distance),
        }
    }
}
