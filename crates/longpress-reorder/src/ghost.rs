//! Ghost overlay lifecycle.
//!
//! The ghost is the floating stand-in for the dragged row. It is created from
//! a snapshot of the row's cell, lives in an overlay above the list, and is
//! removed once the exit animation settles. [`Ghost`] owns the overlay handle
//! and mirrors the logical center, scale and alpha the overlay was last told
//! to reach, so follow-moves and the exit animation always start from a known
//! value even while an animation is still running on the platform side.

use std::time::Duration;

use longpress_reorder_core::logging::targets;
use longpress_reorder_core::{Easing, Point};
use serde::{Deserialize, Serialize};

use crate::config::ReorderConfig;
use crate::surface::{AnimationId, GhostOverlay};

/// Snapshot styling applied when the ghost is created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GhostStyle {
    /// Drop shadow offset.
    pub shadow_offset: Point,
    /// Drop shadow blur radius.
    pub shadow_radius: f32,
    /// Drop shadow opacity.
    pub shadow_opacity: f32,
    /// Corner radius of the snapshot.
    pub corner_radius: f32,
}

impl Default for GhostStyle {
    fn default() -> Self {
        Self {
            shadow_offset: Point::new(-5.0, 0.0),
            shadow_radius: 0.0,
            shadow_opacity: 0.4,
            corner_radius: 0.0,
        }
    }
}

/// One animated change set for the ghost.
///
/// Properties left as `None` are not animated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GhostAnimation {
    /// Animation duration.
    pub duration: Duration,
    /// Timing curve.
    pub easing: Easing,
    /// Target center.
    pub center: Option<Point>,
    /// Target scale.
    pub scale: Option<f32>,
    /// Target opacity.
    pub alpha: Option<f32>,
}

impl GhostAnimation {
    /// An animation that changes nothing yet.
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            center: None,
            scale: None,
            alpha: None,
        }
    }

    /// Animate the center to `center`.
    pub fn center(mut self, center: Point) -> Self {
        self.center = Some(center);
        self
    }

    /// Animate the scale to `scale`.
    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Animate the opacity to `alpha`.
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = Some(alpha);
        self
    }
}

/// The live ghost of one drag session.
#[derive(Debug)]
pub struct Ghost<H> {
    handle: H,
    center: Point,
    scale: f32,
    alpha: f32,
}

impl<H> Ghost<H> {
    /// Create the ghost from a cell snapshot, centered on the cell and fully
    /// transparent so the entrance animation can fade it in.
    pub fn spawn<O>(overlay: &mut O, visual: O::Visual, center: Point, style: &GhostStyle) -> Self
    where
        O: GhostOverlay<Ghost = H>,
    {
        let handle = overlay.create_ghost(visual, style);
        overlay.set_center(&handle, center);
        overlay.set_scale(&handle, 1.0);
        overlay.set_alpha(&handle, 0.0);
        tracing::trace!(target: targets::GHOST, x = center.x, y = center.y, "ghost created");

        Self {
            handle,
            center,
            scale: 1.0,
            alpha: 0.0,
        }
    }

    /// Start the entrance: lift the ghost to the pointer, scale it up and fade
    /// it in.
    pub fn enter<O>(
        &mut self,
        overlay: &mut O,
        id: AnimationId,
        pointer_y: f32,
        config: &ReorderConfig,
    ) where
        O: GhostOverlay<Ghost = H>,
    {
        let animation = GhostAnimation::new(config.animation_duration(), config.easing())
            .center(self.center.with_y(pointer_y))
            .scale(config.row_scale().factor())
            .alpha(config.ghost_alpha());
        self.run(overlay, id, animation);
    }

    /// Start the exit: drop the ghost onto `target`, shrink it back and fade
    /// it out.
    pub fn exit<O>(
        &mut self,
        overlay: &mut O,
        id: AnimationId,
        target: Point,
        config: &ReorderConfig,
    ) where
        O: GhostOverlay<Ghost = H>,
    {
        let animation = GhostAnimation::new(config.animation_duration(), config.easing())
            .center(target)
            .scale(1.0)
            .alpha(0.0);
        self.run(overlay, id, animation);
    }

    /// Track the pointer vertically. The horizontal position stays put.
    pub fn follow<O>(&mut self, overlay: &mut O, pointer_y: f32)
    where
        O: GhostOverlay<Ghost = H>,
    {
        if self.center.y == pointer_y {
            return;
        }
        self.center = self.center.with_y(pointer_y);
        overlay.set_center(&self.handle, self.center);
    }

    /// Take the ghost off screen.
    pub fn dismiss<O>(self, overlay: &mut O)
    where
        O: GhostOverlay<Ghost = H>,
    {
        tracing::trace!(target: targets::GHOST, "ghost removed");
        overlay.remove(self.handle);
    }

    fn run<O>(&mut self, overlay: &mut O, id: AnimationId, animation: GhostAnimation)
    where
        O: GhostOverlay<Ghost = H>,
    {
        if let Some(center) = animation.center {
            self.center = center;
        }
        if let Some(scale) = animation.scale {
            self.scale = scale;
        }
        if let Some(alpha) = animation.alpha {
            self.alpha = alpha;
        }
        tracing::trace!(target: targets::GHOST, ?id, ?animation, "ghost animation started");
        overlay.animate(&self.handle, id, animation);
    }

    /// Logical center (the target of the latest change).
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Logical scale.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Logical opacity.
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// The overlay's handle.
    #[inline]
    pub fn handle(&self) -> &H {
        &self.handle
    }
}
