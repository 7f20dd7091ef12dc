//! Platform-facing collaborators.
//!
//! The controller does not draw, hit-test or recognize gestures itself. The
//! embedding platform supplies:
//!
//! - a stream of [`GestureEvent`]s from its long-press recognizer,
//! - a [`ListView`] that resolves points to rows and moves rows visually,
//! - a [`GhostOverlay`] that shows and animates the floating snapshot.
//!
//! Both traits are implemented by the platform adapter; test doubles in this
//! crate's `tests/` directory show a minimal recording implementation.

use std::time::Duration;

use longpress_reorder_core::{Easing, Point, Rect};

use crate::ghost::{GhostAnimation, GhostStyle};
use crate::position::Position;

/// Phase of a long-press gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// The press was held long enough to be recognized.
    Began,
    /// The pointer moved while pressed.
    Changed,
    /// The pointer was lifted.
    Ended,
    /// The platform interrupted the gesture.
    Cancelled,
}

/// A long-press gesture update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureEvent {
    /// Gesture phase.
    pub phase: GesturePhase,
    /// Pointer location in list content coordinates.
    pub location: Point,
}

impl GestureEvent {
    /// Creates a new gesture event.
    pub fn new(phase: GesturePhase, location: Point) -> Self {
        Self { phase, location }
    }

    /// Shorthand for a `Began` event.
    pub fn began(location: Point) -> Self {
        Self::new(GesturePhase::Began, location)
    }

    /// Shorthand for a `Changed` event.
    pub fn changed(location: Point) -> Self {
        Self::new(GesturePhase::Changed, location)
    }

    /// Shorthand for an `Ended` event.
    pub fn ended(location: Point) -> Self {
        Self::new(GesturePhase::Ended, location)
    }

    /// Shorthand for a `Cancelled` event.
    pub fn cancelled(location: Point) -> Self {
        Self::new(GesturePhase::Cancelled, location)
    }
}

/// Identifies one ghost animation.
///
/// Allocated by the controller and handed to [`GhostOverlay::animate`]; the
/// platform reports it back through
/// [`DragController::animation_finished`](crate::DragController::animation_finished).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(u64);

impl AnimationId {
    /// Wrap a raw id.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// The list widget being reordered.
///
/// All row operations are visual only: implementations must not touch the
/// host's backing model. The host keeps its model in step through
/// [`ReorderPolicy::position_changed`](crate::ReorderPolicy::position_changed).
pub trait ListView {
    /// A snapshot of a row's cell, consumed by [`GhostOverlay::create_ghost`].
    type Visual;

    /// Resolves a point to the row under it, or `None` outside every row.
    fn position_at(&self, point: Point) -> Option<Position>;

    /// Captures the cell at `position`, or `None` if it is not on screen.
    fn cell_visual_at(&mut self, position: Position) -> Option<Self::Visual>;

    /// Center of the cell at `position`, or `None` if it has no frame.
    fn cell_center(&self, position: Position) -> Option<Point>;

    /// Moves the row at `from` to `to`.
    fn move_row(&mut self, from: Position, to: Position);

    /// Hides or shows the cell at `position` without removing it from layout.
    fn set_row_hidden(&mut self, position: Position, hidden: bool);

    /// Sets the opacity of the cell at `position` immediately.
    fn set_row_alpha(&mut self, position: Position, alpha: f32);

    /// Animates the opacity of the cell at `position`.
    fn fade_row(&mut self, position: Position, alpha: f32, duration: Duration, easing: Easing);

    /// The currently visible part of the list, in content coordinates.
    ///
    /// Lists that never scroll can keep the default, which disables
    /// auto-scroll.
    fn visible_rect(&self) -> Option<Rect> {
        None
    }

    /// Scrolls the content by `dy` pixels and returns the distance actually
    /// scrolled after clamping to the content bounds.
    fn scroll_by(&mut self, dy: f32) -> f32 {
        let _ = dy;
        0.0
    }
}

/// The overlay hosting the ghost above the list.
pub trait GhostOverlay {
    /// Cell snapshot type, shared with the [`ListView`].
    type Visual;
    /// Handle to a created ghost.
    type Ghost;

    /// Creates a ghost from a cell snapshot.
    fn create_ghost(&mut self, visual: Self::Visual, style: &GhostStyle) -> Self::Ghost;

    /// Moves the ghost immediately.
    fn set_center(&mut self, ghost: &Self::Ghost, center: Point);

    /// Scales the ghost immediately.
    fn set_scale(&mut self, ghost: &Self::Ghost, scale: f32);

    /// Sets the ghost opacity immediately.
    fn set_alpha(&mut self, ghost: &Self::Ghost, alpha: f32);

    /// Starts an animation. The platform must report its completion exactly
    /// once with the same `id`.
    fn animate(&mut self, ghost: &Self::Ghost, id: AnimationId, animation: GhostAnimation);

    /// Removes the ghost.
    fn remove(&mut self, ghost: Self::Ghost);
}
