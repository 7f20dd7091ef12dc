//! Drag session state.

use std::fmt;

use longpress_reorder_core::Point;
use longpress_reorder_core::logging::{span_names, targets};

use crate::ghost::Ghost;
use crate::position::Position;
use crate::surface::AnimationId;

/// Observable state of a drag controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragState {
    /// No drag in flight.
    #[default]
    Idle,
    /// A row is picked up and follows the pointer.
    Dragging,
    /// The pointer was released; the ghost is animating back into the list.
    Settling,
}

impl fmt::Display for DragState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Dragging => write!(f, "dragging"),
            Self::Settling => write!(f, "settling"),
        }
    }
}

/// The two points where a drag waits on the platform's animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Continuation {
    /// Resumes after the ghost lifted out of the list.
    Entrance,
    /// Resumes after the ghost dropped back into the list.
    Exit,
}

/// Read-only view of the in-flight drag, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSnapshot {
    /// `Dragging` or `Settling`.
    pub state: DragState,
    /// Where the drag started.
    pub initial_position: Position,
    /// Where the dragged row currently sits.
    pub current_position: Position,
    /// The entrance animation is still running.
    pub ghost_animating: bool,
    /// The real cell is waiting for the entrance animation to be revealed.
    pub ghost_pending_reveal: bool,
    /// Last pointer location.
    pub pointer: Point,
}

/// The single in-flight drag of one controller.
#[derive(Debug)]
pub(crate) struct DragSession<H> {
    /// `true` until the pointer is released or the gesture is cancelled.
    pub(crate) active: bool,
    pub(crate) initial_position: Position,
    pub(crate) current_position: Position,
    pub(crate) ghost: Ghost<H>,
    /// The entrance animation has not reported completion yet.
    pub(crate) ghost_animating: bool,
    /// Release happened mid-entrance; the entrance continuation must reveal
    /// the real cell.
    pub(crate) ghost_pending_reveal: bool,
    /// Last pointer location, in content coordinates.
    pub(crate) pointer: Point,
    pub(crate) entrance: Option<AnimationId>,
    pub(crate) exit: Option<AnimationId>,
    /// The exit animation finished while the entrance was still running.
    pub(crate) exit_finished: bool,
    pub(crate) span: tracing::Span,
}

impl<H> DragSession<H> {
    pub(crate) fn new(position: Position, pointer: Point, ghost: Ghost<H>) -> Self {
        let span = tracing::debug_span!(
            target: targets::CONTROLLER,
            span_names::DRAG_SESSION,
            initial = %position
        );
        Self {
            active: true,
            initial_position: position,
            current_position: position,
            ghost,
            ghost_animating: false,
            ghost_pending_reveal: false,
            pointer,
            entrance: None,
            exit: None,
            exit_finished: false,
            span,
        }
    }

    pub(crate) fn state(&self) -> DragState {
        if self.active {
            DragState::Dragging
        } else {
            DragState::Settling
        }
    }

    pub(crate) fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state(),
            initial_position: self.initial_position,
            current_position: self.current_position,
            ghost_animating: self.ghost_animating,
            ghost_pending_reveal: self.ghost_pending_reveal,
            pointer: self.pointer,
        }
    }

    /// Which continuation, if any, is waiting on `id`.
    pub(crate) fn continuation_for(&self, id: AnimationId) -> Option<Continuation> {
        if self.entrance == Some(id) {
            Some(Continuation::Entrance)
        } else if self.exit == Some(id) {
            Some(Continuation::Exit)
        } else {
            None
        }
    }
}
