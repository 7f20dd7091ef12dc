//! The drag controller.
//!
//! [`DragController`] owns the interaction state machine of one list. The
//! platform feeds it long-press gesture updates and animation completions;
//! the controller asks the [`ReorderPolicy`] for permission, moves rows in the
//! [`ListView`] and drives the ghost in the [`GhostOverlay`].
//!
//! # States
//!
//! ```text
//!            press (allowed)             release / cancel
//!   Idle ─────────────────────► Dragging ─────────────────► Settling
//!    ▲                            │  ▲                          │
//!    │                            └──┘ move                     │
//!    └──────────────────── exit animation finished ◄────────────┘
//! ```
//!
//! The controller suspends at exactly two points, each identified by the
//! [`AnimationId`] it handed to [`GhostOverlay::animate`]:
//!
//! - [`Continuation::Entrance`]: the ghost finished lifting out of the list.
//!   If the pointer was released meanwhile, the real cell is revealed here.
//! - [`Continuation::Exit`]: the ghost finished dropping back. The session ends
//!   and the policy is told the drag finished.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use longpress_reorder::{
//!     AnimationId, DragController, DragState, Easing, GestureEvent, GhostAnimation, GhostOverlay,
//!     GhostStyle, ListView, Point, Position, ReorderConfig,
//! };
//!
//! /// Ten rows, 44 pixels tall.
//! struct Rows;
//!
//! impl ListView for Rows {
//!     type Visual = ();
//!
//!     fn position_at(&self, point: Point) -> Option<Position> {
//!         let row = (point.y / 44.0) as usize;
//!         (point.y >= 0.0 && row < 10).then_some(Position::row(row))
//!     }
//!     fn cell_visual_at(&mut self, _position: Position) -> Option<()> {
//!         Some(())
//!     }
//!     fn cell_center(&self, position: Position) -> Option<Point> {
//!         Some(Point::new(160.0, position.row as f32 * 44.0 + 22.0))
//!     }
//!     fn move_row(&mut self, _from: Position, _to: Position) {}
//!     fn set_row_hidden(&mut self, _position: Position, _hidden: bool) {}
//!     fn set_row_alpha(&mut self, _position: Position, _alpha: f32) {}
//!     fn fade_row(&mut self, _position: Position, _alpha: f32, _duration: Duration, _easing: Easing) {}
//! }
//!
//! /// Remembers the last animation so it can be completed by hand.
//! #[derive(Default)]
//! struct Overlay {
//!     last: Option<AnimationId>,
//! }
//!
//! impl GhostOverlay for Overlay {
//!     type Visual = ();
//!     type Ghost = ();
//!
//!     fn create_ghost(&mut self, _visual: (), _style: &GhostStyle) {}
//!     fn set_center(&mut self, _ghost: &(), _center: Point) {}
//!     fn set_scale(&mut self, _ghost: &(), _scale: f32) {}
//!     fn set_alpha(&mut self, _ghost: &(), _alpha: f32) {}
//!     fn animate(&mut self, _ghost: &(), id: AnimationId, _animation: GhostAnimation) {
//!         self.last = Some(id);
//!     }
//!     fn remove(&mut self, _ghost: ()) {}
//! }
//!
//! let mut controller = DragController::new(Rows, Overlay::default(), ReorderConfig::default());
//!
//! controller.handle_gesture(GestureEvent::began(Point::new(100.0, 100.0)));
//! let entrance = controller.overlay().last.unwrap();
//! controller.animation_finished(entrance, true);
//!
//! controller.handle_gesture(GestureEvent::changed(Point::new(100.0, 240.0)));
//! controller.handle_gesture(GestureEvent::ended(Point::new(100.0, 240.0)));
//! assert_eq!(controller.state(), DragState::Settling);
//!
//! let exit = controller.overlay().last.unwrap();
//! controller.animation_finished(exit, true);
//! assert_eq!(controller.state(), DragState::Idle);
//! ```

use std::time::Duration;

use longpress_reorder_core::logging::{span_names, targets};
use longpress_reorder_core::{Point, Signal};

use crate::auto_scroll::AutoScroller;
use crate::config::ReorderConfig;
use crate::ghost::Ghost;
use crate::policy::{DefaultPolicy, ReorderPolicy};
use crate::position::Position;
use crate::session::{Continuation, DragSession, DragState, SessionSnapshot};
use crate::surface::{AnimationId, GestureEvent, GesturePhase, GhostOverlay, ListView};

/// Long-press drag-to-reorder state machine for one list.
///
/// At most one drag is in flight per controller. Presses that arrive while a
/// drag is dragging or settling are ignored, as are moves and releases while
/// idle.
pub struct DragController<L, G>
where
    L: ListView,
    G: GhostOverlay<Visual = L::Visual>,
{
    config: ReorderConfig,
    list: L,
    overlay: G,
    policy: Box<dyn ReorderPolicy>,
    scroller: AutoScroller,
    session: Option<DragSession<G::Ghost>>,
    next_animation: u64,

    /// Emitted with `(from, to)` each time the dragged row changes position,
    /// right after [`ReorderPolicy::position_changed`].
    pub position_changed: Signal<(Position, Position)>,

    /// Emitted with `(initial, final)` once a drag has settled, right after
    /// [`ReorderPolicy::drag_finished`].
    pub reorder_finished: Signal<(Position, Position)>,

    /// Emitted on every state transition.
    pub state_changed: Signal<DragState>,
}

impl<L, G> DragController<L, G>
where
    L: ListView,
    G: GhostOverlay<Visual = L::Visual>,
{
    /// Creates an idle controller using [`DefaultPolicy`].
    pub fn new(list: L, overlay: G, config: ReorderConfig) -> Self {
        let scroller = AutoScroller::new(config.scroll_behavior(), config.auto_scroll());
        Self {
            config,
            list,
            overlay,
            policy: Box::new(DefaultPolicy),
            scroller,
            session: None,
            next_animation: 0,
            position_changed: Signal::new(),
            reorder_finished: Signal::new(),
            state_changed: Signal::new(),
        }
    }

    /// Use `policy` instead of the default one.
    pub fn with_policy(mut self, policy: impl ReorderPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Replaces the host policy and returns the previous one.
    ///
    /// A drag in flight keeps going under the new policy.
    pub fn set_policy(&mut self, policy: impl ReorderPolicy + 'static) -> Box<dyn ReorderPolicy> {
        std::mem::replace(&mut self.policy, Box::new(policy))
    }

    // =========================================================================
    // Gesture input
    // =========================================================================

    /// Dispatches a gesture update to the matching handler.
    pub fn handle_gesture(&mut self, event: GestureEvent) {
        match event.phase {
            GesturePhase::Began => {
                self.press_began(event.location);
            }
            GesturePhase::Changed => self.press_moved(event.location),
            GesturePhase::Ended => self.press_released(event.location),
            GesturePhase::Cancelled => self.press_cancelled(event.location),
        }
    }

    /// A long press was recognized at `location`.
    ///
    /// Returns `true` if a drag started.
    pub fn press_began(&mut self, location: Point) -> bool {
        if let Some(session) = &self.session {
            tracing::trace!(
                target: targets::CONTROLLER,
                state = %session.state(),
                "press ignored, a drag is already in flight"
            );
            return false;
        }

        let Some(position) = self.list.position_at(location) else {
            tracing::trace!(target: targets::CONTROLLER, x = location.x, y = location.y, "press outside rows");
            return false;
        };

        if !self.policy.can_start_dragging(position) {
            tracing::debug!(target: targets::CONTROLLER, %position, "drag rejected by policy");
            return false;
        }

        let Some(visual) = self.list.cell_visual_at(position) else {
            tracing::debug!(target: targets::CONTROLLER, %position, "no cell to snapshot, drag aborted");
            return false;
        };
        let Some(center) = self.list.cell_center(position) else {
            tracing::debug!(target: targets::CONTROLLER, %position, "cell has no frame, drag aborted");
            return false;
        };

        let mut ghost = Ghost::spawn(&mut self.overlay, visual, center, self.config.ghost_style());
        self.list.set_row_hidden(position, true);

        let entrance = next_animation_id(&mut self.next_animation);
        ghost.enter(&mut self.overlay, entrance, location.y, &self.config);

        let mut session = DragSession::new(position, location, ghost);
        session.ghost_animating = true;
        session.entrance = Some(entrance);

        {
            let _guard = session.span.enter();
            tracing::debug!(target: targets::CONTROLLER, %position, "drag started");
        }
        self.session = Some(session);
        self.state_changed.emit(DragState::Dragging);
        true
    }

    /// The pointer moved to `location` while pressed.
    pub fn press_moved(&mut self, location: Point) {
        let Some(session) = self.session.as_mut() else {
            tracing::trace!(target: targets::CONTROLLER, "move ignored while idle");
            return;
        };
        if !session.active {
            tracing::trace!(target: targets::CONTROLLER, "move ignored while settling");
            return;
        }

        session.pointer = location;
        session.ghost.follow(&mut self.overlay, location.y);
        self.resolve_pointer(location);
    }

    /// The pointer was lifted at `location`.
    pub fn press_released(&mut self, location: Point) {
        self.release(location, false);
    }

    /// The platform interrupted the gesture. Settles exactly like a release.
    pub fn press_cancelled(&mut self, location: Point) {
        self.release(location, true);
    }

    fn release(&mut self, location: Point, cancelled: bool) {
        let Some(session) = self.session.as_mut() else {
            tracing::trace!(target: targets::CONTROLLER, cancelled, "release ignored while idle");
            return;
        };
        if !session.active {
            tracing::trace!(target: targets::CONTROLLER, cancelled, "release ignored while settling");
            return;
        }
        let _guard = session.span.clone().entered();

        session.active = false;
        session.pointer = location;
        let current = session.current_position;
        let target = self
            .list
            .cell_center(current)
            .unwrap_or_else(|| session.ghost.center());

        if session.ghost_animating {
            session.ghost_pending_reveal = true;
            tracing::trace!(target: targets::CONTROLLER, %current, "reveal deferred until entrance finishes");
        } else {
            reveal_row(&mut self.list, current, &self.config);
        }

        let exit = next_animation_id(&mut self.next_animation);
        session.ghost.exit(&mut self.overlay, exit, target, &self.config);
        session.exit = Some(exit);

        tracing::debug!(target: targets::CONTROLLER, %current, cancelled, "drag released");
        self.state_changed.emit(DragState::Settling);
    }

    // =========================================================================
    // Animation continuations
    // =========================================================================

    /// The platform finished the ghost animation `id`.
    ///
    /// `finished` is `false` when the animation was interrupted; the controller
    /// resumes either way. Ids that do not belong to the current session are
    /// ignored.
    pub fn animation_finished(&mut self, id: AnimationId, finished: bool) {
        let Some(continuation) = self.session.as_ref().and_then(|s| s.continuation_for(id)) else {
            tracing::trace!(target: targets::CONTROLLER, id = id.raw(), "stale animation completion ignored");
            return;
        };

        tracing::trace!(target: targets::CONTROLLER, id = id.raw(), ?continuation, finished, "animation finished");
        match continuation {
            Continuation::Entrance => self.entrance_finished(),
            Continuation::Exit => self.exit_finished(),
        }
    }

    fn entrance_finished(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let _guard = session.span.clone().entered();

        session.entrance = None;
        session.ghost_animating = false;

        if session.ghost_pending_reveal {
            session.ghost_pending_reveal = false;
            let current = session.current_position;
            reveal_row(&mut self.list, current, &self.config);
            tracing::debug!(target: targets::CONTROLLER, %current, "deferred reveal performed");
        }

        if session.exit_finished {
            self.finish();
        }
    }

    fn exit_finished(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        session.exit = None;
        if session.ghost_animating {
            session.exit_finished = true;
            tracing::trace!(target: targets::CONTROLLER, "exit finished before entrance, waiting");
            return;
        }
        self.finish();
    }

    fn finish(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        let _guard = session.span.clone().entered();

        let initial = session.initial_position;
        let final_position = session.current_position;
        session.ghost.dismiss(&mut self.overlay);

        tracing::debug!(target: targets::CONTROLLER, %initial, %final_position, "drag settled");
        self.state_changed.emit(DragState::Idle);
        self.policy.drag_finished(initial, final_position);
        self.reorder_finished.emit((initial, final_position));
    }

    // =========================================================================
    // Auto-scroll
    // =========================================================================

    /// Advances auto-scroll by `dt`.
    ///
    /// Call once per frame while dragging. Scrolls the list when the pointer is
    /// inside an edge zone and re-resolves the row under the pointer, since the
    /// content moved beneath it. Returns the distance actually scrolled.
    pub fn tick(&mut self, dt: Duration) -> f32 {
        let Some(session) = self.session.as_mut() else {
            return 0.0;
        };
        if !session.active {
            return 0.0;
        }
        let Some(visible) = self.list.visible_rect() else {
            return 0.0;
        };

        let velocity = self.scroller.velocity(session.pointer.y, visible);
        if velocity == 0.0 {
            return 0.0;
        }

        let _span = tracing::trace_span!(target: targets::AUTO_SCROLL, span_names::AUTO_SCROLL_TICK, velocity).entered();
        let scrolled = self.list.scroll_by(velocity * dt.as_secs_f32());
        if scrolled == 0.0 {
            return 0.0;
        }

        // The pointer stays put on screen, so in content coordinates it
        // travels with the scroll.
        session.pointer = session.pointer.offset_y(scrolled);
        let pointer = session.pointer;
        session.ghost.follow(&mut self.overlay, pointer.y);
        self.resolve_pointer(pointer);
        scrolled
    }

    /// Moves the dragged row to the slot under `location`, if allowed.
    fn resolve_pointer(&mut self, location: Point) {
        let Some(target) = self.list.position_at(location) else {
            return;
        };
        let Some(session) = self.session.as_mut() else {
            return;
        };

        if !self.policy.can_accept_drag(target) {
            tracing::trace!(target: targets::CONTROLLER, %target, "position rejected by policy");
            return;
        }

        let from = session.current_position;
        if from == target {
            return;
        }

        let _guard = session.span.clone().entered();
        tracing::debug!(target: targets::CONTROLLER, %from, to = %target, "position changed");

        self.policy.position_changed(from, target);
        self.position_changed.emit((from, target));
        self.list.move_row(from, target);
        session.current_position = target;
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Current state.
    pub fn state(&self) -> DragState {
        self.session
            .as_ref()
            .map_or(DragState::Idle, DragSession::state)
    }

    /// Whether a row is currently following the pointer.
    pub fn is_dragging(&self) -> bool {
        self.state() == DragState::Dragging
    }

    /// A snapshot of the drag in flight, if any.
    pub fn session(&self) -> Option<SessionSnapshot> {
        self.session.as_ref().map(DragSession::snapshot)
    }

    /// The controller's configuration.
    pub fn config(&self) -> &ReorderConfig {
        &self.config
    }

    /// The auto-scroll policy derived from the configuration.
    pub fn auto_scroller(&self) -> &AutoScroller {
        &self.scroller
    }

    /// The list being reordered.
    pub fn list(&self) -> &L {
        &self.list
    }

    /// Mutable access to the list, for the platform adapter.
    pub fn list_mut(&mut self) -> &mut L {
        &mut self.list
    }

    /// The ghost overlay.
    pub fn overlay(&self) -> &G {
        &self.overlay
    }

    /// Mutable access to the ghost overlay, for the platform adapter.
    pub fn overlay_mut(&mut self) -> &mut G {
        &mut self.overlay
    }
}

impl<L, G> std::fmt::Debug for DragController<L, G>
where
    L: ListView,
    G: GhostOverlay<Visual = L::Visual>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragController")
            .field("state", &self.state())
            .field("session", &self.session())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn next_animation_id(next: &mut u64) -> AnimationId {
    *next += 1;
    AnimationId::new(*next)
}

/// Shows the real cell transparent under the ghost and fades it in.
fn reveal_row<L: ListView>(list: &mut L, position: Position, config: &ReorderConfig) {
    list.set_row_hidden(position, false);
    list.set_row_alpha(position, 0.0);
    list.fade_row(position, 1.0, config.animation_duration(), config.easing());
}
