//! Host policy: the embedding application's say in a drag.
//!
//! A [`ReorderPolicy`] gates which rows may be picked up and which positions
//! the dragged row may move into, and is told about every position change and
//! about the end of each drag. All four operations are required; hosts that
//! only care about some of them can start from [`DefaultPolicy`] semantics via
//! [`ReorderHooks`].

use std::fmt;

use crate::position::Position;

/// Callbacks and predicates supplied by the host.
///
/// Every method runs on the interaction thread, synchronously, from inside the
/// controller's event handling.
pub trait ReorderPolicy {
    /// Whether the row at `position` may start being dragged.
    ///
    /// Called once per accepted long press.
    fn can_start_dragging(&mut self, position: Position) -> bool;

    /// Whether the dragged row may currently take the slot at `position`.
    ///
    /// Called every time a pointer move resolves to a row.
    fn can_accept_drag(&mut self, position: Position) -> bool;

    /// The dragged row moved from `from` to `to`.
    ///
    /// Called before the list widget moves the row, so the host can apply the
    /// same move to its backing model.
    fn position_changed(&mut self, from: Position, to: Position);

    /// The drag settled. `initial` is where it started, `final_position`
    /// where it was released.
    fn drag_finished(&mut self, initial: Position, final_position: Position);
}

/// Policy that lets every row move anywhere and ignores notifications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultPolicy;

impl ReorderPolicy for DefaultPolicy {
    fn can_start_dragging(&mut self, _position: Position) -> bool {
        true
    }

    fn can_accept_drag(&mut self, _position: Position) -> bool {
        true
    }

    fn position_changed(&mut self, _from: Position, _to: Position) {}

    fn drag_finished(&mut self, _initial: Position, _final_position: Position) {}
}

type Predicate = Box<dyn FnMut(Position) -> bool>;
type Notification = Box<dyn FnMut(Position, Position)>;

/// A policy assembled from optional closures.
///
/// Missing predicates allow everything; missing notifications do nothing.
///
/// ```
/// use longpress_reorder::{Position, ReorderHooks, ReorderPolicy};
///
/// // The first row of each section stays pinned.
/// let mut policy = ReorderHooks::new()
///     .with_can_start_dragging(|position| position.row > 0)
///     .with_can_accept_drag(|position| position.row > 0);
///
/// assert!(!policy.can_start_dragging(Position::new(0, 0)));
/// assert!(policy.can_accept_drag(Position::new(1, 3)));
/// ```
#[derive(Default)]
pub struct ReorderHooks {
    can_start_dragging: Option<Predicate>,
    can_accept_drag: Option<Predicate>,
    position_changed: Option<Notification>,
    drag_finished: Option<Notification>,
}

impl ReorderHooks {
    /// Creates hooks that behave like [`DefaultPolicy`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide a predicate deciding whether a row may be picked up.
    pub fn with_can_start_dragging(mut self, f: impl FnMut(Position) -> bool + 'static) -> Self {
        self.can_start_dragging = Some(Box::new(f));
        self
    }

    /// Provide a predicate deciding whether a position accepts the dragged row.
    pub fn with_can_accept_drag(mut self, f: impl FnMut(Position) -> bool + 'static) -> Self {
        self.can_accept_drag = Some(Box::new(f));
        self
    }

    /// Provide a callback invoked on each position change.
    pub fn on_position_changed(mut self, f: impl FnMut(Position, Position) + 'static) -> Self {
        self.position_changed = Some(Box::new(f));
        self
    }

    /// Provide a callback invoked once the drag has settled.
    pub fn on_drag_finished(mut self, f: impl FnMut(Position, Position) + 'static) -> Self {
        self.drag_finished = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for ReorderHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReorderHooks")
            .field("can_start_dragging", &self.can_start_dragging.is_some())
            .field("can_accept_drag", &self.can_accept_drag.is_some())
            .field("position_changed", &self.position_changed.is_some())
            .field("drag_finished", &self.drag_finished.is_some())
            .finish()
    }
}

impl ReorderPolicy for ReorderHooks {
    fn can_start_dragging(&mut self, position: Position) -> bool {
        self.can_start_dragging
            .as_mut()
            .map(|f| f(position))
            .unwrap_or(true)
    }

    fn can_accept_drag(&mut self, position: Position) -> bool {
        self.can_accept_drag
            .as_mut()
            .map(|f| f(position))
            .unwrap_or(true)
    }

    fn position_changed(&mut self, from: Position, to: Position) {
        if let Some(f) = self.position_changed.as_mut() {
            f(from, to);
        }
    }

    fn drag_finished(&mut self, initial: Position, final_position: Position) {
        if let Some(f) = self.drag_finished.as_mut() {
            f(initial, final_position);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_default_policy_allows_everything() {
        let mut policy = DefaultPolicy;
        assert!(policy.can_start_dragging(Position::new(0, 0)));
        assert!(policy.can_accept_drag(Position::new(4, 9)));
        policy.position_changed(Position::row(0), Position::row(1));
        policy.drag_finished(Position::row(0), Position::row(1));
    }

    #[test]
    fn test_empty_hooks_match_default() {
        let mut hooks = ReorderHooks::new();
        assert!(hooks.can_start_dragging(Position::new(0, 0)));
        assert!(hooks.can_accept_drag(Position::new(2, 1)));
    }

    #[test]
    fn test_hooks_forward_notifications() {
        let log = Rc::new(RefCell::new(Vec::new()));

        let changed = log.clone();
        let finished = log.clone();
        let mut hooks = ReorderHooks::new()
            .on_position_changed(move |from, to| changed.borrow_mut().push(("changed", from, to)))
            .on_drag_finished(move |from, to| finished.borrow_mut().push(("finished", from, to)));

        hooks.position_changed(Position::row(1), Position::row(2));
        hooks.drag_finished(Position::row(1), Position::row(2));

        assert_eq!(
            *log.borrow(),
            vec![
                ("changed", Position::row(1), Position::row(2)),
                ("finished", Position::row(1), Position::row(2)),
            ]
        );
    }

    #[test]
    fn test_hooks_predicates() {
        let mut hooks = ReorderHooks::new()
            .with_can_start_dragging(|p| p.section == 2 || p.row > 0)
            .with_can_accept_drag(|p| p.section != 1);

        assert!(!hooks.can_start_dragging(Position::new(0, 0)));
        assert!(hooks.can_start_dragging(Position::new(2, 0)));
        assert!(hooks.can_start_dragging(Position::new(1, 3)));
        assert!(!hooks.can_accept_drag(Position::new(1, 1)));
        assert!(hooks.can_accept_drag(Position::new(0, 1)));
    }
}
