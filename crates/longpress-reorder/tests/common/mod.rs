//! Recording test doubles shared by the integration tests.
//!
//! The list, the overlay, the policy and the controller's signals all write
//! into one [`Recorder`], so every call gets a sequence number that orders it
//! against every other call.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use longpress_reorder::{
    AnimationId, DragController, DragState, Easing, GestureEvent, GhostAnimation, GhostOverlay,
    GhostStyle, ListView, Point, Position, Rect, ReorderConfig, ReorderPolicy,
};
use parking_lot::Mutex;

pub const ROW_HEIGHT: f32 = 44.0;
pub const LIST_WIDTH: f32 = 320.0;

/// Everything the controller can do to its collaborators.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    // Policy
    CanStart(Position),
    CanAccept(Position),
    PositionChanged(Position, Position),
    DragFinished(Position, Position),
    // List
    MoveRow(Position, Position),
    SetHidden(Position, bool),
    SetRowAlpha(Position, f32),
    FadeRow(Position, f32),
    ScrollBy(f32),
    // Overlay
    CreateGhost(&'static str),
    GhostCenter(Point),
    GhostScale(f32),
    GhostAlpha(f32),
    Animate(AnimationId, GhostAnimation),
    RemoveGhost(&'static str),
    // Platform, recorded by the test before it reports a completion
    AnimationFinished(AnimationId),
    // Signals
    StateChanged(DragState),
    ReorderFinished(Position, Position),
}

/// Shared, sequence-numbered call log.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl Recorder {
    /// Appends a call and returns its sequence number.
    pub fn record(&self, call: Call) -> usize {
        let mut calls = self.calls.lock();
        calls.push(call);
        calls.len() - 1
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    /// Sequence number of the first call matching `pred`.
    pub fn seq(&self, pred: impl Fn(&Call) -> bool) -> Option<usize> {
        self.calls.lock().iter().position(pred)
    }

    /// Sequence number of the last call matching `pred`.
    pub fn last_seq(&self, pred: impl Fn(&Call) -> bool) -> Option<usize> {
        self.calls.lock().iter().rposition(pred)
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().iter().filter(|c| pred(c)).count()
    }

    pub fn position_changes(&self) -> Vec<(Position, Position)> {
        self.calls
            .lock()
            .iter()
            .filter_map(|c| match c {
                Call::PositionChanged(from, to) => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    pub fn drag_finishes(&self) -> Vec<(Position, Position)> {
        self.calls
            .lock()
            .iter()
            .filter_map(|c| match c {
                Call::DragFinished(initial, last) => Some((*initial, *last)),
                _ => None,
            })
            .collect()
    }

    pub fn animations(&self) -> Vec<(AnimationId, GhostAnimation)> {
        self.calls
            .lock()
            .iter()
            .filter_map(|c| match c {
                Call::Animate(id, animation) => Some((*id, *animation)),
                _ => None,
            })
            .collect()
    }

    pub fn states(&self) -> Vec<DragState> {
        self.calls
            .lock()
            .iter()
            .filter_map(|c| match c {
                Call::StateChanged(state) => Some(*state),
                _ => None,
            })
            .collect()
    }
}

/// Sectioned list of fixed-height rows without section headers.
pub struct MockList {
    pub sections: Vec<Vec<&'static str>>,
    pub visible: Option<Rect>,
    /// When false, `cell_visual_at` has nothing to snapshot.
    pub snapshots: bool,
    /// When false, `cell_center` reports no frame for any row.
    pub frames: bool,
    recorder: Recorder,
}

impl MockList {
    pub fn new(sections: Vec<Vec<&'static str>>, recorder: Recorder) -> Self {
        Self {
            sections,
            visible: None,
            snapshots: true,
            frames: true,
            recorder,
        }
    }

    /// Center of the row at `position`, whether or not frames are reported.
    pub fn row_center(&self, position: Position) -> Option<Point> {
        let index = self.flat_index(position)?;
        Some(Point::new(LIST_WIDTH / 2.0, index as f32 * ROW_HEIGHT + ROW_HEIGHT / 2.0))
    }

    fn flat_index(&self, position: Position) -> Option<usize> {
        let rows = self.sections.get(position.section)?;
        if position.row >= rows.len() {
            return None;
        }
        let before: usize = self.sections[..position.section].iter().map(Vec::len).sum();
        Some(before + position.row)
    }

    fn content_height(&self) -> f32 {
        self.sections.iter().map(Vec::len).sum::<usize>() as f32 * ROW_HEIGHT
    }
}

impl ListView for MockList {
    type Visual = &'static str;

    fn position_at(&self, point: Point) -> Option<Position> {
        if point.y < 0.0 || point.x < 0.0 || point.x > LIST_WIDTH {
            return None;
        }
        let mut index = (point.y / ROW_HEIGHT) as usize;
        for (section, rows) in self.sections.iter().enumerate() {
            if index < rows.len() {
                return Some(Position::new(section, index));
            }
            index -= rows.len();
        }
        None
    }

    fn cell_visual_at(&mut self, position: Position) -> Option<&'static str> {
        if !self.snapshots {
            return None;
        }
        self.sections.get(position.section)?.get(position.row).copied()
    }

    fn cell_center(&self, position: Position) -> Option<Point> {
        if !self.frames {
            return None;
        }
        self.row_center(position)
    }

    fn move_row(&mut self, from: Position, to: Position) {
        self.recorder.record(Call::MoveRow(from, to));
        let item = self.sections[from.section].remove(from.row);
        self.sections[to.section].insert(to.row, item);
    }

    fn set_row_hidden(&mut self, position: Position, hidden: bool) {
        self.recorder.record(Call::SetHidden(position, hidden));
    }

    fn set_row_alpha(&mut self, position: Position, alpha: f32) {
        self.recorder.record(Call::SetRowAlpha(position, alpha));
    }

    fn fade_row(&mut self, position: Position, alpha: f32, _duration: Duration, _easing: Easing) {
        self.recorder.record(Call::FadeRow(position, alpha));
    }

    fn visible_rect(&self) -> Option<Rect> {
        self.visible
    }

    fn scroll_by(&mut self, dy: f32) -> f32 {
        let content_height = self.content_height();
        let Some(visible) = self.visible.as_mut() else {
            return 0.0;
        };
        let max_top = (content_height - visible.size.height).max(0.0);
        let top = (visible.top() + dy).clamp(0.0, max_top);
        let applied = top - visible.top();
        *visible = visible.offset_y(applied);
        if applied != 0.0 {
            self.recorder.record(Call::ScrollBy(applied));
        }
        applied
    }
}

/// Overlay whose ghosts are the labels of the rows they were made from.
pub struct MockOverlay {
    recorder: Recorder,
    pub live: Vec<&'static str>,
}

impl MockOverlay {
    pub fn new(recorder: Recorder) -> Self {
        Self {
            recorder,
            live: Vec::new(),
        }
    }
}

impl GhostOverlay for MockOverlay {
    type Visual = &'static str;
    type Ghost = &'static str;

    fn create_ghost(&mut self, visual: &'static str, _style: &GhostStyle) -> &'static str {
        self.recorder.record(Call::CreateGhost(visual));
        self.live.push(visual);
        visual
    }

    fn set_center(&mut self, _ghost: &&'static str, center: Point) {
        self.recorder.record(Call::GhostCenter(center));
    }

    fn set_scale(&mut self, _ghost: &&'static str, scale: f32) {
        self.recorder.record(Call::GhostScale(scale));
    }

    fn set_alpha(&mut self, _ghost: &&'static str, alpha: f32) {
        self.recorder.record(Call::GhostAlpha(alpha));
    }

    fn animate(&mut self, _ghost: &&'static str, id: AnimationId, animation: GhostAnimation) {
        self.recorder.record(Call::Animate(id, animation));
    }

    fn remove(&mut self, ghost: &'static str) {
        self.recorder.record(Call::RemoveGhost(ghost));
        self.live.retain(|g| *g != ghost);
    }
}

/// Policy that records every call and answers from two predicates.
pub struct RecordingPolicy {
    recorder: Recorder,
    start: fn(Position) -> bool,
    accept: fn(Position) -> bool,
}

impl RecordingPolicy {
    pub fn new(recorder: Recorder) -> Self {
        Self {
            recorder,
            start: |_| true,
            accept: |_| true,
        }
    }

    pub fn start(mut self, start: fn(Position) -> bool) -> Self {
        self.start = start;
        self
    }

    pub fn accept(mut self, accept: fn(Position) -> bool) -> Self {
        self.accept = accept;
        self
    }
}

impl ReorderPolicy for RecordingPolicy {
    fn can_start_dragging(&mut self, position: Position) -> bool {
        self.recorder.record(Call::CanStart(position));
        (self.start)(position)
    }

    fn can_accept_drag(&mut self, position: Position) -> bool {
        self.recorder.record(Call::CanAccept(position));
        (self.accept)(position)
    }

    fn position_changed(&mut self, from: Position, to: Position) {
        self.recorder.record(Call::PositionChanged(from, to));
    }

    fn drag_finished(&mut self, initial: Position, final_position: Position) {
        self.recorder.record(Call::DragFinished(initial, final_position));
    }
}

pub type Controller = DragController<MockList, MockOverlay>;

/// A controller wired to recording doubles.
pub struct Harness {
    pub controller: Controller,
    pub recorder: Recorder,
}

impl Harness {
    /// Harness with a recording policy that allows everything.
    pub fn new(sections: Vec<Vec<&'static str>>) -> Self {
        Self::build(sections, ReorderConfig::default(), |policy| policy)
    }

    /// Harness whose policy is adjusted by `policy`.
    pub fn with_policy(
        sections: Vec<Vec<&'static str>>,
        policy: impl FnOnce(RecordingPolicy) -> RecordingPolicy,
    ) -> Self {
        Self::build(sections, ReorderConfig::default(), policy)
    }

    /// Harness with a custom configuration.
    pub fn with_config(sections: Vec<Vec<&'static str>>, config: ReorderConfig) -> Self {
        Self::build(sections, config, |policy| policy)
    }

    fn build(
        sections: Vec<Vec<&'static str>>,
        config: ReorderConfig,
        policy: impl FnOnce(RecordingPolicy) -> RecordingPolicy,
    ) -> Self {
        init_tracing();
        let recorder = Recorder::default();
        let list = MockList::new(sections, recorder.clone());
        let overlay = MockOverlay::new(recorder.clone());
        let controller = DragController::new(list, overlay, config)
            .with_policy(policy(RecordingPolicy::new(recorder.clone())));

        let states = recorder.clone();
        controller.state_changed.connect(move |state| {
            states.record(Call::StateChanged(*state));
        });
        let finishes = recorder.clone();
        controller.reorder_finished.connect(move |(initial, last)| {
            finishes.record(Call::ReorderFinished(*initial, *last));
        });

        Self {
            controller,
            recorder,
        }
    }

    /// A point inside the row at `position`, in the current layout.
    pub fn point_of(&self, position: Position) -> Point {
        let center = self
            .controller
            .list()
            .row_center(position)
            .expect("position is on screen");
        Point::new(100.0, center.y - 12.0)
    }

    pub fn begin(&mut self, position: Position) {
        let point = self.point_of(position);
        self.controller.handle_gesture(GestureEvent::began(point));
    }

    pub fn move_to(&mut self, position: Position) {
        let point = self.point_of(position);
        self.controller.handle_gesture(GestureEvent::changed(point));
    }

    pub fn move_to_point(&mut self, point: Point) {
        self.controller.handle_gesture(GestureEvent::changed(point));
    }

    pub fn release(&mut self) {
        let point = self.current_pointer();
        self.controller.handle_gesture(GestureEvent::ended(point));
    }

    pub fn cancel(&mut self) {
        let point = self.current_pointer();
        self.controller.handle_gesture(GestureEvent::cancelled(point));
    }

    fn current_pointer(&self) -> Point {
        self.controller
            .session()
            .map(|s| s.pointer)
            .unwrap_or(Point::ZERO)
    }

    /// Id of the n-th ghost animation started so far.
    pub fn animation(&self, n: usize) -> AnimationId {
        self.recorder.animations()[n].0
    }

    /// Reports the platform finished animation `id`.
    pub fn complete(&mut self, id: AnimationId) {
        self.recorder.record(Call::AnimationFinished(id));
        self.controller.animation_finished(id, true);
    }

    /// Reports the platform cut animation `id` short.
    pub fn interrupt(&mut self, id: AnimationId) {
        self.recorder.record(Call::AnimationFinished(id));
        self.controller.animation_finished(id, false);
    }

    pub fn sections(&self) -> &[Vec<&'static str>] {
        &self.controller.list().sections
    }
}

pub fn letters(count: usize) -> Vec<&'static str> {
    const LETTERS: [&str; 26] = [
        "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r",
        "s", "t", "u", "v", "w", "x", "y", "z",
    ];
    LETTERS[..count].to_vec()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
