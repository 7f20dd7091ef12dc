//! Long-press drag-to-reorder for vertically scrolling lists.
//!
//! Press and hold a row, drag it, release it at a new position. A
//! [`DragController`] turns the long-press gesture stream into ordered
//! notifications for the host and visual instructions for the list widget,
//! while a floating ghost stands in for the dragged row.
//!
//! The crate does not render anything. The platform adapter implements
//! [`ListView`] and [`GhostOverlay`], forwards gestures to
//! [`DragController::handle_gesture`] and reports finished ghost animations to
//! [`DragController::animation_finished`]. The host keeps its data in order by
//! implementing [`ReorderPolicy`], or by using [`SharedRowsPolicy`] over a
//! [`SectionedRows`] model.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use longpress_reorder::{Position, ReorderPolicy, SectionedRows, SharedRowsPolicy};
//! use parking_lot::Mutex;
//!
//! let rows = Arc::new(Mutex::new(SectionedRows::single(vec!["milk", "eggs", "bread"])));
//! let mut policy = SharedRowsPolicy::new(rows.clone());
//!
//! // What the controller does when "bread" is dragged to the top.
//! policy.position_changed(Position::row(2), Position::row(0));
//! policy.drag_finished(Position::row(2), Position::row(0));
//!
//! assert_eq!(rows.lock().sections()[0], vec!["bread", "milk", "eggs"]);
//! ```

pub use longpress_reorder_core::*;

mod auto_scroll;
mod config;
mod controller;
mod error;
mod ghost;
mod model;
mod policy;
mod position;
mod session;
mod surface;

pub use auto_scroll::AutoScroller;
pub use config::{
    AutoScrollConfig, DEFAULT_ANIMATION_DURATION_MS, DEFAULT_EDGE_THRESHOLD, DEFAULT_GHOST_ALPHA,
    DEFAULT_MAX_SCROLL_SPEED, ReorderConfig, ReorderConfigBuilder, RowScale, ScrollBehavior,
};
pub use controller::DragController;
pub use error::{ConfigError, ModelError, Result};
pub use ghost::{Ghost, GhostAnimation, GhostStyle};
pub use model::{SectionedRows, SharedRowsPolicy};
pub use policy::{DefaultPolicy, ReorderHooks, ReorderPolicy};
pub use position::Position;
pub use session::{Continuation, DragState, SessionSnapshot};
pub use surface::{AnimationId, GestureEvent, GesturePhase, GhostOverlay, ListView};

static_assertions::assert_impl_all!(Position: Send, Sync, Copy);
static_assertions::assert_impl_all!(ReorderConfig: Send, Sync, Clone);
