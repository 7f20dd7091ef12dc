//! Core primitives for long-press list reordering.
//!
//! This crate provides the building blocks the reorder controller is made of:
//!
//! - **Signal/Slot System**: Type-safe observer notifications ([`Signal`])
//! - **Geometry**: Points, sizes and rectangles in list coordinates
//! - **Easing**: Animation curves used by the ghost overlay
//! - **Logging**: `tracing` target and span names for log filtering
//!
//! # Signal Example
//!
//! ```
//! use longpress_reorder_core::Signal;
//!
//! let row_moved = Signal::<(usize, usize)>::new();
//!
//! let conn_id = row_moved.connect(|(from, to)| {
//!     println!("row moved from {from} to {to}");
//! });
//!
//! row_moved.emit((2, 5));
//! row_moved.disconnect(conn_id);
//! ```

pub mod easing;
pub mod geometry;
pub mod logging;
pub mod signal;

pub use easing::{Easing, ease, lerp_eased};
pub use geometry::{Point, Rect, Size};
pub use signal::{ConnectionId, Signal};
