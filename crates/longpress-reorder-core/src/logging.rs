//! Logging facilities for long-press reordering.
//!
//! Everything is instrumented with the `tracing` crate. To see logs, install a
//! subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("longpress_reorder=debug")
//!     .init();
//! ```
//!
//! Drag transitions are logged at `debug`, ignored events (moves while idle,
//! re-entrant presses, stale animation completions) at `trace`.

/// Span names used for tracing.
pub mod span_names {
    /// One drag session, from accepted press to settled ghost.
    pub const DRAG_SESSION: &str = "longpress_reorder::drag_session";
    /// Auto-scroll tick processing.
    pub const AUTO_SCROLL_TICK: &str = "longpress_reorder::auto_scroll_tick";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "longpress_reorder_core::signal";
    /// Drag state machine target.
    pub const CONTROLLER: &str = "longpress_reorder::controller";
    /// Ghost overlay lifecycle target.
    pub const GHOST: &str = "longpress_reorder::ghost";
    /// Auto-scroll target.
    pub const AUTO_SCROLL: &str = "longpress_reorder::auto_scroll";
    /// Configuration loading target.
    pub const CONFIG: &str = "longpress_reorder::config";
    /// Host-side model helpers target.
    pub const MODEL: &str = "longpress_reorder::model";
}
