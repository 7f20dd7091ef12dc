//! Scripted, headless walkthrough of a drag across sections.
//!
//! A console "list" prints what a real widget would do, and a tiny animation
//! queue stands in for the platform's animation loop.
//!
//! Run with: cargo run -p longpress-reorder --example sections
//!
//! Set `RUST_LOG=longpress_reorder=trace` to see ignored events as well.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use longpress_reorder::{
    AnimationId, DragController, DragState, Easing, GestureEvent, GhostAnimation, GhostOverlay,
    GhostStyle, ListView, Point, Position, ReorderConfig, RowScale, SectionedRows,
    SharedRowsPolicy,
};
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

const ROW_HEIGHT: f32 = 44.0;

/// Prints every visual change instead of drawing it.
struct ConsoleList {
    sections: Vec<Vec<String>>,
}

impl ConsoleList {
    fn flat_index(&self, position: Position) -> Option<usize> {
        let rows = self.sections.get(position.section)?;
        (position.row < rows.len()).then(|| {
            self.sections[..position.section]
                .iter()
                .map(Vec::len)
                .sum::<usize>()
                + position.row
        })
    }

    fn print(&self) {
        for (index, rows) in self.sections.iter().enumerate() {
            println!("  section {index}: {}", rows.join(", "));
        }
    }
}

impl ListView for ConsoleList {
    type Visual = String;

    fn position_at(&self, point: Point) -> Option<Position> {
        if point.y < 0.0 {
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

    fn cell_visual_at(&mut self, position: Position) -> Option<String> {
        self.sections
            .get(position.section)?
            .get(position.row)
            .cloned()
    }

    fn cell_center(&self, position: Position) -> Option<Point> {
        let index = self.flat_index(position)?;
        Some(Point::new(160.0, index as f32 * ROW_HEIGHT + ROW_HEIGHT / 2.0))
    }

    fn move_row(&mut self, from: Position, to: Position) {
        println!("list: move row {from} -> {to}");
        let item = self.sections[from.section].remove(from.row);
        self.sections[to.section].insert(to.row, item);
    }

    fn set_row_hidden(&mut self, position: Position, hidden: bool) {
        println!("list: row {position} hidden={hidden}");
    }

    fn set_row_alpha(&mut self, position: Position, alpha: f32) {
        println!("list: row {position} alpha={alpha}");
    }

    fn fade_row(&mut self, position: Position, alpha: f32, duration: Duration, _easing: Easing) {
        println!("list: fade row {position} to {alpha} over {duration:?}");
    }
}

/// Queues animations so the script can finish them in order.
#[derive(Default)]
struct QueuedOverlay {
    pending: VecDeque<AnimationId>,
}

impl GhostOverlay for QueuedOverlay {
    type Visual = String;
    type Ghost = String;

    fn create_ghost(&mut self, visual: String, style: &GhostStyle) -> String {
        println!("ghost: created from {visual:?} (shadow {})", style.shadow_opacity);
        visual
    }

    fn set_center(&mut self, ghost: &String, center: Point) {
        println!("ghost: {ghost} at y={}", center.y);
    }

    fn set_scale(&mut self, _ghost: &String, _scale: f32) {}

    fn set_alpha(&mut self, _ghost: &String, _alpha: f32) {}

    fn animate(&mut self, ghost: &String, id: AnimationId, animation: GhostAnimation) {
        println!(
            "ghost: {ghost} animating #{} scale={:?} alpha={:?}",
            id.raw(),
            animation.scale,
            animation.alpha
        );
        self.pending.push_back(id);
    }

    fn remove(&mut self, ghost: String) {
        println!("ghost: {ghost} removed");
    }
}

type Controller = DragController<ConsoleList, QueuedOverlay>;

fn flush_animations(controller: &mut Controller) {
    while let Some(id) = controller.overlay_mut().pending.pop_front() {
        controller.animation_finished(id, true);
    }
}

fn row(index: usize) -> Point {
    Point::new(100.0, index as f32 * ROW_HEIGHT + 10.0)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("longpress_reorder=debug")),
        )
        .init();

    let sections: Vec<Vec<String>> = [
        vec!["Inbox", "Drafts", "Sent"],
        vec!["Work", "Travel"],
        vec!["Archive"],
    ]
    .into_iter()
    .map(|rows| rows.into_iter().map(String::from).collect())
    .collect();

    let model = Arc::new(Mutex::new(SectionedRows::new(sections.clone())));
    // The first section stays put.
    let policy = SharedRowsPolicy::new(model.clone())
        .with_can_start_dragging(|p| p.section != 0)
        .with_can_accept_drag(|p| p.section != 0);

    let config = ReorderConfig::builder().row_scale(RowScale::Big).build()?;
    let mut controller =
        DragController::new(ConsoleList { sections }, QueuedOverlay::default(), config)
            .with_policy(policy);

    controller.state_changed.connect(|state: &DragState| {
        println!("state: {state}");
    });
    controller.reorder_finished.connect(|(initial, last)| {
        println!("finished: {initial} -> {last}");
    });

    println!("before:");
    controller.list().print();

    println!("\npress on \"Inbox\" (pinned):");
    controller.handle_gesture(GestureEvent::began(row(0)));

    println!("\ndrag \"Travel\" to the top of the last section, releasing before the lift finishes:");
    controller.handle_gesture(GestureEvent::began(row(4)));
    controller.handle_gesture(GestureEvent::changed(row(5)));
    controller.handle_gesture(GestureEvent::changed(row(1)));
    controller.handle_gesture(GestureEvent::ended(row(5)));
    flush_animations(&mut controller);

    println!("\nafter:");
    controller.list().print();
    println!("model: {:?}", model.lock().sections());

    Ok(())
}
