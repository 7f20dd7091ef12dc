//! Host-side backing model.
//!
//! The controller only moves rows visually; keeping the data in the same order
//! is the host's job. [`SectionedRows`] is a ready-made backing store that
//! applies the same remove-then-insert the list widget performs, and
//! [`SharedRowsPolicy`] wires it into a controller as its policy.

use std::sync::Arc;

use longpress_reorder_core::logging::targets;
use parking_lot::Mutex;

use crate::error::ModelError;
use crate::policy::ReorderPolicy;
use crate::position::Position;

/// Items grouped into sections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionedRows<T> {
    sections: Vec<Vec<T>>,
}

impl<T> SectionedRows<T> {
    /// Creates a model from its sections.
    pub fn new(sections: Vec<Vec<T>>) -> Self {
        Self { sections }
    }

    /// Creates a single-section model.
    pub fn single(rows: Vec<T>) -> Self {
        Self {
            sections: vec![rows],
        }
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of rows in `section`, or `None` if it does not exist.
    pub fn row_count(&self, section: usize) -> Option<usize> {
        self.sections.get(section).map(Vec::len)
    }

    /// Total number of rows across all sections.
    pub fn len(&self) -> usize {
        self.sections.iter().map(Vec::len).sum()
    }

    /// Whether there are no rows at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The item at `position`.
    pub fn get(&self, position: Position) -> Option<&T> {
        self.sections.get(position.section)?.get(position.row)
    }

    /// All sections.
    pub fn sections(&self) -> &[Vec<T>] {
        &self.sections
    }

    /// Consumes the model and returns its sections.
    pub fn into_sections(self) -> Vec<Vec<T>> {
        self.sections
    }

    /// Moves the item at `from` so it ends up at `to`.
    ///
    /// The item is removed first, then inserted at `to` in the resulting
    /// layout, which is what list widgets do for a visual row move. `to.row`
    /// may equal the row count of its section to append.
    pub fn apply_move(&mut self, from: Position, to: Position) -> Result<(), ModelError> {
        self.check_row(from)?;
        let count = self.sections.len();
        if to.section >= count {
            return Err(ModelError::SectionOutOfRange {
                section: to.section,
                count,
            });
        }

        // Validate the insertion point against the post-removal layout.
        let target_len = self.sections[to.section].len() - usize::from(from.section == to.section);
        if to.row > target_len {
            return Err(ModelError::RowOutOfRange {
                section: to.section,
                row: to.row,
                count: target_len,
            });
        }

        let item = self.sections[from.section].remove(from.row);
        self.sections[to.section].insert(to.row, item);
        Ok(())
    }

    fn check_row(&self, position: Position) -> Result<(), ModelError> {
        let count = self.sections.len();
        let rows = self
            .sections
            .get(position.section)
            .ok_or(ModelError::SectionOutOfRange {
                section: position.section,
                count,
            })?;
        if position.row >= rows.len() {
            return Err(ModelError::RowOutOfRange {
                section: position.section,
                row: position.row,
                count: rows.len(),
            });
        }
        Ok(())
    }
}

impl<T> From<Vec<Vec<T>>> for SectionedRows<T> {
    fn from(sections: Vec<Vec<T>>) -> Self {
        Self::new(sections)
    }
}

type Gate = Box<dyn FnMut(Position) -> bool>;

/// A policy that mirrors every move into a shared [`SectionedRows`].
///
/// The model stays reachable through [`rows`](Self::rows) so the host can
/// read it while and after dragging.
pub struct SharedRowsPolicy<T> {
    rows: Arc<Mutex<SectionedRows<T>>>,
    can_start: Option<Gate>,
    can_accept: Option<Gate>,
    finished: Vec<(Position, Position)>,
}

impl<T> SharedRowsPolicy<T> {
    /// Wraps a shared model. Every row may be dragged anywhere.
    pub fn new(rows: Arc<Mutex<SectionedRows<T>>>) -> Self {
        Self {
            rows,
            can_start: None,
            can_accept: None,
            finished: Vec::new(),
        }
    }

    /// Restrict which rows may be picked up.
    pub fn with_can_start_dragging(mut self, f: impl FnMut(Position) -> bool + 'static) -> Self {
        self.can_start = Some(Box::new(f));
        self
    }

    /// Restrict which positions accept the dragged row.
    pub fn with_can_accept_drag(mut self, f: impl FnMut(Position) -> bool + 'static) -> Self {
        self.can_accept = Some(Box::new(f));
        self
    }

    /// The shared model.
    pub fn rows(&self) -> &Arc<Mutex<SectionedRows<T>>> {
        &self.rows
    }

    /// `(initial, final)` of every drag that finished so far.
    pub fn finished(&self) -> &[(Position, Position)] {
        &self.finished
    }
}

impl<T> std::fmt::Debug for SharedRowsPolicy<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedRowsPolicy")
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl<T> ReorderPolicy for SharedRowsPolicy<T> {
    fn can_start_dragging(&mut self, position: Position) -> bool {
        self.can_start.as_mut().is_none_or(|f| f(position))
    }

    fn can_accept_drag(&mut self, position: Position) -> bool {
        self.can_accept.as_mut().is_none_or(|f| f(position))
    }

    fn position_changed(&mut self, from: Position, to: Position) {
        if let Err(err) = self.rows.lock().apply_move(from, to) {
            tracing::warn!(target: targets::MODEL, %from, %to, %err, "model out of sync with list");
        }
    }

    fn drag_finished(&mut self, initial: Position, final_position: Position) {
        tracing::debug!(target: targets::MODEL, %initial, %final_position, "reorder committed");
        self.finished.push((initial, final_position));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> SectionedRows<char> {
        SectionedRows::new(vec![vec!['a', 'b', 'c'], vec!['d', 'e']])
    }

    #[test]
    fn test_counts() {
        let rows = letters();
        assert_eq!(rows.section_count(), 2);
        assert_eq!(rows.row_count(1), Some(2));
        assert_eq!(rows.row_count(2), None);
        assert_eq!(rows.len(), 5);
        assert!(!rows.is_empty());
        assert_eq!(rows.get(Position::new(1, 0)), Some(&'d'));
    }

    #[test]
    fn test_move_within_section() {
        let mut rows = letters();
        rows.apply_move(Position::new(0, 0), Position::new(0, 2)).unwrap();
        assert_eq!(rows.sections()[0], vec!['b', 'c', 'a']);

        rows.apply_move(Position::new(0, 2), Position::new(0, 0)).unwrap();
        assert_eq!(rows.sections()[0], vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_move_across_sections() {
        let mut rows = letters();
        rows.apply_move(Position::new(0, 1), Position::new(1, 2)).unwrap();
        assert_eq!(rows.into_sections(), vec![vec!['a', 'c'], vec!['d', 'e', 'b']]);
    }

    #[test]
    fn test_move_out_of_range() {
        let mut rows = letters();
        assert_eq!(
            rows.apply_move(Position::new(2, 0), Position::new(0, 0)),
            Err(ModelError::SectionOutOfRange { section: 2, count: 2 })
        );
        assert_eq!(
            rows.apply_move(Position::new(0, 3), Position::new(0, 0)),
            Err(ModelError::RowOutOfRange {
                section: 0,
                row: 3,
                count: 3
            })
        );
        assert_eq!(
            rows.apply_move(Position::new(0, 0), Position::new(0, 3)),
            Err(ModelError::RowOutOfRange {
                section: 0,
                row: 3,
                count: 2
            })
        );
        assert_eq!(rows, letters());
    }

    #[test]
    fn test_shared_policy_applies_moves() {
        let rows = Arc::new(Mutex::new(letters()));
        let mut policy =
            SharedRowsPolicy::new(rows.clone()).with_can_accept_drag(|p| p.section == 0);

        assert!(policy.can_start_dragging(Position::new(1, 1)));
        assert!(!policy.can_accept_drag(Position::new(1, 0)));

        policy.position_changed(Position::new(0, 2), Position::new(0, 0));
        policy.drag_finished(Position::new(0, 2), Position::new(0, 0));

        assert_eq!(rows.lock().sections()[0], vec!['c', 'a', 'b']);
        assert_eq!(policy.finished(), &[(Position::new(0, 2), Position::new(0, 0))]);
    }

    #[test]
    fn test_shared_policy_survives_bad_move() {
        let rows = Arc::new(Mutex::new(letters()));
        let mut policy = SharedRowsPolicy::new(rows.clone());
        policy.position_changed(Position::new(5, 0), Position::new(0, 0));
        assert_eq!(*rows.lock(), letters());
    }
}
