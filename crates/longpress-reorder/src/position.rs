//! Row positions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A slot in the list, identified by section and row.
///
/// Single-section lists use section 0 throughout. The controller only ever
/// compares positions for equality; what "before" and "after" mean is up to
/// the list widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Section index.
    pub section: usize,
    /// Row index within the section.
    pub row: usize,
}

impl Position {
    /// Create a position from a section and a row.
    #[inline]
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }

    /// Create a position in a single-section list.
    #[inline]
    pub const fn row(row: usize) -> Self {
        Self { section: 0, row }
    }
}

impl From<(usize, usize)> for Position {
    fn from((section, row): (usize, usize)) -> Self {
        Self { section, row }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section, self.row)
    }
}
