//! Error types for configuration and host-side model helpers.
//!
//! The gesture path itself never fails: rejected starts, unresolvable
//! positions and stray events are declined silently. Only configuration
//! loading and the [`SectionedRows`](crate::SectionedRows) helper report
//! errors.

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while building or loading a [`ReorderConfig`](crate::ReorderConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The ghost scale factor is below 1.0 or not finite.
    #[error("Invalid row scale {0}: the factor must be a finite value of at least 1.0")]
    InvalidScale(f32),

    /// The ghost opacity is outside `0.0..=1.0`.
    #[error("Invalid ghost alpha {0}: expected a value between 0.0 and 1.0")]
    InvalidAlpha(f32),

    /// An auto-scroll tuning value is negative or not finite.
    #[error("Invalid auto-scroll {field}: {value}")]
    InvalidAutoScroll { field: &'static str, value: f32 },

    /// Animation duration of zero.
    #[error("Animation duration must be greater than zero")]
    ZeroDuration,

    /// TOML parse error.
    #[error("Failed to parse reorder configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    /// Create an auto-scroll tuning error.
    pub fn invalid_auto_scroll(field: &'static str, value: f32) -> Self {
        Self::InvalidAutoScroll { field, value }
    }
}

/// Errors raised by the host-side sectioned model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// The section index does not exist.
    #[error("Section {section} out of range ({count} sections)")]
    SectionOutOfRange { section: usize, count: usize },

    /// The row index does not exist within its section.
    #[error("Row {row} out of range in section {section} ({count} rows)")]
    RowOutOfRange {
        section: usize,
        row: usize,
        count: usize,
    },
}
