//! Reorder configuration.
//!
//! A [`ReorderConfig`] is handed to the controller at construction and never
//! changes afterwards. It can be assembled with [`ReorderConfig::builder`] or
//! loaded from TOML:
//!
//! ```
//! use longpress_reorder::{ReorderConfig, RowScale, ScrollBehavior};
//!
//! let config = ReorderConfig::from_toml_str(
//!     r#"
//!     row_scale = "big"
//!     scroll_behavior = "late"
//!
//!     [auto_scroll]
//!     edge_threshold = 32.0
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.row_scale(), RowScale::Big);
//! assert_eq!(config.scroll_behavior(), ScrollBehavior::Late);
//! assert_eq!(config.auto_scroll().edge_threshold, 32.0);
//! ```

use std::time::Duration;

use longpress_reorder_core::Easing;
use longpress_reorder_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::ghost::GhostStyle;

/// Default duration of the entrance, exit and reveal animations in milliseconds.
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 250;

/// Default ghost opacity while it floats above the list.
pub const DEFAULT_GHOST_ALPHA: f32 = 0.95;

/// Default distance from a visible edge, in pixels, at which auto-scroll engages.
pub const DEFAULT_EDGE_THRESHOLD: f32 = 48.0;

/// Default auto-scroll speed at full edge penetration, in pixels per second.
pub const DEFAULT_MAX_SCROLL_SPEED: f32 = 800.0;

/// How much the dragged row pops out of the list while floating.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowScale {
    /// No scaling at all.
    None,
    /// Barely pops out.
    Small,
    /// Visibly pops out.
    #[default]
    Medium,
    /// Considerably bigger than the other rows.
    Big,
    /// A caller-chosen factor of at least 1.0.
    Custom(f32),
}

impl RowScale {
    /// The scale multiplier applied to the ghost.
    pub fn factor(self) -> f32 {
        match self {
            Self::None => 1.00,
            Self::Small => 1.01,
            Self::Medium => 1.03,
            Self::Big => 1.05,
            Self::Custom(factor) => factor,
        }
    }
}

/// When auto-scroll engages as the drag approaches a visible edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    /// Never auto-scroll.
    None,
    /// Scroll as soon as the pointer comes within the edge threshold.
    #[default]
    Early,
    /// Scroll only once the pointer reaches or passes the edge.
    Late,
}

/// Tuning for auto-scroll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoScrollConfig {
    /// Depth of the edge zone in pixels.
    ///
    /// With [`ScrollBehavior::Early`] the zone lies inside the visible area;
    /// with [`ScrollBehavior::Late`] it lies beyond the edge. Speed ramps up
    /// linearly across the zone.
    pub edge_threshold: f32,
    /// Scroll speed at the far end of the zone, in pixels per second.
    pub max_speed: f32,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
            max_speed: DEFAULT_MAX_SCROLL_SPEED,
        }
    }
}

/// Immutable configuration of one drag controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReorderConfig {
    row_scale: RowScale,
    scroll_behavior: ScrollBehavior,
    auto_scroll: AutoScrollConfig,
    animation_duration_ms: u64,
    ghost_alpha: f32,
    easing: Easing,
    ghost_style: GhostStyle,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            row_scale: RowScale::default(),
            scroll_behavior: ScrollBehavior::default(),
            auto_scroll: AutoScrollConfig::default(),
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            ghost_alpha: DEFAULT_GHOST_ALPHA,
            easing: Easing::EaseInOut,
            ghost_style: GhostStyle::default(),
        }
    }
}

impl ReorderConfig {
    /// Start building a configuration from the defaults.
    pub fn builder() -> ReorderConfigBuilder {
        ReorderConfigBuilder {
            config: Self::default(),
        }
    }

    /// Parse and validate a configuration from TOML.
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        tracing::debug!(target: targets::CONFIG, ?config, "loaded reorder configuration");
        Ok(config)
    }

    /// Check every value against its allowed range.
    pub fn validate(&self) -> Result<()> {
        let factor = self.row_scale.factor();
        if !factor.is_finite() || factor < 1.0 {
            return Err(ConfigError::InvalidScale(factor));
        }
        if !(0.0..=1.0).contains(&self.ghost_alpha) {
            return Err(ConfigError::InvalidAlpha(self.ghost_alpha));
        }
        let threshold = self.auto_scroll.edge_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::invalid_auto_scroll("edge_threshold", threshold));
        }
        let speed = self.auto_scroll.max_speed;
        if !speed.is_finite() || speed < 0.0 {
            return Err(ConfigError::invalid_auto_scroll("max_speed", speed));
        }
        if self.animation_duration_ms == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        Ok(())
    }

    /// Ghost scale preset.
    #[inline]
    pub fn row_scale(&self) -> RowScale {
        self.row_scale
    }

    /// Auto-scroll behavior.
    #[inline]
    pub fn scroll_behavior(&self) -> ScrollBehavior {
        self.scroll_behavior
    }

    /// Auto-scroll tuning.
    #[inline]
    pub fn auto_scroll(&self) -> AutoScrollConfig {
        self.auto_scroll
    }

    /// Duration of each ghost animation.
    #[inline]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Ghost opacity while floating.
    #[inline]
    pub fn ghost_alpha(&self) -> f32 {
        self.ghost_alpha
    }

    /// Easing curve used by all ghost and row animations.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Snapshot styling passed to the overlay when the ghost is created.
    #[inline]
    pub fn ghost_style(&self) -> &GhostStyle {
        &self.ghost_style
    }
}

/// Builder for [`ReorderConfig`].
#[derive(Debug, Clone)]
pub struct ReorderConfigBuilder {
    config: ReorderConfig,
}

impl ReorderConfigBuilder {
    /// Set the ghost scale preset.
    pub fn row_scale(mut self, row_scale: RowScale) -> Self {
        self.config.row_scale = row_scale;
        self
    }

    /// Set the auto-scroll behavior.
    pub fn scroll_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.config.scroll_behavior = behavior;
        self
    }

    /// Set the auto-scroll edge threshold in pixels.
    pub fn edge_threshold(mut self, threshold: f32) -> Self {
        self.config.auto_scroll.edge_threshold = threshold;
        self
    }

    /// Set the maximum auto-scroll speed in pixels per second.
    pub fn max_scroll_speed(mut self, speed: f32) -> Self {
        self.config.auto_scroll.max_speed = speed;
        self
    }

    /// Set the animation duration. Sub-millisecond precision is dropped and
    /// durations beyond `u64::MAX` milliseconds saturate.
    pub fn animation_duration(mut self, duration: Duration) -> Self {
        self.config.animation_duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the ghost opacity while floating.
    pub fn ghost_alpha(mut self, alpha: f32) -> Self {
        self.config.ghost_alpha = alpha;
        self
    }

    /// Set the easing curve.
    pub fn easing(mut self, easing: Easing) -> Self {
        self.config.easing = easing;
        self
    }

    /// Set the ghost snapshot styling.
    pub fn ghost_style(mut self, style: GhostStyle) -> Self {
        self.config.ghost_style = style;
        self
    }

    /// Validate and finish the configuration.
    pub fn build(self) -> Result<ReorderConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
