#![forbid(unsafe_code)]

//! Grill configuration.
//!
//! [`GrillConfig`] holds every tunable with a default matching the stock
//! widget. Callers customize it with a [`GrillOverrides`], whose fields are
//! all optional; [`GrillConfig::merge`] applies only the fields that are set.
//! Both can be loaded from TOML or JSON.
//!
//! ```toml
//! widget_selector = ".card"
//! throttle_ms = 40
//!
//! [draggable]
//! helper = "clone"
//! ```

use std::path::Path;
use std::time::Duration;

use grill_layout::grid::{DEFAULT_COLUMN_INSET, DEFAULT_ROW_GAP, DEFAULT_TILE_HEIGHT};
use grill_layout::session::{DEFAULT_IN_MOTION_CLASS, DEFAULT_PLACEHOLDER_CLASS};
use grill_layout::{DragStyles, GridMetrics};
use serde::{Deserialize, Serialize};

use crate::error::{GrillError, Result};

/// Default window for move-sample throttling.
pub const DEFAULT_THROTTLE_MS: u64 = 60;
/// Default width code of a full-row tile.
pub const DEFAULT_FULL_SPAN: u8 = 6;

// ---------------------------------------------------------------------------
// Draggable options
// ---------------------------------------------------------------------------

/// What follows the pointer during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HelperMode {
    /// The tile itself is dragged.
    #[default]
    Original,
    /// A cloned proxy is dragged and the tile stays put.
    Clone,
}

/// Options handed through to the host's drag library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraggableOptions {
    /// Selector for draggable items.
    pub items: String,
    /// Selector for the drag handle inside an item.
    pub handle: String,
    pub helper: HelperMode,
}

impl Default for DraggableOptions {
    fn default() -> Self {
        Self {
            items: ".dtm-panel".to_owned(),
            handle: ".dtm-panel-header, .dtm-panel-header h4".to_owned(),
            helper: HelperMode::Original,
        }
    }
}

// ---------------------------------------------------------------------------
// GrillConfig
// ---------------------------------------------------------------------------

/// Complete configuration for one grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrillConfig {
    /// Selector that finds tiles inside the container.
    pub widget_selector: String,
    pub draggable: DraggableOptions,
    /// Tile height in pixels.
    pub tile_height: f64,
    /// Vertical gap between rows in pixels.
    pub row_gap: f64,
    /// Inset subtracted from the container width before halving.
    pub column_inset: f64,
    /// Width code of a tile that spans the whole row.
    pub full_span: u8,
    /// Move samples are processed at most once per this many milliseconds.
    pub throttle_ms: u64,
    pub in_motion_class: String,
    pub placeholder_class: String,
}

impl Default for GrillConfig {
    fn default() -> Self {
        Self {
            widget_selector: ".dtm-panel-widget".to_owned(),
            draggable: DraggableOptions::default(),
            tile_height: DEFAULT_TILE_HEIGHT,
            row_gap: DEFAULT_ROW_GAP,
            column_inset: DEFAULT_COLUMN_INSET,
            full_span: DEFAULT_FULL_SPAN,
            throttle_ms: DEFAULT_THROTTLE_MS,
            in_motion_class: DEFAULT_IN_MOTION_CLASS.to_owned(),
            placeholder_class: DEFAULT_PLACEHOLDER_CLASS.to_owned(),
        }
    }
}

impl GrillConfig {
    /// Parse a complete configuration from TOML; missing fields default.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load a complete configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse a complete configuration from JSON; missing fields default.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Apply caller overrides on top of this configuration.
    ///
    /// Only the enumerated fields merge; nested draggable options merge
    /// field by field.
    #[must_use]
    pub fn merge(&self, overrides: &GrillOverrides) -> Self {
        let mut merged = self.clone();
        if let Some(selector) = &overrides.widget_selector {
            merged.widget_selector.clone_from(selector);
        }
        if let Some(draggable) = &overrides.draggable {
            if let Some(items) = &draggable.items {
                merged.draggable.items.clone_from(items);
            }
            if let Some(handle) = &draggable.handle {
                merged.draggable.handle.clone_from(handle);
            }
            if let Some(helper) = draggable.helper {
                merged.draggable.helper = helper;
            }
        }
        if let Some(v) = overrides.tile_height {
            merged.tile_height = v;
        }
        if let Some(v) = overrides.row_gap {
            merged.row_gap = v;
        }
        if let Some(v) = overrides.column_inset {
            merged.column_inset = v;
        }
        if let Some(v) = overrides.full_span {
            merged.full_span = v;
        }
        if let Some(v) = overrides.throttle_ms {
            merged.throttle_ms = v;
        }
        if let Some(class) = &overrides.in_motion_class {
            merged.in_motion_class.clone_from(class);
        }
        if let Some(class) = &overrides.placeholder_class {
            merged.placeholder_class.clone_from(class);
        }
        merged
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.tile_height.is_finite() || self.tile_height <= 0.0 {
            errors.push(format!("tile_height must be > 0, got {}", self.tile_height));
        }
        if !self.row_gap.is_finite() || self.row_gap < 0.0 {
            errors.push(format!("row_gap must be >= 0, got {}", self.row_gap));
        }
        if !self.column_inset.is_finite() || self.column_inset < 0.0 {
            errors.push(format!("column_inset must be >= 0, got {}", self.column_inset));
        }
        if self.full_span == 0 {
            errors.push("full_span must be > 0".into());
        }
        if self.throttle_ms == 0 {
            errors.push("throttle_ms must be > 0".into());
        }
        if self.in_motion_class.trim().is_empty() {
            errors.push("in_motion_class must not be empty".into());
        }
        if self.placeholder_class.trim().is_empty() {
            errors.push("placeholder_class must not be empty".into());
        }

        errors
    }

    /// [`validate`](Self::validate) as a `Result`.
    pub fn validated(self) -> Result<Self> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            for error in &errors {
                tracing::warn!(%error, "rejected grill configuration");
            }
            Err(GrillError::InvalidConfig(errors))
        }
    }

    /// Pixel metrics for a container of the given width.
    #[must_use]
    pub fn metrics(&self, container_width: f64) -> GridMetrics {
        GridMetrics {
            container_width,
            tile_height: self.tile_height,
            row_gap: self.row_gap,
            column_inset: self.column_inset,
        }
    }

    /// Classes the drag session applies.
    #[must_use]
    pub fn styles(&self) -> DragStyles {
        DragStyles {
            in_motion_class: self.in_motion_class.clone(),
            placeholder_class: self.placeholder_class.clone(),
        }
    }

    /// Throttle window for move samples.
    #[must_use]
    pub const fn throttle_wait(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }

    /// Whether a separate proxy visual follows the pointer.
    #[must_use]
    pub fn uses_helper(&self) -> bool {
        self.draggable.helper == HelperMode::Clone
    }
}

// ---------------------------------------------------------------------------
// Overrides
// ---------------------------------------------------------------------------

/// Caller-supplied partial configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrillOverrides {
    pub widget_selector: Option<String>,
    pub draggable: Option<DraggableOverrides>,
    pub tile_height: Option<f64>,
    pub row_gap: Option<f64>,
    pub column_inset: Option<f64>,
    pub full_span: Option<u8>,
    pub throttle_ms: Option<u64>,
    pub in_motion_class: Option<String>,
    pub placeholder_class: Option<String>,
}

/// Partial [`DraggableOptions`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraggableOverrides {
    pub items: Option<String>,
    pub handle: Option<String>,
    pub helper: Option<HelperMode>,
}

impl GrillOverrides {
    /// Parse overrides from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Parse overrides from JSON.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    #[must_use]
    pub fn widget_selector(mut self, selector: impl Into<String>) -> Self {
        self.widget_selector = Some(selector.into());
        self
    }

    #[must_use]
    pub fn helper(mut self, helper: HelperMode) -> Self {
        self.draggable.get_or_insert_with(Default::default).helper = Some(helper);
        self
    }

    #[must_use]
    pub fn throttle_ms(mut self, ms: u64) -> Self {
        self.throttle_ms = Some(ms);
        self
    }

    #[must_use]
    pub fn full_span(mut self, code: u8) -> Self {
        self.full_span = Some(code);
        self
    }
}
