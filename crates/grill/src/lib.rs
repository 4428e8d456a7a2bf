#![forbid(unsafe_code)]

//! Grill public facade.
//!
//! Drag-to-reorder placement for tiles laid out in a two-column grid. This
//! crate wires the placement engine from `grill-layout` to configuration,
//! move-sample throttling, caller hooks, and per-container attachment.
//!
//! # Example
//! ```
//! use grill::prelude::*;
//! use grill::layout::testing::RecordingPresentation;
//!
//! let mut registry = GrillRegistry::new();
//! let grill = registry
//!     .attach(
//!         "dashboard",
//!         (0..4u64).map(|i| (TileId(i), "dtm-panel grid3")),
//!         620.0,
//!         &GrillOverrides::default(),
//!         GrillHooks::new(),
//!     )
//!     .unwrap();
//! let mut view = RecordingPresentation::new(grill.tiles(), *grill.session().metrics());
//!
//! let now = Instant::now();
//! grill.on_start(&mut view, TileId(0), &GestureInfo::at(0.0, 0.0), now);
//! grill.on_move(&mut view, &GestureInfo::at(322.0, 320.0), now);
//! grill.on_end(&mut view, &GestureInfo::at(322.0, 320.0), now);
//! assert_eq!(grill.tiles().position_of(TileId(0)), Some(3));
//! ```

pub mod config;
pub mod error;
pub mod registry;
pub mod widget;

// --- Core re-exports ---------------------------------------------------------

pub use grill_core::event::{GestureInfo, GrillEvent};
pub use grill_core::geometry::PixelPoint;
pub use grill_core::rate_limit::{Debounce, Debounced, Throttle, Throttled};

// --- Layout re-exports -------------------------------------------------------

pub use grill_layout::{
    Column, DragEffect, DragNoopReason, DragSession, DragState, DragTransition, GridCell,
    GridClass, GridMetrics, GridSetup, LayoutError, Placeholder, PlaceholderPlacement,
    Presentation, Tile, TileId, TileSequence, WidthClass, cell_for_pixel, index_for_position,
};

// --- Facade types ------------------------------------------------------------

pub use config::{DraggableOptions, DraggableOverrides, GrillConfig, GrillOverrides, HelperMode};
pub use error::{GrillError, Result};
pub use registry::GrillRegistry;
pub use widget::{Grill, GrillHooks};

pub use web_time::Instant;

/// Convenience prelude for hosts.
pub mod prelude {
    pub use crate::{
        DragEffect, GestureInfo, Grill, GrillConfig, GrillError, GrillEvent, GrillHooks,
        GrillOverrides, GrillRegistry, HelperMode, Instant, PixelPoint, Presentation, TileId,
    };

    pub use crate::core;
    pub use crate::layout;
}

pub use grill_core as core;
pub use grill_layout as layout;
