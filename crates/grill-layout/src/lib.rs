#![forbid(unsafe_code)]

//! Two-column grid geometry and the drag-to-reorder session.
//!
//! # Role in Grill
//! `grill-layout` is the placement engine. It maps pointer pixels to grid
//! cells, grid cells to positions in the tile ordering, and drives the
//! start → move* → stop lifecycle that moves a drop placeholder around and
//! finally commits the new order.
//!
//! # Primary responsibilities
//! - **Width classes**: parse `gridN` annotations into [`WidthClass`] spans.
//! - **Geometry**: [`cell_for_pixel`] and [`index_for_position`].
//! - **Ordering**: [`TileSequence`] keeps tiles and their widths in lockstep.
//! - **Session**: [`DragSession`] owns the placeholder and issues placement
//!   commands through the [`Presentation`] seam.

pub mod error;
pub mod grid;
pub mod presentation;
pub mod session;
pub mod tiles;
pub mod width;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

pub use error::LayoutError;
pub use grid::{
    Column, GridCell, GridMetrics, GridSetup, TilePlacement, cell_for_pixel, index_for_position,
};
pub use presentation::Presentation;
pub use session::{
    DragEffect, DragNoopReason, DragSession, DragState, DragStyles, DragTransition, Placeholder,
    PlaceholderPlacement,
};
pub use tiles::{Tile, TileId, TileSequence};
pub use width::{GridClass, WidthClass};
