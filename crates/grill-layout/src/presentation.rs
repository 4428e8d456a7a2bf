#![forbid(unsafe_code)]

//! The seam to whatever renders the tiles.
//!
//! The placement engine never touches a visual tree directly. It asks the
//! presentation layer for geometry and tells it where the placeholder goes.
//! Implementations live with the host (a DOM binding, a TUI, a test double).

use grill_core::event::GrillEvent;
use grill_core::geometry::PixelPoint;

use crate::session::Placeholder;
use crate::tiles::TileId;

/// Geometry queries and visual-tree mutations the drag session relies on.
///
/// Placeholder insertion methods *move* the placeholder: if it is already
/// in the tree it is detached first, so at most one placeholder exists.
pub trait Presentation {
    /// Rendered width of a tile in pixels.
    fn tile_width(&self, tile: TileId) -> f64;

    /// Position of the placeholder relative to the container.
    fn placeholder_position(&self) -> PixelPoint;

    /// Put the placeholder immediately before `tile`.
    fn insert_placeholder_before(&mut self, placeholder: &Placeholder, tile: TileId);

    /// Put the placeholder immediately after `tile`.
    fn insert_placeholder_after(&mut self, placeholder: &Placeholder, tile: TileId);

    /// Put the placeholder first in the container.
    fn prepend_placeholder(&mut self, placeholder: &Placeholder);

    /// Swap the placeholder out for `tile`, removing the placeholder.
    fn replace_placeholder(&mut self, placeholder: &Placeholder, tile: TileId);

    /// Add a transient style class to a tile.
    fn add_class(&mut self, tile: TileId, class: &str);

    /// Remove a transient style class from a tile.
    fn remove_class(&mut self, tile: TileId, class: &str);

    /// Fix a tile's on-screen position while it is dragged.
    fn pin_tile(&mut self, tile: TileId, at: PixelPoint);

    /// Drop any inline position set by [`pin_tile`](Self::pin_tile).
    fn clear_pin(&mut self, tile: TileId);

    /// Fire a notification on the container.
    fn trigger(&mut self, event: GrillEvent);
}
