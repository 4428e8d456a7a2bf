#![forbid(unsafe_code)]

//! Layout construction errors.

use thiserror::Error;

use crate::tiles::TileId;

/// A layout that cannot be driven by the placement engine.
///
/// These surface at initialization. Nothing in an active drag returns them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A tile's class list carries no usable `gridN` width annotation.
    #[error("tile {tile} has no valid grid width class in {class_list:?}")]
    MissingWidthClass { tile: TileId, class_list: String },
    /// The same tile id was supplied twice.
    #[error("tile {tile} appears more than once in the layout")]
    DuplicateTile { tile: TileId },
    /// The full-row span code was zero.
    #[error("full-row span code must be non-zero")]
    InvalidFullSpan,
}
