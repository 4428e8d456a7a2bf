#![forbid(unsafe_code)]

//! Grid geometry: pixels → cells → positions in the tile ordering.
//!
//! The layout is row-major with two columns. Half-width tiles fill the next
//! free column; a full-width tile always starts a fresh row and covers both
//! columns, leaving the right column empty when it follows a lone half tile.
//!
//! # Invariants
//!
//! 1. [`cell_for_pixel`] assigns the column by the dragged tile's *center*,
//!    inclusive toward the right column at the midline.
//! 2. [`index_for_position`] returns the tile occupying the cell, the
//!    nearest preceding tile for an empty cell, and `len - 1` past the end.
//!    The result is always `< len` for a non-empty setup.
//! 3. For a setup of only half tiles, the cell of tile `i` maps back to `i`.

use grill_core::geometry::PixelPoint;
use serde::{Deserialize, Serialize};

use crate::width::WidthClass;

/// Default tile height in pixels.
pub const DEFAULT_TILE_HEIGHT: f64 = 302.0;
/// Default vertical gap between rows in pixels.
pub const DEFAULT_ROW_GAP: f64 = 20.0;
/// Default inset subtracted from the container width before halving.
pub const DEFAULT_COLUMN_INSET: f64 = 20.0;

// ---------------------------------------------------------------------------
// Cells
// ---------------------------------------------------------------------------

/// One of the two grid columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    #[default]
    Left,
    Right,
}

impl Column {
    /// Column number, `0` or `1`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }

    /// Column for a number; anything non-zero is the right column.
    #[inline]
    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        if index == 0 { Self::Left } else { Self::Right }
    }
}

/// A discrete `(row, column)` address in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCell {
    pub row: u32,
    pub col: Column,
}

impl GridCell {
    #[inline]
    #[must_use]
    pub const fn new(row: u32, col: Column) -> Self {
        Self { row, col }
    }

    /// Reading-order key: two cells per row.
    #[inline]
    #[must_use]
    pub const fn linear(self) -> u64 {
        self.row as u64 * 2 + self.col.index() as u64
    }
}

impl std::fmt::Display for GridCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col.index())
    }
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

/// Pixel constants that turn pointer positions into cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridMetrics {
    /// Width of the tile container.
    pub container_width: f64,
    /// Height of one tile.
    pub tile_height: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    /// Inset subtracted from the container width before finding the midline.
    pub column_inset: f64,
}

impl GridMetrics {
    /// Metrics for a container of the given width with default spacing.
    #[must_use]
    pub const fn new(container_width: f64) -> Self {
        Self {
            container_width,
            tile_height: DEFAULT_TILE_HEIGHT,
            row_gap: DEFAULT_ROW_GAP,
            column_inset: DEFAULT_COLUMN_INSET,
        }
    }

    /// Distance between the tops of consecutive rows.
    #[inline]
    #[must_use]
    pub fn row_pitch(&self) -> f64 {
        self.tile_height + self.row_gap
    }

    /// X coordinate at which a tile's center counts as the right column.
    #[inline]
    #[must_use]
    pub fn midline(&self) -> f64 {
        (self.container_width - self.column_inset) * 0.5
    }
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Resolve the cell under a dragged tile.
///
/// `point` is the tile's top-left corner relative to the container and
/// `player_width` its rendered width. Negative coordinates are folded to
/// their magnitude; non-finite values count as zero.
#[must_use]
pub fn cell_for_pixel(point: PixelPoint, player_width: f64, metrics: &GridMetrics) -> GridCell {
    let point = point.magnitude();
    let half_width = if player_width.is_finite() {
        player_width / 2.0
    } else {
        0.0
    };

    let col = if point.left + half_width >= metrics.midline() {
        Column::Right
    } else {
        Column::Left
    };

    let pitch = metrics.row_pitch();
    let row = if pitch.is_finite() && pitch > 0.0 {
        // Float-to-int casts saturate.
        (point.top / pitch).floor() as u32
    } else {
        0
    };

    GridCell::new(row, col)
}

// ---------------------------------------------------------------------------
// Grid setup
// ---------------------------------------------------------------------------

/// Where a tile lands in the flow layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePlacement {
    /// First cell the tile covers.
    pub cell: GridCell,
    pub width: WidthClass,
}

impl TilePlacement {
    /// Whether the tile covers `cell`.
    #[must_use]
    pub fn covers(&self, cell: GridCell) -> bool {
        cell.row == self.cell.row && (self.width.is_full() || cell.col == self.cell.col)
    }
}

/// Width classes of the tiles, in layout order.
///
/// Mutated only through [`TileSequence`](crate::tiles::TileSequence), which
/// keeps it parallel to the tiles themselves.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridSetup {
    widths: Vec<WidthClass>,
}

impl GridSetup {
    #[must_use]
    pub fn new(widths: Vec<WidthClass>) -> Self {
        Self { widths }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<WidthClass> {
        self.widths.get(index).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[WidthClass] {
        &self.widths
    }

    /// Flow-layout placement of every tile, in order.
    #[must_use]
    pub fn placements(&self) -> Vec<TilePlacement> {
        let mut out = Vec::with_capacity(self.widths.len());
        let mut row = 0u32;
        let mut col = Column::Left;
        for &width in &self.widths {
            match width {
                WidthClass::Half => {
                    out.push(TilePlacement {
                        cell: GridCell::new(row, col),
                        width,
                    });
                    if col == Column::Right {
                        row += 1;
                        col = Column::Left;
                    } else {
                        col = Column::Right;
                    }
                }
                WidthClass::Full => {
                    if col == Column::Right {
                        row += 1;
                        col = Column::Left;
                    }
                    out.push(TilePlacement {
                        cell: GridCell::new(row, Column::Left),
                        width,
                    });
                    row += 1;
                }
            }
        }
        out
    }

    /// First cell covered by the tile at `index`.
    #[must_use]
    pub fn cell_of(&self, index: usize) -> Option<GridCell> {
        self.placements().get(index).map(|p| p.cell)
    }

    /// Number of rows the layout occupies.
    #[must_use]
    pub fn row_count(&self) -> u32 {
        self.placements().last().map_or(0, |p| p.cell.row + 1)
    }

    /// Position in the ordering that a cell refers to.
    ///
    /// This is the last tile whose first cell does not come after `cell` in
    /// reading order: the occupant of the cell, the tile just before a gap,
    /// or the last tile when the cell lies past the end of the layout. An
    /// empty setup yields `0`.
    #[must_use]
    pub fn index_for_position(&self, cell: GridCell) -> usize {
        let key = cell.linear();
        let placements = self.placements();
        placements
            .partition_point(|p| p.cell.linear() <= key)
            .saturating_sub(1)
    }

    pub(crate) fn move_entry(&mut self, from: usize, to: usize) {
        let width = self.widths.remove(from);
        let to = to.min(self.widths.len());
        self.widths.insert(to, width);
    }
}

impl FromIterator<WidthClass> for GridSetup {
    fn from_iter<I: IntoIterator<Item = WidthClass>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Free-function form of [`GridSetup::index_for_position`].
#[inline]
#[must_use]
pub fn index_for_position(cell: GridCell, setup: &GridSetup) -> usize {
    setup.index_for_position(cell)
}
