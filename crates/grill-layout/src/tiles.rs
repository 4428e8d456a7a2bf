#![forbid(unsafe_code)]

//! The authoritative tile ordering.
//!
//! [`TileSequence`] owns both the tiles and the parallel [`GridSetup`] of
//! their widths. Every mutation goes through [`TileSequence::move_tile`],
//! which splices both vectors together so they can never drift apart.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::grid::GridSetup;
use crate::width::{GridClass, WidthClass};

/// Opaque handle the presentation layer uses to name a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(pub u64);

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for TileId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A reorderable unit of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    id: TileId,
    grid_class: GridClass,
    width: WidthClass,
}

impl Tile {
    /// Create a tile, resolving its span against the full-row code.
    #[must_use]
    pub const fn new(id: TileId, grid_class: GridClass, full_span: u8) -> Self {
        Self {
            id,
            grid_class,
            width: grid_class.width(full_span),
        }
    }

    /// Create a tile from its class list, e.g. `"dtm-panel grid3"`.
    pub fn from_class_list(
        id: TileId,
        class_list: &str,
        full_span: u8,
    ) -> Result<Self, LayoutError> {
        let grid_class =
            GridClass::parse(class_list).ok_or_else(|| LayoutError::MissingWidthClass {
                tile: id,
                class_list: class_list.to_owned(),
            })?;
        Ok(Self::new(id, grid_class, full_span))
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// The declared width annotation; placeholders copy it.
    #[inline]
    #[must_use]
    pub const fn grid_class(&self) -> GridClass {
        self.grid_class
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> WidthClass {
        self.width
    }
}

/// Ordered tiles plus their width classes, kept in lockstep.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TileSequence {
    tiles: Vec<Tile>,
    setup: GridSetup,
}

impl TileSequence {
    /// Build a sequence, rejecting duplicate ids.
    pub fn new(tiles: Vec<Tile>) -> Result<Self, LayoutError> {
        for (i, tile) in tiles.iter().enumerate() {
            if tiles[..i].iter().any(|t| t.id == tile.id) {
                return Err(LayoutError::DuplicateTile { tile: tile.id });
            }
        }
        let setup = tiles.iter().map(Tile::width).collect();
        Ok(Self { tiles, setup })
    }

    /// Build a sequence from `(id, class list)` pairs in layout order.
    pub fn from_class_lists<I, S>(entries: I, full_span: u8) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = (TileId, S)>,
        S: AsRef<str>,
    {
        if full_span == 0 {
            return Err(LayoutError::InvalidFullSpan);
        }
        let tiles = entries
            .into_iter()
            .map(|(id, classes)| Tile::from_class_list(id, classes.as_ref(), full_span))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(tiles)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Look up a tile by id.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Tile ids in layout order.
    #[must_use]
    pub fn ids(&self) -> Vec<TileId> {
        self.tiles.iter().map(Tile::id).collect()
    }

    /// Current index of a tile.
    #[must_use]
    pub fn position_of(&self, id: TileId) -> Option<usize> {
        self.tiles.iter().position(|t| t.id == id)
    }

    /// Whether `id` is the final tile in the ordering.
    #[must_use]
    pub fn is_last(&self, id: TileId) -> bool {
        self.tiles.last().is_some_and(|t| t.id == id)
    }

    /// Width classes parallel to the tiles.
    #[inline]
    #[must_use]
    pub fn grid_setup(&self) -> &GridSetup {
        &self.setup
    }

    /// Splice the tile at `from` out, then back in at `to`.
    ///
    /// `to` is read against the sequence *after* removal and is clamped to
    /// its end. Returns `false` (and changes nothing) if `from` is out of
    /// range.
    pub fn move_tile(&mut self, from: usize, to: usize) -> bool {
        if from >= self.tiles.len() {
            return false;
        }
        let tile = self.tiles.remove(from);
        let to = to.min(self.tiles.len());
        self.tiles.insert(to, tile);
        self.setup.move_entry(from, to);
        debug_assert_eq!(self.tiles.len(), self.setup.len());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(classes: &[&str]) -> TileSequence {
        TileSequence::from_class_lists(
            classes
                .iter()
                .enumerate()
                .map(|(i, c)| (TileId(i as u64), *c)),
            6,
        )
        .expect("valid layout")
    }

    #[test]
    fn reads_widths_of_every_tile() {
        let seq = sequence(&["panel grid6", "panel grid3", "panel grid3"]);
        assert_eq!(
            seq.grid_setup().as_slice(),
            &[WidthClass::Full, WidthClass::Half, WidthClass::Half]
        );
    }

    #[test]
    fn missing_width_class_is_reported_at_construction() {
        let err = TileSequence::from_class_lists([(TileId(7), "panel")], 6).unwrap_err();
        assert_eq!(
            err,
            LayoutError::MissingWidthClass {
                tile: TileId(7),
                class_list: "panel".into(),
            }
        );
    }

    #[test]
    fn duplicate_ids_rejected() {
        let err = TileSequence::from_class_lists([(TileId(1), "grid3"), (TileId(1), "grid3")], 6)
            .unwrap_err();
        assert_eq!(err, LayoutError::DuplicateTile { tile: TileId(1) });
    }

    #[test]
    fn zero_full_span_rejected() {
        let err = TileSequence::from_class_lists([(TileId(1), "grid3")], 0).unwrap_err();
        assert_eq!(err, LayoutError::InvalidFullSpan);
    }

    #[test]
    fn move_tile_keeps_widths_in_lockstep() {
        let mut seq = sequence(&["grid6", "grid3", "grid3"]);
        assert!(seq.move_tile(0, 2));
        assert_eq!(seq.ids(), vec![TileId(1), TileId(2), TileId(0)]);
        assert_eq!(
            seq.grid_setup().as_slice(),
            &[WidthClass::Half, WidthClass::Half, WidthClass::Full]
        );
    }

    #[test]
    fn move_to_same_index_is_identity() {
        let mut seq = sequence(&["grid3", "grid3", "grid6", "grid3"]);
        let before = seq.clone();
        for i in 0..seq.len() {
            seq.move_tile(i, i);
            assert_eq!(seq, before);
        }
    }

    #[test]
    fn move_out_of_range_is_rejected() {
        let mut seq = sequence(&["grid3"]);
        assert!(!seq.move_tile(3, 0));
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn lookup_helpers() {
        let seq = sequence(&["grid3", "grid3", "grid6"]);
        assert_eq!(seq.position_of(TileId(2)), Some(2));
        assert_eq!(seq.position_of(TileId(9)), None);
        assert!(seq.is_last(TileId(2)));
        assert!(!seq.is_last(TileId(0)));
        assert_eq!(seq.tile(TileId(1)).map(Tile::width), Some(WidthClass::Half));
        assert_eq!(seq.get(5), None);
    }
}
