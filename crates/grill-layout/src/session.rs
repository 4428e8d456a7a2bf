#![forbid(unsafe_code)]

//! Drag session: the start → move* → stop lifecycle of one reorder gesture.
//!
//! ```text
//! Idle --start--> Dragging --drag--> Dragging --stop--> Idle
//! ```
//!
//! While dragging, the session owns a [`Placeholder`] marking the drop
//! target. Each move resolves the pointer to a grid cell; when the cell
//! changes, the placeholder is relocated through the [`Presentation`]. On
//! stop the dragged tile is spliced into its new place in the
//! [`TileSequence`] and swapped in for the placeholder.
//!
//! # Invariants
//!
//! 1. At most one drag is active per session; a second `start` is a no-op.
//! 2. The tile ordering is mutated only by `stop`.
//! 3. Out-of-order events (`drag`/`stop` while idle) never panic. They are
//!    reported as [`DragEffect::Noop`] and leave every piece of state
//!    untouched.
//! 4. Dropping a tile on the cell it started from leaves the order unchanged.

use grill_core::event::GestureInfo;
use serde::{Deserialize, Serialize};

use crate::grid::{GridCell, GridMetrics, cell_for_pixel};
use crate::presentation::Presentation;
use crate::tiles::{TileId, TileSequence};
use crate::width::{GridClass, WidthClass};

/// Default class applied to a tile while it is dragged.
pub const DEFAULT_IN_MOTION_CLASS: &str = "dtm-panel-inmotion";
/// Default base class of the placeholder.
pub const DEFAULT_PLACEHOLDER_CLASS: &str = "dtm-panel-placeholder";

// ---------------------------------------------------------------------------
// Placeholder
// ---------------------------------------------------------------------------

/// Transient drop-target marker shown while a tile is dragged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    grid_class: GridClass,
    width: WidthClass,
    class_list: String,
    /// Cell the drag started from.
    pub start_position: GridCell,
    /// Cell the placeholder was last relocated to.
    pub previous_position: GridCell,
}

impl Placeholder {
    fn new(base_class: &str, grid_class: GridClass, width: WidthClass) -> Self {
        Self {
            grid_class,
            width,
            class_list: format!("{base_class} {grid_class}"),
            start_position: GridCell::default(),
            previous_position: GridCell::default(),
        }
    }

    /// Width annotation copied from the dragged tile.
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

    /// Full class list, e.g. `"dtm-panel-placeholder grid6"`.
    #[must_use]
    pub fn class_list(&self) -> &str {
        &self.class_list
    }
}

/// Style classes the session applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragStyles {
    pub in_motion_class: String,
    pub placeholder_class: String,
}

impl Default for DragStyles {
    fn default() -> Self {
        Self {
            in_motion_class: DEFAULT_IN_MOTION_CLASS.to_owned(),
            placeholder_class: DEFAULT_PLACEHOLDER_CLASS.to_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// State and transitions
// ---------------------------------------------------------------------------

/// Lifecycle state of a session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Tile being dragged.
        player: TileId,
        /// Whether a separate proxy visual follows the pointer.
        helper: bool,
        placeholder: Placeholder,
    },
}

impl DragState {
    /// Short label for logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging { .. } => "dragging",
        }
    }
}

/// Why an event was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragNoopReason {
    /// `drag` or `stop` arrived with no active drag.
    IdleWithoutActiveDrag,
    /// `start` arrived while another drag was active.
    ActiveDragAlreadyInProgress,
    /// `start` named a tile that is not in the layout.
    UnknownTile,
}

/// Where the placeholder was moved relative to the authoritative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "at", content = "tile", rename_all = "snake_case")]
pub enum PlaceholderPlacement {
    Front,
    Before(TileId),
    After(TileId),
}

/// What one lifecycle step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum DragEffect {
    Started {
        player: TileId,
        start: GridCell,
        index: usize,
    },
    PlaceholderMoved {
        player: TileId,
        previous: GridCell,
        current: GridCell,
        index: usize,
        placement: PlaceholderPlacement,
    },
    /// The pointer stayed in the same cell.
    Unchanged {
        player: TileId,
        cell: GridCell,
    },
    Committed {
        player: TileId,
        from_index: usize,
        to_index: usize,
    },
    Noop {
        reason: DragNoopReason,
    },
}

impl DragEffect {
    #[inline]
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self, Self::Noop { .. })
    }
}

/// One state-machine step with its diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragTransition {
    pub transition_id: u64,
    pub from: DragState,
    pub to: DragState,
    pub effect: DragEffect,
}

// ---------------------------------------------------------------------------
// DragSession
// ---------------------------------------------------------------------------

/// Controller for reorder gestures on one layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    state: DragState,
    metrics: GridMetrics,
    styles: DragStyles,
    transition_counter: u64,
}

impl DragSession {
    #[must_use]
    pub fn new(metrics: GridMetrics, styles: DragStyles) -> Self {
        Self {
            state: DragState::Idle,
            metrics,
            styles,
            transition_counter: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Tile currently being dragged.
    #[must_use]
    pub const fn player(&self) -> Option<TileId> {
        match &self.state {
            DragState::Dragging { player, .. } => Some(*player),
            DragState::Idle => None,
        }
    }

    #[must_use]
    pub const fn placeholder(&self) -> Option<&Placeholder> {
        match &self.state {
            DragState::Dragging { placeholder, .. } => Some(placeholder),
            DragState::Idle => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn metrics(&self) -> &GridMetrics {
        &self.metrics
    }

    /// Replace the pixel metrics, e.g. after the container was resized.
    pub fn set_metrics(&mut self, metrics: GridMetrics) {
        self.metrics = metrics;
    }

    #[inline]
    #[must_use]
    pub const fn styles(&self) -> &DragStyles {
        &self.styles
    }

    /// Begin dragging `player`.
    ///
    /// Marks the tile in motion, inserts a placeholder of the same width
    /// class right before it, records the starting cell from the
    /// placeholder's position, and pins the tile there so it does not jump.
    pub fn start<P: Presentation>(
        &mut self,
        presentation: &mut P,
        tiles: &TileSequence,
        player: TileId,
        helper: bool,
    ) -> DragTransition {
        let from = self.state.clone();
        if self.is_active() {
            return self.noop(from, DragNoopReason::ActiveDragAlreadyInProgress);
        }
        let Some(tile) = tiles.tile(player) else {
            return self.noop(from, DragNoopReason::UnknownTile);
        };

        presentation.add_class(player, &self.styles.in_motion_class);

        let mut placeholder =
            Placeholder::new(&self.styles.placeholder_class, tile.grid_class(), tile.width());
        presentation.insert_placeholder_before(&placeholder, player);

        let coordinates = presentation.placeholder_position();
        let start = cell_for_pixel(
            coordinates,
            presentation.tile_width(player),
            &self.metrics,
        );
        placeholder.start_position = start;
        placeholder.previous_position = start;

        let index = tiles.grid_setup().index_for_position(start);
        tracing::debug!(tile = %player, cell = %start, index, helper, "drag started");

        presentation.pin_tile(player, coordinates);

        self.state = DragState::Dragging {
            player,
            helper,
            placeholder,
        };
        self.transition(
            from,
            DragEffect::Started {
                player,
                start,
                index,
            },
        )
    }

    /// Process one pointer sample.
    ///
    /// When the sample resolves to a different cell than the last one, the
    /// placeholder is relocated: to the front for index `0`, otherwise next
    /// to the tile currently at the target index. It goes before that tile
    /// when the target is at or ahead of the dragged tile in the ordering
    /// (always the case for the last tile), and after it otherwise.
    pub fn drag<P: Presentation>(
        &mut self,
        presentation: &mut P,
        tiles: &TileSequence,
        info: &GestureInfo,
    ) -> DragTransition {
        let from = self.state.clone();
        let DragState::Dragging {
            player,
            placeholder,
            ..
        } = &mut self.state
        else {
            return self.noop(from, DragNoopReason::IdleWithoutActiveDrag);
        };
        let player = *player;

        let previous = placeholder.previous_position;
        let current = cell_for_pixel(
            info.position,
            presentation.tile_width(player),
            &self.metrics,
        );
        if current == previous {
            return self.transition(
                from,
                DragEffect::Unchanged {
                    player,
                    cell: current,
                },
            );
        }

        let index = tiles.grid_setup().index_for_position(current);
        let origin = tiles.position_of(player).unwrap_or(tiles.len());
        let placement = match tiles.get(index) {
            Some(target) if index > 0 => {
                // Must land where `stop` splices the tile in.
                if index <= origin {
                    presentation.insert_placeholder_before(placeholder, target.id());
                    PlaceholderPlacement::Before(target.id())
                } else {
                    presentation.insert_placeholder_after(placeholder, target.id());
                    PlaceholderPlacement::After(target.id())
                }
            }
            _ => {
                presentation.prepend_placeholder(placeholder);
                PlaceholderPlacement::Front
            }
        };
        placeholder.previous_position = current;

        tracing::debug!(
            tile = %player,
            previous = %previous,
            current = %current,
            index,
            ?placement,
            "placeholder relocated"
        );

        self.transition(
            from,
            DragEffect::PlaceholderMoved {
                player,
                previous,
                current,
                index,
                placement,
            },
        )
    }

    /// Finish the drag and commit the new order.
    ///
    /// The tile is removed at the index of the starting cell and reinserted
    /// at the index of the placeholder's last cell, read against the
    /// post-removal ordering.
    pub fn stop<P: Presentation>(
        &mut self,
        presentation: &mut P,
        tiles: &mut TileSequence,
    ) -> DragTransition {
        let from = self.state.clone();
        let DragState::Dragging {
            player,
            placeholder,
            ..
        } = std::mem::take(&mut self.state)
        else {
            return self.noop(from, DragNoopReason::IdleWithoutActiveDrag);
        };

        let setup = tiles.grid_setup();
        let from_index = setup.index_for_position(placeholder.start_position);
        let to_index = setup.index_for_position(placeholder.previous_position);
        if tiles.position_of(player) != Some(from_index) {
            tracing::debug!(
                tile = %player,
                from_index,
                actual = ?tiles.position_of(player),
                "start cell does not resolve to the dragged tile"
            );
        }
        tiles.move_tile(from_index, to_index);

        presentation.remove_class(player, &self.styles.in_motion_class);
        presentation.clear_pin(player);
        presentation.replace_placeholder(&placeholder, player);

        tracing::info!(tile = %player, from_index, to_index, "tile order committed");

        self.transition(
            from,
            DragEffect::Committed {
                player,
                from_index,
                to_index,
            },
        )
    }

    fn noop(&mut self, from: DragState, reason: DragNoopReason) -> DragTransition {
        tracing::debug!(state = from.label(), ?reason, "drag event ignored");
        self.transition(from, DragEffect::Noop { reason })
    }

    fn transition(&mut self, from: DragState, effect: DragEffect) -> DragTransition {
        self.transition_counter = self.transition_counter.saturating_add(1);
        DragTransition {
            transition_id: self.transition_counter,
            from,
            to: self.state.clone(),
            effect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Column;
    use crate::testing::{Command, RecordingPresentation};
    use crate::width::WidthClass;
    use grill_core::geometry::PixelPoint;

    const CONTAINER: f64 = 620.0;

    fn layout(classes: &[&str]) -> (TileSequence, RecordingPresentation, DragSession) {
        let tiles = TileSequence::from_class_lists(
            classes
                .iter()
                .enumerate()
                .map(|(i, c)| (TileId(i as u64), *c)),
            6,
        )
        .expect("valid layout");
        let metrics = GridMetrics::new(CONTAINER);
        let view = RecordingPresentation::new(&tiles, metrics);
        let session = DragSession::new(metrics, DragStyles::default());
        (tiles, view, session)
    }

    fn halves() -> (TileSequence, RecordingPresentation, DragSession) {
        layout(&["grid3", "grid3", "grid3", "grid3"])
    }

    fn ids(raw: &[u64]) -> Vec<TileId> {
        raw.iter().copied().map(TileId).collect()
    }

    fn cell(row: u32, col: u32) -> GridCell {
        GridCell::new(row, Column::from_index(col))
    }

    // --- start ---

    #[test]
    fn start_inserts_placeholder_before_tile_and_pins_it() {
        let (tiles, mut view, mut session) = halves();
        let t = session.start(&mut view, &tiles, TileId(0), false);

        assert_eq!(
            t.effect,
            DragEffect::Started {
                player: TileId(0),
                start: cell(0, 0),
                index: 0,
            }
        );
        assert!(session.is_active());
        assert_eq!(session.player(), Some(TileId(0)));
        assert!(view.has_class(TileId(0), DEFAULT_IN_MOTION_CLASS));
        assert_eq!(view.pin_of(TileId(0)), Some(PixelPoint::origin()));
        assert!(matches!(
            &view.commands()[1],
            Command::InsertBefore { tile: TileId(0), class_list }
                if class_list == "dtm-panel-placeholder grid3"
        ));

        let placeholder = session.placeholder().expect("placeholder while dragging");
        assert_eq!(placeholder.start_position, placeholder.previous_position);
        assert_eq!(placeholder.width(), WidthClass::Half);
    }

    #[test]
    fn start_resolves_cell_of_last_tile() {
        let (tiles, mut view, mut session) = halves();
        let t = session.start(&mut view, &tiles, TileId(3), true);
        assert_eq!(
            t.effect,
            DragEffect::Started {
                player: TileId(3),
                start: cell(1, 1),
                index: 3,
            }
        );
        assert!(matches!(
            session.state(),
            DragState::Dragging { helper: true, .. }
        ));
    }

    #[test]
    fn second_start_is_ignored() {
        let (tiles, mut view, mut session) = halves();
        session.start(&mut view, &tiles, TileId(0), false);
        let before = session.state().clone();

        let t = session.start(&mut view, &tiles, TileId(1), false);
        assert_eq!(
            t.effect,
            DragEffect::Noop {
                reason: DragNoopReason::ActiveDragAlreadyInProgress
            }
        );
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn unknown_tile_is_ignored() {
        let (tiles, mut view, mut session) = halves();
        let t = session.start(&mut view, &tiles, TileId(99), false);
        assert_eq!(
            t.effect,
            DragEffect::Noop {
                reason: DragNoopReason::UnknownTile
            }
        );
        assert!(!session.is_active());
        assert!(view.commands().is_empty());
    }

    // --- out-of-order events ---

    #[test]
    fn drag_and_stop_without_start_are_noops() {
        let (mut tiles, mut view, mut session) = halves();
        let before = tiles.clone();

        let t = session.drag(&mut view, &tiles, &GestureInfo::at(400.0, 400.0));
        assert!(t.effect.is_noop());
        let t = session.stop(&mut view, &mut tiles);
        assert!(t.effect.is_noop());

        assert_eq!(tiles, before);
        assert!(view.commands().is_empty());
        assert_eq!(session.state(), &DragState::Idle);
    }

    #[test]
    fn stop_twice_only_commits_once() {
        let (mut tiles, mut view, mut session) = halves();
        session.start(&mut view, &tiles, TileId(0), false);
        session.drag(&mut view, &tiles, &GestureInfo::at(322.0, 320.0));
        session.stop(&mut view, &mut tiles);
        let after_first = tiles.clone();

        let t = session.stop(&mut view, &mut tiles);
        assert!(t.effect.is_noop());
        assert_eq!(tiles, after_first);
    }

    // --- drag ---

    #[test]
    fn same_cell_does_not_relocate() {
        let (tiles, mut view, mut session) = halves();
        session.start(&mut view, &tiles, TileId(0), false);
        let commands = view.commands().len();

        let t = session.drag(&mut view, &tiles, &GestureInfo::at(40.0, 60.0));
        assert_eq!(
            t.effect,
            DragEffect::Unchanged {
                player: TileId(0),
                cell: cell(0, 0),
            }
        );
        assert_eq!(view.commands().len(), commands);
    }

    #[test]
    fn forward_move_places_after_target() {
        let (mut tiles, mut view, mut session) = halves();
        session.start(&mut view, &tiles, TileId(0), false);

        let t = session.drag(&mut view, &tiles, &GestureInfo::at(322.0, 320.0));
        assert_eq!(
            t.effect,
            DragEffect::PlaceholderMoved {
                player: TileId(0),
                previous: cell(0, 0),
                current: cell(1, 1),
                index: 3,
                placement: PlaceholderPlacement::After(TileId(3)),
            }
        );

        let t = session.stop(&mut view, &mut tiles);
        assert_eq!(
            t.effect,
            DragEffect::Committed {
                player: TileId(0),
                from_index: 0,
                to_index: 3,
            }
        );
        assert_eq!(tiles.ids(), ids(&[1, 2, 3, 0]));
        assert_eq!(view.tile_order(), tiles.ids());
        assert!(!view.has_placeholder());
        assert!(!view.has_class(TileId(0), DEFAULT_IN_MOTION_CLASS));
        assert_eq!(view.pin_of(TileId(0)), None);
    }

    #[test]
    fn last_tile_places_before_target() {
        let (mut tiles, mut view, mut session) = halves();
        session.start(&mut view, &tiles, TileId(3), false);

        let t = session.drag(&mut view, &tiles, &GestureInfo::at(0.0, 320.0));
        assert!(matches!(
            t.effect,
            DragEffect::PlaceholderMoved {
                index: 1,
                placement: PlaceholderPlacement::Before(TileId(1)),
                ..
            }
        ));

        session.stop(&mut view, &mut tiles);
        assert_eq!(tiles.ids(), ids(&[0, 3, 1, 2]));
        assert_eq!(view.tile_order(), tiles.ids());
    }

    #[test]
    fn index_zero_goes_to_front() {
        let (mut tiles, mut view, mut session) = halves();
        session.start(&mut view, &tiles, TileId(2), false);

        let t = session.drag(&mut view, &tiles, &GestureInfo::at(0.0, 0.0));
        assert!(matches!(
            t.effect,
            DragEffect::PlaceholderMoved {
                placement: PlaceholderPlacement::Front,
                ..
            }
        ));

        session.stop(&mut view, &mut tiles);
        assert_eq!(tiles.ids(), ids(&[2, 0, 1, 3]));
        assert_eq!(view.tile_order(), tiles.ids());
    }

    #[test]
    fn backward_move_from_middle_places_before_target() {
        let (mut tiles, mut view, mut session) = halves();
        session.start(&mut view, &tiles, TileId(2), false);
        let t = session.drag(&mut view, &tiles, &GestureInfo::at(0.0, 320.0));
        assert!(matches!(
            t.effect,
            DragEffect::PlaceholderMoved {
                index: 1,
                placement: PlaceholderPlacement::Before(TileId(1)),
                ..
            }
        ));

        session.stop(&mut view, &mut tiles);
        assert_eq!(tiles.ids(), ids(&[0, 2, 1, 3]));
        assert_eq!(view.tile_order(), tiles.ids());
    }

    #[test]
    fn forward_move_from_middle_places_after_target() {
        let (mut tiles, mut view, mut session) = halves();
        session.start(&mut view, &tiles, TileId(1), false);
        let t = session.drag(&mut view, &tiles, &GestureInfo::at(322.0, 0.0));
        assert!(matches!(
            t.effect,
            DragEffect::PlaceholderMoved {
                index: 2,
                placement: PlaceholderPlacement::After(TileId(2)),
                ..
            }
        ));

        session.stop(&mut view, &mut tiles);
        assert_eq!(tiles.ids(), ids(&[0, 2, 1, 3]));
        assert_eq!(view.tile_order(), tiles.ids());
    }

    #[test]
    fn mixed_widths_keep_view_and_order_in_step() {
        // Row 0: #0 #1, row 1: #2 (full), row 2: #3 #4.
        let layout_classes = ["grid3", "grid3", "grid6", "grid3", "grid3"];
        let cases: [(u64, (f64, f64), &[u64]); 4] = [
            (1, (322.0, 320.0), &[0, 2, 1, 3, 4]),
            (3, (0.0, 320.0), &[0, 3, 1, 2, 4]),
            (4, (322.0, 0.0), &[0, 1, 4, 2, 3]),
            (2, (644.0, 320.0), &[0, 1, 3, 4, 2]),
        ];
        for (player, (top, left), expected) in cases {
            let (mut tiles, mut view, mut session) = layout(&layout_classes);
            session.start(&mut view, &tiles, TileId(player), false);
            session.drag(&mut view, &tiles, &GestureInfo::at(top, left));
            session.stop(&mut view, &mut tiles);

            assert_eq!(tiles.ids(), ids(expected), "dragging #{player}");
            assert_eq!(view.tile_order(), tiles.ids(), "dragging #{player}");
        }
    }

    #[test]
    fn dropping_back_on_start_cell_keeps_order() {
        let (mut tiles, mut view, mut session) = halves();
        let before = tiles.clone();
        session.start(&mut view, &tiles, TileId(1), false);
        session.drag(&mut view, &tiles, &GestureInfo::at(322.0, 0.0));
        session.drag(&mut view, &tiles, &GestureInfo::at(0.0, 320.0));

        let t = session.stop(&mut view, &mut tiles);
        assert_eq!(
            t.effect,
            DragEffect::Committed {
                player: TileId(1),
                from_index: 1,
                to_index: 1,
            }
        );
        assert_eq!(tiles, before);
        assert_eq!(view.tile_order(), tiles.ids());
    }

    #[test]
    fn full_width_tile_moves_with_its_width() {
        let (mut tiles, mut view, mut session) = layout(&["grid6", "grid3", "grid3"]);
        let t = session.start(&mut view, &tiles, TileId(2), false);
        assert!(matches!(t.effect, DragEffect::Started { index: 2, .. }));

        session.drag(&mut view, &tiles, &GestureInfo::at(0.0, 0.0));
        session.stop(&mut view, &mut tiles);

        assert_eq!(tiles.ids(), ids(&[2, 0, 1]));
        assert_eq!(
            tiles.grid_setup().as_slice(),
            &[WidthClass::Half, WidthClass::Full, WidthClass::Half]
        );
        assert_eq!(view.tile_order(), tiles.ids());
    }

    // --- diagnostics ---

    #[test]
    fn transition_ids_increase() {
        let (mut tiles, mut view, mut session) = halves();
        let a = session.start(&mut view, &tiles, TileId(0), false);
        let b = session.drag(&mut view, &tiles, &GestureInfo::at(0.0, 0.0));
        let c = session.stop(&mut view, &mut tiles);
        assert!(a.transition_id < b.transition_id);
        assert!(b.transition_id < c.transition_id);
        assert_eq!(c.to, DragState::Idle);
    }

    #[test]
    fn transitions_serialize_with_tags() {
        let (mut tiles, mut view, mut session) = halves();
        session.start(&mut view, &tiles, TileId(0), false);
        let t = session.stop(&mut view, &mut tiles);

        let json = serde_json::to_value(&t).expect("serialize transition");
        assert_eq!(json["effect"]["effect"], "committed");
        assert_eq!(json["from"]["state"], "dragging");
        assert_eq!(json["to"]["state"], "idle");
    }
}
