#![forbid(unsafe_code)]

//! In-memory [`Presentation`] double for tests.
//!
//! [`RecordingPresentation`] keeps a display order of tiles plus at most one
//! placeholder, lays it out with the same two-column flow rules as
//! [`GridSetup`], and records every command and notification it receives.
//! Pinned tiles are taken out of the flow, the way an absolutely positioned
//! element would be.

use std::collections::BTreeMap;

use grill_core::event::GrillEvent;
use grill_core::geometry::PixelPoint;

use crate::grid::{Column, GridMetrics, GridSetup};
use crate::presentation::Presentation;
use crate::session::Placeholder;
use crate::tiles::{TileId, TileSequence};
use crate::width::WidthClass;

/// One entry in the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Tile(TileId),
    Placeholder,
}

/// A mutation the session asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddClass { tile: TileId, class: String },
    RemoveClass { tile: TileId, class: String },
    InsertBefore { tile: TileId, class_list: String },
    InsertAfter { tile: TileId, class_list: String },
    Prepend { class_list: String },
    Replace { tile: TileId },
    Pin { tile: TileId, at: PixelPoint },
    ClearPin { tile: TileId },
}

/// Recording presentation layer with a simulated flow layout.
#[derive(Debug, Clone)]
pub struct RecordingPresentation {
    metrics: GridMetrics,
    widths: BTreeMap<TileId, WidthClass>,
    display: Vec<Slot>,
    placeholder_width: WidthClass,
    classes: BTreeMap<TileId, Vec<String>>,
    pins: BTreeMap<TileId, PixelPoint>,
    commands: Vec<Command>,
    events: Vec<GrillEvent>,
}

impl RecordingPresentation {
    /// Mirror the given tiles in display order.
    #[must_use]
    pub fn new(tiles: &TileSequence, metrics: GridMetrics) -> Self {
        Self {
            metrics,
            widths: tiles.iter().map(|t| (t.id(), t.width())).collect(),
            display: tiles.iter().map(|t| Slot::Tile(t.id())).collect(),
            placeholder_width: WidthClass::Half,
            classes: BTreeMap::new(),
            pins: BTreeMap::new(),
            commands: Vec::new(),
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn display(&self) -> &[Slot] {
        &self.display
    }

    /// Tile ids in display order, placeholder omitted.
    #[must_use]
    pub fn tile_order(&self) -> Vec<TileId> {
        self.display
            .iter()
            .filter_map(|slot| match slot {
                Slot::Tile(id) => Some(*id),
                Slot::Placeholder => None,
            })
            .collect()
    }

    #[must_use]
    pub fn has_placeholder(&self) -> bool {
        self.display.contains(&Slot::Placeholder)
    }

    #[must_use]
    pub fn has_class(&self, tile: TileId, class: &str) -> bool {
        self.classes
            .get(&tile)
            .is_some_and(|classes| classes.iter().any(|c| c == class))
    }

    #[must_use]
    pub fn pin_of(&self, tile: TileId) -> Option<PixelPoint> {
        self.pins.get(&tile).copied()
    }

    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    #[must_use]
    pub fn events(&self) -> &[GrillEvent] {
        &self.events
    }

    /// Top-left corner of a tile in the current flow, if it is in the flow.
    #[must_use]
    pub fn origin_of(&self, tile: TileId) -> Option<PixelPoint> {
        self.flow()
            .into_iter()
            .find_map(|(slot, at)| (slot == Slot::Tile(tile)).then_some(at))
    }

    /// Rendered pixel width for a span.
    #[must_use]
    pub fn pixel_width(&self, width: WidthClass) -> f64 {
        match width {
            WidthClass::Half => self.column_width(),
            WidthClass::Full => self.metrics.container_width - self.metrics.column_inset,
        }
    }

    fn column_width(&self) -> f64 {
        (self.metrics.container_width - self.metrics.column_inset) / 2.0
    }

    fn slot_width(&self, slot: Slot) -> WidthClass {
        match slot {
            Slot::Tile(id) => self.widths.get(&id).copied().unwrap_or_default(),
            Slot::Placeholder => self.placeholder_width,
        }
    }

    fn flow(&self) -> Vec<(Slot, PixelPoint)> {
        let slots: Vec<Slot> = self
            .display
            .iter()
            .copied()
            .filter(|slot| match slot {
                Slot::Tile(id) => !self.pins.contains_key(id),
                Slot::Placeholder => true,
            })
            .collect();
        let setup: GridSetup = slots.iter().map(|s| self.slot_width(*s)).collect();
        let pitch = self.metrics.row_pitch();
        let right_left = self.column_width() + self.metrics.column_inset;
        slots
            .into_iter()
            .zip(setup.placements())
            .map(|(slot, placement)| {
                let left = match placement.cell.col {
                    Column::Left => 0.0,
                    Column::Right => right_left,
                };
                let top = f64::from(placement.cell.row) * pitch;
                (slot, PixelPoint::new(top, left))
            })
            .collect()
    }

    fn detach_placeholder(&mut self) {
        self.display.retain(|slot| *slot != Slot::Placeholder);
    }

    fn index_of(&self, tile: TileId) -> Option<usize> {
        self.display.iter().position(|slot| *slot == Slot::Tile(tile))
    }
}

impl Presentation for RecordingPresentation {
    fn tile_width(&self, tile: TileId) -> f64 {
        self.widths
            .get(&tile)
            .map_or(0.0, |width| self.pixel_width(*width))
    }

    fn placeholder_position(&self) -> PixelPoint {
        self.flow()
            .into_iter()
            .find_map(|(slot, at)| (slot == Slot::Placeholder).then_some(at))
            .unwrap_or_default()
    }

    fn insert_placeholder_before(&mut self, placeholder: &Placeholder, tile: TileId) {
        self.detach_placeholder();
        self.placeholder_width = placeholder.width();
        let at = self.index_of(tile).unwrap_or(self.display.len());
        self.display.insert(at, Slot::Placeholder);
        self.commands.push(Command::InsertBefore {
            tile,
            class_list: placeholder.class_list().to_owned(),
        });
    }

    fn insert_placeholder_after(&mut self, placeholder: &Placeholder, tile: TileId) {
        self.detach_placeholder();
        self.placeholder_width = placeholder.width();
        let at = self.index_of(tile).map_or(self.display.len(), |i| i + 1);
        self.display.insert(at, Slot::Placeholder);
        self.commands.push(Command::InsertAfter {
            tile,
            class_list: placeholder.class_list().to_owned(),
        });
    }

    fn prepend_placeholder(&mut self, placeholder: &Placeholder) {
        self.detach_placeholder();
        self.placeholder_width = placeholder.width();
        self.display.insert(0, Slot::Placeholder);
        self.commands.push(Command::Prepend {
            class_list: placeholder.class_list().to_owned(),
        });
    }

    fn replace_placeholder(&mut self, _placeholder: &Placeholder, tile: TileId) {
        self.commands.push(Command::Replace { tile });
        if !self.has_placeholder() {
            return;
        }
        self.display.retain(|slot| *slot != Slot::Tile(tile));
        if let Some(at) = self.display.iter().position(|s| *s == Slot::Placeholder) {
            self.display[at] = Slot::Tile(tile);
        }
    }

    fn add_class(&mut self, tile: TileId, class: &str) {
        let classes = self.classes.entry(tile).or_default();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
        self.commands.push(Command::AddClass {
            tile,
            class: class.to_owned(),
        });
    }

    fn remove_class(&mut self, tile: TileId, class: &str) {
        if let Some(classes) = self.classes.get_mut(&tile) {
            classes.retain(|c| c != class);
        }
        self.commands.push(Command::RemoveClass {
            tile,
            class: class.to_owned(),
        });
    }

    fn pin_tile(&mut self, tile: TileId, at: PixelPoint) {
        self.pins.insert(tile, at);
        self.commands.push(Command::Pin { tile, at });
    }

    fn clear_pin(&mut self, tile: TileId) {
        self.pins.remove(&tile);
        self.commands.push(Command::ClearPin { tile });
    }

    fn trigger(&mut self, event: GrillEvent) {
        self.events.push(event);
    }
}
