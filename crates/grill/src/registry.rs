#![forbid(unsafe_code)]

//! Containers to attached [`Grill`] instances.
//!
//! Attaching is idempotent: a container that already has a grill keeps it,
//! untouched, and the new arguments are ignored.

use std::collections::hash_map::Entry;
use std::hash::Hash;

use grill_layout::{TileId, TileSequence};
use rustc_hash::FxHashMap;

use crate::config::{GrillConfig, GrillOverrides};
use crate::error::Result;
use crate::widget::{Grill, GrillHooks};

/// Per-container store of grills keyed by a host-side container handle.
#[derive(Debug)]
pub struct GrillRegistry<C> {
    grills: FxHashMap<C, Grill>,
    defaults: GrillConfig,
}

impl<C: Eq + Hash> Default for GrillRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Eq + Hash> GrillRegistry<C> {
    /// Registry using the stock defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(GrillConfig::default())
    }

    /// Registry whose attachments start from `defaults`.
    #[must_use]
    pub fn with_defaults(defaults: GrillConfig) -> Self {
        Self {
            grills: FxHashMap::default(),
            defaults,
        }
    }

    #[inline]
    #[must_use]
    pub const fn defaults(&self) -> &GrillConfig {
        &self.defaults
    }

    /// Attach a grill to `container` unless one is already attached.
    ///
    /// `entries` are the container's tiles in layout order as
    /// `(id, class list)` pairs.
    pub fn attach<I, S>(
        &mut self,
        container: C,
        entries: I,
        container_width: f64,
        overrides: &GrillOverrides,
        hooks: GrillHooks,
    ) -> Result<&mut Grill>
    where
        I: IntoIterator<Item = (TileId, S)>,
        S: AsRef<str>,
    {
        match self.grills.entry(container) {
            Entry::Occupied(existing) => {
                tracing::debug!("container already has a grill; attach ignored");
                Ok(existing.into_mut())
            }
            Entry::Vacant(slot) => {
                let config = self.defaults.merge(overrides);
                let tiles = TileSequence::from_class_lists(entries, config.full_span)?;
                let grill = Grill::new(config, tiles, container_width, hooks)?;
                Ok(slot.insert(grill))
            }
        }
    }

    #[must_use]
    pub fn get(&self, container: &C) -> Option<&Grill> {
        self.grills.get(container)
    }

    pub fn get_mut(&mut self, container: &C) -> Option<&mut Grill> {
        self.grills.get_mut(container)
    }

    /// Remove and return the grill attached to `container`.
    pub fn detach(&mut self, container: &C) -> Option<Grill> {
        let removed = self.grills.remove(container);
        if removed.is_some() {
            tracing::info!("grill detached");
        }
        removed
    }

    #[must_use]
    pub fn contains(&self, container: &C) -> bool {
        self.grills.contains_key(container)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.grills.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grills.is_empty()
    }
}
