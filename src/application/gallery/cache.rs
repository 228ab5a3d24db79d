// SPDX-License-Identifier: MPL-2.0
//! Fixed-size cache of realized full-size surfaces.

use crate::application::port::SurfaceId;

/// Index → attached full-size surface, one slot per catalog entry.
///
/// A slot is filled at most once and never cleared: surfaces that are not
/// current are hidden by the gallery, not removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCache {
    slots: Box<[Option<SurfaceId>]>,
}

impl LoadedCache {
    /// Creates an empty cache with one slot per image.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![None; count].into_boxed_slice(),
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the surface realized for `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<SurfaceId> {
        self.slots.get(index).copied().flatten()
    }

    /// Stores the surface realized for `index`.
    ///
    /// Returns `false` without storing when `index` is out of range or the
    /// slot is already filled.
    pub fn insert(&mut self, index: usize, surface: SurfaceId) -> bool {
        match self.slots.get_mut(index) {
            Some(slot @ None) => {
                *slot = Some(surface);
                true
            }
            _ => false,
        }
    }

    /// Iterates realized surfaces in index order.
    pub fn loaded(&self) -> impl Iterator<Item = SurfaceId> + '_ {
        self.slots.iter().filter_map(|slot| *slot)
    }

    /// Number of realized surfaces.
    #[must_use]
    pub fn loaded_count(&self) -> usize {
        self.loaded().count()
    }
}
