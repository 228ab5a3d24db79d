// SPDX-License-Identifier: MPL-2.0
//! Ordered image catalog.

/// One image of the gallery: where to find it and what to say about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// Path or URL, relative to the configured variant directories.
    pub reference: String,
    /// Caption shown below the full-size image.
    pub caption: String,
}

impl ImageEntry {
    /// Creates a new entry.
    pub fn new(reference: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            caption: caption.into(),
        }
    }
}

/// Ordered, index-addressable list of images.
///
/// The order defines navigation order and is fixed after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<ImageEntry>,
}

impl Catalog {
    /// Creates a catalog from entries, keeping their order.
    #[must_use]
    pub fn new(entries: Vec<ImageEntry>) -> Self {
        Self { entries }
    }

    /// Returns the number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the catalog holds no image.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageEntry> {
        self.entries.get(index)
    }

    /// Iterates entries in navigation order.
    pub fn iter(&self) -> std::slice::Iter<'_, ImageEntry> {
        self.entries.iter()
    }
}

impl FromIterator<ImageEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = ImageEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
