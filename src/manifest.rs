// SPDX-License-Identifier: MPL-2.0
//! Gallery manifest: a TOML file listing the images of one gallery.
//!
//! ```toml
//! container = "gallery"
//!
//! [settings]
//! gallery_title = "Holidays"
//! direct_download = true
//!
//! [[images]]
//! reference = "beach.jpg"
//! caption = "The beach at dawn"
//! ```

use crate::config::{GallerySection, DEFAULT_CONTAINER_ID};
use crate::domain::gallery::{GalleryOverrides, ImageEntry};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One `[[images]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestImage {
    pub reference: String,
    #[serde(default)]
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Id of the container the gallery attaches to.
    #[serde(default = "default_container")]
    pub container: String,

    #[serde(default)]
    pub settings: GallerySection,

    #[serde(default)]
    pub images: Vec<ManifestImage>,
}

fn default_container() -> String {
    DEFAULT_CONTAINER_ID.to_string()
}

impl Manifest {
    /// Parses and validates a manifest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] on malformed TOML, unknown keys, an empty
    /// container id or an image without reference.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Reads and parses a manifest file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, otherwise the errors
    /// of [`Self::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let manifest = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            images = manifest.images.len(),
            "manifest loaded"
        );
        Ok(manifest)
    }

    fn validate(&self) -> Result<()> {
        if self.container.trim().is_empty() {
            return Err(Error::Config("manifest container id is empty".into()));
        }
        if let Some(position) = self
            .images
            .iter()
            .position(|image| image.reference.trim().is_empty())
        {
            return Err(Error::Config(format!(
                "manifest image #{} has an empty reference",
                position + 1
            )));
        }
        self.settings.to_overrides()?;
        Ok(())
    }

    /// Gallery overrides from the `[settings]` table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an unknown `gallery_type`.
    pub fn overrides(&self) -> Result<GalleryOverrides> {
        self.settings.to_overrides()
    }

    /// Catalog entries in manifest order.
    #[must_use]
    pub fn entries(&self) -> Vec<ImageEntry> {
        self.images
            .iter()
            .map(|image| ImageEntry::new(image.reference.as_str(), image.caption.as_str()))
            .collect()
    }
}
