// SPDX-License-Identifier: MPL-2.0
//! User preferences stored in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[display]` - Thumbnail size and directory sort order
//! - `[gallery]` - Gallery option overrides applied before any manifest
//!   `[settings]`
//!
//! Unknown keys inside `[gallery]` are rejected: a typo in an option name is
//! a configuration error, not a silent no-op.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument, then `ICED_GALLERY_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::gallery::{GalleryOverrides, GalleryType};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
    CreatedDate,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Thumbnail grid settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Edge length of a thumbnail cell.
    #[serde(
        default = "default_thumbnail_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_size: Option<f32>,

    /// Order of images when a directory is scanned.
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            thumbnail_size: default_thumbnail_size(),
            sort_order: SortOrder::default(),
        }
    }
}

impl DisplayConfig {
    /// Thumbnail size clamped to the accepted range.
    #[must_use]
    pub fn thumbnail_size(&self) -> f32 {
        self.thumbnail_size
            .unwrap_or(DEFAULT_THUMBNAIL_SIZE)
            .clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE)
    }
}

/// Gallery options as written in TOML. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GallerySection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap_around: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_gallery_title: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_image_description: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_images: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base_directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_image_directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large_image_directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_large_images: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_image_width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_image_height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_download: Option<bool>,
}

impl GallerySection {
    /// Converts to the typed override set.
    ///
    /// Out-of-range fractions are kept and logged; they are clamped when the
    /// overrides are merged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an unknown `gallery_type`.
    pub fn to_overrides(&self) -> Result<GalleryOverrides> {
        let gallery_type = self
            .gallery_type
            .as_deref()
            .map(str::parse::<GalleryType>)
            .transpose()
            .map_err(|err| Error::Config(err.to_string()))?;

        let overrides = GalleryOverrides {
            wrap_around: self.wrap_around,
            show_gallery_title: self.show_gallery_title,
            gallery_title: self.gallery_title.clone(),
            gallery_type,
            show_image_description: self.show_image_description,
            create_images: self.create_images,
            image_base_directory: self.image_base_directory.clone(),
            small_image_directory: self.small_image_directory.clone(),
            large_image_directory: self.large_image_directory.clone(),
            use_large_images: self.use_large_images,
            box_width: self.box_width,
            box_height: self.box_height,
            max_image_width: self.max_image_width,
            max_image_height: self.max_image_height,
            direct_download: self.direct_download,
        };
        for option in overrides.out_of_range_fractions() {
            tracing::warn!(option, "fraction outside 0..=1 will be clamped");
        }
        Ok(overrides)
    }
}

impl From<&GalleryOverrides> for GallerySection {
    fn from(overrides: &GalleryOverrides) -> Self {
        Self {
            wrap_around: overrides.wrap_around,
            show_gallery_title: overrides.show_gallery_title,
            gallery_title: overrides.gallery_title.clone(),
            gallery_type: overrides.gallery_type.map(|t| t.as_str().to_string()),
            show_image_description: overrides.show_image_description,
            create_images: overrides.create_images,
            image_base_directory: overrides.image_base_directory.clone(),
            small_image_directory: overrides.small_image_directory.clone(),
            large_image_directory: overrides.large_image_directory.clone(),
            use_large_images: overrides.use_large_images,
            box_width: overrides.box_width,
            box_height: overrides.box_height,
            max_image_width: overrides.max_image_width,
            max_image_height: overrides.max_image_height,
            direct_download: overrides.direct_download,
        }
    }
}

/// Parses a standalone TOML table of gallery options.
///
/// # Errors
///
/// Returns [`Error::Config`] on malformed TOML, unknown keys or an unknown
/// gallery type.
pub fn overrides_from_toml_str(content: &str) -> Result<GalleryOverrides> {
    let section: GallerySection = toml::from_str(content)?;
    section.to_overrides()
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default, skip_serializing_if = "is_empty_section")]
    pub gallery: GallerySection,
}

impl Config {
    /// Gallery overrides from the `[gallery]` section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an unknown `gallery_type`.
    pub fn gallery_overrides(&self) -> Result<GalleryOverrides> {
        self.gallery.to_overrides()
    }
}

fn is_empty_section(section: &GallerySection) -> bool {
    *section == GallerySection::default()
}

#[allow(clippy::unnecessary_wraps)]
fn default_thumbnail_size() -> Option<f32> {
    Some(DEFAULT_THUMBNAIL_SIZE)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "falling back to default settings");
            (Config::default(), Some("config-load-error".to_string()))
        }
    }
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or has an
/// invalid `[gallery]` section.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.gallery_overrides()?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            display: DisplayConfig {
                thumbnail_size: Some(200.0),
                sort_order: SortOrder::ModifiedDate,
            },
            gallery: GallerySection {
                wrap_around: Some(false),
                gallery_title: Some("Holidays".to_string()),
                ..GallerySection::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn unknown_gallery_key_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[gallery]\nwrap_arround = true\n").expect("failed to write");

        let err = load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn unknown_gallery_type_is_rejected() {
        let err = overrides_from_toml_str("gallery_type = \"carousel\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn overrides_from_toml_keeps_only_present_keys() {
        let overrides =
            overrides_from_toml_str("wrap_around = false\nbox_width = 0.5\n").expect("valid");
        assert_eq!(overrides.wrap_around, Some(false));
        assert_eq!(overrides.box_width, Some(0.5));
        assert_eq!(overrides.gallery_title, None);
    }

    #[test]
    fn section_round_trips_through_overrides() {
        let overrides = GalleryOverrides {
            gallery_type: Some(GalleryType::Standard),
            direct_download: Some(true),
            ..GalleryOverrides::default()
        };
        let section = GallerySection::from(&overrides);
        assert_eq!(section.gallery_type.as_deref(), Some("standard"));
        assert_eq!(section.to_overrides().expect("valid"), overrides);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[gallery\n").expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("config-load-error"));
    }

    #[test]
    fn thumbnail_size_is_clamped() {
        let display = DisplayConfig {
            thumbnail_size: Some(10_000.0),
            ..DisplayConfig::default()
        };
        assert!((display.thumbnail_size() - MAX_THUMBNAIL_SIZE).abs() < f32::EPSILON);
    }

    #[test]
    fn empty_gallery_section_is_not_written() {
        let content = toml::to_string_pretty(&Config::default()).expect("serializes");
        assert!(!content.contains("[gallery]"));
    }
}
