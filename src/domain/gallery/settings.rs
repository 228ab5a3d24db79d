// SPDX-License-Identifier: MPL-2.0
//! Gallery configuration and override merging.
//!
//! [`GalleryConfig`] is the complete, immutable option set a gallery is built
//! with. [`GalleryOverrides`] is the partial set a caller supplies; merging
//! replaces each default whose override is present.

use super::newtypes::{Fraction, GalleryType};

/// Default option values.
pub mod defaults {
    /// Wrap from the last image to the first (and back).
    pub const WRAP_AROUND: bool = true;
    /// Show the gallery title above the overlay.
    pub const SHOW_GALLERY_TITLE: bool = true;
    /// Title shown when none is configured.
    pub const GALLERY_TITLE: &str = "Gallery";
    /// Show the caption of the current image.
    pub const SHOW_IMAGE_DESCRIPTION: bool = true;
    /// Create thumbnails from the catalog instead of adopting existing images.
    pub const CREATE_IMAGES: bool = true;
    /// Directory prefix of every image reference.
    pub const IMAGE_BASE_DIRECTORY: &str = "assets/images/";
    /// Sub-directory of the small variants.
    pub const SMALL_IMAGE_DIRECTORY: &str = "small/";
    /// Sub-directory of the large variants.
    pub const LARGE_IMAGE_DIRECTORY: &str = "large/";
    /// Use the large variant for full-size surfaces.
    pub const USE_LARGE_IMAGES: bool = true;
    /// Overlay box width relative to the viewport.
    pub const BOX_WIDTH: f32 = 0.8;
    /// Overlay box height relative to the viewport.
    pub const BOX_HEIGHT: f32 = 0.7;
    /// Maximum full-size image width relative to the overlay box.
    pub const MAX_IMAGE_WIDTH: f32 = 0.9;
    /// Maximum full-size image height relative to the overlay box.
    pub const MAX_IMAGE_HEIGHT: f32 = 0.8;
    /// Offer a download control for the current image.
    pub const DIRECT_DOWNLOAD: bool = false;
}

/// Complete gallery option set.
///
/// Built once from defaults plus overrides and never mutated afterwards.
// Allow excessive bools: each flag is an independent user-facing option.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    pub wrap_around: bool,
    pub show_gallery_title: bool,
    pub gallery_title: String,
    pub gallery_type: GalleryType,
    pub show_image_description: bool,
    pub create_images: bool,
    pub image_base_directory: String,
    pub small_image_directory: String,
    pub large_image_directory: String,
    pub use_large_images: bool,
    pub box_width: Fraction,
    pub box_height: Fraction,
    pub max_image_width: Fraction,
    pub max_image_height: Fraction,
    pub direct_download: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            wrap_around: defaults::WRAP_AROUND,
            show_gallery_title: defaults::SHOW_GALLERY_TITLE,
            gallery_title: defaults::GALLERY_TITLE.to_string(),
            gallery_type: GalleryType::default(),
            show_image_description: defaults::SHOW_IMAGE_DESCRIPTION,
            create_images: defaults::CREATE_IMAGES,
            image_base_directory: defaults::IMAGE_BASE_DIRECTORY.to_string(),
            small_image_directory: defaults::SMALL_IMAGE_DIRECTORY.to_string(),
            large_image_directory: defaults::LARGE_IMAGE_DIRECTORY.to_string(),
            use_large_images: defaults::USE_LARGE_IMAGES,
            box_width: Fraction::new(defaults::BOX_WIDTH),
            box_height: Fraction::new(defaults::BOX_HEIGHT),
            max_image_width: Fraction::new(defaults::MAX_IMAGE_WIDTH),
            max_image_height: Fraction::new(defaults::MAX_IMAGE_HEIGHT),
            direct_download: defaults::DIRECT_DOWNLOAD,
        }
    }
}

impl GalleryConfig {
    /// Builds a config from the defaults with `overrides` applied.
    #[must_use]
    pub fn from_overrides(overrides: &GalleryOverrides) -> Self {
        Self::default().merge(overrides)
    }

    /// Replaces every option that `overrides` sets.
    #[must_use]
    pub fn merge(mut self, overrides: &GalleryOverrides) -> Self {
        fn apply<T: Clone>(target: &mut T, value: &Option<T>) {
            if let Some(value) = value {
                *target = value.clone();
            }
        }

        apply(&mut self.wrap_around, &overrides.wrap_around);
        apply(&mut self.show_gallery_title, &overrides.show_gallery_title);
        apply(&mut self.gallery_title, &overrides.gallery_title);
        apply(&mut self.gallery_type, &overrides.gallery_type);
        apply(
            &mut self.show_image_description,
            &overrides.show_image_description,
        );
        apply(&mut self.create_images, &overrides.create_images);
        apply(
            &mut self.image_base_directory,
            &overrides.image_base_directory,
        );
        apply(
            &mut self.small_image_directory,
            &overrides.small_image_directory,
        );
        apply(
            &mut self.large_image_directory,
            &overrides.large_image_directory,
        );
        apply(&mut self.use_large_images, &overrides.use_large_images);
        apply(&mut self.direct_download, &overrides.direct_download);

        let fraction = |value: Option<f32>| value.map(Fraction::new);
        apply(&mut self.box_width, &fraction(overrides.box_width));
        apply(&mut self.box_height, &fraction(overrides.box_height));
        apply(&mut self.max_image_width, &fraction(overrides.max_image_width));
        apply(
            &mut self.max_image_height,
            &fraction(overrides.max_image_height),
        );

        self
    }

    /// Source of the thumbnail for `reference`: base + small + reference.
    #[must_use]
    pub fn thumbnail_source(&self, reference: &str) -> String {
        format!(
            "{}{}{}",
            self.image_base_directory, self.small_image_directory, reference
        )
    }

    /// Source of the full-size surface for `reference`.
    ///
    /// Uses the large variant when `use_large_images` is set, the small one
    /// otherwise.
    #[must_use]
    pub fn full_source(&self, reference: &str) -> String {
        let variant = if self.use_large_images {
            &self.large_image_directory
        } else {
            &self.small_image_directory
        };
        format!("{}{}{}", self.image_base_directory, variant, reference)
    }
}

/// Partial option set; every `Some` field replaces the default on merge.
///
/// Fraction options are kept raw here so callers can report out-of-range
/// values before they are clamped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryOverrides {
    pub wrap_around: Option<bool>,
    pub show_gallery_title: Option<bool>,
    pub gallery_title: Option<String>,
    pub gallery_type: Option<GalleryType>,
    pub show_image_description: Option<bool>,
    pub create_images: Option<bool>,
    pub image_base_directory: Option<String>,
    pub small_image_directory: Option<String>,
    pub large_image_directory: Option<String>,
    pub use_large_images: Option<bool>,
    pub box_width: Option<f32>,
    pub box_height: Option<f32>,
    pub max_image_width: Option<f32>,
    pub max_image_height: Option<f32>,
    pub direct_download: Option<bool>,
}

impl GalleryOverrides {
    /// Layers `top` over `self`: options set in `top` win.
    #[must_use]
    pub fn layered(self, top: GalleryOverrides) -> Self {
        Self {
            wrap_around: top.wrap_around.or(self.wrap_around),
            show_gallery_title: top.show_gallery_title.or(self.show_gallery_title),
            gallery_title: top.gallery_title.or(self.gallery_title),
            gallery_type: top.gallery_type.or(self.gallery_type),
            show_image_description: top
                .show_image_description
                .or(self.show_image_description),
            create_images: top.create_images.or(self.create_images),
            image_base_directory: top.image_base_directory.or(self.image_base_directory),
            small_image_directory: top
                .small_image_directory
                .or(self.small_image_directory),
            large_image_directory: top
                .large_image_directory
                .or(self.large_image_directory),
            use_large_images: top.use_large_images.or(self.use_large_images),
            box_width: top.box_width.or(self.box_width),
            box_height: top.box_height.or(self.box_height),
            max_image_width: top.max_image_width.or(self.max_image_width),
            max_image_height: top.max_image_height.or(self.max_image_height),
            direct_download: top.direct_download.or(self.direct_download),
        }
    }

    /// Names of fraction options whose value lies outside `0.0..=1.0`.
    #[must_use]
    pub fn out_of_range_fractions(&self) -> Vec<&'static str> {
        [
            ("box_width", self.box_width),
            ("box_height", self.box_height),
            ("max_image_width", self.max_image_width),
            ("max_image_height", self.max_image_height),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_some_and(Fraction::is_out_of_range))
        .map(|(name, _)| name)
        .collect()
    }
}
