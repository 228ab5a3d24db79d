// SPDX-License-Identifier: MPL-2.0
//! Gallery newtypes.
//!
//! This module provides type-safe wrappers for gallery layout values,
//! ensuring they are always within valid ranges.

use std::fmt;
use std::str::FromStr;

// =============================================================================
// Fraction
// =============================================================================

/// A fraction of the available space, guaranteed to be within `0.0..=1.0`.
///
/// Used for the overlay box size and the maximum full-size image size, both
/// expressed relative to the surrounding area.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Fraction(f32);

impl Fraction {
    /// Full available space.
    pub const FULL: Fraction = Fraction(1.0);

    /// Creates a new fraction, clamping the value to the valid range.
    ///
    /// `NaN` collapses to zero.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns whether `value` would be altered by [`Fraction::new`].
    #[must_use]
    pub fn is_out_of_range(value: f32) -> bool {
        !(0.0..=1.0).contains(&value)
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Scales a length by this fraction.
    #[must_use]
    pub fn of(self, length: f32) -> f32 {
        length * self.0
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::FULL
    }
}

// =============================================================================
// GalleryType
// =============================================================================

/// Gallery layout variant.
///
/// Only the standard lightbox layout is implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryType {
    /// Thumbnail grid with a lightbox overlay.
    #[default]
    Standard,
}

impl GalleryType {
    /// Returns the identifier used in configuration files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            GalleryType::Standard => "standard",
        }
    }
}

impl fmt::Display for GalleryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown gallery type identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGalleryType(pub String);

impl fmt::Display for UnknownGalleryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown gallery type: {}", self.0)
    }
}

impl std::error::Error for UnknownGalleryType {}

impl FromStr for GalleryType {
    type Err = UnknownGalleryType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(GalleryType::Standard),
            other => Err(UnknownGalleryType(other.to_string())),
        }
    }
}
