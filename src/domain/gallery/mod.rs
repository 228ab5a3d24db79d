// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types: configuration, catalog and display state.

pub mod catalog;
pub mod display;
pub mod newtypes;
pub mod settings;

pub use catalog::{Catalog, ImageEntry};
pub use display::{step_index, Direction, DisplayState};
pub use newtypes::{Fraction, GalleryType};
pub use settings::{GalleryConfig, GalleryOverrides};
