// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! This module follows the Elm-style "state down, messages up" pattern.
//!
//! - [`gallery`] - The lightbox gallery component (state, messages, view)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod gallery;
pub mod styles;
