// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery types ([`GalleryConfig`](gallery::GalleryConfig),
//!   [`Catalog`](gallery::Catalog), [`DisplayState`](gallery::DisplayState),
//!   [`Fraction`](gallery::Fraction))
//! - [`input`]: Toolkit-free input vocabulary ([`KeyPress`](input::KeyPress),
//!   [`Command`](input::Command), [`Control`](input::Control))

pub mod gallery;
pub mod input;
