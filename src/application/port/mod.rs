// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain and port types, ensuring the gallery widget
//! remains independent of any UI toolkit.
//!
//! # Available Ports
//!
//! - [`surface`]: The retained element tree the gallery renders into
//! - [`scroll`]: Page scroll pinning while the overlay is open
//! - [`download`]: Saving the currently displayed full-size image
//!
//! # Design Notes
//!
//! - No toolkit handles cross these traits (no Iced widgets, no window ids)
//! - Element mutations on valid ids are infallible; lookups return `Option`
//! - Operations that touch the outside world return `Result`

pub mod download;
pub mod scroll;
pub mod surface;

// Re-export main types for convenience
pub use download::{DownloadRequest, Downloader};
pub use scroll::{ScrollLock, ScrollOffset};
pub use surface::{DiscoveredImage, ElementSpec, SurfaceHost, SurfaceId, SurfaceRole};
