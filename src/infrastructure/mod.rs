// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`surface_tree`]: in-memory element tree (implements [`SurfaceHost`])
//! - [`scroll`]: offset pinning for a scrollable (implements [`ScrollLock`])
//! - [`download`]: filesystem copy of image sources (implements [`Downloader`])
//!
//! [`SurfaceHost`]: crate::application::port::SurfaceHost
//! [`ScrollLock`]: crate::application::port::ScrollLock
//! [`Downloader`]: crate::application::port::Downloader

pub mod download;
pub mod scroll;
pub mod surface_tree;

pub use download::FsDownloader;
pub use scroll::PinnedScroll;
pub use surface_tree::{SurfaceNode, SurfaceTree};
