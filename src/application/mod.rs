// SPDX-License-Identifier: MPL-2.0
//! Application layer - The gallery widget and the ports it drives.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`gallery`]: The gallery widget state machine, element builder and cache
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```
//! use iced_gallery::application::gallery::GalleryWidget;
//! use iced_gallery::domain::gallery::{GalleryConfig, ImageEntry};
//! use iced_gallery::infrastructure::{PinnedScroll, SurfaceTree};
//!
//! let mut tree = SurfaceTree::new("localhost");
//! tree.insert_container("gallery");
//!
//! let images = vec![ImageEntry::new("a.jpg", "A"), ImageEntry::new("b.jpg", "B")];
//! let mut widget = GalleryWidget::new(GalleryConfig::default(), images, PinnedScroll::default());
//! widget.attach(&mut tree, "gallery").expect("container exists");
//!
//! widget.select_index(&mut tree, 1);
//! assert!(widget.display().is_visible());
//! assert_eq!(widget.display().current_index(), 1);
//! ```

pub mod gallery;
pub mod port;
