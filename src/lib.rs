// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a lightbox image gallery built with the Iced GUI toolkit.
//!
//! The gallery widget itself lives in [`application::gallery`] and only talks
//! to ports, so it runs against the in-memory [`infrastructure::SurfaceTree`]
//! as well as inside the desktop frontend in [`app`].

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod directory_scanner;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod manifest;
pub mod ui;
