// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for application-level settings.
//!
//! Gallery option defaults live next to the option set in
//! [`crate::domain::gallery::settings::defaults`]; this module holds what the
//! desktop shell needs on top of them.

// ==========================================================================
// Gallery Mount
// ==========================================================================

/// Container id used when a manifest does not name one.
pub const DEFAULT_CONTAINER_ID: &str = "gallery";

// ==========================================================================
// Thumbnail Grid
// ==========================================================================

/// Default edge length of a thumbnail cell (logical pixels).
pub const DEFAULT_THUMBNAIL_SIZE: f32 = 160.0;

/// Smallest accepted thumbnail size.
pub const MIN_THUMBNAIL_SIZE: f32 = 48.0;

/// Largest accepted thumbnail size.
pub const MAX_THUMBNAIL_SIZE: f32 = 512.0;

// ==========================================================================
// Window
// ==========================================================================

/// Initial window width.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1024.0;

/// Initial window height.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 768.0;

/// Minimum window width.
pub const MIN_WINDOW_WIDTH: f32 = 480.0;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!DEFAULT_CONTAINER_ID.is_empty());

    assert!(MIN_THUMBNAIL_SIZE > 0.0);
    assert!(MAX_THUMBNAIL_SIZE > MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE);

    assert!(MIN_WINDOW_WIDTH > 0.0);
    assert!(MIN_WINDOW_HEIGHT > 0.0);
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
};
