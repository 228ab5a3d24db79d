// SPDX-License-Identifier: MPL-2.0
//! Scroll lock port definition.
//!
//! While the overlay is open the page underneath must not scroll. The
//! gallery acquires the lock on `show()` and releases it on `hide()`.

/// A scroll position. Units are host-defined.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub x: f32,
    pub y: f32,
}

impl ScrollOffset {
    /// Creates a new offset.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Port for pinning page scrolling.
pub trait ScrollLock {
    /// Captures the current scroll offset and pins scrolling to it.
    fn acquire(&mut self);

    /// Restores normal scrolling.
    fn release(&mut self);

    /// Whether scrolling is currently pinned.
    fn is_locked(&self) -> bool;
}
