// SPDX-License-Identifier: MPL-2.0
//! Scroll lock that pins a scrollable to a captured offset.
//!
//! The frontend feeds every scroll event to [`PinnedScroll::observe`]. While
//! unlocked the offset is only tracked; while locked, any movement away from
//! the offset captured by `acquire` yields the offset to snap back to.

use crate::application::port::{ScrollLock, ScrollOffset};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PinnedScroll {
    current: ScrollOffset,
    pinned: Option<ScrollOffset>,
}

impl PinnedScroll {
    /// Records a scroll event. Returns the offset to restore when scrolling
    /// is pinned and the event moved away from it.
    pub fn observe(&mut self, offset: ScrollOffset) -> Option<ScrollOffset> {
        match self.pinned {
            Some(pinned) if pinned != offset => Some(pinned),
            Some(_) => None,
            None => {
                self.current = offset;
                None
            }
        }
    }

    /// The offset scrolling is pinned to, if locked.
    #[must_use]
    pub fn pinned(&self) -> Option<ScrollOffset> {
        self.pinned
    }

    /// Last offset observed while unlocked.
    #[must_use]
    pub fn current(&self) -> ScrollOffset {
        self.current
    }
}

impl ScrollLock for PinnedScroll {
    fn acquire(&mut self) {
        self.pinned = Some(self.current);
        tracing::debug!(x = self.current.x, y = self.current.y, "scroll pinned");
    }

    fn release(&mut self) {
        if self.pinned.take().is_some() {
            tracing::debug!("scroll released");
        }
    }

    fn is_locked(&self) -> bool {
        self.pinned.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlocked_scroll_is_tracked_not_restored() {
        let mut lock = PinnedScroll::default();
        assert_eq!(lock.observe(ScrollOffset::new(0.0, 0.4)), None);
        assert_eq!(lock.current(), ScrollOffset::new(0.0, 0.4));
    }

    #[test]
    fn locked_scroll_restores_captured_offset() {
        let mut lock = PinnedScroll::default();
        lock.observe(ScrollOffset::new(0.0, 0.25));
        lock.acquire();

        assert_eq!(
            lock.observe(ScrollOffset::new(0.0, 0.6)),
            Some(ScrollOffset::new(0.0, 0.25))
        );
        assert_eq!(lock.observe(ScrollOffset::new(0.0, 0.25)), None);
        assert_eq!(lock.current(), ScrollOffset::new(0.0, 0.25));
    }

    #[test]
    fn release_unpins() {
        let mut lock = PinnedScroll::default();
        lock.acquire();
        assert!(lock.is_locked());

        lock.release();

        assert!(!lock.is_locked());
        assert_eq!(lock.observe(ScrollOffset::new(0.0, 1.0)), None);
    }
}
