// SPDX-License-Identifier: MPL-2.0
//! Display state of the lightbox: overlay visibility and current index.

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Navigate to the next image.
    Next,
    /// Navigate to the previous image.
    Previous,
}

/// Computes the index reached by one step from `current`.
///
/// At either end the index wraps to the opposite end when `wrap_around` is
/// set and stays in place otherwise. Returns `None` when `count` is zero.
#[must_use]
pub fn step_index(
    current: usize,
    count: usize,
    direction: Direction,
    wrap_around: bool,
) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    let current = current.min(last);

    let next = match direction {
        Direction::Next if current == last => {
            if wrap_around {
                0
            } else {
                last
            }
        }
        Direction::Next => current + 1,
        Direction::Previous if current == 0 => {
            if wrap_around {
                last
            } else {
                0
            }
        }
        Direction::Previous => current - 1,
    };
    Some(next)
}

/// Overlay visibility and current position within a fixed-size catalog.
///
/// `current_index < count` always holds when `count > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayState {
    visible: bool,
    current_index: usize,
    count: usize,
}

impl DisplayState {
    /// Creates a hidden state positioned on the first image.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            visible: false,
            current_index: 0,
            count,
        }
    }

    /// Whether the overlay is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Index of the current image (0 for an empty catalog).
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Index of the current image, or `None` for an empty catalog.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        (self.count > 0).then_some(self.current_index)
    }

    /// Number of images navigated over.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Checks if there is nothing to navigate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Switches to shown. Returns `false` if already shown.
    pub fn show(&mut self) -> bool {
        if self.visible {
            return false;
        }
        self.visible = true;
        true
    }

    /// Switches to hidden. Returns `false` if already hidden.
    pub fn hide(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    /// Moves one step in `direction`. Returns the new index, or `None` when
    /// the catalog is empty.
    pub fn step(&mut self, direction: Direction, wrap_around: bool) -> Option<usize> {
        let next = step_index(self.current_index, self.count, direction, wrap_around)?;
        self.current_index = next;
        Some(next)
    }

    /// Jumps to `index`. Returns `false` and leaves the state untouched when
    /// `index` is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.count {
            return false;
        }
        self.current_index = index;
        true
    }

    /// Whether the current image is the first one.
    #[must_use]
    pub fn is_at_first(&self) -> bool {
        self.count > 0 && self.current_index == 0
    }

    /// Whether the current image is the last one.
    #[must_use]
    pub fn is_at_last(&self) -> bool {
        self.count > 0 && self.current_index == self.count - 1
    }
}
