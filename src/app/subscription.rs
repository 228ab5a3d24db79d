// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard presses are routed to the gallery at document level; window
//! resizes keep the overlay box proportional to the window.

use super::Message;
use crate::ui::gallery::{self, events};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// How long a status line stays on screen.
pub const STATUS_DURATION: Duration = Duration::from_secs(4);

/// Creates the native event subscription.
///
/// Key presses captured by a focused widget are not forwarded.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match &event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(*size)),
        event::Event::Keyboard(keyboard_event) => match status {
            event::Status::Ignored => events::from_keyboard_event(keyboard_event)
                .map(|key| Message::Gallery(gallery::Message::Key(key))),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Dismisses the status line after [`STATUS_DURATION`] while one is shown.
pub fn create_status_subscription(has_status: bool) -> Subscription<Message> {
    if has_status {
        time::every(STATUS_DURATION).map(|_| Message::DismissStatus)
    } else {
        Subscription::none()
    }
}
