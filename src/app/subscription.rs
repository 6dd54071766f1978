// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window events (file hover, drop, close) are routed to the shell;
//! the notification tick only runs while a toast countdown is pending.

use super::Message;
use crate::ui::notifications::NotificationMessage;
use crate::ui::upload;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Interval of the clock driving toast countdowns.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes window events. Keyboard and mouse events are left to the widgets.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::FileHovered(_)) => {
            Some(Message::Upload(upload::Message::DragEntered))
        }
        event::Event::Window(window::Event::FilesHoveredLeft) => {
            Some(Message::Upload(upload::Message::DragLeft))
        }
        event::Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    })
}

/// Creates the periodic tick for toast auto-dismiss.
pub fn create_tick_subscription(has_pending_toasts: bool) -> Subscription<Message> {
    if has_pending_toasts {
        time::every(TICK_INTERVAL).map(|now| Message::Notification(NotificationMessage::Tick(now)))
    } else {
        Subscription::none()
    }
}
