// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily in the bottom-right corner and dismiss
//! themselves after their duration, or when the user closes them.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, `Severity` and message text
//! - [`manager`] - the `Manager` store and the `Notifier` dispatcher trait
//! - [`timer`] - `Countdown`, the cancellable timer behind each toast
//! - [`toast`] - `Toasts` lifecycle state and the toast widget
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification, Notifier, Toasts};
//!
//! let mut manager = Manager::new();
//! let mut toasts = Toasts::default();
//!
//! let id = manager.add(Notification::success("notification-upload-success"));
//! toasts.sync(manager.active(), Instant::now());
//!
//! // On every tick:
//! toasts.tick(now, &mut manager);
//! ```

mod manager;
mod notification;
mod timer;
mod toast;

pub use manager::{Manager, Notifier};
pub use notification::{
    Notification, NotificationId, NotificationText, ParseSeverityError, Severity,
};
pub use timer::Countdown;
pub use toast::{Message as NotificationMessage, Phase, Toast, Toasts};
