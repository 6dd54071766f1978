// SPDX-License-Identifier: MPL-2.0
//! Notification store and the dispatcher contract.
//!
//! The `Manager` exclusively owns the active set of notifications, kept in
//! insertion order. Everything else adds and removes notifications through a
//! [`Notifier`] handle passed in explicitly.

use super::notification::{Notification, NotificationId, Severity};
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorType, WarningEvent, WarningType};
use crate::domain::notification::DisplayDuration;

/// Dispatcher contract: the only two mutations of the notification store.
pub trait Notifier {
    /// Appends `notification` to the end of the active set and returns the
    /// fresh id it was given.
    fn add(&mut self, notification: Notification) -> NotificationId;

    /// Removes the notification with `id` if present. Absent ids are ignored.
    fn remove(&mut self, id: NotificationId);

    /// Adds a plain-text notification, the three-argument form of `add`.
    ///
    /// Pass `Severity::default()` (info) and `None` (the store's default
    /// duration, 3000 ms unless configured) for the usual toast.
    fn notify(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration: Option<DisplayDuration>,
    ) -> NotificationId
    where
        Self: Sized,
    {
        let mut notification = Notification::plain(severity, message);
        if let Some(duration) = duration {
            notification = notification.with_duration(duration);
        }
        self.add(notification)
    }
}

/// Holds the active notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Active notifications, oldest first.
    active: Vec<Notification>,
    /// Duration applied to notifications that did not set one.
    default_duration: DisplayDuration,
    /// Optional diagnostics handle for logging warnings/errors.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager whose notifications default to `duration`.
    #[must_use]
    pub fn with_default_duration(duration: DisplayDuration) -> Self {
        Self {
            default_duration: duration,
            ..Self::default()
        }
    }

    /// Sets the diagnostics handle for logging warnings and errors.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Returns the active notifications in display order.
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.active.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Removes every notification.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    fn log(&self, notification: &Notification) {
        let Some(handle) = &self.diagnostics else {
            return;
        };
        match notification.severity() {
            Severity::Warning => {
                let warning_type = notification.warning_type().unwrap_or(WarningType::Other);
                handle.log_warning(WarningEvent::new(warning_type, notification.text().raw()));
            }
            Severity::Error => {
                let error_type = notification.error_type().unwrap_or(ErrorType::Other);
                handle.log_error(ErrorEvent::new(error_type, notification.text().raw()));
            }
            Severity::Success | Severity::Info => {}
        }
    }
}

impl Notifier for Manager {
    /// Warnings and errors are also logged to the diagnostics system.
    fn add(&mut self, mut notification: Notification) -> NotificationId {
        self.log(&notification);
        notification.fill_duration(self.default_duration);
        let id = notification.assign_id();
        self.active.push(notification);
        id
    }

    fn remove(&mut self, id: NotificationId) {
        self.active.retain(|n| n.id() != id);
    }
}
