// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::diagnostics::{ErrorType, WarningType};
use crate::domain::notification::DisplayDuration;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a notification.
///
/// Ids come from a process-wide counter and are never reused. The store hands
/// out the id a notification is known by when it is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level. Affects presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a severity name is not one of `info`, `success`,
/// `warning` or `error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown severity '{}' (expected info, success, warning or error)",
            self.0
        )
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Parses a severity name, case-insensitively. Unknown names are rejected
    /// rather than mapped to a default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "success" => Ok(Severity::Success),
            "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

/// The message of a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationText {
    /// Literal text shown as-is. May be empty.
    Plain(String),
    /// An i18n key resolved at render time, with interpolation arguments.
    Localized {
        key: String,
        args: Vec<(String, String)>,
    },
}

impl NotificationText {
    /// Resolves the text to the string displayed to the user.
    #[must_use]
    pub fn resolve(&self, i18n: &I18n) -> String {
        match self {
            NotificationText::Plain(text) => text.clone(),
            NotificationText::Localized { key, args } if args.is_empty() => i18n.tr(key),
            NotificationText::Localized { key, args } => {
                let args: Vec<(&str, &str)> = args
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str()))
                    .collect();
                i18n.tr_with_args(key, &args)
            }
        }
    }

    /// Unresolved form used for diagnostics: the literal text or the key.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            NotificationText::Plain(text) => text,
            NotificationText::Localized { key, .. } => key,
        }
    }
}

/// A notification to be displayed to the user.
///
/// A freshly built value carries a provisional id. [`super::Manager`] replaces
/// it on `add`, so two clones added separately never share an id.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    text: NotificationText,
    /// `None` until the store applies its default.
    duration: Option<DisplayDuration>,
    warning_type: Option<WarningType>,
    error_type: Option<ErrorType>,
}

impl Notification {
    /// Creates a new notification with the given severity and message key.
    ///
    /// The `message_key` should be a valid i18n key that will be resolved
    /// at render time.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self::with_text(
            severity,
            NotificationText::Localized {
                key: message_key.into(),
                args: Vec::new(),
            },
        )
    }

    /// Creates a notification showing `message` verbatim.
    pub fn plain(severity: Severity, message: impl Into<String>) -> Self {
        Self::with_text(severity, NotificationText::Plain(message.into()))
    }

    fn with_text(severity: Severity, text: NotificationText) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            text,
            duration: None,
            warning_type: None,
            error_type: None,
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds an argument for message interpolation.
    ///
    /// Ignored for plain-text notifications.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let NotificationText::Localized { args, .. } = &mut self.text {
            args.push((key.into(), value.into()));
        }
        self
    }

    /// Sets how long the toast stays visible, overriding the store default.
    #[must_use]
    pub fn with_duration(mut self, duration: DisplayDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Sets the diagnostics category logged for a warning.
    #[must_use]
    pub fn with_warning_type(mut self, warning_type: WarningType) -> Self {
        self.warning_type = Some(warning_type);
        self
    }

    /// Sets the diagnostics category logged for an error.
    #[must_use]
    pub fn with_error_type(mut self, error_type: ErrorType) -> Self {
        self.error_type = Some(error_type);
        self
    }

    /// Replaces the id with one drawn by the store.
    pub(super) fn assign_id(&mut self) -> NotificationId {
        self.id = NotificationId::new();
        self.id
    }

    /// Applies `duration` if none was set explicitly.
    pub(super) fn fill_duration(&mut self, duration: DisplayDuration) {
        self.duration.get_or_insert(duration);
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn text(&self) -> &NotificationText {
        &self.text
    }

    /// Display duration, or the global default when none was set.
    #[must_use]
    pub fn duration(&self) -> DisplayDuration {
        self.duration.unwrap_or_default()
    }

    #[must_use]
    pub fn warning_type(&self) -> Option<WarningType> {
        self.warning_type
    }

    #[must_use]
    pub fn error_type(&self) -> Option<ErrorType> {
        self.error_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_id_draws_a_new_id() {
        let mut n = Notification::success("test");
        let provisional = n.id();
        let assigned = n.assign_id();
        assert_ne!(provisional, assigned);
        assert_eq!(n.id(), assigned);
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn default_severity_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn severity_parses_known_names_case_insensitively() {
        assert_eq!("info".parse::<Severity>(), Ok(Severity::Info));
        assert_eq!("Success".parse::<Severity>(), Ok(Severity::Success));
        assert_eq!(" WARNING ".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("error".parse::<Severity>(), Ok(Severity::Error));
    }

    #[test]
    fn severity_rejects_unknown_names() {
        let err = "fatal".parse::<Severity>().unwrap_err();
        assert!(err.to_string().contains("fatal"));
        assert!("".parse::<Severity>().is_err());
    }

    #[test]
    fn severity_display_round_trips_through_from_str() {
        for severity in [
            Severity::Info,
            Severity::Success,
            Severity::Warning,
            Severity::Error,
        ] {
            assert_eq!(severity.to_string().parse::<Severity>(), Ok(severity));
        }
    }

    #[test]
    fn duration_defaults_to_three_seconds() {
        let n = Notification::info("key");
        assert_eq!(n.duration().as_millis(), 3000);
    }

    #[test]
    fn explicit_duration_survives_fill() {
        let mut n = Notification::info("key").with_duration(DisplayDuration::from_millis(100));
        n.fill_duration(DisplayDuration::from_millis(5000));
        assert_eq!(n.duration().as_millis(), 100);
    }

    #[test]
    fn with_arg_is_ignored_for_plain_text() {
        let n = Notification::plain(Severity::Info, "").with_arg("a", "b");
        assert_eq!(n.text(), &NotificationText::Plain(String::new()));
    }

    #[test]
    fn localized_text_resolves_with_args() {
        let i18n = I18n::new(Some("en-US".to_string()), &crate::config::Config::default());
        let n = Notification::error("error-upload-rejected").with_arg("status", "500");
        assert_eq!(n.text().resolve(&i18n), "Server error: 500");
        assert_eq!(n.text().raw(), "error-upload-rejected");
    }
}
