// SPDX-License-Identifier: MPL-2.0
//! Message sanitization and warning/error type definitions.
//!
//! This module provides:
//! - Type enums for categorizing warnings and errors
//! - Message sanitization to remove sensitive data (file paths)

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// =============================================================================
// Warning and Error Type Enums
// =============================================================================

/// Categories of warnings that can occur in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// The dropped or selected file is not audio, or several were dropped.
    InvalidSelection,
    /// A configuration issue was detected.
    ConfigurationIssue,
    /// Other warning type not covered by specific categories.
    Other,
}

/// Categories of errors that can occur in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Input/output error (file read/write failures).
    IoError,
    /// Transcoder initialization or transcoding error.
    TranscodeError,
    /// Upload transport error or server rejection.
    NetworkError,
    /// Other error type not covered by specific categories.
    Other,
}

// =============================================================================
// Message Sanitization
// =============================================================================

static PATH_PATTERNS: LazyLock<Regex> = LazyLock::new(|| {
    // Path continues until whitespace or common delimiters (quotes, parens, brackets)
    Regex::new(concat!(
        r#"("#,
        r#"/home/[^\s"'()\[\]]+"#,       // Linux home
        r#"|/Users/[^\s"'()\[\]]+"#,     // macOS home
        r#"|/tmp/[^\s"'()\[\]]+"#,       // Temp directory
        r#"|/var/[^\s"'()\[\]]+"#,       // Variable data
        r#"|/media/[^\s"'()\[\]]+"#,     // Removable media
        r#"|/mnt/[^\s"'()\[\]]+"#,       // Mount points
        r#"|~/[^\s"'()\[\]]+"#,          // Home shortcut (all platforms)
        r#"|[A-Za-z]:\\[^\s"'()\[\]]+"#, // Windows drive paths (C:\, D:\, etc.)
        r#"|\\\\[^\s"'()\[\]]+"#,        // Windows UNC paths (\\server\share)
        r#")"#,
    ))
    .expect("path regex should compile")
});

/// Sanitizes a message by replacing file paths with a `<path>` placeholder.
///
/// # Examples
///
/// ```
/// use wavedrop::diagnostics::sanitize_message;
///
/// let msg = "Failed to open /home/user/music/track.flac";
/// assert_eq!(sanitize_message(msg), "Failed to open <path>");
///
/// let msg = "Server error: 500";
/// assert_eq!(sanitize_message(msg), "Server error: 500");
/// ```
#[must_use]
pub fn sanitize_message(message: &str) -> String {
    PATH_PATTERNS.replace_all(message, "<path>").into_owned()
}
