// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.
//!
//! This module defines the various types of events that can be captured
//! during application usage for diagnostic purposes.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::sanitizer::{ErrorType, WarningType};

/// User-initiated actions that can be captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Open the native file dialog.
    OpenFileDialog,

    /// Drop one or more files onto the window.
    DropFiles {
        /// Number of files in the drop.
        count: usize,
    },

    /// Start the transcode + upload pipeline.
    ProcessFile,

    /// Remove the current selection (cancels in-flight work).
    RemoveFile,

    /// Close a toast before its countdown elapsed.
    DismissNotification,
}

/// Application state changes worth correlating with failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AppStateEvent {
    /// The transcoder finished its one-time initialization.
    TranscoderReady,

    /// A file passed validation and became the selection.
    FileSelected {
        /// Declared media type (e.g. `audio/mpeg`).
        media_type: String,
        /// Input size in bytes.
        size_bytes: u64,
    },

    /// The local transcode stage succeeded.
    TranscodeCompleted {
        /// Size of the produced WAV in bytes.
        output_bytes: usize,
    },

    /// The upload endpoint accepted the file.
    UploadCompleted {
        /// HTTP status code returned by the endpoint.
        status: u16,
    },

    /// The user cancelled the pipeline.
    PipelineCancelled,

    /// The selection was cleared after an error.
    SelectionReset,
}

/// A non-critical issue, already sanitized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// A failed operation, already sanitized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    /// Creates a new diagnostic event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },

    AppState {
        state: AppStateEvent,
    },

    Warning {
        event: WarningEvent,
    },

    Error {
        event: ErrorEvent,
    },
}
