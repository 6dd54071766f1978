// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting activity reports.
//!
//! Events are captured during usage, stored in a memory-bounded circular
//! buffer, and can be exported as a JSON report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticsCollector`]: Owns the buffer, hands out [`DiagnosticsHandle`]s
//! - [`DiagnosticEvent`]: Timestamped event
//!
//! # Privacy
//!
//! Warning and error messages are sanitized before they are stored: file
//! paths are replaced with `<path>`.

mod buffer;
mod collector;
mod events;
mod export;
mod report;
mod sanitizer;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    AppStateEvent, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, UserAction, WarningEvent,
};
pub use export::{generate_default_filename, ExportError};
pub use report::{DiagnosticReport, ReportMetadata, SerializableEvent};
pub use sanitizer::{sanitize_message, ErrorType, WarningType};
