// SPDX-License-Identifier: MPL-2.0
//! Diagnostic report structures serialized to JSON.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DiagnosticEventKind;

/// Report header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    /// RFC 3339 time the report was generated.
    pub generated_at: String,
    pub app_version: String,
    /// RFC 3339 time the collector started.
    pub collection_started_at: String,
    pub collection_duration_ms: u64,
    pub event_count: usize,
    pub os: String,
    pub cpu_arch: String,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(
        collection_started_at: DateTime<Utc>,
        collection_duration_ms: u64,
        event_count: usize,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: collection_started_at.to_rfc3339(),
            collection_duration_ms,
            event_count,
            os: std::env::consts::OS.to_string(),
            cpu_arch: std::env::consts::ARCH.to_string(),
        }
    }
}

/// An event with its offset from collection start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(
        event_timestamp: Instant,
        collection_start: Instant,
        kind: DiagnosticEventKind,
    ) -> Self {
        let timestamp_ms = event_timestamp
            .saturating_duration_since(collection_start)
            .as_millis() as u64;
        Self { timestamp_ms, kind }
    }
}

/// Complete report written by the exporter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub events: Vec<SerializableEvent>,
}

impl DiagnosticReport {
    #[must_use]
    pub fn new(metadata: ReportMetadata, events: Vec<SerializableEvent>) -> Self {
        Self { metadata, events }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{AppStateEvent, DiagnosticEventKind};
    use std::time::Duration;

    #[test]
    fn serializable_event_uses_relative_timestamp() {
        let start = Instant::now();
        let later = start + Duration::from_millis(250);
        let event = SerializableEvent::new(
            later,
            start,
            DiagnosticEventKind::AppState {
                state: AppStateEvent::PipelineCancelled,
            },
        );
        assert_eq!(event.timestamp_ms, 250);
    }

    #[test]
    fn event_before_start_saturates_to_zero() {
        let start = Instant::now() + Duration::from_millis(10);
        let event = SerializableEvent::new(
            Instant::now(),
            start,
            DiagnosticEventKind::AppState {
                state: AppStateEvent::TranscoderReady,
            },
        );
        assert_eq!(event.timestamp_ms, 0);
    }

    #[test]
    fn report_flattens_event_kind() {
        let metadata = ReportMetadata::new(Utc::now(), 10, 1);
        let report = DiagnosticReport::new(
            metadata,
            vec![SerializableEvent {
                timestamp_ms: 5,
                kind: DiagnosticEventKind::AppState {
                    state: AppStateEvent::UploadCompleted { status: 200 },
                },
            }],
        );
        let json = serde_json::to_string(&report).expect("serialize");
        assert!(json.contains("\"timestamp_ms\":5"));
        assert!(json.contains("\"type\":\"app_state\""));
        assert!(json.contains("\"status\":200"));
    }
}
