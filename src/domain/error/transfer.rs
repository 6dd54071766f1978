// SPDX-License-Identifier: MPL-2.0
//! Errors of the two pipeline stages: transcoding and uploading.

use std::fmt;

/// Specific failures of the local transcoding stage.
/// Each maps to a user-facing, localized message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscodeError {
    /// The transcoding library could not be initialized.
    InitializationFailed(String),

    /// The input has no audio stream.
    NoAudioStream,

    /// Opening or decoding the input failed.
    DecodingFailed(String),

    /// Resampling or writing the WAV container failed.
    EncodingFailed(String),

    /// The source file could not be read.
    Io(String),

    /// The cancellation token fired mid-transcode.
    Cancelled,
}

impl TranscodeError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            TranscodeError::InitializationFailed(_) => "error-transcoder-init",
            TranscodeError::NoAudioStream => "error-transcode-no-audio",
            TranscodeError::DecodingFailed(_)
            | TranscodeError::EncodingFailed(_)
            | TranscodeError::Io(_) => "error-transcode-failed",
            TranscodeError::Cancelled => "notification-upload-cancelled",
        }
    }
}

impl fmt::Display for TranscodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscodeError::InitializationFailed(msg) => {
                write!(f, "Transcoder initialization failed: {msg}")
            }
            TranscodeError::NoAudioStream => write!(f, "No audio stream found"),
            TranscodeError::DecodingFailed(msg) => write!(f, "Decoding failed: {msg}"),
            TranscodeError::EncodingFailed(msg) => write!(f, "Encoding failed: {msg}"),
            TranscodeError::Io(msg) => write!(f, "I/O error: {msg}"),
            TranscodeError::Cancelled => write!(f, "Transcoding cancelled"),
        }
    }
}

impl std::error::Error for TranscodeError {}

/// Failures of the network upload stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// The server answered with a non-2xx status.
    Rejected { status: u16 },

    /// The request did not complete in time.
    Timeout,

    /// Connection, TLS or protocol failure.
    Transport(String),

    /// The request could not be built (bad endpoint, bad form part).
    InvalidRequest(String),
}

impl UploadError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            UploadError::Rejected { .. } => "error-upload-rejected",
            UploadError::Timeout => "error-upload-timeout",
            UploadError::Transport(_) => "error-upload-transport",
            UploadError::InvalidRequest(_) => "error-upload-invalid-request",
        }
    }
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::Rejected { status } => write!(f, "Server error: {status}"),
            UploadError::Timeout => write!(f, "Upload timed out"),
            UploadError::Transport(msg) => write!(f, "Upload failed: {msg}"),
            UploadError::InvalidRequest(msg) => write!(f, "Invalid upload request: {msg}"),
        }
    }
}

impl std::error::Error for UploadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_display_carries_status() {
        let err = UploadError::Rejected { status: 500 };
        assert_eq!(err.to_string(), "Server error: 500");
    }

    #[test]
    fn transcode_errors_share_failure_key_except_init_and_cancel() {
        assert_eq!(
            TranscodeError::DecodingFailed("x".into()).i18n_key(),
            TranscodeError::EncodingFailed("y".into()).i18n_key()
        );
        assert_ne!(
            TranscodeError::InitializationFailed("z".into()).i18n_key(),
            TranscodeError::DecodingFailed("x".into()).i18n_key()
        );
        assert_ne!(
            TranscodeError::Cancelled.i18n_key(),
            TranscodeError::DecodingFailed("x".into()).i18n_key()
        );
    }

    #[test]
    fn upload_error_keys_are_distinct() {
        let keys = [
            UploadError::Rejected { status: 400 }.i18n_key(),
            UploadError::Timeout.i18n_key(),
            UploadError::Transport(String::new()).i18n_key(),
            UploadError::InvalidRequest(String::new()).i18n_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
