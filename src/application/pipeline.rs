// SPDX-License-Identifier: MPL-2.0
//! Transcode-then-upload pipeline.
//!
//! Both stages share one [`CancellationToken`]. The transcode runs on a
//! blocking thread and observes the token between packets; the upload future
//! is raced against the token and dropped when it fires, which aborts the
//! request.

use super::port::{AudioTranscoder, AudioUploader};
use crate::domain::audio::{SelectedFile, TargetFormat};
use crate::domain::error::{TranscodeError, UploadError};
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Result of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOutcome {
    /// Size of the uploaded WAV in bytes.
    pub output_bytes: usize,
    /// HTTP status returned by the endpoint.
    pub status: u16,
}

/// Why a run did not complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    Transcode(TranscodeError),
    Upload(UploadError),
    /// The token fired. Not a failure from the user's point of view.
    Cancelled,
}

impl PipelineError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PipelineError::Transcode(e) => e.i18n_key(),
            PipelineError::Upload(e) => e.i18n_key(),
            PipelineError::Cancelled => "notification-upload-cancelled",
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, PipelineError::Cancelled)
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Transcode(e) => write!(f, "{e}"),
            PipelineError::Upload(e) => write!(f, "{e}"),
            PipelineError::Cancelled => write!(f, "Cancelled by user"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<TranscodeError> for PipelineError {
    fn from(err: TranscodeError) -> Self {
        match err {
            TranscodeError::Cancelled => PipelineError::Cancelled,
            other => PipelineError::Transcode(other),
        }
    }
}

impl From<UploadError> for PipelineError {
    fn from(err: UploadError) -> Self {
        PipelineError::Upload(err)
    }
}

/// Shared handles to the two collaborators plus the output format.
pub struct Pipeline<T, U> {
    transcoder: Arc<T>,
    uploader: Arc<U>,
    target: TargetFormat,
}

impl<T, U> Clone for Pipeline<T, U> {
    fn clone(&self) -> Self {
        Self {
            transcoder: Arc::clone(&self.transcoder),
            uploader: Arc::clone(&self.uploader),
            target: self.target,
        }
    }
}

impl<T, U> fmt::Debug for Pipeline<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

impl<T, U> Pipeline<T, U>
where
    T: AudioTranscoder + 'static,
    U: AudioUploader + 'static,
{
    #[must_use]
    pub fn new(transcoder: T, uploader: U) -> Self {
        Self {
            transcoder: Arc::new(transcoder),
            uploader: Arc::new(uploader),
            target: TargetFormat::SPEECH,
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: TargetFormat) -> Self {
        self.target = target;
        self
    }

    /// Initializes the transcoder on a blocking thread.
    ///
    /// # Errors
    ///
    /// Returns [`TranscodeError::InitializationFailed`] when the backend is
    /// unavailable.
    pub async fn warm_up(&self) -> Result<(), TranscodeError> {
        let transcoder = Arc::clone(&self.transcoder);
        tokio::task::spawn_blocking(move || transcoder.initialize())
            .await
            .map_err(|e| TranscodeError::InitializationFailed(e.to_string()))?
    }

    /// Transcodes `source` then uploads the result.
    ///
    /// # Errors
    ///
    /// Returns the first failing stage's error, or
    /// [`PipelineError::Cancelled`] once `token` fires.
    pub async fn process(
        &self,
        source: SelectedFile,
        token: CancellationToken,
    ) -> Result<PipelineOutcome, PipelineError> {
        if token.is_cancelled() {
            return Err(PipelineError::Cancelled);
        }

        let transcoder = Arc::clone(&self.transcoder);
        let target = self.target;
        let blocking_token = token.clone();
        let transcode = tokio::task::spawn_blocking(move || {
            transcoder.initialize()?;
            transcoder.transcode(&source, target, &blocking_token)
        });

        let audio = tokio::select! {
            biased;
            () = token.cancelled() => return Err(PipelineError::Cancelled),
            joined = transcode => joined
                .map_err(|e| TranscodeError::DecodingFailed(e.to_string()))??,
        };

        let output_bytes = audio.bytes.len();
        let receipt = tokio::select! {
            biased;
            () = token.cancelled() => return Err(PipelineError::Cancelled),
            result = self.uploader.upload(audio) => result?,
        };

        Ok(PipelineOutcome {
            output_bytes,
            status: receipt.status,
        })
    }
}
