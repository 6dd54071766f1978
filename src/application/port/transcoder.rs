// SPDX-License-Identifier: MPL-2.0
//! Audio transcoding port definition.
//!
//! # Design Notes
//!
//! - Methods are blocking; callers run them on a blocking thread
//! - `initialize` is idempotent and cheap after the first success
//! - Cancellation is cooperative: implementations check the token between
//!   units of work and return [`TranscodeError::Cancelled`]

use crate::domain::audio::{SelectedFile, TargetFormat, TranscodedAudio};
use crate::domain::error::TranscodeError;
use tokio_util::sync::CancellationToken;

/// Port for local audio normalization.
///
/// # Example
///
/// ```ignore
/// use wavedrop::application::port::AudioTranscoder;
/// use wavedrop::domain::audio::{SelectedFile, TargetFormat};
/// use tokio_util::sync::CancellationToken;
///
/// fn to_wav(transcoder: &impl AudioTranscoder, file: &SelectedFile) {
///     transcoder.initialize().expect("transcoder unavailable");
///     let wav = transcoder
///         .transcode(file, TargetFormat::SPEECH, &CancellationToken::new())
///         .expect("transcode failed");
///     println!("{} bytes", wav.bytes.len());
/// }
/// ```
pub trait AudioTranscoder: Send + Sync {
    /// Performs one-time library initialization.
    ///
    /// # Errors
    ///
    /// Returns [`TranscodeError::InitializationFailed`] if the backend cannot
    /// be loaded.
    fn initialize(&self) -> Result<(), TranscodeError>;

    /// Converts `source` to `target`, returning the encoded bytes.
    ///
    /// # Errors
    ///
    /// Returns a [`TranscodeError`] if:
    /// - The file cannot be read or has no audio stream
    /// - Decoding, resampling or encoding fails
    /// - `cancel` fires before the work completes
    fn transcode(
        &self,
        source: &SelectedFile,
        target: TargetFormat,
        cancel: &CancellationToken,
    ) -> Result<TranscodedAudio, TranscodeError>;
}
