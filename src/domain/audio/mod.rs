// SPDX-License-Identifier: MPL-2.0
//! Audio intake domain types.
//!
//! - [`SelectedFile`]: the file the user picked or dropped
//! - [`TargetFormat`]: the normalized output format (24 kHz, mono, WAV)
//! - [`TranscodedAudio`]: transcoder output handed to the uploader
//! - [`extensions`]: extension to media type mapping

pub mod extensions;
mod types;

pub use types::{
    is_audio_media_type, sanitize_file_name, Container, SelectedFile, TargetFormat,
    TranscodedAudio, WAV_MEDIA_TYPE,
};
