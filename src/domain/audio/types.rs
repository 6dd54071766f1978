// SPDX-License-Identifier: MPL-2.0
//! Core audio intake types.

use std::path::{Path, PathBuf};

use super::extensions;

/// Media type of the transcoder output.
pub const WAV_MEDIA_TYPE: &str = "audio/wav";

/// Returns true for `audio/*` media types.
#[must_use]
pub fn is_audio_media_type(media_type: &str) -> bool {
    media_type.starts_with("audio/")
}

/// Replaces every character outside `[A-Za-z0-9._-]` with `_`.
///
/// The transcoder and the upload form both use the result as a file name,
/// so path separators and shell metacharacters never reach them.
///
/// ```
/// use wavedrop::domain::audio::sanitize_file_name;
///
/// assert_eq!(sanitize_file_name("my song (live).mp3"), "my_song__live_.mp3");
/// assert_eq!(sanitize_file_name("../etc/passwd"), ".._etc_passwd");
/// ```
#[must_use]
pub fn sanitize_file_name(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.is_empty() {
        "audio".to_string()
    } else {
        sanitized
    }
}

/// A file chosen by the user, by drop or by dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    path: PathBuf,
    name: String,
    size_bytes: u64,
    media_type: &'static str,
}

impl SelectedFile {
    /// Builds a selection with its declared media type derived from the extension.
    pub fn new(path: impl Into<PathBuf>, size_bytes: u64) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let media_type = extensions::declared_media_type(&path);
        Self {
            path,
            name,
            size_bytes,
            media_type,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name shown to the user.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Media type declared by the extension, e.g. `audio/mpeg`.
    #[must_use]
    pub fn media_type(&self) -> &'static str {
        self.media_type
    }

    #[must_use]
    pub fn is_audio(&self) -> bool {
        is_audio_media_type(self.media_type)
    }

    /// Name the transcoded upload will carry: `<name>.wav`, sanitized.
    #[must_use]
    pub fn output_name(&self) -> String {
        sanitize_file_name(&format!("{}.wav", self.name))
    }
}

/// Output container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Container {
    #[default]
    Wav,
}

/// Format every upload is normalized to before it leaves the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetFormat {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Output channel count.
    pub channels: u16,
    pub container: Container,
}

impl TargetFormat {
    /// 24 kHz mono WAV, the format the decoding endpoint expects.
    pub const SPEECH: Self = Self {
        sample_rate: 24_000,
        channels: 1,
        container: Container::Wav,
    };
}

impl Default for TargetFormat {
    fn default() -> Self {
        Self::SPEECH
    }
}

/// Transcoder output, ready to be attached to an upload form.
#[derive(Clone, PartialEq, Eq)]
pub struct TranscodedAudio {
    pub file_name: String,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

impl TranscodedAudio {
    /// Wraps WAV bytes produced for `source`.
    #[must_use]
    pub fn wav_for(source: &SelectedFile, bytes: Vec<u8>) -> Self {
        Self {
            file_name: source.output_name(),
            media_type: WAV_MEDIA_TYPE,
            bytes,
        }
    }
}

impl std::fmt::Debug for TranscodedAudio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranscodedAudio")
            .field("file_name", &self.file_name)
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
