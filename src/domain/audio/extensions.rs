// SPDX-License-Identifier: MPL-2.0
//! File extension to declared media type mapping.
//!
//! Desktop drops carry no MIME type, so the declared type is derived from
//! the extension. Unknown extensions map to `application/octet-stream`.

use std::path::Path;

/// Extensions accepted by the open dialog filter.
pub const AUDIO_EXTENSIONS: &[&str] = &[
    "mp3", "wav", "aac", "m4a", "flac", "ogg", "oga", "opus", "aif", "aiff", "wma", "amr",
];

/// Fallback for extensions we do not recognize.
pub const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

const MEDIA_TYPES: &[(&str, &str)] = &[
    // Audio
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("aac", "audio/aac"),
    ("m4a", "audio/mp4"),
    ("flac", "audio/flac"),
    ("ogg", "audio/ogg"),
    ("oga", "audio/ogg"),
    ("opus", "audio/opus"),
    ("aif", "audio/aiff"),
    ("aiff", "audio/aiff"),
    ("wma", "audio/x-ms-wma"),
    ("amr", "audio/amr"),
    // Common non-audio types users drop by mistake
    ("mp4", "video/mp4"),
    ("mkv", "video/x-matroska"),
    ("mov", "video/quicktime"),
    ("webm", "video/webm"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("pdf", "application/pdf"),
    ("txt", "text/plain"),
];

/// Returns the media type registered for an extension (case-insensitive).
#[must_use]
pub fn media_type_for_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.to_lowercase();
    MEDIA_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, media_type)| *media_type)
}

/// Returns the declared media type of a path.
#[must_use]
pub fn declared_media_type<P: AsRef<Path>>(path: P) -> &'static str {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .and_then(media_type_for_extension)
        .unwrap_or(UNKNOWN_MEDIA_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_extensions_all_map_to_audio_types() {
        for ext in AUDIO_EXTENSIONS {
            let media_type = media_type_for_extension(ext).expect("audio extension is mapped");
            assert!(media_type.starts_with("audio/"), "{ext} -> {media_type}");
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(declared_media_type("Song.MP3"), "audio/mpeg");
        assert_eq!(declared_media_type("clip.Wav"), "audio/wav");
    }

    #[test]
    fn unknown_or_missing_extension_is_octet_stream() {
        assert_eq!(declared_media_type("archive.xyz"), UNKNOWN_MEDIA_TYPE);
        assert_eq!(declared_media_type("README"), UNKNOWN_MEDIA_TYPE);
    }

    #[test]
    fn video_is_not_audio() {
        assert_eq!(declared_media_type("movie.mp4"), "video/mp4");
    }
}
