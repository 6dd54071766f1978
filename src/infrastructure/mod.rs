// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! - [`ffmpeg`]: Audio transcoding via `FFmpeg` (implements [`AudioTranscoder`])
//! - [`http`]: Multipart upload via `reqwest` (implements [`AudioUploader`])
//!
//! [`AudioTranscoder`]: crate::application::port::AudioTranscoder
//! [`AudioUploader`]: crate::application::port::AudioUploader

pub mod ffmpeg;
pub mod http;

pub use ffmpeg::FfmpegTranscoder;
pub use http::HttpUploader;
