// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use domain types, keeping the application layer independent of
//! `FFmpeg` and HTTP client types.
//!
//! # Available Ports
//!
//! - [`transcoder`]: Local audio normalization (decode, resample, encode)
//! - [`uploader`]: Submission of the normalized file to the endpoint

pub mod transcoder;
pub mod uploader;

pub use transcoder::AudioTranscoder;
pub use uploader::{AudioUploader, UploadReceipt};
