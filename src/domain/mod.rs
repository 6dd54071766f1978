// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`audio`]: Audio intake types ([`SelectedFile`](audio::SelectedFile),
//!   [`TargetFormat`](audio::TargetFormat), [`TranscodedAudio`](audio::TranscodedAudio))
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`error`]: Domain error types ([`TranscodeError`](error::TranscodeError),
//!   [`UploadError`](error::UploadError))
//! - [`notification`]: Notification value objects
//!   ([`DisplayDuration`](notification::DisplayDuration))

pub mod audio;
pub mod diagnostics;
pub mod error;
pub mod notification;
