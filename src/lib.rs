// SPDX-License-Identifier: MPL-2.0
//! `wavedrop` takes a dropped audio file, normalizes it to 24 kHz mono WAV
//! and posts it to a decoding endpoint, built with the Iced GUI framework.
//!
//! Outcomes are reported through transient toast notifications.
//!
//! # Architecture
//!
//! - [`domain`] - Pure types: selected file, target format, errors, durations
//! - [`application`] - Transcoder/uploader ports and the pipeline use case
//! - [`infrastructure`] - `FFmpeg` transcoder and HTTP uploader adapters
//! - [`ui`] - Upload widget, toast notifications, styles
//! - [`app`] - Iced application shell

#![doc(html_root_url = "https://docs.rs/wavedrop/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
