// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::error::TranscodeError;
use crate::ui::notifications;
use crate::ui::upload;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Upload(upload::Message),
    Notification(notifications::NotificationMessage),
    /// A single file was dropped on the window. Files of one drop arrive as
    /// separate events and are batched before reaching the upload widget.
    FileDropped(PathBuf),
    /// The drop batching window closed.
    DropBatchReady,
    /// Result of the startup transcoder initialization.
    TranscoderWarmedUp(Result<(), TranscodeError>),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional upload endpoint, overriding `[upload] endpoint`.
    pub endpoint: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `WAVEDROP_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Where to write the diagnostics report when the window closes.
    pub diagnostics_out: Option<PathBuf>,
}
