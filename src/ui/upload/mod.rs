// SPDX-License-Identifier: MPL-2.0
//! Audio upload widget.
//!
//! Accepts a single audio file by drop or by file dialog, then runs the
//! transcode-then-upload pipeline on request. Outcomes are reported through
//! the [`Notifier`](crate::ui::notifications::Notifier) passed to
//! [`State::handle_message`]; the widget never reaches the store on its own.
//!
//! Side effects (dialog, pipeline task, reset timer) are returned as an
//! [`Effect`] for the application shell to run.

mod state;
mod view;

pub use state::State;
pub use view::{format_file_size, view, ViewContext};

use crate::application::{PipelineError, PipelineOutcome};
use crate::domain::audio::SelectedFile;
use std::path::PathBuf;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Messages handled by the upload widget.
#[derive(Debug, Clone)]
pub enum Message {
    /// One batch of files dropped on the window.
    FilesDropped(Vec<PathBuf>),
    /// Files are being dragged over the window.
    DragEntered,
    /// The drag left the window without a drop.
    DragLeft,
    /// The browse button was pressed.
    BrowseRequested,
    /// The file dialog closed; `None` if the user dismissed it.
    FileChosen(Option<PathBuf>),
    ProcessRequested,
    RemoveRequested,
    /// The pipeline started for selection `generation` finished.
    Processed {
        generation: u64,
        result: Result<PipelineOutcome, PipelineError>,
    },
    /// The post-error reset delay for selection `generation` elapsed.
    ResetElapsed(u64),
}

/// Work the shell must perform on behalf of the widget.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Show the native file dialog and answer with [`Message::FileChosen`].
    OpenFileDialog,
    /// Run the pipeline and answer with [`Message::Processed`].
    StartProcessing {
        file: SelectedFile,
        token: CancellationToken,
        generation: u64,
    },
    /// Answer with [`Message::ResetElapsed`] after `delay`.
    ScheduleReset { delay: Duration, generation: u64 },
}
