// SPDX-License-Identifier: MPL-2.0
//! Upload widget state machine.

use super::{Effect, Message};
use crate::application::PipelineError;
use crate::config::DEFAULT_RESET_DELAY_MS;
use crate::diagnostics::{AppStateEvent, DiagnosticsHandle, ErrorType, UserAction, WarningType};
use crate::domain::audio::SelectedFile;
use crate::domain::error::{TranscodeError, UploadError};
use crate::ui::notifications::{Notification, NotificationText, Notifier};
use std::path::PathBuf;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Upload widget state.
///
/// `generation` identifies the current selection. It changes whenever the
/// selection is replaced or removed, so answers from pipelines and reset
/// timers started for an older selection are recognized and dropped.
#[derive(Debug)]
pub struct State {
    selected: Option<SelectedFile>,
    error: Option<NotificationText>,
    in_flight: Option<CancellationToken>,
    drag_active: bool,
    generation: u64,
    reset_delay: Duration,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_RESET_DELAY_MS))
    }
}

impl State {
    /// Creates an empty widget that clears failed selections after `reset_delay`.
    #[must_use]
    pub fn new(reset_delay: Duration) -> Self {
        Self {
            selected: None,
            error: None,
            in_flight: None,
            drag_active: false,
            generation: 0,
            reset_delay,
            diagnostics: None,
        }
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    /// Inline error shown under the drop zone.
    #[must_use]
    pub fn error(&self) -> Option<&NotificationText> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Cancels the in-flight pipeline, if any. Used on window close.
    pub fn cancel_in_flight(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }

    pub fn handle_message(&mut self, message: Message, notifier: &mut impl Notifier) -> Effect {
        match message {
            Message::DragEntered => {
                self.drag_active = !self.is_processing();
                Effect::None
            }
            Message::DragLeft => {
                self.drag_active = false;
                Effect::None
            }
            Message::FilesDropped(paths) => {
                self.drag_active = false;
                self.log_action(UserAction::DropFiles { count: paths.len() });
                self.handle_drop(paths, notifier)
            }
            Message::BrowseRequested => {
                if self.is_processing() {
                    return Effect::None;
                }
                self.log_action(UserAction::OpenFileDialog);
                Effect::OpenFileDialog
            }
            Message::FileChosen(Some(path)) => {
                if !self.is_processing() {
                    self.select(path, notifier);
                }
                Effect::None
            }
            Message::FileChosen(None) => Effect::None,
            Message::ProcessRequested => self.start_processing(),
            Message::RemoveRequested => {
                self.remove(notifier);
                Effect::None
            }
            Message::Processed { generation, result } => {
                if generation != self.generation {
                    return Effect::None;
                }
                self.in_flight = None;
                match result {
                    Ok(outcome) => {
                        self.log_state(AppStateEvent::TranscodeCompleted {
                            output_bytes: outcome.output_bytes,
                        });
                        self.log_state(AppStateEvent::UploadCompleted {
                            status: outcome.status,
                        });
                        notifier.add(Notification::success("notification-upload-success"));
                        Effect::None
                    }
                    Err(PipelineError::Cancelled) => {
                        self.log_state(AppStateEvent::PipelineCancelled);
                        notifier.add(Notification::info("notification-upload-cancelled"));
                        self.clear_selection();
                        Effect::None
                    }
                    Err(err) => self.fail(&err, notifier),
                }
            }
            Message::ResetElapsed(generation) => {
                if generation == self.generation && !self.is_processing() && self.error.is_some()
                {
                    self.log_state(AppStateEvent::SelectionReset);
                    self.clear_selection();
                }
                Effect::None
            }
        }
    }

    fn handle_drop(&mut self, paths: Vec<PathBuf>, notifier: &mut impl Notifier) -> Effect {
        if self.is_processing() {
            return Effect::None;
        }
        let mut paths = paths.into_iter();
        match (paths.next(), paths.next()) {
            (None, _) => {}
            (Some(path), None) => self.select(path, notifier),
            (Some(_), Some(_)) => self.reject("upload-error-multiple-files", notifier),
        }
        Effect::None
    }

    /// Validates `path` and makes it the selection.
    fn select(&mut self, path: PathBuf, notifier: &mut impl Notifier) {
        let size_bytes = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        let file = SelectedFile::new(path, size_bytes);
        if !file.is_audio() {
            self.reject("upload-error-not-audio", notifier);
            return;
        }

        self.generation += 1;
        self.error = None;
        self.log_state(AppStateEvent::FileSelected {
            media_type: file.media_type().to_string(),
            size_bytes: file.size_bytes(),
        });
        notifier.add(Notification::success("notification-file-selected"));
        self.selected = Some(file);
    }

    /// Reports a validation failure. The selection is left as it was.
    fn reject(&mut self, key: &str, notifier: &mut impl Notifier) {
        self.error = Some(NotificationText::Localized {
            key: key.to_string(),
            args: Vec::new(),
        });
        notifier.add(Notification::warning(key).with_warning_type(WarningType::InvalidSelection));
    }

    fn start_processing(&mut self) -> Effect {
        if self.is_processing() {
            return Effect::None;
        }
        let Some(file) = self.selected.clone() else {
            return Effect::None;
        };

        self.log_action(UserAction::ProcessFile);
        // A new attempt supersedes any reset still pending from the last one.
        self.generation += 1;
        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());
        self.error = None;
        Effect::StartProcessing {
            file,
            token,
            generation: self.generation,
        }
    }

    fn remove(&mut self, notifier: &mut impl Notifier) {
        self.log_action(UserAction::RemoveFile);
        if let Some(token) = self.in_flight.take() {
            token.cancel();
            self.log_state(AppStateEvent::PipelineCancelled);
            notifier.add(Notification::info("notification-upload-cancelled"));
        }
        self.generation += 1;
        self.clear_selection();
    }

    /// Shows `err` inline and as a toast, then schedules the reset.
    fn fail(&mut self, err: &PipelineError, notifier: &mut impl Notifier) -> Effect {
        let mut notification = Notification::error(err.i18n_key()).with_error_type(error_type(err));
        if let PipelineError::Upload(UploadError::Rejected { status }) = err {
            notification = notification.with_arg("status", status.to_string());
        }
        self.error = Some(notification.text().clone());
        notifier.add(notification);

        Effect::ScheduleReset {
            delay: self.reset_delay,
            generation: self.generation,
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.error = None;
    }

    fn log_action(&self, action: UserAction) {
        if let Some(handle) = &self.diagnostics {
            handle.log_action(action);
        }
    }

    fn log_state(&self, state: AppStateEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.log_state(state);
        }
    }
}

fn error_type(err: &PipelineError) -> ErrorType {
    match err {
        PipelineError::Transcode(TranscodeError::Io(_)) => ErrorType::IoError,
        PipelineError::Transcode(_) => ErrorType::TranscodeError,
        PipelineError::Upload(_) => ErrorType::NetworkError,
        PipelineError::Cancelled => ErrorType::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::PipelineOutcome;
    use crate::ui::notifications::{Manager, Severity};

    fn keys(manager: &Manager) -> Vec<String> {
        manager.active().map(|n| n.text().raw().to_string()).collect()
    }

    fn selected_state(manager: &mut Manager) -> State {
        let mut state = State::new(Duration::from_millis(4000));
        state.handle_message(
            Message::FilesDropped(vec![PathBuf::from("/music/song.mp3")]),
            manager,
        );
        state
    }

    fn start(state: &mut State, manager: &mut Manager) -> (CancellationToken, u64) {
        match state.handle_message(Message::ProcessRequested, manager) {
            Effect::StartProcessing {
                token, generation, ..
            } => (token, generation),
            other => panic!("expected StartProcessing, got {other:?}"),
        }
    }

    #[test]
    fn single_audio_drop_selects_and_notifies() {
        let mut manager = Manager::new();
        let state = selected_state(&mut manager);

        let file = state.selected().expect("file should be selected");
        assert_eq!(file.name(), "song.mp3");
        assert!(state.error().is_none());
        assert_eq!(keys(&manager), ["notification-file-selected"]);
        assert_eq!(manager.active().next().map(|n| n.severity()), Some(Severity::Success));
    }

    #[test]
    fn multiple_files_are_rejected() {
        let mut manager = Manager::new();
        let mut state = State::default();

        state.handle_message(
            Message::FilesDropped(vec![PathBuf::from("a.mp3"), PathBuf::from("b.mp3")]),
            &mut manager,
        );

        assert!(state.selected().is_none());
        assert_eq!(state.error().map(NotificationText::raw), Some("upload-error-multiple-files"));
        assert_eq!(keys(&manager), ["upload-error-multiple-files"]);
    }

    #[test]
    fn non_audio_file_is_rejected() {
        let mut manager = Manager::new();
        let mut state = State::default();

        state.handle_message(Message::FileChosen(Some(PathBuf::from("notes.txt"))), &mut manager);

        assert!(state.selected().is_none());
        assert_eq!(state.error().map(NotificationText::raw), Some("upload-error-not-audio"));
    }

    #[test]
    fn rejected_drop_keeps_previous_selection() {
        let mut manager = Manager::new();
        let mut state = selected_state(&mut manager);

        state.handle_message(Message::FilesDropped(vec![PathBuf::from("cover.png")]), &mut manager);

        assert_eq!(state.selected().map(SelectedFile::name), Some("song.mp3"));
        assert!(state.error().is_some());
    }

    #[test]
    fn empty_drop_and_dismissed_dialog_do_nothing() {
        let mut manager = Manager::new();
        let mut state = State::default();

        state.handle_message(Message::FilesDropped(Vec::new()), &mut manager);
        state.handle_message(Message::FileChosen(None), &mut manager);

        assert!(state.selected().is_none());
        assert!(state.error().is_none());
        assert!(manager.is_empty());
    }

    #[test]
    fn process_without_selection_is_ignored() {
        let mut manager = Manager::new();
        let mut state = State::default();
        assert!(matches!(
            state.handle_message(Message::ProcessRequested, &mut manager),
            Effect::None
        ));
    }

    #[test]
    fn success_keeps_selection() {
        let mut manager = Manager::new();
        let mut state = selected_state(&mut manager);
        let (_token, generation) = start(&mut state, &mut manager);
        assert!(state.is_processing());

        let effect = state.handle_message(
            Message::Processed {
                generation,
                result: Ok(PipelineOutcome {
                    output_bytes: 48_044,
                    status: 200,
                }),
            },
            &mut manager,
        );

        assert!(matches!(effect, Effect::None));
        assert!(!state.is_processing());
        assert!(state.selected().is_some());
        assert_eq!(
            keys(&manager),
            ["notification-file-selected", "notification-upload-success"]
        );
    }

    #[test]
    fn server_error_reports_status_and_schedules_reset() {
        let mut manager = Manager::new();
        let mut state = selected_state(&mut manager);
        let (_token, generation) = start(&mut state, &mut manager);

        let effect = state.handle_message(
            Message::Processed {
                generation,
                result: Err(PipelineError::Upload(UploadError::Rejected { status: 500 })),
            },
            &mut manager,
        );

        let Effect::ScheduleReset {
            delay,
            generation: reset_generation,
        } = effect
        else {
            panic!("expected ScheduleReset");
        };
        assert_eq!(delay, Duration::from_millis(4000));

        let last = manager.active().last().expect("error toast");
        assert_eq!(last.severity(), Severity::Error);
        assert_eq!(
            last.text(),
            &NotificationText::Localized {
                key: "error-upload-rejected".into(),
                args: vec![("status".into(), "500".into())],
            }
        );
        assert!(state.selected().is_some());

        state.handle_message(Message::ResetElapsed(reset_generation), &mut manager);
        assert!(state.selected().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn stale_reset_does_not_clear_newer_selection() {
        let mut manager = Manager::new();
        let mut state = selected_state(&mut manager);
        let (_token, generation) = start(&mut state, &mut manager);
        let Effect::ScheduleReset {
            generation: stale, ..
        } = state.handle_message(
            Message::Processed {
                generation,
                result: Err(PipelineError::Transcode(TranscodeError::NoAudioStream)),
            },
            &mut manager,
        )
        else {
            panic!("expected ScheduleReset");
        };

        state.handle_message(
            Message::FilesDropped(vec![PathBuf::from("/music/other.flac")]),
            &mut manager,
        );
        state.handle_message(Message::ResetElapsed(stale), &mut manager);

        assert_eq!(state.selected().map(SelectedFile::name), Some("other.flac"));
    }

    #[test]
    fn remove_while_processing_cancels_token() {
        let mut manager = Manager::new();
        let mut state = selected_state(&mut manager);
        let (token, generation) = start(&mut state, &mut manager);

        state.handle_message(Message::RemoveRequested, &mut manager);

        assert!(token.is_cancelled());
        assert!(!state.is_processing());
        assert!(state.selected().is_none());
        assert_eq!(keys(&manager).last().map(String::as_str), Some("notification-upload-cancelled"));

        // The cancelled pipeline answers late; nothing else happens.
        let before = manager.len();
        state.handle_message(
            Message::Processed {
                generation,
                result: Err(PipelineError::Cancelled),
            },
            &mut manager,
        );
        assert_eq!(manager.len(), before);
    }

    #[test]
    fn init_failure_uses_its_own_message() {
        let mut manager = Manager::new();
        let mut state = selected_state(&mut manager);
        let (_token, generation) = start(&mut state, &mut manager);

        state.handle_message(
            Message::Processed {
                generation,
                result: Err(PipelineError::Transcode(TranscodeError::InitializationFailed(
                    "missing libavcodec".into(),
                ))),
            },
            &mut manager,
        );

        assert_eq!(state.error().map(NotificationText::raw), Some("error-transcoder-init"));
    }

    #[test]
    fn drops_are_ignored_while_processing() {
        let mut manager = Manager::new();
        let mut state = selected_state(&mut manager);
        let _ = start(&mut state, &mut manager);

        state.handle_message(Message::DragEntered, &mut manager);
        assert!(!state.is_drag_active());

        state.handle_message(
            Message::FilesDropped(vec![PathBuf::from("/music/other.mp3")]),
            &mut manager,
        );
        assert_eq!(state.selected().map(SelectedFile::name), Some("song.mp3"));
        assert!(matches!(
            state.handle_message(Message::BrowseRequested, &mut manager),
            Effect::None
        ));
    }

    #[test]
    fn drag_hover_toggles_highlight() {
        let mut manager = Manager::new();
        let mut state = State::default();

        state.handle_message(Message::DragEntered, &mut manager);
        assert!(state.is_drag_active());
        state.handle_message(Message::DragLeft, &mut manager);
        assert!(!state.is_drag_active());
    }
}
