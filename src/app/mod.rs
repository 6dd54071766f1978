// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the upload widget and
//! the notification system.
//!
//! The `App` struct wires together the components (upload, notifications,
//! localization, diagnostics) and translates the effects they return into
//! Iced tasks: file dialogs, pipeline runs and timers.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::application::{Pipeline, PipelineError};
use crate::config;
use crate::diagnostics::{AppStateEvent, DiagnosticsCollector, ErrorType, ExportError, UserAction};
use crate::domain::audio::extensions::AUDIO_EXTENSIONS;
use crate::domain::error::{TranscodeError, UploadError};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{FfmpegTranscoder, HttpUploader};
use crate::ui::notifications::{self, Notification, NotificationMessage, Notifier, Toasts};
use crate::ui::theming::ThemeMode;
use crate::ui::upload;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// The concrete pipeline the application runs.
pub type UploadPipeline = Pipeline<FfmpegTranscoder, HttpUploader>;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    upload: upload::State,
    /// `Err` when the configured endpoint is unusable; every run then fails
    /// with that error.
    pipeline: Result<UploadPipeline, UploadError>,
    /// Toast notification store.
    notifications: notifications::Manager,
    /// Toast lifecycles and rendering.
    toasts: Toasts,
    diagnostics: DiagnosticsCollector,
    diagnostics_out: Option<PathBuf>,
    /// Files of the drop currently being batched.
    pending_drop: Vec<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("upload", &self.upload)
            .field("notifications", &self.notifications.len())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings. Close requests are intercepted so in-flight
/// work can be cancelled before the window goes away.
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced 0.14 requires an Fn boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and starts the transcoder warm-up.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        if let Some(endpoint) = flags.endpoint {
            config.upload.endpoint = Some(endpoint);
        }

        let i18n = I18n::new(flags.lang, &config);
        let diagnostics = DiagnosticsCollector::new(config.diagnostics.capacity());

        let mut notifications =
            notifications::Manager::with_default_duration(config.notifications.duration());
        notifications.set_diagnostics(diagnostics.handle());

        let mut upload = upload::State::new(config.upload.reset_delay());
        upload.set_diagnostics(diagnostics.handle());

        let pipeline = HttpUploader::from_config(&config.upload)
            .map(|uploader| Pipeline::new(FfmpegTranscoder::new(), uploader));

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            upload,
            pipeline,
            notifications,
            toasts: Toasts::new(config.notifications.exit_animation()),
            diagnostics,
            diagnostics_out: flags.diagnostics_out,
            pending_drop: Vec::new(),
        };

        if let Some(key) = config_warning {
            app.notifications.add(Notification::warning(key));
        }

        let task = match &app.pipeline {
            Ok(pipeline) => {
                let pipeline = pipeline.clone();
                Task::perform(async move { pipeline.warm_up().await }, Message::TranscoderWarmedUp)
            }
            Err(err) => {
                app.notifications.add(
                    Notification::error(err.i18n_key()).with_error_type(ErrorType::NetworkError),
                );
                Task::none()
            }
        };

        app.after_update(Instant::now());
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.toasts.has_pending()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Upload(upload_message) => {
                let effect = self
                    .upload
                    .handle_message(upload_message, &mut self.notifications);
                self.run_upload_effect(effect)
            }
            Message::Notification(notification_message) => {
                if let NotificationMessage::Close(_) = notification_message {
                    self.diagnostics.log_action(UserAction::DismissNotification);
                }
                self.toasts
                    .update(notification_message, &mut self.notifications);
                Task::none()
            }
            Message::FileDropped(path) => {
                let first = self.pending_drop.is_empty();
                self.pending_drop.push(path);
                if first {
                    Task::perform(
                        tokio::time::sleep(Duration::from_millis(config::DROP_BATCH_WINDOW_MS)),
                        |()| Message::DropBatchReady,
                    )
                } else {
                    Task::none()
                }
            }
            Message::DropBatchReady => {
                let batch = std::mem::take(&mut self.pending_drop);
                let effect = self
                    .upload
                    .handle_message(upload::Message::FilesDropped(batch), &mut self.notifications);
                self.run_upload_effect(effect)
            }
            Message::TranscoderWarmedUp(result) => {
                self.handle_warm_up(result);
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                self.shutdown();
                window::close(id)
            }
        };

        self.after_update(Instant::now());
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            upload: &self.upload,
            notifications: &self.notifications,
            toasts: &self.toasts,
            now: Instant::now(),
        })
    }

    /// Mounts toasts for notifications added during the update and drains
    /// queued diagnostics events.
    fn after_update(&mut self, now: Instant) {
        self.toasts.sync(self.notifications.active(), now);
        self.diagnostics.process_pending();
    }

    fn run_upload_effect(&mut self, effect: upload::Effect) -> Task<Message> {
        match effect {
            upload::Effect::None => Task::none(),
            upload::Effect::OpenFileDialog => {
                let title = self.i18n.tr("upload-dialog-title");
                let filter = self.i18n.tr("upload-dialog-filter");
                Task::perform(
                    async move {
                        rfd::AsyncFileDialog::new()
                            .set_title(title)
                            .add_filter(filter, AUDIO_EXTENSIONS)
                            .pick_file()
                            .await
                            .map(|handle| handle.path().to_path_buf())
                    },
                    |path| Message::Upload(upload::Message::FileChosen(path)),
                )
            }
            upload::Effect::StartProcessing {
                file,
                token,
                generation,
            } => {
                let pipeline = self.pipeline.clone();
                Task::perform(
                    async move {
                        match pipeline {
                            Ok(pipeline) => pipeline.process(file, token).await,
                            Err(err) => Err(PipelineError::Upload(err)),
                        }
                    },
                    move |result| Message::Upload(upload::Message::Processed { generation, result }),
                )
            }
            upload::Effect::ScheduleReset { delay, generation } => {
                Task::perform(tokio::time::sleep(delay), move |()| {
                    Message::Upload(upload::Message::ResetElapsed(generation))
                })
            }
        }
    }

    fn handle_warm_up(&mut self, result: Result<(), TranscodeError>) {
        match result {
            Ok(()) => {
                self.diagnostics.log_state(AppStateEvent::TranscoderReady);
                self.notifications
                    .add(Notification::info("notification-transcoder-ready"));
            }
            Err(err) => {
                eprintln!("Transcoder warm-up failed: {err}");
                self.notifications.add(
                    Notification::error(err.i18n_key()).with_error_type(ErrorType::TranscodeError),
                );
            }
        }
    }

    /// Cancels in-flight work, disarms every toast timer and writes the
    /// diagnostics report if one was requested.
    fn shutdown(&mut self) {
        self.upload.cancel_in_flight();
        self.toasts.teardown();
        self.notifications.clear();

        if let Some(path) = self.diagnostics_out.take() {
            self.diagnostics.process_pending();
            if let Err(err) = self.diagnostics.export_to_file(&path) {
                eprintln!("{}", export_failure_message(&self.i18n, &err));
            }
        }
    }
}

/// Localized stderr line for a failed diagnostics export.
fn export_failure_message(i18n: &I18n, err: &ExportError) -> String {
    format!("{}: {err}", i18n.tr("diagnostics-export-error"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn window_settings_intercept_close() {
        let settings = window_settings();
        assert!(!settings.exit_on_close_request);
        assert!(settings.min_size.is_some());
    }

    #[test]
    fn export_failure_message_is_localized() {
        let err = ExportError::Io(std::io::Error::other("read-only file system"));

        let english = I18n::new(Some("en-US".to_string()), &Config::default());
        let message = export_failure_message(&english, &err);
        assert!(message.starts_with("Could not write the diagnostics report: "));
        assert!(message.contains("read-only file system"));

        let french = I18n::new(Some("fr".to_string()), &Config::default());
        let message = export_failure_message(&french, &err);
        assert!(message.starts_with("Impossible d'écrire le rapport de diagnostic"));
    }
}
