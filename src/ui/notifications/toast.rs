// SPDX-License-Identifier: MPL-2.0
//! Toast rendering and timed dismissal.
//!
//! [`Toasts`] mirrors the store's active set and runs one lifecycle per
//! notification:
//!
//! ```text
//! mount -> Visible --(duration elapsed | close)--> Exiting --(exit window)--> remove(id)
//! ```
//!
//! Each lifecycle owns a [`Countdown`]. Every way out of `Visible` (timeout,
//! close, teardown) disarms it, and the terminal transition calls
//! [`Notifier::remove`] once.

use super::manager::{Manager, Notifier};
use super::notification::{Notification, NotificationId};
use super::timer::Countdown;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};
use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

/// Messages produced by the toast overlay.
#[derive(Debug, Clone)]
pub enum Message {
    /// The close control of a toast was pressed.
    Close(NotificationId),
    /// Periodic clock tick driving the countdowns.
    Tick(Instant),
}

/// Phase of a displayed toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Exiting,
}

#[derive(Debug, Clone, Copy)]
struct Lifecycle {
    phase: Phase,
    countdown: Countdown,
}

/// Renderer state: one lifecycle per displayed notification.
#[derive(Debug)]
pub struct Toasts {
    lifecycles: HashMap<NotificationId, Lifecycle>,
    exit_window: Duration,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_EXIT_ANIMATION_MS))
    }
}

impl Toasts {
    #[must_use]
    pub fn new(exit_window: Duration) -> Self {
        Self {
            lifecycles: HashMap::new(),
            exit_window,
        }
    }

    /// Mounts lifecycles for newly active notifications and drops those whose
    /// notification left the store.
    pub fn sync<'a>(&mut self, active: impl IntoIterator<Item = &'a Notification>, now: Instant) {
        let mut seen = HashSet::new();
        for notification in active {
            let id = notification.id();
            seen.insert(id);
            self.lifecycles.entry(id).or_insert_with(|| Lifecycle {
                phase: Phase::Visible,
                countdown: Countdown::started(now, notification.duration().as_duration()),
            });
        }
        self.lifecycles.retain(|id, lifecycle| {
            let keep = seen.contains(id);
            if !keep {
                lifecycle.countdown.cancel();
            }
            keep
        });
    }

    /// Explicit close. Only a `Visible` toast reacts; closing an exiting or
    /// unknown toast does nothing.
    pub fn close(&mut self, id: NotificationId, now: Instant) {
        if let Some(lifecycle) = self.lifecycles.get_mut(&id) {
            if lifecycle.phase == Phase::Visible {
                lifecycle.countdown.cancel();
                lifecycle.phase = Phase::Exiting;
                lifecycle.countdown.start(now, self.exit_window);
            }
        }
    }

    /// Advances every countdown to `now`, removing finished toasts from the
    /// store through `notifier`.
    pub fn tick(&mut self, now: Instant, notifier: &mut impl Notifier) {
        let exit_window = self.exit_window;
        let mut finished = Vec::new();

        for (id, lifecycle) in &mut self.lifecycles {
            if !lifecycle.countdown.poll(now) {
                continue;
            }
            match lifecycle.phase {
                Phase::Visible => {
                    lifecycle.phase = Phase::Exiting;
                    lifecycle.countdown.start(now, exit_window);
                }
                Phase::Exiting => finished.push(*id),
            }
        }

        finished.sort_unstable();
        for id in finished {
            self.lifecycles.remove(&id);
            notifier.remove(id);
        }
    }

    pub fn update(&mut self, message: Message, notifier: &mut impl Notifier) {
        match message {
            Message::Close(id) => self.close(id, Instant::now()),
            Message::Tick(now) => self.tick(now, notifier),
        }
    }

    /// Cancels every pending countdown and forgets all lifecycles.
    /// Nothing is removed from the store afterwards.
    pub fn teardown(&mut self) {
        for lifecycle in self.lifecycles.values_mut() {
            lifecycle.countdown.cancel();
        }
        self.lifecycles.clear();
    }

    #[must_use]
    pub fn phase(&self, id: NotificationId) -> Option<Phase> {
        self.lifecycles.get(&id).map(|l| l.phase)
    }

    /// True while at least one countdown is armed; drives the tick subscription.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.lifecycles.values().any(|l| l.countdown.is_armed())
    }

    /// Opacity of a toast at `now`: 1 while visible, fading to 0 while exiting.
    #[must_use]
    pub fn opacity(&self, id: NotificationId, now: Instant) -> f32 {
        match self.lifecycles.get(&id) {
            Some(Lifecycle {
                phase: Phase::Exiting,
                countdown,
            }) if !self.exit_window.is_zero() => {
                let remaining = countdown.remaining(now).unwrap_or(Duration::ZERO);
                (remaining.as_secs_f32() / self.exit_window.as_secs_f32()).clamp(0.0, 1.0)
            }
            Some(Lifecycle {
                phase: Phase::Exiting,
                ..
            }) => opacity::TRANSPARENT,
            _ => opacity::OPAQUE,
        }
    }

    /// Renders the toast overlay, bottom-right, in store order.
    pub fn view<'a>(&self, manager: &'a Manager, i18n: &I18n, now: Instant) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .active()
            .map(|notification| {
                Toast::view(notification, i18n, self.opacity(notification.id(), now))
            })
            .collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

/// A single toast card.
pub struct Toast;

impl Toast {
    /// Renders one notification with its severity accent and a close control.
    pub fn view<'a>(notification: &Notification, i18n: &I18n, alpha: f32) -> Element<'a, Message> {
        let accent_color = faded(notification.severity().color(), alpha);
        let message_text = notification.text().resolve(i18n);

        let message_widget = Text::new(message_text)
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(faded(theme.palette().text, alpha)),
            });

        let close_button = button(Text::new("×").size(typography::BODY_LG))
            .on_press(Message::Close(notification.id()))
            .padding([0.0, spacing::XXS])
            .style(move |theme: &Theme, status| close_button_style(theme, status, alpha));

        let close_control = iced::widget::tooltip(
            close_button,
            Container::new(Text::new(i18n.tr("notification-close")).size(typography::CAPTION))
                .padding(spacing::XXS)
                .style(crate::ui::styles::container::tooltip),
            iced::widget::tooltip::Position::Left,
        );

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(close_control);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, alpha))
            .into()
    }
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = faded(theme.extended_palette().background.base.color, alpha);

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: faded(shadow::MD.color, alpha * opacity::OVERLAY_SUBTLE),
            ..shadow::MD
        },
        text_color: Some(faded(theme.palette().text, alpha)),
        ..Default::default()
    }
}

fn close_button_style(theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let text_color = faded(theme.extended_palette().background.base.text, alpha);
    let hover_background = |a: f32| {
        Some(Background::Color(Color {
            a: a * alpha,
            ..palette::GRAY_400
        }))
    };

    let background = match status {
        button::Status::Hovered => hover_background(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover_background(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
