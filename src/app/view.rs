// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The upload widget fills the window; toasts are stacked on top of it.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Manager, Toasts};
use crate::ui::upload;
use iced::widget::{Container, Stack};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub upload: &'a upload::State,
    pub notifications: &'a Manager,
    pub toasts: &'a Toasts,
    pub now: Instant,
}

/// Renders the upload widget with the toast overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let upload_view = upload::view(upload::ViewContext {
        i18n: ctx.i18n,
        state: ctx.upload,
    })
    .map(Message::Upload);

    let toasts_view = ctx
        .toasts
        .view(ctx.notifications, ctx.i18n, ctx.now)
        .map(Message::Notification);

    Container::new(
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(upload_view)
            .push(toasts_view),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
