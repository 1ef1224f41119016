// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The analyzer page fills the window; toasts are stacked above it.

use super::Message;
use crate::ui::analyzer;
use crate::ui::notifications::{Manager, Toast};
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub analyzer: &'a analyzer::State,
    pub notifications: &'a Manager,
    pub show_error_banner: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = analyzer::view(analyzer::ViewContext {
        state: ctx.analyzer,
        show_error_banner: ctx.show_error_banner,
    })
    .map(Message::Analyzer);

    let overlay = Toast::view_overlay(ctx.notifications).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(overlay)
        .into()
}
