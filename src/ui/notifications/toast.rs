// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with severity-colored accents and a dismiss button.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::{glyph, GlyphKind};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(notification: &Notification) -> Element<'_, Message> {
        let severity = notification.severity();
        let accent_color = severity.color();

        let icon_widget = glyph(Self::severity_glyph(severity), accent_color, sizing::ICON_MD);

        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let dismiss_button = button(glyph(
            GlyphKind::Cross,
            iced::Color { a: 0.8, ..accent_color },
            sizing::ICON_SM,
        ))
        .on_press(Message::Dismiss(notification.id()))
        .padding(spacing::XXS)
        .style(styles::button::dismiss);

        // Layout: [icon] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| styles::container::toast(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay with all visible notifications.
    ///
    /// Positions toasts in the bottom-right corner, stacked vertically.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = manager.visible().map(Self::view).collect();

        if toasts.is_empty() {
            container(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
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

    fn severity_glyph(severity: Severity) -> GlyphKind {
        match severity {
            Severity::Success => GlyphKind::CheckCircle,
            Severity::Warning | Severity::Error => GlyphKind::Alert,
        }
    }
}
