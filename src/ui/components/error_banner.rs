// SPDX-License-Identifier: MPL-2.0
//! Inline alert box for the last failure.

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::labels;
use crate::ui::styles;
use crate::ui::widgets::{glyph, GlyphKind};
use iced::widget::{Container, Row, Text};
use iced::{alignment, Element, Length};

/// Banner text: fixed prefix followed by the message.
#[must_use]
pub fn banner_text(message: &str) -> String {
    format!("{}{message}", labels::ERROR_BANNER_PREFIX)
}

pub fn view<'a, Message: 'static>(message: &str) -> Element<'a, Message> {
    let content = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(glyph(GlyphKind::Alert, palette::ERROR_700, sizing::ICON_MD))
        .push(Text::new(banner_text(message)).size(typography::BODY));

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::error_banner)
        .into()
}
