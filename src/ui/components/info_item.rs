// SPDX-License-Identifier: MPL-2.0
//! Label/value pair shown on the basic information tab.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::labels;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{text, Column, Container, Text};
use iced::{Element, Length, Theme};

/// Returns the text to show for `value`, substituting the placeholder when empty.
#[must_use]
pub fn display_value(value: &str) -> &str {
    if value.is_empty() {
        labels::NO_INFORMATION
    } else {
        value
    }
}

pub fn view<'a, Message: 'a>(label: &'a str, value: &'a str) -> Element<'a, Message> {
    let label = Text::new(label)
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::for_theme(theme).text_secondary),
        });
    let value = Text::new(display_value(value)).size(typography::BODY_LG);

    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(label)
            .push(value),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::card)
    .into()
}
