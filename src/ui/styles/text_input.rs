// SPDX-License-Identifier: MPL-2.0
//! URL field style.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::text_input;
use iced::{Background, Border, Color, Theme};

pub fn url(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let scheme = ColorScheme::for_theme(theme);
    let border_color = match status {
        text_input::Status::Focused { .. } => palette::PRIMARY_500,
        _ => scheme.surface_tertiary,
    };
    let value = match status {
        text_input::Status::Disabled => Color {
            a: opacity::DISABLED,
            ..scheme.text_primary
        },
        _ => scheme.text_primary,
    };

    text_input::Style {
        background: Background::Color(scheme.surface_secondary),
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        icon: scheme.text_secondary,
        placeholder: scheme.text_secondary,
        value,
        selection: Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::PRIMARY_400
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_highlights_border() {
        let idle = url(&Theme::Dark, text_input::Status::Active);
        let focused = url(&Theme::Dark, text_input::Status::Focused { is_hovered: false });
        assert_ne!(idle.border.color, focused.border.color);
        assert_eq!(focused.border.color, palette::PRIMARY_500);
    }

    #[test]
    fn disabled_value_is_dimmed() {
        let style = url(&Theme::Dark, text_input::Status::Disabled);
        assert!(style.value.a < 1.0);
    }
}
