// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background behind every other surface.
pub fn page(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_primary)),
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Result panel holding the tabs and their content.
///
/// Colors come from the resolved [`ColorScheme`], so the panel follows the
/// light or dark theme without any per-widget branching.
pub fn panel(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(scheme.surface_secondary)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Single item inside the panel.
pub fn card(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(scheme.surface_tertiary)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Inline alert box for the last failure.
pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ERROR_100)),
        border: Border {
            color: palette::ERROR_400,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        text_color: Some(palette::ERROR_700),
        ..Default::default()
    }
}

/// Toast card outlined in the severity color.
pub fn toast(theme: &Theme, accent: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
