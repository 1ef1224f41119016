// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Submit button: brand blue, dimmed while a request is running.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_600)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_700,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_700)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_700,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::LG,
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::DISABLED,
                ..palette::PRIMARY_600
            })),
            text_color: Color {
                a: opacity::OVERLAY_STRONG,
                ..WHITE
            },
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            ..Default::default()
        },
    }
}

/// Highlighted tab.
pub fn tab_active(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::PRIMARY_600)),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Tab that is not selected; lightens on hover.
pub fn tab_inactive(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(scheme.surface_tertiary)),
        _ => None,
    };

    button::Style {
        background,
        text_color: scheme.text_secondary,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Borderless icon button used to close toasts.
pub fn dismiss(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let overlay = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: overlay.map(|a| Background::Color(Color { a, ..palette::GRAY_400 })),
        text_color: base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Dark;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_600);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn disabled_primary_is_translucent() {
        let style = primary(&Theme::Dark, button::Status::Disabled);
        match style.background {
            Some(Background::Color(bg)) => assert!(bg.a < 1.0),
            _ => panic!("Expected background color"),
        }
    }

    #[test]
    fn active_and_inactive_tabs_differ() {
        let theme = Theme::Light;
        let active = tab_active(&theme, button::Status::Active);
        let inactive = tab_inactive(&theme, button::Status::Active);
        assert_ne!(active.background, inactive.background);
        assert_ne!(active.text_color, inactive.text_color);
    }

    #[test]
    fn dismiss_background_appears_on_hover() {
        let theme = Theme::Dark;
        assert!(dismiss(&theme, button::Status::Active).background.is_none());
        assert!(dismiss(&theme, button::Status::Hovered).background.is_some());
    }
}
