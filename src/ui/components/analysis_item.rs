// SPDX-License-Identifier: MPL-2.0
//! Titled narrative block shown on the AI analysis tab.

use crate::domain::AnalysisField;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::{glyph, GlyphKind};
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length};

/// Accent color of each analysis field, in display order.
const ACCENTS: [(AnalysisField, Color); 3] = [
    (AnalysisField::Summary, palette::ACCENT_GREEN),
    (AnalysisField::InvestorAnalysis, palette::ACCENT_BLUE),
    (AnalysisField::JobSeekerInfo, palette::ACCENT_PURPLE),
];

/// Looks up the accent color of `field`.
#[must_use]
pub fn accent(field: AnalysisField) -> Color {
    ACCENTS
        .iter()
        .find(|(f, _)| *f == field)
        .map_or(palette::ACCENT_BLUE, |(_, color)| *color)
}

/// Renders the header (icon and title) above the content, shown verbatim.
pub fn view<'a, Message: 'static>(
    title: &'a str,
    content: &'a str,
    icon: Element<'a, Message>,
) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icon)
        .push(Text::new(title).size(typography::TITLE_SM));

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(Text::new(content).size(typography::BODY)),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::card)
    .into()
}

/// Check-circle glyph in the accent color of `field`.
pub fn icon<Message: 'static>(field: AnalysisField) -> Element<'static, Message> {
    glyph(GlyphKind::CheckCircle, accent(field), sizing::ICON_MD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accents_follow_display_order() {
        assert_eq!(accent(AnalysisField::Summary), palette::ACCENT_GREEN);
        assert_eq!(accent(AnalysisField::InvestorAnalysis), palette::ACCENT_BLUE);
        assert_eq!(accent(AnalysisField::JobSeekerInfo), palette::ACCENT_PURPLE);
    }

    #[test]
    fn table_covers_every_field() {
        for field in AnalysisField::ALL {
            assert!(ACCENTS.iter().any(|(f, _)| *f == field));
        }
    }

    #[test]
    fn view_builds() {
        let field = AnalysisField::Summary;
        let _element: Element<'_, ()> = view("企業概要", "", icon(field));
    }
}
