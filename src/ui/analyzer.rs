// SPDX-License-Identifier: MPL-2.0
//! Analyzer page: URL form, request lifecycle and the tabbed result panel.
//!
//! The page owns every piece of state the user sees except notifications.
//! Its `update` never performs I/O; it returns an [`Effect`] and the
//! application root turns that into a request task or a toast.

use crate::app::config::SPINNER_STEP_RADIANS;
use crate::domain::{AnalysisField, BasicField, CompanyInfo};
use crate::error::Error;
use crate::ui::components::{analysis_item, error_banner, info_item};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::labels;
use crate::ui::notifications::Notification;
use crate::ui::styles;
use crate::ui::widgets::{animated_spinner, glyph, AnimatedSpinner, GlyphKind};
use iced::widget::{button, container, scrollable, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Result panel tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Basic,
    Analysis,
}

/// Page state.
#[derive(Debug, Clone, Default)]
pub struct State {
    url: String,
    is_loading: bool,
    result: Option<CompanyInfo>,
    active_tab: Tab,
    spinner_rotation: f32,
    /// Text of the most recent failure, cleared on each submission.
    last_error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    UrlChanged(String),
    Submit,
    TabSelected(Tab),
    ResponseReceived(Result<CompanyInfo, Error>),
    SpinnerTick,
}

/// Work requested from the application root.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Send one analysis request for this URL, exactly as typed.
    Submit(String),
    /// Show a toast.
    Notify(Notification),
}

/// Contextual data needed to render the page.
pub struct ViewContext<'a> {
    pub state: &'a State,
    /// Render the inline banner for the last failure.
    pub show_error_banner: bool,
}

impl State {
    /// Creates a page whose input is prefilled with `url`.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn result(&self) -> Option<&CompanyInfo> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::UrlChanged(url) => {
                self.url = url;
                Effect::None
            }
            Message::Submit => self.submit(),
            Message::TabSelected(tab) => {
                self.active_tab = tab;
                Effect::None
            }
            Message::ResponseReceived(response) => {
                self.is_loading = false;
                match response {
                    Ok(info) => {
                        self.result = Some(info);
                        Effect::Notify(Notification::success(labels::NOTIFY_FETCH_SUCCEEDED))
                    }
                    Err(error) => {
                        let text = error.to_string();
                        let notification = Notification::error(labels::fetch_failed(&text));
                        self.last_error = Some(text);
                        Effect::Notify(notification)
                    }
                }
            }
            Message::SpinnerTick => {
                if self.is_loading {
                    self.spinner_rotation =
                        animated_spinner::advance(self.spinner_rotation, SPINNER_STEP_RADIANS);
                }
                Effect::None
            }
        }
    }

    fn submit(&mut self) -> Effect {
        if self.is_loading {
            return Effect::None;
        }
        if self.url.is_empty() {
            return Effect::Notify(Notification::error(labels::NOTIFY_URL_REQUIRED));
        }

        self.is_loading = true;
        self.result = None;
        self.last_error = None;
        Effect::Submit(self.url.clone())
    }
}

/// Renders the page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let state = ctx.state;

    let title = Container::new(Text::new(labels::APP_TITLE).size(typography::TITLE_LG))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(title)
        .push(view_form(state));

    if ctx.show_error_banner {
        if let Some(message) = state.last_error() {
            content = content.push(error_banner::view(message));
        }
    }

    if let Some(info) = state.result() {
        content = content.push(view_result(info, state.active_tab));
    }

    let centered = container(content)
        .center_x(Length::Fill)
        .padding(spacing::XL);

    Container::new(scrollable(centered))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}

fn view_form(state: &State) -> Element<'_, Message> {
    let editable = !state.is_loading;

    let input = text_input(labels::URL_PLACEHOLDER, &state.url)
        .on_input_maybe(editable.then_some(Message::UrlChanged))
        .on_submit_maybe(editable.then_some(Message::Submit))
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .width(Length::Fill)
        .style(styles::text_input::url);

    let indicator: Element<'_, Message> = if state.is_loading {
        AnimatedSpinner::new(palette::WHITE, state.spinner_rotation, sizing::ICON_MD).into_element()
    } else {
        glyph(GlyphKind::Search, palette::WHITE, sizing::ICON_MD)
    };

    let submit = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(indicator)
            .push(Text::new(labels::SUBMIT_BUTTON).size(typography::BODY_LG)),
    )
    .on_press_maybe(editable.then_some(Message::Submit))
    .padding([spacing::SM, spacing::LG])
    .height(Length::Fixed(sizing::INPUT_HEIGHT))
    .style(styles::button::primary);

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(input)
        .push(submit)
        .into()
}

fn view_result(info: &CompanyInfo, active_tab: Tab) -> Element<'_, Message> {
    let tabs = Row::new()
        .spacing(spacing::XS)
        .push(tab_button(labels::TAB_BASIC, Tab::Basic, active_tab))
        .push(tab_button(labels::TAB_ANALYSIS, Tab::Analysis, active_tab));

    let body: Element<'_, Message> = match active_tab {
        Tab::Basic => BasicField::ALL
            .iter()
            .fold(Column::new().spacing(spacing::SM), |column, field| {
                column.push(info_item::view(
                    labels::basic_field(*field),
                    field.value(&info.basic_info),
                ))
            })
            .into(),
        Tab::Analysis => AnalysisField::ALL
            .iter()
            .fold(Column::new().spacing(spacing::SM), |column, field| {
                column.push(analysis_item::view(
                    labels::analysis_field(*field),
                    field.value(&info.analysis),
                    analysis_item::icon(*field),
                ))
            })
            .into(),
    };

    Container::new(Column::new().spacing(spacing::MD).push(tabs).push(body))
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}

fn tab_button(label: &'static str, tab: Tab, active_tab: Tab) -> Element<'static, Message> {
    let style: fn(&Theme, button::Status) -> button::Style = if tab == active_tab {
        styles::button::tab_active
    } else {
        styles::button::tab_inactive
    };

    button(Text::new(label).size(typography::BODY_LG))
        .on_press(Message::TabSelected(tab))
        .padding([spacing::XS, spacing::MD])
        .style(style)
        .into()
}
