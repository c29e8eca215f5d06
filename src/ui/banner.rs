// SPDX-License-Identifier: MPL-2.0
//! Dismissible banner shown above the viewport for errors and warnings.
//!
//! Only one banner is visible at a time; a newer one replaces the old.

use crate::error::Error;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Something the user asked for did not happen.
    Error,
    /// Startup problem that fell back to defaults.
    Warning,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Error => palette::ERROR_500,
            Severity::Warning => palette::WARNING_500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Banner {
    #[must_use]
    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            title: title.into(),
            message: message.into(),
        }
    }
}

impl From<&Error> for Banner {
    fn from(error: &Error) -> Self {
        Self {
            severity: Severity::Error,
            title: error.title().to_string(),
            message: error.message().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss,
}

pub fn view(banner: &Banner) -> Element<'_, Message> {
    let text = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(banner.title.as_str()).size(typography::BODY))
        .push(Text::new(banner.message.as_str()).size(typography::CAPTION));

    let dismiss = button(Text::new("✕").size(typography::BODY))
        .on_press(Message::Dismiss)
        .padding(spacing::XXS)
        .style(styles::button::dismiss);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(text).width(Length::Fill))
        .push(dismiss);

    Container::new(
        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(styles::container::banner(banner.severity.color())),
    )
    .padding([spacing::XXS, spacing::XS])
    .width(Length::Fill)
    .into()
}
