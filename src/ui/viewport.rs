// SPDX-License-Identifier: MPL-2.0
//! Scrollable image viewport and the status line below it.

use crate::media::ImageData;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::viewer::ZoomFactor;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, Column, Container, Image, Scrollable, Text};
use iced::{alignment, Element, Length};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum Message {
    /// The empty-state button was pressed.
    OpenRequested,
}

/// Renders the zoomed bitmap at its pixel size, scrollable on both axes, or an
/// empty state inviting the user to open a file.
pub fn view(rendered: Option<&ImageData>) -> Element<'_, Message> {
    let Some(image) = rendered else {
        return empty_state();
    };

    let picture = Image::new(image.handle.clone())
        .width(Length::Fixed(image.width as f32))
        .height(Length::Fixed(image.height as f32));

    Scrollable::new(Container::new(picture).padding(spacing::XS))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Both {
            vertical: Scrollbar::new(),
            horizontal: Scrollbar::new(),
        })
        .into()
}

fn empty_state<'a>() -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("No image loaded").size(typography::BODY))
        .push(Text::new("Drop a file here or use File → Open").size(typography::CAPTION))
        .push(
            button(Text::new("Open…").size(typography::BODY))
                .on_press(Message::OpenRequested)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// What the status line describes.
pub struct StatusContext<'a> {
    pub path: Option<&'a Path>,
    /// Dimensions of the current (unzoomed) image.
    pub dimensions: Option<(u32, u32)>,
    pub zoom: ZoomFactor,
    pub selected: Option<usize>,
    pub total: usize,
}

/// Formats the status line text.
#[must_use]
pub fn status_text(ctx: &StatusContext<'_>) -> String {
    let Some(path) = ctx.path else {
        return "No image".to_string();
    };

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mut parts = vec![name];
    if let Some((width, height)) = ctx.dimensions {
        parts.push(format!("{width} × {height}"));
    }
    parts.push(ctx.zoom.to_string());
    if let Some(index) = ctx.selected {
        parts.push(format!("{} / {}", index + 1, ctx.total));
    } else if ctx.total > 0 {
        parts.push(format!("{} images", ctx.total));
    }

    parts.join("  |  ")
}

pub fn status_line<'a, M: 'a>(text: String) -> Element<'a, M> {
    Container::new(Text::new(text).size(typography::CAPTION))
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::toolbar)
        .into()
}
