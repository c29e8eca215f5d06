// SPDX-License-Identifier: MPL-2.0
//! Horizontal strip of clickable sibling thumbnails.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::viewer::Thumbnail;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, Container, Image, Row, Scrollable, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the strip.
pub struct ViewContext<'a> {
    pub thumbnails: &'a [Thumbnail],
    pub selected: Option<usize>,
    /// Bounding box edge the thumbnails were generated with.
    pub size: u32,
    /// A rebuild is still running for the current directory.
    pub loading: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Clicked(usize),
}

/// Height of the strip for thumbnails bounded by `size`.
#[must_use]
pub fn strip_height(size: u32) -> f32 {
    size as f32 + 2.0 * (sizing::THUMBNAIL_PADDING + spacing::XS) + spacing::SM
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let height = Length::Fixed(strip_height(ctx.size));

    if ctx.thumbnails.is_empty() {
        let hint = if ctx.loading {
            "Loading thumbnails…"
        } else {
            "No sibling images"
        };
        return Container::new(Text::new(hint).size(typography::CAPTION))
            .width(Length::Fill)
            .height(height)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::strip)
            .into();
    }

    let slot = ctx.size as f32;
    let row = ctx
        .thumbnails
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::XS), |row, (index, thumb)| {
            let image = Image::new(thumb.image.handle.clone())
                .width(Length::Fixed(thumb.image.width as f32))
                .height(Length::Fixed(thumb.image.height as f32));

            let framed = Container::new(image)
                .width(Length::Fixed(slot))
                .height(Length::Fixed(slot))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center);

            row.push(
                button(framed)
                    .padding(sizing::THUMBNAIL_PADDING)
                    .on_press(Message::Clicked(index))
                    .style(styles::button::thumbnail(ctx.selected == Some(index))),
            )
        })
        .padding(spacing::XS);

    let scroll = Scrollable::new(row)
        .width(Length::Fill)
        .direction(Direction::Horizontal(Scrollbar::new()));

    Container::new(scroll)
        .width(Length::Fill)
        .height(height)
        .style(styles::container::strip)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_height_grows_with_thumbnail_size() {
        assert!(strip_height(80) > 80.0);
        assert!(strip_height(120) > strip_height(80));
    }
}
