// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layout, top to bottom: menu bar, optional banner, viewport, status line,
//! thumbnail strip.

use super::Message;
use crate::media::ImageData;
use crate::ui::banner::{self, Banner};
use crate::ui::menubar::{self, Menu};
use crate::ui::thumbnail_strip;
use crate::ui::viewport::{self, StatusContext};
use crate::viewer::ViewerState;
use iced::widget::{Column, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub viewer: &'a ViewerState,
    pub rendered: Option<&'a ImageData>,
    pub banner: Option<&'a Banner>,
    pub open_menu: Option<Menu>,
    pub thumbnail_size: u32,
    pub rebuilding: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let viewer = ctx.viewer;

    let menu = menubar::view(menubar::ViewContext {
        open_menu: ctx.open_menu,
        has_image: viewer.has_image(),
    })
    .map(Message::MenuBar);

    let status = viewport::status_text(&StatusContext {
        path: viewer.current_path(),
        dimensions: viewer.image().map(|img| (img.width(), img.height())),
        zoom: viewer.zoom_factor(),
        selected: viewer.selected(),
        total: viewer.thumbnails().len(),
    });

    let strip = thumbnail_strip::view(thumbnail_strip::ViewContext {
        thumbnails: viewer.thumbnails(),
        selected: viewer.selected(),
        size: ctx.thumbnail_size,
        loading: ctx.rebuilding,
    })
    .map(Message::ThumbnailStrip);

    let mut column = Column::new().width(Length::Fill).height(Length::Fill).push(menu);

    if let Some(banner) = ctx.banner {
        column = column.push(banner::view(banner).map(Message::Banner));
    }

    column = column
        .push(
            Container::new(viewport::view(ctx.rendered).map(Message::Viewport))
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(viewport::status_line(status))
        .push(strip);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
