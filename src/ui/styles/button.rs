// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Flat button used for menu titles and dropdown entries.
///
/// `open` highlights a menu title whose dropdown is showing.
pub fn menu_item(open: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = theme.extended_palette().background.base;
        let hover = Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        };

        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(hover)),
            _ if open => Some(Background::Color(hover)),
            _ => None,
        };
        let text_color = match status {
            button::Status::Disabled => Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            _ => base.text,
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Frame around a thumbnail; the selected one gets a brand-colored border.
pub fn thumbnail(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let weak = theme.extended_palette().background.weak;

        let (border_color, width) = match (selected, status) {
            (true, _) => (palette::PRIMARY_500, border::WIDTH_MD),
            (false, button::Status::Hovered) => (palette::PRIMARY_400, border::WIDTH_SM),
            (false, _) => (weak.color, border::WIDTH_SM),
        };

        button::Style {
            background: Some(Background::Color(weak.color)),
            text_color: weak.text,
            border: Border {
                color: border_color,
                width,
                radius: radius::SM.into(),
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Small transparent button, used to dismiss banners.
pub fn dismiss(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Filled brand-colored button for the main call to action.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        button::Status::Disabled => palette::GRAY_200,
        _ => palette::PRIMARY_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_thumbnail_uses_brand_border() {
        let style = thumbnail(true)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.border.color, palette::PRIMARY_500);
        assert_eq!(style.border.width, border::WIDTH_MD);
    }

    #[test]
    fn unselected_thumbnail_has_thin_border() {
        let style = thumbnail(false)(&Theme::Light, button::Status::Active);
        assert_eq!(style.border.width, border::WIDTH_SM);
    }

    #[test]
    fn open_menu_title_is_highlighted() {
        let open = menu_item(true)(&Theme::Dark, button::Status::Active);
        let closed = menu_item(false)(&Theme::Dark, button::Status::Active);
        assert!(open.background.is_some());
        assert!(closed.background.is_none());
    }

    #[test]
    fn dismiss_is_transparent_until_hovered() {
        assert!(dismiss(&Theme::Dark, button::Status::Active).background.is_none());
        assert!(dismiss(&Theme::Dark, button::Status::Hovered).background.is_some());
    }
}
