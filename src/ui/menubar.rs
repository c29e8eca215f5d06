// SPDX-License-Identifier: MPL-2.0
//! Menu bar with the File, View and Image menus.
//!
//! Each menu entry maps to one [`Command`]. Keyboard accelerators resolve to
//! the same commands through [`Command::from_shortcut`], so the application
//! handles both input paths in one place.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::keyboard::{Key, Modifiers};
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Top-level menus, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    File,
    View,
    Image,
}

impl Menu {
    pub const ALL: [Menu; 3] = [Menu::File, Menu::View, Menu::Image];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Menu::File => "File",
            Menu::View => "View",
            Menu::Image => "Image",
        }
    }

    #[must_use]
    pub fn commands(self) -> &'static [Command] {
        match self {
            Menu::File => &[Command::Open, Command::Save],
            Menu::View => &[Command::ZoomIn, Command::ZoomOut, Command::ResetZoom],
            Menu::Image => &[
                Command::RotateClockwise,
                Command::RotateCounterclockwise,
                Command::FlipHorizontal,
                Command::FlipVertical,
            ],
        }
    }
}

/// User-invokable viewer commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Open,
    Save,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    RotateClockwise,
    RotateCounterclockwise,
    FlipHorizontal,
    FlipVertical,
}

impl Command {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Command::Open => "Open…",
            Command::Save => "Save…",
            Command::ZoomIn => "Zoom In",
            Command::ZoomOut => "Zoom Out",
            Command::ResetZoom => "Reset Zoom",
            Command::RotateClockwise => "Rotate Clockwise",
            Command::RotateCounterclockwise => "Rotate Counterclockwise",
            Command::FlipHorizontal => "Flip Horizontally",
            Command::FlipVertical => "Flip Vertically",
        }
    }

    /// Accelerator hint shown next to the label.
    #[must_use]
    pub fn shortcut_hint(self) -> &'static str {
        match self {
            Command::Open => "Ctrl+O",
            Command::Save => "Ctrl+S",
            Command::ZoomIn => "Ctrl++",
            Command::ZoomOut => "Ctrl+-",
            Command::ResetZoom => "Ctrl+0",
            Command::RotateClockwise => "Ctrl+R",
            Command::RotateCounterclockwise => "Ctrl+L",
            Command::FlipHorizontal => "Ctrl+H",
            Command::FlipVertical => "Ctrl+V",
        }
    }

    /// Whether the command does anything without a loaded image.
    #[must_use]
    pub fn needs_image(self) -> bool {
        !matches!(self, Command::Open)
    }

    /// Resolves a key press to a command. All accelerators use the platform
    /// command modifier (Ctrl, or Cmd on macOS).
    #[must_use]
    pub fn from_shortcut(key: &Key, modifiers: Modifiers) -> Option<Command> {
        if !modifiers.command() {
            return None;
        }
        let Key::Character(c) = key else {
            return None;
        };

        match c.to_lowercase().as_str() {
            "o" => Some(Command::Open),
            "s" => Some(Command::Save),
            "+" | "=" => Some(Command::ZoomIn),
            "-" => Some(Command::ZoomOut),
            "0" => Some(Command::ResetZoom),
            "r" => Some(Command::RotateClockwise),
            "l" => Some(Command::RotateCounterclockwise),
            "h" => Some(Command::FlipHorizontal),
            "v" => Some(Command::FlipVertical),
            _ => None,
        }
    }
}

/// Contextual data needed to render the menu bar.
pub struct ViewContext {
    pub open_menu: Option<Menu>,
    pub has_image: bool,
}

/// Messages emitted by the menu bar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu(Menu),
    CloseMenu,
    Invoke(Command),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Command(Command),
}

/// Process a menu bar message and return the corresponding event.
pub fn update(message: Message, open_menu: &mut Option<Menu>) -> Event {
    match message {
        Message::ToggleMenu(menu) => {
            *open_menu = if *open_menu == Some(menu) {
                None
            } else {
                Some(menu)
            };
            Event::None
        }
        Message::CloseMenu => {
            *open_menu = None;
            Event::None
        }
        Message::Invoke(command) => {
            *open_menu = None;
            Event::Command(command)
        }
    }
}

/// Render the menu bar and, below it, the open dropdown if any.
pub fn view(ctx: ViewContext) -> Element<'static, Message> {
    let titles = Menu::ALL.iter().fold(
        Row::new().spacing(spacing::XXS).align_y(Vertical::Center),
        |row, &menu| {
            let open = ctx.open_menu == Some(menu);
            row.push(
                button(Text::new(menu.label()).size(typography::BODY))
                    .on_press(Message::ToggleMenu(menu))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::button::menu_item(open)),
            )
        },
    );

    let bar = Container::new(titles)
        .width(Length::Fill)
        .padding(spacing::XXS)
        .style(styles::container::toolbar);

    let mut content = Column::new().width(Length::Fill).push(bar);

    if let Some(menu) = ctx.open_menu {
        content = content.push(build_dropdown(menu, ctx.has_image));
    }

    content.into()
}

fn build_dropdown(menu: Menu, has_image: bool) -> Element<'static, Message> {
    let items = menu
        .commands()
        .iter()
        .fold(Column::new().spacing(spacing::XXS), |column, &command| {
            let enabled = has_image || !command.needs_image();
            column.push(build_menu_item(command, enabled))
        });

    Container::new(items)
        .padding(spacing::XXS)
        .style(styles::container::dropdown)
        .into()
}

fn build_menu_item(command: Command, enabled: bool) -> Element<'static, Message> {
    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            Text::new(command.label())
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(Text::new(command.shortcut_hint()).size(typography::CAPTION));

    button(row)
        .width(Length::Fixed(sizing::MENU_WIDTH))
        .padding([spacing::XXS, spacing::XS])
        .on_press_maybe(enabled.then_some(Message::Invoke(command)))
        .style(styles::button::menu_item(false))
        .into()
}
