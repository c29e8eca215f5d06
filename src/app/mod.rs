// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the [`ViewerState`] and the cached render, and
//! translates messages from menus, shortcuts, dialogs and the thumbnail worker
//! into viewer operations.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::media::ImageData;
use crate::ui::banner::{self, Banner};
use crate::ui::menubar::Menu;
use crate::ui::theming::ThemeMode;
use crate::ui::{thumbnail_strip, viewport};
use crate::viewer::ViewerState;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

const APP_NAME: &str = "Glimpse";

/// Root Iced application state.
#[derive(Default)]
pub struct App {
    viewer: ViewerState,
    /// Display handle of the current render, refreshed after each change.
    rendered: Option<ImageData>,
    config: Config,
    theme_mode: ThemeMode,
    open_menu: Option<Menu>,
    banner: Option<Banner>,
    /// Generation of the thumbnail rebuild still in flight.
    pending_rebuild: Option<u64>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_path", &self.viewer.current_path())
            .field("thumbnails", &self.viewer.thumbnails().len())
            .field("pending_rebuild", &self.pending_rebuild)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 300;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and opens the file named on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        Self::with_config(flags, config, warning)
    }

    fn with_config(flags: Flags, config: Config, warning: Option<String>) -> (Self, Task<Message>) {
        let mut app = App {
            theme_mode: config.general.theme_mode,
            config,
            ..Self::default()
        };

        if let Some(message) = warning {
            log::warn!("{message}");
            app.banner = Some(Banner::warning("Settings not loaded", message));
        }

        let task = match flags.file_path {
            Some(path) => app.update(Message::OpenFileDialogResult(Some(PathBuf::from(path)))),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let file_name = self
            .viewer
            .current_path()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy());

        match file_name {
            Some(name) => format!("{name} - {APP_NAME}"),
            None => APP_NAME.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            viewer: &mut self.viewer,
            rendered: &mut self.rendered,
            config: &self.config,
            open_menu: &mut self.open_menu,
            banner: &mut self.banner,
            pending_rebuild: &mut self.pending_rebuild,
        };

        match message {
            Message::MenuBar(menu_message) => update::handle_menubar_message(&mut ctx, menu_message),
            Message::Shortcut(command) => update::handle_command(&mut ctx, command),
            Message::CloseMenu => {
                *ctx.open_menu = None;
                Task::none()
            }
            Message::Viewport(viewport::Message::OpenRequested) => {
                update::handle_command(&mut ctx, crate::ui::menubar::Command::Open)
            }
            Message::ThumbnailStrip(thumbnail_strip::Message::Clicked(index)) => {
                update::handle_select_thumbnail(&mut ctx, index)
            }
            Message::Banner(banner::Message::Dismiss) => {
                *ctx.banner = None;
                Task::none()
            }
            Message::NextThumbnail => update::handle_next_thumbnail(&mut ctx),
            Message::PreviousThumbnail => update::handle_previous_thumbnail(&mut ctx),
            Message::OpenFileDialogResult(path) => {
                update::handle_open_file_dialog_result(&mut ctx, path)
            }
            Message::SaveFileDialogResult(path) => {
                update::handle_save_file_dialog_result(&mut ctx, path)
            }
            Message::FileDropped(path) => update::open_path(&mut ctx, path),
            Message::ThumbnailsRebuilt { generation, result } => {
                update::handle_thumbnails_rebuilt(&mut ctx, generation, result)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            viewer: &self.viewer,
            rendered: self.rendered.as_ref(),
            banner: self.banner.as_ref(),
            open_menu: self.open_menu,
            thumbnail_size: self.config.thumbnail_size(),
            rebuilding: self.pending_rebuild.is_some(),
        })
    }
}
