// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.
//!
//! Every viewer operation runs here on the UI thread. The only background
//! work is the thumbnail rebuild, scheduled through [`spawn_rebuild`].

use super::Message;
use crate::config::Config;
use crate::directory_scanner::{self, RebuildOutcome, ThumbnailOptions};
use crate::error::Error;
use crate::media::{self, FlipAxis, ImageData, RotateDirection, SaveFormat};
use crate::ui::banner::Banner;
use crate::ui::menubar::{self, Command, Menu};
use crate::viewer::{RebuildTicket, RenderedBitmap, SaveOptions, ViewerState};
use iced::Task;
use std::path::PathBuf;

/// Mutable application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub viewer: &'a mut ViewerState,
    /// Display handle of the last render; rebuilt after every change.
    pub rendered: &'a mut Option<ImageData>,
    pub config: &'a Config,
    pub open_menu: &'a mut Option<Menu>,
    pub banner: &'a mut Option<Banner>,
    /// Generation of the rebuild still running, if any.
    pub pending_rebuild: &'a mut Option<u64>,
}

impl UpdateContext<'_> {
    /// Re-renders the current image at the current zoom.
    fn refresh(&mut self) {
        *self.rendered = match self.viewer.render() {
            RenderedBitmap::Empty => None,
            RenderedBitmap::Image(image) => Some(ImageData::from_dynamic(&image)),
        };
    }

    fn show_error(&mut self, error: &Error) {
        log::warn!("{error}");
        *self.banner = Some(Banner::from(error));
    }
}

// ===== Menu and shortcuts =====

pub fn handle_menubar_message(ctx: &mut UpdateContext<'_>, message: menubar::Message) -> Task<Message> {
    match menubar::update(message, ctx.open_menu) {
        menubar::Event::None => Task::none(),
        menubar::Event::Command(command) => handle_command(ctx, command),
    }
}

pub fn handle_command(ctx: &mut UpdateContext<'_>, command: Command) -> Task<Message> {
    *ctx.open_menu = None;

    match command {
        Command::Open => return open_file_dialog(ctx.viewer.current_path().map(PathBuf::from)),
        Command::Save => return save_file_dialog(ctx),
        Command::ZoomIn => ctx.viewer.zoom(ctx.config.zoom_step()),
        Command::ZoomOut => ctx.viewer.zoom(1.0 / ctx.config.zoom_step()),
        Command::ResetZoom => ctx.viewer.reset_zoom(),
        Command::RotateClockwise => ctx.viewer.rotate(RotateDirection::Clockwise),
        Command::RotateCounterclockwise => ctx.viewer.rotate(RotateDirection::Counterclockwise),
        Command::FlipHorizontal => ctx.viewer.flip(FlipAxis::Horizontal),
        Command::FlipVertical => ctx.viewer.flip(FlipAxis::Vertical),
    }

    ctx.refresh();
    Task::none()
}

// ===== Opening =====

/// Opens `path` and schedules the sibling rebuild. Decode failures go to the
/// banner and leave the viewer unchanged.
pub fn open_path(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    match ctx.viewer.open(&path) {
        Ok(ticket) => {
            *ctx.banner = None;
            ctx.refresh();
            *ctx.pending_rebuild = Some(ticket.generation);
            spawn_rebuild(ticket, ThumbnailOptions::from(ctx.config))
        }
        Err(error) => {
            ctx.show_error(&error);
            Task::none()
        }
    }
}

/// Runs [`directory_scanner::build_thumbnails`] on the blocking pool.
pub fn spawn_rebuild(ticket: RebuildTicket, options: ThumbnailOptions) -> Task<Message> {
    let generation = ticket.generation;

    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || directory_scanner::build_thumbnails(&ticket, options))
                .await
                .map_err(|e| Error::Io(format!("thumbnail worker failed: {e}")))?
        },
        move |result| Message::ThumbnailsRebuilt { generation, result },
    )
}

pub fn handle_thumbnails_rebuilt(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
    result: Result<RebuildOutcome, Error>,
) -> Task<Message> {
    match result {
        Ok(RebuildOutcome::Complete(batch)) => {
            let count = batch.entries.len();
            if ctx.viewer.apply_thumbnails(batch) {
                log::debug!("thumbnail strip rebuilt with {count} entries");
            }
        }
        Ok(RebuildOutcome::Cancelled) => {}
        Err(error) => {
            ctx.viewer.fail_rebuild(generation, &error);
        }
    }

    if *ctx.pending_rebuild == Some(generation) {
        *ctx.pending_rebuild = None;
    }
    Task::none()
}

fn open_file_dialog(current: Option<PathBuf>) -> Task<Message> {
    let mut dialog = rfd::AsyncFileDialog::new()
        .set_title("Open Image")
        .add_filter("Images", media::extensions::IMAGE_EXTENSIONS);

    if let Some(dir) = current.as_deref().and_then(|p| p.parent()) {
        if dir.is_dir() {
            dialog = dialog.set_directory(dir);
        }
    }

    Task::perform(
        async move {
            dialog
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

pub fn handle_open_file_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    match path {
        Some(path) => open_path(ctx, path),
        None => Task::none(),
    }
}

// ===== Saving =====

fn save_file_dialog(ctx: &UpdateContext<'_>) -> Task<Message> {
    if !ctx.viewer.has_image() {
        return Task::none();
    }

    let default_format = ctx.config.default_save_format();
    let mut dialog = rfd::AsyncFileDialog::new().set_title("Save Image As");

    // The default format's filter goes first so the dialog preselects it.
    let formats = std::iter::once(default_format)
        .chain(SaveFormat::all().iter().copied().filter(|f| *f != default_format));
    for format in formats {
        dialog = dialog.add_filter(format.label(), format.extensions());
    }

    if let Some(current) = ctx.viewer.current_path() {
        if let Some(dir) = current.parent().filter(|d| d.is_dir()) {
            dialog = dialog.set_directory(dir);
        }
        if let Some(stem) = current.file_stem().and_then(|s| s.to_str()) {
            dialog = dialog.set_file_name(format!("{stem}.{}", default_format.extension()));
        }
    }

    Task::perform(
        async move {
            dialog
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::SaveFileDialogResult,
    )
}

pub fn handle_save_file_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };

    if let Err(error) = ctx.viewer.save(&path, &SaveOptions::from(ctx.config)) {
        ctx.show_error(&error);
    }
    Task::none()
}

// ===== Thumbnail navigation =====

pub fn handle_select_thumbnail(ctx: &mut UpdateContext<'_>, index: usize) -> Task<Message> {
    let result = ctx.viewer.select_thumbnail(index);
    finish_navigation(ctx, result)
}

pub fn handle_next_thumbnail(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let result = ctx.viewer.next_thumbnail();
    finish_navigation(ctx, result)
}

pub fn handle_previous_thumbnail(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let result = ctx.viewer.previous_thumbnail();
    finish_navigation(ctx, result)
}

fn finish_navigation(ctx: &mut UpdateContext<'_>, result: crate::error::Result<()>) -> Task<Message> {
    match result {
        Ok(()) => *ctx.banner = None,
        Err(error) => ctx.show_error(&error),
    }
    ctx.refresh();
    Task::none()
}
