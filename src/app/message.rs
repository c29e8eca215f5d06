// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::directory_scanner::RebuildOutcome;
use crate::error::Error;
use crate::ui::{banner, menubar, thumbnail_strip, viewport};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded; the rest come from dialogs, workers and native events.
#[derive(Debug, Clone)]
pub enum Message {
    MenuBar(menubar::Message),
    Viewport(viewport::Message),
    ThumbnailStrip(thumbnail_strip::Message),
    Banner(banner::Message),
    /// A keyboard accelerator was pressed.
    Shortcut(menubar::Command),
    NextThumbnail,
    PreviousThumbnail,
    /// Escape pressed; closes an open menu.
    CloseMenu,
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// Result from the save file dialog.
    SaveFileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// A background thumbnail rebuild finished.
    ThumbnailsRebuilt {
        generation: u64,
        result: Result<RebuildOutcome, Error>,
    },
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional image path to open on startup.
    pub file_path: Option<String>,
}
