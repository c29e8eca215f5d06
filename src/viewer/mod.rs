// SPDX-License-Identifier: MPL-2.0
//! GUI-independent viewer core.

pub mod state;
pub mod thumbnails;
pub mod zoom;

pub use state::{RenderedBitmap, SaveOptions, ViewerState};
pub use thumbnails::{CancelToken, RebuildTicket, Thumbnail, ThumbnailBatch, ThumbnailStrip};
pub use zoom::ZoomFactor;
