// SPDX-License-Identifier: MPL-2.0
//! `glimpse` is a minimal image viewer built with the Iced GUI framework.
//!
//! It opens an image, shows it zoomed, rotated or mirrored in a scrollable
//! viewport, lists the decodable images next to it in a thumbnail strip, and
//! saves the result. The display state lives in [`viewer::ViewerState`],
//! which has no GUI dependency and is driven by [`app`].

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod media;
pub mod ui;
pub mod viewer;

#[cfg(test)]
pub mod test_utils;
