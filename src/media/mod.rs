// SPDX-License-Identifier: MPL-2.0
//! Codec layer: decoding, encoding and pixel transforms on top of the `image`
//! crate, plus the display handle used by the UI.

pub mod image;
pub mod image_transform;
pub mod save_format;

pub use image::{decode, ImageData};
pub use image_transform::{
    flip, make_thumbnail, rotate, scale_bilinear, scaled_dimensions, thumbnail_dimensions,
    FlipAxis, RotateDirection,
};
pub use save_format::{encode, SaveFormat};

/// Supported file extensions
pub mod extensions {
    /// Extensions offered by the open dialog.
    ///
    /// Decoding sniffs the content, so this list only drives dialog filters.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
    ];
}
