// SPDX-License-Identifier: MPL-2.0
//! Image decoding and conversion into display handles.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::{DynamicImage, ImageReader};
use std::path::Path;

/// A bitmap ready to be drawn by Iced.
///
/// The handle is built once; Iced caches the uploaded texture per handle, so
/// rebuilding it on every frame would re-upload the pixels.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Converts a decoded bitmap into a display handle.
    #[must_use]
    pub fn from_dynamic(dynamic: &DynamicImage) -> Self {
        let rgba = dynamic.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba(width, height, rgba.into_vec())
    }
}

/// Decodes the image at `path`.
///
/// The format is sniffed from the file contents, so a mislabelled extension
/// still decodes.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the file cannot be read, its format is not
/// recognised, or its data is corrupt.
pub fn decode<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();
    let decode_error = |message: String| Error::Decode(format!("{}: {message}", path.display()));

    ImageReader::open(path)
        .map_err(|e| decode_error(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| decode_error(e.to_string()))?
        .decode()
        .map_err(|e| decode_error(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{GenericImageView, Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn decode_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = decode(&image_path).expect("png should decode successfully");
        assert_eq!(data.dimensions(), (4, 2));
    }

    #[test]
    fn decode_sniffs_content_over_extension() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("actually_png.jpg");
        RgbaImage::from_pixel(3, 3, Rgba([0, 0, 255, 255]))
            .save_with_format(&image_path, image_rs::ImageFormat::Png)
            .expect("failed to write png");

        let data = decode(&image_path).expect("content sniffing should find png");
        assert_eq!(data.dimensions(), (3, 3));
    }

    #[test]
    fn decode_missing_image_returns_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match decode(&missing_path) {
            Err(Error::Decode(message)) => assert!(message.contains("does_not_exist.png")),
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn decode_invalid_png_bytes_returns_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match decode(&bad_path) {
            Err(Error::Decode(message)) => assert!(!message.is_empty()),
            other => panic!("expected Decode error for invalid png, got {other:?}"),
        }
    }

    #[test]
    fn image_data_keeps_dimensions() {
        let dynamic = DynamicImage::ImageRgba8(RgbaImage::new(7, 5));
        let data = ImageData::from_dynamic(&dynamic);
        assert_eq!((data.width, data.height), (7, 5));
    }
}
