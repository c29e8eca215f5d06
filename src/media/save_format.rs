// SPDX-License-Identifier: MPL-2.0
//! Output formats offered by "Save" and the encoder behind them.
//!
//! The format follows the extension of the chosen file name. Names without a
//! recognised extension fall back to the configured default (JPEG unless the
//! user changed it).

use crate::error::{Error, Result};
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::{DynamicImage, ImageFormat};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SaveFormat {
    /// Lossy; alpha is dropped.
    #[default]
    Jpeg,
    Png,
    Bmp,
    Tiff,
}

impl SaveFormat {
    /// Returns the canonical file extension for this format.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            SaveFormat::Jpeg => "jpg",
            SaveFormat::Png => "png",
            SaveFormat::Bmp => "bmp",
            SaveFormat::Tiff => "tiff",
        }
    }

    /// Extensions accepted for this format, used for dialog filters.
    #[must_use]
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            SaveFormat::Jpeg => &["jpg", "jpeg"],
            SaveFormat::Png => &["png"],
            SaveFormat::Bmp => &["bmp"],
            SaveFormat::Tiff => &["tif", "tiff"],
        }
    }

    /// Human-readable name shown in file dialogs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SaveFormat::Jpeg => "JPEG",
            SaveFormat::Png => "PNG",
            SaveFormat::Bmp => "BMP",
            SaveFormat::Tiff => "TIFF",
        }
    }

    #[must_use]
    pub fn all() -> &'static [SaveFormat] {
        &[
            SaveFormat::Jpeg,
            SaveFormat::Png,
            SaveFormat::Bmp,
            SaveFormat::Tiff,
        ]
    }

    #[must_use]
    pub fn from_extension(ext: &str) -> Option<SaveFormat> {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" => Some(SaveFormat::Jpeg),
            "png" => Some(SaveFormat::Png),
            "bmp" => Some(SaveFormat::Bmp),
            "tif" | "tiff" => Some(SaveFormat::Tiff),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<SaveFormat> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    fn image_format(self) -> ImageFormat {
        match self {
            SaveFormat::Jpeg => ImageFormat::Jpeg,
            SaveFormat::Png => ImageFormat::Png,
            SaveFormat::Bmp => ImageFormat::Bmp,
            SaveFormat::Tiff => ImageFormat::Tiff,
        }
    }
}

/// Encodes `image` to `path` in `format`.
///
/// # Errors
///
/// Returns [`Error::Encode`] if the file cannot be created or encoding fails.
pub fn encode(
    image: &DynamicImage,
    path: &Path,
    format: SaveFormat,
    jpeg_quality: u8,
) -> Result<()> {
    match format {
        SaveFormat::Jpeg => {
            let file = File::create(path).map_err(|e| encode_error(path, e))?;
            let mut writer = BufWriter::new(file);
            let encoder = JpegEncoder::new_with_quality(&mut writer, jpeg_quality);
            image
                .to_rgb8()
                .write_with_encoder(encoder)
                .map_err(|e| encode_error(path, e))?;
            writer.flush().map_err(|e| encode_error(path, e))?;
        }
        other => {
            image
                .to_rgba8()
                .save_with_format(path, other.image_format())
                .map_err(|e| encode_error(path, e))?;
        }
    }

    Ok(())
}

fn encode_error(path: &Path, err: impl std::fmt::Display) -> Error {
    Error::Encode(format!("{}: {err}", path.display()))
}
