// SPDX-License-Identifier: MPL-2.0
//! Loading of user preferences stored in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[display]` - Zoom step multiplier
//! - `[thumbnails]` - Thumbnail bounding box and sibling ordering
//! - `[save]` - Fallback output format and JPEG quality
//!
//! Every field is optional; accessors on [`Config`] fill in defaults and clamp
//! values into their supported range so a hand-edited file cannot request
//! nonsensical settings.
//!
//! # Examples
//!
//! ```no_run
//! use glimpse::config;
//!
//! let (config, _warning) = config::load();
//! assert!(config.zoom_step() > 1.0);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::media::SaveFormat;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Order in which sibling images appear in the thumbnail strip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Whatever order the operating system enumerates the directory in.
    #[default]
    Directory,
    Alphabetical,
    ModifiedDate,
}

// =============================================================================
// Section Structs
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Multiplier applied per "Zoom In" step.
    #[serde(default = "default_zoom_step", skip_serializing_if = "Option::is_none")]
    pub zoom_step: Option<f64>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            zoom_step: default_zoom_step(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThumbnailConfig {
    /// Edge of the square box thumbnails are fitted into.
    #[serde(
        default = "default_thumbnail_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            size: default_thumbnail_size(),
            sort_order: Some(SortOrder::default()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaveConfig {
    /// Format used when the chosen file name has no recognised extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_format: Option<SaveFormat>,

    #[serde(
        default = "default_jpeg_quality",
        skip_serializing_if = "Option::is_none"
    )]
    pub jpeg_quality: Option<u8>,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            default_format: Some(SaveFormat::default()),
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub thumbnails: ThumbnailConfig,

    #[serde(default)]
    pub save: SaveConfig,
}

impl Config {
    /// Zoom step multiplier, clamped to `MIN_ZOOM_STEP..=MAX_ZOOM_STEP`.
    pub fn zoom_step(&self) -> f64 {
        let step = self.display.zoom_step.unwrap_or(DEFAULT_ZOOM_STEP);
        if step.is_finite() {
            step.clamp(MIN_ZOOM_STEP, MAX_ZOOM_STEP)
        } else {
            DEFAULT_ZOOM_STEP
        }
    }

    pub fn thumbnail_size(&self) -> u32 {
        self.thumbnails
            .size
            .unwrap_or(DEFAULT_THUMBNAIL_SIZE)
            .clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE)
    }

    pub fn sort_order(&self) -> SortOrder {
        self.thumbnails.sort_order.unwrap_or_default()
    }

    pub fn default_save_format(&self) -> SaveFormat {
        self.save.default_format.unwrap_or_default()
    }

    pub fn jpeg_quality(&self) -> u8 {
        self.save
            .jpeg_quality
            .unwrap_or(DEFAULT_JPEG_QUALITY)
            .clamp(MIN_JPEG_QUALITY, MAX_JPEG_QUALITY)
    }
}

fn default_zoom_step() -> Option<f64> {
    Some(DEFAULT_ZOOM_STEP)
}

fn default_thumbnail_size() -> Option<u32> {
    Some(DEFAULT_THUMBNAIL_SIZE)
}

fn default_jpeg_quality() -> Option<u8> {
    Some(DEFAULT_JPEG_QUALITY)
}

// =============================================================================
// Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns `(config, warning)`. A missing file silently yields defaults; an
/// unreadable or malformed file yields defaults plus a warning for the user.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            log::warn!("ignoring config file {}: {err}", path.display());
            (
                Config::default(),
                Some(format!(
                    "Settings file {} could not be read; defaults are in use.",
                    path.display()
                )),
            )
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
