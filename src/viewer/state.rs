// SPDX-License-Identifier: MPL-2.0
//! Display and navigation state of the viewer.
//!
//! [`ViewerState`] owns the current bitmap, its path, the zoom factor and the
//! sibling thumbnail strip. It knows nothing about the GUI: the application
//! maps user input onto these methods and draws whatever [`ViewerState::render`]
//! returns.

use super::thumbnails::{RebuildTicket, Thumbnail, ThumbnailBatch, ThumbnailStrip};
use super::zoom::ZoomFactor;
use crate::config::{Config, DEFAULT_JPEG_QUALITY, MAX_RENDER_EDGE};
use crate::error::{Error, Result};
use crate::media::{self, FlipAxis, RotateDirection, SaveFormat};
use image_rs::DynamicImage;
use std::path::{Path, PathBuf};

/// Encoder settings used by [`ViewerState::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOptions {
    /// Format used when the target path has no recognised extension.
    pub default_format: SaveFormat,
    pub jpeg_quality: u8,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            default_format: SaveFormat::default(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl From<&Config> for SaveOptions {
    fn from(config: &Config) -> Self {
        Self {
            default_format: config.default_save_format(),
            jpeg_quality: config.jpeg_quality(),
        }
    }
}

/// Output of [`ViewerState::render`].
#[derive(Debug, Clone)]
pub enum RenderedBitmap {
    /// Nothing is loaded.
    Empty,
    /// The current image scaled by the zoom factor.
    Image(DynamicImage),
}

impl RenderedBitmap {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, RenderedBitmap::Empty)
    }
}

/// The viewer core: current image, zoom and sibling thumbnail strip.
#[derive(Debug, Default)]
pub struct ViewerState {
    image: Option<DynamicImage>,
    path: Option<PathBuf>,
    zoom: ZoomFactor,
    thumbnails: ThumbnailStrip,
}

impl ViewerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Loading and saving =====

    /// Decodes `path` and makes it the current image.
    ///
    /// On success the zoom resets to 1.0 and a thumbnail rebuild for the
    /// file's directory is started; the returned ticket must be handed to a
    /// worker running [`crate::directory_scanner::build_thumbnails`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the file cannot be decoded. The state is
    /// left untouched in that case.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<RebuildTicket> {
        let path = path.as_ref();
        let image = media::decode(path)?;
        self.install(image, path.to_path_buf());
        log::info!("opened {}", path.display());

        // Siblings of the previous image must not stay navigable.
        self.thumbnails.clear();
        Ok(self.thumbnails.begin_rebuild(parent_directory(path)))
    }

    /// Encodes the current image to `path`. Does nothing if no image is
    /// loaded.
    ///
    /// The format follows the extension of `path`, falling back to
    /// `options.default_format`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>, options: &SaveOptions) -> Result<()> {
        let Some(image) = &self.image else {
            return Ok(());
        };
        let path = path.as_ref();
        let format = SaveFormat::from_path(path).unwrap_or(options.default_format);

        media::encode(image, path, format, options.jpeg_quality)?;
        log::info!("saved {} as {}", path.display(), format.label());
        Ok(())
    }

    // ===== Zoom =====

    /// Multiplies the zoom factor by `multiplier`.
    ///
    /// Multipliers that would make the factor zero, negative or non-finite
    /// are ignored.
    pub fn zoom(&mut self, multiplier: f64) {
        match self.zoom.scaled(multiplier) {
            Some(zoom) => self.zoom = zoom,
            None => log::warn!(
                "ignoring zoom multiplier {multiplier} (current zoom {})",
                self.zoom.value()
            ),
        }
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = ZoomFactor::default();
    }

    // ===== Rendering and transforms =====

    /// Returns the current image scaled by the zoom factor.
    ///
    /// Each edge is `round(edge * zoom)`, at least one pixel, using bilinear
    /// filtering. Output larger than [`MAX_RENDER_EDGE`] on its longest edge
    /// is shrunk uniformly to fit.
    #[must_use]
    pub fn render(&self) -> RenderedBitmap {
        let Some(image) = &self.image else {
            return RenderedBitmap::Empty;
        };

        let (width, height) = media::scaled_dimensions(
            image.width(),
            image.height(),
            self.zoom.value(),
            MAX_RENDER_EDGE,
        );
        RenderedBitmap::Image(media::scale_bilinear(image, width, height))
    }

    pub fn rotate(&mut self, direction: RotateDirection) {
        if let Some(image) = &self.image {
            self.image = Some(media::rotate(image, direction));
        }
    }

    pub fn flip(&mut self, axis: FlipAxis) {
        if let Some(image) = &self.image {
            self.image = Some(media::flip(image, axis));
        }
    }

    // ===== Thumbnails =====

    /// Installs a finished rebuild if it is still the current generation.
    ///
    /// Returns `false` for stale batches, which are dropped.
    pub fn apply_thumbnails(&mut self, batch: ThumbnailBatch) -> bool {
        if !self.thumbnails.is_current(batch.generation) {
            log::debug!(
                "discarding stale thumbnail batch {} (current {})",
                batch.generation,
                self.thumbnails.current_generation()
            );
            return false;
        }

        log::debug!(
            "applying {} thumbnails for {}",
            batch.entries.len(),
            batch.directory.display()
        );
        self.thumbnails.replace(batch.entries);
        true
    }

    /// Handles a rebuild whose directory could not be listed by emptying the
    /// strip. Stale failures are ignored.
    pub fn fail_rebuild(&mut self, generation: u64, error: &Error) -> bool {
        if !self.thumbnails.is_current(generation) {
            return false;
        }

        log::warn!("could not list sibling images: {error}");
        self.thumbnails.clear();
        true
    }

    /// Selects thumbnail `index` and opens its image.
    ///
    /// Indices outside the strip, negative ones included, clear the selection
    /// and leave the image alone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the sibling can no longer be decoded. The
    /// selection still moves to `index`.
    pub fn select_thumbnail<I: TryInto<usize>>(&mut self, index: I) -> Result<()> {
        let Some(index) = index.try_into().ok().filter(|&i| i < self.thumbnails.len()) else {
            self.thumbnails.select(None);
            return Ok(());
        };

        self.thumbnails.select(Some(index));
        let Some(path) = self.thumbnails.get(index).map(|t| t.path.clone()) else {
            return Ok(());
        };

        let image = media::decode(&path)?;
        self.install(image, path);
        Ok(())
    }

    /// Selects the next thumbnail, wrapping to the first.
    ///
    /// # Errors
    ///
    /// See [`ViewerState::select_thumbnail`].
    pub fn next_thumbnail(&mut self) -> Result<()> {
        match self.thumbnails.next_index() {
            Some(index) => self.select_thumbnail(index),
            None => Ok(()),
        }
    }

    /// Selects the previous thumbnail, wrapping to the last.
    ///
    /// # Errors
    ///
    /// See [`ViewerState::select_thumbnail`].
    pub fn previous_thumbnail(&mut self) -> Result<()> {
        match self.thumbnails.previous_index() {
            Some(index) => self.select_thumbnail(index),
            None => Ok(()),
        }
    }

    // ===== Accessors =====

    #[must_use]
    pub fn image(&self) -> Option<&DynamicImage> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    #[must_use]
    pub fn current_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    pub fn zoom_factor(&self) -> ZoomFactor {
        self.zoom
    }

    #[must_use]
    pub fn thumbnails(&self) -> &[Thumbnail] {
        self.thumbnails.entries()
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.thumbnails.selected()
    }

    #[must_use]
    pub fn current_generation(&self) -> u64 {
        self.thumbnails.current_generation()
    }

    /// Swaps in a freshly decoded image; the previous bitmap is dropped here.
    fn install(&mut self, image: DynamicImage, path: PathBuf) {
        self.image = Some(image);
        self.path = Some(path);
        self.zoom = ZoomFactor::default();
    }
}

/// Directory whose siblings belong in the strip. A bare file name resolves
/// to the working directory.
fn parent_directory(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
