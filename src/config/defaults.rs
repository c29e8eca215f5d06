// SPDX-License-Identifier: MPL-2.0
//! Centralized default values and bounds for configuration constants.

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom factor applied when an image is opened (1.0 = original size).
pub const DEFAULT_ZOOM_FACTOR: f64 = 1.0;

/// Multiplier applied by one "Zoom In" step; "Zoom Out" divides by it.
pub const DEFAULT_ZOOM_STEP: f64 = 1.1;

/// Smallest accepted zoom step multiplier.
pub const MIN_ZOOM_STEP: f64 = 1.01;

/// Largest accepted zoom step multiplier.
pub const MAX_ZOOM_STEP: f64 = 4.0;

/// Longest edge, in pixels, that a rendered bitmap may reach. At this cap a
/// square RGBA render is 256 MiB.
pub const MAX_RENDER_EDGE: u32 = 8_192;

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Edge of the square box thumbnails are fitted into.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 80;

pub const MIN_THUMBNAIL_SIZE: u32 = 16;

pub const MAX_THUMBNAIL_SIZE: u32 = 256;

// ==========================================================================
// Save Defaults
// ==========================================================================

/// JPEG quality used when saving.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

pub const MIN_JPEG_QUALITY: u8 = 1;

pub const MAX_JPEG_QUALITY: u8 = 100;
