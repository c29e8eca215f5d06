// SPDX-License-Identifier: MPL-2.0
//! Pixel transforms used by the viewer: rotation, mirroring, bilinear scaling
//! and thumbnail generation.

use image_rs::{imageops::FilterType, DynamicImage};

/// Direction of a quarter-turn rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDirection {
    Clockwise,
    Counterclockwise,
}

/// Axis an image is mirrored across.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipAxis {
    /// Mirror left-to-right.
    Horizontal,
    /// Mirror top-to-bottom.
    Vertical,
}

/// Rotate an image 90 degrees in `direction`.
pub fn rotate(image: &DynamicImage, direction: RotateDirection) -> DynamicImage {
    match direction {
        RotateDirection::Clockwise => image.rotate90(),
        RotateDirection::Counterclockwise => image.rotate270(),
    }
}

/// Mirror an image across `axis`.
pub fn flip(image: &DynamicImage, axis: FlipAxis) -> DynamicImage {
    match axis {
        FlipAxis::Horizontal => image.fliph(),
        FlipAxis::Vertical => image.flipv(),
    }
}

/// Scale to exactly `width` x `height` with bilinear interpolation.
///
/// Zero dimensions are bumped to 1 pixel.
pub fn scale_bilinear(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    image.resize_exact(width.max(1), height.max(1), FilterType::Triangle)
}

/// Dimensions of `width` x `height` scaled by `factor`, each at least 1 pixel.
///
/// When the longest edge would exceed `max_edge` both axes are shrunk by the
/// same ratio so that edge equals `max_edge`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scaled_dimensions(width: u32, height: u32, factor: f64, max_edge: u32) -> (u32, u32) {
    let mut target_w = f64::from(width) * factor;
    let mut target_h = f64::from(height) * factor;

    let longest = target_w.max(target_h);
    let max_edge = f64::from(max_edge.max(1));
    if longest > max_edge {
        let shrink = max_edge / longest;
        target_w *= shrink;
        target_h *= shrink;
    }

    (
        target_w.round().max(1.0) as u32,
        target_h.round().max(1.0) as u32,
    )
}

/// Dimensions of a thumbnail that fits in a `bound` x `bound` box.
///
/// The scale `min(bound / width, bound / height)` is applied to both axes, so
/// the aspect ratio is preserved. Images smaller than the box are enlarged.
pub fn thumbnail_dimensions(width: u32, height: u32, bound: u32) -> (u32, u32) {
    let bound = f64::from(bound.max(1));
    let scale = (bound / f64::from(width.max(1))).min(bound / f64::from(height.max(1)));
    scaled_dimensions(width, height, scale, u32::MAX)
}

/// Produce a thumbnail of `image` bounded by a `bound` x `bound` box.
pub fn make_thumbnail(image: &DynamicImage, bound: u32) -> DynamicImage {
    let (width, height) = thumbnail_dimensions(image.width(), image.height(), bound);
    scale_bilinear(image, width, height)
}
