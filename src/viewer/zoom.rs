// SPDX-License-Identifier: MPL-2.0
//! Zoom factor newtype.

use crate::config::DEFAULT_ZOOM_FACTOR;
use std::fmt;

/// Display scale of the current image, guaranteed positive and finite.
///
/// `1.0` shows the image at its original size. There is no upper or lower
/// clamp beyond that; the render step bounds the output size instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor(f64);

impl ZoomFactor {
    /// Creates a zoom factor, rejecting zero, negative and non-finite values.
    #[must_use]
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    /// Returns the raw multiplier.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the zoom as a percentage (e.g., 1.0 → 100%).
    #[must_use]
    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }

    /// Multiplies by `multiplier`, or `None` if the result would not be a
    /// valid zoom factor.
    #[must_use]
    pub fn scaled(self, multiplier: f64) -> Option<Self> {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return None;
        }
        Self::new(self.0 * multiplier)
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_FACTOR)
    }
}

impl fmt::Display for ZoomFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F64_EPSILON};

    #[test]
    fn default_is_original_size() {
        let zoom = ZoomFactor::default();
        assert_abs_diff_eq!(zoom.value(), 1.0, epsilon = F64_EPSILON);
        assert_eq!(zoom.to_string(), "100%");
    }

    #[test]
    fn new_rejects_invalid_values() {
        assert!(ZoomFactor::new(0.0).is_none());
        assert!(ZoomFactor::new(-1.0).is_none());
        assert!(ZoomFactor::new(f64::NAN).is_none());
        assert!(ZoomFactor::new(f64::INFINITY).is_none());
        assert!(ZoomFactor::new(0.25).is_some());
    }

    #[test]
    fn scaled_multiplies() {
        let zoom = ZoomFactor::default()
            .scaled(1.1)
            .and_then(|z| z.scaled(1.1))
            .expect("valid multipliers");
        assert_abs_diff_eq!(zoom.value(), 1.21, epsilon = 1e-9);
    }

    #[test]
    fn scaled_rejects_bad_multipliers() {
        let zoom = ZoomFactor::default();
        assert!(zoom.scaled(0.0).is_none());
        assert!(zoom.scaled(-2.0).is_none());
        assert!(zoom.scaled(f64::NAN).is_none());
        assert!(zoom.scaled(f64::INFINITY).is_none());
    }

    #[test]
    fn scaled_rejects_overflow() {
        let huge = ZoomFactor::new(f64::MAX / 2.0).expect("finite");
        assert!(huge.scaled(4.0).is_none());
    }

    #[test]
    fn display_shows_rounded_percent() {
        let zoom = ZoomFactor::new(1.1).expect("valid");
        assert_eq!(zoom.to_string(), "110%");
    }
}
