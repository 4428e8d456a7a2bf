#![forbid(unsafe_code)]

//! Pixel-space primitives.

use serde::{Deserialize, Serialize};

/// A position in container pixel coordinates (origin at top-left).
///
/// Coordinates are reported by the presentation layer and may be negative
/// while a tile is dragged past the container edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    /// Distance from the container's top edge.
    pub top: f64,
    /// Distance from the container's left edge.
    pub left: f64,
}

impl PixelPoint {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    /// Origin of the container.
    #[inline]
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Absolute distances from the origin, with non-finite components
    /// collapsed to zero.
    #[must_use]
    pub fn magnitude(self) -> Self {
        Self {
            top: finite_abs(self.top),
            left: finite_abs(self.left),
        }
    }

    /// Translate by the given offsets.
    #[inline]
    #[must_use]
    pub fn offset(self, dtop: f64, dleft: f64) -> Self {
        Self::new(self.top + dtop, self.left + dleft)
    }
}

impl From<(f64, f64)> for PixelPoint {
    fn from((top, left): (f64, f64)) -> Self {
        Self { top, left }
    }
}

#[inline]
fn finite_abs(value: f64) -> f64 {
    if value.is_finite() { value.abs() } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_takes_absolute_values() {
        let p = PixelPoint::new(-12.5, -40.0).magnitude();
        assert_eq!(p, PixelPoint::new(12.5, 40.0));
    }

    #[test]
    fn magnitude_collapses_non_finite() {
        let p = PixelPoint::new(f64::NAN, f64::NEG_INFINITY).magnitude();
        assert_eq!(p, PixelPoint::origin());
    }

    #[test]
    fn offset_translates() {
        let p = PixelPoint::new(10.0, 20.0).offset(-5.0, 2.5);
        assert_eq!(p, PixelPoint::new(5.0, 22.5));
    }

    #[test]
    fn from_tuple() {
        assert_eq!(PixelPoint::from((1.0, 2.0)), PixelPoint::new(1.0, 2.0));
    }
}
