//! The bounding box a user draws: the only geometry the editor manipulates.

use thiserror::Error;

use super::extent::{Coordinate, Extent, ExtentError};

/// Errors raised for geometry that cannot become a [`Rectangle`].
///
/// Both variants are recoverable: callers report them and keep whatever
/// selection they had before.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GeometryError {
    /// The text is not a geometry encoding, or the geometry is not a single
    /// axis-aligned rectangle.
    #[error("malformed geometry: {0}")]
    Malformed(String),

    /// The rectangle has no area.
    #[error("degenerate geometry: width {width}, height {height}")]
    Degenerate { width: f64, height: f64 },
}

impl From<ExtentError> for GeometryError {
    fn from(err: ExtentError) -> Self {
        match err {
            ExtentError::NonFinite => {
                GeometryError::Malformed("coordinates must be finite numbers".to_string())
            }
            ExtentError::Degenerate { width, height } => GeometryError::Degenerate { width, height },
        }
    }
}

/// An axis-aligned box in projection coordinates with positive area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    extent: Extent,
}

impl Rectangle {
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for zero or negative width/height
    /// and [`GeometryError::Malformed`] for non-finite bounds.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self, GeometryError> {
        Ok(Self { extent: Extent::new(min_x, min_y, max_x, max_y)? })
    }

    /// Builds the rectangle between two opposite corners, in any order.
    ///
    /// # Errors
    ///
    /// Same as [`Rectangle::new`].
    pub fn from_corners(a: Coordinate, b: Coordinate) -> Result<Self, GeometryError> {
        Ok(Self { extent: Extent::from_corners(a, b)? })
    }

    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    /// The closed exterior ring, starting at the lower-left corner:
    /// lower-left, upper-left, upper-right, lower-right, lower-left.
    pub fn ring(&self) -> [Coordinate; 5] {
        let e = &self.extent;
        let lower_left = Coordinate::new(e.min_x(), e.min_y());
        [
            lower_left,
            Coordinate::new(e.min_x(), e.max_y()),
            Coordinate::new(e.max_x(), e.max_y()),
            Coordinate::new(e.max_x(), e.min_y()),
            lower_left,
        ]
    }

    /// Compares the four bounds within an absolute tolerance.
    pub fn approx_eq(&self, other: &Rectangle, tolerance: f64) -> bool {
        self.extent.approx_eq(&other.extent, tolerance)
    }
}

impl From<Rectangle> for Extent {
    fn from(rect: Rectangle) -> Self {
        rect.extent
    }
}

impl From<Extent> for Rectangle {
    fn from(extent: Extent) -> Self {
        Self { extent }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_area_as_degenerate() {
        assert_eq!(
            Rectangle::new(1.0, 51.0, 1.0, 52.0),
            Err(GeometryError::Degenerate { width: 0.0, height: 1.0 })
        );
    }

    #[test]
    fn test_new_rejects_nan_as_malformed() {
        assert!(matches!(
            Rectangle::new(f64::NAN, 51.0, 1.0, 52.0),
            Err(GeometryError::Malformed(_))
        ));
    }

    #[test]
    fn test_ring_is_closed_and_starts_lower_left() {
        let rect = Rectangle::new(-1.0, 51.0, 1.0, 52.0).unwrap();
        let ring = rect.ring();
        assert_eq!(ring[0], ring[4]);
        assert_eq!(ring[0], Coordinate::new(-1.0, 51.0));
        assert_eq!(ring[1], Coordinate::new(-1.0, 52.0));
        assert_eq!(ring[2], Coordinate::new(1.0, 52.0));
        assert_eq!(ring[3], Coordinate::new(1.0, 51.0));
    }
}
