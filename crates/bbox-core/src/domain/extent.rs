//! Coordinates and axis-aligned extents in projection units.
//!
//! An [`Extent`] is the one shape this crate reasons about.  It frames the
//! projection's valid area, the visible part of the map, a single tile, and
//! (wrapped in [`crate::Rectangle`]) the user's selection.
//!
//! Extents are always non-degenerate: `min_x < max_x` and `min_y < max_y`.
//! Code that may produce an empty area works with `Option<Extent>` instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when four numbers do not describe a usable extent.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExtentError {
    /// One of the bounds is NaN or infinite.
    #[error("extent bounds must be finite numbers")]
    NonFinite,

    /// The extent has zero or negative width or height.
    #[error("degenerate extent: width {width}, height {height} (both must be positive)")]
    Degenerate { width: f64, height: f64 },
}

/// A point in projection coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

/// An axis-aligned box `(min_x, min_y, max_x, max_y)` in projection units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Extent {
    /// Creates an extent from its four ordered bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ExtentError::NonFinite`] if any bound is NaN or infinite, and
    /// [`ExtentError::Degenerate`] if the width or height is not positive.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self, ExtentError> {
        if ![min_x, min_y, max_x, max_y].iter().all(|v| v.is_finite()) {
            return Err(ExtentError::NonFinite);
        }
        let width = max_x - min_x;
        let height = max_y - min_y;
        if width <= 0.0 || height <= 0.0 {
            return Err(ExtentError::Degenerate { width, height });
        }
        Ok(Self { min_x, min_y, max_x, max_y })
    }

    /// Builds the extent spanned by two opposite corners given in any order.
    ///
    /// # Errors
    ///
    /// Same as [`Extent::new`]; two points sharing an x or y value span no area.
    pub fn from_corners(a: Coordinate, b: Coordinate) -> Result<Self, ExtentError> {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    /// Builds an extent from a `[min_x, min_y, max_x, max_y]` array.
    ///
    /// # Errors
    ///
    /// Same as [`Extent::new`].
    pub fn from_array(bounds: [f64; 4]) -> Result<Self, ExtentError> {
        Self::new(bounds[0], bounds[1], bounds[2], bounds[3])
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Returns the bounds as `[min_x, min_y, max_x, max_y]`.
    pub fn to_array(&self) -> [f64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// The lower-left corner.  Tile grids use it as their origin.
    pub fn bottom_left(&self) -> Coordinate {
        Coordinate::new(self.min_x, self.min_y)
    }

    /// Returns `true` if `point` lies inside or on the boundary.
    pub fn contains(&self, point: Coordinate) -> bool {
        point.x >= self.min_x && point.x <= self.max_x && point.y >= self.min_y && point.y <= self.max_y
    }

    /// Returns `true` if the two extents share some area.  Touching edges do not count.
    pub fn intersects(&self, other: &Extent) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }

    /// Returns the shared area of two extents, or `None` when they do not overlap.
    pub fn intersection(&self, other: &Extent) -> Option<Extent> {
        Extent::new(
            self.min_x.max(other.min_x),
            self.min_y.max(other.min_y),
            self.max_x.min(other.max_x),
            self.max_y.min(other.max_y),
        )
        .ok()
    }

    /// Compares bounds within an absolute tolerance.
    pub fn approx_eq(&self, other: &Extent, tolerance: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl Serialize for Extent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_array().serialize(serializer)
    }
}

// Deserialization goes through `Extent::new` so invalid bounds never slip in
// through a config file.
impl<'de> Deserialize<'de> for Extent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bounds = <[f64; 4]>::deserialize(deserializer)?;
        Extent::from_array(bounds).map_err(serde::de::Error::custom)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> Extent {
        Extent::new(0.0, 0.0, 1.0, 1.0).unwrap()
    }

    #[test]
    fn test_new_accepts_positive_width_and_height() {
        let extent = Extent::new(-30.0, 48.0, 3.5, 64.0).unwrap();
        assert_eq!(extent.width(), 33.5);
        assert_eq!(extent.height(), 16.0);
    }

    #[test]
    fn test_new_rejects_zero_width() {
        let result = Extent::new(1.0, 0.0, 1.0, 5.0);
        assert_eq!(result, Err(ExtentError::Degenerate { width: 0.0, height: 5.0 }));
    }

    #[test]
    fn test_new_rejects_inverted_bounds() {
        assert!(matches!(
            Extent::new(0.0, 5.0, 1.0, 2.0),
            Err(ExtentError::Degenerate { .. })
        ));
    }

    #[test]
    fn test_new_rejects_nan_and_infinity() {
        assert_eq!(Extent::new(f64::NAN, 0.0, 1.0, 1.0), Err(ExtentError::NonFinite));
        assert_eq!(Extent::new(0.0, 0.0, f64::INFINITY, 1.0), Err(ExtentError::NonFinite));
    }

    #[test]
    fn test_from_corners_normalises_any_drag_direction() {
        // Arrange: bottom-right to top-left
        let a = Coordinate::new(1.0, 51.0);
        let b = Coordinate::new(-1.0, 52.0);

        // Act
        let extent = Extent::from_corners(a, b).unwrap();

        // Assert
        assert_eq!(extent.to_array(), [-1.0, 51.0, 1.0, 52.0]);
    }

    #[test]
    fn test_center_and_bottom_left() {
        let extent = Extent::new(-1.0, 51.0, 1.0, 53.0).unwrap();
        assert_eq!(extent.center(), Coordinate::new(0.0, 52.0));
        assert_eq!(extent.bottom_left(), Coordinate::new(-1.0, 51.0));
    }

    #[test]
    fn test_contains_includes_boundary() {
        let extent = unit();
        assert!(extent.contains(Coordinate::new(0.0, 1.0)));
        assert!(!extent.contains(Coordinate::new(1.5, 0.5)));
    }

    #[test]
    fn test_intersects_is_false_for_touching_edges() {
        let a = unit();
        let b = Extent::new(1.0, 0.0, 2.0, 1.0).unwrap();
        assert!(!a.intersects(&b));
        assert!(a.intersection(&b).is_none());
    }

    #[test]
    fn test_intersection_returns_shared_area() {
        let a = Extent::new(0.0, 0.0, 2.0, 2.0).unwrap();
        let b = Extent::new(1.0, 1.0, 3.0, 3.0).unwrap();
        assert_eq!(a.intersection(&b).unwrap().to_array(), [1.0, 1.0, 2.0, 2.0]);
    }

    #[test]
    fn test_deserialize_rejects_degenerate_array() {
        let result: Result<Extent, _> = serde_json::from_str("[0, 0, 0, 1]");
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_accepts_valid_array() {
        let extent: Extent = serde_json::from_str("[-30, 48, 3.5, 64]").unwrap();
        assert_eq!(extent.to_array(), [-30.0, 48.0, 3.5, 64.0]);
    }
}
