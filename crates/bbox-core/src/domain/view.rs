//! View state: where the map is centred, at which ladder step, on how many pixels.
//!
//! Pixel space has its origin at the top-left corner of the render surface
//! with `y` growing downward; projection space has `y` growing upward.  The
//! view never rotates.

use tracing::debug;

use super::error::ConfigurationError;
use super::extent::{Coordinate, Extent};
use super::tile_grid::TileGrid;

/// Dimensions of the render surface in pixels.
///
/// A surface hidden behind an inactive tab measures as zero until shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A position on the render surface, in pixels from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn squared_distance(&self, other: &PixelPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// An axis-aligned rectangle on the render surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PixelRect {
    /// Builds the rectangle spanned by two points given in any order.
    pub fn from_points(a: PixelPoint, b: PixelPoint) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// The current viewport of one map.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    center: Coordinate,
    resolution_index: usize,
    resolution: f64,
    size: PixelSize,
}

impl ViewState {
    /// Creates a view centred on `center` at ladder step `resolution_index`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::NonFiniteCenter`] for a NaN or infinite
    /// centre and [`ConfigurationError::ResolutionIndexOutOfRange`] for a step
    /// the grid does not list.
    pub fn new(
        center: Coordinate,
        resolution_index: usize,
        size: PixelSize,
        grid: &TileGrid,
    ) -> Result<Self, ConfigurationError> {
        if !center.x.is_finite() || !center.y.is_finite() {
            return Err(ConfigurationError::NonFiniteCenter);
        }
        let resolution = grid.resolution(resolution_index)?;
        Ok(Self { center, resolution_index, resolution, size })
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn resolution_index(&self) -> usize {
        self.resolution_index
    }

    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    pub fn size(&self) -> PixelSize {
        self.size
    }

    pub fn set_size(&mut self, size: PixelSize) {
        self.size = size;
    }

    pub fn set_center(&mut self, center: Coordinate) {
        self.center = center;
    }

    /// Moves the view to another ladder step.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::ResolutionIndexOutOfRange`] for an unknown step.
    pub fn set_resolution_index(&mut self, index: usize, grid: &TileGrid) -> Result<(), ConfigurationError> {
        self.resolution = grid.resolution(index)?;
        self.resolution_index = index;
        Ok(())
    }

    /// Converts a surface pixel into projection coordinates.
    pub fn pixel_to_coordinate(&self, pixel: PixelPoint) -> Coordinate {
        let half_w = f64::from(self.size.width) / 2.0;
        let half_h = f64::from(self.size.height) / 2.0;
        Coordinate::new(
            self.center.x + (pixel.x - half_w) * self.resolution,
            self.center.y - (pixel.y - half_h) * self.resolution,
        )
    }

    /// Converts projection coordinates into a surface pixel.
    pub fn coordinate_to_pixel(&self, coordinate: Coordinate) -> PixelPoint {
        let half_w = f64::from(self.size.width) / 2.0;
        let half_h = f64::from(self.size.height) / 2.0;
        PixelPoint::new(
            half_w + (coordinate.x - self.center.x) / self.resolution,
            half_h - (coordinate.y - self.center.y) / self.resolution,
        )
    }

    /// Projects an extent onto the surface.
    pub fn extent_to_pixels(&self, extent: &Extent) -> PixelRect {
        PixelRect::from_points(
            self.coordinate_to_pixel(Coordinate::new(extent.min_x(), extent.max_y())),
            self.coordinate_to_pixel(Coordinate::new(extent.max_x(), extent.min_y())),
        )
    }

    /// The projected area currently on screen, or `None` before the surface
    /// has been measured.
    pub fn visible_extent(&self) -> Option<Extent> {
        if self.size.is_empty() {
            return None;
        }
        let top_left = self.pixel_to_coordinate(PixelPoint::new(0.0, 0.0));
        let bottom_right = self.pixel_to_coordinate(PixelPoint::new(
            f64::from(self.size.width),
            f64::from(self.size.height),
        ));
        Extent::from_corners(top_left, bottom_right).ok()
    }

    /// Re-centres on `extent` and picks the finest ladder step that shows all of it.
    ///
    /// Returns `false`, leaving the view untouched, when the surface has no
    /// measurable size.
    pub fn fit(&mut self, extent: &Extent, grid: &TileGrid) -> bool {
        let Some(index) = grid.fit_resolution_index(extent, self.size) else {
            debug!(size = ?self.size, "skipping fit: render surface has no size");
            return false;
        };
        match grid.resolution(index) {
            Ok(resolution) => {
                self.center = extent.center();
                self.resolution_index = index;
                self.resolution = resolution;
                debug!(center = ?self.center, index, resolution, "view fitted to extent");
                true
            }
            Err(_) => false,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tile_grid::ResolutionLadder;

    fn grid() -> TileGrid {
        let ladder = ResolutionLadder::new(vec![0.1, 0.01]).unwrap();
        TileGrid::new(Coordinate::new(-30.0, 48.0), ladder, 250).unwrap()
    }

    fn view() -> ViewState {
        ViewState::new(Coordinate::new(0.0, 51.0), 1, PixelSize::new(400, 300), &grid()).unwrap()
    }

    #[test]
    fn test_new_rejects_unknown_resolution_index() {
        let result = ViewState::new(Coordinate::new(0.0, 51.0), 2, PixelSize::new(400, 300), &grid());
        assert_eq!(
            result,
            Err(ConfigurationError::ResolutionIndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_new_rejects_non_finite_center() {
        let result = ViewState::new(Coordinate::new(f64::NAN, 51.0), 0, PixelSize::new(1, 1), &grid());
        assert_eq!(result, Err(ConfigurationError::NonFiniteCenter));
    }

    #[test]
    fn test_surface_center_maps_to_view_center() {
        let c = view().pixel_to_coordinate(PixelPoint::new(200.0, 150.0));
        assert_eq!(c, Coordinate::new(0.0, 51.0));
    }

    #[test]
    fn test_pixel_y_grows_downward() {
        let v = view();
        let above = v.pixel_to_coordinate(PixelPoint::new(200.0, 50.0));
        assert!((above.y - 52.0).abs() < 1e-9, "100 px up at 0.01/px is +1.0, got {}", above.y);
    }

    #[test]
    fn test_coordinate_to_pixel_inverts_pixel_to_coordinate() {
        let v = view();
        let pixel = PixelPoint::new(37.0, 211.0);
        let back = v.coordinate_to_pixel(v.pixel_to_coordinate(pixel));
        assert!((back.x - pixel.x).abs() < 1e-6);
        assert!((back.y - pixel.y).abs() < 1e-6);
    }

    #[test]
    fn test_visible_extent_covers_surface() {
        let extent = view().visible_extent().unwrap();
        assert!(extent.approx_eq(&Extent::new(-2.0, 49.5, 2.0, 52.5).unwrap(), 1e-9));
    }

    #[test]
    fn test_visible_extent_is_none_when_hidden() {
        let mut v = view();
        v.set_size(PixelSize::new(0, 0));
        assert!(v.visible_extent().is_none());
    }

    #[test]
    fn test_fit_centres_on_extent_and_picks_fitting_step() {
        // Arrange: 10 units wide needs 0.025/px on 400 px; only 0.1 fits.
        let mut v = view();
        let extent = Extent::new(-5.0, 50.0, 5.0, 52.0).unwrap();

        // Act
        let fitted = v.fit(&extent, &grid());

        // Assert
        assert!(fitted);
        assert_eq!(v.center(), Coordinate::new(0.0, 51.0));
        assert_eq!(v.resolution_index(), 0);
    }

    #[test]
    fn test_fit_is_noop_on_zero_size_surface() {
        let mut v = view();
        v.set_size(PixelSize::default());
        let before = v.clone();
        assert!(!v.fit(&Extent::new(10.0, 60.0, 11.0, 61.0).unwrap(), &grid()));
        assert_eq!(v, before);
    }

    #[test]
    fn test_extent_to_pixels_round_trips_visible_extent() {
        let v = view();
        let rect = v.extent_to_pixels(&v.visible_extent().unwrap());
        assert!(rect.left.abs() < 1e-6 && rect.top.abs() < 1e-6);
        assert!((rect.right - 400.0).abs() < 1e-6 && (rect.bottom - 300.0).abs() < 1e-6);
    }
}
