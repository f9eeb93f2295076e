//! Tile grid aligned to the projection extent.
//!
//! All tile boundaries are measured from a single origin, the lower-left corner
//! of the projection extent, so that every client requesting imagery for the
//! same view asks the tile server for exactly the same cells.
//!
//! # Resolution ladder (for beginners)
//!
//! A *resolution* is how many ground units one screen pixel covers.  The map
//! does not zoom continuously; it may only sit on one of a fixed list of
//! resolutions, ordered from coarse (zoomed out) to fine (zoomed in).  Index 0
//! is the coarsest step.
//!
//! ```text
//! span(z)   = resolution(z) * tile_size          (ground units per tile)
//! column(x) = floor((x - origin.x) / span(z))
//! row(y)    = floor((y - origin.y) / span(z))    (rows count upward)
//! ```

use super::error::ConfigurationError;
use super::extent::{Coordinate, Extent};
use super::view::PixelSize;

/// Relative tolerance used when matching a resolution against the ladder.
const RESOLUTION_TOLERANCE: f64 = 1e-9;

/// A fixed, strictly decreasing list of positive resolutions.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionLadder {
    steps: Vec<f64>,
}

impl ResolutionLadder {
    /// Validates and wraps a list of resolutions.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::EmptyResolutionLadder`] for an empty list.
    /// - [`ConfigurationError::NonPositiveResolution`] for zero, negative or
    ///   non-finite entries.
    /// - [`ConfigurationError::ResolutionsNotDecreasing`] when an entry is not
    ///   strictly smaller than the one before it.
    pub fn new(steps: Vec<f64>) -> Result<Self, ConfigurationError> {
        if steps.is_empty() {
            return Err(ConfigurationError::EmptyResolutionLadder);
        }
        for (index, &value) in steps.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigurationError::NonPositiveResolution { index, value });
            }
            if index > 0 && value >= steps[index - 1] {
                return Err(ConfigurationError::ResolutionsNotDecreasing { index, value });
            }
        }
        Ok(Self { steps })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`; a ladder cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.steps
    }

    /// Returns the resolution at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::ResolutionIndexOutOfRange`] past the finest step.
    pub fn resolution(&self, index: usize) -> Result<f64, ConfigurationError> {
        self.steps
            .get(index)
            .copied()
            .ok_or(ConfigurationError::ResolutionIndexOutOfRange {
                index,
                len: self.steps.len(),
            })
    }

    /// Looks up the ladder index of `resolution`.
    ///
    /// Rendering at a resolution that is not listed is a configuration error,
    /// never a silent fallback to the nearest step.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnlistedResolution`] when no step matches.
    pub fn index_of(&self, resolution: f64) -> Result<usize, ConfigurationError> {
        self.steps
            .iter()
            .position(|&step| (step - resolution).abs() <= step * RESOLUTION_TOLERANCE)
            .ok_or(ConfigurationError::UnlistedResolution(resolution))
    }
}

/// Address of one tile: ladder step `z`, column `x`, row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub z: usize,
    pub x: i64,
    pub y: i64,
}

/// Inclusive block of tiles at one ladder step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRange {
    pub z: usize,
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl TileRange {
    /// Number of tiles in the range.
    pub fn count(&self) -> usize {
        let columns = (self.max_x - self.min_x + 1).max(0) as usize;
        let rows = (self.max_y - self.min_y + 1).max(0) as usize;
        columns * rows
    }

    /// Yields every coordinate in the range, row by row from the bottom.
    pub fn iter(&self) -> impl Iterator<Item = TileCoord> + '_ {
        (self.min_y..=self.max_y).flat_map(move |y| {
            (self.min_x..=self.max_x).map(move |x| TileCoord { z: self.z, x, y })
        })
    }
}

/// Grid descriptor handed to the tile-fetching collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    origin: Coordinate,
    ladder: ResolutionLadder,
    tile_size: u32,
}

impl TileGrid {
    /// Creates a grid anchored at `origin` with square tiles of `tile_size` pixels.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::ZeroTileSize`] for a zero tile size.
    pub fn new(
        origin: Coordinate,
        ladder: ResolutionLadder,
        tile_size: u32,
    ) -> Result<Self, ConfigurationError> {
        if tile_size == 0 {
            return Err(ConfigurationError::ZeroTileSize);
        }
        Ok(Self { origin, ladder, tile_size })
    }

    /// Creates a grid whose origin is the lower-left corner of `extent`.
    ///
    /// # Errors
    ///
    /// Same as [`TileGrid::new`].
    pub fn for_extent(
        extent: &Extent,
        ladder: ResolutionLadder,
        tile_size: u32,
    ) -> Result<Self, ConfigurationError> {
        Self::new(extent.bottom_left(), ladder, tile_size)
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn ladder(&self) -> &ResolutionLadder {
        &self.ladder
    }

    /// See [`ResolutionLadder::resolution`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::ResolutionIndexOutOfRange`] for an unknown step.
    pub fn resolution(&self, z: usize) -> Result<f64, ConfigurationError> {
        self.ladder.resolution(z)
    }

    /// See [`ResolutionLadder::index_of`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnlistedResolution`] when no step matches.
    pub fn index_of(&self, resolution: f64) -> Result<usize, ConfigurationError> {
        self.ladder.index_of(resolution)
    }

    /// Ground units covered by one tile edge at step `z`.
    fn span(&self, z: usize) -> Result<f64, ConfigurationError> {
        Ok(self.ladder.resolution(z)? * f64::from(self.tile_size))
    }

    /// Returns the tile containing `coordinate` at step `z`.
    ///
    /// A coordinate lying exactly on a tile boundary belongs to the tile on
    /// its right (or above it).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::ResolutionIndexOutOfRange`] for an unknown step.
    pub fn tile_coord_for(&self, coordinate: Coordinate, z: usize) -> Result<TileCoord, ConfigurationError> {
        let span = self.span(z)?;
        Ok(TileCoord {
            z,
            x: ((coordinate.x - self.origin.x) / span).floor() as i64,
            y: ((coordinate.y - self.origin.y) / span).floor() as i64,
        })
    }

    /// Returns the projected area covered by one tile.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::ResolutionIndexOutOfRange`] for an unknown step.
    pub fn tile_extent(&self, coord: TileCoord) -> Result<Extent, ConfigurationError> {
        let span = self.span(coord.z)?;
        let min_x = self.origin.x + coord.x as f64 * span;
        let min_y = self.origin.y + coord.y as f64 * span;
        Ok(Extent::new(min_x, min_y, min_x + span, min_y + span)?)
    }

    /// Returns the smallest block of tiles at step `z` that covers `extent`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::ResolutionIndexOutOfRange`] for an unknown step.
    pub fn tile_range(&self, extent: &Extent, z: usize) -> Result<TileRange, ConfigurationError> {
        let span = self.span(z)?;
        let min_x = ((extent.min_x() - self.origin.x) / span).floor() as i64;
        let min_y = ((extent.min_y() - self.origin.y) / span).floor() as i64;
        // An extent ending exactly on a boundary does not reach into the next tile.
        let max_x = ((extent.max_x() - self.origin.x) / span).ceil() as i64 - 1;
        let max_y = ((extent.max_y() - self.origin.y) / span).ceil() as i64 - 1;
        Ok(TileRange {
            z,
            min_x,
            min_y,
            max_x: max_x.max(min_x),
            max_y: max_y.max(min_y),
        })
    }

    /// Picks the finest ladder step at which `extent` fits inside `size` pixels.
    ///
    /// Falls back to the coarsest step when the extent is too large to fit at
    /// any step.  Returns `None` when `size` has no area, since nothing can be
    /// fitted into a surface that has not been measured yet.
    pub fn fit_resolution_index(&self, extent: &Extent, size: PixelSize) -> Option<usize> {
        if size.is_empty() {
            return None;
        }
        let required = (extent.width() / f64::from(size.width))
            .max(extent.height() / f64::from(size.height));
        let finest_fitting = self
            .ladder
            .as_slice()
            .iter()
            .rposition(|&step| step >= required * (1.0 - RESOLUTION_TOLERANCE));
        Some(finest_fitting.unwrap_or(0))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
