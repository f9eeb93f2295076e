//! Startup configuration failures.
//!
//! Every variant here is fatal: a widget built from a bad projection, ladder
//! or view must refuse to initialise rather than render an empty map.

use thiserror::Error;

use super::extent::ExtentError;

/// Errors raised while assembling the projection, tile grid or initial view.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigurationError {
    /// The projection or grid extent is not a usable box.
    #[error("invalid extent: {0}")]
    InvalidExtent(#[from] ExtentError),

    /// The projection code is empty or not of the form `AUTHORITY:CODE`.
    #[error("invalid projection code: {0:?}")]
    InvalidProjectionCode(String),

    /// The resolution ladder has no steps.
    #[error("resolution ladder must contain at least one resolution")]
    EmptyResolutionLadder,

    /// A resolution is zero, negative or not finite.
    #[error("resolution at index {index} must be a positive finite number, got {value}")]
    NonPositiveResolution { index: usize, value: f64 },

    /// Resolutions must go from coarse to fine without repeats.
    #[error("resolutions must be strictly decreasing: index {index} ({value}) is not smaller than its predecessor")]
    ResolutionsNotDecreasing { index: usize, value: f64 },

    /// Tiles must be at least one pixel wide.
    #[error("tile size must be greater than zero")]
    ZeroTileSize,

    /// A view asked for a resolution the ladder does not list.
    #[error("resolution {0} is not part of the resolution ladder")]
    UnlistedResolution(f64),

    /// A view asked for a ladder step that does not exist.
    #[error("resolution index {index} is out of range for a ladder of {len} steps")]
    ResolutionIndexOutOfRange { index: usize, len: usize },

    /// The initial view centre is not a finite coordinate.
    #[error("view centre must be a finite coordinate")]
    NonFiniteCenter,
}
