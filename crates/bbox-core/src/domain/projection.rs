//! Named coordinate reference system restricted to a valid extent.
//!
//! A [`Projection`] is created once, before any view exists, and never
//! mutated afterwards.  There is no process-wide registry: each widget owns
//! its own copy, so two widgets may use different projections side by side.

use super::error::ConfigurationError;
use super::extent::{Coordinate, Extent};

/// A geographic coordinate system (e.g. `EPSG:4258`) and the area it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    code: String,
    extent: Extent,
}

impl Projection {
    /// Registers a projection named `code` over `extent`.
    ///
    /// The extent has already been validated by [`Extent::new`]; this checks
    /// that the code looks like `AUTHORITY:CODE`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidProjectionCode`] for an empty code
    /// or one without exactly one `:` separating two non-empty parts.
    pub fn new(code: impl Into<String>, extent: Extent) -> Result<Self, ConfigurationError> {
        let code = code.into();
        let valid = match code.split_once(':') {
            Some((authority, id)) => {
                !authority.trim().is_empty() && !id.trim().is_empty() && !id.contains(':')
            }
            None => false,
        };
        if !valid {
            return Err(ConfigurationError::InvalidProjectionCode(code));
        }
        Ok(Self { code, extent })
    }

    /// Convenience constructor taking raw bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidExtent`] when the bounds are
    /// degenerate, in addition to the errors of [`Projection::new`].
    pub fn from_bounds(code: impl Into<String>, bounds: [f64; 4]) -> Result<Self, ConfigurationError> {
        let extent = Extent::from_array(bounds)?;
        Self::new(code, extent)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    /// Returns `true` if the coordinate falls inside the projection's valid area.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.extent.contains(coordinate)
    }
}
