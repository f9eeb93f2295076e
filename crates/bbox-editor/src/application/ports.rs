//! Collaborators the application layer talks to through traits.
//!
//! Concrete implementations live in `infrastructure`; unit tests substitute
//! `mockall` mocks.  Everything runs on the UI thread, so none of these traits
//! require `Send` or `Sync`.

use std::rc::Rc;

use bbox_core::{Extent, PixelSize, TileCoord};

/// The pixel area the map is drawn into.
#[cfg_attr(test, mockall::automock)]
pub trait RenderSurface {
    /// Measures the surface as currently laid out.
    ///
    /// Returns a zero size while the surface is hidden (e.g. behind an
    /// inactive tab).
    fn measure(&self) -> PixelSize;
}

/// Lets a host keep a handle on a surface it has given to a widget.
impl<T: RenderSurface + ?Sized> RenderSurface for Rc<T> {
    fn measure(&self) -> PixelSize {
        (**self).measure()
    }
}

/// One basemap tile to fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct TileRequest {
    pub coord: TileCoord,
    pub extent: Extent,
    pub url: String,
}

/// Tile-serving collaborator.
///
/// Given a tile address and its projected extent, describes where to fetch
/// the raster.  Fetching itself is fire-and-forget for the caller; failed
/// fetches are not retried here.
#[cfg_attr(test, mockall::automock)]
pub trait TileSource {
    fn request(&self, coord: TileCoord, extent: &Extent) -> TileRequest;
}

/// A text input on the host page.
pub trait FormField {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}
