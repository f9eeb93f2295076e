//! Render surface with a size set by the host.
//!
//! The CLI and integration tests use this in place of a real canvas.  Hiding
//! the surface makes it measure as zero, as a canvas inside an inactive tab
//! would.

use std::cell::Cell;

use bbox_core::PixelSize;

use crate::application::ports::RenderSurface;

#[derive(Debug, Default)]
pub struct FixedSurface {
    size: Cell<PixelSize>,
    hidden: Cell<bool>,
}

impl FixedSurface {
    pub fn new(size: PixelSize) -> Self {
        Self {
            size: Cell::new(size),
            hidden: Cell::new(false),
        }
    }

    /// Creates a surface that measures as zero until [`FixedSurface::show`].
    pub fn hidden(size: PixelSize) -> Self {
        let surface = Self::new(size);
        surface.hide();
        surface
    }

    pub fn set_size(&self, size: PixelSize) {
        self.size.set(size);
    }

    pub fn hide(&self) {
        self.hidden.set(true);
    }

    pub fn show(&self) {
        self.hidden.set(false);
    }
}

impl RenderSurface for FixedSurface {
    fn measure(&self) -> PixelSize {
        if self.hidden.get() {
            PixelSize::default()
        } else {
            self.size.get()
        }
    }
}
