//! MapView: the tiled basemap, the selection overlay and the draw interaction.
//!
//! The view renders at one of the ladder's fixed resolutions only.  It owns
//! the [`DragSelectInteraction`] and decides when pointer input reaches it:
//! events are ignored until [`MapView::activate_draw`] arms the interaction,
//! and go back to being ignored once a drag ends.
//!
//! # Why `resize` exists (for beginners)
//!
//! A map inside a hidden tab has no pixels.  Any view fit computed then would
//! divide by zero, and any tiles requested would be for a 0×0 window.  When the
//! host shows the tab it must first call [`MapView::resize`] so the view picks
//! up the real size, and only then [`MapView::refit_to_selection`].

use tracing::debug;

use bbox_core::{
    ConfigurationError, DragOutcome, DragSelectInteraction, DragState, PixelRect, PixelSize,
    Projection, SelectionStore, TileGrid, ViewState,
};

use crate::application::ports::{RenderSurface, TileRequest, TileSource};
use crate::domain::config::{MapSetup, StyleConfig};
use crate::domain::events::{DrawControl, PointerEvent};

/// Result of routing one pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerResponse {
    /// The interaction is disarmed, or the event does not apply to its state.
    Ignored,
    /// The interaction used the event and the gesture continues.
    Consumed,
    /// A release ended the gesture.
    Finished(DragOutcome),
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub size: PixelSize,
    pub resolution_index: usize,
    pub resolution: f64,
    /// Basemap tiles covering the visible part of the projection extent.
    pub tiles: Vec<TileRequest>,
    /// The stored selection in surface pixels.
    pub selection: Option<PixelRect>,
    /// The live rectangle while the user is dragging.
    pub preview: Option<PixelRect>,
    pub style: StyleConfig,
}

pub struct MapView {
    projection: Projection,
    grid: TileGrid,
    view: ViewState,
    interaction: DragSelectInteraction,
    surface: Box<dyn RenderSurface>,
    tiles: Box<dyn TileSource>,
    style: StyleConfig,
    control: DrawControl,
}

impl MapView {
    pub fn new(
        setup: MapSetup,
        surface: Box<dyn RenderSurface>,
        tiles: Box<dyn TileSource>,
        style: StyleConfig,
        min_drag_distance_px: f64,
    ) -> Self {
        Self {
            projection: setup.projection,
            grid: setup.grid,
            view: setup.view,
            interaction: DragSelectInteraction::new(min_drag_distance_px),
            surface,
            tiles,
            style,
            control: DrawControl::default(),
        }
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn draw_control(&self) -> &DrawControl {
        &self.control
    }

    pub fn interaction_state(&self) -> DragState {
        self.interaction.state()
    }

    /// Arms the drag interaction.  The current selection disappears at once.
    pub fn activate_draw(&mut self, store: &mut SelectionStore) {
        self.interaction.arm(store);
    }

    /// Re-measures the render surface and adopts its size.
    pub fn resize(&mut self) -> PixelSize {
        let size = self.surface.measure();
        if size != self.view.size() {
            debug!(?size, "render surface resized");
        }
        self.view.set_size(size);
        size
    }

    /// Frames the stored selection.
    ///
    /// Returns `false` and leaves the view untouched when nothing is selected
    /// or the surface has no size yet.
    pub fn refit_to_selection(&mut self, store: &SelectionStore) -> bool {
        match store.current_extent() {
            Some(extent) => self.view.fit(&extent, &self.grid),
            None => {
                debug!("nothing selected; view left as is");
                false
            }
        }
    }

    /// Routes a pointer event to the interaction while it is armed or dragging.
    pub fn handle_pointer(&mut self, event: PointerEvent, store: &mut SelectionStore) -> PointerResponse {
        if !self.interaction.is_active() {
            return PointerResponse::Ignored;
        }
        let consumed = match event {
            PointerEvent::Press(pixel) => self.interaction.press(pixel),
            PointerEvent::Move(pixel) => self.interaction.motion(pixel),
            PointerEvent::Release(pixel) => {
                return match self.interaction.release(pixel, &self.view, store) {
                    DragOutcome::Ignored => PointerResponse::Ignored,
                    outcome => PointerResponse::Finished(outcome),
                };
            }
        };
        if consumed {
            PointerResponse::Consumed
        } else {
            PointerResponse::Ignored
        }
    }

    /// Describes the current frame.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] only if the view sits on a ladder step
    /// the grid does not list, which construction rules out.
    pub fn render(&self, store: &SelectionStore) -> Result<Frame, ConfigurationError> {
        let mut tiles = Vec::new();
        let covered = self
            .view
            .visible_extent()
            .and_then(|visible| visible.intersection(self.projection.extent()));
        if let Some(covered) = covered {
            let z = self.view.resolution_index();
            let range = self.grid.tile_range(&covered, z)?;
            tiles.reserve(range.count());
            for coord in range.iter() {
                let extent = self.grid.tile_extent(coord)?;
                tiles.push(self.tiles.request(coord, &extent));
            }
        }

        let frame = Frame {
            size: self.view.size(),
            resolution_index: self.view.resolution_index(),
            resolution: self.view.resolution(),
            tiles,
            selection: store.current().map(|rect| self.view.extent_to_pixels(rect.extent())),
            preview: self.interaction.preview(),
            style: self.style.clone(),
        };
        debug!(
            tiles = frame.tiles.len(),
            z = frame.resolution_index,
            selected = frame.selection.is_some(),
            "frame rendered"
        );
        Ok(frame)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
