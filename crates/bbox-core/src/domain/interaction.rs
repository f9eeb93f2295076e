//! Drag-to-draw state machine.
//!
//! ```text
//!            arm()              press()                 release()
//! Disarmed ─────────► Armed ─────────────► Dragging ─────────────► Disarmed
//!    ▲                  │                   │  ▲ motion()          (commit or
//!    │                  │ arm()             └──┘                    discard)
//!    └──────────────────┴── arm() from any state clears the store and restarts at Armed
//! ```
//!
//! Arming always clears the [`SelectionStore`] first, so the old box disappears
//! as soon as the user enters draw mode rather than when the new box lands.
//! There is no cancel path: once dragging, the next release ends the gesture.
//!
//! A release that travelled less than the minimum drag distance is discarded
//! instead of committed.  The machine still disarms and the store stays
//! empty; the listener is not called.

use tracing::{debug, info, warn};

use super::rectangle::Rectangle;
use super::selection::SelectionStore;
use super::view::{PixelPoint, PixelRect, ViewState};

/// Pointer travel below which a drag is treated as a click and discarded.
pub const DEFAULT_MIN_DRAG_DISTANCE_PX: f64 = 8.0;

/// Where the interaction is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// Ignores all pointer input.
    #[default]
    Disarmed,
    /// Waiting for the pointer to be pressed.
    Armed,
    /// Pointer is down; a live preview spans `start` to `current`.
    Dragging { start: PixelPoint, current: PixelPoint },
}

/// What a pointer release did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// A rectangle was handed to [`SelectionStore::replace`].
    Committed(Rectangle),
    /// The gesture ended without producing a usable rectangle.
    Discarded,
    /// No drag was in progress.
    Ignored,
}

/// Pointer-drag interaction that produces one rectangle per activation.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSelectInteraction {
    state: DragState,
    min_drag_distance_px: f64,
}

impl Default for DragSelectInteraction {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DRAG_DISTANCE_PX)
    }
}

impl DragSelectInteraction {
    /// Creates a disarmed interaction.  Negative distances are treated as zero.
    pub fn new(min_drag_distance_px: f64) -> Self {
        Self {
            state: DragState::Disarmed,
            min_drag_distance_px: min_drag_distance_px.max(0.0),
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Returns `true` while the interaction wants pointer input.
    pub fn is_active(&self) -> bool {
        !matches!(self.state, DragState::Disarmed)
    }

    /// Enters draw mode.  Clears the current selection immediately.
    pub fn arm(&mut self, store: &mut SelectionStore) {
        store.clear();
        if matches!(self.state, DragState::Dragging { .. }) {
            debug!("re-armed during a drag; previous gesture abandoned");
        }
        self.state = DragState::Armed;
        info!("draw mode armed");
    }

    /// Handles a pointer press.  Returns `true` if the event was consumed.
    pub fn press(&mut self, pixel: PixelPoint) -> bool {
        match self.state {
            DragState::Disarmed => false,
            DragState::Armed => {
                self.state = DragState::Dragging { start: pixel, current: pixel };
                debug!(x = pixel.x, y = pixel.y, "drag started");
                true
            }
            // A second press mid-gesture changes nothing.
            DragState::Dragging { .. } => true,
        }
    }

    /// Handles pointer motion.  Returns `true` if the event was consumed.
    pub fn motion(&mut self, pixel: PixelPoint) -> bool {
        match &mut self.state {
            DragState::Dragging { current, .. } => {
                *current = pixel;
                true
            }
            _ => false,
        }
    }

    /// Handles a pointer release, committing the rectangle to `store`.
    ///
    /// The interaction always returns to [`DragState::Disarmed`] after a drag.
    pub fn release(
        &mut self,
        pixel: PixelPoint,
        view: &ViewState,
        store: &mut SelectionStore,
    ) -> DragOutcome {
        let DragState::Dragging { start, .. } = self.state else {
            return DragOutcome::Ignored;
        };
        self.state = DragState::Disarmed;

        let min_sq = self.min_drag_distance_px * self.min_drag_distance_px;
        if start.squared_distance(&pixel) < min_sq {
            debug!("drag shorter than {} px discarded", self.min_drag_distance_px);
            return DragOutcome::Discarded;
        }

        let a = view.pixel_to_coordinate(start);
        let b = view.pixel_to_coordinate(pixel);
        match Rectangle::from_corners(a, b) {
            Ok(rect) => {
                store.replace(rect);
                info!(bounds = ?rect.extent().to_array(), "selection committed");
                DragOutcome::Committed(rect)
            }
            Err(err) => {
                warn!("drag produced no usable rectangle: {err}");
                DragOutcome::Discarded
            }
        }
    }

    /// The live preview while dragging, in surface pixels.
    pub fn preview(&self) -> Option<PixelRect> {
        match self.state {
            DragState::Dragging { start, current } => Some(PixelRect::from_points(start, current)),
            _ => None,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::domain::extent::Coordinate;
    use crate::domain::tile_grid::{ResolutionLadder, TileGrid};
    use crate::domain::view::PixelSize;

    /// 400×300 view centred on (0, 51) at 0.01 units per pixel.
    fn view() -> ViewState {
        let ladder = ResolutionLadder::new(vec![0.1, 0.01]).unwrap();
        let grid = TileGrid::new(Coordinate::new(-30.0, 48.0), ladder, 250).unwrap();
        ViewState::new(Coordinate::new(0.0, 51.0), 1, PixelSize::new(400, 300), &grid).unwrap()
    }

    fn armed(store: &mut SelectionStore) -> DragSelectInteraction {
        let mut interaction = DragSelectInteraction::default();
        interaction.arm(store);
        interaction
    }

    #[test]
    fn test_default_state_is_disarmed_and_ignores_input() {
        let mut interaction = DragSelectInteraction::default();
        let mut store = SelectionStore::new();

        assert!(!interaction.press(PixelPoint::new(10.0, 10.0)));
        assert!(!interaction.motion(PixelPoint::new(20.0, 20.0)));
        assert_eq!(
            interaction.release(PixelPoint::new(30.0, 30.0), &view(), &mut store),
            DragOutcome::Ignored
        );
        assert_eq!(interaction.state(), DragState::Disarmed);
    }

    #[test]
    fn test_arm_clears_existing_selection_immediately() {
        // Arrange
        let mut store = SelectionStore::new();
        store.replace(Rectangle::new(0.0, 50.0, 1.0, 51.0).unwrap());

        // Act
        let interaction = armed(&mut store);

        // Assert
        assert!(store.current().is_none());
        assert_eq!(interaction.state(), DragState::Armed);
    }

    #[test]
    fn test_arm_does_not_fire_listener() {
        let mut store = SelectionStore::new();
        store.replace(Rectangle::new(0.0, 50.0, 1.0, 51.0).unwrap());
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        store.register_listener(move |_| counter.set(counter.get() + 1));

        armed(&mut store);

        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_drag_commits_min_max_of_both_points_and_disarms() {
        // Arrange
        let mut store = SelectionStore::new();
        let mut interaction = armed(&mut store);
        let v = view();

        // Act: drag from lower-right to upper-left
        interaction.press(PixelPoint::new(300.0, 200.0));
        interaction.motion(PixelPoint::new(250.0, 120.0));
        let outcome = interaction.release(PixelPoint::new(100.0, 50.0), &v, &mut store);

        // Assert
        let expected = Rectangle::from_corners(
            v.pixel_to_coordinate(PixelPoint::new(100.0, 50.0)),
            v.pixel_to_coordinate(PixelPoint::new(300.0, 200.0)),
        )
        .unwrap();
        assert_eq!(outcome, DragOutcome::Committed(expected));
        assert!(store.current().unwrap().approx_eq(&Rectangle::new(-1.0, 50.5, 1.0, 52.0).unwrap(), 1e-9));
        assert_eq!(interaction.state(), DragState::Disarmed);
    }

    #[test]
    fn test_motion_updates_preview() {
        let mut store = SelectionStore::new();
        let mut interaction = armed(&mut store);
        assert!(interaction.preview().is_none());

        interaction.press(PixelPoint::new(50.0, 60.0));
        interaction.motion(PixelPoint::new(10.0, 100.0));

        assert_eq!(
            interaction.preview(),
            Some(PixelRect { left: 10.0, top: 60.0, right: 50.0, bottom: 100.0 })
        );
    }

    #[test]
    fn test_short_drag_is_discarded_and_store_stays_empty() {
        // Arrange
        let mut store = SelectionStore::new();
        store.replace(Rectangle::new(0.0, 50.0, 1.0, 51.0).unwrap());
        let mut interaction = armed(&mut store);

        // Act: 3 px is below the 8 px threshold
        interaction.press(PixelPoint::new(100.0, 100.0));
        let outcome = interaction.release(PixelPoint::new(103.0, 100.0), &view(), &mut store);

        // Assert
        assert_eq!(outcome, DragOutcome::Discarded);
        assert!(store.current().is_none());
        assert_eq!(interaction.state(), DragState::Disarmed);
    }

    #[test]
    fn test_straight_line_drag_is_discarded() {
        let mut store = SelectionStore::new();
        let mut interaction = armed(&mut store);

        interaction.press(PixelPoint::new(100.0, 100.0));
        let outcome = interaction.release(PixelPoint::new(200.0, 100.0), &view(), &mut store);

        assert_eq!(outcome, DragOutcome::Discarded);
        assert!(store.current().is_none());
    }

    #[test]
    fn test_zero_threshold_still_rejects_zero_area() {
        let mut store = SelectionStore::new();
        let mut interaction = DragSelectInteraction::new(0.0);
        interaction.arm(&mut store);

        interaction.press(PixelPoint::new(100.0, 100.0));
        let outcome = interaction.release(PixelPoint::new(100.0, 100.0), &view(), &mut store);

        assert_eq!(outcome, DragOutcome::Discarded);
    }

    #[test]
    fn test_rearming_mid_drag_restarts_at_armed() {
        let mut store = SelectionStore::new();
        let mut interaction = armed(&mut store);
        interaction.press(PixelPoint::new(1.0, 1.0));

        interaction.arm(&mut store);

        assert_eq!(interaction.state(), DragState::Armed);
        assert!(interaction.preview().is_none());
    }

    #[test]
    fn test_release_while_armed_is_ignored_and_stays_armed() {
        let mut store = SelectionStore::new();
        let mut interaction = armed(&mut store);

        let outcome = interaction.release(PixelPoint::new(5.0, 5.0), &view(), &mut store);

        assert_eq!(outcome, DragOutcome::Ignored);
        assert_eq!(interaction.state(), DragState::Armed);
    }
}
