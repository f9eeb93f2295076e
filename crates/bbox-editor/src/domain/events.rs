//! Input the host page feeds into the widget.
//!
//! The widget never polls.  The host translates its own DOM or toolkit events
//! into these types and hands them over on the UI thread, one at a time.

use bbox_core::PixelPoint;

/// A pointer event in render-surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press(PixelPoint),
    Move(PixelPoint),
    Release(PixelPoint),
}

/// "A panel became visible", carrying the panel's identifier.
///
/// Hosts that show the map inside tabs send one of these whenever a tab is
/// shown.  The widget reacts only when the identifier matches its own panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityEvent {
    pub panel_id: String,
}

impl VisibilityEvent {
    pub fn new(panel_id: impl Into<String>) -> Self {
        Self { panel_id: panel_id.into() }
    }
}

/// The single affordance rendered over the map to enter draw mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawControl {
    pub label: String,
    pub tooltip: String,
}

impl Default for DrawControl {
    fn default() -> Self {
        Self {
            label: "[]".to_string(),
            tooltip: "Draw Selection".to_string(),
        }
    }
}
