//! BindingAdapter: glue between the widget and the host page.
//!
//! Two jobs:
//!
//! 1. **Field binding.**  Seed the selection from a form field's text once,
//!    then write every later selection back into that field.
//! 2. **Visibility.**  When the host reports that the map's panel became
//!    visible, resize the view and only then refit it to the selection.
//!
//! Neither job can fail past this boundary.  Bad field text is logged and
//! reported in [`BindOutcome::Rejected`]; the page keeps running.

use std::rc::Rc;

use tracing::{debug, info, warn};

use bbox_core::{decode, GeometryError, Rectangle, SelectionStore};

use crate::application::map_view::MapView;
use crate::application::ports::FormField;
use crate::domain::events::VisibilityEvent;

/// What [`BindingAdapter::bind`] found in the field.
#[derive(Debug, Clone, PartialEq)]
pub enum BindOutcome {
    /// The field held a valid rectangle, now stored and framed.
    Seeded(Rectangle),
    /// The field was blank.  Nothing stored.
    Empty,
    /// The field text could not be decoded.  Nothing stored.
    Rejected(GeometryError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingAdapter {
    panel_id: String,
}

impl BindingAdapter {
    pub fn new(panel_id: impl Into<String>) -> Self {
        Self { panel_id: panel_id.into() }
    }

    /// The host panel whose visibility this adapter reacts to.
    pub fn panel_id(&self) -> &str {
        &self.panel_id
    }

    /// Binds `field` to the selection.
    ///
    /// The field is read and decoded first; a valid rectangle is stored and
    /// the view refitted to it.  Only then is the write-back listener
    /// installed, so seeding leaves the field text exactly as it was.  The
    /// listener is installed whatever the seed outcome, replacing any earlier
    /// listener on `store`.
    pub fn bind<F>(&self, field: Rc<F>, store: &mut SelectionStore, map: &mut MapView) -> BindOutcome
    where
        F: FormField + ?Sized + 'static,
    {
        let text = field.value();
        let outcome = if text.trim().is_empty() {
            debug!("bound field is empty; no initial selection");
            BindOutcome::Empty
        } else {
            match decode(&text) {
                Ok(rect) => {
                    store.replace(rect);
                    map.refit_to_selection(store);
                    info!(bounds = ?rect.extent().to_array(), "selection seeded from field");
                    BindOutcome::Seeded(rect)
                }
                Err(err) => {
                    warn!("ignoring unreadable field value: {err}");
                    BindOutcome::Rejected(err)
                }
            }
        };

        store.register_listener(move |serialized| field.set_value(serialized.as_str()));
        outcome
    }

    /// Reacts to a host visibility signal.
    ///
    /// For this adapter's panel, resizes the view and then refits it to the
    /// current selection.  Returns `false` for any other panel.
    pub fn on_visible(&self, event: &VisibilityEvent, map: &mut MapView, store: &SelectionStore) -> bool {
        if event.panel_id != self.panel_id {
            return false;
        }
        let size = map.resize();
        let fitted = map.refit_to_selection(store);
        debug!(panel = %self.panel_id, ?size, fitted, "map panel shown");
        true
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
