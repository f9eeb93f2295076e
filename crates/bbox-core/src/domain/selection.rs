//! Single-slot store for the selected rectangle.
//!
//! The store holds at most one [`Rectangle`] and at most one listener.  Both
//! slots are replaced, never appended to:
//!
//! - [`SelectionStore::replace`] discards the previous rectangle, stores the
//!   new one, encodes it, and calls the listener exactly once with the text.
//! - [`SelectionStore::register_listener`] swaps out any earlier listener.
//!
//! Notification is synchronous.  When `replace` returns, the listener has
//! already run, so a host reading its form field right afterwards sees the
//! new value.

use std::fmt;

use tracing::debug;

use crate::codec::geojson::{encode, SerializedGeometry};

use super::extent::Extent;
use super::rectangle::Rectangle;

/// Callback fired once per committed change with the new geometry text.
pub type SelectionListener = Box<dyn FnMut(&SerializedGeometry)>;

/// Holds the current selection and its change listener.
#[derive(Default)]
pub struct SelectionStore {
    current: Option<(Rectangle, SerializedGeometry)>,
    listener: Option<SelectionListener>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored rectangle and notifies the listener, if any.
    pub fn replace(&mut self, rect: Rectangle) {
        let serialized = encode(&rect);
        debug!(bounds = ?rect.extent().to_array(), "selection replaced");
        self.current = Some((rect, serialized));
        if let (Some(listener), Some((_, text))) = (self.listener.as_mut(), self.current.as_ref()) {
            listener(text);
        }
    }

    /// Removes the stored rectangle without notifying the listener.
    pub fn clear(&mut self) {
        if self.current.take().is_some() {
            debug!("selection cleared");
        }
    }

    /// Installs `listener`, dropping whichever listener was registered before.
    pub fn register_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&SerializedGeometry) + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    pub fn current(&self) -> Option<&Rectangle> {
        self.current.as_ref().map(|(rect, _)| rect)
    }

    /// The encoded form of the stored rectangle.
    pub fn serialized(&self) -> Option<&SerializedGeometry> {
        self.current.as_ref().map(|(_, text)| text)
    }

    /// Bounding extent of the stored rectangle, for fitting the view.
    /// `None` when nothing is selected.
    pub fn current_extent(&self) -> Option<Extent> {
        self.current().map(|rect| *rect.extent())
    }
}

impl fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionStore")
            .field("current", &self.current())
            .field("has_listener", &self.has_listener())
            .finish()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn rect(min_x: f64) -> Rectangle {
        Rectangle::new(min_x, 51.0, min_x + 1.0, 52.0).unwrap()
    }

    /// Registers a listener that records every value it receives.
    fn recording(store: &mut SelectionStore) -> Rc<RefCell<Vec<String>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.register_listener(move |text| sink.borrow_mut().push(text.to_string()));
        seen
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = SelectionStore::new();
        assert!(store.current().is_none());
        assert!(store.current_extent().is_none());
        assert!(!store.has_listener());
    }

    #[test]
    fn test_replace_keeps_only_most_recent_rectangle() {
        // Arrange
        let mut store = SelectionStore::new();

        // Act
        for x in [-3.0, -2.0, -1.0] {
            store.replace(rect(x));
        }

        // Assert
        assert_eq!(store.current(), Some(&rect(-1.0)));
        assert_eq!(store.current_extent(), Some(*rect(-1.0).extent()));
    }

    #[test]
    fn test_replace_fires_listener_exactly_once_with_encoded_geometry() {
        let mut store = SelectionStore::new();
        let seen = recording(&mut store);

        store.replace(rect(0.0));

        assert_eq!(*seen.borrow(), vec![encode(&rect(0.0)).into_string()]);
        assert_eq!(store.serialized(), Some(&encode(&rect(0.0))));
    }

    #[test]
    fn test_clear_never_fires_listener() {
        let mut store = SelectionStore::new();
        store.replace(rect(0.0));
        let seen = recording(&mut store);

        store.clear();
        store.clear();

        assert!(seen.borrow().is_empty());
        assert!(store.current().is_none());
        assert!(store.serialized().is_none());
    }

    #[test]
    fn test_register_listener_replaces_previous_listener() {
        // Arrange
        let mut store = SelectionStore::new();
        let first = recording(&mut store);
        let second = recording(&mut store);

        // Act
        store.replace(rect(0.0));

        // Assert
        assert!(first.borrow().is_empty(), "replaced listener must not fire");
        assert_eq!(second.borrow().len(), 1);
    }

    #[test]
    fn test_replace_without_listener_still_stores() {
        let mut store = SelectionStore::new();
        store.replace(rect(2.0));
        assert_eq!(store.current(), Some(&rect(2.0)));
    }
}
