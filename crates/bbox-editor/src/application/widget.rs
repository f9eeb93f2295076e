//! EditorWidget: one self-contained bounding-box editor.
//!
//! The widget owns every component it needs (selection store, map view,
//! binding adapter) and nothing is shared between instances, so a page can
//! host as many editors as it likes.  Dropping the widget disposes of all of
//! it, including the registered listener.
//!
//! # Host entry points
//!
//! | Method                         | Purpose                                        |
//! |--------------------------------|------------------------------------------------|
//! | [`EditorWidget::set_selection`]| Set the box from GeoJSON text                  |
//! | [`EditorWidget::on_change`]    | Register the (single) change listener          |
//! | [`EditorWidget::bind`]         | Seed from a form field and write changes back  |
//! | [`EditorWidget::activate_draw`]| What the draw control does when clicked        |
//! | [`EditorWidget::handle_pointer`]| Pointer input on the map surface              |
//! | [`EditorWidget::handle_visibility`]| "A panel became visible"                   |

use std::fmt;
use std::rc::Rc;

use tracing::info;
use uuid::Uuid;

use bbox_core::{
    decode, ConfigurationError, GeometryError, Rectangle, SelectionStore, SerializedGeometry,
};

use crate::application::binding::{BindOutcome, BindingAdapter};
use crate::application::map_view::{Frame, MapView, PointerResponse};
use crate::application::ports::{FormField, RenderSurface, TileSource};
use crate::domain::config::EditorConfig;
use crate::domain::events::{DrawControl, PointerEvent, VisibilityEvent};

/// Identifies one widget instance in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(Uuid);

impl WidgetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub struct EditorWidget {
    id: WidgetId,
    store: SelectionStore,
    map: MapView,
    binding: BindingAdapter,
}

impl EditorWidget {
    /// Builds a widget from `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the projection, tile grid or
    /// initial view in `config` is unusable.  No widget is created then.
    pub fn new(
        config: &EditorConfig,
        surface: Box<dyn RenderSurface>,
        tiles: Box<dyn TileSource>,
    ) -> Result<Self, ConfigurationError> {
        let setup = config.build()?;
        let id = WidgetId::new();
        info!(%id, projection = setup.projection.code(), "editor widget created");
        Ok(Self {
            id,
            store: SelectionStore::new(),
            map: MapView::new(
                setup,
                surface,
                tiles,
                config.style.clone(),
                config.interaction.min_drag_distance_px,
            ),
            binding: BindingAdapter::new(config.editor.panel_id.clone()),
        })
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Replaces the selection with the rectangle encoded in `text` and frames it.
    ///
    /// A registered listener fires as for any other change.
    ///
    /// # Errors
    ///
    /// Returns the [`GeometryError`] from decoding.  The current selection and
    /// view are left as they were.
    pub fn set_selection(&mut self, text: &str) -> Result<(), GeometryError> {
        let rect = decode(text)?;
        self.store.replace(rect);
        self.map.refit_to_selection(&self.store);
        Ok(())
    }

    /// Installs the change listener, replacing any earlier one (including the
    /// write-back listener installed by [`EditorWidget::bind`]).
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(&SerializedGeometry) + 'static,
    {
        self.store.register_listener(listener);
    }

    /// Seeds the selection from `field` and keeps the field up to date.
    pub fn bind<F>(&mut self, field: Rc<F>) -> BindOutcome
    where
        F: FormField + ?Sized + 'static,
    {
        self.binding.bind(field, &mut self.store, &mut self.map)
    }

    /// Enters draw mode.  The current selection is cleared straight away.
    pub fn activate_draw(&mut self) {
        self.map.activate_draw(&mut self.store);
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> PointerResponse {
        self.map.handle_pointer(event, &mut self.store)
    }

    /// Returns `true` if the event concerned this widget's panel.
    pub fn handle_visibility(&mut self, event: &VisibilityEvent) -> bool {
        self.binding.on_visible(event, &mut self.map, &self.store)
    }

    /// # Errors
    ///
    /// See [`MapView::render`].
    pub fn render(&self) -> Result<Frame, ConfigurationError> {
        self.map.render(&self.store)
    }

    pub fn selection(&self) -> Option<&Rectangle> {
        self.store.current()
    }

    pub fn serialized(&self) -> Option<&SerializedGeometry> {
        self.store.serialized()
    }

    pub fn map_view(&self) -> &MapView {
        &self.map
    }

    pub fn draw_control(&self) -> &DrawControl {
        self.map.draw_control()
    }
}

impl fmt::Debug for EditorWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorWidget")
            .field("id", &self.id)
            .field("store", &self.store)
            .field("view", self.map.view())
            .field("binding", &self.binding)
            .finish()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
