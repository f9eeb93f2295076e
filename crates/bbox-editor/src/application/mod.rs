//! Application layer for the editor widget.
//!
//! # What lives here? (for beginners)
//!
//! The domain types in `bbox-core` know nothing about screens, tile servers
//! or form fields.  This layer wires them together into a widget a host page
//! can drive, talking to the outside world only through the traits in
//! [`ports`].  Swapping the render surface or tile server never touches this
//! code.
//!
//! # Sub-modules
//!
//! - **`ports`**    – The `RenderSurface`, `TileSource` and `FormField` seams.
//!
//! - **`map_view`** – Basemap tiles, the selection overlay and routing of
//!   pointer input to the drag interaction.
//!
//! - **`binding`**  – Seeds the selection from a form field, writes changes
//!   back, and handles "panel became visible".
//!
//! - **`widget`**   – The factory that owns one complete editor instance.

pub mod binding;
pub mod map_view;
pub mod ports;
pub mod widget;

pub use binding::{BindOutcome, BindingAdapter};
pub use map_view::{Frame, MapView, PointerResponse};
pub use ports::{FormField, RenderSurface, TileRequest, TileSource};
pub use widget::{EditorWidget, WidgetId};
