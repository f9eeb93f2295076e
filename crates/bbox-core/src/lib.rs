//! # bbox-core
//!
//! Core of an interactive map widget that lets a user draw, view and edit one
//! rectangular geographic bounding box, and exchange it with a host page as
//! GeoJSON text.
//!
//! This crate has no dependencies on rendering, tile fetching or the host
//! page.  It defines:
//!
//! - **`domain`** – projection and tile-grid configuration, view transforms,
//!   the selection store and the drag-to-draw state machine.
//!
//! - **`codec`** – the GeoJSON encoding that is the only form in which a
//!   selection crosses the widget boundary.
//!
//! # Control flow
//!
//! ```text
//! host field ──decode──► SelectionStore ◄──commit── DragSelectInteraction
//!                             │                          ▲
//!                             └─encode─► listener ──► host field
//!                                                   pointer events
//! ```

pub mod codec;
pub mod domain;

pub use codec::geojson::{decode, encode, SerializedGeometry};
pub use domain::error::ConfigurationError;
pub use domain::extent::{Coordinate, Extent, ExtentError};
pub use domain::interaction::{DragOutcome, DragSelectInteraction, DragState};
pub use domain::projection::Projection;
pub use domain::rectangle::{GeometryError, Rectangle};
pub use domain::selection::{SelectionListener, SelectionStore};
pub use domain::tile_grid::{ResolutionLadder, TileCoord, TileGrid, TileRange};
pub use domain::view::{PixelPoint, PixelRect, PixelSize, ViewState};
