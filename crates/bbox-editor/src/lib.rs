//! bbox-editor library crate.
//!
//! An embeddable editor for one geographic bounding box: a tiled WMS basemap,
//! a draw control, and a two-way binding to a host form field that carries
//! the box as GeoJSON text.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! Host page (form field, tab visibility, pointer events)
//!         ↕
//! [bbox-editor]
//!   ├── domain/           Configuration schema, host events
//!   ├── application/      MapView, BindingAdapter, EditorWidget
//!   └── infrastructure/
//!         ├── wms/        GetMap URL builder (TileSource)
//!         ├── surface/    In-memory RenderSurface
//!         ├── field/      In-memory FormField
//!         └── config_store/ TOML load/save
//!         ↕
//! [bbox-core]  projection, tile grid, codec, selection store, drag machine
//! ```
//!
//! # Layer rules
//!
//! - `domain` holds plain data and validation only.
//! - `application` depends on `domain` and `bbox-core`, and reaches the
//!   outside world only through the traits in `application::ports`.
//! - `infrastructure` implements those traits and owns all file I/O.
//!
//! Everything runs on the host's UI thread.  Shared state is `Rc`/`RefCell`,
//! not `Arc`/`Mutex`.

/// Domain layer: configuration and host events (no I/O).
pub mod domain;

/// Application layer: the widget and its components.
pub mod application;

/// Infrastructure layer: tile source, in-memory collaborators, config files.
pub mod infrastructure;
