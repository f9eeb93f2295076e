//! Domain layer for bbox-editor.
//!
//! Plain data: the configuration schema and the events a host sends in.  No
//! I/O and no references to the render surface or tile server.

pub mod config;
pub mod events;

pub use config::{
    EditorConfig, GeneralConfig, InteractionConfig, MapSetup, ProjectionConfig, StyleConfig,
    TileGridConfig, ViewConfig, WmsConfig,
};
pub use events::{DrawControl, PointerEvent, VisibilityEvent};
