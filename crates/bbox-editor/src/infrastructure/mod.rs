//! Infrastructure layer: concrete collaborators and file I/O.
//!
//! - **`wms`**          – [`WmsTileSource`], the `GetMap` URL builder behind
//!   the basemap.
//! - **`surface`**      – [`FixedSurface`], a render surface whose size the
//!   host sets directly.
//! - **`field`**        – [`TextField`], an in-memory form field.
//! - **`config_store`** – Loading and saving the TOML configuration file.

pub mod config_store;
pub mod field;
pub mod surface;
pub mod wms;

pub use config_store::{load_config, save_config, ConfigError};
pub use field::TextField;
pub use surface::FixedSurface;
pub use wms::WmsTileSource;
