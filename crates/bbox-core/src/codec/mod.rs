//! Text encodings that cross the widget boundary.

pub mod geojson;

pub use geojson::{decode, encode, SerializedGeometry};
