//! Domain entities for the bounding-box editor.
//!
//! Everything here is pure logic: no I/O, no rendering, no host page.  The
//! editor crate wires these pieces to a render surface, a tile server and a
//! form field.
//!
//! Leaves first:
//!
//! - [`extent`] – coordinates and axis-aligned extents.
//! - [`projection`] – the named coordinate system and its valid area.
//! - [`tile_grid`] – resolution ladder and tile addressing from the origin.
//! - [`view`] – pixel ↔ projection transforms and extent fitting.
//! - [`rectangle`] – the selection geometry and its error type.
//! - [`selection`] – single-slot store with a single-slot listener.
//! - [`interaction`] – the drag-to-draw state machine.

pub mod error;
pub mod extent;
pub mod interaction;
pub mod projection;
pub mod rectangle;
pub mod selection;
pub mod tile_grid;
pub mod view;
