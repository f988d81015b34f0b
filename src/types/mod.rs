//! Core domain types for tscproc.
//!
//! This module contains the types that flow through the conversion:
//! - `PixelGrid` - Decoded RGBA raster
//! - `TileGridShape` - Columns and rows of the tile grid
//! - `BoundingBox` - Per-tile collision rectangle
//! - `TilesetDescription` - Shape, authors and boxes ready for output

mod pixels;
mod tileset;

pub use pixels::PixelGrid;
pub use tileset::{AuthorEntry, BoundingBox, TileGridShape, TilesetDescription};
