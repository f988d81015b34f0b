//! tscproc - Tileset collision rectangle extractor
//!
//! Reads a tile sheet PNG divided into a fixed grid of equal-sized tiles,
//! finds the collision rectangle of each tile's painted pixels, and writes a
//! tileset description listing the grid shape, authors and rectangles.

pub mod cli;
pub mod config;
pub mod decode;
pub mod error;
pub mod extract;
pub mod ingest;
pub mod output;
pub mod pipeline;
pub mod serialize;
pub mod types;

pub use config::ConvertConfig;
pub use decode::{decode, is_png, PNG_SIGNATURE};
pub use error::{Result, TscError, Warning};
pub use extract::extract;
pub use ingest::{classify, read_tileset, InputKind};
pub use pipeline::{convert, Conversion};
pub use serialize::{serialize, write_tileset};
pub use types::{AuthorEntry, BoundingBox, PixelGrid, TileGridShape, TilesetDescription};
