//! Image-to-tileset conversion.
//!
//! Wires the stages together: classify the input, validate the grid shape,
//! decode the image, extract one box per tile, and collect warnings. The
//! decoded pixels are dropped as soon as the boxes are known.

use crate::config::ConvertConfig;
use crate::decode::decode;
use crate::error::{Result, Warning};
use crate::extract::extract;
use crate::ingest::{classify, read_tileset, InputKind};
use crate::types::TilesetDescription;

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub tileset: TilesetDescription,
    /// Decoded image dimensions as (width, height); `None` for tileset input.
    pub image_size: Option<(u32, u32)>,
    pub warnings: Vec<Warning>,
}

/// Convert a tile sheet PNG into a tileset description.
///
/// Non-PNG input is routed to the tileset reader. The grid shape is checked
/// before any decoding happens.
pub fn convert(bytes: &[u8], config: &ConvertConfig) -> Result<Conversion> {
    if classify(bytes) == InputKind::Tileset {
        let tileset = read_tileset(bytes)?;
        let warnings = tileset.warnings();
        return Ok(Conversion {
            tileset,
            image_size: None,
            warnings,
        });
    }

    let shape = config.shape()?;

    let (image_size, tiles) = {
        let grid = decode(bytes)?;
        (grid.size(), extract(&grid, shape)?)
    };

    let tileset = TilesetDescription::new(shape, config.authors.clone(), tiles);
    let warnings = tileset.warnings();

    Ok(Conversion {
        tileset,
        image_size: Some(image_size),
        warnings,
    })
}
