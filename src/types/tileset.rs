//! Tileset description types.
//!
//! A tileset description is the sole output of a conversion: the grid shape,
//! the ordered author list, and one collision rectangle per tile.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TscError, Warning};

/// Number of tile columns and rows the source image is divided into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGridShape {
    pub columns: u32,
    pub rows: u32,
}

impl TileGridShape {
    /// Create a validated grid shape.
    pub fn new(columns: u32, rows: u32) -> Result<Self> {
        let shape = Self { columns, rows };
        shape.validate()?;
        Ok(shape)
    }

    /// Reject shapes with zero columns or rows.
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(TscError::Configuration {
                message: format!(
                    "Rows and columns must be non-zero, got {} column(s) and {} row(s)",
                    self.columns, self.rows
                ),
                help: Some("Pass --tiles COLSxROWS, for example: --tiles 8x4".to_string()),
            });
        }
        Ok(())
    }

    /// Total number of tiles.
    pub fn tile_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Size of a single tile for an image of the given dimensions.
    ///
    /// Uses integer division; trailing pixels that do not fill a whole tile
    /// are not covered by any tile.
    pub fn tile_size(&self, image_width: u32, image_height: u32) -> (u32, u32) {
        (image_width / self.columns, image_height / self.rows)
    }
}

/// Collision rectangle of a single tile.
///
/// `x`/`y` are absolute image coordinates of the top-left painted pixel;
/// `w`/`h` are offsets from that corner to the far edge, so a single pixel
/// has `w == h == 0`. A tile without painted pixels has every field at `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl BoundingBox {
    /// Sentinel for tiles without collision geometry.
    pub const EMPTY: BoundingBox = BoundingBox {
        x: -1,
        y: -1,
        w: -1,
        h: -1,
    };

    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Check if this tile has no collision rectangle.
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// An author credit: who contributed and what they did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorEntry {
    pub name: String,
    #[serde(default)]
    pub detail: String,
}

impl AuthorEntry {
    pub fn new(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: detail.into(),
        }
    }
}

/// Grid shape, authors in display order, and per-tile boxes in tile order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilesetDescription {
    pub shape: TileGridShape,
    pub authors: Vec<AuthorEntry>,
    pub tiles: Vec<BoundingBox>,
}

impl TilesetDescription {
    pub fn new(shape: TileGridShape, authors: Vec<AuthorEntry>, tiles: Vec<BoundingBox>) -> Self {
        Self {
            shape,
            authors,
            tiles,
        }
    }

    /// Number of tiles that carry a collision rectangle.
    pub fn collision_count(&self) -> usize {
        self.tiles.iter().filter(|b| !b.is_empty()).count()
    }

    /// Non-fatal problems with this description, in reporting order.
    pub fn warnings(&self) -> Vec<Warning> {
        let mut warnings = Vec::new();
        if self.collision_count() == 0 {
            warnings.push(Warning::NoBoundingBoxes);
        }
        if self.authors.is_empty() {
            warnings.push(Warning::NoAuthors);
        }
        warnings
    }
}
