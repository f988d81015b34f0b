//! Per-tile collision rectangle extraction.
//!
//! Each tile is scanned top-to-bottom, left-to-right in three phases:
//!
//! 1. Find the top-left corner: the first painted pixel in raster order.
//! 2. Find the width: walk right along the corner row until a pixel is
//!    unpainted or the tile's right edge is reached.
//! 3. Find the height: walk down the corner column until a pixel is
//!    unpainted or the tile's bottom edge is reached.
//!
//! A run stopped by an unpainted pixel ends on the last painted pixel, even
//! when that unpainted pixel is the tile's last column or row; only a run
//! that is still painted at the edge extends to it. This keeps a single
//! painted pixel at `w == h == 0`.
//!
//! Phase 3 samples only the corner column. A shape that narrows or steps
//! below its top row reports the height of that single column, not its true
//! lower extent.

use crate::error::Result;
use crate::types::{BoundingBox, PixelGrid, TileGridShape};

/// Absolute pixel region covered by one tile. `x_end`/`y_end` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TileRegion {
    x_start: u32,
    y_start: u32,
    x_end: u32,
    y_end: u32,
}

impl TileRegion {
    fn new(shape: &TileGridShape, index: usize, tile_w: u32, tile_h: u32) -> Self {
        let col = (index % shape.columns as usize) as u32;
        let row = (index / shape.columns as usize) as u32;
        let x_start = col * tile_w;
        let y_start = row * tile_h;

        Self {
            x_start,
            y_start,
            x_end: x_start + tile_w,
            y_end: y_start + tile_h,
        }
    }
}

/// Compute one bounding box per tile, in row-major tile order.
///
/// The shape is validated before any pixel is read.
pub fn extract(grid: &PixelGrid, shape: TileGridShape) -> Result<Vec<BoundingBox>> {
    shape.validate()?;

    let (tile_w, tile_h) = shape.tile_size(grid.width(), grid.height());

    let boxes = (0..shape.tile_count())
        .map(|index| scan_tile(grid, TileRegion::new(&shape, index, tile_w, tile_h)))
        .collect();

    Ok(boxes)
}

fn scan_tile(grid: &PixelGrid, tile: TileRegion) -> BoundingBox {
    let Some((x, y)) = find_corner(grid, tile) else {
        return BoundingBox::EMPTY;
    };

    let right = find_right_edge(grid, tile, x, y);
    let bottom = find_bottom_edge(grid, tile, x, y);

    BoundingBox::new(
        x as i32,
        y as i32,
        (right - x) as i32,
        (bottom - y) as i32,
    )
}

/// Phase 1: first painted pixel in raster order.
fn find_corner(grid: &PixelGrid, tile: TileRegion) -> Option<(u32, u32)> {
    (tile.y_start..tile.y_end).find_map(|y| {
        (tile.x_start..tile.x_end)
            .find(|&x| grid.is_painted(x, y))
            .map(|x| (x, y))
    })
}

/// Phase 2: last column of the painted run starting at the corner.
///
/// Stops at the column before the first unpainted pixel, or at the tile's
/// last column if the run reaches it.
fn find_right_edge(grid: &PixelGrid, tile: TileRegion, x: u32, y: u32) -> u32 {
    for col in x..tile.x_end {
        if !grid.is_painted(col, y) {
            return col - 1;
        }
        if col + 1 >= tile.x_end {
            return col;
        }
    }
    x
}

/// Phase 3: last row of the painted run below the corner, column `x` only.
fn find_bottom_edge(grid: &PixelGrid, tile: TileRegion, x: u32, y: u32) -> u32 {
    for row in y..tile.y_end {
        if !grid.is_painted(x, row) {
            return row - 1;
        }
        if row + 1 >= tile.y_end {
            return row;
        }
    }
    y
}
