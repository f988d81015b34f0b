//! Property tests for per-tile collision rectangle extraction.

use proptest::prelude::*;
use tscproc::{extract, BoundingBox, PixelGrid, TileGridShape};

const CLEAR: [u8; 4] = [0, 0, 0, 0];
const SOLID: [u8; 4] = [10, 20, 30, 255];

/// Grid shape and tile size, each small enough to keep cases fast.
fn layout_strategy() -> impl Strategy<Value = (u32, u32, u32, u32)> {
    (1u32..5, 1u32..5, 1u32..12, 1u32..12)
}

fn sheet(columns: u32, rows: u32, tile_w: u32, tile_h: u32, painted: impl Fn(u32, u32) -> bool) -> PixelGrid {
    PixelGrid::from_fn(columns * tile_w, rows * tile_h, |x, y| {
        if painted(x, y) {
            SOLID
        } else {
            CLEAR
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_transparent_tiles_are_empty((columns, rows, tile_w, tile_h) in layout_strategy()) {
        let grid = sheet(columns, rows, tile_w, tile_h, |_, _| false);
        let boxes = extract(&grid, TileGridShape { columns, rows }).unwrap();

        prop_assert_eq!(boxes.len(), (columns * rows) as usize);
        prop_assert!(boxes.iter().all(|b| *b == BoundingBox::EMPTY));
    }

    #[test]
    fn prop_full_tiles_span_whole_tile((columns, rows, tile_w, tile_h) in layout_strategy()) {
        let grid = sheet(columns, rows, tile_w, tile_h, |_, _| true);
        let boxes = extract(&grid, TileGridShape { columns, rows }).unwrap();

        for (index, b) in boxes.iter().enumerate() {
            let col = index as u32 % columns;
            let row = index as u32 / columns;
            prop_assert_eq!(
                *b,
                BoundingBox::new(
                    (col * tile_w) as i32,
                    (row * tile_h) as i32,
                    tile_w as i32 - 1,
                    tile_h as i32 - 1,
                )
            );
        }
    }

    #[test]
    fn prop_single_pixel_has_zero_extent(
        (columns, rows, tile_w, tile_h) in (1u32..4, 1u32..4, 2u32..12, 2u32..12),
        tile_pick in any::<prop::sample::Index>(),
        dx_pick in any::<prop::sample::Index>(),
        dy_pick in any::<prop::sample::Index>(),
    ) {
        let tile = tile_pick.index((columns * rows) as usize) as u32;
        // Keep the pixel off the tile's right and bottom edges.
        let dx = dx_pick.index((tile_w - 1) as usize) as u32;
        let dy = dy_pick.index((tile_h - 1) as usize) as u32;

        let origin_x = tile % columns * tile_w;
        let origin_y = tile / columns * tile_h;
        let (px, py) = (origin_x + dx, origin_y + dy);

        let grid = sheet(columns, rows, tile_w, tile_h, |x, y| x == px && y == py);
        let boxes = extract(&grid, TileGridShape { columns, rows }).unwrap();

        for (index, b) in boxes.iter().enumerate() {
            if index as u32 == tile {
                prop_assert_eq!(*b, BoundingBox::new(px as i32, py as i32, 0, 0));
            } else {
                prop_assert_eq!(*b, BoundingBox::EMPTY);
            }
        }
    }

    #[test]
    fn prop_boxes_stay_inside_their_tile(
        (columns, rows, tile_w, tile_h) in layout_strategy(),
        seed in any::<u64>(),
    ) {
        let painted = |x: u32, y: u32| {
            let h = (x as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
                ^ (y as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F)
                ^ seed;
            h.wrapping_mul(0x1656_67B1_9E37_79F9) >> 61 == 0
        };
        let grid = sheet(columns, rows, tile_w, tile_h, painted);
        let boxes = extract(&grid, TileGridShape { columns, rows }).unwrap();

        for (index, b) in boxes.iter().enumerate() {
            if b.is_empty() {
                continue;
            }
            let x0 = (index as u32 % columns * tile_w) as i32;
            let y0 = (index as u32 / columns * tile_h) as i32;

            prop_assert!(b.x >= x0 && b.y >= y0);
            prop_assert!(b.w >= 0 && b.h >= 0);
            prop_assert!(b.x + b.w < x0 + tile_w as i32);
            prop_assert!(b.y + b.h < y0 + tile_h as i32);
            prop_assert!(grid.is_painted(b.x as u32, b.y as u32));
        }
    }

    #[test]
    fn prop_rectangles_are_found_exactly(
        (tile_w, tile_h) in (1u32..16, 1u32..16),
        (a, b, c, d) in (any::<prop::sample::Index>(), any::<prop::sample::Index>(), any::<prop::sample::Index>(), any::<prop::sample::Index>()),
    ) {
        let x0 = a.index(tile_w as usize) as u32;
        let y0 = b.index(tile_h as usize) as u32;
        let x1 = x0 + c.index((tile_w - x0) as usize) as u32;
        let y1 = y0 + d.index((tile_h - y0) as usize) as u32;

        let grid = sheet(1, 1, tile_w, tile_h, |x, y| (x0..=x1).contains(&x) && (y0..=y1).contains(&y));
        let boxes = extract(&grid, TileGridShape { columns: 1, rows: 1 }).unwrap();

        prop_assert_eq!(
            boxes,
            vec![BoundingBox::new(x0 as i32, y0 as i32, (x1 - x0) as i32, (y1 - y0) as i32)]
        );
    }
}
