/*!
Built-in demo content: a four-glyph tile set and a procedurally generated map.

Map layout (per tile cell):
- outer ring of the map: border glyph
- 4x4-tile checkerboard blocks: checker glyph
- every 8th row/column elsewhere: solid glyph (a coarse grid)
- everything else: empty
*/

use crate::error::Result;
use crate::tiles::{MapGrid, TileStore, TileWorld};

pub const DEMO_MAP_WIDTH: usize = 96;
pub const DEMO_MAP_HEIGHT: usize = 48;

pub const TILE_EMPTY: u8 = 0;
pub const TILE_SOLID: u8 = 1;
pub const TILE_CHECKER: u8 = 2;
pub const TILE_BORDER: u8 = 3;

/// 8 bytes per glyph, one scanline each.
pub const DEMO_GLYPHS: [u8; 32] = [
    // Empty
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    // Solid block
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, //
    // Checkerboard
    0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, //
    // Border
    0xFF, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0xFF,
];

pub fn demo_tiles() -> Result<TileStore> {
    TileStore::from_bytes(DEMO_GLYPHS.to_vec())
}

/// Demo map of `width` x `height` tiles.
pub fn generate_map(width: usize, height: usize) -> Result<MapGrid> {
    MapGrid::from_fn(width, height, |x, y| {
        if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
            TILE_BORDER
        } else if ((x >> 2) + (y >> 2)) & 1 == 1 {
            TILE_CHECKER
        } else if x & 7 == 0 || y & 7 == 0 {
            TILE_SOLID
        } else {
            TILE_EMPTY
        }
    })
}

pub fn demo_world_sized(width: usize, height: usize) -> Result<TileWorld> {
    TileWorld::new(generate_map(width, height)?, demo_tiles()?)
}

/// The default 96x48 demo world.
pub fn demo_world() -> Result<TileWorld> {
    demo_world_sized(DEMO_MAP_WIDTH, DEMO_MAP_HEIGHT)
}
