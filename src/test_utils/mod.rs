//! Shared test utilities: small worlds built from literal tile rows, a seeded
//! noise world, and a deterministic xorshift generator for randomized scroll
//! sequences.
//!
//! Glyph sets used here:
//! - `REGRESSION_GLYPHS`: empty, solid, alternating (0xAA/0x55), gradient
//!   (0x01, 0x03, ... 0xFF). Indices 0..4.
//! - noise worlds: 16 pseudo-random glyphs, so a byte landing in the wrong
//!   slot almost never matches by accident.

#![allow(dead_code)]

use crate::tiles::{MapGrid, TileStore, TileWorld};

pub const REGRESSION_GLYPHS: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, //
    0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, //
    0x01, 0x03, 0x07, 0x0F, 0x1F, 0x3F, 0x7F, 0xFF,
];

/// Xorshift32; never yields 0 for a non-zero seed.
#[derive(Clone, Debug)]
pub struct XorShift(u32);

impl XorShift {
    pub fn new(seed: u32) -> Self {
        Self(if seed == 0 { 0x2545_F491 } else { seed })
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }

    /// Uniform-ish value in `0..bound` (`bound > 0`).
    pub fn below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }
}

/// World whose map rows are given literally; glyphs are `REGRESSION_GLYPHS`.
pub fn world_from_rows(rows: &[&[u8]]) -> TileWorld {
    let height = rows.len();
    let width = rows[0].len();
    let mut cells = Vec::with_capacity(width * height);
    for row in rows {
        assert_eq!(row.len(), width, "ragged test map");
        cells.extend_from_slice(row);
    }
    let map = MapGrid::from_bytes(width, height, cells).unwrap();
    let tiles = TileStore::from_bytes(REGRESSION_GLYPHS.to_vec()).unwrap();
    TileWorld::new(map, tiles).unwrap()
}

/// One-tile-tall world holding `strip` as its only row.
pub fn strip_world(strip: &[u8]) -> TileWorld {
    world_from_rows(&[strip])
}

/// World with every cell set to `tile` (regression glyphs).
pub fn uniform_world(width: usize, height: usize, tile: u8) -> TileWorld {
    let map = MapGrid::filled(width, height, tile).unwrap();
    let tiles = TileStore::from_bytes(REGRESSION_GLYPHS.to_vec()).unwrap();
    TileWorld::new(map, tiles).unwrap()
}

/// Structured world (borders, checker blocks, grid) from the demo generator.
pub fn demo_like_world(width: usize, height: usize) -> TileWorld {
    crate::demo::demo_world_sized(width, height).unwrap()
}

/// World of 16 random glyphs scattered randomly over the map.
pub fn noise_world(seed: u32, width: usize, height: usize) -> TileWorld {
    let mut rng = XorShift::new(seed);
    let glyphs: Vec<u8> = (0..16 * 8).map(|_| rng.next_u32() as u8).collect();
    let map = MapGrid::from_fn(width, height, |_, _| rng.below(16) as u8).unwrap();
    let tiles = TileStore::from_bytes(glyphs).unwrap();
    TileWorld::new(map, tiles).unwrap()
}
