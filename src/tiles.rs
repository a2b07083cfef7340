/*!
tiles: read-only map and glyph data, and the trait the renderer reads through.

Data
- `TileStore`: flat glyph table, 8 bytes per glyph (one packed scanline per
  byte, MSB = leftmost pixel). Up to 256 glyphs, addressed by a `u8` index.
- `MapGrid`: row-major grid of glyph indices, `width * height` bytes.
- `TileWorld`: a map paired with the glyph table it references. Construction
  checks that every map cell resolves to a loaded glyph, so the render path
  can index without bounds handling.

Seam
- The edge renderer depends only on `TileSource`. Callers may implement it
  over their own storage (e.g. ROM-resident tables) instead of `TileWorld`.
- Index arguments outside the map or glyph table are a caller contract
  violation; implementors may panic.
*/

use crate::error::{Result, ScrollError};

/// Bytes (scanlines) per glyph.
pub const GLYPH_BYTES: usize = 8;
/// Largest glyph table addressable by a `u8` tile index.
pub const MAX_GLYPHS: usize = 256;

/// Minimal interface the edge renderer depends on for map and glyph fetches.
pub trait TileSource {
    /// Map width in tiles.
    fn map_width(&self) -> usize;
    /// Map height in tiles.
    fn map_height(&self) -> usize;
    /// Glyph index stored at `(tile_x, tile_y)`. Both must be in range.
    fn tile_at(&self, tile_x: usize, tile_y: usize) -> u8;
    /// Scanline `row` (0..8) of glyph `tile`.
    fn glyph_row(&self, tile: u8, row: usize) -> u8;

    #[inline]
    fn map_width_px(&self) -> usize {
        self.map_width() * 8
    }

    #[inline]
    fn map_height_px(&self) -> usize {
        self.map_height() * 8
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileStore {
    glyphs: Vec<u8>,
}

impl TileStore {
    /// Wrap a glyph table. Length must be a non-zero multiple of 8, at most 256 glyphs.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let glyphs = bytes.into();
        if glyphs.is_empty() || glyphs.len() % GLYPH_BYTES != 0 {
            return Err(ScrollError::GlyphTableMisaligned(glyphs.len()));
        }
        let count = glyphs.len() / GLYPH_BYTES;
        if count > MAX_GLYPHS {
            return Err(ScrollError::GlyphTableTooLarge(count));
        }
        Ok(Self { glyphs })
    }

    /// Number of glyphs in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.glyphs.len() / GLYPH_BYTES
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    #[inline]
    pub fn row(&self, tile: u8, row: usize) -> u8 {
        debug_assert!(row < GLYPH_BYTES, "glyph scanline {row} out of range");
        self.glyphs[tile as usize * GLYPH_BYTES + row]
    }

    /// All 8 scanlines of one glyph.
    pub fn glyph(&self, tile: u8) -> &[u8] {
        let base = tile as usize * GLYPH_BYTES;
        &self.glyphs[base..base + GLYPH_BYTES]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.glyphs
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapGrid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl MapGrid {
    /// Wrap a row-major tile-index grid of `width * height` bytes.
    pub fn from_bytes(width: usize, height: usize, bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let cells = bytes.into();
        let expected = width * height;
        if cells.len() != expected || expected == 0 {
            return Err(ScrollError::MapSizeMismatch {
                width,
                height,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// A grid with every cell set to `tile`.
    pub fn filled(width: usize, height: usize, tile: u8) -> Result<Self> {
        Self::from_bytes(width, height, vec![tile; width * height])
    }

    /// Build a grid cell by cell from `f(x, y)`.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> u8,
    {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self::from_bytes(width, height, cells)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        debug_assert!(x < self.width && y < self.height, "map cell ({x}, {y}) out of range");
        self.cells[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, tile: u8) {
        self.cells[y * self.width + x] = tile;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }
}

/// A map together with the glyph table it indexes.
#[derive(Clone, Debug)]
pub struct TileWorld {
    map: MapGrid,
    tiles: TileStore,
}

impl TileWorld {
    pub fn new(map: MapGrid, tiles: TileStore) -> Result<Self> {
        let available = tiles.len();
        for y in 0..map.height() {
            for x in 0..map.width() {
                let tile = map.get(x, y);
                if tile as usize >= available {
                    return Err(ScrollError::MissingGlyph {
                        x,
                        y,
                        tile,
                        available,
                    });
                }
            }
        }
        Ok(Self { map, tiles })
    }

    pub fn map(&self) -> &MapGrid {
        &self.map
    }

    pub fn tiles(&self) -> &TileStore {
        &self.tiles
    }
}

impl TileSource for TileWorld {
    #[inline]
    fn map_width(&self) -> usize {
        self.map.width()
    }

    #[inline]
    fn map_height(&self) -> usize {
        self.map.height()
    }

    #[inline]
    fn tile_at(&self, tile_x: usize, tile_y: usize) -> u8 {
        self.map.get(tile_x, tile_y)
    }

    #[inline]
    fn glyph_row(&self, tile: u8, row: usize) -> u8 {
        self.tiles.row(tile, row)
    }
}
