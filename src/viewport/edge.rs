#![doc = r#"
Edge renderer

Responsibilities
- Sample one packed output byte from the map at an arbitrary pixel position,
  blending two horizontally adjacent glyphs when the position is not byte-aligned.
- Fill one full cache row (all W + 1 slots, following the column ring) or one
  full cache byte column (all H rows, following the row ring).

Clamping
- Source tile row is clamped to the last map row; source tile column to the
  last map column. Past the right edge the sample is forced byte-aligned, and
  the blend neighbour at the right edge repeats the left tile. The edge freezes
  instead of wrapping; the scroll controller never moves the camera there.

Integration
- `render_row` / `render_column` are inherent methods on `Viewport` so they can
  write the private buffer; the free functions are shared with the blitter's
  reference renderer.
"#]

use super::Viewport;
use crate::tiles::TileSource;

/// Combine two glyph scanlines shifted left by `fine` pixels (0..8).
#[inline]
pub fn blend(left: u8, right: u8, fine: u8) -> u8 {
    debug_assert!(fine < 8);
    if fine == 0 {
        left
    } else {
        (left << fine) | (right >> (8 - fine))
    }
}

/// One packed byte of the map whose MSB is map pixel `(pixel_x, pixel_y)`.
#[inline]
pub fn sample_byte<S: TileSource>(src: &S, pixel_x: usize, pixel_y: usize) -> u8 {
    let w = src.map_width();
    let mut tile_x = pixel_x >> 3;
    let mut fine = (pixel_x & 7) as u8;
    if tile_x >= w {
        tile_x = w - 1;
        fine = 0;
    }
    let tile_y = (pixel_y >> 3).min(src.map_height() - 1);
    let row = pixel_y & 7;

    let left = src.glyph_row(src.tile_at(tile_x, tile_y), row);
    if fine == 0 {
        return left;
    }
    let right_x = if tile_x + 1 < w { tile_x + 1 } else { tile_x };
    let right = src.glyph_row(src.tile_at(right_x, tile_y), row);
    blend(left, right, fine)
}

/// Fill `out` with consecutive bytes of map scanline `pixel_y` starting at `pixel_x`.
pub fn sample_row<S: TileSource>(src: &S, pixel_x: usize, pixel_y: usize, out: &mut [u8]) {
    if pixel_x & 7 != 0 {
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = sample_byte(src, pixel_x + i * 8, pixel_y);
        }
        return;
    }

    // Aligned: one glyph fetch per byte.
    let last_col = src.map_width() - 1;
    let tile_y = (pixel_y >> 3).min(src.map_height() - 1);
    let row = pixel_y & 7;
    let first = pixel_x >> 3;
    for (i, byte) in out.iter_mut().enumerate() {
        let tile_x = (first + i).min(last_col);
        *byte = src.glyph_row(src.tile_at(tile_x, tile_y), row);
    }
}

impl Viewport {
    /// Render physical cache row `physical_row` as map scanline `pixel_y`.
    ///
    /// Writes all W + 1 slots in column-ring order: logical column `c` (slot
    /// `col_head + c`) gets the byte at `base_x + 8c`.
    pub(in crate::viewport) fn render_row<S: TileSource>(
        &mut self,
        src: &S,
        physical_row: usize,
        pixel_y: usize,
    ) {
        let ring_w = self.cols.size();
        let base_x = self.base_x();
        let start = physical_row * ring_w;
        let row = &mut self.buffer[start..start + ring_w];

        // Logical column 0 sits at col_head; split the fill at the wrap point.
        let head = self.col_head;
        let (wrapped, tail) = row.split_at_mut(head);
        sample_row(src, base_x, pixel_y, tail);
        sample_row(src, base_x + (ring_w - head) * 8, pixel_y, wrapped);
    }

    /// Render physical cache column `physical_col` as the map byte starting at `pixel_x`,
    /// for every visible scanline from `camera_y` down, in row-ring order.
    pub(in crate::viewport) fn render_column<S: TileSource>(
        &mut self,
        src: &S,
        physical_col: usize,
        pixel_x: usize,
    ) {
        let ring_w = self.cols.size();
        let top = self.camera_y as usize;
        let mut phys = self.row_head;
        for r in 0..self.rows.size() {
            self.buffer[phys * ring_w + physical_col] = sample_byte(src, pixel_x, top + r);
            phys = self.rows.advance(phys);
        }
        log::trace!("column edge: slot {} <- x={}", physical_col, pixel_x);
    }
}
