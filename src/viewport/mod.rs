/*!
Viewport: the ring-addressed raster cache and its camera state.

INVARIANT (holds between calls):
- Logical row `r` (screen scanline r) lives at physical row `(row_head + r) mod H`.
- Logical byte column `c` lives at physical column `(col_head + c) mod (W + 1)`,
  where W is the visible width in bytes and slot W is the lookahead byte.
- Logical `(r, c)` holds the byte-aligned glyph scanline for map pixel
  `(camera_x - fine_x + 8c, camera_y + r)`. The sub-byte shift by `fine_x`
  is applied by the blitter on read (see `crate::blit`).

STRUCTURE:
- `ring.rs`: wrap-around slot arithmetic for both rings.
- `edge.rs`: edge renderer: byte sampling/blending and row/column fills.
- `scroll.rs`: scroll controller: direction decode, clamping, two-pass stepping.
- `tests.rs`: incremental-vs-full-redraw equivalence and scenario tests.

The cache is primed at construction; there is no way to scroll an
unpopulated cache. After any discontinuous camera move use `jump_to`, which
clamps and full-redraws.
*/

pub(crate) mod edge;
pub(crate) mod ring;
pub(crate) mod scroll;

#[cfg(test)]
mod tests;

pub use edge::{blend, sample_byte, sample_row};

use crate::config::ViewportConfig;
use crate::error::{Result, ScrollError};
use crate::tiles::TileSource;
use ring::Ring;

pub struct Viewport {
    config: ViewportConfig,

    // H rows of (W + 1) packed bytes
    buffer: Vec<u8>,

    // Ring geometry: rows wrap at H, byte columns at W + 1
    rows: Ring,
    cols: Ring,

    // Head/offset state
    row_head: usize,
    col_head: usize,
    fine_x: u8,

    // Camera (top-left map pixel) and its inclusive upper bounds
    camera_x: i32,
    camera_y: i32,
    max_x: i32,
    max_y: i32,
}

/// Read-only view of the cache for a blit adapter.
#[derive(Copy, Clone, Debug)]
pub struct CacheView<'a> {
    pub buffer: &'a [u8],
    pub ring_width: usize,
    pub visible_width_bytes: usize,
    pub height_px: usize,
    pub row_head: usize,
    pub col_head: usize,
    pub fine_x: u8,
}

impl<'a> CacheView<'a> {
    /// Byte at logical `(row, col)`, `col` in `0..=visible_width_bytes`.
    #[inline]
    pub fn logical(&self, row: usize, col: usize) -> u8 {
        debug_assert!(row < self.height_px && col < self.ring_width);
        let mut r = self.row_head + row;
        if r >= self.height_px {
            r -= self.height_px;
        }
        let mut c = self.col_head + col;
        if c >= self.ring_width {
            c -= self.ring_width;
        }
        self.buffer[r * self.ring_width + c]
    }
}

impl std::fmt::Debug for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewport")
            .field("config", &self.config)
            .field("camera", &(self.camera_x, self.camera_y))
            .field("row_head", &self.row_head)
            .field("col_head", &self.col_head)
            .field("fine_x", &self.fine_x)
            .finish()
    }
}

impl Viewport {
    // -------------- Construction --------------

    /// Create a viewport over `src` with the camera at the map origin and a primed cache.
    pub fn new<S: TileSource>(config: ViewportConfig, src: &S) -> Result<Self> {
        config.validate()?;

        let map_w = src.map_width_px();
        let map_h = src.map_height_px();
        if map_w < config.width_px() {
            return Err(ScrollError::MapTooSmall {
                axis: "x",
                map_px: map_w,
                viewport_px: config.width_px(),
            });
        }
        if map_h < config.height_px {
            return Err(ScrollError::MapTooSmall {
                axis: "y",
                map_px: map_h,
                viewport_px: config.height_px,
            });
        }

        let mut vp = Self {
            config,
            buffer: vec![0; config.buffer_len()],
            rows: Ring::new(config.height_px),
            cols: Ring::new(config.ring_width()),
            row_head: 0,
            col_head: 0,
            fine_x: 0,
            camera_x: 0,
            camera_y: 0,
            max_x: (map_w - config.width_px()) as i32,
            max_y: (map_h - config.height_px) as i32,
        };
        vp.full_redraw(src);
        Ok(vp)
    }

    // -------------- Full redraw --------------

    /// Reset heads to the origin and repopulate every row of the cache.
    pub fn full_redraw<S: TileSource>(&mut self, src: &S) {
        self.debug_check_source(src);
        self.row_head = 0;
        self.col_head = 0;
        self.fine_x = (self.camera_x & 7) as u8;
        let top = self.camera_y as usize;
        for r in 0..self.config.height_px {
            self.render_row(src, r, top + r);
        }
        log::debug!(
            "full redraw at ({}, {}), fine_x={}",
            self.camera_x,
            self.camera_y,
            self.fine_x
        );
    }

    /// Move the camera discontinuously (clamped to the map) and full-redraw.
    pub fn jump_to<S: TileSource>(&mut self, src: &S, x: i32, y: i32) {
        self.camera_x = x.clamp(0, self.max_x);
        self.camera_y = y.clamp(0, self.max_y);
        if (self.camera_x, self.camera_y) != (x, y) {
            log::debug!(
                "jump target ({}, {}) clamped to ({}, {})",
                x,
                y,
                self.camera_x,
                self.camera_y
            );
        }
        self.full_redraw(src);
    }

    // -------------- Accessors --------------

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    #[inline]
    pub fn camera(&self) -> (i32, i32) {
        (self.camera_x, self.camera_y)
    }

    /// Largest legal camera position `(max_x, max_y)`.
    #[inline]
    pub fn camera_limits(&self) -> (i32, i32) {
        (self.max_x, self.max_y)
    }

    #[inline]
    pub fn row_head(&self) -> usize {
        self.row_head
    }

    #[inline]
    pub fn col_head(&self) -> usize {
        self.col_head
    }

    #[inline]
    pub fn fine_x(&self) -> u8 {
        self.fine_x
    }

    /// Raw physical cache, `H` rows of `W + 1` bytes.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn cache_view(&self) -> CacheView<'_> {
        CacheView {
            buffer: &self.buffer,
            ring_width: self.cols.size(),
            visible_width_bytes: self.config.visible_width_bytes,
            height_px: self.rows.size(),
            row_head: self.row_head,
            col_head: self.col_head,
            fine_x: self.fine_x,
        }
    }

    /// Cache contents unrolled into logical order (`H` rows of `W + 1` bytes).
    pub fn logical_cache(&self) -> Vec<u8> {
        let view = self.cache_view();
        let mut out = Vec::with_capacity(self.buffer.len());
        for r in 0..view.height_px {
            for c in 0..view.ring_width {
                out.push(view.logical(r, c));
            }
        }
        out
    }

    // -------------- Internal helpers --------------

    /// Map pixel x of logical column 0 (always byte-aligned).
    #[inline]
    fn base_x(&self) -> usize {
        debug_assert!(self.camera_x >= 0 && (self.camera_x - self.fine_x as i32) & 7 == 0);
        (self.camera_x - self.fine_x as i32) as usize
    }

    #[inline]
    fn debug_check_source<S: TileSource>(&self, src: &S) {
        debug_assert_eq!(
            (
                src.map_width_px() as i32 - self.config.width_px() as i32,
                src.map_height_px() as i32 - self.config.height_px as i32
            ),
            (self.max_x, self.max_y),
            "tile source does not match the map this viewport was built for"
        );
    }
}
