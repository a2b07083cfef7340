/*!
Blit adapter: turning the ring-addressed cache into a linear raster.

Read contract
- Screen row `r` comes from physical row `(row_head + r) mod H`.
- Visible byte `c` is reconstructed from logical slots `c` and `c + 1`
  (column ring, starting at `col_head`): `(a << fine_x) | (b >> (8 - fine_x))`,
  or `a` unchanged when `fine_x == 0`. Slot W (the lookahead byte) only ever
  feeds the low bits of the last visible byte.

Also here
- `render_reference`: draws the same window straight from the map with no
  cache, for verification and for one-off captures.
- `expand_rgba`: 1bpp to RGBA8 (set bit = ink) for presentation surfaces.

Hardware display timing (when a blit is safe relative to the raster beam) is
the caller's concern; nothing here blocks or waits.
*/

use crate::config::ViewportConfig;
use crate::tiles::TileSource;
use crate::viewport::{CacheView, Viewport, blend, sample_row};

/// RGBA bytes per pixel.
pub const BYTES_PER_PIXEL: usize = 4;
/// Default ink colour for set bits.
pub const INK: [u8; 4] = [0xE0, 0xE0, 0xE0, 0xFF];
/// Default paper colour for clear bits.
pub const PAPER: [u8; 4] = [0x10, 0x10, 0x30, 0xFF];

/// Reconstruct the visible raster from a cache view into `out`
/// (`H * W` bytes, row-major, MSB = leftmost pixel).
pub fn blit_view(view: &CacheView<'_>, out: &mut [u8]) {
    let w = view.visible_width_bytes;
    assert_eq!(out.len(), view.height_px * w, "blit target has the wrong size");

    for (r, line) in out.chunks_exact_mut(w).enumerate() {
        let mut a = view.logical(r, 0);
        for (c, byte) in line.iter_mut().enumerate() {
            let b = view.logical(r, c + 1);
            *byte = blend(a, b, view.fine_x);
            a = b;
        }
    }
}

/// Reconstruct `viewport`'s visible raster into `out`.
pub fn blit_linear(viewport: &Viewport, out: &mut [u8]) {
    blit_view(&viewport.cache_view(), out);
}

/// Convenience: reconstruct into a freshly allocated frame.
pub fn blit_to_vec(viewport: &Viewport) -> Vec<u8> {
    let mut out = vec![0; viewport.config().frame_len()];
    blit_linear(viewport, &mut out);
    out
}

/// Draw the window at camera `(x, y)` directly from the map, bypassing any cache.
pub fn render_reference<S: TileSource>(
    src: &S,
    config: &ViewportConfig,
    x: usize,
    y: usize,
    out: &mut [u8],
) {
    let w = config.visible_width_bytes;
    assert_eq!(out.len(), config.frame_len(), "reference target has the wrong size");
    for (r, line) in out.chunks_exact_mut(w).enumerate() {
        sample_row(src, x, y + r, line);
    }
}

/// Expand a 1bpp raster (`width_bytes` per row) to RGBA8.
pub fn expand_rgba(bits: &[u8], width_bytes: usize, ink: [u8; 4], paper: [u8; 4], out: &mut [u8]) {
    assert_eq!(
        out.len(),
        bits.len() * 8 * BYTES_PER_PIXEL,
        "RGBA target has the wrong size"
    );
    debug_assert!(width_bytes > 0 && bits.len() % width_bytes == 0);
    for (i, &byte) in bits.iter().enumerate() {
        for bit in 0..8 {
            let on = byte & (0x80 >> bit) != 0;
            let fi = (i * 8 + bit) * BYTES_PER_PIXEL;
            out[fi..fi + BYTES_PER_PIXEL].copy_from_slice(if on { &ink } else { &paper });
        }
    }
}
