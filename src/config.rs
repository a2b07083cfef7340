/*!
Viewport geometry.

The viewport is `visible_width_bytes` packed bytes wide (8 pixels each) and
`height_px` scanlines tall. The cache carries one extra byte column beyond
the visible width (the lookahead byte) so the blitter can shift in the
right-hand neighbour when the camera is not byte-aligned.

Defaults match a 256x96 pixel window (32 character columns by 12 rows).
*/

use crate::error::{Result, ScrollError};

/// Visible width of the default viewport, in bytes (256 px).
pub const DEFAULT_VISIBLE_WIDTH_BYTES: usize = 32;
/// Height of the default viewport, in scanlines (12 tile rows).
pub const DEFAULT_HEIGHT_PX: usize = 96;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ViewportConfig {
    pub visible_width_bytes: usize,
    pub height_px: usize,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            visible_width_bytes: DEFAULT_VISIBLE_WIDTH_BYTES,
            height_px: DEFAULT_HEIGHT_PX,
        }
    }
}

impl ViewportConfig {
    pub fn new(visible_width_bytes: usize, height_px: usize) -> Self {
        Self {
            visible_width_bytes,
            height_px,
        }
    }

    /// Geometry measured in whole tiles (8x8 pixels).
    pub fn from_tiles(width_tiles: usize, height_tiles: usize) -> Self {
        Self::new(width_tiles, height_tiles * 8)
    }

    pub fn with_visible_width_bytes(mut self, bytes: usize) -> Self {
        self.visible_width_bytes = bytes;
        self
    }

    pub fn with_height_px(mut self, height_px: usize) -> Self {
        self.height_px = height_px;
        self
    }

    /// Width of the column ring: visible bytes plus the lookahead byte.
    #[inline]
    pub fn ring_width(&self) -> usize {
        self.visible_width_bytes + 1
    }

    #[inline]
    pub fn width_px(&self) -> usize {
        self.visible_width_bytes * 8
    }

    /// Size of the cache buffer in bytes.
    #[inline]
    pub fn buffer_len(&self) -> usize {
        self.height_px * self.ring_width()
    }

    /// Size of one linear (blitted) frame in bytes.
    #[inline]
    pub fn frame_len(&self) -> usize {
        self.height_px * self.visible_width_bytes
    }

    pub fn validate(&self) -> Result<()> {
        if self.visible_width_bytes == 0 || self.height_px == 0 {
            return Err(ScrollError::EmptyViewport {
                width_bytes: self.visible_width_bytes,
                height_px: self.height_px,
            });
        }
        Ok(())
    }
}
