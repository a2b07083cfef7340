/*!
Error types for viewport construction.

Only set-up can fail: geometry that does not fit the map, or map/glyph data
whose shape is inconsistent. Once a `Viewport` exists, scrolling is
infallible; map-edge motion is clamped and reported via the `bool` returned
by `Viewport::scroll`.
*/

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrollError {
    #[error("viewport must be at least one byte wide and one scanline tall (got {width_bytes}x{height_px})")]
    EmptyViewport { width_bytes: usize, height_px: usize },

    #[error("map is {map_px} px along {axis}, smaller than the {viewport_px} px viewport")]
    MapTooSmall {
        axis: &'static str,
        map_px: usize,
        viewport_px: usize,
    },

    #[error("map data has {actual} bytes, expected {width}x{height} = {expected}")]
    MapSizeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("glyph table length {0} is not a non-zero multiple of 8")]
    GlyphTableMisaligned(usize),

    #[error("glyph table holds {0} glyphs, at most 256 are addressable")]
    GlyphTableTooLarge(usize),

    #[error("map cell ({x}, {y}) names glyph {tile} but only {available} glyphs are loaded")]
    MissingGlyph {
        x: usize,
        y: usize,
        tile: u8,
        available: usize,
    },
}

pub type Result<T> = std::result::Result<T, ScrollError>;
