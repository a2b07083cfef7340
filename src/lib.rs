#![doc = r#"
ringscroll library crate.

A pixel-smooth scroller for 1-bit tile maps that never re-renders the whole
window: the visible raster lives in a cache addressed through a row ring and
a byte-column ring plus a sub-byte `fine_x` offset, and each camera move
redraws only the newly exposed row(s) or byte column(s).

Modules:
- config: viewport geometry (`ViewportConfig`)
- direction: scroll direction bitmask with conflict normalization
- error: construction errors (`ScrollError`) and `Result` alias
- tiles: glyph table, tile-index map, and the `TileSource` read seam
- viewport: the ring-buffer cache, edge renderer, and scroll controller
- blit: linear reconstruction of the cache and a direct reference renderer
- demo: built-in demo glyphs and map generator
- snapshot (feature `screenshot`): PNG capture of the visible window
- display (feature `display`): interactive window driven by the keyboard

In tests, shared builders are available under `crate::test_utils`.
"#]

pub mod blit;
pub mod config;
pub mod demo;
pub mod direction;
pub mod error;
pub mod tiles;
pub mod viewport;

#[cfg(feature = "display")]
pub mod display;
#[cfg(feature = "screenshot")]
pub mod snapshot;

// Re-export commonly used types at the crate root for convenience.
pub use config::ViewportConfig;
pub use direction::{Direction, Step};
pub use error::{Result, ScrollError};
pub use tiles::{MapGrid, TileSource, TileStore, TileWorld};
pub use viewport::{CacheView, Viewport};

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
