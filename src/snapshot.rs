/*!
PNG capture of the visible window (feature `screenshot`).

The cache is reconstructed through the blitter, expanded to RGBA (ink on
paper) and written with the `image` crate.
*/

use std::path::Path;

use crate::blit::{BYTES_PER_PIXEL, INK, PAPER, blit_to_vec, expand_rgba};
use crate::viewport::Viewport;

/// RGBA image of the visible window, `width_px * height_px * 4` bytes.
pub fn viewport_rgba(viewport: &Viewport) -> Vec<u8> {
    let config = viewport.config();
    let bits = blit_to_vec(viewport);
    let mut rgba = vec![0; bits.len() * 8 * BYTES_PER_PIXEL];
    expand_rgba(&bits, config.visible_width_bytes, INK, PAPER, &mut rgba);
    rgba
}

/// Save the visible window as a PNG (format chosen from the extension).
pub fn save_png(viewport: &Viewport, path: impl AsRef<Path>) -> image::ImageResult<()> {
    let path = path.as_ref();
    let config = viewport.config();
    let rgba = viewport_rgba(viewport);
    match image::save_buffer(
        path,
        &rgba,
        config.width_px() as u32,
        config.height_px as u32,
        image::ColorType::Rgba8,
    ) {
        Ok(()) => {
            log::info!("Saved screenshot: {}", path.display());
            Ok(())
        }
        Err(e) => {
            log::error!("Error writing screenshot: {}: {}", path.display(), e);
            Err(e)
        }
    }
}
