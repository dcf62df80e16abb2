//! Nearest-index Hald CLUT application.
//!
//! Each output pixel is copied verbatim from the table entry addressed by
//! the quantized source colour. There is no interpolation between lattice
//! points, so every output colour is an entry of the CLUT.

use rayon::prelude::*;

use crate::clut::hald::HaldClut;
use crate::error::ClutError;
use crate::image::RgbImage;

/// Look up the filtered colour for a single source pixel.
pub fn map_pixel(clut: &HaldClut, rgb: [u8; 3]) -> [u8; 3] {
    let entries = clut.entries();
    let idx = clut.geometry().index_of(rgb);
    debug_assert!(
        idx < entries.len(),
        "CLUT index {idx} out of range for {} entries",
        entries.len()
    );
    entries[idx]
}

/// Apply a Hald CLUT to every pixel of `source`.
///
/// Rows are mapped in parallel; the result does not depend on the
/// thread count. The output has the same dimensions as the source.
pub fn apply_hald_clut(clut: &HaldClut, source: &RgbImage) -> Result<RgbImage, ClutError> {
    if source.is_empty() {
        return Err(ClutError::EmptyImage {
            width: source.width,
            height: source.height,
        });
    }

    let width = source.width as usize;
    let mut pixels = vec![[0u8; 3]; source.pixels.len()];

    pixels
        .par_chunks_mut(width)
        .zip(source.pixels.par_chunks(width))
        .for_each(|(out_row, src_row)| {
            for (out, &src) in out_row.iter_mut().zip(src_row) {
                *out = map_pixel(clut, src);
            }
        });

    tracing::debug!(
        "applied level-{} CLUT to {}x{} image",
        clut.geometry().level(),
        source.width,
        source.height
    );

    Ok(RgbImage::new(source.width, source.height, pixels))
}
