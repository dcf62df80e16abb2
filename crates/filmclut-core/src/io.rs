//! File boundary: decoding sources and CLUTs, encoding filtered output.

use std::path::Path;

use crate::clut::hald::HaldClut;
use crate::clut::mapper::apply_hald_clut;
use crate::error::ClutError;
use crate::image::RgbImage;

/// Load an image from disk and convert to the internal `RgbImage` format.
///
/// Supports the `image` crate's default formats (PNG, JPEG, TIFF, ...).
/// Open and read failures surface as [`ClutError::Io`]; malformed data as
/// [`ClutError::Decode`].
pub fn load_image(path: &Path) -> Result<RgbImage, ClutError> {
    let reader = image::ImageReader::open(path)?.with_guessed_format()?;
    let img = reader.decode().map_err(|e| match e {
        image::ImageError::IoError(io) => ClutError::Io(io),
        other => ClutError::Decode(other),
    })?;

    let image = RgbImage::from(&img);
    tracing::debug!(
        "loaded {} ({}x{}, {:?})",
        path.display(),
        image.width,
        image.height,
        img.color()
    );
    Ok(image)
}

/// Load a Hald CLUT image and validate its geometry.
pub fn load_clut(path: &Path) -> Result<HaldClut, ClutError> {
    let clut = HaldClut::try_from(load_image(path)?)?;
    tracing::info!(
        "loaded Hald CLUT {} (level {})",
        path.display(),
        clut.geometry().level()
    );
    Ok(clut)
}

/// Encode an image to disk; the format follows the file extension.
///
/// Write failures surface as [`ClutError::Io`]; unsupported formats and
/// encoder errors as [`ClutError::Encode`].
pub fn save_image(image: &RgbImage, path: &Path) -> Result<(), ClutError> {
    image
        .to_buffer()
        .save(path)
        .map_err(|e| match e {
            image::ImageError::IoError(io) => ClutError::Io(io),
            other => ClutError::Encode(other),
        })?;
    tracing::debug!("wrote {} ({}x{})", path.display(), image.width, image.height);
    Ok(())
}

/// Load a CLUT and a source image, filter, and write the result.
pub fn apply_to_file(clut_path: &Path, source_path: &Path, output_path: &Path) -> Result<(), ClutError> {
    let clut = load_clut(clut_path)?;
    let source = load_image(source_path)?;
    let filtered = apply_hald_clut(&clut, &source)?;
    save_image(&filtered, output_path)?;
    tracing::info!(
        "{} -> {} via {}",
        source_path.display(),
        output_path.display(),
        clut_path.display()
    );
    Ok(())
}
