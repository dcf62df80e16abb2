//! Error taxonomy for CLUT loading and application.

#[derive(Debug, thiserror::Error)]
pub enum ClutError {
    #[error("invalid Hald CLUT geometry: {width}x{height} is not a square N³ × N³ image")]
    InvalidClutGeometry { width: u32, height: u32 },
    #[error("invalid Hald CLUT level {0}: expected 2..=16")]
    InvalidClutLevel(u32),
    #[error("source image is empty ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),
    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),
}
