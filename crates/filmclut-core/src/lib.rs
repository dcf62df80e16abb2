//! Filmclut Core — domain layer for Hald CLUT film simulation.
//!
//! This crate contains the image representation, Hald CLUT geometry,
//! the nearest-index mapper, and file boundary helpers. No CLI dependencies.

pub mod clut;
pub mod error;
pub mod image;
pub mod io;

// Re-exports for convenience.
pub use clut::geometry::HaldGeometry;
pub use clut::hald::HaldClut;
pub use clut::mapper::{apply_hald_clut, map_pixel};
pub use crate::image::RgbImage;
pub use error::ClutError;
