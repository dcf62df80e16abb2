//! Hald CLUT pipeline — geometry, table construction, and per-pixel mapping.

pub mod geometry;
pub mod hald;
pub mod mapper;
