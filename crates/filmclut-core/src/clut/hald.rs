//! Hald CLUT table construction: from decoded images and as generated identity.

use crate::clut::geometry::HaldGeometry;
use crate::error::ClutError;
use crate::image::RgbImage;

/// A Hald colour lookup table, flattened into `N⁶` RGB entries.
///
/// Entries keep the row-major pixel order of the Hald image, so the
/// entry for lattice point `(r, g, b)` sits at `r + N²·g + N⁴·b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HaldClut {
    geometry: HaldGeometry,
    entries: Vec<[u8; 3]>,
}

impl HaldClut {
    /// Interpret a borrowed image as a Hald CLUT, copying its pixels.
    ///
    /// Prefer `HaldClut::try_from(image)` when the image is no longer needed.
    pub fn from_rgb_image(image: &RgbImage) -> Result<Self, ClutError> {
        HaldGeometry::from_dimensions(image.width, image.height)?;
        Self::try_from(image.clone())
    }

    /// Generate the identity CLUT of the given level.
    ///
    /// ```text
    /// r = i mod N²,  g = (i / N²) mod N²,  b = i / N⁴
    /// entry[i] = round([r, g, b] × 255 / (N² − 1))
    /// ```
    pub fn identity(level: u32) -> Result<Self, ClutError> {
        let geometry = HaldGeometry::from_level(level)?;
        let n2 = geometry.cube_size();
        let step = 255.0 / (n2 - 1) as f64;
        let encode = |c: usize| (c as f64 * step).round() as u8;

        let entries = (0..geometry.entry_count())
            .map(|i| [encode(i % n2), encode(i / n2 % n2), encode(i / (n2 * n2))])
            .collect();

        Ok(Self { geometry, entries })
    }

    /// Shape of this table.
    pub fn geometry(&self) -> HaldGeometry {
        self.geometry
    }

    /// Flattened table entries.
    pub fn entries(&self) -> &[[u8; 3]] {
        &self.entries
    }

    /// Lay the entries back out as an `N³ × N³` Hald image.
    pub fn to_rgb_image(&self) -> RgbImage {
        let side = self.geometry.image_side();
        RgbImage::new(side, side, self.entries.clone())
    }
}

impl TryFrom<RgbImage> for HaldClut {
    type Error = ClutError;

    /// Interpret a decoded image as a Hald CLUT, taking over its pixel buffer.
    fn try_from(image: RgbImage) -> Result<Self, Self::Error> {
        let geometry = HaldGeometry::from_dimensions(image.width, image.height)?;
        debug_assert_eq!(image.pixels.len(), geometry.entry_count());

        tracing::debug!(
            "Hald CLUT level {} ({}³ lattice, {} entries)",
            geometry.level(),
            geometry.cube_size(),
            geometry.entry_count()
        );

        Ok(Self {
            geometry,
            entries: image.pixels,
        })
    }
}
