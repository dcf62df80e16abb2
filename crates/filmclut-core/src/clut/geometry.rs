//! Hald CLUT geometry and lattice index arithmetic.
//!
//! A level-`N` Hald image is an `N³ × N³` square that packs an `N² × N² × N²`
//! colour cube. Flattened in row-major pixel order, entry
//! `r + N²·g + N⁴·b` holds the output colour for lattice point `(r, g, b)`.

use serde::{Deserialize, Serialize};

use crate::error::ClutError;

/// Smallest level accepted when generating a CLUT.
pub const MIN_LEVEL: u32 = 2;

/// Largest level accepted when generating a CLUT (4096 × 4096, 256 points per axis).
pub const MAX_LEVEL: u32 = 16;

/// Shape of a Hald CLUT, derived from its level.
///
/// Deserialization goes through the same level check as `from_dimensions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGeometry")]
pub struct HaldGeometry {
    level: u32,
}

/// Unvalidated wire form of [`HaldGeometry`].
#[derive(Deserialize)]
struct RawGeometry {
    level: u32,
}

impl TryFrom<RawGeometry> for HaldGeometry {
    type Error = ClutError;

    fn try_from(raw: RawGeometry) -> Result<Self, Self::Error> {
        // Any level whose N³ side fits in a u32 is a representable Hald image.
        if raw.level == 0 || raw.level.checked_pow(3).is_none() {
            return Err(ClutError::InvalidClutLevel(raw.level));
        }
        Ok(Self { level: raw.level })
    }
}

impl HaldGeometry {
    /// Geometry for a generated CLUT of the given level.
    pub fn from_level(level: u32) -> Result<Self, ClutError> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            return Err(ClutError::InvalidClutLevel(level));
        }
        Ok(Self { level })
    }

    /// Infer the geometry of a Hald image from its pixel dimensions.
    ///
    /// ```text
    /// N = round(cbrt(width))
    /// valid iff width == height && N³ == width
    /// ```
    pub fn from_dimensions(width: u32, height: u32) -> Result<Self, ClutError> {
        let invalid = ClutError::InvalidClutGeometry { width, height };
        if width != height || width == 0 {
            return Err(invalid);
        }

        let level = f64::from(width).cbrt().round() as u32;
        if level == 0 || level.checked_pow(3) != Some(width) {
            return Err(invalid);
        }
        Ok(Self { level })
    }

    /// Hald level `N`.
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Side of the square Hald image in pixels (`N³`).
    pub const fn image_side(&self) -> u32 {
        self.level * self.level * self.level
    }

    /// Lattice points per colour axis (`N²`).
    pub const fn cube_size(&self) -> usize {
        (self.level * self.level) as usize
    }

    /// Total table entries (`N⁶`).
    pub const fn entry_count(&self) -> usize {
        let side = self.image_side() as usize;
        side * side
    }

    /// Factor mapping an 8-bit channel onto `[0, N² − 1]`.
    pub fn scale(&self) -> f64 {
        (self.cube_size() - 1) as f64 / 255.0
    }

    /// Lattice coordinate for an 8-bit channel value.
    ///
    /// Ties round to even, matching `numpy.rint`. Result is in `[0, N² − 1]`.
    pub fn quantize(&self, channel: u8) -> usize {
        (f64::from(channel) * self.scale()).round_ties_even() as usize
    }

    /// Flat table index for an 8-bit RGB triple.
    pub fn index_of(&self, rgb: [u8; 3]) -> usize {
        let n2 = self.cube_size();
        let [r, g, b] = rgb.map(|c| self.quantize(c));
        r + n2 * g + n2 * n2 * b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_level_16_boundaries() {
        let geometry = HaldGeometry::from_dimensions(4096, 4096).unwrap();
        assert_eq!(geometry.level(), 16);
        assert_eq!(geometry.cube_size(), 256);
        assert!((geometry.scale() - 1.0).abs() < f64::EPSILON);
        assert_eq!(geometry.index_of([0, 0, 0]), 0);
        assert_eq!(geometry.index_of([255, 255, 255]), 16_777_215);
        assert_eq!(geometry.index_of([255, 255, 255]), geometry.entry_count() - 1);
    }

    #[test]
    fn test_channel_order_is_red_fastest() {
        let geometry = HaldGeometry::from_level(16).unwrap();
        assert_eq!(geometry.index_of([1, 0, 0]), 1);
        assert_eq!(geometry.index_of([0, 1, 0]), 256);
        assert_eq!(geometry.index_of([0, 0, 1]), 65_536);
    }

    #[test]
    fn test_common_levels_from_dimensions() {
        for (side, level) in [(8, 2), (27, 3), (64, 4), (512, 8), (1728, 12), (4096, 16)] {
            let geometry = HaldGeometry::from_dimensions(side, side).unwrap();
            assert_eq!(geometry.level(), level, "side {side}");
            assert_eq!(geometry.image_side(), side);
        }
    }

    #[test]
    fn test_non_square_is_rejected() {
        let err = HaldGeometry::from_dimensions(100, 50).unwrap_err();
        assert!(matches!(
            err,
            ClutError::InvalidClutGeometry {
                width: 100,
                height: 50
            }
        ));
    }

    #[test]
    fn test_square_non_cube_is_rejected() {
        for side in [0, 2, 100, 511, 513] {
            assert!(
                matches!(
                    HaldGeometry::from_dimensions(side, side),
                    Err(ClutError::InvalidClutGeometry { .. })
                ),
                "side {side} should be rejected"
            );
        }
    }

    #[test]
    fn test_level_out_of_range_is_rejected() {
        assert!(matches!(
            HaldGeometry::from_level(1),
            Err(ClutError::InvalidClutLevel(1))
        ));
        assert!(matches!(
            HaldGeometry::from_level(17),
            Err(ClutError::InvalidClutLevel(17))
        ));
    }

    #[test]
    fn test_deserialize_round_trip() {
        let geometry = HaldGeometry::from_level(8).unwrap();
        let json = serde_json::to_string(&geometry).unwrap();
        assert_eq!(json, r#"{"level":8}"#);
        assert_eq!(serde_json::from_str::<HaldGeometry>(&json).unwrap(), geometry);
    }

    #[test]
    fn test_deserialize_rejects_invalid_level() {
        for json in [r#"{"level":0}"#, r#"{"level":4000000}"#] {
            let err = serde_json::from_str::<HaldGeometry>(json).unwrap_err();
            assert!(
                err.to_string().contains("invalid Hald CLUT level"),
                "{json}: {err}"
            );
        }
        // Level 1 is a valid (1 × 1) Hald image.
        let geometry = serde_json::from_str::<HaldGeometry>(r#"{"level":1}"#).unwrap();
        assert_eq!(geometry.quantize(128), 0);
    }

    #[test]
    fn test_quantize_endpoints() {
        for level in MIN_LEVEL..=MAX_LEVEL {
            let geometry = HaldGeometry::from_level(level).unwrap();
            assert_eq!(geometry.quantize(0), 0);
            assert_eq!(geometry.quantize(255), geometry.cube_size() - 1);
        }
    }

    #[test]
    fn test_quantize_is_monotonic() {
        let geometry = HaldGeometry::from_level(8).unwrap();
        let mut prev = 0;
        for c in 0..=255u8 {
            let q = geometry.quantize(c);
            assert!(q >= prev, "quantize({c}) = {q} < {prev}");
            prev = q;
        }
    }

    #[test]
    fn test_random_indices_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(0x5eed_c107);
        for level in MIN_LEVEL..=MAX_LEVEL {
            let geometry = HaldGeometry::from_level(level).unwrap();
            for _ in 0..10_000 {
                let rgb: [u8; 3] = [rng.random(), rng.random(), rng.random()];
                let idx = geometry.index_of(rgb);
                assert!(
                    idx < geometry.entry_count(),
                    "level {level}: {rgb:?} -> {idx} >= {}",
                    geometry.entry_count()
                );
            }
        }
    }
}
