//! Image representation for the CLUT pipeline.

use ::image::DynamicImage;

/// Internal image representation. Always stored as 8-bit RGB, row-major.
///
/// `pixels.len()` must equal `width × height`. [`RgbImage::new`] checks this;
/// code that fills the fields directly must uphold it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel data as `[R, G, B]` triples. Length must be width × height.
    pub pixels: Vec<[u8; 3]>,
}

impl RgbImage {
    /// Build an image from raw row-major pixels.
    ///
    /// # Panics
    ///
    /// Panics if `pixels.len() != width × height`.
    pub fn new(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> Self {
        assert_eq!(
            pixels.len(),
            width as usize * height as usize,
            "pixel buffer does not match {width}x{height}"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Build an image where every pixel is `fill`.
    pub fn filled(width: u32, height: u32, fill: [u8; 3]) -> Self {
        Self::new(width, height, vec![fill; width as usize * height as usize])
    }

    /// True when the image has no pixels along either axis.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixel at `(x, y)`, or `None` outside the image.
    pub fn get(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Raw interleaved RGB bytes (`width × height × 3`).
    pub fn as_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }

    /// Convert into an `image` crate buffer for encoding.
    pub fn to_buffer(&self) -> ::image::RgbImage {
        ::image::RgbImage::from_fn(self.width, self.height, |x, y| {
            ::image::Rgb(self.pixels[y as usize * self.width as usize + x as usize])
        })
    }
}

impl From<&DynamicImage> for RgbImage {
    /// Any decoded image is converted to 8-bit RGB. Alpha is dropped and
    /// 16-bit or float data is requantized.
    fn from(img: &DynamicImage) -> Self {
        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        let pixels = rgb.pixels().map(|p| p.0).collect();
        Self {
            width,
            height,
            pixels,
        }
    }
}

impl From<DynamicImage> for RgbImage {
    fn from(img: DynamicImage) -> Self {
        Self::from(&img)
    }
}
