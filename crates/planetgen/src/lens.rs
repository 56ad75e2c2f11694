//! Lens displacement map
//!
//! An RGBA image whose red and green channels encode a radial displacement
//! that grows with distance from the center. The renderer feeds it to a
//! displacement filter to bulge the cloud layer over the sphere.

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageBuffer, ImageEncoder, Rgba, RgbaImage};
use thiserror::Error;

/// Default edge length in pixels
pub const DEFAULT_LENS_SIZE: u32 = 256;

/// Channel value meaning "no displacement"
const NEUTRAL: f64 = 127.0;

/// Errors that can occur while encoding a lens map.
#[derive(Error, Debug)]
pub enum LensError {
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid lens size: {0}x{0}")]
    InvalidSize(u32),
}

/// A square RGBA8 displacement map
#[derive(Debug, Clone, PartialEq)]
pub struct LensMap {
    image: RgbaImage,
}

fn channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0).round_ties_even() as u8
}

impl LensMap {
    /// Builds a `size`×`size` map for the given strength.
    ///
    /// ```
    /// use planetgen::lens::LensMap;
    ///
    /// let map = LensMap::new(30.0, 4);
    /// assert_eq!(map.pixels().len(), 4 * 4 * 4);
    /// // Center pixel is undisplaced
    /// assert_eq!(map.pixel(2, 2), [127, 127, 0, 255]);
    /// ```
    pub fn new(strength: f64, size: u32) -> Self {
        let scale = f64::from(size);
        let image = ImageBuffer::from_fn(size, size, |x, y| {
            let nx = (f64::from(x) / scale) * 2.0 - 1.0;
            let ny = (f64::from(y) / scale) * 2.0 - 1.0;
            let d = (nx * nx + ny * ny).sqrt();
            Rgba([
                channel(NEUTRAL + nx * d * strength),
                channel(NEUTRAL + ny * d * strength),
                0,
                255,
            ])
        });
        Self { image }
    }

    /// Map of the default size
    pub fn with_strength(strength: f64) -> Self {
        Self::new(strength, DEFAULT_LENS_SIZE)
    }

    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// Raw RGBA bytes, row-major
    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.image.into_raw()
    }

    /// RGBA of one pixel
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    /// Encodes the map as a PNG, ready to wrap in a data URI.
    pub fn to_png(&self) -> Result<Vec<u8>, LensError> {
        let size = self.size();
        if size == 0 {
            return Err(LensError::InvalidSize(size));
        }
        let mut png = Vec::new();
        let encoder =
            PngEncoder::new_with_quality(&mut png, CompressionType::Default, FilterType::Adaptive);
        encoder.write_image(
            self.image.as_raw(),
            size,
            size,
            image::ExtendedColorType::Rgba8,
        )?;
        Ok(png)
    }
}
