//! In-memory RGBA raster with source-over fill primitives.
//!
//! All drawing goes through the `fill_*` operations in `shapes::*`. Coverage
//! is binary per pixel (sampled at the pixel centre); partially covered pixels
//! are either fully painted or untouched.

mod shader;
pub(crate) mod shapes;

use image::RgbaImage;
use sha2::{Digest, Sha256};

use crate::coords::Vec2;
use crate::paint::Color;

use shader::{Shading, composite};

/// Width × height RGBA8 pixel buffer, row-major, straight alpha.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    image: RgbaImage,
}

impl Raster {
    /// Creates a fully transparent raster.
    pub fn new(width: u32, height: u32) -> Self {
        Self { image: RgbaImage::new(width, height) }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Overwrites every pixel with `color` (no compositing).
    pub fn fill(&mut self, color: Color) {
        let px = image::Rgba(color.to_array());
        for p in self.image.pixels_mut() {
            *p = px;
        }
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image.get_pixel_checked(x, y).map(|p| Color::from_array(p.0))
    }

    /// Raw bytes, `4 * width * height` long.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    #[inline]
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Mean Rec.601 luma over all pixels, `0.0..=255.0`. Alpha is ignored.
    pub fn average_luminance(&self) -> f64 {
        let count = u64::from(self.width()) * u64::from(self.height());
        if count == 0 {
            return 0.0;
        }
        let sum: f64 = self
            .image
            .pixels()
            .map(|p| f64::from(Color::from_array(p.0).luma()))
            .sum();
        sum / count as f64
    }

    /// Lowercase hex SHA-256 of the raw pixel bytes.
    pub fn digest(&self) -> String {
        format!("{:x}", Sha256::digest(self.as_raw()))
    }

    /// Composites one horizontal run `[x0, x1)` of row `y`.
    ///
    /// Callers guarantee the run lies inside the raster.
    fn shade_run(&mut self, shading: &Shading<'_>, y: u32, x0: u32, x1: u32) {
        let cy = y as f32 + 0.5;
        for x in x0..x1 {
            let src = shading.shade(Vec2::new(x as f32 + 0.5, cy));
            let px = self.image.get_pixel_mut(x, y);
            composite(&mut px.0, src);
        }
    }
}
