//! Logo recoloring effects
//!
//! Turns a dark logo mark into a light one while keeping its transparency.

use crate::{Effect, LogoEffectResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::{Rgb, Rgba, RgbaImage};

/// Returns true when a visible pixel has every color channel below `threshold`.
#[inline]
pub fn is_dark(pixel: &Rgba<u8>, threshold: u8) -> bool {
    pixel[3] > 0 && pixel[0] < threshold && pixel[1] < threshold && pixel[2] < threshold
}

/// Dark-to-target recolor configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct RecolorConfig {
    /// Channels strictly below this value count as dark
    #[derivative(Default(value = "128"))]
    pub threshold: u8,

    #[derivative(Default(value = "Rgb([255, 255, 255])"))]
    pub target: Rgb<u8>,
}

impl RecolorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target_rgb(mut self, r: u8, g: u8, b: u8) -> Self {
        self.target = Rgb([r, g, b]);
        self
    }

    fn recolor_pixel(&self, pixel: &mut Rgba<u8>) {
        if is_dark(pixel, self.threshold) {
            pixel[0] = self.target[0];
            pixel[1] = self.target[1];
            pixel[2] = self.target[2];
        }
    }
}

impl Effect for RecolorConfig {
    fn apply(&self, image: &mut RgbaImage) -> LogoEffectResult<()> {
        for pixel in image.pixels_mut() {
            self.recolor_pixel(pixel);
        }

        Ok(())
    }
}

/// Produce a recolored copy of `image`; the input buffer is left untouched.
///
/// Fully transparent pixels and pixels with any channel at or above the
/// threshold are copied as is. Alpha is never changed.
pub fn recolor(image: &RgbaImage, config: &RecolorConfig) -> RgbaImage {
    let mut output = image.clone();
    for pixel in output.pixels_mut() {
        config.recolor_pixel(pixel);
    }

    log::debug!(
        "recolored {}x{} image, threshold {}",
        image.width(),
        image.height(),
        config.threshold
    );

    output
}

/// Flat fill of every visible pixel, keeping per-pixel alpha
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct SilhouetteConfig {
    #[derivative(Default(value = "Rgb([255, 255, 255])"))]
    pub color: Rgb<u8>,
}

impl SilhouetteConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Effect for SilhouetteConfig {
    fn apply(&self, image: &mut RgbaImage) -> LogoEffectResult<()> {
        fill_rgb(image, self.color);
        Ok(())
    }
}

/// Silhouette copy of `image` in `config.color`.
pub fn silhouette(image: &RgbaImage, config: &SilhouetteConfig) -> RgbaImage {
    let mut output = image.clone();
    fill_rgb(&mut output, config.color);
    output
}

// Transparent pixels take the fill color too, at alpha 0, so resampling never
// bleeds the old color into the edges.
fn fill_rgb(image: &mut RgbaImage, color: Rgb<u8>) {
    for pixel in image.pixels_mut() {
        pixel[0] = color[0];
        pixel[1] = color[1];
        pixel[2] = color[2];
    }
}
