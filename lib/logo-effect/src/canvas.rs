//! Square canvas composition
//!
//! Places a logo, scaled to fit a padded content box, at the center of a flat
//! colored square.

use crate::{LogoEffectError, LogoEffectResult, resize};
use derivative::Derivative;
use derive_setters::Setters;
use image::{Rgba, RgbaImage, imageops};

/// Scale `(width, height)` so both sides fit into `max`, keeping the aspect ratio.
pub fn fit_within(width: u32, height: u32, max: u32) -> LogoEffectResult<(u32, u32)> {
    if width == 0 || height == 0 {
        return Err(LogoEffectError::InvalidParameter(format!(
            "cannot fit a {width}x{height} image"
        )));
    }

    let ratio = (max as f64 / width as f64).min(max as f64 / height as f64);
    let new_width = (width as f64 * ratio) as u32;
    let new_height = (height as f64 * ratio) as u32;

    Ok((new_width.max(1), new_height.max(1)))
}

/// Top-left offset that centers a `fg_width x fg_height` image on a square canvas.
///
/// Negative when the foreground is larger than the canvas.
pub fn center_offset(canvas_size: u32, fg_width: u32, fg_height: u32) -> (i64, i64) {
    let x = (canvas_size as i64 - fg_width as i64).div_euclid(2);
    let y = (canvas_size as i64 - fg_height as i64).div_euclid(2);
    (x, y)
}

/// Paste `foreground` centered onto a new `canvas_size` square filled with `background`.
///
/// Only the visible part of the foreground is blended in, weighted by its alpha.
/// Anything outside the canvas is clipped.
pub fn compose(foreground: &RgbaImage, canvas_size: u32, background: Rgba<u8>) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(canvas_size, canvas_size, background);
    let (x, y) = center_offset(canvas_size, foreground.width(), foreground.height());

    imageops::overlay(&mut canvas, foreground, x, y);

    log::debug!(
        "composed {}x{} foreground at ({x}, {y}) on {canvas_size}x{canvas_size} canvas",
        foreground.width(),
        foreground.height()
    );

    canvas
}

/// Square logo canvas configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct CanvasConfig {
    /// Side length of the output square
    #[derivative(Default(value = "1024"))]
    pub size: u32,

    /// Padding on each side as a fraction of `size`
    #[derivative(Default(value = "0.15"))]
    pub padding: f32,

    #[derivative(Default(value = "Rgba([255, 255, 255, 255])"))]
    pub background: Rgba<u8>,
}

impl CanvasConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background_rgb(mut self, r: u8, g: u8, b: u8) -> Self {
        self.background = Rgba([r, g, b, 255]);
        self
    }

    /// Side of the box the logo is fitted into.
    pub fn content_size(&self) -> LogoEffectResult<u32> {
        if self.size == 0 || !(0.0..0.5).contains(&self.padding) {
            return Err(LogoEffectError::InvalidParameter(format!(
                "canvas size {} with padding {}",
                self.size, self.padding
            )));
        }

        let padding = (self.size as f32 * self.padding) as u32;
        Ok(self.size - padding * 2)
    }

    /// Fit `logo` into the content box with a Lanczos filter and center it on the canvas.
    pub fn render(&self, logo: &RgbaImage) -> LogoEffectResult<RgbaImage> {
        let content = self.content_size()?;
        let (width, height) = fit_within(logo.width(), logo.height(), content)?;
        let resized = resize::resize_exact(logo, width, height);

        Ok(compose(&resized, self.size, self.background))
    }
}
