pub mod badge;
pub mod canvas;
pub mod ico;
pub mod recolor_effect;
pub mod resize;

use image::RgbaImage;
use std::path::Path;

pub type LogoEffectResult<T> = Result<T, LogoEffectError>;

#[derive(thiserror::Error, Debug)]
pub enum LogoEffectError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Font error: {0}")]
    Font(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub trait Effect {
    fn apply(&self, image: &mut RgbaImage) -> LogoEffectResult<()>;
}

#[derive(Debug, Clone)]
pub enum LogoEffect {
    Recolor(recolor_effect::RecolorConfig),
    Silhouette(recolor_effect::SilhouetteConfig),
}

impl Effect for LogoEffect {
    fn apply(&self, image: &mut RgbaImage) -> LogoEffectResult<()> {
        match self {
            LogoEffect::Recolor(config) => config.apply(image),
            LogoEffect::Silhouette(config) => config.apply(image),
        }
    }
}

/// Decode an image file into an RGBA buffer.
pub fn load_rgba(path: impl AsRef<Path>) -> LogoEffectResult<RgbaImage> {
    let img = image::ImageReader::open(path.as_ref())?.decode()?;
    Ok(img.to_rgba8())
}

/// Encode an RGBA buffer as PNG, regardless of the file extension.
pub fn save_png(image: &RgbaImage, path: impl AsRef<Path>) -> LogoEffectResult<()> {
    image.save_with_format(path.as_ref(), image::ImageFormat::Png)?;
    log::debug!(
        "saved {}x{} png to {}",
        image.width(),
        image.height(),
        path.as_ref().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use recolor_effect::{RecolorConfig, SilhouetteConfig};

    #[test]
    fn test_effect_dispatch() {
        let mut img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        LogoEffect::Recolor(RecolorConfig::new()).apply(&mut img).unwrap();
        assert!(img.pixels().all(|p| *p == Rgba([255, 255, 255, 255])));

        let mut img = RgbaImage::from_pixel(2, 2, Rgba([200, 10, 10, 77]));
        LogoEffect::Silhouette(SilhouetteConfig::new())
            .apply(&mut img)
            .unwrap();
        assert!(img.pixels().all(|p| *p == Rgba([255, 255, 255, 77])));
    }

    #[test]
    fn test_png_save_and_load() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("logo.png");

        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(1, 1, Rgba([10, 20, 30, 40]));
        save_png(&img, &path)?;

        let loaded = load_rgba(&path)?;
        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(*loaded.get_pixel(1, 1), Rgba([10, 20, 30, 40]));
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_rgba("definitely/not/here.png").unwrap_err();
        assert!(matches!(err, LogoEffectError::Io(_)));
    }
}
