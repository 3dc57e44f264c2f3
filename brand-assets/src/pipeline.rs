mod favicon;
mod icons;
mod pwa_icons;
mod square_logos;
mod white_logo;

pub use favicon::run as favicon;
pub use icons::run as icons;
pub use pwa_icons::run as pwa_icons;
pub use square_logos::run as square_logos;
pub use white_logo::run as white_logo;

use crate::config::Color;
use anyhow::{Context, Result};
use image::{Rgb, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Base directory every relative input and output path resolves against.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    pub fn load(&self, path: impl AsRef<Path>) -> Result<RgbaImage> {
        let path = self.path(path);
        logo_effect::load_rgba(&path).with_context(|| format!("open {} failed", path.display()))
    }

    /// Write `image` as PNG, creating parent directories first.
    pub fn save(&self, image: &RgbaImage, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = self.path(path);
        self.ensure_parent(&path)?;

        logo_effect::save_png(image, &path)
            .with_context(|| format!("save {} failed", path.display()))?;

        Ok(path)
    }

    pub fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create dir {} failed", parent.display()))?;
            }
        }
        Ok(())
    }
}

pub fn rgb(color: Color) -> Rgb<u8> {
    Rgb(color)
}

pub fn opaque(color: Color) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], 255])
}

#[cfg(test)]
pub(crate) mod testing {
    use image::{Rgba, RgbaImage};
    use std::path::Path;

    /// Black bar with a soft alpha edge on a transparent 80x40 canvas.
    pub fn black_logo() -> RgbaImage {
        let mut img = RgbaImage::new(80, 40);
        for y in 10..30 {
            for x in 10..70 {
                let alpha = if x == 10 || x == 69 { 128 } else { 255 };
                img.put_pixel(x, y, Rgba([0, 0, 0, alpha]));
            }
        }
        img
    }

    pub fn write_black_logo(dir: &Path) -> anyhow::Result<()> {
        logo_effect::save_png(&black_logo(), dir.join("logo_black@2x.png"))?;
        Ok(())
    }
}
