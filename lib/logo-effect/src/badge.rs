//! Text badge icons
//!
//! Renders a two-line word mark (title over subtitle) on a flat square, with
//! two small diamond ornaments above the title on larger sizes.

use crate::{LogoEffectError, LogoEffectResult};
use ab_glyph::{FontVec, PxScale};
use derivative::Derivative;
use derive_setters::Setters;
use image::{Rgba, RgbaImage};
use imageproc::{
    drawing::{draw_filled_rect_mut, draw_polygon_mut, draw_text_mut, text_size},
    point::Point,
    rect::Rect,
};
use std::path::{Path, PathBuf};

/// Smallest icon side that still gets the diamond ornaments
pub const DIAMOND_MIN_SIZE: u32 = 96;

/// Font used for the badge text.
pub enum BadgeFont {
    Glyph(FontVec),
    /// Built-in fallback: every visible character is a filled block.
    Block,
}

impl std::fmt::Debug for BadgeFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BadgeFont::Glyph(_) => write!(f, "BadgeFont::Glyph"),
            BadgeFont::Block => write!(f, "BadgeFont::Block"),
        }
    }
}

impl BadgeFont {
    pub fn from_file(path: impl AsRef<Path>) -> LogoEffectResult<Self> {
        let data = std::fs::read(path.as_ref())?;
        let font = FontVec::try_from_vec_and_index(data, 0)
            .map_err(|e| LogoEffectError::Font(format!("{}: {e}", path.as_ref().display())))?;
        Ok(BadgeFont::Glyph(font))
    }

    /// First font in `paths` that loads, or the block fallback.
    pub fn load(paths: &[PathBuf]) -> Self {
        for path in paths {
            match Self::from_file(path) {
                Ok(font) => {
                    log::debug!("badge font: {}", path.display());
                    return font;
                }
                Err(e) => log::debug!("skip font {}: {e}", path.display()),
            }
        }

        log::warn!("no usable font in {paths:?}, falling back to block glyphs");
        BadgeFont::Block
    }

    fn block_advance(px: f32) -> u32 {
        (px * 0.6) as u32
    }

    pub fn text_size(&self, px: f32, text: &str) -> (u32, u32) {
        match self {
            BadgeFont::Glyph(font) => text_size(PxScale::from(px), font, text),
            BadgeFont::Block => {
                let count = text.chars().count() as u32;
                ((count * Self::block_advance(px)).max(1), (px as u32).max(1))
            }
        }
    }

    pub fn draw(&self, canvas: &mut RgbaImage, color: Rgba<u8>, x: i32, y: i32, px: f32, text: &str) {
        match self {
            BadgeFont::Glyph(font) => {
                draw_text_mut(canvas, color, x, y, PxScale::from(px), font, text);
            }
            BadgeFont::Block => {
                let advance = Self::block_advance(px);
                let glyph_width = (advance * 4 / 5).max(1);
                let glyph_height = (px as u32).max(1);

                for (i, c) in text.chars().enumerate() {
                    if c.is_whitespace() {
                        continue;
                    }

                    let gx = x + (i as u32 * advance) as i32;
                    draw_filled_rect_mut(
                        canvas,
                        Rect::at(gx, y).of_size(glyph_width, glyph_height),
                        color,
                    );
                }
            }
        }
    }
}

/// Badge icon configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct BadgeConfig {
    #[derivative(Default(value = "\"THE\".to_string()"))]
    pub title: String,

    #[derivative(Default(value = "\"REAL ESTATE\".to_string()"))]
    pub subtitle: String,

    #[derivative(Default(value = "Rgba([0x4a, 0x4a, 0x4a, 255])"))]
    pub background: Rgba<u8>,

    #[derivative(Default(value = "Rgba([255, 255, 255, 255])"))]
    pub foreground: Rgba<u8>,

    /// Title height as a fraction of the icon side
    #[derivative(Default(value = "0.25"))]
    pub title_scale: f32,

    #[derivative(Default(value = "0.08"))]
    pub subtitle_scale: f32,
}

/// Where each element of a badge goes, in canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeLayout {
    pub title: (i32, i32),
    pub title_size: (u32, u32),
    pub subtitle: (i32, i32),
    pub diamonds: Option<[[Point<i32>; 4]; 2]>,
}

impl BadgeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(&self, size: u32, font: &BadgeFont) -> BadgeLayout {
        let s = size as i32;
        let title_px = (size as f32 * self.title_scale) as u32 as f32;
        let subtitle_px = (size as f32 * self.subtitle_scale) as u32 as f32;

        let (title_w, title_h) = font.text_size(title_px, &self.title);
        let title_x = (s - title_w as i32).div_euclid(2);
        let title_y = s / 2 - title_h as i32;

        let (subtitle_w, _) = font.text_size(subtitle_px, &self.subtitle);
        let subtitle_x = (s - subtitle_w as i32).div_euclid(2);
        let subtitle_y = s / 2 + (size as f32 * 0.05) as i32;

        let diamonds = (size >= DIAMOND_MIN_SIZE).then(|| {
            let d = (size as f32 * 0.03) as i32;
            let top = title_y - (size as f32 * 0.08) as i32;
            let left = title_x + (title_w as f32 * 0.2) as i32;
            let right = title_x + (title_w as f32 * 0.8) as i32;
            [diamond(left, top, d), diamond(right, top, d)]
        });

        BadgeLayout {
            title: (title_x, title_y),
            title_size: (title_w, title_h),
            subtitle: (subtitle_x, subtitle_y),
            diamonds,
        }
    }

    pub fn render(&self, size: u32, font: &BadgeFont) -> LogoEffectResult<RgbaImage> {
        if size == 0 {
            return Err(LogoEffectError::InvalidParameter(
                "badge size must be positive".to_string(),
            ));
        }

        let layout = self.layout(size, font);
        let mut canvas = RgbaImage::from_pixel(size, size, self.background);

        let title_px = (size as f32 * self.title_scale) as u32 as f32;
        let subtitle_px = (size as f32 * self.subtitle_scale) as u32 as f32;

        font.draw(
            &mut canvas,
            self.foreground,
            layout.title.0,
            layout.title.1,
            title_px,
            &self.title,
        );
        font.draw(
            &mut canvas,
            self.foreground,
            layout.subtitle.0,
            layout.subtitle.1,
            subtitle_px,
            &self.subtitle,
        );

        if let Some(diamonds) = layout.diamonds.as_ref() {
            for points in diamonds {
                // A zero sized diamond collapses into one point, which the
                // polygon routine does not accept.
                if points[0] != points[2] {
                    draw_polygon_mut(&mut canvas, points, self.foreground);
                }
            }
        }

        Ok(canvas)
    }
}

fn diamond(x: i32, y: i32, d: i32) -> [Point<i32>; 4] {
    [
        Point::new(x, y),
        Point::new(x - d, y + d),
        Point::new(x, y + 2 * d),
        Point::new(x + d, y + d),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_text_size() {
        let font = BadgeFont::Block;
        assert_eq!(font.text_size(10.0, "THE"), (18, 10));
        assert_eq!(font.text_size(10.0, ""), (1, 10));
    }

    #[test]
    fn test_missing_font_falls_back() {
        let font = BadgeFont::load(&[PathBuf::from("no/such/font.ttf")]);
        assert!(matches!(font, BadgeFont::Block));
    }

    #[test]
    fn test_invalid_font_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"not a font")?;

        assert!(matches!(
            BadgeFont::from_file(&path),
            Err(LogoEffectError::Font(_))
        ));
        assert!(matches!(BadgeFont::load(&[path]), BadgeFont::Block));
        Ok(())
    }

    #[test]
    fn test_layout_with_block_font() {
        let config = BadgeConfig::new();
        let layout = config.layout(192, &BadgeFont::Block);

        // title 48px: advance 28, 3 glyphs -> 84x48
        assert_eq!(layout.title_size, (84, 48));
        assert_eq!(layout.title, (54, 48));
        // subtitle 15px: advance 9, 11 glyphs -> 99 wide
        assert_eq!(layout.subtitle, (46, 105));

        let diamonds = layout.diamonds.expect("large icons carry diamonds");
        // d = 5, top = 48 - 15
        assert_eq!(diamonds[0][0], Point::new(54 + 16, 33));
        assert_eq!(diamonds[0][2], Point::new(54 + 16, 43));
        assert_eq!(diamonds[1][3], Point::new(54 + 67 + 5, 38));
    }

    #[test]
    fn test_small_icons_skip_diamonds() {
        let layout = BadgeConfig::new().layout(72, &BadgeFont::Block);
        assert!(layout.diamonds.is_none());
    }

    #[test]
    fn test_render_block_badge() -> anyhow::Result<()> {
        let config = BadgeConfig::new();
        let img = config.render(96, &BadgeFont::Block)?;

        assert_eq!(img.dimensions(), (96, 96));
        assert_eq!(*img.get_pixel(0, 0), Rgba([0x4a, 0x4a, 0x4a, 255]));

        let layout = config.layout(96, &BadgeFont::Block);
        let (x, y) = layout.title;
        assert_eq!(*img.get_pixel(x as u32 + 1, y as u32 + 1), Rgba([255, 255, 255, 255]));

        let white = img.pixels().filter(|p| **p == Rgba([255, 255, 255, 255])).count();
        assert!(white > 0);
        Ok(())
    }

    fn system_font() -> Option<BadgeFont> {
        [
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/System/Library/Fonts/Helvetica.ttc",
            "C:/Windows/Fonts/arial.ttf",
        ]
        .iter()
        .find_map(|path| BadgeFont::from_file(path).ok())
    }

    #[test]
    fn test_render_glyph_badge() -> anyhow::Result<()> {
        let Some(font) = system_font() else {
            return Ok(());
        };
        assert!(matches!(font, BadgeFont::Glyph(_)));

        let config = BadgeConfig::new();
        let layout = config.layout(192, &font);
        let (title_w, title_h) = layout.title_size;
        assert!(title_w > 0 && title_h > 0);
        assert_eq!(layout.title.0, (192 - title_w as i32).div_euclid(2));
        assert_eq!(layout.title.1, 96 - title_h as i32);
        assert!(layout.diamonds.is_some());

        let background = Rgba([0x4a, 0x4a, 0x4a, 255]);
        for size in [48, 192, 512] {
            let img = config.render(size, &font)?;
            assert_eq!(img.dimensions(), (size, size));
            assert_eq!(*img.get_pixel(0, 0), background);
            assert!(img.pixels().any(|p| *p != background), "{size}");
        }
        Ok(())
    }

    #[test]
    fn test_render_zero_size() {
        assert!(BadgeConfig::new().render(0, &BadgeFont::Block).is_err());
    }
}
