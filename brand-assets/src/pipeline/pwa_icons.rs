use super::{Workspace, opaque};
use crate::config::Pwa;
use anyhow::{Context, Result};
use logo_effect::badge::{BadgeConfig, BadgeFont};
use std::path::PathBuf;

pub fn file_name(size: u32) -> String {
    format!("icon-{size}.png")
}

/// Draw the word mark badge at every PWA manifest size.
pub fn run(ws: &Workspace, config: &Pwa) -> Result<Vec<PathBuf>> {
    let font_paths = config
        .font_paths
        .iter()
        .map(|p| ws.path(p))
        .collect::<Vec<_>>();
    let font = BadgeFont::load(&font_paths);
    let badge = BadgeConfig::new()
        .with_title(config.title.clone())
        .with_subtitle(config.subtitle.clone())
        .with_background(opaque(config.background))
        .with_foreground(opaque(config.foreground));

    let mut paths = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let icon = badge
            .render(size, &font)
            .with_context(|| format!("render {size}px badge failed"))?;

        let path = ws.save(&icon, config.output_dir.join(file_name(size)))?;
        println!("✓ {} created", path.display());
        paths.push(path);
    }

    println!("\nAll PWA icons generated:");
    for path in &paths {
        println!("  - {}", cutil::fs::file_name(path));
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_pwa_icons_with_fallback_font() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let ws = Workspace::new(dir.path());

        let config = Pwa {
            sizes: vec![48, 96],
            font_paths: vec![dir.path().join("missing.ttf")],
            ..Pwa::default()
        };
        let paths = run(&ws, &config)?;
        assert_eq!(paths.len(), 2);

        let small = ws.load("icon-48.png")?;
        assert_eq!(small.dimensions(), (48, 48));
        assert_eq!(*small.get_pixel(0, 0), Rgba([0x4a, 0x4a, 0x4a, 255]));

        let large = ws.load("icon-96.png")?;
        assert_eq!(large.dimensions(), (96, 96));
        assert!(large.pixels().any(|p| *p == Rgba([255, 255, 255, 255])));
        Ok(())
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(192), "icon-192.png");
    }
}
