use super::Workspace;
use crate::config::Icons;
use anyhow::{Context, Result};
use cutil::fs::{FileStats, dir_file_stats};
use image::RgbaImage;
use logo_effect::resize::resize_square;
use std::path::Path;

/// Output file names of the icon family, all relative to the icons directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconNaming {
    Light,
    Dark,
    Favicon,
    AppleTouch,
    AppleTouchDefault,
}

impl IconNaming {
    pub fn file_name(&self, size: u32) -> String {
        match self {
            IconNaming::Light => format!("icon-{size}x{size}.png"),
            IconNaming::Dark => format!("icon-{size}x{size}-dark.png"),
            IconNaming::Favicon => format!("favicon-{size}x{size}.png"),
            IconNaming::AppleTouch => format!("apple-touch-icon-{size}x{size}.png"),
            IconNaming::AppleTouchDefault => "apple-touch-icon.png".to_string(),
        }
    }
}

fn export(
    ws: &Workspace,
    dir: &Path,
    base: &RgbaImage,
    naming: IconNaming,
    sizes: &[u32],
) -> Result<()> {
    for &size in sizes {
        let resized = resize_square(base, size);
        let path = ws.save(&resized, dir.join(naming.file_name(size)))?;
        println!("  ✓ {} ({size}x{size}px)", path.display());
    }

    Ok(())
}

/// Resize the square logos into every icon the web manifest and touch devices ask for.
pub fn run(ws: &Workspace, config: &Icons) -> Result<FileStats> {
    let dir = config.output_dir.as_path();
    let out_dir = ws.path(dir);
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("create dir {} failed", out_dir.display()))?;

    println!("🎨 Generating icons...");

    println!("\n📱 Light mode icons");
    let light = ws.load(&config.light_input)?;
    export(ws, dir, &light, IconNaming::Light, &config.sizes)?;
    export(ws, dir, &light, IconNaming::Favicon, &config.favicon_sizes)?;

    println!("\n🌙 Dark mode icons");
    let dark = ws.load(&config.dark_input)?;
    export(ws, dir, &dark, IconNaming::Dark, &config.sizes)?;
    drop(dark);

    println!("\n🍎 Apple touch icons");
    export(ws, dir, &light, IconNaming::AppleTouch, &config.apple_sizes)?;
    export(
        ws,
        dir,
        &light,
        IconNaming::AppleTouchDefault,
        &[config.apple_default_size],
    )?;

    let stats = dir_file_stats(&out_dir, "png")?;
    println!("\n📊 Statistics:");
    println!("  - files: {}", stats.count);
    println!("  - total: {:.1} KB", stats.total_kb());
    println!("  - average: {:.1} KB", stats.average_kb());

    Ok(stats)
}
