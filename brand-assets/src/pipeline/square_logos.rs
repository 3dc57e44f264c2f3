use super::{Workspace, opaque, rgb};
use crate::config::Square;
use anyhow::{Context, Result};
use logo_effect::{
    canvas::CanvasConfig,
    recolor_effect::{SilhouetteConfig, silhouette},
};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct SquareLogos {
    pub light: PathBuf,
    pub dark: PathBuf,
}

/// Light (logo as is on a light square) and dark (silhouette on a dark square) variants.
pub fn run(ws: &Workspace, config: &Square) -> Result<SquareLogos> {
    let logo = ws.load(&config.input)?;

    let canvas = CanvasConfig::new()
        .with_size(config.size)
        .with_padding(config.padding);

    let light = canvas
        .clone()
        .with_background(opaque(config.light_background))
        .render(&logo)
        .with_context(|| "render light square logo failed")?;
    let light_path = ws.save(&light, &config.light_output)?;
    println!("✓ Light background logo created: {}", light_path.display());

    // Fill before resizing so the resampled edges pick up the new color.
    let filled = silhouette(
        &logo,
        &SilhouetteConfig::new().with_color(rgb(config.dark_foreground)),
    );
    let dark = canvas
        .with_background(opaque(config.dark_background))
        .render(&filled)
        .with_context(|| "render dark square logo failed")?;
    let dark_path = ws.save(&dark, &config.dark_output)?;
    println!("✓ Dark background logo created: {}", dark_path.display());

    println!("\n📊 Generated files:");
    println!("  - size: {0} x {0} px", config.size);
    for path in [&light_path, &dark_path] {
        println!(
            "  - {}: {:.1} KB",
            cutil::fs::file_name(path),
            cutil::fs::bytes_to_kb(cutil::fs::file_size(path))
        );
    }

    Ok(SquareLogos {
        light: light_path,
        dark: dark_path,
    })
}
