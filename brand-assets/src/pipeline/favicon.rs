use super::Workspace;
use crate::config::Favicon;
use anyhow::{Context, Result};
use logo_effect::ico::save_ico;
use std::path::PathBuf;

/// Pack several resolutions of the light square logo into one ICO file.
pub fn run(ws: &Workspace, config: &Favicon) -> Result<PathBuf> {
    println!("🔧 Generating {}...", config.output.display());

    let base = ws.load(&config.input)?;
    let path = ws.path(&config.output);
    ws.ensure_parent(&path)?;

    save_ico(&base, &config.sizes, &path)
        .with_context(|| format!("save {} failed", path.display()))?;

    println!("✓ {} created", path.display());
    println!(
        "📊 File size: {:.1} KB",
        cutil::fs::bytes_to_kb(cutil::fs::file_size(&path))
    );

    Ok(path)
}
