use super::{Workspace, rgb};
use crate::config::WhiteLogo;
use anyhow::Result;
use logo_effect::recolor_effect::{RecolorConfig, recolor};
use std::path::PathBuf;

/// Recolor the dark logo mark into `config.target`, keeping transparency.
pub fn run(ws: &Workspace, config: &WhiteLogo) -> Result<PathBuf> {
    let logo = ws.load(&config.input)?;

    let effect = RecolorConfig::new()
        .with_threshold(config.threshold)
        .with_target(rgb(config.target));
    let white = recolor(&logo, &effect);

    let path = ws.save(&white, &config.output)?;
    println!("✓ White logo created: {}", path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::testing;
    use image::Rgba;

    #[test]
    fn test_white_logo() -> Result<()> {
        let dir = tempfile::tempdir()?;
        testing::write_black_logo(dir.path())?;

        let ws = Workspace::new(dir.path());
        let path = run(&ws, &WhiteLogo::default())?;
        assert_eq!(path, dir.path().join("logo_white@2x.png"));

        let white = ws.load("logo_white@2x.png")?;
        assert_eq!(white.dimensions(), (80, 40));
        assert_eq!(*white.get_pixel(40, 20), Rgba([255, 255, 255, 255]));
        assert_eq!(*white.get_pixel(10, 20), Rgba([255, 255, 255, 128]));
        assert_eq!(*white.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
        Ok(())
    }

    #[test]
    fn test_missing_input() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let err = run(&Workspace::new(dir.path()), &WhiteLogo::default()).unwrap_err();
        assert!(err.to_string().contains("logo_black@2x.png"));
        assert!(!dir.path().join("logo_white@2x.png").exists());
        Ok(())
    }
}
