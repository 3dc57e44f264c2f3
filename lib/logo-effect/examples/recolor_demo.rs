use logo_effect::{
    Effect, LogoEffect, load_rgba,
    recolor_effect::{RecolorConfig, SilhouetteConfig},
    save_png,
};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let img = load_rgba("data/logo_black@2x.png")?;

    let effects = [
        ("recolor_white.png", LogoEffect::Recolor(RecolorConfig::new())),
        (
            "recolor_red.png",
            LogoEffect::Recolor(RecolorConfig::new().with_target_rgb(220, 30, 30)),
        ),
        (
            "recolor_low_threshold.png",
            LogoEffect::Recolor(RecolorConfig::new().with_threshold(32)),
        ),
        ("silhouette.png", LogoEffect::Silhouette(SilhouetteConfig::new())),
    ];

    for (filename, effect) in effects {
        let mut out = img.clone();
        effect.apply(&mut out)?;
        save_png(&out, output_dir.join(filename))?;
        println!("✓ Generated {}", filename);
    }

    println!("\n✓ All recolor effects applied successfully!");
    println!("  Images saved to: tmp/");

    Ok(())
}
