use image::{Rgba, RgbaImage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("data")?;

    // A black ring with anti-aliased edges on a transparent 600x300 canvas
    let (width, height) = (600u32, 300u32);
    let mut img = RgbaImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - width as f32 / 2.0;
            let dy = y as f32 - height as f32 / 2.0;
            let dist = (dx * dx + dy * dy).sqrt();
            let coverage = (20.0 - (dist - 100.0).abs()).clamp(0.0, 1.0);

            if coverage > 0.0 {
                img.put_pixel(x, y, Rgba([0, 0, 0, (coverage * 255.0) as u8]));
            }
        }
    }

    img.save("data/logo_black@2x.png")?;
    println!("Created data/logo_black@2x.png");

    Ok(())
}
