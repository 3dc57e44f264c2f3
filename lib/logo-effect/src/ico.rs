//! Multi-resolution ICO packaging

use crate::{LogoEffectError, LogoEffectResult, resize};
use image::{
    ExtendedColorType, RgbaImage,
    codecs::ico::{IcoEncoder, IcoFrame},
};
use std::{fs::File, io::Write, path::Path};

/// Largest side an ICO directory entry can describe
pub const MAX_ICO_SIZE: u32 = 256;

/// Resize `image` to each of `sizes` and write all of them as PNG frames of one ICO.
pub fn encode_ico<W: Write>(image: &RgbaImage, sizes: &[u32], writer: W) -> LogoEffectResult<()> {
    if sizes.is_empty() {
        return Err(LogoEffectError::InvalidParameter(
            "ico needs at least one size".to_string(),
        ));
    }

    if let Some(size) = sizes.iter().find(|s| **s == 0 || **s > MAX_ICO_SIZE) {
        return Err(LogoEffectError::InvalidParameter(format!(
            "ico size {size} is outside 1..={MAX_ICO_SIZE}"
        )));
    }

    let mut frames = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let resized = resize::resize_square(image, size);
        frames.push(IcoFrame::as_png(
            resized.as_raw(),
            size,
            size,
            ExtendedColorType::Rgba8,
        )?);
    }

    IcoEncoder::new(writer).encode_images(&frames)?;
    log::debug!("encoded ico with sizes {sizes:?}");

    Ok(())
}

pub fn save_ico(image: &RgbaImage, sizes: &[u32], path: impl AsRef<Path>) -> LogoEffectResult<()> {
    let file = File::create(path.as_ref())?;
    encode_ico(image, sizes, file)
}
