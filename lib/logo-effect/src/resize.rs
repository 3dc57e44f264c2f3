use image::{RgbaImage, imageops::{self, FilterType}};

/// Resampling filter used for every resize in the pipeline
pub const FILTER: FilterType = FilterType::Lanczos3;

pub fn resize_exact(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if image.dimensions() == (width, height) {
        return image.clone();
    }

    imageops::resize(image, width, height, FILTER)
}

/// Resize to a `size x size` square, ignoring the source aspect ratio.
pub fn resize_square(image: &RgbaImage, size: u32) -> RgbaImage {
    resize_exact(image, size, size)
}
