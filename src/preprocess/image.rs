use crate::classifier::error::ClassifierError;
use image::{imageops, DynamicImage};

pub const IMAGE_MEAN: f32 = 128.0;
pub const IMAGE_STD: f32 = 128.0;
pub const CHANNELS: usize = 3;

pub fn normalize_channel(value: u8) -> f32 {
    (value as f32 - IMAGE_MEAN) / IMAGE_STD
}

/// Converts packed `0xAARRGGBB` pixels into interleaved, normalized RGB
/// values in buffer order.
#[allow(dead_code)]
pub fn pixels_to_input(pixels: &[u32], width: u32, height: u32) -> Result<Vec<f32>, ClassifierError> {
    let expected = width as usize * height as usize;
    if pixels.len() != expected {
        return Err(ClassifierError::DimensionMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    let mut input = Vec::with_capacity(expected * CHANNELS);
    for &pixel in pixels {
        input.push(normalize_channel((pixel >> 16 & 0xFF) as u8));
        input.push(normalize_channel((pixel >> 8 & 0xFF) as u8));
        input.push(normalize_channel((pixel & 0xFF) as u8));
    }

    Ok(input)
}

/// Resizes to exactly `width` x `height` and returns interleaved,
/// normalized RGB values, row by row.
pub fn image_to_input(image: &DynamicImage, width: u32, height: u32) -> Vec<f32> {
    let resized = if image.width() == width && image.height() == height {
        image.to_rgb8()
    } else {
        image
            .resize_exact(width, height, imageops::FilterType::Triangle)
            .to_rgb8()
    };

    resized
        .as_raw()
        .iter()
        .map(|&channel| normalize_channel(channel))
        .collect()
}

pub fn input_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * CHANNELS
}
