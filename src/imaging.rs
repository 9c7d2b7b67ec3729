// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Raster transcoding for logo downloads (PNG/JPEG, white-background
//! compositing)

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use thiserror::Error;

/// JPEG has no alpha channel; transparent regions composite onto this
const JPEG_BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[derive(Debug, Error)]
pub enum ImagingError {
    #[error("could not decode image: {0}")]
    Decode(String),
    #[error("could not encode image: {0}")]
    Encode(String),
}

fn decode(bytes: &[u8]) -> Result<DynamicImage, ImagingError> {
    image::load_from_memory(bytes).map_err(|e| ImagingError::Decode(e.to_string()))
}

fn encode(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, ImagingError> {
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, format)
        .map_err(|e| ImagingError::Encode(e.to_string()))?;
    Ok(out.into_inner())
}

/// Composite an image onto a white background, dropping alpha
fn flatten(image: &DynamicImage) -> DynamicImage {
    let rgba = image.to_rgba8();
    let mut flattened = RgbaImage::from_pixel(rgba.width(), rgba.height(), JPEG_BACKGROUND);
    image::imageops::overlay(&mut flattened, &rgba, 0, 0);
    DynamicImage::ImageRgba8(flattened).to_rgb8().into()
}

/// Re-encode any decodable image as PNG
pub fn to_png(bytes: &[u8]) -> Result<Vec<u8>, ImagingError> {
    let image = decode(bytes)?;
    encode(&image, ImageFormat::Png)
}

/// Re-encode any decodable image as JPEG, compositing transparency onto a
/// white background first
pub fn to_jpeg(bytes: &[u8]) -> Result<Vec<u8>, ImagingError> {
    let image = decode(bytes)?;
    encode(&flatten(&image), ImageFormat::Jpeg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_png() -> Vec<u8> {
        // Left half opaque dark, right half fully transparent
        let mut img = RgbaImage::from_pixel(16, 16, Rgba([10, 20, 30, 255]));
        for x in 8..16 {
            for y in 0..16 {
                img.put_pixel(x, y, Rgba([0, 0, 0, 0]));
            }
        }
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut out, ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn test_png_roundtrip() {
        let png = to_png(&sample_png()).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), 16);
    }

    #[test]
    fn test_jpeg_conversion_flattens_alpha() {
        let jpeg = to_jpeg(&sample_png()).unwrap();
        let decoded = image::load_from_memory(&jpeg).unwrap();
        // Transparent region now reads as (near-)white
        let pixel = decoded.to_rgb8().get_pixel(14, 8).0;
        assert!(pixel.iter().all(|&c| c > 180), "pixel was {:?}", pixel);
    }

    #[test]
    fn test_garbage_input_is_an_error() {
        assert!(to_png(b"definitely not an image").is_err());
        assert!(to_jpeg(b"").is_err());
    }
}
