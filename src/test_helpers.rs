//! Shared test utilities: in-memory images for backend and pipeline tests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let image = gradient_image(800, 533);
//! let thumb = resize_thumbnail(&RustBackend::new(), &image, Size::new(200, 200), &opts, true)?;
//! assert_aspect_close(image.size(), thumb.size());
//! ```

use crate::imaging::RasterImage;
use crate::types::Size;
use image::{DynamicImage, Rgba, RgbaImage};

// =========================================================================
// Image builders
// =========================================================================

/// An image filled with one RGBA color, no format tag.
pub fn solid_image(width: u32, height: u32, rgba: [u8; 4]) -> RasterImage {
    let pixels = RgbaImage::from_pixel(width, height, Rgba(rgba));
    RasterImage::new(DynamicImage::ImageRgba8(pixels), None)
}

/// An opaque image where every pixel is distinct enough to locate crops.
pub fn gradient_image(width: u32, height: u32) -> RasterImage {
    let pixels = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    });
    RasterImage::new(DynamicImage::ImageRgba8(pixels), None)
}

// =========================================================================
// Assertions
// =========================================================================

/// Assert two sizes share an aspect ratio within one pixel of rounding.
pub fn assert_aspect_close(original: Size, scaled: Size) {
    let expected_height = scaled.width as f64 * original.height as f64 / original.width as f64;
    assert!(
        (scaled.height as f64 - expected_height).abs() <= 1.0,
        "aspect drift: {original} scaled to {scaled}, expected height ~{expected_height:.2}"
    );
}
