//! Pure Rust image backend on top of the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP, GIF, BMP) | `image::ImageReader` with format sniffing |
//! | Encode | `DynamicImage::write_to`; JPEG via `JpegEncoder` with quality |
//! | Resample | `DynamicImage::resize_exact` (default `Lanczos3`) |
//! | Crop | `DynamicImage::crop_imm` |
//! | Canvas + composite | `RgbaImage::from_pixel` + `imageops::replace` |
//!
//! Compositing replaces pixels rather than alpha-blending, so a transparent
//! source stays transparent on the padded canvas.

use super::backend::{BackendError, ImageBackend};
use super::params::Filter;
use crate::types::{Color, Offset, Rect, Size};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, ImageReader, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// Decoded pixels plus the format they were decoded from.
///
/// The format tag survives every backend operation so an output can be
/// written back in its input's format.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pixels: DynamicImage,
    format: Option<ImageFormat>,
}

impl RasterImage {
    pub fn new(pixels: DynamicImage, format: Option<ImageFormat>) -> Self {
        Self { pixels, format }
    }

    pub fn pixels(&self) -> &DynamicImage {
        &self.pixels
    }

    pub fn into_pixels(self) -> DynamicImage {
        self.pixels
    }

    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    pub fn size(&self) -> Size {
        Size::new(self.pixels.width(), self.pixels.height())
    }

    pub fn with_format(mut self, format: Option<ImageFormat>) -> Self {
        self.format = format;
        self
    }

    fn derive(&self, pixels: DynamicImage) -> Self {
        Self {
            pixels,
            format: self.format,
        }
    }
}

impl From<Filter> for FilterType {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::Nearest => FilterType::Nearest,
            Filter::Triangle => FilterType::Triangle,
            Filter::CatmullRom => FilterType::CatmullRom,
            Filter::Gaussian => FilterType::Gaussian,
            Filter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend {
    jpeg_quality: u8,
}

impl RustBackend {
    pub fn new() -> Self {
        Self { jpeg_quality: 90 }
    }

    /// JPEG quality used by [`encode`](ImageBackend::encode), clamped to 1-100.
    pub fn with_quality(quality: u8) -> Self {
        Self {
            jpeg_quality: quality.clamp(1, 100),
        }
    }

    /// Load and decode an image from disk.
    pub fn open(&self, path: &Path) -> Result<RasterImage, BackendError> {
        load_image(path)
    }

    /// Read only the header of an image file and return its size.
    pub fn identify(&self, path: &Path) -> Result<Size, BackendError> {
        let (width, height) = image::image_dimensions(path)?;
        Ok(Size::new(width, height))
    }

    /// Encode `image` and write it to `path`.
    ///
    /// The output format comes from the path's extension, falling back to
    /// the image's own format tag.
    pub fn save(&self, image: &RasterImage, path: &Path) -> Result<(), BackendError> {
        let format = ImageFormat::from_path(path)
            .ok()
            .or(image.format)
            .ok_or_else(|| {
                BackendError::ProcessingFailed(format!(
                    "Cannot determine output format for {}",
                    path.display()
                ))
            })?;
        let bytes = self.encode(image, format)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk, sniffing the format from content.
fn load_image(path: &Path) -> Result<RasterImage, BackendError> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format().or_else(|| ImageFormat::from_path(path).ok());
    let pixels = reader.decode().map_err(|e| {
        BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
    })?;
    Ok(RasterImage { pixels, format })
}

impl ImageBackend for RustBackend {
    type Image = RasterImage;

    fn dimensions(&self, image: &RasterImage) -> Size {
        image.size()
    }

    fn decode(&self, bytes: &[u8]) -> Result<RasterImage, BackendError> {
        let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
        let format = reader.format();
        let pixels = reader.decode()?;
        Ok(RasterImage { pixels, format })
    }

    fn encode(&self, image: &RasterImage, format: ImageFormat) -> Result<Vec<u8>, BackendError> {
        if !format.writing_enabled() {
            return Err(BackendError::ProcessingFailed(format!(
                "Unsupported output format: {:?}",
                format
            )));
        }
        let mut buf = Vec::new();
        match format {
            // JPEG has no alpha channel; padded canvases are RGBA.
            ImageFormat::Jpeg => {
                let encoder = JpegEncoder::new_with_quality(&mut buf, self.jpeg_quality);
                DynamicImage::ImageRgb8(image.pixels.to_rgb8()).write_with_encoder(encoder)?;
            }
            other => image.pixels.write_to(&mut Cursor::new(&mut buf), other)?,
        }
        Ok(buf)
    }

    fn resample(
        &self,
        image: &RasterImage,
        size: Size,
        filter: Filter,
    ) -> Result<RasterImage, BackendError> {
        let pixels = image
            .pixels
            .resize_exact(size.width, size.height, filter.into());
        Ok(image.derive(pixels))
    }

    fn crop_region(&self, image: &RasterImage, rect: Rect) -> Result<RasterImage, BackendError> {
        let pixels = image
            .pixels
            .crop_imm(rect.left, rect.top, rect.width(), rect.height());
        Ok(image.derive(pixels))
    }

    fn canvas(
        &self,
        size: Size,
        color: Color,
        like: &RasterImage,
    ) -> Result<RasterImage, BackendError> {
        let canvas = RgbaImage::from_pixel(size.width, size.height, Rgba(color.to_array()));
        Ok(like.derive(DynamicImage::ImageRgba8(canvas)))
    }

    fn composite_onto(
        &self,
        background: &mut RasterImage,
        overlay: &RasterImage,
        offset: Offset,
    ) -> Result<(), BackendError> {
        let top = overlay.pixels.to_rgba8();
        let (x, y) = (i64::from(offset.x), i64::from(offset.y));
        match &mut background.pixels {
            DynamicImage::ImageRgba8(canvas) => imageops::replace(canvas, &top, x, y),
            other => {
                let mut canvas = other.to_rgba8();
                imageops::replace(&mut canvas, &top, x, y);
                *other = DynamicImage::ImageRgba8(canvas);
            }
        }
        Ok(())
    }
}
