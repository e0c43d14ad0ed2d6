//! Image processing backend trait and shared error type.
//!
//! The [`ImageBackend`] trait is the pixel-side collaborator of the resize
//! core: decode, encode, resample, crop, canvas and composite. The core
//! only ever asks a backend for an image's [`Size`]; it never inspects
//! pixels itself.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate.

use super::params::Filter;
use crate::types::{Color, Offset, Rect, Size};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Trait for image processing backends.
///
/// Every operation takes its input by reference and returns a new image, so
/// the caller's source is never mutated. The one exception is
/// [`composite_onto`](ImageBackend::composite_onto), which writes into a
/// canvas the caller just created.
pub trait ImageBackend: Sync {
    /// Backend-specific image type (pixels + format tag).
    type Image: Clone + Send;

    /// Dimensions of an image.
    fn dimensions(&self, image: &Self::Image) -> Size;

    /// Decode encoded bytes, remembering the format they came in.
    fn decode(&self, bytes: &[u8]) -> Result<Self::Image, BackendError>;

    /// Encode to the given format.
    fn encode(&self, image: &Self::Image, format: image::ImageFormat)
    -> Result<Vec<u8>, BackendError>;

    /// Resample to exactly `size` (no aspect ratio handling here).
    fn resample(
        &self,
        image: &Self::Image,
        size: Size,
        filter: Filter,
    ) -> Result<Self::Image, BackendError>;

    /// Cut `rect` out of the image.
    fn crop_region(&self, image: &Self::Image, rect: Rect) -> Result<Self::Image, BackendError>;

    /// A new image of `size` filled with `color`, carrying `like`'s format tag.
    fn canvas(
        &self,
        size: Size,
        color: Color,
        like: &Self::Image,
    ) -> Result<Self::Image, BackendError>;

    /// Paste `overlay` onto `background` with its top-left at `offset`.
    fn composite_onto(
        &self,
        background: &mut Self::Image,
        overlay: &Self::Image,
        offset: Offset,
    ) -> Result<(), BackendError>;
}
