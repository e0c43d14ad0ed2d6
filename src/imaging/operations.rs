//! High-level resize operations.
//!
//! Every call runs the same sequence: check sizes, plan the geometry, hand
//! the plan to the backend. Validation happens before any pixel work, so a
//! rejected source costs nothing. A call holds no state beyond its own
//! arguments and is safe to run concurrently with others.
//!
//! Passing `validate = false` skips only the policy bounds check; zero
//! sizes are always rejected. With validation skipped, out-of-range input
//! gives whatever geometry the planner computes.

use super::backend::{BackendError, ImageBackend};
use super::calculations::{Plan, plan};
use super::params::{Filter, ParsePolicyError, ResizeOptions, ResizePolicy, UnknownPolicy};
use super::validate::{SizeError, validate as validate_size};
use crate::types::{Color, Size};
use thiserror::Error;
use tracing::{debug, debug_span, warn};

#[derive(Error, Debug)]
pub enum ResizeError {
    #[error(transparent)]
    Size(#[from] SizeError),
    #[error(
        "unknown resize policy '{name}' (expected crop, cover, contain, width, height or thumbnail)"
    )]
    UnknownPolicy { name: String },
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),
}

impl From<UnknownPolicy> for ResizeError {
    fn from(UnknownPolicy(name): UnknownPolicy) -> Self {
        ResizeError::UnknownPolicy { name }
    }
}

impl From<ParsePolicyError> for ResizeError {
    fn from(err: ParsePolicyError) -> Self {
        match err {
            ParsePolicyError::Unknown(unknown) => unknown.into(),
            ParsePolicyError::Size(size) => size.into(),
        }
    }
}

/// Result type for resize operations.
pub type Result<T> = std::result::Result<T, ResizeError>;

/// Resize `image` under `policy`, validating first.
pub fn resize<B: ImageBackend>(
    backend: &B,
    policy: ResizePolicy,
    image: &B::Image,
    options: &ResizeOptions,
) -> Result<B::Image> {
    resize_with(backend, policy, image, options, true)
}

/// Resize `image` under `policy`, optionally skipping the bounds check.
pub fn resize_with<B: ImageBackend>(
    backend: &B,
    policy: ResizePolicy,
    image: &B::Image,
    options: &ResizeOptions,
    validate: bool,
) -> Result<B::Image> {
    let _span = debug_span!("resize", %policy).entered();
    let source = backend.dimensions(image);
    let plan = checked_plan(&policy, source, options.background, validate)?;

    let output = execute(backend, image, &plan, options.filter)?;
    let produced = backend.dimensions(&output);
    if produced != plan.output_size() {
        warn!(
            expected = %plan.output_size(),
            %produced,
            "backend output differs from plan"
        );
    }
    Ok(output)
}

/// Check sizes, then plan. The geometry a resize would run, without pixels.
///
/// Zero sizes are always rejected; `validate = false` skips only the
/// policy bounds check.
pub fn checked_plan(
    policy: &ResizePolicy,
    source: Size,
    background: Color,
    validate: bool,
) -> Result<Plan> {
    source.ensure_positive()?;
    policy.ensure_positive_target()?;

    if validate {
        validate_size(policy, source)?;
    } else {
        debug!(%source, "validation skipped");
    }

    let plan = plan(policy, source, background);
    debug!(%source, ?plan, "planned");
    Ok(plan)
}

/// Resolve `name` to a policy and resize. Unknown names fail, nothing falls back.
pub fn resize_by_name<B: ImageBackend>(
    backend: &B,
    name: &str,
    image: &B::Image,
    size: Size,
    options: &ResizeOptions,
) -> Result<B::Image> {
    let policy = ResizePolicy::from_name(name, size)?;
    resize(backend, policy, image, options)
}

/// Centered crop of exactly `size`.
pub fn resize_crop<B: ImageBackend>(
    backend: &B,
    image: &B::Image,
    size: Size,
    options: &ResizeOptions,
    validate: bool,
) -> Result<B::Image> {
    resize_with(backend, ResizePolicy::Crop { size }, image, options, validate)
}

/// Scale to cover `size`, then center-crop to it.
pub fn resize_cover<B: ImageBackend>(
    backend: &B,
    image: &B::Image,
    size: Size,
    options: &ResizeOptions,
    validate: bool,
) -> Result<B::Image> {
    resize_with(backend, ResizePolicy::Cover { size }, image, options, validate)
}

/// Shrink to fit inside `size` and center on a `size` canvas.
pub fn resize_contain<B: ImageBackend>(
    backend: &B,
    image: &B::Image,
    size: Size,
    options: &ResizeOptions,
    validate: bool,
) -> Result<B::Image> {
    resize_with(backend, ResizePolicy::Contain { size }, image, options, validate)
}

pub fn resize_width<B: ImageBackend>(
    backend: &B,
    image: &B::Image,
    width: u32,
    options: &ResizeOptions,
    validate: bool,
) -> Result<B::Image> {
    resize_with(backend, ResizePolicy::Width { width }, image, options, validate)
}

pub fn resize_height<B: ImageBackend>(
    backend: &B,
    image: &B::Image,
    height: u32,
    options: &ResizeOptions,
    validate: bool,
) -> Result<B::Image> {
    resize_with(backend, ResizePolicy::Height { height }, image, options, validate)
}

/// Shrink to fit inside `size`, keeping the aspect ratio. Never upscales.
pub fn resize_thumbnail<B: ImageBackend>(
    backend: &B,
    image: &B::Image,
    size: Size,
    options: &ResizeOptions,
    validate: bool,
) -> Result<B::Image> {
    resize_with(backend, ResizePolicy::Thumbnail { size }, image, options, validate)
}

/// Decode `bytes`, resize under `policy`, encode the result as `format`.
pub fn resize_bytes<B: ImageBackend>(
    backend: &B,
    policy: ResizePolicy,
    bytes: &[u8],
    format: image::ImageFormat,
    options: &ResizeOptions,
) -> Result<Vec<u8>> {
    let image = backend.decode(bytes)?;
    let output = resize(backend, policy, &image, options)?;
    Ok(backend.encode(&output, format)?)
}

/// Run a plan against the backend.
///
/// Resampling is skipped when the image is already at the planned size, so
/// identity plans hand back an untouched copy of the input.
pub fn execute<B: ImageBackend>(
    backend: &B,
    image: &B::Image,
    plan: &Plan,
    filter: Filter,
) -> std::result::Result<B::Image, BackendError> {
    match *plan {
        Plan::Crop(rect) => backend.crop_region(image, rect),
        Plan::ScaleThenCrop { scaled, crop } => {
            let scaled = scale(backend, image, scaled, filter)?;
            backend.crop_region(&scaled, crop)
        }
        Plan::ScaleThenPad {
            scaled,
            canvas,
            offset,
            background,
        } => {
            let scaled = scale(backend, image, scaled, filter)?;
            let mut output = backend.canvas(canvas, background, &scaled)?;
            backend.composite_onto(&mut output, &scaled, offset)?;
            Ok(output)
        }
        Plan::Scale(size) => scale(backend, image, size, filter),
    }
}

fn scale<B: ImageBackend>(
    backend: &B,
    image: &B::Image,
    size: Size,
    filter: Filter,
) -> std::result::Result<B::Image, BackendError> {
    if backend.dimensions(image) == size {
        debug!(%size, "already at size, resample skipped");
        return Ok(image.clone());
    }
    backend.resample(image, size, filter)
}
