//! Pure geometry for every resize policy.
//!
//! All functions here are pure and testable without any I/O or images.
//!
//! Rounding is always upward. Scaling is done in exact integer arithmetic
//! (`u64` cross-multiplication with a ceiling division), so
//! `scale_ceil(v, n, d)` is the true `ceil(v * n / d)` with no float ratio in
//! between. Two properties depend on it: a cover-scaled image is never
//! smaller than the target on either axis, and the crop that follows always
//! has room.

use super::params::ResizePolicy;
use crate::types::{Color, Offset, Rect, Size};
use serde::Serialize;

/// What the backend has to do to produce the output image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "plan", rename_all = "snake_case")]
pub enum Plan {
    /// Cut `Rect` out of the source as-is.
    Crop(Rect),
    /// Resample to `scaled`, then cut `crop` out of the scaled image.
    ScaleThenCrop { scaled: Size, crop: Rect },
    /// Resample to `scaled`, then paste at `offset` on a `canvas` filled with `background`.
    ScaleThenPad {
        scaled: Size,
        canvas: Size,
        offset: Offset,
        background: Color,
    },
    /// Resample to the given size. A size equal to the source means "leave it alone".
    Scale(Size),
}

impl Plan {
    /// Size of the image the plan produces.
    pub fn output_size(&self) -> Size {
        match self {
            Plan::Crop(rect) => rect.size(),
            Plan::ScaleThenCrop { crop, .. } => crop.size(),
            Plan::ScaleThenPad { canvas, .. } => *canvas,
            Plan::Scale(size) => *size,
        }
    }
}

/// `ceil(value * num / den)` in exact integer arithmetic, saturating at `u32::MAX`.
fn scale_ceil(value: u32, num: u32, den: u32) -> u32 {
    let scaled = (u64::from(value) * u64::from(num)).div_ceil(u64::from(den.max(1)));
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Center a `target`-sized rectangle inside `source`.
///
/// The leading offset is rounded up, so an odd leftover pixel is taken from
/// the leading edge and the rectangle is always exactly `target`.
/// A target larger than the source yields a rectangle that overhangs the
/// source; callers are expected to have validated first.
///
/// # Examples
/// ```
/// # use image_resize::imaging::crop_rect;
/// # use image_resize::types::{Rect, Size};
/// let rect = crop_rect(Size::new(800, 533), Size::new(200, 200));
/// assert_eq!(rect, Rect { left: 300, top: 167, right: 500, bottom: 367 });
/// ```
pub fn crop_rect(source: Size, target: Size) -> Rect {
    let left = source.width.saturating_sub(target.width).div_ceil(2);
    let top = source.height.saturating_sub(target.height).div_ceil(2);
    Rect {
        left,
        top,
        right: left.saturating_add(target.width),
        bottom: top.saturating_add(target.height),
    }
}

/// Smallest aspect-preserving size that covers `target` on both axes.
///
/// The axis with the larger ratio lands exactly on the target; the other
/// one is rounded up and may exceed it.
///
/// # Examples
/// ```
/// # use image_resize::imaging::cover_size;
/// # use image_resize::types::Size;
/// assert_eq!(cover_size(Size::new(800, 533), Size::new(200, 100)), Size::new(200, 134));
/// ```
pub fn cover_size(source: Size, target: Size) -> Size {
    // target.w / source.w >= target.h / source.h, cross-multiplied
    let width_ratio_wins = u64::from(target.width) * u64::from(source.height)
        >= u64::from(target.height) * u64::from(source.width);
    if width_ratio_wins {
        Size::new(
            target.width,
            scale_ceil(source.height, target.width, source.width),
        )
    } else {
        Size::new(
            scale_ceil(source.width, target.height, source.height),
            target.height,
        )
    }
}

/// Largest aspect-preserving size that fits inside `bounds`, never upscaling.
///
/// A source that already fits keeps its size.
pub fn fit_within(source: Size, bounds: Size) -> Size {
    if source.fits_within(bounds) {
        return source;
    }
    let width_constrained = u64::from(bounds.width) * u64::from(source.height)
        <= u64::from(bounds.height) * u64::from(source.width);
    if width_constrained {
        Size::new(
            bounds.width,
            scale_ceil(source.height, bounds.width, source.width).min(bounds.height),
        )
    } else {
        Size::new(
            scale_ceil(source.width, bounds.height, source.height).min(bounds.width),
            bounds.height,
        )
    }
}

/// Output size for a fixed width; height follows the aspect ratio.
pub fn width_size(source: Size, width: u32) -> Size {
    Size::new(width, scale_ceil(source.height, width, source.width))
}

/// Output size for a fixed height; width follows the aspect ratio.
pub fn height_size(source: Size, height: u32) -> Size {
    Size::new(scale_ceil(source.width, height, source.height), height)
}

/// Offset that centers `inner` on `canvas`, rounding the leading gap up.
pub fn center_offset(canvas: Size, inner: Size) -> Offset {
    Offset {
        x: canvas.width.saturating_sub(inner.width).div_ceil(2),
        y: canvas.height.saturating_sub(inner.height).div_ceil(2),
    }
}

/// Compute the plan for `policy` applied to an image of `source` size.
///
/// No bounds checking happens here. Run [`validate`](super::validate()) first
/// unless the caller already knows the source is large enough; out-of-range
/// input gives degenerate geometry, not an error.
pub fn plan(policy: &ResizePolicy, source: Size, background: Color) -> Plan {
    match *policy {
        ResizePolicy::Crop { size } => Plan::Crop(crop_rect(source, size)),
        ResizePolicy::Cover { size } => {
            let scaled = cover_size(source, size);
            Plan::ScaleThenCrop {
                scaled,
                crop: crop_rect(scaled, size),
            }
        }
        ResizePolicy::Contain { size } => {
            let scaled = fit_within(source, size);
            Plan::ScaleThenPad {
                scaled,
                canvas: size,
                offset: center_offset(size, scaled),
                background,
            }
        }
        ResizePolicy::Width { width } => Plan::Scale(width_size(source, width)),
        ResizePolicy::Height { height } => Plan::Scale(height_size(source, height)),
        ResizePolicy::Thumbnail { size } => Plan::Scale(fit_within(source, size)),
    }
}
