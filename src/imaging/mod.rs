//! Image resizing: validation, geometry planning and backend execution.
//!
//! | Policy | Plan | Output size |
//! |---|---|---|
//! | **crop** | center crop | exactly the target |
//! | **cover** | scale up/down to cover, center crop | exactly the target |
//! | **contain** | shrink to fit, pad on a canvas | exactly the target |
//! | **width** / **height** | scale, other axis follows aspect | fixed axis exact |
//! | **thumbnail** | shrink to fit, never upscale | within the target |
//!
//! The module is split into:
//! - **Validation**: bounds checks per policy, run before any pixel work
//! - **Calculations**: pure functions for crop rects, scaled sizes, paste offsets
//! - **Parameters**: policy, filter and option types
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: entry points combining validation, planning and the backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;
mod validate;

pub use backend::{BackendError, ImageBackend};
pub use calculations::{
    Plan, center_offset, cover_size, crop_rect, fit_within, height_size, plan, width_size,
};
pub use operations::{
    ResizeError, checked_plan, execute, resize, resize_by_name, resize_bytes, resize_contain,
    resize_cover, resize_crop, resize_height, resize_thumbnail, resize_width, resize_with,
};
pub use params::{Filter, ParsePolicyError, PolicyKind, ResizeOptions, ResizePolicy, UnknownPolicy};
pub use rust_backend::{RasterImage, RustBackend};
pub use validate::{Extent, SizeError, validate, validator_for};
