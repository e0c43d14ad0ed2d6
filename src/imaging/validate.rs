//! Size validation run before any pixel work.
//!
//! Crop and cover need real margin on both axes: the source must be strictly
//! larger than the target, an exact match is rejected. Width and height only
//! need the fixed axis to be at least the target (equal means "nothing to
//! do"). Contain and thumbnail only ever shrink, so every source passes.

use super::params::ResizePolicy;
use crate::types::Size;
use std::fmt;
use thiserror::Error;

/// One side of a size comparison: a full box, or a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    Size(Size),
    Width(u32),
    Height(u32),
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extent::Size(size) => write!(f, "{size}"),
            Extent::Width(w) => write!(f, "width {w}"),
            Extent::Height(h) => write!(f, "height {h}"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SizeError {
    #[error("image is too small: size {actual}, required {required}")]
    TooSmall { actual: Extent, required: Extent },
    #[error("invalid size {width}x{height}: dimensions must be positive")]
    InvalidSize { width: u32, height: u32 },
    #[error("cannot parse size '{input}'")]
    Unparseable { input: String },
}

/// Check that `source` can satisfy `policy`.
pub fn validate(policy: &ResizePolicy, source: Size) -> Result<(), SizeError> {
    match *policy {
        ResizePolicy::Crop { size } | ResizePolicy::Cover { size } => {
            if source.width > size.width && source.height > size.height {
                Ok(())
            } else {
                Err(SizeError::TooSmall {
                    actual: Extent::Size(source),
                    required: Extent::Size(size),
                })
            }
        }
        ResizePolicy::Width { width } => {
            if source.width >= width {
                Ok(())
            } else {
                Err(SizeError::TooSmall {
                    actual: Extent::Width(source.width),
                    required: Extent::Width(width),
                })
            }
        }
        ResizePolicy::Height { height } => {
            if source.height >= height {
                Ok(())
            } else {
                Err(SizeError::TooSmall {
                    actual: Extent::Height(source.height),
                    required: Extent::Height(height),
                })
            }
        }
        ResizePolicy::Contain { .. } | ResizePolicy::Thumbnail { .. } => Ok(()),
    }
}

/// The validator for `policy`, for callers that want to pre-check sources
/// without running the transform.
pub fn validator_for(policy: ResizePolicy) -> impl Fn(Size) -> Result<(), SizeError> + Copy {
    move |source| validate(&policy, source)
}
