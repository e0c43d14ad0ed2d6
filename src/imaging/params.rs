//! Parameter types for resize operations.
//!
//! These describe *what* to do, not *how*. [`ResizePolicy`] names the sizing
//! strategy together with the target it needs; [`ResizeOptions`] carries the
//! knobs that don't change geometry (resampling filter, padding color).
//!
//! ## Types
//!
//! - [`PolicyKind`]: the six policy names, parsed from strings for dynamic dispatch.
//! - [`ResizePolicy`]: a policy plus its target size (or scalar for width/height).
//! - [`Filter`]: resampling filter handed to the backend (default Lanczos3).
//! - [`ResizeOptions`]: filter + background color.

use super::validate::SizeError;
use crate::types::{Color, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Name of a sizing strategy, without its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    Crop,
    Cover,
    Contain,
    Width,
    Height,
    Thumbnail,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 6] = [
        PolicyKind::Crop,
        PolicyKind::Cover,
        PolicyKind::Contain,
        PolicyKind::Width,
        PolicyKind::Height,
        PolicyKind::Thumbnail,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Crop => "crop",
            PolicyKind::Cover => "cover",
            PolicyKind::Contain => "contain",
            PolicyKind::Width => "width",
            PolicyKind::Height => "height",
            PolicyKind::Thumbnail => "thumbnail",
        }
    }

    /// Width and height policies take a single scalar instead of a box.
    pub fn takes_scalar(self) -> bool {
        matches!(self, PolicyKind::Width | PolicyKind::Height)
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized policy name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown resize policy '{0}'")]
pub struct UnknownPolicy(pub String);

/// Case-insensitive. Anything outside the six names is rejected.
impl FromStr for PolicyKind {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PolicyKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownPolicy(s.to_string()))
    }
}

/// A sizing strategy with the target it resizes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "lowercase")]
pub enum ResizePolicy {
    /// Centered crop of exactly `size`, no scaling.
    Crop { size: Size },
    /// Scale to cover `size`, then crop the overflow.
    Cover { size: Size },
    /// Scale down to fit inside `size`, pad to exactly `size`.
    Contain { size: Size },
    /// Fixed output width, height follows the aspect ratio.
    Width { width: u32 },
    /// Fixed output height, width follows the aspect ratio.
    Height { height: u32 },
    /// Scale down to fit inside `size`, no padding, never upscale.
    Thumbnail { size: Size },
}

impl ResizePolicy {
    pub fn kind(&self) -> PolicyKind {
        match self {
            ResizePolicy::Crop { .. } => PolicyKind::Crop,
            ResizePolicy::Cover { .. } => PolicyKind::Cover,
            ResizePolicy::Contain { .. } => PolicyKind::Contain,
            ResizePolicy::Width { .. } => PolicyKind::Width,
            ResizePolicy::Height { .. } => PolicyKind::Height,
            ResizePolicy::Thumbnail { .. } => PolicyKind::Thumbnail,
        }
    }

    /// Build a policy from its kind and a box size.
    ///
    /// Width and height policies pick the matching axis out of `size`.
    pub fn new(kind: PolicyKind, size: Size) -> Self {
        match kind {
            PolicyKind::Crop => ResizePolicy::Crop { size },
            PolicyKind::Cover => ResizePolicy::Cover { size },
            PolicyKind::Contain => ResizePolicy::Contain { size },
            PolicyKind::Width => ResizePolicy::Width { width: size.width },
            PolicyKind::Height => ResizePolicy::Height {
                height: size.height,
            },
            PolicyKind::Thumbnail => ResizePolicy::Thumbnail { size },
        }
    }

    /// Look up a policy by name. Unknown names are an error, never a fallback.
    pub fn from_name(name: &str, size: Size) -> Result<Self, UnknownPolicy> {
        Ok(Self::new(name.parse()?, size))
    }

    /// Build a policy from command-line style arguments.
    ///
    /// Box policies take `"WxH"`; `width`/`height` take a single integer.
    pub fn parse(name: &str, target: &str) -> Result<Self, ParsePolicyError> {
        let kind: PolicyKind = name.parse().map_err(ParsePolicyError::Unknown)?;
        if !kind.takes_scalar() {
            let size: Size = target.parse().map_err(ParsePolicyError::Size)?;
            return Ok(Self::new(kind, size));
        }
        let value = target
            .trim()
            .parse::<u32>()
            .map_err(|_| {
                ParsePolicyError::Size(SizeError::Unparseable {
                    input: target.to_string(),
                })
            })?;
        let policy = match kind {
            PolicyKind::Width => ResizePolicy::Width { width: value },
            _ => ResizePolicy::Height { height: value },
        };
        policy
            .ensure_positive_target()
            .map_err(ParsePolicyError::Size)?;
        Ok(policy)
    }

    /// Reject zero targets. Not bypassable: a zero target has no geometry at all.
    pub fn ensure_positive_target(&self) -> Result<(), SizeError> {
        match *self {
            ResizePolicy::Crop { size }
            | ResizePolicy::Cover { size }
            | ResizePolicy::Contain { size }
            | ResizePolicy::Thumbnail { size } => size.ensure_positive(),
            ResizePolicy::Width { width } if width == 0 => Err(SizeError::InvalidSize {
                width,
                height: 0,
            }),
            ResizePolicy::Height { height } if height == 0 => Err(SizeError::InvalidSize {
                width: 0,
                height,
            }),
            ResizePolicy::Width { .. } | ResizePolicy::Height { .. } => Ok(()),
        }
    }
}

impl fmt::Display for ResizePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResizePolicy::Width { width } => write!(f, "width {width}"),
            ResizePolicy::Height { height } => write!(f, "height {height}"),
            ResizePolicy::Crop { size }
            | ResizePolicy::Cover { size }
            | ResizePolicy::Contain { size }
            | ResizePolicy::Thumbnail { size } => write!(f, "{} {}", self.kind(), size),
        }
    }
}

/// Failure to build a policy from strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePolicyError {
    #[error(transparent)]
    Unknown(#[from] UnknownPolicy),
    #[error(transparent)]
    Size(#[from] SizeError),
}

/// Resampling filter used when the backend scales an image.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    Nearest,
    Triangle,
    #[value(name = "catmullrom")]
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

/// Knobs that affect pixels but not geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResizeOptions {
    pub filter: Filter,
    /// Canvas color for contain padding.
    pub background: Color,
}
