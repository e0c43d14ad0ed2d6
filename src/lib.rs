//! # image-resize
//!
//! Resize images under one of six sizing policies (crop, cover, contain,
//! width, height, thumbnail) with exact, reproducible geometry.
//!
//! # Architecture: Validate → Plan → Execute
//!
//! Every resize runs the same three steps:
//!
//! ```text
//! 1. Validate  source size + policy  →  ok / TooSmall     (no pixels touched)
//! 2. Plan      source size + policy  →  Plan              (crop rect, scaled size, paste offset)
//! 3. Execute   image + Plan          →  image             (backend resample / crop / composite)
//! ```
//!
//! Steps 1 and 2 are pure functions of sizes, so the whole geometry can be
//! unit tested without decoding a single image. Step 3 is delegated to an
//! [`ImageBackend`](imaging::ImageBackend), which owns no decisions.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Policies, validation, geometry planning, backends, resize entry points |
//! | [`types`] | `Size`, `Rect`, `Offset`, `Color` value types |
//! | [`config`] | TOML config loading, merging with stock defaults, validation |
//! | [`naming`] | Output paths for batch runs, collision detection |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Round Up, Always
//!
//! Every derived pixel size is rounded up, and the arithmetic is done on
//! integers so there is no float ratio to drift. Cover relies on this: its
//! scaled image is never a pixel short of the target, so the crop that
//! follows always has room. Crop offsets round the leading edge up; an odd
//! spare pixel is dropped from the left/top.
//!
//! ## Strict Bounds for Crop and Cover
//!
//! Crop and cover require the source to be strictly larger than the target
//! on both axes. Width and height accept an equal source and return it
//! untouched. Contain and thumbnail never enlarge, so they accept anything.
//!
//! ## Closed Set of Policies
//!
//! Policies are an enum matched exhaustively. Looking a policy up by name
//! fails with `UnknownPolicy` for anything outside the six; there is no
//! default.

pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
