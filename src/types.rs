//! Geometry value types shared by the planner, the backends and the CLI.
//!
//! These are plain `Copy` values. None of them touch pixels: a [`Size`] is
//! all the core ever learns about an image.

use crate::imaging::SizeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Width and height in pixels.
///
/// Sizes built from user input go through [`Size::checked`] or [`FromStr`],
/// which reject zero dimensions. [`Size::new`] is for sizes the code already
/// knows to be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Build a size, rejecting zero on either axis.
    pub fn checked(width: u32, height: u32) -> Result<Self, SizeError> {
        let size = Self::new(width, height);
        size.ensure_positive()?;
        Ok(size)
    }

    pub fn ensure_positive(self) -> Result<(), SizeError> {
        if self.width == 0 || self.height == 0 {
            return Err(SizeError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// True when both axes are no larger than `bounds`.
    pub fn fits_within(self, bounds: Size) -> bool {
        self.width <= bounds.width && self.height <= bounds.height
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parses `"WIDTHxHEIGHT"` (also accepts `X` and `*` as separator).
impl FromStr for Size {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparseable = || SizeError::Unparseable {
            input: s.to_string(),
        };
        let (w, h) = s
            .trim()
            .split_once(['x', 'X', '*'])
            .ok_or_else(unparseable)?;
        let width = w.trim().parse::<u32>().map_err(|_| unparseable())?;
        let height = h.trim().parse::<u32>().map_err(|_| unparseable())?;
        Self::checked(width, height)
    }
}

/// A region of a source image as edge offsets: `[left, right) x [top, bottom)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Rect {
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// True when the rect is non-empty and lies inside an image of `source` size.
    pub fn is_within(&self, source: Size) -> bool {
        self.left < self.right
            && self.top < self.bottom
            && self.right <= source.width
            && self.bottom <= source.height
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Paste position of an overlay on a canvas, from the canvas top-left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offset {
    pub x: u32,
    pub y: u32,
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}+{}", self.x, self.y)
    }
}

/// RGBA8 canvas color used to pad contained images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// White, fully transparent.
impl Default for Color {
    fn default() -> Self {
        Self::rgba(255, 255, 255, 0)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot parse color '{0}': expected R,G,B or R,G,B,A with values 0-255")]
pub struct ParseColorError(pub String);

/// Parses `"R,G,B"` (opaque) or `"R,G,B,A"`.
impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let channels = s
            .split(',')
            .map(|c| c.trim().parse::<u8>())
            .collect::<Result<Vec<u8>, _>>()
            .map_err(|_| ParseColorError(s.to_string()))?;
        match channels[..] {
            [r, g, b] => Ok(Self::rgba(r, g, b, 255)),
            [r, g, b, a] => Ok(Self::rgba(r, g, b, a)),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}
