//! Configuration types for avatar generation.
//!
//! This module provides [`Shape`] and [`AvatarOptions`], which together
//! describe everything an avatar render needs besides the label text. All
//! types implement [`serde::Deserialize`] for loading from external sources
//! such as TOML configuration files.
//!
//! # Example
//!
//! ```
//! use initicon::color::Rgb;
//! use initicon::config::{AvatarOptions, Shape};
//!
//! let options = AvatarOptions::new(Shape::Square, 128)
//!     .with_border_color(Rgb::from_hex_lossy("#0066cc"));
//! assert_eq!(options.size(), 128);
//! ```

use std::str::FromStr;

use serde::Deserialize;

use crate::color::Rgb;

/// Default avatar size in pixels.
pub const DEFAULT_SIZE: u32 = 128;

/// Outline shape of the generated avatar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// A circle inscribed in the canvas (default).
    #[default]
    Circle,
    /// A square filling the canvas.
    Square,
}

impl FromStr for Shape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(Self::Circle),
            "square" => Ok(Self::Square),
            _ => Err(format!(
                "invalid shape `{s}`, valid values: circle, square"
            )),
        }
    }
}

/// Options controlling the geometry and colors of a rendered avatar.
///
/// The three color fields are optional; unsupplied colors are derived during
/// palette resolution (see [`crate::palette::Palette`]). Size is taken as-is:
/// degenerate values (0, or smaller than the derived stroke width) produce a
/// valid-but-degenerate document rather than an error.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct AvatarOptions {
    shape: Shape,
    size: u32,
    border_color: Option<Rgb>,
    background_color: Option<Rgb>,
    font_color: Option<Rgb>,
}

impl Default for AvatarOptions {
    fn default() -> Self {
        Self {
            shape: Shape::default(),
            size: DEFAULT_SIZE,
            border_color: None,
            background_color: None,
            font_color: None,
        }
    }
}

impl AvatarOptions {
    /// Creates options with the given shape and size and no supplied colors.
    pub fn new(shape: Shape, size: u32) -> Self {
        Self {
            shape,
            size,
            ..Self::default()
        }
    }

    /// Returns these options with the shape replaced.
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Returns these options with the size replaced.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Returns these options with an explicit border color.
    pub fn with_border_color(mut self, color: Rgb) -> Self {
        self.border_color = Some(color);
        self
    }

    /// Returns these options with an explicit background color.
    pub fn with_background_color(mut self, color: Rgb) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Returns these options with an explicit font color.
    pub fn with_font_color(mut self, color: Rgb) -> Self {
        self.font_color = Some(color);
        self
    }

    /// Returns the avatar shape.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Returns the avatar size in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the supplied border color, if any.
    pub fn border_color(&self) -> Option<Rgb> {
        self.border_color
    }

    /// Returns the supplied background color, if any.
    pub fn background_color(&self) -> Option<Rgb> {
        self.background_color
    }

    /// Returns the supplied font color, if any.
    pub fn font_color(&self) -> Option<Rgb> {
        self.font_color
    }
}
