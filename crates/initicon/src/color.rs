//! RGB color handling for avatar rendering.
//!
//! This module provides the [`Rgb`] type, a three-channel color with the
//! hex conversions and channel scaling used by palette derivation.
//!
//! # Parsing
//!
//! Colors are parsed from `#rrggbb` strings with [`Rgb::from_hex_lossy`].
//! Malformed input falls back to black rather than failing, so a caller
//! cannot distinguish "black requested" from "malformed input given". This
//! is deliberate: color strings arrive from untrusted sources (query
//! parameters, config files) and a wrong color is preferable to a failed
//! render.
//!
//! # Examples
//!
//! ```
//! use initicon::color::Rgb;
//!
//! let blue = Rgb::from_hex_lossy("#0066cc");
//! assert_eq!(blue.to_string(), "#0066cc");
//!
//! // Malformed input falls back to black.
//! let fallback = Rgb::from_hex_lossy("notacolor");
//! assert_eq!(fallback, Rgb::new(0, 0, 0));
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer};

/// A color with three 8-bit channels.
///
/// Channels are `u8`, so every value is inherently within `[0, 255]`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    /// Creates a color from its red, green, and blue channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#rrggbb` hex color string, falling back to black.
    ///
    /// Accepts exactly a `#` followed by six hex digits, in either case.
    /// Anything else (missing prefix, wrong length, non-hex digits) yields
    /// `Rgb::new(0, 0, 0)` silently.
    ///
    /// # Examples
    ///
    /// ```
    /// use initicon::color::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex_lossy("#FFCC00"), Rgb::new(255, 204, 0));
    /// assert_eq!(Rgb::from_hex_lossy("ffcc00"), Rgb::new(0, 0, 0));
    /// ```
    pub fn from_hex_lossy(hex: &str) -> Self {
        Self::try_from_hex(hex).unwrap_or_default()
    }

    fn try_from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }

        // `get` guards against multi-byte characters landing on a slice
        // boundary; such input is malformed anyway.
        let channel = |range| u8::from_str_radix(digits.get(range)?, 16).ok();

        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Returns the red channel.
    pub const fn r(&self) -> u8 {
        self.r
    }

    /// Returns the green channel.
    pub const fn g(&self) -> u8 {
        self.g
    }

    /// Returns the blue channel.
    pub const fn b(&self) -> u8 {
        self.b
    }

    /// Returns a variation of this color with every channel multiplied by
    /// `factor`.
    ///
    /// Scaled values truncate toward zero and clamp to `[0, 255]`. Factors
    /// above 1.0 lighten, factors below 1.0 darken.
    ///
    /// # Examples
    ///
    /// ```
    /// use initicon::color::Rgb;
    ///
    /// let base = Rgb::new(0, 102, 204);
    /// assert_eq!(base.scale(1.2), Rgb::new(0, 122, 244));
    /// assert_eq!(Rgb::new(255, 255, 255).scale(1.2), Rgb::new(255, 255, 255));
    /// ```
    pub fn scale(self, factor: f32) -> Self {
        Self::new(
            scale_channel(self.r, factor),
            scale_channel(self.g, factor),
            scale_channel(self.b, factor),
        )
    }
}

fn scale_channel(value: u8, factor: f32) -> u8 {
    (f32::from(value) * factor).clamp(0.0, 255.0) as u8
}

impl fmt::Display for Rgb {
    /// Formats as lowercase `#rrggbb`, zero-padded per channel.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    /// Deserializes from a hex color string with the same lossy fallback
    /// as [`Rgb::from_hex_lossy`].
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        Ok(Self::from_hex_lossy(&hex))
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// Any color survives a hex round trip unchanged.
    fn check_hex_round_trip(r: u8, g: u8, b: u8) -> Result<(), TestCaseError> {
        let color = Rgb::new(r, g, b);
        prop_assert_eq!(Rgb::from_hex_lossy(&color.to_string()), color);
        Ok(())
    }

    /// Scaling never panics and never exceeds the source channel for
    /// factors below 1.0.
    fn check_scale_darkening_bound(r: u8, g: u8, b: u8, factor: f32) -> Result<(), TestCaseError> {
        let color = Rgb::new(r, g, b);
        let scaled = color.scale(factor);
        prop_assert!(scaled.r() <= color.r());
        prop_assert!(scaled.g() <= color.g());
        prop_assert!(scaled.b() <= color.b());
        Ok(())
    }

    proptest! {
        #[test]
        fn hex_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            check_hex_round_trip(r, g, b)?;
        }

        #[test]
        fn scale_darkening_bound(
            r in any::<u8>(),
            g in any::<u8>(),
            b in any::<u8>(),
            factor in 0.0f32..=1.0,
        ) {
            check_scale_darkening_bound(r, g, b, factor)?;
        }
    }
}
