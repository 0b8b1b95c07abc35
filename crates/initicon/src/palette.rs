//! Palette resolution for avatar colors.
//!
//! Turns up to three caller-supplied colors into three concrete, harmonious
//! colors (border, background, font) via lightening and darkening transforms
//! seeded from a single base color.
//!
//! # Derivation
//!
//! 1. The *base* color is the first supplied color in border, background,
//!    font order, or a random pick from [`FALLBACK_COLORS`] when none is
//!    supplied.
//! 2. The *working background* is the supplied background, or the base
//!    lightened by [`BACKGROUND_FACTOR`].
//! 3. Unsupplied border and font colors both darken the working background
//!    (by [`BORDER_FACTOR`] and [`FONT_FACTOR`] respectively); they derive
//!    from the working background, not from the base or from each other.
//!
//! # Randomness
//!
//! The random pick happens only when all three inputs are `None`.
//! [`Palette::resolve`] draws from the process thread RNG;
//! [`Palette::resolve_with`] accepts any [`Rng`] so tests can pin
//! deterministic output.
//!
//! # Examples
//!
//! ```
//! use initicon::color::Rgb;
//! use initicon::palette::Palette;
//!
//! let palette = Palette::resolve(Some(Rgb::from_hex_lossy("#0066cc")), None, None);
//! assert_eq!(palette.border().to_string(), "#0066cc");
//! assert_eq!(palette.background().to_string(), "#007af4");
//! assert_eq!(palette.font().to_string(), "#00366d");
//! ```

use log::debug;
use rand::{Rng, RngExt};

use crate::color::Rgb;

/// Vetted colors used to seed derivation when the caller supplies none.
pub const FALLBACK_COLORS: [Rgb; 6] = [
    Rgb::new(0x00, 0x66, 0xcc),
    Rgb::new(0xff, 0xcc, 0x00),
    Rgb::new(0xff, 0x00, 0x99),
    Rgb::new(0x33, 0xcc, 0x33),
    Rgb::new(0x99, 0x33, 0xff),
    Rgb::new(0xff, 0x66, 0x66),
];

/// Lightening factor applied to the base color to derive the background.
pub const BACKGROUND_FACTOR: f32 = 1.2;

/// Darkening factor applied to the working background to derive the border.
pub const BORDER_FACTOR: f32 = 0.75;

/// Darkening factor applied to the working background to derive the font
/// color.
pub const FONT_FACTOR: f32 = 0.45;

/// Three concrete colors ready for rendering.
///
/// A palette is never partially filled: resolution always produces all
/// three colors, even when every input is derived from a single random
/// seed. It carries no identity beyond its values and is recomputed per
/// render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    border: Rgb,
    background: Rgb,
    font: Rgb,
}

impl Palette {
    /// Resolves a palette from up to three supplied colors, using the
    /// process thread RNG for the fallback pick.
    ///
    /// Supplied colors pass through unchanged; unsupplied ones are derived.
    /// Randomness is consumed only when all three inputs are `None`.
    pub fn resolve(border: Option<Rgb>, background: Option<Rgb>, font: Option<Rgb>) -> Self {
        Self::resolve_with(&mut rand::rng(), border, background, font)
    }

    /// Resolves a palette with an injected randomness source.
    ///
    /// # Arguments
    ///
    /// * `rng` - Source for the fallback-palette pick. Only consulted when
    ///   no color is supplied.
    /// * `border`, `background`, `font` - Caller-supplied colors, if any.
    pub fn resolve_with<R>(
        rng: &mut R,
        border: Option<Rgb>,
        background: Option<Rgb>,
        font: Option<Rgb>,
    ) -> Self
    where
        R: Rng + ?Sized,
    {
        let base = border.or(background).or(font).unwrap_or_else(|| {
            let pick = FALLBACK_COLORS[rng.random_range(0..FALLBACK_COLORS.len())];
            debug!(base:? = pick; "No color supplied, seeding from fallback palette");
            pick
        });

        // The working background anchors border and font derivation even
        // when the background itself was supplied.
        let background = background.unwrap_or_else(|| base.scale(BACKGROUND_FACTOR));
        let border = border.unwrap_or_else(|| background.scale(BORDER_FACTOR));
        let font = font.unwrap_or_else(|| background.scale(FONT_FACTOR));

        Self {
            border,
            background,
            font,
        }
    }

    /// Returns the border color.
    pub fn border(&self) -> Rgb {
        self.border
    }

    /// Returns the background color.
    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Returns the font color.
    pub fn font(&self) -> Rgb {
        self.font
    }
}
