//! initicon - identicon-style SVG avatars with derived color palettes.
//!
//! Renders a circle or square avatar containing up to two characters of
//! text. Colors are either supplied explicitly or derived from a single
//! seed color through lightening and darkening transforms:
//!
//! - **Colors**: RGB model and hex conversion ([`color`] module)
//! - **Palette**: derivation of border/background/font colors ([`palette`] module)
//! - **Configuration**: shape, size, and optional colors ([`config`] module)
//!
//! The output is a self-contained SVG document written to any byte sink;
//! the crate has no dependency on file systems or network stacks.

pub mod color;
pub mod config;
pub mod palette;

mod draw;
mod error;

pub use error::IniticonError;

use std::io::Write;

use log::{debug, info};
use rand::Rng;

use config::AvatarOptions;
use palette::Palette;

/// An avatar ready to be rendered.
///
/// Combines a text label with [`AvatarOptions`] and renders through the
/// palette-resolution and drawing stages. Each render resolves the palette
/// exactly once; with all three colors supplied, repeated renders are
/// byte-identical.
///
/// # Examples
///
/// ```
/// use initicon::Avatar;
/// use initicon::config::{AvatarOptions, Shape};
///
/// let avatar = Avatar::new("EJ", AvatarOptions::new(Shape::Square, 128));
///
/// let svg = avatar.to_svg_string().expect("render failed");
/// assert!(svg.contains("<svg"));
/// ```
pub struct Avatar {
    text: String,
    options: AvatarOptions,
}

impl Avatar {
    /// Creates an avatar from a text label and rendering options.
    ///
    /// Only the first two bytes of the label appear in the rendered
    /// document; longer labels are truncated at render time.
    pub fn new(text: impl Into<String>, options: AvatarOptions) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }

    /// Returns the label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the rendering options.
    pub fn options(&self) -> &AvatarOptions {
        &self.options
    }

    /// Renders the avatar and writes the SVG document to `writer`.
    ///
    /// Unsupplied colors are derived; when no color is supplied at all, the
    /// derivation seed is drawn from the process thread RNG, so repeated
    /// calls may produce different palettes.
    ///
    /// # Errors
    ///
    /// Returns [`IniticonError::Io`] if writing to the sink fails. Rendering
    /// itself cannot fail.
    pub fn generate<W: Write>(&self, writer: W) -> Result<(), IniticonError> {
        self.generate_with(&mut rand::rng(), writer)
    }

    /// Renders the avatar with an injected randomness source.
    ///
    /// Behaves like [`Avatar::generate`], but draws the fallback-palette
    /// pick from `rng`, letting tests pin deterministic output.
    ///
    /// # Errors
    ///
    /// Returns [`IniticonError::Io`] if writing to the sink fails.
    pub fn generate_with<R, W>(&self, rng: &mut R, mut writer: W) -> Result<(), IniticonError>
    where
        R: Rng + ?Sized,
        W: Write,
    {
        info!(shape:? = self.options.shape(), size = self.options.size(); "Rendering avatar");

        let palette = Palette::resolve_with(
            rng,
            self.options.border_color(),
            self.options.background_color(),
            self.options.font_color(),
        );
        debug!(palette:? = palette; "Palette resolved");

        let document = draw::render(&self.text, &self.options, &palette);
        write!(writer, "{document}")?;

        Ok(())
    }

    /// Renders the avatar to an in-memory SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`IniticonError::Io`] only if the in-memory write fails,
    /// which in practice it cannot.
    pub fn to_svg_string(&self) -> Result<String, IniticonError> {
        let mut buffer = Vec::new();
        self.generate(&mut buffer)?;
        Ok(String::from_utf8(buffer).expect("SVG output is valid UTF-8"))
    }
}
