//! Shape layout and SVG document assembly.
//!
//! Lays out the avatar shape and its centered label, then assembles a
//! self-contained SVG document: one shape element followed by one text
//! element, both styled with inline attributes so the output has no
//! external stylesheet or font dependencies.
//!
//! All layout quantities derive from the avatar size with truncating
//! integer division:
//!
//! | Quantity | Formula |
//! |----------|---------|
//! | font size | `size / 2` |
//! | stroke width | `size / 10` |
//! | canvas extent | `size + stroke_width` (both axes, both shapes) |
//!
//! The label's vertical placement (`extent / 2 + font_size / 3`) is an
//! empirical baseline offset, not true font-metric centering; measuring
//! glyphs is out of scope.

use std::borrow::Cow;

use svg::{Document, node::element as svg_element};

use crate::{
    config::{AvatarOptions, Shape},
    palette::Palette,
};

/// Number of bytes of the label kept in the rendered document.
///
/// Truncation is byte-oriented, not grapheme-aware: a multi-byte character
/// spanning the cut is replaced rather than kept whole.
const MAX_LABEL_BYTES: usize = 2;

/// Pixel dimensions derived from the avatar size.
#[derive(Debug, Clone, Copy)]
struct Layout {
    size: u32,
    font_size: u32,
    stroke_width: u32,
    extent: u32,
}

impl Layout {
    fn new(size: u32) -> Self {
        let stroke_width = size / 10;
        Self {
            size,
            font_size: size / 2,
            stroke_width,
            extent: size.saturating_add(stroke_width),
        }
    }
}

/// Renders an avatar to a complete SVG document.
///
/// Document order is header, shape, label, trailer. Degenerate sizes are
/// not rejected; they produce a valid-but-degenerate document.
pub(crate) fn render(text: &str, options: &AvatarOptions, palette: &Palette) -> Document {
    let layout = Layout::new(options.size());

    Document::new()
        .set("width", layout.extent)
        .set("height", layout.extent)
        .add(shape_node(options.shape(), layout, palette))
        .add(label_node(text, layout, palette))
}

fn shape_node(shape: Shape, layout: Layout, palette: &Palette) -> Box<dyn svg::Node> {
    let style = format!(
        "fill:{};stroke:{};stroke-width:{};",
        palette.background(),
        palette.border(),
        layout.stroke_width
    );

    match shape {
        Shape::Circle => svg_element::Circle::new()
            .set("cx", layout.extent / 2)
            .set("cy", layout.extent / 2)
            .set("r", layout.size / 2)
            .set("style", style)
            .into(),
        Shape::Square => svg_element::Rectangle::new()
            .set("x", layout.stroke_width / 2)
            .set("y", layout.stroke_width / 2)
            .set("width", layout.size)
            .set("height", layout.size)
            .set("style", style)
            .into(),
    }
}

fn label_node(text: &str, layout: Layout, palette: &Palette) -> svg_element::Text {
    let label = truncate_label(text);
    let style = format!(
        "text-anchor:middle;font-size:{}px;font-family:sans-serif;fill:{};",
        layout.font_size,
        palette.font()
    );

    svg_element::Text::new(label.into_owned())
        .set("x", layout.extent / 2)
        .set("y", layout.extent / 2 + layout.font_size / 3)
        .set("style", style)
}

fn truncate_label(text: &str) -> Cow<'_, str> {
    if text.len() <= MAX_LABEL_BYTES {
        Cow::Borrowed(text)
    } else {
        String::from_utf8_lossy(&text.as_bytes()[..MAX_LABEL_BYTES])
    }
}

#[cfg(test)]
mod tests {
    use crate::color::Rgb;

    use super::*;

    fn fixed_palette() -> Palette {
        Palette::resolve(
            Some(Rgb::from_hex_lossy("#0066cc")),
            Some(Rgb::from_hex_lossy("#ffcc00")),
            Some(Rgb::from_hex_lossy("#330033")),
        )
    }

    fn render_to_string(text: &str, options: &AvatarOptions) -> String {
        render(text, options, &fixed_palette()).to_string()
    }

    #[test]
    fn test_layout_formulas() {
        let layout = Layout::new(128);
        assert_eq!(layout.font_size, 64);
        assert_eq!(layout.stroke_width, 12);
        assert_eq!(layout.extent, 140);

        // Integer division truncates.
        let layout = Layout::new(99);
        assert_eq!(layout.font_size, 49);
        assert_eq!(layout.stroke_width, 9);
        assert_eq!(layout.extent, 108);
    }

    #[test]
    fn test_circle_document() {
        let options = AvatarOptions::new(Shape::Circle, 128);
        let svg = render_to_string("EJ", &options);

        assert!(svg.contains("<svg"), "missing document header: {svg}");
        assert!(svg.contains("</svg>"), "missing document trailer: {svg}");
        assert!(svg.contains("<circle"));
        assert!(svg.contains(r#"cx="70""#));
        assert!(svg.contains(r#"cy="70""#));
        assert!(svg.contains(r#"r="64""#));
        assert!(svg.contains(r#"width="140""#));
        assert!(svg.contains(r#"height="140""#));
        assert!(svg.contains("fill:#ffcc00;stroke:#0066cc;stroke-width:12;"));
    }

    #[test]
    fn test_square_document() {
        let options = AvatarOptions::new(Shape::Square, 128);
        let svg = render_to_string("EJ", &options);

        assert!(svg.contains("<rect"));
        assert!(svg.contains(r#"x="6""#));
        assert!(svg.contains(r#"y="6""#));
        assert!(svg.contains(r#"width="128""#));
        assert!(svg.contains(r#"height="128""#));
        // Same canvas extent formula as the circle.
        assert!(svg.contains(r#"width="140""#));
    }

    #[test]
    fn test_label_placement_and_style() {
        let options = AvatarOptions::new(Shape::Circle, 128);
        let svg = render_to_string("EJ", &options);

        // x = 140/2, y = 140/2 + 64/3
        assert!(svg.contains(r#"x="70""#));
        assert!(svg.contains(r#"y="91""#));
        assert!(svg.contains(
            "text-anchor:middle;font-size:64px;font-family:sans-serif;fill:#330033;"
        ));
        assert!(svg.contains("EJ"));
    }

    #[test]
    fn test_shape_precedes_label() {
        let options = AvatarOptions::new(Shape::Circle, 128);
        let svg = render_to_string("EJ", &options);

        let circle = svg.find("<circle").expect("circle element present");
        let text = svg.find("<text").expect("text element present");
        assert!(circle < text, "shape must be emitted before the label");
    }

    #[test]
    fn test_label_truncated_to_two_bytes() {
        let options = AvatarOptions::new(Shape::Circle, 128);
        let svg = render_to_string("EJS", &options);

        assert!(svg.contains("EJ"));
        assert!(!svg.contains("EJS"));
    }

    #[test]
    fn test_truncate_label_short_input_unchanged() {
        assert_eq!(truncate_label(""), "");
        assert_eq!(truncate_label("A"), "A");
        assert_eq!(truncate_label("AB"), "AB");
        // A two-byte character fits exactly.
        assert_eq!(truncate_label("Ω"), "Ω");
    }

    #[test]
    fn test_truncate_label_garbles_multi_byte_boundary() {
        // "世" is three bytes; cutting after two leaves an incomplete
        // sequence that decodes to a replacement character.
        assert_eq!(truncate_label("世界"), "\u{fffd}");
        assert_eq!(truncate_label("Ωm"), "Ω");
    }

    #[test]
    fn test_extreme_size_saturates_instead_of_overflowing() {
        // Adding the stroke margin near u32::MAX must not wrap or panic.
        let layout = Layout::new(u32::MAX);
        assert_eq!(layout.stroke_width, u32::MAX / 10);
        assert_eq!(layout.extent, u32::MAX);

        let options = AvatarOptions::new(Shape::Circle, u32::MAX);
        let svg = render_to_string("EJ", &options);
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_degenerate_size_still_renders() {
        let options = AvatarOptions::new(Shape::Circle, 0);
        let svg = render_to_string("EJ", &options);

        assert!(svg.contains("<svg"));
        assert!(svg.contains(r#"width="0""#));

        // Size smaller than a stroke width would be.
        let options = AvatarOptions::new(Shape::Square, 5);
        let svg = render_to_string("EJ", &options);
        assert!(svg.contains(r#"width="5""#));
    }

    #[test]
    fn test_fully_specified_render_is_deterministic() {
        let options = AvatarOptions::new(Shape::Square, 96);

        let first = render_to_string("AB", &options);
        let second = render_to_string("AB", &options);

        assert_eq!(first, second);
    }
}
