//! CLI logic for the initicon avatar tool.
//!
//! This module contains the core CLI logic for the initicon avatar tool.

mod args;
mod config;
mod error;

pub use args::Args;
pub use error::CliError;

use std::{fs, str::FromStr};

use log::info;

use initicon::{
    Avatar,
    color::Rgb,
    config::Shape,
};

/// Run the initicon CLI application
///
/// This function builds avatar options from the configuration file and
/// command-line overrides, renders the avatar, and writes the resulting
/// SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Invalid shape arguments
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        text = args.text,
        output_path = args.output;
        "Generating avatar"
    );

    // Load configuration, then apply command-line overrides
    let mut options = config::load_config(args.config.as_ref())?;

    if let Some(shape) = &args.shape {
        let shape = Shape::from_str(shape).map_err(CliError::InvalidArgument)?;
        options = options.with_shape(shape);
    }
    if let Some(size) = args.size {
        options = options.with_size(size);
    }
    if let Some(color) = &args.border_color {
        options = options.with_border_color(Rgb::from_hex_lossy(color));
    }
    if let Some(color) = &args.background_color {
        options = options.with_background_color(Rgb::from_hex_lossy(color));
    }
    if let Some(color) = &args.font_color {
        options = options.with_font_color(Rgb::from_hex_lossy(color));
    }

    // Render the avatar
    let avatar = Avatar::new(&args.text, options);
    let svg = avatar.to_svg_string()?;

    // Write output file
    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
