//! Command-line argument definitions for the initicon CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the avatar label, output path, shape
//! and color overrides, configuration file selection, and logging
//! verbosity.

use clap::Parser;

/// Command-line arguments for the initicon avatar tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Avatar label text; only the first two characters are rendered
    #[arg(help = "Avatar label text")]
    pub text: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "avatar.svg")]
    pub output: String,

    /// Avatar shape (circle, square)
    #[arg(short, long)]
    pub shape: Option<String>,

    /// Avatar size in pixels
    #[arg(long)]
    pub size: Option<u32>,

    /// Border color as a #rrggbb hex string
    #[arg(long)]
    pub border_color: Option<String>,

    /// Background color as a #rrggbb hex string
    #[arg(long)]
    pub background_color: Option<String>,

    /// Font color as a #rrggbb hex string
    #[arg(long)]
    pub font_color: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
