//! Error types for avatar generation.
//!
//! This module provides the main error type [`IniticonError`]. Rendering
//! itself has no failure path: malformed colors fall back to black and
//! degenerate geometry still produces a valid document, so the only
//! propagated failure is writing the document to the output sink.

use std::io;

use thiserror::Error;

/// The main error type for avatar generation.
#[derive(Debug, Error)]
pub enum IniticonError {
    /// Writing the SVG document to the output sink failed.
    ///
    /// Surfaced rather than swallowed, since a silent partial write would
    /// corrupt the output document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
