//! Errors of the render pipeline

use std::{io, path::PathBuf};

use thiserror::Error;

/// Error when rendering a request
#[derive(Debug, Error)]
pub enum RenderError {
    /// The font file does not exist
    ///
    /// This is the only failure the interactive driver distinguishes,
    /// everything else is reported generically.
    #[error("Font file '{}' not found", .0.display())]
    FontNotFound(PathBuf),
    /// The font data could not be parsed
    #[error("Failed to load font: {0}")]
    FontParse(&'static str),
    /// The IO failed
    #[error("Failed IO")]
    Io(#[from] io::Error),
    /// The image could not be encoded or written
    #[error("Failed to write image: {0}")]
    Image(#[from] image::ImageError),
}
