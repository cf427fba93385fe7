//! # The render pipeline
//!
//! One linear pass per request: validate and load the font, estimate
//! the wrap capacity, wrap the text, size the canvas, draw, save.
//! Any failure aborts the whole render; the output file is only
//! written after all drawing succeeded.

use std::path::PathBuf;

use image::RgbImage;
use log::{debug, info};

use crate::{
    canvas::Canvas,
    error::RenderError,
    font::TypeFace,
    layout::{self, Layout},
};

/// All inputs of a single text-to-image conversion
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// The text to render, may contain newlines
    pub text: String,
    /// Path to the font file
    pub font_path: PathBuf,
    /// Glyph size in pixels
    pub font_size: u32,
    /// Destination path, the format is inferred from the extension
    pub output_path: PathBuf,
    /// Left/right inset in pixels
    pub margin: u32,
    /// Starting canvas width, fixed thereafter
    pub initial_width: u32,
    /// Starting canvas height, may grow
    pub initial_height: u32,
}

impl RenderRequest {
    /// Create a request with the default margin (10) and canvas (800x600)
    pub fn new(
        text: String,
        font_path: PathBuf,
        font_size: u32,
        output_path: PathBuf,
    ) -> Self {
        RenderRequest {
            text,
            font_path,
            font_size,
            output_path,
            margin: 10,
            initial_width: 800,
            initial_height: 600,
        }
    }
}

/// Render the request to an image in memory
pub fn render(req: &RenderRequest) -> Result<RgbImage, RenderError> {
    let face = TypeFace::load(&req.font_path, req.font_size)?;

    let capacity = layout::line_capacity(req.initial_width, req.margin, face.average_char_width());
    debug!("Wrap capacity: {} chars per line", capacity);

    let layout = Layout::new(layout::wrap_text(&req.text, capacity), req.font_size);
    debug!("Wrapped into {} line(s)", layout.lines.len());

    let mut canvas = Canvas::new(req.initial_width, req.initial_height);
    canvas.grow_to(layout.required_height());

    for (index, line) in layout.lines.iter().enumerate() {
        canvas.draw_line(&face, line, req.margin, layout.line_top(index));
    }
    Ok(canvas.into_image())
}

/// Render the request and write the image to its output path
pub fn render_to_file(req: &RenderRequest) -> Result<(), RenderError> {
    let image = render(req)?;
    image.save(&req.output_path)?;
    info!(
        "Wrote {}x{} image to '{}'",
        image.width(),
        image.height(),
        req.output_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::{render, RenderRequest};
    use crate::error::RenderError;

    #[test]
    fn request_defaults() {
        let req = RenderRequest::new(
            "hello".to_string(),
            PathBuf::from("font.ttf"),
            20,
            PathBuf::from("out.jpg"),
        );
        assert_eq!(10, req.margin);
        assert_eq!(800, req.initial_width);
        assert_eq!(600, req.initial_height);
    }

    #[test]
    fn missing_font_fails_before_any_canvas_work() {
        let req = RenderRequest::new(
            "hello".to_string(),
            PathBuf::from("/no/such/font.ttf"),
            20,
            PathBuf::from("out.jpg"),
        );
        match render(&req) {
            Err(RenderError::FontNotFound(path)) => {
                assert_eq!(path, Path::new("/no/such/font.ttf"));
            }
            Err(e) => panic!("wrong error: {}", e),
            Ok(_) => panic!("render succeeded without a font"),
        }
    }
}
