//! # Font loading and measurement

use std::path::Path;

use crate::error::RenderError;

/// Reference string used to estimate the average glyph width
///
/// The 52 upper- and lowercase latin letters.
pub const CAPACITY_PROBE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// A font loaded at a fixed rendering size
pub struct TypeFace {
    font: fontdue::Font,
    size: f32,
}

impl TypeFace {
    /// Load a font file at the given pixel size
    ///
    /// The path is checked for existence before any data is read, so a
    /// missing font is reported as [RenderError::FontNotFound] with the
    /// offending path instead of a generic IO error.
    pub fn load(path: &Path, size: u32) -> Result<Self, RenderError> {
        if !path.exists() {
            return Err(RenderError::FontNotFound(path.to_owned()));
        }
        let data = std::fs::read(path)?;
        let font = fontdue::Font::from_bytes(data, fontdue::FontSettings::default())
            .map_err(RenderError::FontParse)?;
        Ok(TypeFace {
            font,
            size: size as f32,
        })
    }

    /// The rendering size in pixels
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Pixel width of a string as the sum of horizontal glyph advances
    pub fn line_width(&self, text: &str) -> f32 {
        text.chars()
            .map(|c| self.font.metrics(c, self.size).advance_width)
            .sum()
    }

    /// Average glyph width estimated from [CAPACITY_PROBE]
    ///
    /// This assumes uniform glyph widths, which is false for
    /// proportional fonts. The wrap output depends on this estimate,
    /// so it must not be replaced by exact per-line measurement.
    pub fn average_char_width(&self) -> f32 {
        self.line_width(CAPACITY_PROBE) / CAPACITY_PROBE.len() as f32
    }

    /// Distance from the top of a line to the baseline
    pub fn ascent(&self) -> f32 {
        self.font
            .horizontal_line_metrics(self.size)
            .map(|m| m.ascent)
            .unwrap_or(self.size)
    }

    /// Coverage bitmap and placement metrics for a single glyph
    pub(crate) fn rasterize(&self, c: char) -> (fontdue::Metrics, Vec<u8>) {
        self.font.rasterize(c, self.size)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{TypeFace, CAPACITY_PROBE};
    use crate::error::RenderError;

    #[test]
    fn probe_has_52_letters() {
        assert_eq!(52, CAPACITY_PROBE.len());
        assert!(CAPACITY_PROBE.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn missing_font_names_the_path() {
        let path = Path::new("/no/such/font.ttf");
        match TypeFace::load(path, 20) {
            Err(RenderError::FontNotFound(p)) => assert_eq!(p, path),
            Err(e) => panic!("wrong error: {}", e),
            Ok(_) => panic!("load succeeded for missing file"),
        }
    }
}
