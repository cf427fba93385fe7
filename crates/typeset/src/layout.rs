//! # Line wrapping and vertical layout
//!
//! Wrapping happens in two stages: the input is split on literal
//! newlines first, then every segment is greedily word-wrapped to a
//! character budget. Blank source lines survive as empty entries.

/// Vertical offset of the first line from the top edge (pixels)
pub const TOP_OFFSET: u32 = 10;

/// Vertical gap between consecutive lines (pixels)
pub const LINE_SPACING: u32 = 5;

/// Maximum characters per line for the given canvas width
///
/// Divides the usable width (canvas width minus both margins) by the
/// average glyph width. The result is clamped to at least one
/// character, so a canvas narrower than a single glyph still makes
/// progress instead of looping on an empty line budget.
pub fn line_capacity(canvas_width: u32, margin: u32, avg_char_width: f32) -> usize {
    let usable = canvas_width.saturating_sub(margin * 2) as f32;
    if avg_char_width <= 0.0 {
        return 1;
    }
    let capacity = (usable / avg_char_width) as usize;
    capacity.max(1)
}

/// Wrap `text` to lines of at most `max_chars` characters
///
/// Splits on `'\n'` first. An empty segment yields a single empty line,
/// a whitespace-only segment yields nothing, any other segment is
/// word-wrapped greedily. Words longer than the budget are broken into
/// `max_chars`-sized chunks.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for segment in text.split('\n') {
        if segment.is_empty() {
            lines.push(String::new());
        } else {
            wrap_segment(segment, max_chars, &mut lines);
        }
    }
    lines
}

fn wrap_segment(segment: &str, max_chars: usize, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_len = 0;
    for word in segment.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
            continue;
        }
        if current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if word_len <= max_chars {
            current.push_str(word);
            current_len = word_len;
        } else {
            break_long_word(word, max_chars, lines, &mut current, &mut current_len);
        }
    }
    if current_len > 0 {
        lines.push(current);
    }
}

/// Break a word that exceeds the budget into full-width chunks
///
/// The final chunk stays in `current` so a following short word can
/// share its line.
fn break_long_word(
    word: &str,
    max_chars: usize,
    lines: &mut Vec<String>,
    current: &mut String,
    current_len: &mut usize,
) {
    let mut chunk_len = 0;
    for c in word.chars() {
        if chunk_len == max_chars {
            lines.push(std::mem::take(current));
            chunk_len = 0;
        }
        current.push(c);
        chunk_len += 1;
    }
    *current_len = chunk_len;
}

/// The wrapped lines of one request together with the line geometry
pub struct Layout {
    /// Wrapped lines in top-to-bottom render order
    pub lines: Vec<String>,
    font_size: u32,
}

impl Layout {
    /// Create a layout for lines rendered at `font_size` pixels
    pub fn new(lines: Vec<String>, font_size: u32) -> Self {
        Layout { lines, font_size }
    }

    /// Vertical distance between the tops of consecutive lines
    pub fn line_step(&self) -> u32 {
        self.font_size + LINE_SPACING
    }

    /// The y coordinate of the top edge of the line at `index`
    pub fn line_top(&self, index: usize) -> u32 {
        TOP_OFFSET + index as u32 * self.line_step()
    }

    /// Total canvas height needed to fit every line
    pub fn required_height(&self) -> u32 {
        TOP_OFFSET + self.lines.len() as u32 * self.line_step()
    }
}

#[cfg(test)]
mod tests {
    use super::{line_capacity, wrap_text, Layout, LINE_SPACING, TOP_OFFSET};

    #[test]
    fn blank_lines_survive_wrapping() {
        assert_eq!(vec!["a", "", "b"], wrap_text("a\n\nb", 80));
    }

    #[test]
    fn whitespace_only_segments_are_dropped() {
        assert_eq!(vec!["a", "b"], wrap_text("a\n   \nb", 80));
    }

    #[test]
    fn greedy_wrap_fills_lines() {
        assert_eq!(
            vec!["the quick", "brown fox"],
            wrap_text("the quick brown fox", 10)
        );
        // internal whitespace runs collapse to a single space
        assert_eq!(vec!["a b"], wrap_text("a   b", 10));
    }

    #[test]
    fn long_words_break_into_chunks() {
        assert_eq!(vec!["abcd", "efgh", "ij"], wrap_text("abcdefghij", 4));
        // the trailing chunk still accepts a short word
        assert_eq!(vec!["abcd", "ef g"], wrap_text("abcdef g", 4));
    }

    #[test]
    fn capacity_is_monotone_in_width() {
        let mut last = 0;
        for width in (50..2000).step_by(25) {
            let capacity = line_capacity(width, 10, 9.25);
            assert!(capacity >= last, "capacity shrank at width {}", width);
            last = capacity;
        }
    }

    #[test]
    fn capacity_is_clamped_to_one() {
        // margins wider than the canvas
        assert_eq!(1, line_capacity(15, 10, 9.25));
        // glyphs wider than the usable area
        assert_eq!(1, line_capacity(100, 10, 200.0));
        // degenerate average width
        assert_eq!(1, line_capacity(800, 10, 0.0));
    }

    #[test]
    fn line_geometry() {
        let lines = vec![String::from("a"), String::new(), String::from("b")];
        let layout = Layout::new(lines, 20);
        assert_eq!(TOP_OFFSET, layout.line_top(0));
        assert_eq!(TOP_OFFSET + (20 + LINE_SPACING), layout.line_top(1));
        assert_eq!(TOP_OFFSET + 2 * (20 + LINE_SPACING), layout.line_top(2));
        assert_eq!(TOP_OFFSET + 3 * (20 + LINE_SPACING), layout.required_height());
    }

    #[test]
    fn empty_input_is_one_blank_line() {
        assert_eq!(vec![""], wrap_text("", 80));
    }
}
