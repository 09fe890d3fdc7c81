//! Page geometry and a cursor-based content writer.

use lopdf::Object;
use lopdf::content::Operation;

use super::fonts::{Font, encode_win_ansi};

/// Points per millimetre.
pub const MM: f32 = 72.0 / 25.4;

/// A4 portrait, in points.
pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;

pub const MARGIN_X: f32 = 18.0 * MM;
pub const TOP_Y: f32 = PAGE_HEIGHT - 18.0 * MM;
/// Baseline of the first footer line.
pub const FOOTER_Y: f32 = 28.0 * MM;
/// Body text never goes below this baseline.
pub const BODY_BOTTOM: f32 = FOOTER_Y + 24.0;

pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN_X;
pub const RIGHT_X: f32 = PAGE_WIDTH - MARGIN_X;

/// Writes drawing operations top to bottom, starting new pages as needed.
pub struct PageWriter {
    pages: Vec<Vec<Operation>>,
    current: Vec<Operation>,
    y: f32,
}

impl PageWriter {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: Vec::new(),
            y: TOP_Y,
        }
    }

    /// Current baseline.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Move the cursor down by `dy` points.
    pub fn advance(&mut self, dy: f32) {
        self.y -= dy;
    }

    /// Start a new page unless `height` more points fit above the footer.
    pub fn reserve(&mut self, height: f32) {
        if self.y - height < BODY_BOTTOM {
            self.new_page();
        }
    }

    pub fn new_page(&mut self) {
        let finished = std::mem::take(&mut self.current);
        self.pages.push(finished);
        self.y = TOP_Y;
    }

    /// Draw `text` with its baseline at (`x`, `y`).
    pub fn text_at(&mut self, font: Font, size: f32, x: f32, y: f32, text: &str) {
        self.current.extend([
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![Object::Name(font.resource_name().as_bytes().to_vec()), real(size)],
            ),
            Operation::new("Td", vec![real(x), real(y)]),
            Operation::new("Tj", vec![Object::string_literal(encode_win_ansi(text))]),
            Operation::new("ET", vec![]),
        ]);
    }

    /// Draw `text` on the current baseline.
    pub fn text(&mut self, font: Font, size: f32, x: f32, text: &str) {
        self.text_at(font, size, x, self.y, text);
    }

    /// Draw `text` so that it ends at `right` on the current baseline.
    pub fn text_right(&mut self, font: Font, size: f32, right: f32, text: &str) {
        let x = right - font.text_width(text, size);
        self.text(font, size, x, text);
    }

    /// Horizontal rule across the content width at `y`.
    pub fn rule_at(&mut self, y: f32, width: f32) {
        self.current.extend([
            Operation::new("w", vec![real(width)]),
            Operation::new("m", vec![real(MARGIN_X), real(y)]),
            Operation::new("l", vec![real(RIGHT_X), real(y)]),
            Operation::new("S", vec![]),
        ]);
    }

    /// Finish and return the operations of every page.
    pub fn finish(mut self) -> Vec<Vec<Operation>> {
        self.pages.push(self.current);
        self.pages
    }
}

impl Default for PageWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Break `text` into lines no wider than `max_width`.
///
/// Splits on whitespace; a single word wider than the limit is cut by
/// characters. Always returns at least one line.
pub fn wrap_text(text: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if font.text_width(&candidate, size) <= max_width {
            line = candidate;
            continue;
        }
        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        for c in word.chars() {
            line.push(c);
            if font.text_width(&line, size) > max_width && line.chars().count() > 1 {
                line.pop();
                lines.push(std::mem::take(&mut line));
                line.push(c);
            }
        }
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

fn real(value: f32) -> Object {
    Object::Real(value.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_line() {
        assert_eq!(wrap_text("John Doe", Font::Regular, 10.0, 200.0), vec!["John Doe"]);
        assert_eq!(wrap_text("", Font::Regular, 10.0, 200.0), vec![""]);
    }

    #[test]
    fn long_text_wraps_on_words() {
        let text = "Sunrise trek to Mount Batur with breakfast and hot springs";
        let lines = wrap_text(text, Font::Regular, 10.0, 120.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.join(" "), text);
        for line in &lines {
            assert!(Font::Regular.text_width(line, 10.0) <= 120.0, "{line}");
        }
    }

    #[test]
    fn overlong_word_is_cut() {
        let word = "W".repeat(40);
        let lines = wrap_text(&word, Font::Regular, 10.0, 50.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
    }

    #[test]
    fn reserve_starts_new_page() {
        let mut writer = PageWriter::new();
        writer.text(Font::Regular, 10.0, MARGIN_X, "first");
        writer.advance(TOP_Y - BODY_BOTTOM - 5.0);
        writer.reserve(20.0);
        assert_eq!(writer.y(), TOP_Y);
        writer.text(Font::Regular, 10.0, MARGIN_X, "second");
        let pages = writer.finish();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].len(), 5);
    }
}
