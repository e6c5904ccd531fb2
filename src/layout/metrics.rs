//! Text block measurement.
//!
//! The layout engine never lays out glyphs itself. It asks a
//! [`TextMeasurer`] for the tight bounding size of a text block wrapped at a
//! maximum width. [`MonospaceMeasurer`] is a deterministic reference
//! implementation based on terminal column widths.

use super::geometry::Size;
use crate::model::{AttributedText, Font};
use unicode_width::UnicodeWidthChar;

/// Measures attributed text against a maximum width.
///
/// # Contract
/// - MUST be deterministic (same inputs → same output)
/// - MUST return `Size::ZERO` for empty text
/// - Returned width SHOULD NOT exceed `max_width` unless a single glyph is
///   wider than it
pub trait TextMeasurer {
    /// Bounding size of `text` wrapped at `max_width`.
    fn measure(&self, text: &AttributedText, max_width: f64) -> Size;
}

/// Measure `text` and round the result outward to whole points.
pub fn label_size(measurer: &dyn TextMeasurer, text: &AttributedText, max_width: f64) -> Size {
    measurer.measure(text, max_width).integral()
}

/// Fixed-advance measurer.
///
/// Each glyph advances `font.size * advance_ratio` per terminal column it
/// occupies; each line is `font.size * line_height_ratio` tall, using the
/// largest font on the line. Lines wrap greedily at word boundaries and
/// break inside a word only when the word alone is wider than the line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    /// Glyph advance as a fraction of the font size.
    pub advance_ratio: f64,
    /// Line height as a multiple of the font size.
    pub line_height_ratio: f64,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.5,
            line_height_ratio: 1.2,
        }
    }
}

/// Width and font bookkeeping for the line being filled.
#[derive(Debug, Default)]
struct LineAcc {
    width: f64,
    trailing_space: f64,
    max_font_size: f64,
    has_content: bool,
}

impl MonospaceMeasurer {
    fn advance(&self, ch: char, font: Font) -> f64 {
        ch.width().unwrap_or(0) as f64 * font.size * self.advance_ratio
    }

    fn commit(&self, acc: &mut LineAcc, fallback: Font, lines: &mut Vec<Size>) {
        let font_size = if acc.max_font_size > 0.0 {
            acc.max_font_size
        } else {
            fallback.size
        };
        lines.push(Size::new(
            (acc.width - acc.trailing_space).max(0.0),
            font_size * self.line_height_ratio,
        ));
        *acc = LineAcc::default();
    }

    fn push_glyph(&self, acc: &mut LineAcc, ch: char, font: Font) {
        acc.width += self.advance(ch, font);
        acc.max_font_size = acc.max_font_size.max(font.size);
        acc.has_content = true;
        if ch.is_whitespace() {
            acc.trailing_space += self.advance(ch, font);
        } else {
            acc.trailing_space = 0.0;
        }
    }

    fn wrap_hard_line(
        &self,
        glyphs: &[(char, Font)],
        max_width: f64,
        fallback: Font,
        lines: &mut Vec<Size>,
    ) {
        let mut acc = LineAcc::default();
        let mut rest = glyphs;

        while !rest.is_empty() {
            let word_len = rest
                .iter()
                .position(|(ch, _)| ch.is_whitespace())
                .unwrap_or(rest.len());
            let (word, after_word) = rest.split_at(word_len);
            let space_len = after_word
                .iter()
                .position(|(ch, _)| !ch.is_whitespace())
                .unwrap_or(after_word.len());
            let (spaces, next) = after_word.split_at(space_len);

            let word_width: f64 = word.iter().map(|&(ch, font)| self.advance(ch, font)).sum();
            if acc.has_content && acc.width + word_width > max_width {
                self.commit(&mut acc, fallback, lines);
            }

            if word_width > max_width {
                for &(ch, font) in word {
                    if acc.has_content && acc.width + self.advance(ch, font) > max_width {
                        self.commit(&mut acc, fallback, lines);
                    }
                    self.push_glyph(&mut acc, ch, font);
                }
            } else {
                for &(ch, font) in word {
                    self.push_glyph(&mut acc, ch, font);
                }
            }

            for &(ch, font) in spaces {
                self.push_glyph(&mut acc, ch, font);
            }
            rest = next;
        }

        self.commit(&mut acc, fallback, lines);
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &AttributedText, max_width: f64) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }

        let fallback = text.leading_font().unwrap_or_default();
        let glyphs: Vec<(char, Font)> = text
            .runs
            .iter()
            .flat_map(|run| {
                let font = run.font.unwrap_or(fallback);
                run.text.chars().map(move |ch| (ch, font))
            })
            .collect();

        let mut lines = Vec::new();
        for hard_line in glyphs.split(|(ch, _)| *ch == '\n') {
            self.wrap_hard_line(hard_line, max_width, fallback, &mut lines);
        }

        lines.iter().fold(Size::ZERO, |total, line| {
            Size::new(total.width.max(line.width), total.height + line.height)
        })
    }
}
