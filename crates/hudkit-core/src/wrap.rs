//! Line splitting and width-constrained word wrapping.
//!
//! Widgets wrap their bound text against a width hint when asked for a
//! preferred size, and split it on explicit breaks when laying out scroll
//! passes. Both operations live here so every widget agrees on what a
//! "line" is.
//!
//! # Invariants
//!
//! 1. [`split_lines`] preserves empty lines, including a trailing empty
//!    line after a final break: `"a\n"` splits into `["a", ""]`.
//! 2. [`wrap_to_width`] never reorders or drops non-whitespace content.
//! 3. With a positive `max_width`, every produced line measures at most
//!    `max_width` unless a single grapheme already exceeds it.

use unicode_segmentation::UnicodeSegmentation;

use crate::font::FontMetrics;

/// Split `text` on line breaks (`\n`, tolerating a preceding `\r`),
/// preserving empty lines.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// Wrap `text` into lines no wider than `max_width` under `font`.
///
/// Explicit line breaks are always honored. Within a paragraph the wrap is
/// greedy on word boundaries, measuring whole candidate lines rather than
/// assuming widths are additive; a single word wider than `max_width` is
/// broken between graphemes. A non-positive `max_width` disables wrapping
/// and returns the split lines unchanged.
#[must_use]
pub fn wrap_to_width<F: FontMetrics + ?Sized>(font: &F, text: &str, max_width: i32) -> Vec<String> {
    let mut out = Vec::new();
    for paragraph in split_lines(text) {
        if max_width <= 0 || font.line_width(&paragraph) <= max_width {
            out.push(paragraph);
        } else {
            wrap_paragraph(font, &paragraph, max_width, &mut out);
        }
    }
    out
}

fn wrap_paragraph<F: FontMetrics + ?Sized>(
    font: &F,
    paragraph: &str,
    max_width: i32,
    out: &mut Vec<String>,
) {
    let mut line = String::new();
    for seg in paragraph.split_word_bounds() {
        if fits(font, &line, seg, max_width) {
            line.push_str(seg);
            continue;
        }
        if seg.trim().is_empty() {
            // Break at the separator; it is carried onto neither line.
            flush(&mut line, out);
            continue;
        }
        flush(&mut line, out);
        if font.line_width(seg) <= max_width {
            line.push_str(seg);
        } else {
            // A single word wider than the limit breaks between graphemes.
            for grapheme in seg.graphemes(true) {
                if !line.is_empty() && !fits(font, &line, grapheme, max_width) {
                    flush(&mut line, out);
                }
                line.push_str(grapheme);
            }
        }
    }
    flush(&mut line, out);
}

fn fits<F: FontMetrics + ?Sized>(font: &F, line: &str, seg: &str, max_width: i32) -> bool {
    let mut candidate = String::with_capacity(line.len() + seg.len());
    candidate.push_str(line);
    candidate.push_str(seg);
    font.line_width(&candidate) <= max_width
}

fn flush(line: &mut String, out: &mut Vec<String>) {
    let trimmed = line.trim_end();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
    line.clear();
}
