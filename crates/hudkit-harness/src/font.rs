//! Fixed-advance font metrics.

use hudkit_core::font::FontMetrics;
use unicode_width::UnicodeWidthStr;

/// Font metrics with a fixed advance per display-width column and a fixed
/// line height.
///
/// With the default advance of 1, a line's measured width equals its
/// display width in columns, which keeps test arithmetic readable:
/// `"Hello"` measures `(5, 10)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonoFont {
    advance: i32,
    line_height: i32,
}

impl MonoFont {
    /// Create metrics with the given advance and line height.
    #[must_use]
    pub const fn new(advance: i32, line_height: i32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl Default for MonoFont {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

impl FontMetrics for MonoFont {
    fn line_width(&self, line: &str) -> i32 {
        self.advance * UnicodeWidthStr::width(line) as i32
    }

    fn line_height(&self, _line: &str) -> i32 {
        self.line_height
    }
}
