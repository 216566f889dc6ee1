#![forbid(unsafe_code)]

//! Vertically auto-scrolling text panel.
//!
//! A [`ScrollingText`] splits its bound text into lines and marches them
//! upward: every line starts below the bottom edge of the canvas and moves
//! up by `step` pixels per active frame. A *pass* ends once every line has
//! scrolled above the visible band; with auto-reset enabled the widget then
//! clears its offsets and the next frame starts a fresh pass at the bottom.
//!
//! Scroll state survives geometry changes: offsets are plain widget-local Y
//! coordinates, so a canvas resize mid-pass shifts nothing, and the next
//! pass simply initializes against the new height.
//!
//! # Invariants
//!
//! 1. The offset list is either empty (pass not started / just reset) or
//!    holds exactly one entry per line of the bound text at the moment the
//!    pass began, in order. Entries are keyed by position, so duplicate
//!    lines scroll independently.
//! 2. While scrolling, every entry decreases by exactly `step` per frame;
//!    stopped frames change nothing.
//! 3. `reset_scrolling` only clears offsets; the very next active draw
//!    reproduces the initial placement of a first draw exactly.

use hudkit_core::canvas::Canvas;
use hudkit_core::geometry::{Rect, Size};
use hudkit_core::wrap;
use hudkit_reactive::Binding;

use crate::Widget;

/// A widget that scrolls long text vertically through its region.
pub struct ScrollingText {
    text: Binding<String>,
    /// Upward movement per active frame, in pixels.
    step: i32,
    /// Shrinks the visible band from the top of the canvas.
    offset_top: i32,
    /// Shrinks the visible band from the bottom of the canvas.
    offset_bottom: i32,
    /// Vertical gap between consecutive lines.
    line_spacing: i32,
    /// One `(line, y)` entry per line of the current pass, in line order.
    lines: Vec<(String, i32)>,
    scrolling: bool,
    auto_reset: bool,
}

impl ScrollingText {
    /// Create a panel with no text, scrolling by 1 pixel per frame.
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: Binding::new(String::new()),
            step: 1,
            offset_top: 0,
            offset_bottom: 0,
            line_spacing: 3,
            lines: Vec::new(),
            scrolling: true,
            auto_reset: false,
        }
    }

    /// Set the scrolled text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text.set(text.into());
        self
    }

    /// Enable or disable automatic restart after a finished pass.
    #[must_use]
    pub fn with_auto_reset(mut self, reset: bool) -> Self {
        self.auto_reset = reset;
        self
    }

    // --- Text binding ---

    /// Replace the text binding wholesale.
    ///
    /// The in-flight pass keeps the lines it started with; the new text is
    /// picked up when the next pass initializes.
    pub fn bind_text(&mut self, binding: Binding<String>) {
        self.text = binding;
    }

    /// The current bound text.
    #[must_use]
    pub fn text(&self) -> String {
        self.text.get()
    }

    /// Set the text through the current binding.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text.set(text.into());
    }

    // --- Scroll control ---

    /// Resume advancing offsets each frame.
    pub fn start_scrolling(&mut self) {
        self.scrolling = true;
    }

    /// Freeze the current pass; `draw` keeps rendering at the frozen
    /// offsets.
    pub fn stop_scrolling(&mut self) {
        self.scrolling = false;
    }

    /// Whether `draw` advances offsets this frame.
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    /// Drop all line offsets; the next active draw starts a fresh pass at
    /// the bottom of the canvas.
    pub fn reset_scrolling(&mut self) {
        self.lines.clear();
    }

    /// Upward movement per active frame, in pixels.
    #[must_use]
    pub fn scroll_step(&self) -> i32 {
        self.step
    }

    /// Set the per-frame scroll step.
    ///
    /// # Panics
    ///
    /// Panics if `step` is negative.
    pub fn set_scroll_step(&mut self, step: i32) {
        assert!(step >= 0, "scroll step must be non-negative, got {step}");
        self.step = step;
    }

    /// Enable or disable automatic restart after a finished pass.
    ///
    /// Note that empty text still forms a single (empty) line, so an
    /// auto-resetting panel with no text restarts a trivial pass every few
    /// frames; hosts that consider that undesirable should not enable
    /// auto-reset until there is text to show.
    pub fn set_auto_reset(&mut self, reset: bool) {
        self.auto_reset = reset;
    }

    /// Shrink the visible band from the top of the canvas.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is negative.
    pub fn set_offset_top(&mut self, offset: i32) {
        assert!(offset >= 0, "top offset must be non-negative, got {offset}");
        self.offset_top = offset;
    }

    /// Shrink the visible band from the bottom of the canvas.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is negative.
    pub fn set_offset_bottom(&mut self, offset: i32) {
        assert!(
            offset >= 0,
            "bottom offset must be non-negative, got {offset}"
        );
        self.offset_bottom = offset;
    }

    /// Set the vertical gap between consecutive lines.
    ///
    /// # Panics
    ///
    /// Panics if `spacing` is negative.
    pub fn set_line_spacing(&mut self, spacing: i32) {
        assert!(
            spacing >= 0,
            "line spacing must be non-negative, got {spacing}"
        );
        self.line_spacing = spacing;
    }

    /// Advance the in-flight pass by one step, or lay out a fresh pass
    /// below the bottom edge if none is in flight.
    fn advance(&mut self, canvas: &dyn Canvas) {
        if self.lines.is_empty() {
            let text = self.text.get();
            let font = canvas.font();
            let mut y = canvas.size().height + self.line_spacing;
            for line in wrap::split_lines(&text) {
                let height = font.line_height(&line);
                self.lines.push((line, y));
                y += height + self.line_spacing;
            }
        } else {
            for (_, y) in &mut self.lines {
                *y -= self.step;
            }
        }
    }
}

impl Default for ScrollingText {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ScrollingText {
    fn draw(&mut self, canvas: &mut dyn Canvas) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("widget_draw", widget = "ScrollingText").entered();

        if self.scrolling {
            self.advance(&*canvas);
        }

        let size = canvas.size();
        let center_x = size.width / 2;
        let mut finished = true;
        let mut visible: Vec<(usize, Rect)> = Vec::new();
        {
            let font = canvas.font();
            for (index, (line, y)) in self.lines.iter().enumerate() {
                let height = font.line_height(line);
                if *y >= -self.offset_top && *y <= size.height - self.offset_bottom + height {
                    let width = font.line_width(line);
                    visible.push((index, Rect::new(center_x - width / 2, *y, width, height)));
                }
                if *y >= -self.offset_top {
                    finished = false;
                }
            }
        }
        for (index, region) in visible {
            canvas.draw_text_in(&self.lines[index].0, region);
        }

        if finished && self.auto_reset {
            #[cfg(feature = "tracing")]
            tracing::trace!("scroll pass finished, auto-resetting");
            self.reset_scrolling();
        }
    }

    fn preferred_size(&self, canvas: &dyn Canvas, area_hint: Size) -> Size {
        let font = canvas.font();
        let lines = font.wrap_lines(&self.text.get(), area_hint.width);
        font.measure(&lines)
    }
}

impl std::fmt::Debug for ScrollingText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollingText")
            .field("text", &self.text.get())
            .field("step", &self.step)
            .field("lines_in_flight", &self.lines.len())
            .field("scrolling", &self.scrolling)
            .field("auto_reset", &self.auto_reset)
            .finish()
    }
}
