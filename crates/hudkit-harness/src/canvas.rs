//! A canvas that records draw calls instead of rendering.

use hudkit_core::canvas::Canvas;
use hudkit_core::font::FontMetrics;
use hudkit_core::geometry::{Rect, Size};
use hudkit_core::handle::{HitId, TextureHandle};

use crate::font::MonoFont;

/// One recorded canvas operation, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    /// `draw_text` (no region) or `draw_text_in` (with region).
    Text {
        text: String,
        region: Option<Rect>,
    },
    /// `draw_texture`.
    Texture { image: TextureHandle },
    /// `register_hit_region`.
    HitRegion { id: HitId },
}

/// A [`Canvas`] double that records every call for later assertions.
///
/// The size is mutable between frames to exercise widgets against changing
/// geometry; the recorded call list is cleared explicitly so a test can
/// inspect one frame at a time.
#[derive(Debug)]
pub struct TestCanvas {
    size: Size,
    font: MonoFont,
    calls: Vec<DrawCall>,
}

impl TestCanvas {
    /// Create a canvas of the given size with the default [`MonoFont`].
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: Size::new(width, height),
            font: MonoFont::default(),
            calls: Vec::new(),
        }
    }

    /// Use different font metrics.
    #[must_use]
    pub fn with_font(mut self, font: MonoFont) -> Self {
        self.font = font;
        self
    }

    /// Change the canvas size (simulates a window/layout resize between
    /// frames).
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.size = Size::new(width, height);
    }

    /// All recorded calls, in order.
    #[must_use]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Forget recorded calls (typically between frames).
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// The text calls that carried an explicit region, in order.
    #[must_use]
    pub fn positioned_texts(&self) -> Vec<(String, Rect)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text {
                    text,
                    region: Some(region),
                } => Some((text.clone(), *region)),
                _ => None,
            })
            .collect()
    }

    /// The hit region ids registered this frame, in order.
    #[must_use]
    pub fn hit_regions(&self) -> Vec<HitId> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::HitRegion { id } => Some(*id),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for TestCanvas {
    fn size(&self) -> Size {
        self.size
    }

    fn font(&self) -> &dyn FontMetrics {
        &self.font
    }

    fn draw_text(&mut self, text: &str) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            region: None,
        });
    }

    fn draw_text_in(&mut self, text: &str, region: Rect) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            region: Some(region),
        });
    }

    fn draw_texture(&mut self, image: TextureHandle) {
        self.calls.push(DrawCall::Texture { image });
    }

    fn register_hit_region(&mut self, id: HitId) {
        self.calls.push(DrawCall::HitRegion { id });
    }
}
