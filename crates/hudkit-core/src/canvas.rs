//! Drawing surface interface.

use crate::font::FontMetrics;
use crate::geometry::{Rect, Size};
use crate::handle::{HitId, TextureHandle};

/// The host's drawing surface for one widget, valid for one frame.
///
/// The host render loop hands a `Canvas` to each widget's `draw` call. All
/// coordinates are relative to the widget's assigned region; `size` is that
/// region's current dimensions and may change between frames (window
/// resize, layout change). Widgets must tolerate fresh geometry on every
/// call.
///
/// # Hit regions
///
/// A widget willing to receive pointer input registers its [`HitId`] during
/// `draw`, every frame. Registrations live for exactly one frame: the
/// external input dispatch discards stale registrations at frame
/// boundaries, so re-registering each draw cannot leak and skipping a
/// frame's registration makes the widget inert for that frame.
pub trait Canvas {
    /// Current size of the widget's assigned region.
    fn size(&self) -> Size;

    /// Metrics of the font currently selected for this widget.
    fn font(&self) -> &dyn FontMetrics;

    /// Draw `text` into the widget's region.
    fn draw_text(&mut self, text: &str);

    /// Draw `text` into an explicit sub-region.
    ///
    /// The region may extend outside the widget's area; the host clips.
    fn draw_text_in(&mut self, text: &str, region: Rect);

    /// Draw a texture covering the widget's region.
    fn draw_texture(&mut self, image: TextureHandle);

    /// Register the widget's hit region for the current frame.
    fn register_hit_region(&mut self, id: HitId);
}
