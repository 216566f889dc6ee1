#![forbid(unsafe_code)]

//! Deterministic test doubles for hudkit widgets.
//!
//! Widgets only ever see the host through the `hudkit-core` traits, so a
//! full frame can be exercised in a unit test with three small fixtures:
//!
//! - [`TestCanvas`] implements `Canvas` by recording every draw call in
//!   order (and can be resized between frames);
//! - [`MonoFont`] implements `FontMetrics` with a fixed advance per
//!   display-width column, making measurements trivially predictable;
//! - [`RecordingMixer`] implements `AudioMixer` by capturing `play` calls.
//!
//! The widget integration tests live in this crate's `tests/` directory.

pub mod audio;
pub mod canvas;
pub mod font;

pub use audio::RecordingMixer;
pub use canvas::{DrawCall, TestCanvas};
pub use font::MonoFont;
