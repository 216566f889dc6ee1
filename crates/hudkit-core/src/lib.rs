#![forbid(unsafe_code)]

//! Core types and host service interfaces for hudkit.
//!
//! hudkit widgets never talk to a renderer, font rasterizer, input backend,
//! or audio device directly. The host render loop implements the narrow
//! traits in this crate ([`Canvas`], [`FontMetrics`], [`AudioMixer`]) and
//! drives widgets once per frame; widgets only ever see opaque handles
//! ([`SoundHandle`], [`TextureHandle`]) minted by the host's asset system.
//!
//! Everything here is single-threaded by design: the whole widget layer is
//! owned by the thread that runs the render/input loop.

pub mod audio;
pub mod canvas;
pub mod event;
pub mod font;
pub mod geometry;
pub mod handle;
pub mod wrap;

pub use audio::{AudioMixer, NullMixer};
pub use canvas::Canvas;
pub use event::PointerButton;
pub use font::FontMetrics;
pub use geometry::{Point, Rect, Size};
pub use handle::{HitId, SoundHandle, TextureHandle};
