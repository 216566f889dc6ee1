#![forbid(unsafe_code)]

//! hudkit public facade.
//!
//! Re-exports the widget core (`hudkit-widgets`), the binding cell
//! (`hudkit-reactive`), and the host service interfaces (`hudkit-core`)
//! under one roof, plus a [`prelude`] for hosts that want everything at
//! once.
//!
//! ```
//! use std::rc::Rc;
//! use hudkit::prelude::*;
//!
//! let mut quit = Button::new(Rc::new(NullMixer)).with_text("Quit");
//! quit.subscribe(|b| println!("{} clicked", b.text()));
//! ```

pub use hudkit_core::{
    AudioMixer, Canvas, FontMetrics, HitId, NullMixer, Point, PointerButton, Rect, Size,
    SoundHandle, TextureHandle,
};
pub use hudkit_reactive::Binding;
pub use hudkit_widgets::{Button, InteractionTracker, ListenerId, Mode, ScrollingText, Widget};

/// Everything a host render loop typically needs.
pub mod prelude {
    pub use hudkit_core::{
        AudioMixer, Canvas, FontMetrics, HitId, NullMixer, Point, PointerButton, Rect, Size,
        SoundHandle, TextureHandle,
    };
    pub use hudkit_reactive::Binding;
    pub use hudkit_widgets::{Button, InteractionTracker, ListenerId, Mode, ScrollingText, Widget};
}
