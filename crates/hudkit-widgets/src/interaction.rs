#![forbid(unsafe_code)]

//! Pointer interaction state machine shared by clickable widgets.
//!
//! [`InteractionTracker`] holds the two flags that describe one widget's
//! relationship to the pointer — `hovered` and `pressed` — and implements
//! the transition rules for press/release events. It is deliberately a
//! plain struct with no reference to the owning widget: the widget forwards
//! events into it and asks it for the derived [`Mode`], which keeps the
//! machine independently testable.
//!
//! # Invariants
//!
//! 1. `pressed` becomes true only via `press(Primary)` while `hovered`.
//! 2. Any `release(Primary)` clears `pressed`, whether or not the pointer
//!    is still over the region.
//! 3. An activation is reported iff the tracker was pressed AND still
//!    hovered at release time — standard press-then-release-inside click
//!    semantics, at most once per press/release pair.
//! 4. Non-primary buttons never change state and never activate.
//!
//! # Failure Modes
//!
//! - A release with no matching prior press reports no activation.
//! - A second press while already pressed keeps the original press (no
//!   double activation on the eventual release).

use hudkit_core::event::PointerButton;

/// A widget's presentation state, used by hosts to select styling.
///
/// Ordering of the variants is the priority with which they are derived:
/// `Disabled` wins over `Pressed`, which wins over `Hovered`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// No pointer interaction and not disabled.
    #[default]
    Default,
    /// The pointer is over the widget's hit region.
    Hovered,
    /// The widget is being pressed (the press may outlive the hover).
    Pressed,
    /// The widget does not accept input.
    Disabled,
}

impl Mode {
    /// Stable lowercase name, e.g. for skin/style lookup keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Hovered => "hovered",
            Self::Pressed => "pressed",
            Self::Disabled => "disabled",
        }
    }
}

/// Per-widget pointer state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionTracker {
    pressed: bool,
    hovered: bool,
}

impl InteractionTracker {
    /// Create a tracker in the idle state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the live hover flag.
    ///
    /// This is not an edge event: the input dispatch pushes the result of
    /// its geometric containment query whenever it changes (or every frame,
    /// both are fine).
    pub fn set_hovered(&mut self, over: bool) {
        self.hovered = over;
    }

    /// Whether the pointer is currently over the owning region.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether a press is in flight.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Handle a button press. Returns whether the event was consumed.
    ///
    /// Only the primary button while hovered is accepted; pressing while
    /// already pressed keeps the original press.
    pub fn press(&mut self, button: PointerButton) -> bool {
        if !button.is_primary() || !self.hovered {
            return false;
        }
        self.pressed = true;
        true
    }

    /// Handle a button release. Returns whether an activation fired.
    ///
    /// A primary release always clears the pressed state; it activates only
    /// if the tracker was pressed and the pointer is still over the region.
    pub fn release(&mut self, button: PointerButton) -> bool {
        if !button.is_primary() {
            return false;
        }
        let activated = self.pressed && self.hovered;
        self.pressed = false;
        activated
    }

    /// Derive the presentation [`Mode`], folding in the owning widget's
    /// enabled flag: `disabled > pressed > hovered > default`.
    #[must_use]
    pub fn mode_with(&self, enabled: bool) -> Mode {
        if !enabled {
            Mode::Disabled
        } else if self.pressed {
            Mode::Pressed
        } else if self.hovered {
            Mode::Hovered
        } else {
            Mode::Default
        }
    }
}
