#![forbid(unsafe_code)]

//! Clickable button widget.
//!
//! A [`Button`] composes four [`Binding`]s (text, image, click sound, click
//! volume) with an [`InteractionTracker`] and an ordered list of activation
//! listeners. Activation uses standard click semantics: a primary-button
//! press over the region followed by a release that is still over the
//! region. On activation the button plays its bound click sound (if any)
//! through the injected [`AudioMixer`], then notifies listeners in
//! subscription order.
//!
//! # Invariants
//!
//! 1. Activation side effects run synchronously inside `release`, at most
//!    once per press/release pair.
//! 2. Listener notification iterates a snapshot taken at activation time,
//!    so the set of listeners for the current activation is fixed before
//!    the first one runs.
//! 3. A disabled button registers no hit region, so the dispatch has
//!    nothing to route to it; `draw` is the only place registration
//!    happens.
//! 4. Sound playback cannot suppress listener notification: the mixer call
//!    returns nothing and listeners always run afterwards.
//!
//! # Failure Modes
//!
//! - No bound sound: activation skips playback and proceeds to listeners.
//! - Empty bound text: nothing is drawn for the label.
//! - Listeners receive `&Button` and therefore cannot subscribe or
//!   unsubscribe from inside a notification; mutate the listener list
//!   between activations instead.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use hudkit_core::audio::AudioMixer;
use hudkit_core::canvas::Canvas;
use hudkit_core::event::PointerButton;
use hudkit_core::geometry::Size;
use hudkit_core::handle::{HitId, SoundHandle, TextureHandle};
use hudkit_reactive::Binding;

use crate::interaction::{InteractionTracker, Mode};
use crate::Widget;

/// Identifier returned by [`Button::subscribe`] for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type ActivateFn = Rc<RefCell<dyn FnMut(&Button)>>;

/// A widget displaying a clickable button with text and an optional image.
pub struct Button {
    text: Binding<String>,
    image: Binding<Option<TextureHandle>>,
    click_sound: Binding<Option<SoundHandle>>,
    click_volume: Binding<f32>,
    tracker: InteractionTracker,
    enabled: bool,
    hit_id: HitId,
    audio: Rc<dyn AudioMixer>,
    listeners: Vec<(ListenerId, ActivateFn)>,
    next_listener: u64,
}

impl Button {
    /// Create a button wired to `audio` for click sound playback.
    ///
    /// The mixer is injected here rather than resolved from any global
    /// registry; pass [`hudkit_core::audio::NullMixer`] for silent hosts.
    #[must_use]
    pub fn new(audio: Rc<dyn AudioMixer>) -> Self {
        Self {
            text: Binding::new(String::new()),
            image: Binding::new(None),
            click_sound: Binding::new(None),
            click_volume: Binding::new(1.0),
            tracker: InteractionTracker::new(),
            enabled: true,
            hit_id: HitId::alloc(),
            audio,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Set the label text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text.set(text.into());
        self
    }

    /// Set the click sound played on activation.
    #[must_use]
    pub fn with_click_sound(mut self, sound: SoundHandle) -> Self {
        self.click_sound.set(Some(sound));
        self
    }

    // --- Bindings ---

    /// Replace the text binding wholesale.
    pub fn bind_text(&mut self, binding: Binding<String>) {
        self.text = binding;
    }

    /// The current label text.
    #[must_use]
    pub fn text(&self) -> String {
        self.text.get()
    }

    /// Set the label text through the current binding.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text.set(text.into());
    }

    /// Replace the image binding wholesale.
    pub fn bind_image(&mut self, binding: Binding<Option<TextureHandle>>) {
        self.image = binding;
    }

    /// The current image, if any.
    #[must_use]
    pub fn image(&self) -> Option<TextureHandle> {
        self.image.get()
    }

    /// Set the image through the current binding.
    pub fn set_image(&mut self, image: Option<TextureHandle>) {
        self.image.set(image);
    }

    /// Replace the click sound binding wholesale.
    pub fn bind_click_sound(&mut self, binding: Binding<Option<SoundHandle>>) {
        self.click_sound = binding;
    }

    /// The current click sound, if any.
    #[must_use]
    pub fn click_sound(&self) -> Option<SoundHandle> {
        self.click_sound.get()
    }

    /// Set the click sound through the current binding.
    pub fn set_click_sound(&mut self, sound: Option<SoundHandle>) {
        self.click_sound.set(sound);
    }

    /// Replace the click volume binding wholesale.
    pub fn bind_click_volume(&mut self, binding: Binding<f32>) {
        self.click_volume = binding;
    }

    /// The current click volume.
    #[must_use]
    pub fn click_volume(&self) -> f32 {
        self.click_volume.get()
    }

    /// Set the click volume (1.0 = full volume).
    ///
    /// # Panics
    ///
    /// Panics if `volume` is negative or not finite.
    pub fn set_click_volume(&mut self, volume: f32) {
        assert!(
            volume.is_finite() && volume >= 0.0,
            "click volume must be a non-negative finite value, got {volume}"
        );
        self.click_volume.set(volume);
    }

    // --- Enabled state and mode ---

    /// Enable or disable the button. Disabled buttons draw but register no
    /// hit region, so they receive no input.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the button accepts input.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// This button's hit region id.
    #[must_use]
    pub fn hit_id(&self) -> HitId {
        self.hit_id
    }

    // --- Input surface (called by the host's input dispatch) ---

    /// Push the dispatch's live containment result for this button.
    pub fn set_pointer_over(&mut self, over: bool) {
        self.tracker.set_hovered(over);
    }

    /// Handle a pointer button press. Returns whether it was consumed.
    pub fn press(&mut self, button: PointerButton) -> bool {
        self.tracker.press(button)
    }

    /// Handle a pointer button release, firing activation side effects if
    /// this completes a click.
    pub fn release(&mut self, button: PointerButton) {
        if self.tracker.release(button) {
            self.activate();
        }
    }

    // --- Listeners ---

    /// Subscribe an activation listener; listeners run in subscription
    /// order and receive a shared reference to this button.
    pub fn subscribe(&mut self, listener: impl FnMut(&Button) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Rc::new(RefCell::new(listener))));
        id
    }

    /// Remove a previously subscribed listener. Returns whether it was
    /// still subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Number of subscribed listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn activate(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(hit_id = self.hit_id.raw(), "button activated");

        if let Some(sound) = self.click_sound.get() {
            self.audio.play(sound, self.click_volume.get());
        }
        let snapshot: Vec<ActivateFn> = self
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            (&mut *listener.borrow_mut())(self);
        }
    }
}

impl Widget for Button {
    fn draw(&mut self, canvas: &mut dyn Canvas) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("widget_draw", widget = "Button").entered();

        if let Some(image) = self.image.get() {
            canvas.draw_texture(image);
        }
        let text = self.text.get();
        if !text.is_empty() {
            canvas.draw_text(&text);
        }
        if self.enabled {
            canvas.register_hit_region(self.hit_id);
        }
    }

    fn preferred_size(&self, canvas: &dyn Canvas, area_hint: Size) -> Size {
        let font = canvas.font();
        let lines = font.wrap_lines(&self.text.get(), area_hint.width);
        font.measure(&lines)
    }

    fn mode(&self) -> Mode {
        self.tracker.mode_with(self.enabled)
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("text", &self.text.get())
            .field("enabled", &self.enabled)
            .field("mode", &self.mode())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
