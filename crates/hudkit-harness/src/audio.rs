//! An audio mixer that records playback requests.

use std::cell::RefCell;

use hudkit_core::audio::AudioMixer;
use hudkit_core::handle::SoundHandle;

/// An [`AudioMixer`] double that captures every `play` call.
#[derive(Debug, Default)]
pub struct RecordingMixer {
    played: RefCell<Vec<(SoundHandle, f32)>>,
}

impl RecordingMixer {
    /// Create a mixer with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The `(sound, volume)` pairs played so far, in order.
    #[must_use]
    pub fn played(&self) -> Vec<(SoundHandle, f32)> {
        self.played.borrow().clone()
    }

    /// Number of playback requests so far.
    #[must_use]
    pub fn play_count(&self) -> usize {
        self.played.borrow().len()
    }
}

impl AudioMixer for RecordingMixer {
    fn play(&self, sound: SoundHandle, volume: f32) {
        self.played.borrow_mut().push((sound, volume));
    }
}
