//! Opaque handles minted outside the widget core.
//!
//! Sounds and textures are loaded and owned by the host's asset system; the
//! widget core only ever stores and forwards their identifiers. [`HitId`]
//! goes the other way: widgets mint one per instance and hand it to the
//! canvas so the input dispatch can attribute pointer events back to them.

use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for unique hit region IDs.
static HIT_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Opaque identifier for a loaded sound asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundHandle(u64);

impl SoundHandle {
    /// Wrap a raw asset identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw asset identifier.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Opaque identifier for a loaded texture (or texture region) asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(u64);

impl TextureHandle {
    /// Wrap a raw asset identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw asset identifier.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Identifier for a widget's pointer hit region.
///
/// A widget registers its `HitId` with the canvas every frame it is willing
/// to receive input; the external dispatch resolves pointer positions to the
/// registered id and routes events to the owning widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HitId(u64);

impl HitId {
    /// Wrap an explicit raw id (for hosts that manage their own id space).
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Allocate a process-unique id.
    #[must_use]
    pub fn alloc() -> Self {
        Self(HIT_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw id value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}
