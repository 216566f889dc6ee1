#![forbid(unsafe_code)]

//! Value bindings connecting a widget's displayed value to its data source.
//!
//! A [`Binding<T>`] is the indirection cell behind every widget-visible
//! value (label text, image, click sound, volume). It either owns its value
//! outright or delegates to a getter/setter pair owned elsewhere, so a
//! widget can display application state without the application pushing
//! updates into the widget.
//!
//! # Usage
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use hudkit_reactive::Binding;
//!
//! // Owned: the binding is the storage.
//! let mut label = Binding::new(String::from("Play"));
//! label.set(String::from("Pause"));
//! assert_eq!(label.get(), "Pause");
//!
//! // Delegated: the application owns the storage.
//! let score = Rc::new(RefCell::new(0u32));
//! let source = Rc::clone(&score);
//! let sink = Rc::clone(&score);
//! let mut bound = Binding::delegated(
//!     move || *source.borrow(),
//!     move |v| *sink.borrow_mut() = v,
//! );
//! *score.borrow_mut() = 9;
//! assert_eq!(bound.get(), 9);
//! bound.set(12);
//! assert_eq!(*score.borrow(), 12);
//! ```
//!
//! # Invariants
//!
//! 1. `get()` always returns the most recently `set()` value, or whatever
//!    the external source currently holds for a delegated binding.
//! 2. `get()` has no side effects and never fails.
//! 3. The owning widget may replace a binding wholesale at any time; the
//!    replacement takes effect on the very next `get()`.
//! 4. The owned variant is a direct value access, with no dispatch.
//!
//! # Failure Modes
//!
//! - A delegated getter/setter that panics propagates to the caller of
//!   `get()`/`set()`; the binding itself adds no failure paths.
//! - Bindings are not thread-safe (`Rc`-based); they belong to the
//!   single-threaded frame loop that owns the widget.

use std::fmt;
use std::rc::Rc;

enum Inner<T> {
    Owned(T),
    Delegated {
        get: Rc<dyn Fn() -> T>,
        set: Rc<dyn Fn(T)>,
    },
}

/// A value cell that either owns its value or delegates to an external
/// getter/setter pair.
pub struct Binding<T> {
    inner: Inner<T>,
}

impl<T> Binding<T> {
    /// Create a binding that owns `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Inner::Owned(value),
        }
    }

    /// Create a binding backed by an external getter/setter pair.
    ///
    /// The external source is authoritative: `set` forwards the value to
    /// the setter and a later `get` re-reads through the getter.
    #[must_use]
    pub fn delegated(get: impl Fn() -> T + 'static, set: impl Fn(T) + 'static) -> Self {
        Self {
            inner: Inner::Delegated {
                get: Rc::new(get),
                set: Rc::new(set),
            },
        }
    }

    /// Whether this binding delegates to an external source.
    #[must_use]
    pub fn is_delegated(&self) -> bool {
        matches!(self.inner, Inner::Delegated { .. })
    }

    /// Store `value`, either directly or through the external setter.
    pub fn set(&mut self, value: T) {
        match &mut self.inner {
            Inner::Owned(slot) => *slot = value,
            Inner::Delegated { set, .. } => (set)(value),
        }
    }
}

impl<T: Clone> Binding<T> {
    /// The current bound value.
    #[must_use]
    pub fn get(&self) -> T {
        match &self.inner {
            Inner::Owned(value) => value.clone(),
            Inner::Delegated { get, .. } => (get)(),
        }
    }
}

impl<T: Clone + Default> Default for Binding<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("value", &self.get())
            .field("delegated", &self.is_delegated())
            .finish()
    }
}
