#![forbid(unsafe_code)]

//! Reactive value bindings for hudkit widgets.

pub mod binding;

pub use binding::Binding;
