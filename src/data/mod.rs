//! In-memory stores for reaction-role bindings and welcome settings.
//!
//! Both stores live for the lifetime of the process and are never persisted. They
//! are cheap to clone; clones share the same underlying map, so the stores are
//! created once at startup and handed to the event handler and command layer.
//! Every mutation is a single-key replacement under one write lock.

pub mod binding;
pub mod welcome;

pub use binding::BindingStore;
pub use welcome::WelcomeRegistry;
