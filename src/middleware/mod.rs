//! Guards run before a command is allowed to touch shared state.

pub mod auth;
