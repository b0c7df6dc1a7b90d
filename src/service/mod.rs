//! Business logic between the bot boundary and the in-memory stores.
//!
//! Services borrow the stores and a `Platform` for the duration of one command or
//! event. They never check permissions; the command layer runs `AuthGuard` first.

pub mod join_role;
pub mod reaction_role;
pub mod role_event;
pub mod utility;
pub mod welcome;

#[cfg(test)]
mod test;
