//! Command controllers.
//!
//! Each controller runs the authorization gate for mutating commands, calls into the
//! service layer and formats the reply. Controllers take already-parsed parameters
//! so they can be tested without Serenity interaction payloads; the `bot::command`
//! modules do the option parsing.

pub mod reaction_role;
pub mod utility;
pub mod welcome;

#[cfg(test)]
mod test;
