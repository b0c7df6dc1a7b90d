//! Rolekeeper Test Utils
//!
//! Shared factories for building Serenity payloads in unit tests. Gateway events
//! such as reactions and member joins are only constructed by Serenity itself, so
//! the factories build them the same way: by deserializing the JSON Discord sends.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_reaction, create_test_role};
//!
//! #[test]
//! fn reaction_in_guild() {
//!     let reaction = create_test_reaction(123, 42, Some(1), "✅");
//!     let role = create_test_role(100, "Member");
//!     // Feed into the code under test...
//! }
//! ```

pub mod serenity;
