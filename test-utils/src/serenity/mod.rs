//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's API and gateway would send.
//!
//! # Available Factories
//!
//! - `member::create_test_member` - Create Serenity Member objects
//! - `reaction::create_test_reaction` - Create gateway Reaction payloads
//! - `reaction::create_test_custom_reaction` - Same, with a custom guild emoji
//! - `role::create_test_role` - Create Serenity Role objects

pub mod member;
pub mod reaction;
pub mod role;

pub use member::create_test_member;
pub use reaction::{create_test_custom_reaction, create_test_reaction};
pub use role::create_test_role;
