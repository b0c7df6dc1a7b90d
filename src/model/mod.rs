//! Domain models shared by the data, service and bot layers.
//!
//! These types decouple the core from Serenity's wire structs: gateway payloads and
//! command options are converted into them at the bot boundary, so stores and
//! services can be exercised in tests without a live gateway.

pub mod command;
pub mod discord;
pub mod purge;
pub mod reaction;
pub mod welcome;
