//! Discord bot integration: gateway events and slash commands.
//!
//! The bot is the only entry point into the application. Gateway events (reactions,
//! member joins) are routed to the services without any way to reply, so failures
//! there are logged. Slash commands always get an ephemeral reply, including when
//! they fail.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and role data for the cache
//! - `GUILD_MEMBERS` - Member join events (privileged intent)
//! - `GUILD_MESSAGES` - Message data for reaction-role targets
//! - `GUILD_MESSAGE_REACTIONS` - Reaction add/remove events
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
