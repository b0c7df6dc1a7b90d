//! Ready event handler for bot initialization.
//!
//! The `ready` event fires after the bot connects to Discord's gateway and completes
//! the initial handshake. Slash commands are (re)registered here so the command list
//! always matches the running build.

use serenity::all::{Context, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// Registers the global slash commands. A registration failure is logged; the bot
/// keeps running so gateway events are still handled.
///
/// # Arguments
/// - `ctx` - Discord context for registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match command::register(&ctx.http).await {
        Ok(count) => tracing::info!("Registered {} slash commands", count),
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }
}
