//! Slash command definitions and dispatch.
//!
//! Each submodule owns one command: its `NAME`, its `register` builder and a `run`
//! function that extracts options and calls the matching controller. Errors are
//! caught here, at the command boundary, and turned into the ephemeral reply.

pub mod clear;
pub mod dice;
pub mod help;
pub mod reaction_role;
pub mod welcome;

use serenity::all::{
    ChannelId, Command, CommandInteraction, CreateCommand, CreateInteractionResponseMessage,
    ResolvedOption, ResolvedValue, Role,
};
use serenity::http::Http;

use crate::{
    error::AppError, model::command::Invocation, platform::Platform, state::BotState,
};

/// All slash commands the bot exposes.
pub fn commands() -> Vec<CreateCommand> {
    vec![
        help::register(),
        clear::register(),
        reaction_role::register(),
        welcome::register(),
        dice::register(),
    ]
}

/// Registers the global slash commands, replacing any previously registered set.
///
/// # Returns
/// - `Ok(usize)` - Number of commands registered
/// - `Err(AppError)` - Discord rejected the registration
pub async fn register(http: &Http) -> Result<usize, AppError> {
    let registered = Command::set_global_commands(http, commands()).await?;

    Ok(registered.len())
}

/// Runs a slash command and builds its ephemeral response.
pub async fn run(
    state: &BotState,
    platform: &dyn Platform,
    command: &CommandInteraction,
) -> CreateInteractionResponseMessage {
    let invocation = Invocation::from_command(command);
    let options = Options::new(command);

    let result = match command.data.name.as_str() {
        help::NAME => return help::response(),
        clear::NAME => clear::run(state, platform, &invocation, &options).await,
        reaction_role::NAME => reaction_role::run(state, platform, &invocation, &options).await,
        welcome::NAME => welcome::run(state, platform, &invocation, &options).await,
        dice::NAME => dice::run(&options),
        other => {
            tracing::warn!("Unknown command: {}", other);
            Err(AppError::NotFound(format!("/{}", other)))
        }
    };

    let content = result.unwrap_or_else(|e| e.user_message());

    CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true)
}

/// Resolved options of a command invocation, looked up by name.
pub struct Options<'a> {
    options: Vec<ResolvedOption<'a>>,
}

impl<'a> Options<'a> {
    pub fn new(command: &'a CommandInteraction) -> Self {
        Self {
            options: command.data.options(),
        }
    }

    fn value(&self, name: &str) -> Option<&ResolvedValue<'a>> {
        self.options
            .iter()
            .find(|option| option.name == name)
            .map(|option| &option.value)
    }

    pub fn string(&self, name: &str) -> Option<String> {
        match self.value(name) {
            Some(ResolvedValue::String(value)) => Some(value.to_string()),
            _ => None,
        }
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.value(name) {
            Some(ResolvedValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn role(&self, name: &str) -> Option<&'a Role> {
        match self.value(name) {
            Some(ResolvedValue::Role(role)) => Some(*role),
            _ => None,
        }
    }

    pub fn channel(&self, name: &str) -> Option<ChannelId> {
        match self.value(name) {
            Some(ResolvedValue::Channel(channel)) => Some(channel.id),
            _ => None,
        }
    }

    /// Discord enforces required options client-side; this guards against stale
    /// command registrations.
    pub fn required<T>(&self, name: &str, value: Option<T>) -> Result<T, AppError> {
        value.ok_or_else(|| AppError::BadRequest(format!("Missing option: {}", name)))
    }
}
