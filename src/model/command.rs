use serenity::all::{ChannelId, CommandInteraction, GuildId, UserId};

use crate::error::{auth::AuthError, AppError};

/// Who invoked a slash command, and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation {
    pub guild_id: Option<GuildId>,
    pub channel_id: ChannelId,
    pub user_id: UserId,
}

impl Invocation {
    pub fn from_command(command: &CommandInteraction) -> Self {
        Self {
            guild_id: command.guild_id,
            channel_id: command.channel_id,
            user_id: command.user.id,
        }
    }

    /// Guild the command was invoked in.
    ///
    /// # Returns
    /// - `Ok(GuildId)` - Command was invoked in a guild channel
    /// - `Err(AuthError::NotInGuild)` - Command was invoked in a direct message
    pub fn guild(&self) -> Result<GuildId, AppError> {
        self.guild_id.ok_or_else(|| AuthError::NotInGuild.into())
    }
}
