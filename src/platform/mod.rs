//! Platform capabilities consumed by the core.
//!
//! The `Platform` trait is the seam between the reaction-role core and Discord. The
//! bot layer implements it over Serenity's HTTP client and cache
//! (`SerenityPlatform`); tests implement it with an in-memory fake that records every
//! request, so routing and authorization logic can be checked without a gateway.
//!
//! Errors follow the `AppError` taxonomy: a 403 from Discord surfaces as
//! `AppError::Forbidden`, a 404 as `AppError::NotFound`.

pub mod discord;

#[cfg(test)]
pub mod fake;

use serenity::all::{ChannelId, GuildId, MessageId, ReactionType, RoleId, UserId};
use serenity::async_trait;

use crate::{error::AppError, model::discord::GuildRole};

pub use self::discord::SerenityPlatform;

/// Discord operations the bot performs on behalf of commands and gateway events.
#[async_trait]
pub trait Platform: Send + Sync {
    /// ID of the bot's own user.
    fn current_user_id(&self) -> UserId;

    /// Fetches a message to confirm it exists and is reachable.
    async fn fetch_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), AppError>;

    /// Attaches a reaction from the bot to a message.
    async fn add_reaction(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        reaction: &ReactionType,
    ) -> Result<(), AppError>;

    /// Current role IDs of a guild member.
    ///
    /// # Returns
    /// - `Ok(Some(roles))` - The member exists
    /// - `Ok(None)` - The user is not (or no longer) a member of the guild
    async fn member_roles(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<Vec<RoleId>>, AppError>;

    /// All roles currently defined in a guild.
    async fn guild_roles(&self, guild_id: GuildId) -> Result<Vec<GuildRole>, AppError>;

    /// Grants a role. Granting a role the member already holds succeeds.
    async fn grant_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError>;

    /// Revokes a role. Revoking a role the member does not hold succeeds.
    async fn revoke_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError>;

    /// Sends an embed with a title and description to a channel.
    async fn send_embed(
        &self,
        channel_id: ChannelId,
        title: &str,
        description: &str,
    ) -> Result<(), AppError>;

    /// Deletes up to `limit` of the most recent messages in a channel.
    ///
    /// Messages too old for bulk delete are deleted one at a time.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of messages deleted
    async fn purge_messages(&self, channel_id: ChannelId, limit: u8) -> Result<usize, AppError>;
}
