//! Creating reaction-role bindings.

use serenity::all::{ChannelId, MessageId, ReactionType, RoleId};

use crate::{
    data::BindingStore,
    error::AppError,
    model::reaction::EmojiKey,
    platform::Platform,
};

/// Result of a successful bind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingCreated {
    pub message_id: MessageId,
    pub reaction: ReactionType,
    pub role_id: RoleId,
    /// Role the binding superseded, if the key was already bound.
    pub replaced: Option<RoleId>,
}

pub struct ReactionRoleService<'a> {
    bindings: &'a BindingStore,
    platform: &'a dyn Platform,
}

impl<'a> ReactionRoleService<'a> {
    pub fn new(bindings: &'a BindingStore, platform: &'a dyn Platform) -> Self {
        Self { bindings, platform }
    }

    /// Binds an emoji on a message to a role.
    ///
    /// Validates the raw input, confirms the message exists in `channel_id`, attaches
    /// the emoji to the message so users have something to click, then records the
    /// binding. The caller must already have passed the admin check.
    ///
    /// Attaching the reaction and recording the binding are not transactional. A
    /// moderator removing the bot's reaction later leaves the binding in place, and
    /// a binding survives its message or role being deleted.
    ///
    /// # Arguments
    /// - `channel_id` - Channel the message is in
    /// - `raw_message_id` - Message ID as typed by the user
    /// - `raw_emoji` - Unicode emoji or `<:name:id>` custom emoji
    /// - `role_id` - Role to grant when users react
    ///
    /// # Returns
    /// - `Ok(BindingCreated)` - Reaction attached and binding recorded
    /// - `Err(AppError::BadRequest)` - Message ID or emoji is malformed
    /// - `Err(AppError::NotFound)` - Message does not exist in this channel
    /// - `Err(AppError::Forbidden)` - Bot cannot read the message or add reactions
    pub async fn bind(
        &self,
        channel_id: ChannelId,
        raw_message_id: &str,
        raw_emoji: &str,
        role_id: RoleId,
    ) -> Result<BindingCreated, AppError> {
        let message_id = parse_message_id(raw_message_id)?;
        let (emoji, reaction) = EmojiKey::parse(raw_emoji)?;

        self.platform.fetch_message(channel_id, message_id).await?;
        self.platform
            .add_reaction(channel_id, message_id, &reaction)
            .await?;

        let replaced = self.bindings.insert(message_id, emoji.clone(), role_id).await;

        tracing::info!(
            "Bound {} on message {} to role {}",
            emoji,
            message_id,
            role_id
        );

        Ok(BindingCreated {
            message_id,
            reaction,
            role_id,
            replaced,
        })
    }
}

/// Parses a Discord snowflake typed by the user.
///
/// Snowflakes are non-zero, so "0" is rejected along with non-numeric input.
pub fn parse_message_id(raw: &str) -> Result<MessageId, AppError> {
    let invalid = || AppError::BadRequest(format!("'{}' is not a valid message ID", raw.trim()));

    let id = raw.trim().parse::<u64>().map_err(|_| invalid())?;
    if id == 0 {
        return Err(invalid());
    }

    Ok(MessageId::new(id))
}
