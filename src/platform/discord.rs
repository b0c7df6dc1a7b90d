//! `Platform` implementation backed by Serenity's HTTP client and cache.

use serenity::all::{
    Cache, ChannelId, Context, CreateEmbed, CreateMessage, GetMessages, GuildId, MessageId,
    ReactionType, RoleId, Timestamp, UserId,
};
use serenity::async_trait;
use serenity::http::Http;
use std::sync::Arc;

use super::Platform;
use crate::{
    error::AppError,
    model::{discord::GuildRole, purge::PurgePlan},
};

/// Audit log reason attached to role changes made by the bot.
const AUDIT_LOG_REASON: &str = "Reaction role";

/// Embed color for welcome messages (blue).
const EMBED_COLOR: u32 = 0x3498db;

/// Serenity-backed platform using the gateway cache where possible.
///
/// Cheap to construct: both fields are reference-counted, so a new instance is
/// created from the `Context` of each event.
pub struct SerenityPlatform {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl SerenityPlatform {
    pub fn new(ctx: &Context) -> Self {
        Self {
            http: ctx.http.clone(),
            cache: ctx.cache.clone(),
        }
    }
}

#[async_trait]
impl Platform for SerenityPlatform {
    fn current_user_id(&self) -> UserId {
        self.cache.current_user().id
    }

    async fn fetch_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), AppError> {
        self.http.get_message(channel_id, message_id).await?;

        Ok(())
    }

    async fn add_reaction(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        reaction: &ReactionType,
    ) -> Result<(), AppError> {
        self.http
            .create_reaction(channel_id, message_id, reaction)
            .await?;

        Ok(())
    }

    async fn member_roles(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<Vec<RoleId>>, AppError> {
        let cached = self
            .cache
            .member(guild_id, user_id)
            .map(|member| member.roles.clone());
        if cached.is_some() {
            return Ok(cached);
        }

        match self.http.get_member(guild_id, user_id).await {
            Ok(member) => Ok(Some(member.roles)),
            Err(e) => match AppError::from(e) {
                AppError::NotFound(_) => Ok(None),
                err => Err(err),
            },
        }
    }

    async fn guild_roles(&self, guild_id: GuildId) -> Result<Vec<GuildRole>, AppError> {
        let cached: Option<Vec<GuildRole>> = self
            .cache
            .guild(guild_id)
            .map(|guild| guild.roles.values().map(GuildRole::from).collect());
        if let Some(roles) = cached {
            return Ok(roles);
        }

        let roles = self.http.get_guild_roles(guild_id).await?;

        Ok(roles.iter().map(GuildRole::from).collect())
    }

    async fn grant_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.http
            .add_member_role(guild_id, user_id, role_id, Some(AUDIT_LOG_REASON))
            .await?;

        Ok(())
    }

    async fn revoke_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.http
            .remove_member_role(guild_id, user_id, role_id, Some(AUDIT_LOG_REASON))
            .await?;

        Ok(())
    }

    async fn send_embed(
        &self,
        channel_id: ChannelId,
        title: &str,
        description: &str,
    ) -> Result<(), AppError> {
        let embed = CreateEmbed::new()
            .title(title)
            .description(description)
            .color(EMBED_COLOR);

        channel_id
            .send_message(&self.http, CreateMessage::new().embed(embed))
            .await?;

        Ok(())
    }

    async fn purge_messages(&self, channel_id: ChannelId, limit: u8) -> Result<usize, AppError> {
        let messages = channel_id
            .messages(&self.http, GetMessages::new().limit(limit))
            .await?;

        let ids: Vec<MessageId> = messages.iter().map(|message| message.id).collect();
        let plan = PurgePlan::new(&ids, Timestamp::now());

        if !plan.bulk.is_empty() {
            channel_id.delete_messages(&self.http, &plan.bulk).await?;
        }
        for id in &plan.single {
            channel_id.delete_message(&self.http, *id).await?;
        }

        Ok(plan.len())
    }
}
