//! Welcome message configuration and delivery.

use serenity::all::{ChannelId, GuildId, Mention, UserId};

use crate::{
    data::WelcomeRegistry,
    error::AppError,
    model::welcome::{SetWelcomeParams, WelcomeConfig},
    platform::Platform,
};

/// Outcome of greeting a newly joined member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeOutcome {
    NotConfigured,
    Sent(ChannelId),
    /// Sending failed; not retried.
    Failed(ChannelId),
}

pub struct WelcomeService<'a> {
    registry: &'a WelcomeRegistry,
    platform: &'a dyn Platform,
}

impl<'a> WelcomeService<'a> {
    pub fn new(registry: &'a WelcomeRegistry, platform: &'a dyn Platform) -> Self {
        Self { registry, platform }
    }

    /// Sets the guild's welcome message, replacing any existing configuration.
    ///
    /// All fields are validated before the registry is touched, so a rejected
    /// request leaves the previous configuration (or its absence) intact.
    ///
    /// # Returns
    /// - `Ok(WelcomeConfig)` - The stored configuration
    /// - `Err(AppError::BadRequest)` - One or more fields are missing
    pub async fn set(
        &self,
        guild_id: GuildId,
        params: SetWelcomeParams,
    ) -> Result<WelcomeConfig, AppError> {
        let config = params.into_config()?;

        self.registry.set(guild_id, config.clone()).await;
        tracing::info!(
            "Set welcome message for guild {} in channel {}",
            guild_id,
            config.channel_id
        );

        Ok(config)
    }

    /// Removes the guild's welcome message.
    ///
    /// # Returns
    /// - `Ok(WelcomeConfig)` - The removed configuration
    /// - `Err(AppError::NotFound)` - No welcome message was set
    pub async fn clear(&self, guild_id: GuildId) -> Result<WelcomeConfig, AppError> {
        let removed = self
            .registry
            .remove(guild_id)
            .await
            .ok_or_else(|| AppError::NotFound("No welcome message is set".to_string()))?;

        tracing::info!("Removed welcome message for guild {}", guild_id);

        Ok(removed)
    }

    /// Sends the welcome embed for a member who just joined.
    ///
    /// Fire-and-forget: a failed send is logged and not retried.
    pub async fn greet(&self, guild_id: GuildId, user_id: UserId) -> WelcomeOutcome {
        let Some(config) = self.registry.get(guild_id).await else {
            return WelcomeOutcome::NotConfigured;
        };

        let description = config.render_description(&Mention::User(user_id).to_string());

        match self
            .platform
            .send_embed(config.channel_id, &config.title, &description)
            .await
        {
            Ok(()) => {
                tracing::debug!(
                    "Sent welcome message for user {} in guild {}",
                    user_id,
                    guild_id
                );
                WelcomeOutcome::Sent(config.channel_id)
            }
            Err(e) => {
                tracing::error!(
                    "Failed to send welcome message to channel {} in guild {}: {:?}",
                    config.channel_id,
                    guild_id,
                    e
                );
                WelcomeOutcome::Failed(config.channel_id)
            }
        }
    }
}
