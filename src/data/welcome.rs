//! Per-guild welcome configuration registry.

use serenity::all::GuildId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::model::welcome::WelcomeConfig;

/// Registry holding at most one welcome configuration per guild.
///
/// Entries are only ever stored whole; validation happens before `set` is
/// reached, so a guild's configuration is either complete or absent.
#[derive(Clone, Default)]
pub struct WelcomeRegistry {
    configs: Arc<RwLock<HashMap<GuildId, WelcomeConfig>>>,
}

impl WelcomeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a guild's configuration, replacing any existing one.
    pub async fn set(&self, guild_id: GuildId, config: WelcomeConfig) -> Option<WelcomeConfig> {
        self.configs.write().await.insert(guild_id, config)
    }

    /// Removes a guild's configuration.
    ///
    /// # Returns
    /// - `Some(WelcomeConfig)` - The removed configuration
    /// - `None` - The guild had no configuration
    pub async fn remove(&self, guild_id: GuildId) -> Option<WelcomeConfig> {
        self.configs.write().await.remove(&guild_id)
    }

    pub async fn get(&self, guild_id: GuildId) -> Option<WelcomeConfig> {
        self.configs.read().await.get(&guild_id).cloned()
    }
}
