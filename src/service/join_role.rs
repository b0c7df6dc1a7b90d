//! Automatic role assignment for new members.

use serenity::all::{GuildId, RoleId, UserId};

use crate::{error::AppError, platform::Platform};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinRoleOutcome {
    /// The guild has no role with the configured name.
    RoleMissing,
    Granted(RoleId),
    Forbidden(RoleId),
    Failed,
}

/// Grants the configured join role to members as they join.
pub struct JoinRoleService<'a> {
    platform: &'a dyn Platform,
    role_name: &'a str,
}

impl<'a> JoinRoleService<'a> {
    pub fn new(platform: &'a dyn Platform, role_name: &'a str) -> Self {
        Self {
            platform,
            role_name,
        }
    }

    /// Looks up the join role by name in the member's guild and grants it.
    ///
    /// Failures are logged; the member join is never blocked by this.
    pub async fn assign(&self, guild_id: GuildId, user_id: UserId) -> JoinRoleOutcome {
        let role_name = self.role_name;

        let role_id = match self.find_role(guild_id, role_name).await {
            Ok(Some(role_id)) => role_id,
            Ok(None) => return JoinRoleOutcome::RoleMissing,
            Err(e) => {
                tracing::error!("Failed to fetch roles for guild {}: {:?}", guild_id, e);
                return JoinRoleOutcome::Failed;
            }
        };

        match self.platform.grant_role(guild_id, user_id, role_id).await {
            Ok(()) => JoinRoleOutcome::Granted(role_id),
            Err(AppError::Forbidden(reason)) => {
                tracing::warn!(
                    "Insufficient permission to grant {} to user {}: {}",
                    role_name,
                    user_id,
                    reason
                );
                JoinRoleOutcome::Forbidden(role_id)
            }
            Err(e) => {
                tracing::error!(
                    "Failed to grant {} to user {}: {:?}",
                    role_name,
                    user_id,
                    e
                );
                JoinRoleOutcome::Failed
            }
        }
    }

    async fn find_role(&self, guild_id: GuildId, name: &str) -> Result<Option<RoleId>, AppError> {
        let roles = self.platform.guild_roles(guild_id).await?;

        Ok(roles.into_iter().find(|role| role.name == name).map(|role| role.id))
    }
}
