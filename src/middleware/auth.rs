use serenity::all::RoleId;

use crate::{
    error::{auth::AuthError, AppError},
    model::{command::Invocation, discord::GuildRole},
    platform::Platform,
};

pub enum Permission {
    Admin,
}

/// Authorization gate for mutating commands.
///
/// The decision is made from the member's roles as Discord reports them at call time
/// and is never cached, so revoking the admin role takes effect immediately.
pub struct AuthGuard<'a> {
    platform: &'a dyn Platform,
    admin_role_name: &'a str,
}

impl<'a> AuthGuard<'a> {
    pub fn new(platform: &'a dyn Platform, admin_role_name: &'a str) -> Self {
        Self {
            platform,
            admin_role_name,
        }
    }

    /// Checks that the invoking user holds every listed permission.
    ///
    /// Must run before any mutation; on failure the command ends with a
    /// "not permitted" reply and nothing is changed.
    ///
    /// # Arguments
    /// - `invocation` - Who invoked the command and where
    /// - `operation` - Name of the attempted operation, used for logging
    /// - `permissions` - Permissions the user must hold
    ///
    /// # Returns
    /// - `Ok(())` - The user is authorized
    /// - `Err(AuthError::NotInGuild)` - Invoked outside a guild
    /// - `Err(AuthError::AccessDenied)` - The user lacks a permission or is not a member
    /// - `Err(AppError)` - Looking up the member or roles failed
    pub async fn require(
        &self,
        invocation: &Invocation,
        operation: &str,
        permissions: &[Permission],
    ) -> Result<(), AppError> {
        let guild_id = invocation.guild()?;
        let user_id = invocation.user_id;

        let denied = || AuthError::AccessDenied(user_id.get(), operation.to_string());

        let Some(member_roles) = self.platform.member_roles(guild_id, user_id).await? else {
            return Err(denied().into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    let guild_roles = self.platform.guild_roles(guild_id).await?;
                    if !self.is_authorized(&member_roles, &guild_roles) {
                        return Err(denied().into());
                    }
                }
            }
        }

        Ok(())
    }

    /// Returns true if any of the member's roles carries the admin role name.
    pub fn is_authorized(&self, member_roles: &[RoleId], guild_roles: &[GuildRole]) -> bool {
        guild_roles
            .iter()
            .filter(|role| role.name == self.admin_role_name)
            .any(|role| member_roles.contains(&role.id))
    }
}
