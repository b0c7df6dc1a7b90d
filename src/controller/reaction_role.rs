use serenity::all::RoleId;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::command::Invocation,
    platform::Platform,
    service::reaction_role::ReactionRoleService,
    state::BotState,
};

/// Parsed `/reactionrole` options.
pub struct BindParams {
    /// Message ID exactly as typed.
    pub message: String,
    pub emoji: String,
    pub role_id: RoleId,
    pub role_name: String,
}

/// Binds an emoji on a message in the invoking channel to a role.
///
/// # Returns
/// - `Ok(String)` - Confirmation reply
/// - `Err(AppError)` - Authorization, validation or platform failure; nothing recorded
pub async fn bind(
    state: &BotState,
    platform: &dyn Platform,
    invocation: &Invocation,
    params: BindParams,
) -> Result<String, AppError> {
    AuthGuard::new(platform, &state.config.admin_role_name)
        .require(invocation, "bind reaction role", &[Permission::Admin])
        .await?;

    let created = ReactionRoleService::new(&state.bindings, platform)
        .bind(
            invocation.channel_id,
            &params.message,
            &params.emoji,
            params.role_id,
        )
        .await?;

    let mut reply = format!(
        "✅ Reacting with {} on message {} now grants the {} role",
        created.reaction, created.message_id, params.role_name
    );
    if let Some(previous) = created.replaced {
        reply.push_str(&format!(" (replaces <@&{}>)", previous));
    }

    Ok(reply)
}
