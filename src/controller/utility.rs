use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::command::Invocation,
    platform::Platform,
    service::utility,
    state::BotState,
};

pub const HELP_TITLE: &str = "Server command help";

pub const HELP_TEXT: &str = "/help - Show this help\n\
     /clear - Delete recent messages (admin)\n\
     /reactionrole - Set up a reaction role (admin)\n\
     /welcome - Configure the welcome message (admin)\n\
     /dice - Roll a die";

pub fn dice(min: Option<i64>, max: Option<i64>) -> Result<String, AppError> {
    let value = utility::roll_dice(min.unwrap_or(1), max.unwrap_or(6))?;

    Ok(format!("🎲 You rolled {}", value))
}

/// Purges recent messages in the invoking channel.
pub async fn clear(
    state: &BotState,
    platform: &dyn Platform,
    invocation: &Invocation,
    count: i64,
) -> Result<String, AppError> {
    AuthGuard::new(platform, &state.config.admin_role_name)
        .require(invocation, "clear messages", &[Permission::Admin])
        .await?;

    let deleted = utility::purge(platform, invocation.channel_id, count).await?;

    Ok(format!("✅ Deleted {} messages", deleted))
}
