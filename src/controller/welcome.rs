use std::str::FromStr;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{command::Invocation, welcome::SetWelcomeParams},
    platform::Platform,
    service::welcome::WelcomeService,
    state::BotState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeMode {
    Add,
    Remove,
}

impl FromStr for WelcomeMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "remove" => Ok(Self::Remove),
            _ => Err(AppError::BadRequest(
                "Invalid mode, use add or remove".to_string(),
            )),
        }
    }
}

/// Adds or removes the guild's welcome message.
///
/// The admin check runs before the mode is even parsed.
pub async fn configure(
    state: &BotState,
    platform: &dyn Platform,
    invocation: &Invocation,
    mode: &str,
    params: SetWelcomeParams,
) -> Result<String, AppError> {
    AuthGuard::new(platform, &state.config.admin_role_name)
        .require(invocation, "configure welcome message", &[Permission::Admin])
        .await?;

    let guild_id = invocation.guild()?;
    let service = WelcomeService::new(&state.welcome, platform);

    match mode.parse::<WelcomeMode>()? {
        WelcomeMode::Add => {
            let config = service.set(guild_id, params).await?;
            Ok(format!(
                "✅ Welcome message will be posted in <#{}>",
                config.channel_id
            ))
        }
        WelcomeMode::Remove => {
            service.clear(guild_id).await?;
            Ok("🗑️ Welcome message removed".to_string())
        }
    }
}
