use serenity::all::{Context, Member};

use crate::{
    model::discord::NewMember,
    platform::SerenityPlatform,
    service::{join_role::JoinRoleService, welcome::WelcomeService},
    state::BotState,
};

/// Handles the guild_member_addition event when a member joins a guild
///
/// Grants the configured join role, then posts the guild's welcome message. Each
/// step logs its own failures and neither blocks the other.
pub async fn handle_guild_member_addition(state: &BotState, ctx: Context, new_member: Member) {
    let joined = NewMember::from(&new_member);
    let platform = SerenityPlatform::new(&ctx);

    let join_role = JoinRoleService::new(&platform, &state.config.join_role_name)
        .assign(joined.guild_id, joined.user_id)
        .await;

    let welcome = WelcomeService::new(&state.welcome, &platform)
        .greet(joined.guild_id, joined.user_id)
        .await;

    tracing::debug!(
        "User {} joined guild {} - join role: {:?}, welcome: {:?}",
        joined.username,
        joined.guild_id,
        join_role,
        welcome
    );
}
