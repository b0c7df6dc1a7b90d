use serenity::all::{ChannelId, GuildId, UserId};

use crate::{config::Config, model::command::Invocation, platform::fake::FakePlatform, state::BotState};


const GUILD: u64 = 1;
const CHANNEL: u64 = 10;
const ADMIN_ROLE: u64 = 100;
const ADMIN_USER: u64 = 7;
const REGULAR_USER: u64 = 8;

fn state() -> BotState {
    BotState::new(Config {
        discord_token: "test-token".to_string(),
        admin_role_name: "Admin".to_string(),
        join_role_name: "Newcomer".to_string(),
    })
}

fn invocation(user_id: u64) -> Invocation {
    Invocation {
        guild_id: Some(GuildId::new(GUILD)),
        channel_id: ChannelId::new(CHANNEL),
        user_id: UserId::new(user_id),
    }
}

/// Guild with an admin and a regular member.
fn platform() -> FakePlatform {
    FakePlatform::new()
        .with_role(GUILD, ADMIN_ROLE, "Admin")
        .with_member(GUILD, ADMIN_USER, &[ADMIN_ROLE])
        .with_member(GUILD, REGULAR_USER, &[])
}
