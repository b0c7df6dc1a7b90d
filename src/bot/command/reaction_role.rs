use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use super::Options;
use crate::{
    controller::reaction_role::{self, BindParams},
    error::AppError,
    model::command::Invocation,
    platform::Platform,
    state::BotState,
};

pub const NAME: &str = "reactionrole";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Set up a reaction role (admin)")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "message", "Message ID")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "emoji", "Emoji")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::Role, "role", "Role to grant")
                .required(true),
        )
}

pub async fn run(
    state: &BotState,
    platform: &dyn Platform,
    invocation: &Invocation,
    options: &Options<'_>,
) -> Result<String, AppError> {
    let role = options.required("role", options.role("role"))?;

    let params = BindParams {
        message: options.required("message", options.string("message"))?,
        emoji: options.required("emoji", options.string("emoji"))?,
        role_id: role.id,
        role_name: role.name.clone(),
    };

    reaction_role::bind(state, platform, invocation, params).await
}
