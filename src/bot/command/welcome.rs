use serenity::all::{ChannelType, CommandOptionType, CreateCommand, CreateCommandOption};

use super::Options;
use crate::{
    controller::welcome, error::AppError, model::command::Invocation,
    model::welcome::SetWelcomeParams, platform::Platform, state::BotState,
};

pub const NAME: &str = "welcome";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Configure the welcome message (admin)")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "mode", "add or remove")
                .required(true)
                .add_string_choice("add", "add")
                .add_string_choice("remove", "remove"),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "title",
            "Title text",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "description",
            "Message text, {member} is replaced with the new member",
        ))
        .add_option(
            CreateCommandOption::new(CommandOptionType::Channel, "channel", "Channel to post in")
                .channel_types(vec![ChannelType::Text]),
        )
}

pub async fn run(
    state: &BotState,
    platform: &dyn Platform,
    invocation: &Invocation,
    options: &Options<'_>,
) -> Result<String, AppError> {
    let mode = options.required("mode", options.string("mode"))?;

    let params = SetWelcomeParams {
        title: options.string("title"),
        description: options.string("description"),
        channel_id: options.channel("channel"),
    };

    welcome::configure(state, platform, invocation, &mode, params).await
}
