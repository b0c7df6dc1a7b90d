use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use super::Options;
use crate::{
    controller::utility, error::AppError, model::command::Invocation, platform::Platform,
    state::BotState,
};

pub const NAME: &str = "clear";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Delete recent messages (admin)")
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "count", "Number of messages")
                .required(true)
                .min_int_value(1)
                .max_int_value(100),
        )
}

pub async fn run(
    state: &BotState,
    platform: &dyn Platform,
    invocation: &Invocation,
    options: &Options<'_>,
) -> Result<String, AppError> {
    let count = options.required("count", options.integer("count"))?;

    utility::clear(state, platform, invocation, count).await
}
