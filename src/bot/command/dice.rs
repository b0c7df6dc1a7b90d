use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use super::Options;
use crate::{
    controller::utility,
    error::AppError,
    service::utility::{DICE_MAX, DICE_MIN},
};

pub const NAME: &str = "dice";

/// The service checks the same bounds again.
pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Roll a die (default 1-6)")
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "min", "Minimum value (default 1)")
                .min_int_value(DICE_MIN as u64)
                .max_int_value(DICE_MAX as u64),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "max", "Maximum value (default 6)")
                .min_int_value(DICE_MIN as u64)
                .max_int_value(DICE_MAX as u64),
        )
}

pub fn run(options: &Options<'_>) -> Result<String, AppError> {
    utility::dice(options.integer("min"), options.integer("max"))
}
