use serenity::all::{CreateCommand, CreateEmbed, CreateInteractionResponseMessage};

use crate::controller::utility::{HELP_TEXT, HELP_TITLE};

pub const NAME: &str = "help";

const HELP_COLOR: u32 = 0xAFEEEE;

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Show the available commands")
}

pub fn response() -> CreateInteractionResponseMessage {
    let embed = CreateEmbed::new()
        .title(HELP_TITLE)
        .description(HELP_TEXT)
        .color(HELP_COLOR);

    CreateInteractionResponseMessage::new()
        .embed(embed)
        .ephemeral(true)
}
