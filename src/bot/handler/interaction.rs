use serenity::all::{Context, CreateInteractionResponse, Interaction};

use crate::{bot::command, platform::SerenityPlatform, state::BotState};

/// Handles slash command interactions.
///
/// Every command gets exactly one ephemeral response; command errors have already
/// been converted into reply text by the time the response is sent.
pub async fn handle_interaction_create(state: &BotState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    tracing::info!(
        "Received /{} from {} ({})",
        command.data.name,
        command.user.name,
        command.user.id
    );

    let platform = SerenityPlatform::new(&ctx);
    let message = command::run(state, &platform, &command).await;

    if let Err(e) = command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
    {
        tracing::error!(
            "Failed to respond to /{} command: {:?}",
            command.data.name,
            e
        );
    }
}
