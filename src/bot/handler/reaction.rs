//! Reaction event handlers for reaction roles.
//!
//! Both reaction_add and reaction_remove funnel into the role event router. The
//! router owns all the discard and failure logic; this module only adapts the
//! Serenity payload.

use serenity::all::{Context, Reaction};

use crate::{
    model::reaction::{ReactionEvent, ReactionKind},
    platform::SerenityPlatform,
    service::role_event::RoleEventRouter,
    state::BotState,
};

/// Handles a reaction being added or removed.
///
/// # Arguments
/// - `state` - Bot state holding the binding store
/// - `ctx` - Discord context for role lookups and changes
/// - `kind` - Whether the reaction was added or removed
/// - `reaction` - Reaction payload from the gateway
pub async fn handle_reaction(state: &BotState, ctx: Context, kind: ReactionKind, reaction: Reaction) {
    let Some(event) = ReactionEvent::from_reaction(kind, &reaction) else {
        tracing::debug!(
            "Ignoring {:?} reaction without a user on message {}",
            kind,
            reaction.message_id
        );
        return;
    };

    let platform = SerenityPlatform::new(&ctx);
    RoleEventRouter::new(&state.bindings, &platform)
        .handle(&event)
        .await;
}
