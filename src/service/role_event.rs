//! Routing reaction events to role grants and revocations.
//!
//! Gateway reaction events arrive unordered and may be duplicated, so the router
//! treats every event independently: it resolves the event against the current
//! bindings and guild state, then issues at most one grant or revoke. Granting a
//! held role or revoking an absent one is a no-op on Discord's side, which makes
//! duplicate events harmless.
//!
//! Nothing here can report back to a user. Unresolvable events are discarded with a
//! named `Resolution`, and failed requests are logged and swallowed.

use crate::{
    data::BindingStore,
    error::AppError,
    model::reaction::{ReactionEvent, ReactionOutcome, Resolution, RoleAction, RoleRequest},
    platform::Platform,
};

pub struct RoleEventRouter<'a> {
    bindings: &'a BindingStore,
    platform: &'a dyn Platform,
}

impl<'a> RoleEventRouter<'a> {
    pub fn new(bindings: &'a BindingStore, platform: &'a dyn Platform) -> Self {
        Self { bindings, platform }
    }

    /// Resolves an event to the role request it should produce.
    ///
    /// Checks run in order: guild context, the bot's own reaction, binding lookup,
    /// member lookup, then role lookup. The first failing check names the outcome.
    ///
    /// # Returns
    /// - `Ok(Resolution::Found)` - The request to issue
    /// - `Ok(Resolution::*)` - Why the event should be discarded
    /// - `Err(AppError)` - Member or role lookup failed for a reason other than absence
    pub async fn resolve(&self, event: &ReactionEvent) -> Result<Resolution, AppError> {
        let Some(guild_id) = event.guild_id else {
            return Ok(Resolution::OutsideGuild);
        };

        if event.user_id == self.platform.current_user_id() {
            return Ok(Resolution::OwnReaction);
        }

        let Some(role_id) = self.bindings.resolve(event.message_id, &event.emoji).await else {
            return Ok(Resolution::NoBinding);
        };

        if self
            .platform
            .member_roles(guild_id, event.user_id)
            .await?
            .is_none()
        {
            return Ok(Resolution::MemberGone);
        }

        let guild_roles = self.platform.guild_roles(guild_id).await?;
        if !guild_roles.iter().any(|role| role.id == role_id) {
            return Ok(Resolution::DanglingRole);
        }

        Ok(Resolution::Found(RoleRequest {
            guild_id,
            user_id: event.user_id,
            role_id,
            action: RoleAction::from(event.kind),
        }))
    }

    /// Handles one reaction event end to end.
    ///
    /// Never returns an error: every failure is logged and reflected in the outcome.
    pub async fn handle(&self, event: &ReactionEvent) -> ReactionOutcome {
        let request = match self.resolve(event).await {
            Ok(Resolution::Found(request)) => request,
            Ok(resolution) => {
                tracing::debug!(
                    "Discarded {:?} reaction {} on message {}: {:?}",
                    event.kind,
                    event.emoji,
                    event.message_id,
                    resolution
                );
                return ReactionOutcome::Discarded(resolution);
            }
            Err(e) => {
                tracing::error!(
                    "Failed to resolve reaction {} on message {}: {:?}",
                    event.emoji,
                    event.message_id,
                    e
                );
                return ReactionOutcome::Failed;
            }
        };

        match self.apply(&request).await {
            Ok(()) => {
                tracing::info!(
                    "{:?} role {} for user {} in guild {}",
                    request.action,
                    request.role_id,
                    request.user_id,
                    request.guild_id
                );
                ReactionOutcome::Applied(request)
            }
            Err(AppError::Forbidden(reason)) => {
                tracing::warn!(
                    "Insufficient permission to {:?} role {} for user {}: {}",
                    request.action,
                    request.role_id,
                    request.user_id,
                    reason
                );
                ReactionOutcome::Forbidden(request)
            }
            Err(e) => {
                tracing::error!(
                    "Failed to {:?} role {} for user {}: {:?}",
                    request.action,
                    request.role_id,
                    request.user_id,
                    e
                );
                ReactionOutcome::Failed
            }
        }
    }

    async fn apply(&self, request: &RoleRequest) -> Result<(), AppError> {
        match request.action {
            RoleAction::Grant => {
                self.platform
                    .grant_role(request.guild_id, request.user_id, request.role_id)
                    .await
            }
            RoleAction::Revoke => {
                self.platform
                    .revoke_role(request.guild_id, request.user_id, request.role_id)
                    .await
            }
        }
    }
}
