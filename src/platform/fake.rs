//! In-memory `Platform` used by tests.
//!
//! Holds a small model of guild state (messages, members and roles) and records every
//! request the core issues so tests can assert exactly which calls were made.
//! Role grants and revocations update the member's role list idempotently, mirroring
//! Discord's behavior for duplicate grants.

use serenity::all::{ChannelId, GuildId, MessageId, ReactionType, RoleId, Timestamp, UserId};
use serenity::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use super::Platform;
use crate::{
    error::AppError,
    model::{
        discord::GuildRole,
        purge::{test_support::message_id_aged, PurgePlan},
        reaction::{RoleAction, RoleRequest},
    },
};

pub const BOT_USER_ID: u64 = 900;

/// How a configured failure surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Forbidden,
    Transport,
}

impl Failure {
    fn into_error(self, action: &str) -> AppError {
        match self {
            Self::Forbidden => AppError::Forbidden(action.to_string()),
            Self::Transport => AppError::InternalError(format!("{} timed out", action)),
        }
    }
}

/// An embed recorded by `send_embed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmbed {
    pub channel_id: ChannelId,
    pub title: String,
    pub description: String,
}

#[derive(Default)]
pub struct FakePlatform {
    messages: HashSet<(ChannelId, MessageId)>,
    roles: HashMap<GuildId, Vec<GuildRole>>,
    members: Mutex<HashMap<(GuildId, UserId), Vec<RoleId>>>,
    /// Newest first, as Discord returns channel history.
    channel_history: Mutex<HashMap<ChannelId, Vec<MessageId>>>,
    role_failure: Option<Failure>,
    reaction_failure: Option<Failure>,
    send_failure: Option<Failure>,
    lookup_failure: Option<Failure>,

    role_requests: Mutex<Vec<RoleRequest>>,
    reactions: Mutex<Vec<(ChannelId, MessageId, ReactionType)>>,
    sent: Mutex<Vec<SentEmbed>>,
    purges: Mutex<Vec<PurgePlan>>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_message(mut self, channel_id: u64, message_id: u64) -> Self {
        self.messages
            .insert((ChannelId::new(channel_id), MessageId::new(message_id)));
        self
    }

    pub fn with_role(mut self, guild_id: u64, role_id: u64, name: &str) -> Self {
        self.roles
            .entry(GuildId::new(guild_id))
            .or_default()
            .push(GuildRole {
                id: RoleId::new(role_id),
                name: name.to_string(),
            });
        self
    }

    pub fn with_member(self, guild_id: u64, user_id: u64, roles: &[u64]) -> Self {
        self.members.lock().unwrap().insert(
            (GuildId::new(guild_id), UserId::new(user_id)),
            roles.iter().copied().map(RoleId::new).collect(),
        );
        self
    }

    /// Fills a channel with `count` messages sent within the last minute.
    pub fn with_channel_history(self, channel_id: u64, count: usize) -> Self {
        let now = Timestamp::now();
        let ids = (0..count as u64)
            .map(|sequence| message_id_aged(now, 0, sequence))
            .collect();

        self.with_channel_messages(channel_id, ids)
    }

    /// Fills a channel with the given messages, newest first.
    pub fn with_channel_messages(self, channel_id: u64, ids: Vec<MessageId>) -> Self {
        self.channel_history
            .lock()
            .unwrap()
            .insert(ChannelId::new(channel_id), ids);
        self
    }

    pub fn failing_role_requests(mut self, failure: Failure) -> Self {
        self.role_failure = Some(failure);
        self
    }

    pub fn failing_reactions(mut self, failure: Failure) -> Self {
        self.reaction_failure = Some(failure);
        self
    }

    pub fn failing_sends(mut self, failure: Failure) -> Self {
        self.send_failure = Some(failure);
        self
    }

    pub fn failing_lookups(mut self, failure: Failure) -> Self {
        self.lookup_failure = Some(failure);
        self
    }

    pub fn role_requests(&self) -> Vec<RoleRequest> {
        self.role_requests.lock().unwrap().clone()
    }

    pub fn reactions(&self) -> Vec<(ChannelId, MessageId, ReactionType)> {
        self.reactions.lock().unwrap().clone()
    }

    pub fn purges(&self) -> Vec<PurgePlan> {
        self.purges.lock().unwrap().clone()
    }

    pub fn sent(&self) -> Vec<SentEmbed> {
        self.sent.lock().unwrap().clone()
    }

    pub fn member_has_role(&self, guild_id: u64, user_id: u64, role_id: u64) -> bool {
        self.members
            .lock()
            .unwrap()
            .get(&(GuildId::new(guild_id), UserId::new(user_id)))
            .is_some_and(|roles| roles.contains(&RoleId::new(role_id)))
    }

    fn record_role_request(&self, request: RoleRequest) -> Result<(), AppError> {
        self.role_requests.lock().unwrap().push(request);

        if let Some(failure) = self.role_failure {
            return Err(failure.into_error("manage roles"));
        }

        let mut members = self.members.lock().unwrap();
        let roles = members
            .get_mut(&(request.guild_id, request.user_id))
            .ok_or_else(|| AppError::NotFound("Unknown Member".to_string()))?;

        match request.action {
            RoleAction::Grant => {
                if !roles.contains(&request.role_id) {
                    roles.push(request.role_id);
                }
            }
            RoleAction::Revoke => roles.retain(|role| *role != request.role_id),
        }

        Ok(())
    }
}

#[async_trait]
impl Platform for FakePlatform {
    fn current_user_id(&self) -> UserId {
        UserId::new(BOT_USER_ID)
    }

    async fn fetch_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), AppError> {
        if let Some(failure) = self.lookup_failure {
            return Err(failure.into_error("fetch message"));
        }

        if self.messages.contains(&(channel_id, message_id)) {
            Ok(())
        } else {
            Err(AppError::NotFound("Unknown Message".to_string()))
        }
    }

    async fn add_reaction(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        reaction: &ReactionType,
    ) -> Result<(), AppError> {
        if let Some(failure) = self.reaction_failure {
            return Err(failure.into_error("add reactions"));
        }

        self.reactions
            .lock()
            .unwrap()
            .push((channel_id, message_id, reaction.clone()));

        Ok(())
    }

    async fn member_roles(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<Vec<RoleId>>, AppError> {
        if let Some(failure) = self.lookup_failure {
            return Err(failure.into_error("fetch member"));
        }

        Ok(self
            .members
            .lock()
            .unwrap()
            .get(&(guild_id, user_id))
            .cloned())
    }

    async fn guild_roles(&self, guild_id: GuildId) -> Result<Vec<GuildRole>, AppError> {
        if let Some(failure) = self.lookup_failure {
            return Err(failure.into_error("fetch roles"));
        }

        Ok(self.roles.get(&guild_id).cloned().unwrap_or_default())
    }

    async fn grant_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.record_role_request(RoleRequest {
            guild_id,
            user_id,
            role_id,
            action: RoleAction::Grant,
        })
    }

    async fn revoke_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.record_role_request(RoleRequest {
            guild_id,
            user_id,
            role_id,
            action: RoleAction::Revoke,
        })
    }

    async fn send_embed(
        &self,
        channel_id: ChannelId,
        title: &str,
        description: &str,
    ) -> Result<(), AppError> {
        if let Some(failure) = self.send_failure {
            return Err(failure.into_error("send messages"));
        }

        self.sent.lock().unwrap().push(SentEmbed {
            channel_id,
            title: title.to_string(),
            description: description.to_string(),
        });

        Ok(())
    }

    async fn purge_messages(&self, channel_id: ChannelId, limit: u8) -> Result<usize, AppError> {
        let mut history = self.channel_history.lock().unwrap();
        let messages = history.entry(channel_id).or_default();
        let take = messages.len().min(limit as usize);
        let ids: Vec<MessageId> = messages.drain(..take).collect();

        let plan = PurgePlan::new(&ids, Timestamp::now());
        let deleted = plan.len();
        self.purges.lock().unwrap().push(plan);

        Ok(deleted)
    }
}
