//! Reaction-role domain types.

use std::fmt;

use serenity::all::{EmojiId, GuildId, MessageId, Reaction, ReactionType, RoleId, UserId};

use crate::error::AppError;

/// Identity of an emoji as a binding key.
///
/// Unicode emoji are keyed by their text. Custom emoji are keyed by ID only, so a
/// renamed custom emoji still resolves to the same binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EmojiKey {
    Unicode(String),
    Custom(EmojiId),
}

impl EmojiKey {
    /// Parses emoji text typed into a command option.
    ///
    /// Accepts a Unicode emoji or a custom emoji in `<:name:id>` / `<a:name:id>` form.
    ///
    /// # Returns
    /// - `Ok((EmojiKey, ReactionType))` - Key for the store and reaction to attach
    /// - `Err(AppError::BadRequest)` - Input is empty or a malformed custom emoji
    pub fn parse(input: &str) -> Result<(Self, ReactionType), AppError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(AppError::BadRequest("Emoji must not be empty".to_string()));
        }

        let reaction = ReactionType::try_from(input)
            .map_err(|_| AppError::BadRequest(format!("'{}' is not a valid emoji", input)))?;

        Ok((Self::from(&reaction), reaction))
    }
}

impl From<&ReactionType> for EmojiKey {
    fn from(reaction: &ReactionType) -> Self {
        match reaction {
            ReactionType::Custom { id, .. } => Self::Custom(*id),
            ReactionType::Unicode(text) => Self::Unicode(text.clone()),
            other => Self::Unicode(other.to_string()),
        }
    }
}

impl fmt::Display for EmojiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unicode(text) => write!(f, "{}", text),
            Self::Custom(id) => write!(f, "emoji:{}", id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionKind {
    Add,
    Remove,
}

/// A reaction gateway event reduced to the fields the router needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionEvent {
    pub kind: ReactionKind,
    /// `None` for reactions in direct messages.
    pub guild_id: Option<GuildId>,
    pub message_id: MessageId,
    pub user_id: UserId,
    pub emoji: EmojiKey,
}

impl ReactionEvent {
    /// Builds an event from a Serenity reaction payload.
    ///
    /// Returns `None` when the payload carries no user, which Discord only does for
    /// reactions it cannot attribute; there is nobody to grant a role to.
    pub fn from_reaction(kind: ReactionKind, reaction: &Reaction) -> Option<Self> {
        Some(Self {
            kind,
            guild_id: reaction.guild_id,
            message_id: reaction.message_id,
            user_id: reaction.user_id?,
            emoji: EmojiKey::from(&reaction.emoji),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleAction {
    Grant,
    Revoke,
}

impl From<ReactionKind> for RoleAction {
    fn from(kind: ReactionKind) -> Self {
        match kind {
            ReactionKind::Add => Self::Grant,
            ReactionKind::Remove => Self::Revoke,
        }
    }
}

/// A membership mutation to issue against the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleRequest {
    pub guild_id: GuildId,
    pub user_id: UserId,
    pub role_id: RoleId,
    pub action: RoleAction,
}

/// Outcome of resolving a reaction event against the binding store and the guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Binding, member and role all resolved.
    Found(RoleRequest),
    /// The reaction was made in a direct message.
    OutsideGuild,
    /// The bot's own reaction, e.g. the one attached when binding.
    OwnReaction,
    /// No binding for this (message, emoji).
    NoBinding,
    /// The reacting user is no longer a member of the guild.
    MemberGone,
    /// The bound role has been deleted from the guild.
    DanglingRole,
}

/// Final outcome of handling a reaction event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionOutcome {
    Applied(RoleRequest),
    /// Never holds `Resolution::Found`.
    Discarded(Resolution),
    /// The bot lacks permission to change this member's roles.
    Forbidden(RoleRequest),
    /// A lookup or the role request failed for another reason.
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{create_test_custom_reaction, create_test_reaction};

    #[test]
    fn parses_unicode_emoji() {
        let (key, reaction) = EmojiKey::parse("✅").unwrap();
        assert_eq!(key, EmojiKey::Unicode("✅".to_string()));
        assert_eq!(reaction, ReactionType::Unicode("✅".to_string()));
    }

    #[test]
    fn custom_emoji_keyed_by_id() {
        let (key, _) = EmojiKey::parse("<:party:123456789012345678>").unwrap();
        assert_eq!(key, EmojiKey::Custom(EmojiId::new(123456789012345678)));

        let renamed = ReactionType::Custom {
            animated: false,
            id: EmojiId::new(123456789012345678),
            name: Some("renamed".to_string()),
        };
        assert_eq!(EmojiKey::from(&renamed), key);
    }

    #[test]
    fn rejects_blank_emoji() {
        assert!(matches!(EmojiKey::parse("   "), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn event_from_guild_reaction() {
        let reaction = create_test_reaction(123, 7, Some(1), "✅");

        let event = ReactionEvent::from_reaction(ReactionKind::Add, &reaction).unwrap();
        assert_eq!(event.kind, ReactionKind::Add);
        assert_eq!(event.guild_id, Some(GuildId::new(1)));
        assert_eq!(event.message_id, MessageId::new(123));
        assert_eq!(event.user_id, UserId::new(7));
        assert_eq!(event.emoji, EmojiKey::Unicode("✅".to_string()));
    }

    #[test]
    fn event_from_direct_message_reaction_has_no_guild() {
        let reaction = create_test_reaction(123, 7, None, "✅");

        let event = ReactionEvent::from_reaction(ReactionKind::Remove, &reaction).unwrap();
        assert_eq!(event.guild_id, None);
    }

    #[test]
    fn event_from_custom_reaction_keyed_by_id() {
        let reaction = create_test_custom_reaction(123, 7, Some(1), 555, "party");

        let event = ReactionEvent::from_reaction(ReactionKind::Add, &reaction).unwrap();
        assert_eq!(event.emoji, EmojiKey::Custom(EmojiId::new(555)));
    }

    #[test]
    fn reaction_kind_maps_to_action() {
        assert_eq!(RoleAction::from(ReactionKind::Add), RoleAction::Grant);
        assert_eq!(RoleAction::from(ReactionKind::Remove), RoleAction::Revoke);
    }
}
