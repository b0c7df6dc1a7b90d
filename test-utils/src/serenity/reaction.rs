//! Test factories for gateway reaction payloads.
//!
//! `MESSAGE_REACTION_ADD` and `MESSAGE_REACTION_REMOVE` share the same shape, so a
//! single factory covers both. Reactions in direct messages carry no guild ID.

use serenity::all::Reaction;
use serde_json::Value;

const TEST_CHANNEL_ID: u64 = 10;

fn reaction_from_emoji(message_id: u64, user_id: u64, guild_id: Option<u64>, emoji: Value) -> Reaction {
    serde_json::from_value(serde_json::json!({
        "channel_id": TEST_CHANNEL_ID.to_string(),
        "message_id": message_id.to_string(),
        "user_id": user_id.to_string(),
        "guild_id": guild_id.map(|id| id.to_string()),
        "emoji": emoji,
        "burst": false,
        "burst_colors": [],
        "type": 0,
    }))
    .expect("Failed to create test reaction - invalid JSON structure")
}

/// Creates a reaction payload for a Unicode emoji.
///
/// # Arguments
/// - `message_id` - Message the reaction was added to or removed from
/// - `user_id` - User who reacted
/// - `guild_id` - Guild of the message, `None` for a direct message
/// - `emoji` - Unicode emoji text, e.g. `"✅"`
///
/// # Panics
/// - If the JSON cannot be deserialized into a Reaction (indicates invalid test data)
pub fn create_test_reaction(message_id: u64, user_id: u64, guild_id: Option<u64>, emoji: &str) -> Reaction {
    reaction_from_emoji(
        message_id,
        user_id,
        guild_id,
        serde_json::json!({ "id": null, "name": emoji }),
    )
}

/// Creates a reaction payload for a custom guild emoji.
///
/// # Panics
/// - If the JSON cannot be deserialized into a Reaction (indicates invalid test data)
pub fn create_test_custom_reaction(
    message_id: u64,
    user_id: u64,
    guild_id: Option<u64>,
    emoji_id: u64,
    emoji_name: &str,
) -> Reaction {
    reaction_from_emoji(
        message_id,
        user_id,
        guild_id,
        serde_json::json!({
            "id": emoji_id.to_string(),
            "name": emoji_name,
            "animated": false,
        }),
    )
}
