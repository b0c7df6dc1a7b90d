//! Test factory for creating Serenity Role objects.

use serenity::all::Role;

/// Creates a guild role as returned by `GET /guilds/{id}/roles`.
///
/// Only the ID and name matter to role lookups; the role is uncoloured, sits at
/// position 1 and carries no permissions.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name, the field the admin gate and join role match on
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
pub fn create_test_role(role_id: u64, name: &str) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": 0,
        "colors": {
            "primary_color": 0,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "position": 1,
        "permissions": "0",
        "hoist": false,
        "managed": false,
        "mentionable": false,
        "flags": 0,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
