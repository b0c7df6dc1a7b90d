//! Stateless helper commands: dice rolls and channel purges.

use rand::Rng;
use serenity::all::ChannelId;

use crate::{error::AppError, platform::Platform};

pub const DICE_MIN: i64 = 1;
pub const DICE_MAX: i64 = 100;

/// Most messages a single purge may delete (Discord's bulk delete limit).
pub const PURGE_LIMIT: i64 = 100;

/// Rolls a die uniformly in `min..=max`.
///
/// # Returns
/// - `Ok(i64)` - The rolled value
/// - `Err(AppError::BadRequest)` - Range is outside `1 <= min <= max <= 100`
pub fn roll_dice(min: i64, max: i64) -> Result<i64, AppError> {
    if min < DICE_MIN || max > DICE_MAX || min > max {
        return Err(AppError::BadRequest(format!(
            "Please enter a valid range ({} ≤ min ≤ max ≤ {})",
            DICE_MIN, DICE_MAX
        )));
    }

    Ok(rand::rng().random_range(min..=max))
}

/// Deletes the most recent `count` messages in a channel.
///
/// # Returns
/// - `Ok(usize)` - Number of messages deleted
/// - `Err(AppError::BadRequest)` - `count` is outside `1..=100`
pub async fn purge(
    platform: &dyn Platform,
    channel_id: ChannelId,
    count: i64,
) -> Result<usize, AppError> {
    let limit = u8::try_from(count)
        .ok()
        .filter(|limit| (1..=PURGE_LIMIT).contains(&i64::from(*limit)))
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "Count must be between 1 and {}",
                PURGE_LIMIT
            ))
        })?;

    let deleted = platform.purge_messages(channel_id, limit).await?;
    tracing::info!("Purged {} messages in channel {}", deleted, channel_id);

    Ok(deleted)
}
