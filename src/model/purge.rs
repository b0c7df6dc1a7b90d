//! Splitting a purge between bulk and single deletes.
//!
//! Discord's bulk delete endpoint takes 2 to 100 messages and rejects the whole
//! request if any of them is older than 14 days. Older messages have to be deleted
//! one at a time.

use serenity::all::{MessageId, Timestamp};

/// Oldest message age, in seconds, that bulk delete accepts.
pub const BULK_DELETE_MAX_AGE_SECS: i64 = 14 * 24 * 60 * 60;

/// Messages to delete, grouped by how they must be deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurgePlan {
    /// Recent messages for a single bulk request. Empty or at least two long.
    pub bulk: Vec<MessageId>,
    /// Messages deleted individually.
    pub single: Vec<MessageId>,
}

impl PurgePlan {
    /// Groups `ids` by age relative to `now`, keeping their order.
    ///
    /// A lone recent message is deleted individually since bulk delete needs two.
    pub fn new(ids: &[MessageId], now: Timestamp) -> Self {
        let cutoff = now.unix_timestamp() - BULK_DELETE_MAX_AGE_SECS;

        let (mut bulk, mut single): (Vec<MessageId>, Vec<MessageId>) = ids
            .iter()
            .partition(|id| id.created_at().unix_timestamp() > cutoff);

        if bulk.len() == 1 {
            single.insert(0, bulk.remove(0));
        }

        Self { bulk, single }
    }

    /// Total number of messages in the plan.
    pub fn len(&self) -> usize {
        self.bulk.len() + self.single.len()
    }
}
