//! Reaction-role binding store.
//!
//! Maps (message ID, emoji) to the role granted when a user reacts with that emoji.
//! Bindings are grouped per message, so each message owns a sub-mapping of
//! emoji to role. There is no unbind: rebinding a key replaces its role.

use serenity::all::{MessageId, RoleId};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::model::reaction::EmojiKey;

/// Store of reaction-role bindings keyed by message and emoji.
#[derive(Clone, Default)]
pub struct BindingStore {
    bindings: Arc<RwLock<HashMap<MessageId, HashMap<EmojiKey, RoleId>>>>,
}

impl BindingStore {
    /// Creates an empty binding store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a binding, replacing any role previously bound to the same key.
    ///
    /// Callers must have passed the admin authorization check first; this store
    /// does not check permissions itself.
    ///
    /// # Returns
    /// - `Some(RoleId)` - The role this binding superseded
    /// - `None` - The key was not bound before
    pub async fn insert(
        &self,
        message_id: MessageId,
        emoji: EmojiKey,
        role_id: RoleId,
    ) -> Option<RoleId> {
        self.bindings
            .write()
            .await
            .entry(message_id)
            .or_default()
            .insert(emoji, role_id)
    }

    /// Looks up the role bound to a reaction.
    ///
    /// A missing key is a normal outcome meaning the reaction is untracked.
    pub async fn resolve(&self, message_id: MessageId, emoji: &EmojiKey) -> Option<RoleId> {
        self.bindings
            .read()
            .await
            .get(&message_id)
            .and_then(|emojis| emojis.get(emoji))
            .copied()
    }

    /// Total number of bindings across all messages.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.bindings.read().await.values().map(HashMap::len).sum()
    }
}
