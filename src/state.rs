//! Bot state shared across all event and command handlers.
//!
//! `BotState` is created once at startup and moved into the Serenity event handler.
//! All fields are cheap to clone: the stores share their maps through `Arc`, and
//! configuration is read-only after startup.

use std::sync::Arc;

use crate::{
    config::Config,
    data::{BindingStore, WelcomeRegistry},
};

#[derive(Clone)]
pub struct BotState {
    /// Configuration loaded from the environment at startup.
    pub config: Arc<Config>,

    /// Reaction-role bindings, read by the reaction router and written by
    /// `/reactionrole`.
    pub bindings: BindingStore,

    /// Per-guild welcome settings, read on member join and written by `/welcome`.
    pub welcome: WelcomeRegistry,
}

impl BotState {
    /// Creates state with empty stores; nothing survives a restart.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            bindings: BindingStore::new(),
            welcome: WelcomeRegistry::new(),
        }
    }
}
