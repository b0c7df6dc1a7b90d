//! Error types and command-boundary reply mapping.
//!
//! `AppError` is the top-level error type for the bot. It wraps domain-specific errors
//! and provides `user_message` for turning any error into the ephemeral reply sent back
//! to the user who invoked a slash command. Gateway event handlers have no one to reply
//! to, so they log the error instead.

pub mod auth;
pub mod config;

use serenity::http::HttpError;
use thiserror::Error;

use crate::error::{auth::AuthError, config::ConfigError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. Serenity errors are classified
/// by their HTTP status so that callers can tell "the resource is gone" and "the bot
/// lacks permission" apart from transport failures.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authorization error.
    ///
    /// Terminal for the invocation; the user is told they are not permitted.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Discord API error from Serenity that is neither a 403 nor a 404.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Resource not found error (message, member, role, channel or guild config).
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// The bot itself lacks the platform permission to complete an action.
    ///
    /// # Fields
    /// - Message describing the denied action
    #[error("Missing permission: {0}")]
    Forbidden(String),

    /// Invalid input error, reported before any state changes.
    ///
    /// # Fields
    /// - Message describing what was invalid about the input
    #[error("{0}")]
    BadRequest(String),

    /// Internal error with custom message.
    ///
    /// The message is logged but a generic message is returned to the user.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Unsuccessful HTTP responses with status 403 or 404 map to `Forbidden` and `NotFound`.
/// Everything else is boxed into `DiscordErr` to keep the enum small.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        if let serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) = &err {
            match response.status_code.as_u16() {
                403 => return AppError::Forbidden(response.error.message.clone()),
                404 => return AppError::NotFound(response.error.message.clone()),
                _ => {}
            }
        }

        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts the error into the ephemeral reply shown to the invoking user.
    ///
    /// Internal failures are logged with full details and replaced by a generic
    /// message to avoid leaking implementation details.
    ///
    /// # Returns
    /// - `String` - Reply content for the slash command response
    pub fn user_message(&self) -> String {
        match self {
            Self::AuthErr(err) => err.user_message(),
            Self::NotFound(msg) => format!("❌ Not found: {}", msg),
            Self::Forbidden(msg) => format!("❌ I don't have permission to do that ({})", msg),
            Self::BadRequest(msg) => format!("❌ {}", msg),
            err => {
                tracing::error!("Command failed: {}", err);
                "❌ Something went wrong, please try again.".to_string()
            }
        }
    }
}
