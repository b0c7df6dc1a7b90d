use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The acting user does not hold the administrative role.
    ///
    /// Terminal for the invocation: the operation is neither retried nor escalated.
    ///
    /// # Fields
    /// - Discord ID of the user that was denied
    /// - Name of the operation that was attempted
    #[error("User {0} is not permitted to {1}")]
    AccessDenied(u64, String),

    /// The command was invoked outside of a guild, where roles do not exist.
    #[error("Command requires a guild context")]
    NotInGuild,
}

impl AuthError {
    /// Maps authorization errors to the reply shown to the invoking user.
    ///
    /// Denials are logged at debug level while the reply stays generic.
    pub fn user_message(&self) -> String {
        tracing::debug!("{}", self);

        match self {
            Self::AccessDenied(_, _) => "⚠️ You are not permitted to use this command".to_string(),
            Self::NotInGuild => "⚠️ This command can only be used in a server".to_string(),
        }
    }
}
