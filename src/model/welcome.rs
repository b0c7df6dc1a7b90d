use serenity::all::ChannelId;

use crate::error::AppError;

/// Placeholder replaced by the joining member's mention.
pub const MEMBER_PLACEHOLDER: &str = "{member}";

/// Welcome message configuration for a single guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeConfig {
    pub title: String,
    pub description: String,
    pub channel_id: ChannelId,
}

impl WelcomeConfig {
    /// Substitutes `mention` for every `{member}` in the description template.
    pub fn render_description(&self, mention: &str) -> String {
        self.description.replace(MEMBER_PLACEHOLDER, mention)
    }
}

/// Parameters for setting a welcome configuration, as supplied by the command.
#[derive(Debug, Clone, Default)]
pub struct SetWelcomeParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub channel_id: Option<ChannelId>,
}

impl SetWelcomeParams {
    /// Validates that all three fields are present.
    ///
    /// Blank text counts as missing.
    ///
    /// # Returns
    /// - `Ok(WelcomeConfig)` - Every field was provided
    /// - `Err(AppError::BadRequest)` - Lists the missing fields
    pub fn into_config(self) -> Result<WelcomeConfig, AppError> {
        let title = self.title.filter(|t| !t.trim().is_empty());
        let description = self.description.filter(|d| !d.trim().is_empty());

        let mut missing = Vec::new();
        if title.is_none() {
            missing.push("title");
        }
        if description.is_none() {
            missing.push("description");
        }
        if self.channel_id.is_none() {
            missing.push("channel");
        }

        match (title, description, self.channel_id) {
            (Some(title), Some(description), Some(channel_id)) => Ok(WelcomeConfig {
                title,
                description,
                channel_id,
            }),
            _ => Err(AppError::BadRequest(format!(
                "Missing field: {}",
                missing.join(", ")
            ))),
        }
    }
}
