use crate::error::{config::ConfigError, AppError};

const DEFAULT_ADMIN_ROLE_NAME: &str = "管理員";
const DEFAULT_JOIN_ROLE_NAME: &str = "脆友";

pub struct Config {
    pub discord_token: String,

    /// Name of the role that gates every mutating command.
    pub admin_role_name: String,
    /// Role granted automatically to members when they join, if the guild has it.
    pub join_role_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup.
    ///
    /// Unset and blank values are both treated as absent.
    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let discord_token = match lookup("DISCORD_TOKEN") {
            None => return Err(ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()).into()),
            Some(token) if token.trim().is_empty() => {
                return Err(ConfigError::EmptyEnvVar("DISCORD_TOKEN".to_string()).into())
            }
            Some(token) => token,
        };

        Ok(Self {
            discord_token,
            admin_role_name: var("ADMIN_ROLE_NAME")
                .unwrap_or_else(|| DEFAULT_ADMIN_ROLE_NAME.to_string()),
            join_role_name: var("JOIN_ROLE_NAME")
                .unwrap_or_else(|| DEFAULT_JOIN_ROLE_NAME.to_string()),
        })
    }
}
