//! Environment-based bridge configuration.
//!
//! The bridge itself takes its token and guild ID as plain constructor
//! arguments; where those values come from is the caller's business. For
//! callers that keep them in the environment, `BridgeConfig::from_env`
//! loads the conventional variables.

use crate::error::{BridgeError, ConfigError};

/// Bot credentials and target guild for a bridge instance.
#[derive(Debug)]
pub struct BridgeConfig {
    /// Discord bot token (secret).
    pub token: String,
    /// Identifier of the guild all operations are scoped to.
    pub guild_id: String,
}

impl BridgeConfig {
    /// Loads configuration from `DISCORD_BOT_TOKEN` and `DISCORD_GUILD_ID`.
    ///
    /// # Returns
    /// - `Ok(BridgeConfig)` - Both variables present
    /// - `Err(BridgeError::Config(MissingEnvVar))` - Named variable missing
    pub fn from_env() -> Result<Self, BridgeError> {
        Ok(Self {
            token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            guild_id: std::env::var("DISCORD_GUILD_ID")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_GUILD_ID".to_string()))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations cannot race a parallel sibling.
    #[test]
    fn reads_environment_and_names_missing_variable() {
        std::env::remove_var("DISCORD_BOT_TOKEN");
        std::env::remove_var("DISCORD_GUILD_ID");

        let err = BridgeConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("DISCORD_BOT_TOKEN"));

        std::env::set_var("DISCORD_BOT_TOKEN", "test-token");
        std::env::set_var("DISCORD_GUILD_ID", "123456789012345678");

        let config = BridgeConfig::from_env().unwrap();
        assert_eq!(config.token, "test-token");
        assert_eq!(config.guild_id, "123456789012345678");

        std::env::remove_var("DISCORD_BOT_TOKEN");
        std::env::remove_var("DISCORD_GUILD_ID");
    }
}
