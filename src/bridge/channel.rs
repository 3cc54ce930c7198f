//! Category and text-channel operations.
//!
//! Creation and lookup work against the live channel list; nothing is
//! cached, so every call re-fetches from Discord. Category names are kept
//! unique by a check-then-create step. Text channels deliberately get no
//! such check and may share names.

use serenity::all::{ChannelType, GuildChannel};
use tracing::debug;

use crate::api::DiscordApi;
use crate::error::BridgeError;
use crate::util::parse::parse_channel_id;

use super::CordBridge;

impl<A: DiscordApi> CordBridge<A> {
    /// Creates a category channel with a unique name.
    ///
    /// Lists the guild's channels first and refuses to create a second
    /// category with the same name (case-sensitive exact match). The check
    /// and the create are separate requests; a concurrent caller creating
    /// the same category between them can still produce a duplicate. Discord
    /// offers no atomic create-if-absent, so the race is documented rather
    /// than eliminated.
    ///
    /// # Arguments
    /// - `name` - Name for the new category
    ///
    /// # Returns
    /// - `Ok(GuildChannel)` - The created category
    /// - `Err(BridgeError::AlreadyExists)` - A category with this name exists
    /// - `Err(BridgeError::Discord)` - Listing or creation failed
    pub async fn create_category(&self, name: &str) -> Result<GuildChannel, BridgeError> {
        let channels = self
            .api
            .guild_channels(self.guild_id)
            .await
            .map_err(|e| BridgeError::discord("fetching channels", e))?;

        if channels
            .iter()
            .any(|ch| ch.name == name && ch.kind == ChannelType::Category)
        {
            return Err(BridgeError::AlreadyExists(name.to_string()));
        }

        let category = self
            .api
            .create_category(self.guild_id, name)
            .await
            .map_err(|e| BridgeError::discord("creating category", e))?;

        debug!(guild_id = %self.guild_id, name, "created category");
        Ok(category)
    }

    /// Creates a text channel under a category.
    ///
    /// No existence check is performed; unlike categories, duplicate channel
    /// names are allowed by design.
    ///
    /// # Arguments
    /// - `name` - Name for the new channel
    /// - `category_id` - Snowflake of the parent category, as a string
    ///
    /// # Returns
    /// - `Ok(GuildChannel)` - The created text channel
    /// - `Err(BridgeError::InvalidArgument)` - Category ID failed to parse
    /// - `Err(BridgeError::Discord)` - Creation failed
    pub async fn create_channel(
        &self,
        name: &str,
        category_id: &str,
    ) -> Result<GuildChannel, BridgeError> {
        let category_id = parse_channel_id(category_id)?;

        let channel = self
            .api
            .create_text_channel(self.guild_id, name, category_id)
            .await
            .map_err(|e| BridgeError::discord("creating channel", e))?;

        debug!(guild_id = %self.guild_id, name, %category_id, "created channel");
        Ok(channel)
    }

    /// Looks up a text channel by name within a category.
    ///
    /// Returns the first channel matching name, parent category, and text
    /// kind exactly. Absence is not failure: a guild without such a channel
    /// yields `Ok(None)`.
    ///
    /// # Arguments
    /// - `name` - Channel name to match (case-sensitive)
    /// - `category_id` - Snowflake of the parent category, as a string
    ///
    /// # Returns
    /// - `Ok(Some(GuildChannel))` - First matching text channel
    /// - `Ok(None)` - No channel matched
    /// - `Err(BridgeError::InvalidArgument)` - Category ID failed to parse
    /// - `Err(BridgeError::Discord)` - Listing failed
    pub async fn find_channel_by_name(
        &self,
        name: &str,
        category_id: &str,
    ) -> Result<Option<GuildChannel>, BridgeError> {
        let category_id = parse_channel_id(category_id)?;

        let channels = self
            .api
            .guild_channels(self.guild_id)
            .await
            .map_err(|e| BridgeError::discord("fetching channels", e))?;

        Ok(channels.into_iter().find(|ch| {
            ch.name == name && ch.parent_id == Some(category_id) && ch.kind == ChannelType::Text
        }))
    }
}
