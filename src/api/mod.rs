//! Discord API seam between the bridge and serenity.
//!
//! The bridge drives Discord through the `DiscordApi` trait, which covers
//! exactly the REST calls the bridge needs. `SerenityApi` is the production
//! implementation over serenity's HTTP client; tests substitute a
//! call-recording fake. Errors cross this boundary as raw `serenity::Error`
//! values and are given operation context by the bridge.

use std::sync::Arc;

use serenity::all::{
    ChannelId, ChannelType, CreateChannel, EditMessage, GetMessages, GuildChannel, GuildId,
    Message, MessageId,
};
use serenity::async_trait;
use serenity::http::Http;

/// The Discord REST surface consumed by the bridge.
///
/// One method per underlying serenity call. Implementations perform no
/// argument validation and no error wrapping; both belong to the bridge.
#[async_trait]
pub trait DiscordApi: Send + Sync {
    /// Lists every channel in the guild, categories included.
    async fn guild_channels(&self, guild_id: GuildId)
        -> Result<Vec<GuildChannel>, serenity::Error>;

    /// Creates a category channel in the guild.
    async fn create_category(
        &self,
        guild_id: GuildId,
        name: &str,
    ) -> Result<GuildChannel, serenity::Error>;

    /// Creates a text channel parented to the given category.
    async fn create_text_channel(
        &self,
        guild_id: GuildId,
        name: &str,
        parent_id: ChannelId,
    ) -> Result<GuildChannel, serenity::Error>;

    /// Sends a message to a channel.
    async fn send_message(
        &self,
        channel_id: ChannelId,
        content: &str,
    ) -> Result<Message, serenity::Error>;

    /// Replaces the content of an existing message.
    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        content: &str,
    ) -> Result<Message, serenity::Error>;

    /// Deletes a message.
    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), serenity::Error>;

    /// Fetches up to `limit` messages strictly older than `before`, newest
    /// first. `None` starts from the most recent message.
    async fn messages_before(
        &self,
        channel_id: ChannelId,
        before: Option<MessageId>,
        limit: u8,
    ) -> Result<Vec<Message>, serenity::Error>;
}

/// Production `DiscordApi` backed by serenity's HTTP client.
///
/// Holds the same `Arc<Http>` the gateway client uses, so REST calls share
/// serenity's rate-limiter state with the connection.
#[derive(Clone)]
pub struct SerenityApi {
    /// Discord HTTP client for REST requests.
    http: Arc<Http>,
}

impl SerenityApi {
    /// Creates a new API handle over the given HTTP client.
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl DiscordApi for SerenityApi {
    async fn guild_channels(
        &self,
        guild_id: GuildId,
    ) -> Result<Vec<GuildChannel>, serenity::Error> {
        let channels = guild_id.channels(&self.http).await?;
        Ok(channels.into_values().collect())
    }

    async fn create_category(
        &self,
        guild_id: GuildId,
        name: &str,
    ) -> Result<GuildChannel, serenity::Error> {
        guild_id
            .create_channel(
                &self.http,
                CreateChannel::new(name).kind(ChannelType::Category),
            )
            .await
    }

    async fn create_text_channel(
        &self,
        guild_id: GuildId,
        name: &str,
        parent_id: ChannelId,
    ) -> Result<GuildChannel, serenity::Error> {
        guild_id
            .create_channel(
                &self.http,
                CreateChannel::new(name)
                    .kind(ChannelType::Text)
                    .category(parent_id),
            )
            .await
    }

    async fn send_message(
        &self,
        channel_id: ChannelId,
        content: &str,
    ) -> Result<Message, serenity::Error> {
        channel_id.say(&self.http, content).await
    }

    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        content: &str,
    ) -> Result<Message, serenity::Error> {
        channel_id
            .edit_message(&self.http, message_id, EditMessage::new().content(content))
            .await
    }

    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), serenity::Error> {
        channel_id.delete_message(&self.http, message_id).await
    }

    async fn messages_before(
        &self,
        channel_id: ChannelId,
        before: Option<MessageId>,
        limit: u8,
    ) -> Result<Vec<Message>, serenity::Error> {
        let mut request = GetMessages::new().limit(limit);
        if let Some(before) = before {
            request = request.before(before);
        }
        channel_id.messages(&self.http, request).await
    }
}
