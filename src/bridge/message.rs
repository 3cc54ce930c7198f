//! Message operations: send, edit, delete, and paginated history reads.
//!
//! History retrieval walks Discord's cursor-based pagination, passing the
//! last-seen message ID as the exclusive upper bound for the next page and
//! sleeping 250ms between page requests to stay under the API's request
//! budget. The sleep is a proactive throttle, not a retry mechanism, and it
//! blocks the calling task on purpose.
//!
//! The two read operations deliberately order their results differently:
//! [`read_all_messages_from_channel`](CordBridge::read_all_messages_from_channel)
//! returns pages concatenated as received (newest first), while
//! [`read_last_messages_from_channel`](CordBridge::read_last_messages_from_channel)
//! reverses its result into chronological order.

use std::time::Duration;

use serenity::all::{Message, MessageId};
use tokio::time::sleep;
use tracing::debug;

use crate::api::DiscordApi;
use crate::error::BridgeError;
use crate::util::parse::{parse_channel_id, parse_message_id};

use super::CordBridge;

/// Largest page size Discord's message-history endpoint accepts.
const MAX_PAGE_SIZE: u8 = 100;

/// Pause between page requests, to respect rate limits.
pub(super) const PAGE_DELAY: Duration = Duration::from_millis(250);

impl<A: DiscordApi> CordBridge<A> {
    /// Sends a message to a channel.
    ///
    /// # Arguments
    /// - `channel_id` - Snowflake of the target channel, as a string
    /// - `content` - Message text
    ///
    /// # Returns
    /// - `Ok(Message)` - The message as Discord recorded it
    /// - `Err(BridgeError::InvalidArgument)` - Channel ID empty or malformed
    /// - `Err(BridgeError::Discord)` - Send failed
    pub async fn send_message_to_channel(
        &self,
        channel_id: &str,
        content: &str,
    ) -> Result<Message, BridgeError> {
        let channel_id = parse_channel_id(channel_id)?;

        self.api
            .send_message(channel_id, content)
            .await
            .map_err(|e| BridgeError::discord("sending message", e))
    }

    /// Replaces the content of an existing message.
    ///
    /// # Arguments
    /// - `channel_id` - Snowflake of the channel holding the message
    /// - `message_id` - Snowflake of the message to edit
    /// - `new_content` - Replacement text
    ///
    /// # Returns
    /// - `Ok(Message)` - The edited message
    /// - `Err(BridgeError::InvalidArgument)` - Either ID empty or malformed
    /// - `Err(BridgeError::Discord)` - Edit failed
    pub async fn edit_message_by_id(
        &self,
        channel_id: &str,
        message_id: &str,
        new_content: &str,
    ) -> Result<Message, BridgeError> {
        let channel_id = parse_channel_id(channel_id)?;
        let message_id = parse_message_id(message_id)?;

        self.api
            .edit_message(channel_id, message_id, new_content)
            .await
            .map_err(|e| BridgeError::discord("editing message", e))
    }

    /// Deletes a message.
    ///
    /// # Arguments
    /// - `channel_id` - Snowflake of the channel holding the message
    /// - `message_id` - Snowflake of the message to delete
    ///
    /// # Returns
    /// - `Ok(())` - Message deleted
    /// - `Err(BridgeError::InvalidArgument)` - Either ID empty or malformed
    /// - `Err(BridgeError::Discord)` - Deletion failed
    pub async fn delete_message_by_id(
        &self,
        channel_id: &str,
        message_id: &str,
    ) -> Result<(), BridgeError> {
        let channel_id = parse_channel_id(channel_id)?;
        let message_id = parse_message_id(message_id)?;

        self.api
            .delete_message(channel_id, message_id)
            .await
            .map_err(|e| BridgeError::discord("deleting message", e))
    }

    /// Reads a channel's entire message history, newest first.
    ///
    /// Fetches pages of up to 100 messages older than the last-seen ID until
    /// an empty page arrives, concatenating pages in the order received —
    /// Discord's newest-first default — with no reversal. Sleeps 250ms
    /// between page requests. Unbounded except by channel history size.
    ///
    /// # Arguments
    /// - `channel_id` - Snowflake of the channel to read, as a string
    ///
    /// # Returns
    /// - `Ok(Vec<Message>)` - All messages, newest first
    /// - `Err(BridgeError::InvalidArgument)` - Channel ID empty or malformed
    /// - `Err(BridgeError::Discord)` - A page fetch failed
    pub async fn read_all_messages_from_channel(
        &self,
        channel_id: &str,
    ) -> Result<Vec<Message>, BridgeError> {
        let channel_id = parse_channel_id(channel_id)?;

        let mut all_messages = Vec::new();
        let mut last_id: Option<MessageId> = None;

        loop {
            let page = self
                .api
                .messages_before(channel_id, last_id, MAX_PAGE_SIZE)
                .await
                .map_err(|e| BridgeError::discord("reading messages", e))?;

            if page.is_empty() {
                break;
            }

            debug!(%channel_id, count = page.len(), "fetched message page");
            last_id = page.last().map(|m| m.id);
            all_messages.extend(page);

            sleep(PAGE_DELAY).await;
        }

        Ok(all_messages)
    }

    /// Reads the most recent messages of a channel, in chronological order.
    ///
    /// Fetches pages of `min(remaining, 100)` with the same cursor technique
    /// as [`read_all_messages_from_channel`](Self::read_all_messages_from_channel),
    /// stopping once `count` messages are collected or a page comes back
    /// empty, then reverses the accumulated sequence so the result runs
    /// oldest first. A channel holding fewer than `count` messages yields
    /// them all.
    ///
    /// # Arguments
    /// - `channel_id` - Snowflake of the channel to read, as a string
    /// - `count` - Number of most-recent messages to fetch; must be positive
    ///
    /// # Returns
    /// - `Ok(Vec<Message>)` - Up to `count` messages, oldest first
    /// - `Err(BridgeError::InvalidArgument)` - Zero count, or channel ID
    ///   empty or malformed
    /// - `Err(BridgeError::Discord)` - A page fetch failed
    pub async fn read_last_messages_from_channel(
        &self,
        channel_id: &str,
        count: usize,
    ) -> Result<Vec<Message>, BridgeError> {
        if count == 0 {
            return Err(BridgeError::InvalidArgument(
                "message count must be positive".to_string(),
            ));
        }

        let channel_id = parse_channel_id(channel_id)?;

        let mut messages = Vec::new();
        let mut last_id: Option<MessageId> = None;
        let mut remaining = count;

        while remaining > 0 {
            let limit = remaining.min(usize::from(MAX_PAGE_SIZE)) as u8;

            let page = self
                .api
                .messages_before(channel_id, last_id, limit)
                .await
                .map_err(|e| BridgeError::discord("reading messages", e))?;

            if page.is_empty() {
                break;
            }

            debug!(%channel_id, count = page.len(), "fetched message page");
            last_id = page.last().map(|m| m.id);
            remaining = remaining.saturating_sub(page.len());
            messages.extend(page);

            sleep(PAGE_DELAY).await;
        }

        messages.reverse();
        Ok(messages)
    }
}
