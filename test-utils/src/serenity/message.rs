//! Test factory for creating Serenity Message objects.
//!
//! This module provides a factory function for creating mock Serenity
//! `Message` structs for testing purposes. Messages are created by
//! deserializing JSON, simulating what Discord's API would return.

use serenity::all::Message;

/// Creates a test Serenity Message with customizable fields.
///
/// Creates a Message object by deserializing JSON with the provided values.
/// The author is a fixed non-bot test user; all other fields are set to
/// reasonable defaults matching what Discord returns for a plain text
/// message. Message IDs double as pagination cursors in bridge tests, so
/// callers typically assign ascending IDs in chronological order the way
/// Discord snowflakes do.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Discord channel ID the message belongs to (snowflake)
/// - `content` - Message text
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid
///   test data)
pub fn create_test_message(message_id: u64, channel_id: u64, content: &str) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "author": {
            "id": "200000000000000001",
            "username": "testuser",
            "global_name": null,
            "avatar": null,
            "bot": false,
            "system": false,
            "public_flags": null,
        },
        "content": content,
        "timestamp": "2024-01-01T00:00:00Z",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": [],
        "embeds": [],
        "reactions": [],
        "nonce": null,
        "pinned": false,
        "webhook_id": null,
        "type": 0,
        "activity": null,
        "application": null,
        "application_id": null,
        "message_reference": null,
        "flags": 0,
        "referenced_message": null,
        "interaction": null,
        "thread": null,
        "components": [],
        "sticker_items": [],
        "position": null,
        "role_subscription_data": null,
        "guild_id": null,
        "member": null,
    }))
    .expect("test message JSON should deserialize into Message")
}
