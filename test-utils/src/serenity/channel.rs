//! Test factory for creating Serenity GuildChannel objects.
//!
//! This module provides a factory function for creating mock Serenity
//! `GuildChannel` structs for testing purposes. Channels are created by
//! deserializing JSON, simulating what Discord's API would return.

use serenity::all::{ChannelType, GuildChannel};

/// Creates a test Serenity GuildChannel with customizable fields.
///
/// Creates a GuildChannel object by deserializing JSON with the provided
/// values. All fields not exposed as arguments are set to reasonable
/// defaults matching what Discord returns for a plain guild channel.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Channel name
/// - `kind` - Channel type (e.g. `ChannelType::Text`, `ChannelType::Category`)
/// - `parent_id` - Optional parent category ID (snowflake)
///
/// # Returns
/// - `GuildChannel` - A valid Serenity GuildChannel struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates
///   invalid test data)
pub fn create_test_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    kind: ChannelType,
    parent_id: Option<u64>,
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "name": name,
        "type": serde_json::to_value(kind).expect("channel type should serialize"),
        "parent_id": parent_id.map(|id| id.to_string()),
        "position": 0,
        "permission_overwrites": [],
        "nsfw": false,
        "rate_limit_per_user": 0,
        "bitrate": null,
        "user_limit": null,
        "topic": null,
        "last_message_id": null,
        "last_pin_timestamp": null,
        "rtc_region": null,
        "video_quality_mode": null,
        "message_count": null,
        "member_count": null,
        "thread_metadata": null,
        "member": null,
        "default_auto_archive_duration": null,
        "flags": 0,
        "total_message_sent": null,
        "available_tags": [],
        "applied_tags": [],
        "default_reaction_emoji": null,
        "default_thread_rate_limit_per_user": null,
        "default_sort_order": null,
        "default_forum_layout": null,
        "status": null,
    }))
    .expect("test channel JSON should deserialize into GuildChannel")
}
