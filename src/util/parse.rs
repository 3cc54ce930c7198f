//! Parsing of caller-supplied identifier strings.
//!
//! Discord snowflakes are non-zero u64 values. The bridge accepts
//! identifiers as strings and validates them here, before any network call,
//! so malformed input never reaches the Discord API.

use serenity::all::{ChannelId, GuildId, MessageId};

use crate::error::BridgeError;

/// Parses a snowflake from a string, naming the field on failure.
///
/// # Arguments
/// - `field` - Name of the identifier being parsed, used in error messages
/// - `value` - The string to parse
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed non-zero snowflake
/// - `Err(BridgeError::InvalidArgument)` - Empty, non-numeric, or zero input
fn parse_snowflake(field: &str, value: &str) -> Result<u64, BridgeError> {
    if value.is_empty() {
        return Err(BridgeError::InvalidArgument(format!("{field} is empty")));
    }

    let id = value.parse::<u64>().map_err(|_| {
        BridgeError::InvalidArgument(format!("{field} is not a valid snowflake: '{value}'"))
    })?;

    if id == 0 {
        return Err(BridgeError::InvalidArgument(format!("{field} is zero")));
    }

    Ok(id)
}

/// Parses a guild identifier string.
pub fn parse_guild_id(value: &str) -> Result<GuildId, BridgeError> {
    parse_snowflake("guild id", value).map(GuildId::new)
}

/// Parses a channel identifier string.
pub fn parse_channel_id(value: &str) -> Result<ChannelId, BridgeError> {
    parse_snowflake("channel id", value).map(ChannelId::new)
}

/// Parses a message identifier string.
pub fn parse_message_id(value: &str) -> Result<MessageId, BridgeError> {
    parse_snowflake("message id", value).map(MessageId::new)
}
