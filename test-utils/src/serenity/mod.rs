//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (GuildChannel, Message) for testing purposes. These factories create
//! valid Serenity objects by deserializing JSON, simulating what Discord's
//! API would return.
//!
//! # Available Factories
//!
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects
//! - `message::create_test_message` - Create Serenity Message objects

pub mod channel;
pub mod message;

// Re-export commonly used functions for convenience
pub use channel::create_test_channel;
pub use message::create_test_message;
