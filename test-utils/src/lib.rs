//! Cordbridge Test Utils
//!
//! Provides shared testing utilities for the cordbridge crate. The factories
//! here build valid Serenity API objects (GuildChannel, Message) from JSON,
//! simulating what Discord's API would return, so bridge tests can run
//! against fake clients without any network access.
//!
//! # Usage
//!
//! ```rust,ignore
//! use serenity::all::ChannelType;
//! use test_utils::serenity::{create_test_channel, create_test_message};
//!
//! let category = create_test_channel(10, 1, "events", ChannelType::Category, None);
//! let message = create_test_message(100, 20, "hello");
//! ```

pub mod serenity;
