//! Convenience bridge for Discord guild channel and message management.
//!
//! This crate wraps [serenity] with a small set of guild-scoped operations:
//! category and text-channel creation, channel lookup, message send/edit/
//! delete, and paginated history retrieval. It forwards every call to
//! serenity's REST client and keeps no state of its own beyond the gateway
//! connection handle and the guild ID fixed at construction.
//!
//! The bridge does not reimplement any Discord protocol surface. Gateway
//! handshakes, rate-limiter internals, authentication, and message
//! serialization are serenity's job; this crate only layers duplicate-name
//! policy, argument validation, and rate-limit-respecting pagination loops
//! on top.
//!
//! # Gateway Intents
//!
//! The bridge connects with the following gateway intents:
//! - `GUILDS` - Read access to the guild's channel list
//! - `GUILD_MESSAGES` - Read and write access to guild messages
//! - `MESSAGE_CONTENT` - Access to message content in history reads
//!
//! # Usage
//!
//! ```rust,ignore
//! use cordbridge::CordBridge;
//!
//! let mut bridge = CordBridge::new(&token, &guild_id).await?;
//! bridge.open().await?;
//!
//! let category = bridge.create_category("events").await?;
//! let channel = bridge
//!     .create_channel("announcements", &category.id.to_string())
//!     .await?;
//! bridge
//!     .send_message_to_channel(&channel.id.to_string(), "hello")
//!     .await?;
//!
//! bridge.close().await?;
//! ```
//!
//! # Concurrency
//!
//! Operations are async and complete inline, including the deliberate 250ms
//! inter-page sleep during pagination. The bridge holds no locks; its guild
//! ID and HTTP handle are immutable after construction. Sharing one bridge
//! across tasks is safe only to the extent serenity's HTTP client is, and is
//! the caller's responsibility. No cancellation or timeout plumbing exists;
//! wrap calls with your own timeouts if needed.

pub mod api;
pub mod bridge;
pub mod config;
pub mod error;
pub mod util;

pub use api::{DiscordApi, SerenityApi};
pub use bridge::CordBridge;
pub use config::BridgeConfig;
pub use error::{BridgeError, ConfigError};
