//! The bridge itself: construction, gateway lifecycle, and guild-scoped
//! convenience operations.
//!
//! `CordBridge` owns one serenity client and one guild ID for its whole
//! lifetime. The gateway connection moves through Created → Opened → Closed,
//! driven by explicit [`open`](CordBridge::open) and
//! [`close`](CordBridge::close) calls; the caller must guarantee `close`
//! runs on every exit path after a successful `open`. REST operations go
//! through serenity's HTTP client and are usable in any gateway state.
//!
//! Channel operations live in [`channel`]; message operations, including the
//! paginated history reads, live in [`message`].

mod channel;
mod message;

#[cfg(test)]
mod test;

use std::sync::Arc;

use serenity::all::{Client, GatewayIntents, GuildId, ShardManager};
use tokio::task::JoinHandle;
use tracing::info;

use crate::api::{DiscordApi, SerenityApi};
use crate::error::BridgeError;
use crate::util::parse::parse_guild_id;

/// Gateway connection lifecycle.
///
/// The client is surrendered to a background runner task on open; only the
/// shard manager and the runner handle remain for shutdown.
enum Gateway {
    Created(Box<Client>),
    Opened {
        shard_manager: Arc<ShardManager>,
        runner: JoinHandle<Result<(), serenity::Error>>,
    },
    Closed,
}

/// Convenience bridge over one Discord guild.
///
/// Generic over the [`DiscordApi`] seam so tests can substitute a fake
/// client; production code uses the default [`SerenityApi`]. The guild ID
/// and API handle are fixed at construction and never mutated, so all
/// operations take `&self`.
pub struct CordBridge<A = SerenityApi> {
    /// Discord API handle all operations forward to.
    api: A,
    /// Guild every operation is scoped to.
    guild_id: GuildId,
    /// Gateway connection state.
    gateway: Gateway,
}

impl CordBridge<SerenityApi> {
    /// Builds a bridge for the given bot token and guild.
    ///
    /// Constructs the serenity client with the bridge's gateway intents but
    /// does not connect; call [`open`](Self::open) for that. No network
    /// traffic occurs here.
    ///
    /// # Arguments
    /// - `token` - Discord bot token
    /// - `guild_id` - Snowflake of the guild to operate on, as a string
    ///
    /// # Returns
    /// - `Ok(CordBridge)` - Client built, bridge in Created state
    /// - `Err(BridgeError::InvalidArgument)` - Guild ID failed to parse
    /// - `Err(BridgeError::Discord)` - Serenity rejected the client build
    pub async fn new(token: &str, guild_id: &str) -> Result<Self, BridgeError> {
        let guild_id = parse_guild_id(guild_id)?;

        let client = Client::builder(token, Self::intents())
            .await
            .map_err(|e| BridgeError::discord("building client", e))?;

        let api = SerenityApi::new(client.http.clone());

        Ok(Self {
            api,
            guild_id,
            gateway: Gateway::Created(Box::new(client)),
        })
    }

    /// Gateway intents the bridge connects with.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT
    }

    /// Opens the gateway connection.
    ///
    /// Hands the client to a background tokio task running serenity's shard
    /// loop. Valid only in the Created state. Connection failures surface
    /// through the runner when [`close`](Self::close) joins it; there is no
    /// retry.
    ///
    /// # Returns
    /// - `Ok(())` - Shard runner started, bridge in Opened state
    /// - `Err(BridgeError::Gateway)` - Bridge already opened or closed
    pub async fn open(&mut self) -> Result<(), BridgeError> {
        match std::mem::replace(&mut self.gateway, Gateway::Closed) {
            Gateway::Created(client) => {
                let mut client = *client;
                let shard_manager = client.shard_manager.clone();
                let runner = tokio::spawn(async move { client.start().await });

                self.gateway = Gateway::Opened {
                    shard_manager,
                    runner,
                };

                info!(guild_id = %self.guild_id, "gateway connection opened");
                Ok(())
            }
            opened @ Gateway::Opened { .. } => {
                self.gateway = opened;
                Err(BridgeError::Gateway("already opened"))
            }
            Gateway::Closed => Err(BridgeError::Gateway("already closed")),
        }
    }

    /// Closes the gateway connection.
    ///
    /// Shuts all shards down and joins the runner task, surfacing any error
    /// the connection produced. Idempotent: closing a bridge that was never
    /// opened, or closing twice, is a no-op.
    ///
    /// # Returns
    /// - `Ok(())` - Connection shut down cleanly (or nothing to shut down)
    /// - `Err(BridgeError::Discord)` - The shard runner exited with an error
    /// - `Err(BridgeError::Gateway)` - The shard runner panicked
    pub async fn close(&mut self) -> Result<(), BridgeError> {
        match std::mem::replace(&mut self.gateway, Gateway::Closed) {
            Gateway::Opened {
                shard_manager,
                runner,
            } => {
                shard_manager.shutdown_all().await;

                match runner.await {
                    Ok(Ok(())) => {
                        info!(guild_id = %self.guild_id, "gateway connection closed");
                        Ok(())
                    }
                    Ok(Err(e)) => Err(BridgeError::discord("closing gateway", e)),
                    Err(join_err) if join_err.is_panic() => {
                        Err(BridgeError::Gateway("shard runner panicked"))
                    }
                    Err(_) => Ok(()),
                }
            }
            _ => Ok(()),
        }
    }
}

impl<A: DiscordApi> CordBridge<A> {
    /// Builds a bridge over a custom [`DiscordApi`] implementation.
    ///
    /// No gateway client exists for custom implementations, so the bridge
    /// starts Closed and only the REST-style operations are meaningful.
    ///
    /// # Arguments
    /// - `api` - The API implementation to forward operations to
    /// - `guild_id` - Snowflake of the guild to operate on, as a string
    ///
    /// # Returns
    /// - `Ok(CordBridge)` - Bridge ready for operations
    /// - `Err(BridgeError::InvalidArgument)` - Guild ID failed to parse
    pub fn with_api(api: A, guild_id: &str) -> Result<Self, BridgeError> {
        let guild_id = parse_guild_id(guild_id)?;

        Ok(Self {
            api,
            guild_id,
            gateway: Gateway::Closed,
        })
    }

    /// The guild this bridge operates on.
    pub fn guild_id(&self) -> GuildId {
        self.guild_id
    }
}
