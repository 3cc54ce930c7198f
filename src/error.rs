//! Error types for bridge operations.
//!
//! This module provides the crate's error hierarchy. The `BridgeError` enum
//! serves as the single error type returned by every bridge operation,
//! separating locally detected argument problems from failures surfaced by
//! the Discord API.

use thiserror::Error;

/// Top-level bridge error type.
///
/// Every operation returns either a result or exactly one of these variants;
/// there is no partial-success signaling. Arguments are validated locally
/// before any network call, so `InvalidArgument` never reflects a Discord
/// response.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// A caller-supplied argument was rejected before any network call.
    ///
    /// Raised for empty, non-numeric, or zero channel/message identifiers
    /// and for a zero message-count request.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A category with the given name already exists in the guild.
    ///
    /// Detected by listing channels before creation. The check and the
    /// create are separate requests, so a concurrent creator can still
    /// produce a duplicate; the pre-check narrows the window but cannot
    /// close it.
    #[error("category already exists: {0}")]
    AlreadyExists(String),

    /// Discord API error from serenity, with the operation that failed.
    ///
    /// Boxed due to large size. Covers network, auth, rate-limit, and
    /// not-found failures alike; none are retried.
    #[error("error {operation}: {source}")]
    Discord {
        /// Short description of the operation that failed, e.g. "sending message".
        operation: &'static str,
        /// The underlying serenity error.
        #[source]
        source: Box<serenity::Error>,
    },

    /// Gateway lifecycle misuse.
    ///
    /// Raised when `open` is called outside the Created state or when the
    /// background shard runner panics.
    #[error("gateway {0}")]
    Gateway(&'static str),

    /// Configuration error while loading environment variables.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BridgeError {
    /// Wraps a serenity error with the operation that produced it.
    ///
    /// Boxes the error to keep the `BridgeError` enum small, as
    /// `serenity::Error` is very large and would inflate every variant
    /// if stored inline.
    pub fn discord(operation: &'static str, source: serenity::Error) -> Self {
        BridgeError::Discord {
            operation,
            source: Box::new(source),
        }
    }
}

/// Errors raised while reading bridge configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable was not set.
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),
}
