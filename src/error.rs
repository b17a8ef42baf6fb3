//! Typed failures of the logger protocol stack.
//!
//! The application layer wraps these into [`anyhow::Error`] through the prelude.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to connect to `{address}`")]
    Connect {
        address: String,

        #[source]
        source: io::Error,
    },

    #[error("timed out while trying to {operation}")]
    Timeout { operation: &'static str },

    #[error("the connection is not open")]
    NotOpen,

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("transport failure")]
    Transport(#[from] TransportError),

    #[error("short reply: {length} bytes")]
    ShortReply { length: usize },

    #[error("`{0}` is missing from the reply")]
    MissingField(&'static str),

    #[error("the logger clock reads an invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("timed out while publishing to `{topic}`")]
    Timeout { topic: String },

    #[error("the broker client rejected the message")]
    Client(#[from] rumqttc::ClientError),

    #[error("failed to serialize the measurement")]
    Serialize(#[from] serde_json::Error),
}
