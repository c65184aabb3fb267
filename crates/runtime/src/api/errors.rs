//! Unified error types surfaced by the runtime API.
//!
//! Engine rejections never reach this type: the tick loop logs and drops
//! them. What remains is channel plumbing and misconfiguration.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("runtime command channel closed")]
    CommandChannelClosed,

    #[error("runtime command channel is full")]
    CommandChannelFull,

    #[error("tick rate must be at least 1 Hz")]
    InvalidTickRate,

    #[error("{name} buffer size must be non-zero")]
    InvalidBufferSize { name: &'static str },

    #[error("runtime task join failed")]
    Join(#[source] tokio::task::JoinError),
}
