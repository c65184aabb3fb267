//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the orchestrator can stay focused on the tick loop.

pub mod errors;
pub mod handle;

pub use errors::{Result, RuntimeError};
pub use handle::{Command, RuntimeHandle};
