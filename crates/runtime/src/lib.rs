//! Runtime orchestration for the duel simulation.
//!
//! This crate wires the deterministic engine from `roulette-core` into a
//! fixed-rate loop. Consumers embed [`Runtime`] to drive ticks, subscribe to
//! events, and queue human input through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`providers`] holds the opponent policy
pub mod api;
pub mod events;
pub mod providers;
pub mod runtime;

pub use api::{Command, Result, RuntimeError, RuntimeHandle};
pub use events::{AnimationEvent, AudioEvent, Event, EventBus, RoundEvent, Topic, extract_events};
pub use providers::{PolicyStages, ThresholdPolicy, TurnPolicy};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig, StopReason, TickReport};
