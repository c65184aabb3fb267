//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers helpers for queueing
//! human actions, reading the latest snapshot, or streaming events from
//! specific topics.
use std::collections::HashMap;

use tokio::sync::{broadcast, mpsc, watch};

use roulette_core::{ActionKind, Snapshot};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};

/// Commands drained by the runtime at the start of every tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Human-side action, applied only if it is the player's turn when the
    /// tick reaches the input step.
    Act(ActionKind),
    /// Reset both sides and start a fresh round.
    Restart,
    /// Stop the loop after the current tick.
    Exit,
}

/// Client-facing handle to interact with the runtime.
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    snapshot_rx: watch::Receiver<Snapshot>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        snapshot_rx: watch::Receiver<Snapshot>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            command_tx,
            snapshot_rx,
            event_bus,
        }
    }

    /// Queue a command for the next tick.
    pub async fn send(&self, command: Command) -> Result<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    /// Queue a command without waiting for channel capacity.
    pub fn try_send(&self, command: Command) -> Result<()> {
        self.command_tx.try_send(command).map_err(|error| match error {
            mpsc::error::TrySendError::Full(_) => RuntimeError::CommandChannelFull,
            mpsc::error::TrySendError::Closed(_) => RuntimeError::CommandChannelClosed,
        })
    }

    pub async fn act(&self, kind: ActionKind) -> Result<()> {
        self.send(Command::Act(kind)).await
    }

    pub async fn restart(&self) -> Result<()> {
        self.send(Command::Restart).await
    }

    pub async fn exit(&self) -> Result<()> {
        self.send(Command::Exit).await
    }

    /// Latest snapshot published by the tick loop.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Receiver notified after every tick.
    pub fn snapshots(&self) -> watch::Receiver<Snapshot> {
        self.snapshot_rx.clone()
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Animation` - Per-side animation triggers
    /// - `Topic::Audio` - Shot, item, and round-over cues
    /// - `Topic::Round` - Round starts, phase changes, round over
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
