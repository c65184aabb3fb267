//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::{AnimationEvent, AudioEvent, RoundEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Per-side animation triggers
    Animation,
    /// Fire-and-forget sound cues
    Audio,
    /// Round starts, phase changes, round over
    Round,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Animation(AnimationEvent),
    Audio(AudioEvent),
    Round(RoundEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Animation(_) => Topic::Animation,
            Event::Audio(_) => Topic::Audio,
            Event::Round(_) => Topic::Round,
        }
    }
}

struct Channels {
    animation: broadcast::Sender<Event>,
    audio: broadcast::Sender<Event>,
    round: broadcast::Sender<Event>,
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing never blocks the tick loop; slow
/// subscribers lag and drop the oldest events.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let channels = Channels {
            animation: broadcast::channel(capacity).0,
            audio: broadcast::channel(capacity).0,
            round: broadcast::channel(capacity).0,
        };

        Self {
            channels: Arc::new(channels),
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Animation => &self.channels.animation,
            Topic::Audio => &self.channels.audio,
            Topic::Round => &self.channels.round,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }

    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.sender(topic).receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
