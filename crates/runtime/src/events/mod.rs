//! Topic-based event bus for runtime events.
//!
//! Engine events are mapped onto three topics so animation, audio, and round
//! consumers subscribe only to what they play.

mod bus;
mod extractor;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use extractor::extract_events;
pub use types::{AnimationEvent, AudioEvent, RoundEvent};
