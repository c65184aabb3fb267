//! Utilities for reacting to runtime events inside UI layers.
use roulette_core::{AnimationKind, AudioCue, Side};
use roulette_runtime::{AnimationEvent, AudioEvent, Event, RoundEvent};

use crate::config::{MessageConfig, MessageFilter};
use crate::message::{MessageEntry, MessageLevel, MessageLog};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
        }
    }
}

pub trait EventConsumer {
    fn on_event(&mut self, event: &Event) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
    fn take_message_log(self) -> MessageLog
    where
        Self: Sized;
}

/// Turns bus events into human-readable log lines.
///
/// Shot lines come from animation triggers since those carry the shooter;
/// the audio topic only contributes item use.
#[derive(Clone, Debug)]
pub struct MessageFeed {
    log: MessageLog,
    filter: MessageFilter,
    total: u64,
}

impl MessageFeed {
    pub fn new(config: &MessageConfig) -> Self {
        Self {
            log: MessageLog::new(config.capacity),
            filter: config.filter,
            total: 0,
        }
    }

    pub fn filter(&self) -> MessageFilter {
        self.filter
    }

    /// Messages accepted so far, including ones the log has since dropped.
    pub fn total(&self) -> u64 {
        self.total
    }

    fn push(&mut self, category: MessageFilter, tick: u64, level: MessageLevel, text: String) {
        if self.filter.contains(category) {
            self.log.push(MessageEntry::new(text, Some(tick), level));
            self.total += 1;
        }
    }

    fn on_animation(&mut self, event: &AnimationEvent) {
        let AnimationEvent { tick, side, kind } = *event;
        let text = match kind {
            AnimationKind::Idle => return,
            AnimationKind::SelfLive => format!("{side} shoots self: live"),
            AnimationKind::SelfBlank => format!("{side} shoots self: blank"),
            AnimationKind::OpponentLive => format!("{side} shoots {}: live", side.other()),
            AnimationKind::OpponentBlank => format!("{side} shoots {}: blank", side.other()),
            AnimationKind::GettingHit => {
                self.push(
                    MessageFilter::SHOTS,
                    tick,
                    level_against(side),
                    format!("{side} takes a hit"),
                );
                return;
            }
        };
        self.push(MessageFilter::SHOTS, tick, MessageLevel::Info, text);
    }

    fn on_audio(&mut self, event: &AudioEvent) {
        if let AudioCue::ItemUsed(kind) = event.cue {
            self.push(
                MessageFilter::ITEMS,
                event.tick,
                MessageLevel::Info,
                format!("{kind} used"),
            );
        }
    }

    fn on_round(&mut self, event: &RoundEvent) {
        match *event {
            RoundEvent::Started {
                tick,
                round,
                live,
                blank,
            } => self.push(
                MessageFilter::ROUNDS,
                tick,
                MessageLevel::Info,
                format!("round {round}: {live} live, {blank} blank"),
            ),
            RoundEvent::PhaseChanged { tick, to, .. } => self.push(
                MessageFilter::PHASES,
                tick,
                MessageLevel::Info,
                to.to_string(),
            ),
            RoundEvent::Over { tick, loser, winner } => self.push(
                MessageFilter::ROUNDS,
                tick,
                level_against(loser),
                format!("{winner} wins"),
            ),
        }
    }
}

fn level_against(side: Side) -> MessageLevel {
    match side {
        Side::Player => MessageLevel::Warning,
        Side::Opponent => MessageLevel::Info,
    }
}

impl EventConsumer for MessageFeed {
    fn on_event(&mut self, event: &Event) -> EventImpact {
        match event {
            Event::Animation(event) => self.on_animation(event),
            Event::Audio(event) => self.on_audio(event),
            Event::Round(event) => self.on_round(event),
        }
        EventImpact::redraw()
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }

    fn take_message_log(self) -> MessageLog {
        self.log
    }
}
