//! Maps engine events onto bus topics.

use roulette_core::GameEvent;

use super::bus::Event;
use super::types::{AnimationEvent, AudioEvent, RoundEvent};

/// Converts the events one tick produced into bus events, in order.
///
/// A round-over yields both an audio cue and a round event. Health and
/// inventory changes have no topic of their own; presentation reads them from
/// the snapshot.
pub fn extract_events(tick: u64, events: &[GameEvent]) -> Vec<Event> {
    let mut extracted = Vec::with_capacity(events.len());

    for event in events {
        if let GameEvent::Animation { side, kind } = *event {
            extracted.push(Event::Animation(AnimationEvent { tick, side, kind }));
        }

        if let Some(cue) = event.audio_cue() {
            extracted.push(Event::Audio(AudioEvent { tick, cue }));
        }

        let round = match *event {
            GameEvent::RoundStarted { round, live, blank } => Some(RoundEvent::Started {
                tick,
                round,
                live,
                blank,
            }),
            GameEvent::PhaseChanged { from, to } => {
                Some(RoundEvent::PhaseChanged { tick, from, to })
            }
            GameEvent::RoundOver { loser } => Some(RoundEvent::Over {
                tick,
                loser,
                winner: loser.other(),
            }),
            _ => None,
        };
        extracted.extend(round.map(Event::Round));
    }

    extracted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Topic;
    use roulette_core::{AnimationKind, AudioCue, ItemKind, Side};

    #[test]
    fn round_over_reaches_audio_and_round_topics() {
        let events = extract_events(
            9,
            &[GameEvent::RoundOver {
                loser: Side::Opponent,
            }],
        );

        assert_eq!(
            events,
            vec![
                Event::Audio(AudioEvent {
                    tick: 9,
                    cue: AudioCue::RoundOver {
                        winner: Side::Player
                    },
                }),
                Event::Round(RoundEvent::Over {
                    tick: 9,
                    loser: Side::Opponent,
                    winner: Side::Player,
                }),
            ]
        );
    }

    #[test]
    fn state_only_events_are_not_published() {
        let events = extract_events(
            1,
            &[
                GameEvent::Healed {
                    side: Side::Player,
                    health: 6,
                },
                GameEvent::ItemGranted {
                    side: Side::Player,
                    kind: ItemKind::Scanner,
                    slot: 0,
                },
            ],
        );
        assert!(events.is_empty());
    }

    #[test]
    fn animations_keep_their_side() {
        let events = extract_events(
            2,
            &[GameEvent::Animation {
                side: Side::Opponent,
                kind: AnimationKind::GettingHit,
            }],
        );
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].topic(), Topic::Animation);
    }
}
