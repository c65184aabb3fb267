use serde::{Deserialize, Serialize};

use roulette_core::{AnimationKind, AudioCue, RoundPhase, Side};

/// Play animation `kind` on `side`'s sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationEvent {
    pub tick: u64,
    pub side: Side,
    pub kind: AnimationKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioEvent {
    pub tick: u64,
    pub cue: AudioCue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    Started {
        tick: u64,
        round: u32,
        live: usize,
        blank: usize,
    },
    PhaseChanged {
        tick: u64,
        from: RoundPhase,
        to: RoundPhase,
    },
    Over {
        tick: u64,
        loser: Side,
        winner: Side,
    },
}
