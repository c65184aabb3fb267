use crate::state::{ItemKind, RoundPhase, Shot, Side};

/// Animation trigger for one combatant's sprite.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AnimationKind {
    /// Resting pose. Never emitted by the engine; presentation falls back to it.
    #[default]
    Idle,
    SelfLive,
    SelfBlank,
    OpponentLive,
    OpponentBlank,
    GettingHit,
}

/// Fire-and-forget audio notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AudioCue {
    ShotFired(Shot),
    ItemUsed(ItemKind),
    RoundOver { winner: Side },
}

/// Everything the engine reports outward while mutating state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    ShotFired {
        side: Side,
        target: Side,
        shot: Shot,
    },
    Damaged {
        side: Side,
        amount: i32,
        health: i32,
    },
    Healed {
        side: Side,
        health: i32,
    },
    Animation {
        side: Side,
        kind: AnimationKind,
    },
    ItemUsed {
        side: Side,
        kind: ItemKind,
    },
    ItemGranted {
        side: Side,
        kind: ItemKind,
        slot: usize,
    },
    ShotDiscarded {
        side: Side,
        shot: Shot,
    },
    PhaseChanged {
        from: RoundPhase,
        to: RoundPhase,
    },
    RoundStarted {
        round: u32,
        live: usize,
        blank: usize,
    },
    RoundOver {
        loser: Side,
    },
}

impl GameEvent {
    /// Audio notification carried by this event, if any.
    pub fn audio_cue(&self) -> Option<AudioCue> {
        match self {
            GameEvent::ShotFired { shot, .. } => Some(AudioCue::ShotFired(*shot)),
            GameEvent::ItemUsed { kind, .. } => Some(AudioCue::ItemUsed(*kind)),
            GameEvent::RoundOver { loser } => Some(AudioCue::RoundOver {
                winner: loser.other(),
            }),
            _ => None,
        }
    }
}
