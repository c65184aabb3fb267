use super::{GameState, Inventory, RoundPhase, ScannerReveal, Shot, Side};

/// Read-only per-tick view of a [`GameState`].
///
/// Carries remaining shot counts but never the shot sequence itself. The
/// revealed shot is present only while the human scanner window is open.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub phase: RoundPhase,
    pub active: Option<Side>,
    pub round: u32,
    pub health: [i32; 2],
    pub inventories: [Inventory; 2],
    pub live_remaining: usize,
    pub blank_remaining: usize,
    pub reveal: Option<ScannerReveal>,
    pub loser: Option<Side>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            phase: state.turn.phase,
            active: state.turn.active_side(),
            round: state.turn.round,
            health: Side::ALL.map(|side| state.combatant(side).health),
            inventories: Side::ALL.map(|side| state.combatant(side).inventory),
            live_remaining: state.chamber.live_count(),
            blank_remaining: state.chamber.blank_count(),
            reveal: state.turn.reveal,
            loser: state.turn.loser,
        }
    }

    pub fn health(&self, side: Side) -> i32 {
        self.health[side.index()]
    }

    pub fn inventory(&self, side: Side) -> &Inventory {
        &self.inventories[side.index()]
    }

    pub fn revealed_shot(&self) -> Option<Shot> {
        self.reveal.map(|reveal| reveal.shot)
    }

    pub fn remaining(&self) -> usize {
        self.live_remaining + self.blank_remaining
    }

    /// Winner once the round is over.
    pub fn winner(&self) -> Option<Side> {
        self.loser.map(Side::other)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::capture(&GameState::default())
    }
}
