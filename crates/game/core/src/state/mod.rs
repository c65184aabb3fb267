//! Authoritative duel state.
//!
//! This module owns the data structures that describe the chamber, both
//! combatants, and turn bookkeeping. Runtime layers clone or query this state
//! but mutate it exclusively through the engine.
mod chamber;
mod combatant;
mod snapshot;
mod turn;

pub use chamber::{Chamber, ChamberError, Shot};
pub use combatant::{Combatant, Inventory, InventoryError, ItemKind, Side};
pub use snapshot::Snapshot;
pub use turn::{RoundPhase, ScannerReveal, SideFlags, TurnState};

use crate::config::GameConfig;

/// Canonical session state. One instance per running duel; there are no
/// globals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// RNG seed for deterministic random generation.
    ///
    /// Set once at session start and never modified. Combined with `nonce`
    /// to derive a distinct seed for every random draw.
    pub game_seed: u64,

    /// Round-start sequence number. Advanced on every reload so no two loads
    /// share seeds.
    pub nonce: u64,

    pub config: GameConfig,
    pub chamber: Chamber,
    combatants: [Combatant; 2],
    pub turn: TurnState,
}

impl GameState {
    /// Creates a state waiting in `RoundStart`, with both sides at starting
    /// health and an empty chamber.
    pub fn new(game_seed: u64, config: GameConfig) -> Self {
        let combatant = Combatant::new(config.starting_health);
        Self {
            game_seed,
            nonce: 0,
            config,
            chamber: Chamber::new(),
            combatants: [combatant.clone(), combatant],
            turn: TurnState::new(),
        }
    }

    /// Creates a default-configured state with a specific game seed.
    pub fn with_seed(game_seed: u64) -> Self {
        Self::new(game_seed, GameConfig::default())
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    pub fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        &mut self.combatants[side.index()]
    }

    pub fn phase(&self) -> RoundPhase {
        self.turn.phase
    }

    /// Read-only view for presentation layers.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_seed(0)
    }
}
