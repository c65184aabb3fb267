//! Deterministic duel rules shared by the runtime and every frontend.
//!
//! `roulette-core` defines the canonical rules (chamber, combatants, items,
//! turn state machine) and exposes pure APIs over an explicit [`GameState`].
//! All state mutation flows through [`engine::GameEngine`]; the runtime drives
//! it once per tick and forwards the [`GameEvent`]s it returns.
pub mod config;
pub mod engine;
pub mod error;
pub mod item;
pub mod rng;
pub mod state;

pub use config::GameConfig;
pub use engine::{
    Action, ActionKind, ActionOutcome, AnimationKind, AudioCue, GameEngine, GameEvent, WinCheck,
};
pub use error::{ActionError, ErrorSeverity, GameError};
pub use item::{ItemEffect, resolve_item};
pub use rng::{PcgRng, RngOracle, SeedContext, compute_seed};
pub use state::{
    Chamber, ChamberError, Combatant, GameState, Inventory, InventoryError, ItemKind, RoundPhase,
    ScannerReveal, Shot, Side, SideFlags, Snapshot, TurnState,
};
