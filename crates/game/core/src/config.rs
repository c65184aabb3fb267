/// Duel configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Health each combatant starts with after a restart.
    pub starting_health: i32,

    /// Ticks that health <= 0 must persist before the round is declared over.
    /// Outgoing hit animations play during this window.
    pub grace_window: u32,

    /// Successful item grants per combatant at each round start.
    pub grants_per_round: usize,

    /// Ticks the human scanner reveal stays visible.
    pub scanner_reveal_ticks: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Shots loaded into the chamber on every reload.
    pub const CHAMBER_SIZE: usize = 6;
    /// Fixed inventory slots per combatant.
    pub const MAX_INVENTORY_SLOTS: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STARTING_HEALTH: i32 = 5;
    pub const DEFAULT_GRACE_WINDOW: u32 = 60;
    pub const DEFAULT_GRANTS_PER_ROUND: usize = 2;
    pub const DEFAULT_SCANNER_REVEAL_TICKS: u32 = 100;

    pub fn new() -> Self {
        Self {
            starting_health: Self::DEFAULT_STARTING_HEALTH,
            grace_window: Self::DEFAULT_GRACE_WINDOW,
            grants_per_round: Self::DEFAULT_GRANTS_PER_ROUND,
            scanner_reveal_ticks: Self::DEFAULT_SCANNER_REVEAL_TICKS,
        }
    }

    pub fn with_grace_window(mut self, grace_window: u32) -> Self {
        self.grace_window = grace_window;
        self
    }

    pub fn with_starting_health(mut self, starting_health: i32) -> Self {
        self.starting_health = starting_health;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
