use crate::rng::{RngOracle, SeedContext, compute_seed};
use crate::state::{Chamber, InventoryError, ItemKind, RoundPhase, Side};

use super::{GameEngine, GameEvent};

/// Result of one round-over check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WinCheck {
    /// Not in a turn phase; nothing was checked.
    Inactive,
    /// Both sides are above zero health.
    Clear,
    /// Some side is down; the grace window has run for `ticks` ticks.
    Grace { ticks: u32 },
    /// The grace window ran out on this check.
    Decided { loser: Side },
}

/// Round lifecycle methods for GameEngine.
impl<'a> GameEngine<'a> {
    /// Reloads the chamber, clears round-scoped modifiers, runs one grant pass
    /// per side, and hands the first turn to the player.
    ///
    /// Health carries over between rounds; only [`GameEngine::restart`]
    /// restores it.
    pub fn begin_round<R>(&mut self, rng: &R)
    where
        R: RngOracle + ?Sized,
    {
        self.state.nonce += 1;
        let (game_seed, nonce) = (self.state.game_seed, self.state.nonce);
        self.state.chamber.load(rng, game_seed, nonce);
        self.state.turn.clear_modifiers();

        for side in Side::ALL {
            self.grant_items(rng, side);
        }

        self.state.turn.round += 1;
        self.emit(GameEvent::RoundStarted {
            round: self.state.turn.round,
            live: self.state.chamber.live_count(),
            blank: self.state.chamber.blank_count(),
        });
        self.set_phase(RoundPhase::PlayerTurn);
    }

    /// Grants up to `grants_per_round` random items to `side`, stopping early
    /// once its inventory is full. Returns the number granted.
    pub fn grant_items<R>(&mut self, rng: &R, side: Side) -> usize
    where
        R: RngOracle + ?Sized,
    {
        let (game_seed, nonce) = (self.state.game_seed, self.state.nonce);
        let mut granted = 0;

        for grant in 0..self.state.config.grants_per_round as u32 {
            let seed = compute_seed(
                game_seed,
                nonce,
                side.index() as u32,
                SeedContext::ItemGrant { grant },
            );
            let kind = ItemKind::ALL[rng.index(seed, ItemKind::ALL.len())];

            match self.state.combatant_mut(side).grant_item(kind) {
                Ok(slot) => {
                    granted += 1;
                    self.emit(GameEvent::ItemGranted { side, kind, slot });
                }
                Err(InventoryError::Full) => break,
                Err(_) => continue,
            }
        }

        granted
    }

    /// Resets both combatants, every modifier, and the round counter, then
    /// waits in `RoundStart` for the next [`GameEngine::begin_round`].
    pub fn restart(&mut self) {
        let starting_health = self.state.config.starting_health;
        for side in Side::ALL {
            self.state.combatant_mut(side).reset(starting_health);
        }

        self.state.chamber = Chamber::new();
        self.state.turn.clear_modifiers();
        self.state.turn.grace_counter = 0;
        self.state.turn.loser = None;
        self.state.turn.round = 0;
        self.set_phase(RoundPhase::RoundStart);
    }

    /// Advances the round-over countdown.
    ///
    /// While either side is at or below zero health the grace counter grows
    /// by one per call. When it exceeds the grace window the round ends with
    /// the downed side as loser, the player being checked first.
    pub fn check_win(&mut self) -> WinCheck {
        if !self.state.turn.phase.is_in_play() {
            return WinCheck::Inactive;
        }

        let Some(loser) = Side::ALL
            .into_iter()
            .find(|side| self.state.combatant(*side).is_down())
        else {
            self.state.turn.grace_counter = 0;
            return WinCheck::Clear;
        };

        self.state.turn.grace_counter += 1;
        if self.state.turn.grace_counter <= self.state.config.grace_window {
            return WinCheck::Grace {
                ticks: self.state.turn.grace_counter,
            };
        }

        self.state.turn.grace_counter = 0;
        self.state.turn.loser = Some(loser);
        self.set_phase(RoundPhase::RoundOver);
        self.emit(GameEvent::RoundOver { loser });
        WinCheck::Decided { loser }
    }

    /// Counts the human scanner reveal down by one tick, closing it at zero.
    /// Returns whether a reveal is still open.
    pub fn tick_reveal(&mut self) -> bool {
        let Some(reveal) = self.state.turn.reveal.as_mut() else {
            return false;
        };

        reveal.ticks_left = reveal.ticks_left.saturating_sub(1);
        if reveal.ticks_left == 0 {
            self.state.turn.reveal = None;
            return false;
        }
        true
    }
}
