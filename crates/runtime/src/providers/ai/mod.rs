//! Timer-gated opponent policy.
//!
//! The opponent does not think in one step. Once per tick of its turn a
//! decision-cycle counter advances, and each stage of the cycle becomes
//! eligible once the counter passes its threshold:
//!
//! 1. **Heal**: drink an OilDrink
//! 2. **Discard**: bin the current shot when live shots outnumber blanks
//! 3. **Pause**: use a PauseRemote on the player
//! 4. **Scan**: learn the current shot
//! 5. **Charge**: arm an Overcharger when the shot is known live
//! 6. **Fire**: shoot itself, the player, or itself and then the player
//!
//! # Core Components
//!
//! - [`TurnPolicy`]: Seam the runtime drives once per opponent tick
//! - [`ThresholdPolicy`]: Default policy implementing the stages above
//! - [`PolicyStages`]: Which stages already ran in the current cycle

mod stages;
mod threshold;

pub use stages::PolicyStages;
pub use threshold::ThresholdPolicy;

use roulette_core::{Action, GameState};

/// Decision procedure for the opponent side.
///
/// The runtime calls [`TurnPolicy::on_tick`] exactly once per tick while the
/// opponent holds the turn, and [`TurnPolicy::reset`] on every tick it does
/// not. Returned actions execute in order; rejected ones are skipped.
/// [`TurnPolicy::follow_up`] is then asked once, against the state those
/// actions left behind.
pub trait TurnPolicy: Send {
    fn on_tick(&mut self, state: &GameState) -> Vec<Action>;

    /// One more action decided after this tick's actions resolved.
    fn follow_up(&mut self, _state: &GameState) -> Option<Action> {
        None
    }

    /// Drops the current decision cycle.
    fn reset(&mut self);
}
