//! Turn controller and round lifecycle.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Every
//! mutation (shots, item uses, round boundaries, win detection) flows through
//! it, and each one records the [`GameEvent`]s the runtime forwards to
//! animation, audio, and round subscribers.

mod events;
mod fire;
mod items;
mod round;

pub use events::{AnimationKind, AudioCue, GameEvent};
pub use round::WinCheck;

use crate::error::ActionError;
use crate::state::{GameState, ItemKind, RoundPhase, Shot, Side};

/// What a side asks the engine to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    FireSelf,
    FireOpponent,
    UseItem { slot: usize },
}

/// An action attributed to one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    pub side: Side,
    pub kind: ActionKind,
}

impl Action {
    pub fn new(side: Side, kind: ActionKind) -> Self {
        Self { side, kind }
    }

    pub fn fire_self(side: Side) -> Self {
        Self::new(side, ActionKind::FireSelf)
    }

    pub fn fire_opponent(side: Side) -> Self {
        Self::new(side, ActionKind::FireOpponent)
    }

    pub fn use_item(side: Side, slot: usize) -> Self {
        Self::new(side, ActionKind::UseItem { slot })
    }
}

/// Result of one accepted action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    /// Shot resolved by a firing action or discarded by a RubbishBin.
    pub shot: Option<Shot>,

    /// Item consumed by an item action.
    pub item: Option<ItemKind>,

    /// Health removed from the target.
    pub damage: i32,

    /// Side holding the turn afterwards, `None` once the chamber emptied.
    pub next_turn: Option<Side>,
}

/// Reducer over a borrowed [`GameState`].
///
/// Events accumulate in the engine until [`GameEngine::take_events`] or
/// [`GameEngine::into_events`] hands them over.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    events: Vec<GameEvent>,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self {
            state,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Routes an action to its handler.
    pub fn execute(&mut self, action: Action) -> Result<ActionOutcome, ActionError> {
        match action.kind {
            ActionKind::FireSelf => self.fire_self(action.side),
            ActionKind::FireOpponent => self.fire_opponent(action.side),
            ActionKind::UseItem { slot } => self.use_item(action.side, slot),
        }
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn into_events(self) -> Vec<GameEvent> {
        self.events
    }

    /// The human side may act only in `PlayerTurn`. The opponent may act in
    /// either turn phase so a second final-decision shot can follow a pass.
    fn ensure_can_act(&self, side: Side) -> Result<(), ActionError> {
        let phase = self.state.turn.phase;
        let allowed = match side {
            Side::Player => phase == RoundPhase::PlayerTurn,
            Side::Opponent => phase.is_in_play(),
        };

        if allowed {
            Ok(())
        } else {
            Err(ActionError::NotYourTurn { side, phase })
        }
    }

    fn set_phase(&mut self, to: RoundPhase) {
        let from = self.state.turn.phase;
        if from != to {
            self.state.turn.phase = to;
            self.emit(GameEvent::PhaseChanged { from, to });
        }
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Enters `RoundStart` once the last shot is gone. The reload itself
    /// happens on the next [`GameEngine::begin_round`].
    fn finish_action(&mut self, outcome: &mut ActionOutcome) {
        if self.state.chamber.is_empty() {
            self.set_phase(RoundPhase::RoundStart);
        }
        outcome.next_turn = self.state.turn.active_side();
    }
}

#[cfg(test)]
mod tests;
