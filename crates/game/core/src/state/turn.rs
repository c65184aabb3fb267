use bitflags::bitflags;

use super::{Shot, Side};

/// Phase of the duel state machine.
///
/// `RoundStart -> PlayerTurn <-> OpponentTurn -> RoundOver`. `RoundStart` is
/// re-entered whenever the chamber empties; `RoundOver` holds until restart.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RoundPhase {
    RoundStart,
    PlayerTurn,
    OpponentTurn,
    RoundOver,
}

impl RoundPhase {
    /// Phase in which `side` holds the turn.
    pub const fn turn_of(side: Side) -> RoundPhase {
        match side {
            Side::Player => RoundPhase::PlayerTurn,
            Side::Opponent => RoundPhase::OpponentTurn,
        }
    }

    /// Side holding the turn, if any.
    pub const fn active_side(self) -> Option<Side> {
        match self {
            RoundPhase::PlayerTurn => Some(Side::Player),
            RoundPhase::OpponentTurn => Some(Side::Opponent),
            RoundPhase::RoundStart | RoundPhase::RoundOver => None,
        }
    }

    pub const fn is_in_play(self) -> bool {
        matches!(self, RoundPhase::PlayerTurn | RoundPhase::OpponentTurn)
    }
}

bitflags! {
    /// Round-scoped modifiers attached to one side.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SideFlags: u8 {
        /// Next live hit dealt by this side deals one extra damage.
        const DOUBLE_DAMAGE = 1 << 0;
        /// Next turn-pass into this side is suppressed once.
        const PAUSED        = 1 << 1;
        /// Scanner told this side the next shot is live.
        const KNOWS_LIVE    = 1 << 2;
        /// Scanner told this side the next shot is blank.
        const KNOWS_BLANK   = 1 << 3;

        const KNOWLEDGE = Self::KNOWS_LIVE.bits() | Self::KNOWS_BLANK.bits();
    }
}

/// Timed reveal opened by a human-side Scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScannerReveal {
    pub shot: Shot,
    pub ticks_left: u32,
}

/// Turn bookkeeping: phase, modifiers, and the round-over countdown.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    pub phase: RoundPhase,

    /// Rounds begun since the last restart.
    pub round: u32,

    /// Consecutive ticks some side has spent at health <= 0.
    pub grace_counter: u32,

    /// Recorded on entry to `RoundOver`.
    pub loser: Option<Side>,

    pub reveal: Option<ScannerReveal>,

    flags: [SideFlags; 2],
}

impl TurnState {
    pub fn new() -> Self {
        Self {
            phase: RoundPhase::RoundStart,
            round: 0,
            grace_counter: 0,
            loser: None,
            reveal: None,
            flags: [SideFlags::empty(); 2],
        }
    }

    pub fn active_side(&self) -> Option<Side> {
        self.phase.active_side()
    }

    pub fn flags(&self, side: Side) -> SideFlags {
        self.flags[side.index()]
    }

    pub fn flags_mut(&mut self, side: Side) -> &mut SideFlags {
        &mut self.flags[side.index()]
    }

    /// Clears `flag` on `side`, returning whether it was set.
    pub fn take_flag(&mut self, side: Side, flag: SideFlags) -> bool {
        let flags = self.flags_mut(side);
        let was_set = flags.contains(flag);
        flags.remove(flag);
        was_set
    }

    /// Drops every round-scoped modifier and the reveal window.
    pub fn clear_modifiers(&mut self) {
        self.flags = [SideFlags::empty(); 2];
        self.reveal = None;
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_map_to_active_sides() {
        assert_eq!(RoundPhase::turn_of(Side::Opponent), RoundPhase::OpponentTurn);
        assert_eq!(RoundPhase::PlayerTurn.active_side(), Some(Side::Player));
        assert_eq!(RoundPhase::RoundOver.active_side(), None);
        assert!(!RoundPhase::RoundStart.is_in_play());
    }

    #[test]
    fn take_flag_clears_only_the_requested_bit() {
        let mut turn = TurnState::new();
        turn.flags_mut(Side::Opponent)
            .insert(SideFlags::PAUSED | SideFlags::DOUBLE_DAMAGE);

        assert!(turn.take_flag(Side::Opponent, SideFlags::PAUSED));
        assert!(!turn.take_flag(Side::Opponent, SideFlags::PAUSED));
        assert_eq!(turn.flags(Side::Opponent), SideFlags::DOUBLE_DAMAGE);
        assert!(turn.flags(Side::Player).is_empty());
    }
}
