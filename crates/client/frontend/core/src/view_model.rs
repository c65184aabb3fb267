//! View-model frames derived from runtime [`Snapshot`]s.
//!
//! This is the only place health is clamped for display; the core keeps the
//! raw (possibly negative) value.
use roulette_core::{GameConfig, ItemKind, RoundPhase, Shot, Side, Snapshot};

use crate::message::{MessageEntry, MessageLog};
use crate::screen::{Screen, ScreenRouter};

/// Everything a presentation layer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiFrame {
    pub screen: Screen,
    /// Highlighted cell of the current screen's grid.
    pub selection: usize,
    pub phase: RoundPhase,
    pub round: u32,
    pub active: Option<Side>,
    pub player: SideView,
    pub opponent: SideView,
    pub live_remaining: usize,
    pub blank_remaining: usize,
    /// Shot shown by the player's scanner while the reveal window is open.
    pub revealed: Option<Shot>,
    pub winner: Option<Side>,
    pub messages: Vec<MessageEntry>,
}

impl UiFrame {
    pub fn from_snapshot(
        snapshot: &Snapshot,
        router: &ScreenRouter,
        messages: &MessageLog,
        message_limit: usize,
    ) -> Self {
        Self {
            screen: router.screen(),
            selection: router.selection(),
            phase: snapshot.phase,
            round: snapshot.round,
            active: snapshot.active,
            player: SideView::from_snapshot(snapshot, Side::Player),
            opponent: SideView::from_snapshot(snapshot, Side::Opponent),
            live_remaining: snapshot.live_remaining,
            blank_remaining: snapshot.blank_remaining,
            revealed: snapshot.revealed_shot(),
            winner: snapshot.winner(),
            messages: collect_messages(messages, message_limit),
        }
    }

    pub fn side(&self, side: Side) -> &SideView {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// Turn banner text.
    pub fn turn_label(&self) -> &'static str {
        match self.phase {
            RoundPhase::RoundStart => "Loading",
            RoundPhase::PlayerTurn => "Player Turn",
            RoundPhase::OpponentTurn => "Enemy Turn",
            RoundPhase::RoundOver => "Game Over",
        }
    }
}

/// One combatant as drawn on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SideView {
    pub side: Side,
    /// Health clamped to `0..=DEFAULT_STARTING_HEALTH`.
    pub health: i32,
    pub slots: [Option<ItemKind>; GameConfig::MAX_INVENTORY_SLOTS],
}

impl SideView {
    fn from_snapshot(snapshot: &Snapshot, side: Side) -> Self {
        Self {
            side,
            health: display_health(snapshot.health(side)),
            slots: *snapshot.inventory(side).slots(),
        }
    }

    /// Held items in slot order, as drawn in the icon strip.
    pub fn icons(&self) -> impl Iterator<Item = ItemKind> + '_ {
        self.slots.iter().flatten().copied()
    }
}

pub fn display_health(raw: i32) -> i32 {
    raw.clamp(0, GameConfig::DEFAULT_STARTING_HEALTH)
}

fn collect_messages(messages: &MessageLog, limit: usize) -> Vec<MessageEntry> {
    let mut collected: Vec<MessageEntry> = messages.recent(limit).cloned().collect();
    collected.reverse();
    collected
}
