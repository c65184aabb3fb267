//! Scripted input source that plays the human side.
//!
//! The autopilot never touches the engine. It looks at the router and the
//! latest snapshot and emits one [`InputCommand`] at a time, exactly like a
//! keyboard would.
use roulette_core::{GameConfig, ItemKind, RoundPhase, Shot, Side, Snapshot};
use roulette_frontend::{Direction, GameplayOption, InputCommand, MenuOption, Screen, ScreenRouter};

const INVENTORY_COLS: usize = GameConfig::MAX_INVENTORY_SLOTS / 2;

#[derive(Clone, Debug)]
pub struct Autopilot {
    sessions: u32,
    started: u32,
}

impl Autopilot {
    pub fn new(sessions: u32) -> Self {
        Self {
            sessions,
            started: 0,
        }
    }

    pub fn sessions_started(&self) -> u32 {
        self.started
    }

    /// Next key press, or `None` to wait for the opponent.
    pub fn next_input(
        &mut self,
        router: &ScreenRouter,
        snapshot: &Snapshot,
    ) -> Option<InputCommand> {
        let player_turn = snapshot.phase == RoundPhase::PlayerTurn;

        match router.screen() {
            Screen::MainMenu => {
                let target = if self.started < self.sessions {
                    MenuOption::Play
                } else {
                    MenuOption::Exit
                };
                if router.selected_menu_option() != target {
                    return Some(InputCommand::MoveSelection(Direction::Down));
                }
                if target == MenuOption::Play {
                    self.started += 1;
                }
                Some(InputCommand::Confirm)
            }
            Screen::Instructions | Screen::GameOver => Some(InputCommand::Back),
            Screen::Gameplay => {
                if !player_turn {
                    return None;
                }
                let target = match choose_item(snapshot) {
                    Some(_) => GameplayOption::Inventory,
                    None => choose_shot(snapshot),
                };
                if router.selected_gameplay_option() != target {
                    return Some(InputCommand::MoveSelection(Direction::Down));
                }
                Some(InputCommand::Confirm)
            }
            Screen::Inventory => {
                let slot = choose_item(snapshot).filter(|_| player_turn);
                let Some(slot) = slot else {
                    return Some(InputCommand::Back);
                };
                match step_towards(router.selection(), slot) {
                    Some(direction) => Some(InputCommand::MoveSelection(direction)),
                    None => Some(InputCommand::Confirm),
                }
            }
        }
    }
}

/// First held item worth using right now.
fn choose_item(snapshot: &Snapshot) -> Option<usize> {
    let health = snapshot.health(Side::Player);
    let revealed = snapshot.revealed_shot();
    let live_heavy = snapshot.live_remaining > snapshot.blank_remaining;

    snapshot
        .inventory(Side::Player)
        .slots()
        .iter()
        .position(|slot| {
            slot.is_some_and(|kind| match kind {
                ItemKind::OilDrink => health < GameConfig::DEFAULT_STARTING_HEALTH,
                ItemKind::Scanner => revealed.is_none(),
                ItemKind::PauseRemote => true,
                ItemKind::Overcharger => revealed == Some(Shot::Live),
                ItemKind::RubbishBin => revealed.is_none() && live_heavy,
            })
        })
}

fn choose_shot(snapshot: &Snapshot) -> GameplayOption {
    match snapshot.revealed_shot() {
        Some(Shot::Blank) => GameplayOption::ShootSelf,
        Some(Shot::Live) => GameplayOption::ShootOpponent,
        None if snapshot.blank_remaining > snapshot.live_remaining => GameplayOption::ShootSelf,
        None => GameplayOption::ShootOpponent,
    }
}

/// One step across the inventory grid, rows first.
fn step_towards(from: usize, to: usize) -> Option<Direction> {
    let (from_row, from_col) = (from / INVENTORY_COLS, from % INVENTORY_COLS);
    let (to_row, to_col) = (to / INVENTORY_COLS, to % INVENTORY_COLS);

    if from_row < to_row {
        Some(Direction::Down)
    } else if from_row > to_row {
        Some(Direction::Up)
    } else if from_col < to_col {
        Some(Direction::Right)
    } else if from_col > to_col {
        Some(Direction::Left)
    } else {
        None
    }
}
