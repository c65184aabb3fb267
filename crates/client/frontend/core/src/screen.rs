//! Screen routing: turns navigation input into runtime commands.
//!
//! Each menu screen owns a [`SelectableGrid`]. The router tracks which screen
//! is showing, moves the cursor, and converts confirms into [`Intent`]s that a
//! frontend forwards to the runtime. Gameplay confirms only turn into actions
//! while it is the player's turn.
use roulette_core::{ActionKind, GameConfig, RoundPhase, Snapshot};
use roulette_runtime::Command;

use crate::grid::SelectableGrid;
use crate::input::{Direction, InputCommand};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    MainMenu,
    Instructions,
    Gameplay,
    Inventory,
    GameOver,
}

impl Screen {
    /// Screens on which a live round is shown.
    pub fn shows_duel(self) -> bool {
        matches!(self, Screen::Gameplay | Screen::Inventory)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuOption {
    Play,
    Instructions,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 3] = [MenuOption::Play, MenuOption::Instructions, MenuOption::Exit];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameplayOption {
    ShootSelf,
    ShootOpponent,
    Inventory,
}

impl GameplayOption {
    pub const ALL: [GameplayOption; 3] = [
        GameplayOption::ShootSelf,
        GameplayOption::ShootOpponent,
        GameplayOption::Inventory,
    ];
}

/// Request the frontend should forward to the runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Reset both sides and begin a fresh session.
    StartSession,
    Act(ActionKind),
    Exit,
}

impl Intent {
    pub fn command(self) -> Command {
        match self {
            Intent::StartSession => Command::Restart,
            Intent::Act(kind) => Command::Act(kind),
            Intent::Exit => Command::Exit,
        }
    }
}

/// Tracks the visible screen and one cursor per menu.
#[derive(Clone, Debug)]
pub struct ScreenRouter {
    screen: Screen,
    main_menu: SelectableGrid,
    gameplay: SelectableGrid,
    inventory: SelectableGrid,
    /// Set by Play until a snapshot from the new session arrives.
    awaiting_session: bool,
}

impl Default for ScreenRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenRouter {
    pub fn new() -> Self {
        Self {
            screen: Screen::MainMenu,
            main_menu: SelectableGrid::wrapping(MenuOption::ALL.len(), 1),
            gameplay: SelectableGrid::wrapping(GameplayOption::ALL.len(), 1),
            inventory: SelectableGrid::clamped(2, GameConfig::MAX_INVENTORY_SLOTS / 2),
            awaiting_session: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Cursor for `screen`, if it has one.
    pub fn grid(&self, screen: Screen) -> Option<&SelectableGrid> {
        match screen {
            Screen::MainMenu => Some(&self.main_menu),
            Screen::Gameplay => Some(&self.gameplay),
            Screen::Inventory => Some(&self.inventory),
            Screen::Instructions | Screen::GameOver => None,
        }
    }

    fn grid_mut(&mut self, screen: Screen) -> Option<&mut SelectableGrid> {
        match screen {
            Screen::MainMenu => Some(&mut self.main_menu),
            Screen::Gameplay => Some(&mut self.gameplay),
            Screen::Inventory => Some(&mut self.inventory),
            Screen::Instructions | Screen::GameOver => None,
        }
    }

    /// Selected cell on the current screen; 0 for screens without a cursor.
    pub fn selection(&self) -> usize {
        self.grid(self.screen).map_or(0, SelectableGrid::selected)
    }

    pub fn selected_menu_option(&self) -> MenuOption {
        MenuOption::ALL[self.main_menu.selected()]
    }

    pub fn selected_gameplay_option(&self) -> GameplayOption {
        GameplayOption::ALL[self.gameplay.selected()]
    }

    /// Switches screens, resetting the destination cursor.
    fn enter(&mut self, screen: Screen) {
        self.screen = screen;
        if let Some(grid) = self.grid_mut(screen) {
            grid.reset();
        }
    }

    /// Moves to the game-over screen once the published round is decided.
    /// Returns whether the screen changed.
    ///
    /// A decided snapshot published before the restart requested by Play is
    /// ignored.
    pub fn observe(&mut self, snapshot: &Snapshot) -> bool {
        let decided = snapshot.phase == RoundPhase::RoundOver;
        if self.awaiting_session {
            self.awaiting_session = decided;
            return false;
        }
        if self.screen.shows_duel() && decided {
            self.enter(Screen::GameOver);
            return true;
        }
        false
    }

    /// Applies one input. `phase` is the latest published round phase.
    pub fn handle(&mut self, input: InputCommand, phase: RoundPhase) -> Option<Intent> {
        match input {
            InputCommand::MoveSelection(direction) => {
                self.move_selection(direction);
                None
            }
            InputCommand::Confirm => self.confirm(phase),
            InputCommand::Back => {
                self.back();
                None
            }
        }
    }

    fn move_selection(&mut self, direction: Direction) {
        if let Some(grid) = self.grid_mut(self.screen) {
            grid.move_selection(direction);
        }
    }

    fn confirm(&mut self, phase: RoundPhase) -> Option<Intent> {
        let player_turn = phase == RoundPhase::PlayerTurn;

        match self.screen {
            Screen::MainMenu => match self.selected_menu_option() {
                MenuOption::Play => {
                    self.enter(Screen::Gameplay);
                    self.awaiting_session = true;
                    Some(Intent::StartSession)
                }
                MenuOption::Instructions => {
                    self.enter(Screen::Instructions);
                    None
                }
                MenuOption::Exit => Some(Intent::Exit),
            },
            Screen::Gameplay => match self.selected_gameplay_option() {
                GameplayOption::ShootSelf if player_turn => Some(Intent::Act(ActionKind::FireSelf)),
                GameplayOption::ShootOpponent if player_turn => {
                    Some(Intent::Act(ActionKind::FireOpponent))
                }
                GameplayOption::Inventory => {
                    self.enter(Screen::Inventory);
                    None
                }
                _ => None,
            },
            Screen::Inventory if player_turn => Some(Intent::Act(ActionKind::UseItem {
                slot: self.inventory.selected(),
            })),
            Screen::Inventory | Screen::Instructions | Screen::GameOver => None,
        }
    }

    fn back(&mut self) {
        match self.screen {
            Screen::Inventory => self.enter(Screen::Gameplay),
            Screen::Instructions | Screen::GameOver => self.enter(Screen::MainMenu),
            Screen::MainMenu | Screen::Gameplay => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roulette_core::Side;

    const DOWN: InputCommand = InputCommand::MoveSelection(Direction::Down);
    const UP: InputCommand = InputCommand::MoveSelection(Direction::Up);
    const RIGHT: InputCommand = InputCommand::MoveSelection(Direction::Right);

    fn in_gameplay() -> ScreenRouter {
        let mut router = ScreenRouter::new();
        assert_eq!(
            router.handle(InputCommand::Confirm, RoundPhase::PlayerTurn),
            Some(Intent::StartSession)
        );
        assert_eq!(router.screen(), Screen::Gameplay);
        router
    }

    #[test]
    fn main_menu_wraps_to_exit() {
        let mut router = ScreenRouter::new();
        router.handle(UP, RoundPhase::RoundStart);
        assert_eq!(router.selected_menu_option(), MenuOption::Exit);
        assert_eq!(
            router.handle(InputCommand::Confirm, RoundPhase::RoundStart),
            Some(Intent::Exit)
        );
    }

    #[test]
    fn instructions_return_to_menu_on_back() {
        let mut router = ScreenRouter::new();
        router.handle(DOWN, RoundPhase::PlayerTurn);
        assert_eq!(router.handle(InputCommand::Confirm, RoundPhase::PlayerTurn), None);
        assert_eq!(router.screen(), Screen::Instructions);

        // Confirm and movement do nothing here.
        assert_eq!(router.handle(InputCommand::Confirm, RoundPhase::PlayerTurn), None);
        router.handle(DOWN, RoundPhase::PlayerTurn);
        assert_eq!(router.screen(), Screen::Instructions);

        router.handle(InputCommand::Back, RoundPhase::PlayerTurn);
        assert_eq!(router.screen(), Screen::MainMenu);
        assert_eq!(router.selection(), 0);
    }

    #[test]
    fn gameplay_shots_need_player_turn() {
        let mut router = in_gameplay();
        assert_eq!(
            router.handle(InputCommand::Confirm, RoundPhase::PlayerTurn),
            Some(Intent::Act(ActionKind::FireSelf))
        );
        assert_eq!(router.handle(InputCommand::Confirm, RoundPhase::OpponentTurn), None);

        router.handle(DOWN, RoundPhase::OpponentTurn);
        assert_eq!(router.handle(InputCommand::Confirm, RoundPhase::RoundOver), None);
        assert_eq!(
            router.handle(InputCommand::Confirm, RoundPhase::PlayerTurn),
            Some(Intent::Act(ActionKind::FireOpponent))
        );
    }

    #[test]
    fn inventory_opens_any_time_and_uses_selected_slot() {
        let mut router = in_gameplay();
        router.handle(UP, RoundPhase::OpponentTurn);
        assert_eq!(router.selected_gameplay_option(), GameplayOption::Inventory);
        assert_eq!(router.handle(InputCommand::Confirm, RoundPhase::OpponentTurn), None);
        assert_eq!(router.screen(), Screen::Inventory);

        router.handle(RIGHT, RoundPhase::OpponentTurn);
        router.handle(DOWN, RoundPhase::OpponentTurn);
        assert_eq!(router.selection(), 3);
        assert_eq!(router.handle(InputCommand::Confirm, RoundPhase::OpponentTurn), None);
        assert_eq!(
            router.handle(InputCommand::Confirm, RoundPhase::PlayerTurn),
            Some(Intent::Act(ActionKind::UseItem { slot: 3 }))
        );

        router.handle(InputCommand::Back, RoundPhase::PlayerTurn);
        assert_eq!(router.screen(), Screen::Gameplay);
        assert_eq!(router.selection(), 0);
    }

    #[test]
    fn decided_round_shows_game_over_then_menu() {
        let mut router = in_gameplay();
        let mut snapshot = Snapshot {
            phase: RoundPhase::PlayerTurn,
            ..Default::default()
        };
        assert!(!router.observe(&snapshot));

        snapshot.phase = RoundPhase::RoundOver;
        snapshot.loser = Some(Side::Opponent);
        assert!(router.observe(&snapshot));
        assert_eq!(router.screen(), Screen::GameOver);
        assert!(!router.observe(&snapshot));

        router.handle(InputCommand::Back, RoundPhase::RoundOver);
        assert_eq!(router.screen(), Screen::MainMenu);
        assert!(!router.observe(&snapshot));
    }

    #[test]
    fn stale_result_does_not_end_a_new_session() {
        let mut router = in_gameplay();
        let over = Snapshot {
            phase: RoundPhase::RoundOver,
            loser: Some(Side::Player),
            ..Default::default()
        };
        assert!(!router.observe(&over));
        assert_eq!(router.screen(), Screen::Gameplay);

        let fresh = Snapshot {
            phase: RoundPhase::RoundStart,
            ..Default::default()
        };
        assert!(!router.observe(&fresh));
        assert!(router.observe(&over));
        assert_eq!(router.screen(), Screen::GameOver);
    }

    #[test]
    fn intents_map_to_runtime_commands() {
        assert_eq!(Intent::StartSession.command(), Command::Restart);
        assert_eq!(Intent::Exit.command(), Command::Exit);
        assert_eq!(
            Intent::Act(ActionKind::FireSelf).command(),
            Command::Act(ActionKind::FireSelf)
        );
    }
}
