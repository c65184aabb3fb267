use super::*;
use crate::config::GameConfig;
use crate::rng::PcgRng;
use crate::state::{Chamber, SideFlags};

use crate::state::Shot::{Blank, Live};

fn staged(order: &[Shot], phase: RoundPhase) -> GameState {
    let mut state = GameState::with_seed(11);
    state.chamber = Chamber::from_firing_order(order);
    state.turn.phase = phase;
    state
}

#[test]
fn blank_self_shot_keeps_the_turn() {
    let mut state = staged(&[Blank, Live], RoundPhase::PlayerTurn);
    let mut engine = GameEngine::new(&mut state);

    let outcome = engine.fire_self(Side::Player).unwrap();
    assert_eq!(outcome.shot, Some(Blank));
    assert_eq!(outcome.next_turn, Some(Side::Player));
    assert!(
        engine
            .events()
            .contains(&GameEvent::Animation {
                side: Side::Player,
                kind: AnimationKind::SelfBlank
            })
    );

    assert_eq!(state.phase(), RoundPhase::PlayerTurn);
    assert_eq!(state.combatant(Side::Player).health, 5);
}

#[test]
fn live_self_shot_passes_the_turn() {
    let mut state = staged(&[Live, Blank], RoundPhase::PlayerTurn);
    GameEngine::new(&mut state).fire_self(Side::Player).unwrap();

    assert_eq!(state.combatant(Side::Player).health, 4);
    assert_eq!(state.phase(), RoundPhase::OpponentTurn);
}

#[test]
fn paused_side_cannot_receive_the_turn_once() {
    let mut state = staged(&[Live, Blank, Blank], RoundPhase::PlayerTurn);
    state
        .turn
        .flags_mut(Side::Opponent)
        .insert(SideFlags::PAUSED);

    let mut engine = GameEngine::new(&mut state);
    let outcome = engine.fire_self(Side::Player).unwrap();
    assert_eq!(outcome.next_turn, Some(Side::Player));

    assert_eq!(state.combatant(Side::Player).health, 4);
    assert_eq!(state.phase(), RoundPhase::PlayerTurn);
    assert!(!state.turn.flags(Side::Opponent).contains(SideFlags::PAUSED));

    // Spent: the next pass goes through.
    GameEngine::new(&mut state)
        .fire_opponent(Side::Player)
        .unwrap();
    assert_eq!(state.phase(), RoundPhase::OpponentTurn);
}

#[test]
fn pause_remote_lets_the_user_shoot_twice() {
    let mut state = staged(&[Blank, Live, Blank], RoundPhase::PlayerTurn);
    state
        .combatant_mut(Side::Player)
        .grant_item(ItemKind::PauseRemote)
        .unwrap();

    let mut engine = GameEngine::new(&mut state);
    engine.use_item(Side::Player, 0).unwrap();
    engine.fire_opponent(Side::Player).unwrap();
    assert_eq!(engine.state().phase(), RoundPhase::PlayerTurn);

    engine.fire_opponent(Side::Player).unwrap();
    assert_eq!(state.phase(), RoundPhase::OpponentTurn);
    assert_eq!(state.combatant(Side::Opponent).health, 4);
}

#[test]
fn opponent_pause_remote_holds_the_player() {
    let mut state = staged(&[Blank, Blank, Live], RoundPhase::OpponentTurn);
    state
        .combatant_mut(Side::Opponent)
        .grant_item(ItemKind::PauseRemote)
        .unwrap();

    let mut engine = GameEngine::new(&mut state);
    engine.use_item(Side::Opponent, 0).unwrap();
    engine.fire_opponent(Side::Opponent).unwrap();

    assert!(state.turn.flags(Side::Player).is_empty());
    assert_eq!(state.phase(), RoundPhase::OpponentTurn);
}

#[test]
fn overcharger_doubles_exactly_one_live_hit() {
    let mut state = staged(&[Live, Blank, Live], RoundPhase::PlayerTurn);
    state
        .combatant_mut(Side::Player)
        .grant_item(ItemKind::Overcharger)
        .unwrap();

    let mut engine = GameEngine::new(&mut state);
    engine.use_item(Side::Player, 0).unwrap();
    let outcome = engine.fire_opponent(Side::Player).unwrap();
    assert_eq!(outcome.damage, 2);
    assert_eq!(engine.state().combatant(Side::Opponent).health, 3);

    // Opponent blanks on itself, then hands the turn back.
    engine.fire_self(Side::Opponent).unwrap();
    state.turn.phase = RoundPhase::PlayerTurn;

    let outcome = GameEngine::new(&mut state)
        .fire_opponent(Side::Player)
        .unwrap();
    assert_eq!(outcome.damage, 1);
    assert_eq!(state.combatant(Side::Opponent).health, 2);
}

#[test]
fn double_damage_survives_blanks_and_items() {
    let mut state = staged(&[Blank, Live, Blank], RoundPhase::PlayerTurn);
    {
        let player = state.combatant_mut(Side::Player);
        player.grant_item(ItemKind::Overcharger).unwrap();
        player.grant_item(ItemKind::OilDrink).unwrap();
    }

    let mut engine = GameEngine::new(&mut state);
    engine.use_item(Side::Player, 0).unwrap();
    engine.fire_self(Side::Player).unwrap();
    engine.use_item(Side::Player, 1).unwrap();
    assert!(
        engine
            .state()
            .turn
            .flags(Side::Player)
            .contains(SideFlags::DOUBLE_DAMAGE)
    );

    // A live self-shot spends it on the owner.
    engine.fire_self(Side::Player).unwrap();
    assert_eq!(state.combatant(Side::Player).health, 4);
    assert!(state.turn.flags(Side::Player).is_empty());
}

#[test]
fn player_actions_outside_player_turn_are_rejected() {
    let mut state = staged(&[Live, Blank], RoundPhase::OpponentTurn);
    state
        .combatant_mut(Side::Player)
        .grant_item(ItemKind::OilDrink)
        .unwrap();

    let mut engine = GameEngine::new(&mut state);
    let error = engine.fire_self(Side::Player).unwrap_err();
    assert_eq!(
        error,
        ActionError::NotYourTurn {
            side: Side::Player,
            phase: RoundPhase::OpponentTurn
        }
    );
    assert!(engine.use_item(Side::Player, 0).is_err());
    assert!(engine.events().is_empty());

    assert_eq!(state.chamber.remaining(), 2);
    assert_eq!(state.combatant(Side::Player).inventory.len(), 1);
}

#[test]
fn opponent_may_follow_up_after_passing_the_turn() {
    let mut state = staged(&[Live, Blank, Blank], RoundPhase::OpponentTurn);
    let mut engine = GameEngine::new(&mut state);

    engine.fire_self(Side::Opponent).unwrap();
    assert_eq!(engine.state().phase(), RoundPhase::PlayerTurn);

    let outcome = engine.execute(Action::fire_opponent(Side::Opponent)).unwrap();
    assert_eq!(outcome.shot, Some(Blank));
    assert_eq!(state.phase(), RoundPhase::PlayerTurn);
    assert_eq!(state.chamber.remaining(), 1);
}

#[test]
fn nobody_acts_outside_turn_phases() {
    for phase in [RoundPhase::RoundStart, RoundPhase::RoundOver] {
        let mut state = staged(&[Live, Blank], phase);
        let mut engine = GameEngine::new(&mut state);
        assert!(engine.fire_opponent(Side::Opponent).is_err());
        assert!(engine.fire_self(Side::Player).is_err());
    }
}

#[test]
fn empty_slot_is_rejected_without_side_effects() {
    let mut state = staged(&[Live, Blank], RoundPhase::PlayerTurn);
    let mut engine = GameEngine::new(&mut state);

    assert_eq!(
        engine.use_item(Side::Player, 2),
        Err(ActionError::EmptySlot { slot: 2 })
    );
    assert_eq!(
        engine.use_item(Side::Player, 9),
        Err(ActionError::InvalidSlot { slot: 9 })
    );
    assert!(engine.events().is_empty());
}

#[test]
fn item_use_never_passes_the_turn() {
    let mut state = staged(&[Live, Blank], RoundPhase::PlayerTurn);
    state
        .combatant_mut(Side::Player)
        .grant_item(ItemKind::OilDrink)
        .unwrap();

    let outcome = GameEngine::new(&mut state)
        .use_item(Side::Player, 0)
        .unwrap();
    assert_eq!(outcome.item, Some(ItemKind::OilDrink));
    assert_eq!(outcome.next_turn, Some(Side::Player));
    assert_eq!(state.combatant(Side::Player).health, 6);
    assert_eq!(state.combatant(Side::Player).inventory.get(0), None);
}

#[test]
fn rubbish_bin_discards_without_damage() {
    let mut state = staged(&[Live, Blank], RoundPhase::PlayerTurn);
    state
        .combatant_mut(Side::Player)
        .grant_item(ItemKind::RubbishBin)
        .unwrap();

    let mut engine = GameEngine::new(&mut state);
    let outcome = engine.use_item(Side::Player, 0).unwrap();
    assert_eq!(outcome.shot, Some(Live));
    assert_eq!(
        engine.events(),
        &[
            GameEvent::ItemUsed {
                side: Side::Player,
                kind: ItemKind::RubbishBin
            },
            GameEvent::ShotDiscarded {
                side: Side::Player,
                shot: Live
            },
        ]
    );

    assert_eq!(state.chamber.remaining(), 1);
    assert_eq!(state.combatant(Side::Player).health, 5);
    assert_eq!(state.combatant(Side::Opponent).health, 5);
}

#[test]
fn player_scanner_opens_a_timed_reveal() {
    let mut state = staged(&[Live, Blank], RoundPhase::PlayerTurn);
    state
        .combatant_mut(Side::Player)
        .grant_item(ItemKind::Scanner)
        .unwrap();

    let mut engine = GameEngine::new(&mut state);
    engine.use_item(Side::Player, 0).unwrap();
    assert_eq!(engine.state().snapshot().revealed_shot(), Some(Live));
    assert_eq!(engine.state().chamber.remaining(), 2);

    let window = GameConfig::DEFAULT_SCANNER_REVEAL_TICKS;
    for _ in 1..window {
        assert!(engine.tick_reveal());
    }
    assert!(!engine.tick_reveal());
    assert_eq!(state.turn.reveal, None);
}

#[test]
fn reveal_closes_once_the_shot_is_gone() {
    let mut state = staged(&[Blank, Live], RoundPhase::PlayerTurn);
    state
        .combatant_mut(Side::Player)
        .grant_item(ItemKind::Scanner)
        .unwrap();

    let mut engine = GameEngine::new(&mut state);
    engine.use_item(Side::Player, 0).unwrap();
    engine.fire_self(Side::Player).unwrap();
    assert_eq!(state.turn.reveal, None);
}

#[test]
fn opponent_scanner_sets_matching_knowledge() {
    for (shot, flag) in [
        (Live, SideFlags::KNOWS_LIVE),
        (Blank, SideFlags::KNOWS_BLANK),
    ] {
        let mut state = staged(&[shot, Live, Blank], RoundPhase::OpponentTurn);
        state
            .combatant_mut(Side::Opponent)
            .grant_item(ItemKind::Scanner)
            .unwrap();

        GameEngine::new(&mut state)
            .use_item(Side::Opponent, 0)
            .unwrap();
        assert_eq!(state.turn.flags(Side::Opponent), flag);
        assert_eq!(state.turn.reveal, None);
    }
}

#[test]
fn last_shot_enters_round_start() {
    let mut state = staged(&[Blank], RoundPhase::PlayerTurn);
    let mut engine = GameEngine::new(&mut state);

    let outcome = engine.fire_self(Side::Player).unwrap();
    assert_eq!(outcome.next_turn, None);
    assert_eq!(engine.state().phase(), RoundPhase::RoundStart);

    assert_eq!(
        engine.fire_self(Side::Player),
        Err(ActionError::NotYourTurn {
            side: Side::Player,
            phase: RoundPhase::RoundStart
        })
    );
}

#[test]
fn begin_round_reloads_grants_and_hands_turn_to_player() {
    let rng = PcgRng;
    let mut state = GameState::with_seed(42);
    let mut engine = GameEngine::new(&mut state);
    engine.begin_round(&rng);

    let events = engine.into_events();
    assert!(matches!(
        events.first(),
        Some(GameEvent::ItemGranted { .. })
    ));
    assert!(events.contains(&GameEvent::PhaseChanged {
        from: RoundPhase::RoundStart,
        to: RoundPhase::PlayerTurn
    }));

    assert_eq!(state.phase(), RoundPhase::PlayerTurn);
    assert_eq!(state.turn.round, 1);
    assert_eq!(state.chamber.remaining(), GameConfig::CHAMBER_SIZE);
    for side in Side::ALL {
        assert_eq!(state.combatant(side).inventory.len(), 2);
    }
}

#[test]
fn grants_stop_at_a_full_inventory() {
    let rng = PcgRng;
    let mut state = GameState::with_seed(5);
    for kind in [ItemKind::Scanner, ItemKind::Scanner, ItemKind::OilDrink] {
        state.combatant_mut(Side::Player).grant_item(kind).unwrap();
    }

    let granted = GameEngine::new(&mut state).grant_items(&rng, Side::Player);
    assert_eq!(granted, 1);
    assert!(state.combatant(Side::Player).inventory.is_full());
}

#[test]
fn begin_round_keeps_health_and_clears_modifiers() {
    let rng = PcgRng;
    let mut state = staged(&[], RoundPhase::RoundStart);
    state.combatant_mut(Side::Player).health = 2;
    state
        .turn
        .flags_mut(Side::Opponent)
        .insert(SideFlags::PAUSED | SideFlags::DOUBLE_DAMAGE);

    GameEngine::new(&mut state).begin_round(&rng);
    assert_eq!(state.combatant(Side::Player).health, 2);
    assert!(state.turn.flags(Side::Opponent).is_empty());
}

#[test]
fn round_over_fires_after_the_grace_window() {
    let mut state = staged(&[Live, Blank, Blank], RoundPhase::PlayerTurn);
    state.combatant_mut(Side::Opponent).health = 1;

    // Tick T: the hit lands after win detection has already run.
    let mut engine = GameEngine::new(&mut state);
    assert_eq!(engine.check_win(), WinCheck::Clear);
    engine.fire_opponent(Side::Player).unwrap();
    assert_eq!(engine.state().combatant(Side::Opponent).health, 0);

    // Ticks T+1 ..= T+60.
    for tick in 1..=60 {
        assert_eq!(engine.check_win(), WinCheck::Grace { ticks: tick });
        assert_ne!(engine.state().phase(), RoundPhase::RoundOver);
    }

    // Tick T+61.
    assert_eq!(
        engine.check_win(),
        WinCheck::Decided {
            loser: Side::Opponent
        }
    );
    assert_eq!(engine.check_win(), WinCheck::Inactive);

    let round_overs = engine
        .events()
        .iter()
        .filter(|event| matches!(event, GameEvent::RoundOver { .. }))
        .count();
    assert_eq!(round_overs, 1);

    let snapshot = state.snapshot();
    assert_eq!(snapshot.phase, RoundPhase::RoundOver);
    assert_eq!(snapshot.loser, Some(Side::Opponent));
    assert_eq!(snapshot.winner(), Some(Side::Player));
    assert_eq!(state.turn.grace_counter, 0);
}

#[test]
fn player_is_checked_first_when_both_are_down() {
    let mut state = staged(&[Live, Blank], RoundPhase::OpponentTurn);
    state.config = GameConfig::new().with_grace_window(0);
    state.combatant_mut(Side::Player).health = 0;
    state.combatant_mut(Side::Opponent).health = -1;

    assert_eq!(
        GameEngine::new(&mut state).check_win(),
        WinCheck::Decided {
            loser: Side::Player
        }
    );
}

#[test]
fn healing_above_zero_resets_the_grace_counter() {
    let mut state = staged(&[Live, Blank], RoundPhase::PlayerTurn);
    state.combatant_mut(Side::Player).health = 0;
    state
        .combatant_mut(Side::Player)
        .grant_item(ItemKind::OilDrink)
        .unwrap();

    let mut engine = GameEngine::new(&mut state);
    assert_eq!(engine.check_win(), WinCheck::Grace { ticks: 1 });
    engine.use_item(Side::Player, 0).unwrap();
    assert_eq!(engine.check_win(), WinCheck::Clear);
    assert_eq!(state.turn.grace_counter, 0);
}

#[test]
fn restart_resets_everything() {
    let rng = PcgRng;
    let mut state = staged(&[Live], RoundPhase::RoundOver);
    state.turn.loser = Some(Side::Player);
    state.turn.round = 4;
    state.combatant_mut(Side::Player).health = -1;
    state
        .combatant_mut(Side::Opponent)
        .grant_item(ItemKind::Scanner)
        .unwrap();

    let mut engine = GameEngine::new(&mut state);
    engine.restart();
    assert_eq!(engine.state().phase(), RoundPhase::RoundStart);
    assert!(engine.state().chamber.is_empty());
    engine.begin_round(&rng);

    assert_eq!(state.turn.round, 1);
    assert_eq!(state.turn.loser, None);
    for side in Side::ALL {
        assert_eq!(state.combatant(side).health, 5);
        assert_eq!(state.combatant(side).inventory.len(), 2);
    }
}

#[test]
fn seeded_rounds_are_reproducible() {
    let rng = PcgRng;
    let mut a = GameState::with_seed(1234);
    let mut b = GameState::with_seed(1234);
    for _ in 0..3 {
        GameEngine::new(&mut a).begin_round(&rng);
        GameEngine::new(&mut b).begin_round(&rng);
    }
    assert_eq!(a, b);
}
