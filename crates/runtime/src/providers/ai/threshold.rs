use roulette_core::{Action, GameState, Side, SideFlags};

use super::{PolicyStages, TurnPolicy};

/// Counter-driven opponent policy.
///
/// Each stage fires at most once per decision cycle, on the first tick the
/// counter exceeds its threshold, using the first matching item in slot
/// order. The fire stage ends the cycle.
#[derive(Clone, Debug, Default)]
pub struct ThresholdPolicy {
    counter: u32,
    done: PolicyStages,
    /// Knowledge held when a self-shot was chosen; the player shot is
    /// re-checked against it once that shot resolves.
    pending_shot: Option<SideFlags>,
}

impl ThresholdPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks elapsed in the current decision cycle.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn stages(&self) -> PolicyStages {
        self.done
    }

    fn end_cycle(&mut self) {
        self.counter = 0;
        self.done = PolicyStages::empty();
    }

    fn item_actions(&mut self, state: &GameState, actions: &mut Vec<Action>) {
        let me = state.combatant(Side::Opponent);
        let flags = state.turn.flags(Side::Opponent);
        let live_heavy = state.chamber.live_count() > state.chamber.blank_count();

        for (stage, kind, threshold) in PolicyStages::ITEM_STAGES {
            if self.done.contains(stage) || self.counter <= threshold {
                continue;
            }
            self.done.insert(stage);

            let wanted = if stage == PolicyStages::DISCARD {
                live_heavy
            } else if stage == PolicyStages::CHARGE {
                flags.contains(SideFlags::KNOWS_LIVE)
            } else {
                true
            };
            if !wanted {
                continue;
            }

            if let Some(slot) = me.inventory.find(kind) {
                tracing::debug!(counter = self.counter, %kind, slot, "opponent uses item");
                actions.push(Action::use_item(Side::Opponent, slot));
            }
        }
    }

    /// Picks the first shot of the final decision. A self-shot defers the
    /// player shot to [`TurnPolicy::follow_up`].
    fn fire_actions(&mut self, state: &GameState, actions: &mut Vec<Action>) {
        let flags = state.turn.flags(Side::Opponent);
        let live = state.chamber.live_count();
        let blank = state.chamber.blank_count();

        if blank >= live || flags.contains(SideFlags::KNOWS_BLANK) {
            actions.push(Action::fire_self(Side::Opponent));
            self.pending_shot = Some(flags);
        } else if shoots_player(live, blank, flags) {
            actions.push(Action::fire_opponent(Side::Opponent));
        }
        tracing::debug!(live, blank, ?flags, "opponent fires");
    }
}

fn shoots_player(live: usize, blank: usize, flags: SideFlags) -> bool {
    live > blank || flags.contains(SideFlags::KNOWS_LIVE)
}

impl TurnPolicy for ThresholdPolicy {
    fn on_tick(&mut self, state: &GameState) -> Vec<Action> {
        self.counter += 1;
        let mut actions = Vec::new();

        self.item_actions(state, &mut actions);

        if !self.done.contains(PolicyStages::FIRE)
            && self.counter > PolicyStages::FIRE_THRESHOLD
        {
            self.done.insert(PolicyStages::FIRE);
            self.fire_actions(state, &mut actions);
            self.end_cycle();
        }

        actions
    }

    fn follow_up(&mut self, state: &GameState) -> Option<Action> {
        let flags = self.pending_shot.take()?;
        let live = state.chamber.live_count();
        let blank = state.chamber.blank_count();

        shoots_player(live, blank, flags).then(|| {
            tracing::debug!(live, blank, ?flags, "opponent fires again");
            Action::fire_opponent(Side::Opponent)
        })
    }

    fn reset(&mut self) {
        self.end_cycle();
        self.pending_shot = None;
    }
}
