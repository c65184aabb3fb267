use crate::error::ActionError;
use crate::state::{RoundPhase, Shot, Side, SideFlags};

use super::{ActionOutcome, AnimationKind, GameEngine, GameEvent};

/// Firing and turn-transfer methods for GameEngine.
impl<'a> GameEngine<'a> {
    /// Fires the current shot at the actor.
    ///
    /// A blank keeps the turn with the actor. A live shot damages the actor
    /// and then passes the turn, subject to the pause flag.
    pub fn fire_self(&mut self, side: Side) -> Result<ActionOutcome, ActionError> {
        self.fire(side, side)
    }

    /// Fires the current shot at the other side. The turn transfer rule
    /// applies whatever the shot was.
    pub fn fire_opponent(&mut self, side: Side) -> Result<ActionOutcome, ActionError> {
        self.fire(side, side.other())
    }

    fn fire(&mut self, actor: Side, target: Side) -> Result<ActionOutcome, ActionError> {
        self.ensure_can_act(actor)?;
        let shot = self.consume_shot()?;
        self.emit(GameEvent::ShotFired {
            side: actor,
            target,
            shot,
        });

        let at_self = actor == target;
        let mut outcome = ActionOutcome {
            shot: Some(shot),
            ..ActionOutcome::default()
        };

        match shot {
            Shot::Live => {
                outcome.damage = self.hit(actor, target);
                let kind = if at_self {
                    AnimationKind::SelfLive
                } else {
                    AnimationKind::OpponentLive
                };
                self.emit(GameEvent::Animation { side: actor, kind });
                if !at_self {
                    self.emit(GameEvent::Animation {
                        side: target,
                        kind: AnimationKind::GettingHit,
                    });
                }
                self.transfer_turn(actor);
            }
            Shot::Blank => {
                let kind = if at_self {
                    AnimationKind::SelfBlank
                } else {
                    AnimationKind::OpponentBlank
                };
                self.emit(GameEvent::Animation { side: actor, kind });
                if !at_self {
                    self.transfer_turn(actor);
                }
            }
        }

        self.finish_action(&mut outcome);
        Ok(outcome)
    }

    /// Applies one live hit dealt by `actor`, consuming its double damage.
    fn hit(&mut self, actor: Side, target: Side) -> i32 {
        let bonus = self.state.turn.take_flag(actor, SideFlags::DOUBLE_DAMAGE);
        let amount = if bonus { 2 } else { 1 };

        let combatant = self.state.combatant_mut(target);
        combatant.adjust_health(-amount);
        let health = combatant.health;
        self.emit(GameEvent::Damaged {
            side: target,
            amount,
            health,
        });
        amount
    }

    /// Hands the turn from `actor` to the other side, unless the other side
    /// is paused: then the flag is spent and `actor` keeps the turn.
    pub(super) fn transfer_turn(&mut self, actor: Side) {
        let next = actor.other();
        let holder = if self.state.turn.take_flag(next, SideFlags::PAUSED) {
            actor
        } else {
            next
        };
        self.set_phase(RoundPhase::turn_of(holder));
    }

    /// Pops the shot under the cursor. Whatever either side knew about it
    /// goes with it.
    pub(super) fn consume_shot(&mut self) -> Result<Shot, ActionError> {
        let shot = self.state.chamber.consume()?;
        self.state.turn.reveal = None;
        for side in Side::ALL {
            self.state.turn.flags_mut(side).remove(SideFlags::KNOWLEDGE);
        }
        Ok(shot)
    }
}
