use crate::config::GameConfig;
use crate::error::ActionError;
use crate::item::{ItemEffect, resolve_item};
use crate::state::{ScannerReveal, Shot, Side, SideFlags};

use super::{ActionOutcome, GameEngine, GameEvent};

impl<'a> GameEngine<'a> {
    /// Uses the item in `slot`. The slot is emptied and its effect applied
    /// immediately. Item use never spends double damage and never passes the
    /// turn.
    pub fn use_item(&mut self, side: Side, slot: usize) -> Result<ActionOutcome, ActionError> {
        self.ensure_can_act(side)?;

        if slot >= GameConfig::MAX_INVENTORY_SLOTS {
            return Err(ActionError::InvalidSlot { slot });
        }
        let kind = self
            .state
            .combatant(side)
            .inventory
            .get(slot)
            .ok_or(ActionError::EmptySlot { slot })?;

        let effect = resolve_item(kind, side, &self.state.chamber)?;
        self.state.combatant_mut(side).take_item(slot)?;
        self.emit(GameEvent::ItemUsed { side, kind });

        let mut outcome = ActionOutcome {
            item: Some(kind),
            ..ActionOutcome::default()
        };
        self.apply_effect(side, effect, &mut outcome)?;
        self.finish_action(&mut outcome);
        Ok(outcome)
    }

    fn apply_effect(
        &mut self,
        actor: Side,
        effect: ItemEffect,
        outcome: &mut ActionOutcome,
    ) -> Result<(), ActionError> {
        match effect {
            ItemEffect::Heal { side, amount } => {
                let combatant = self.state.combatant_mut(side);
                combatant.adjust_health(amount);
                let health = combatant.health;
                self.emit(GameEvent::Healed { side, health });
            }
            ItemEffect::Scan { side, shot } => self.scan(side, shot),
            ItemEffect::Pause { target } => {
                self.state.turn.flags_mut(target).insert(SideFlags::PAUSED);
            }
            ItemEffect::Overcharge { side } => {
                self.state
                    .turn
                    .flags_mut(side)
                    .insert(SideFlags::DOUBLE_DAMAGE);
            }
            ItemEffect::Discard { .. } => {
                let shot = self.consume_shot()?;
                outcome.shot = Some(shot);
                self.emit(GameEvent::ShotDiscarded { side: actor, shot });
            }
        }
        Ok(())
    }

    /// The human side gets a timed reveal; the opponent gets knowledge flags
    /// its policy reads.
    fn scan(&mut self, side: Side, shot: Shot) {
        match side {
            Side::Player => {
                self.state.turn.reveal = Some(ScannerReveal {
                    shot,
                    ticks_left: self.state.config.scanner_reveal_ticks,
                });
            }
            Side::Opponent => {
                let flags = self.state.turn.flags_mut(side);
                flags.remove(SideFlags::KNOWLEDGE);
                flags.insert(match shot {
                    Shot::Live => SideFlags::KNOWS_LIVE,
                    Shot::Blank => SideFlags::KNOWS_BLANK,
                });
            }
        }
    }
}
