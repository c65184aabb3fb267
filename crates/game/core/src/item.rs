//! Item effect resolution.
//!
//! [`resolve_item`] is pure: it reads the chamber and reports what the item
//! does. [`GameEngine`](crate::engine::GameEngine) applies the effect in the
//! same call, so nothing is ever queued.

use crate::state::{Chamber, ChamberError, ItemKind, Shot, Side};

/// State change produced by one item use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemEffect {
    /// Add `amount` health to `side`.
    Heal { side: Side, amount: i32 },

    /// `side` learns the shot under the cursor. Nothing is consumed.
    Scan { side: Side, shot: Shot },

    /// Suppress the next turn-pass into `target`.
    Pause { target: Side },

    /// Arm double damage for `side`.
    Overcharge { side: Side },

    /// Consume the shot under the cursor with no damage.
    Discard { shot: Shot },
}

/// Maps an item used by `actor` to its effect.
///
/// Only `Scanner` and `RubbishBin` touch the chamber; both fail on an empty
/// chamber.
pub fn resolve_item(
    kind: ItemKind,
    actor: Side,
    chamber: &Chamber,
) -> Result<ItemEffect, ChamberError> {
    let effect = match kind {
        ItemKind::OilDrink => ItemEffect::Heal {
            side: actor,
            amount: 1,
        },
        ItemKind::Scanner => ItemEffect::Scan {
            side: actor,
            shot: chamber.peek()?,
        },
        ItemKind::PauseRemote => ItemEffect::Pause {
            target: actor.other(),
        },
        ItemKind::Overcharger => ItemEffect::Overcharge { side: actor },
        ItemKind::RubbishBin => ItemEffect::Discard {
            shot: chamber.peek()?,
        },
    };
    Ok(effect)
}
