use crate::config::GameConfig;

/// One of the two duelling parties.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    /// The human-controlled side.
    Player,
    /// The side driven by the turn policy.
    Opponent,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Player, Side::Opponent];

    pub const fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Stable index used for per-side tables and seed derivation.
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }
}

/// Single-use consumables. Each slot holds at most one.
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
    strum::EnumCount,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ItemKind {
    /// Heals the user by one.
    OilDrink,
    /// Reveals the next shot without consuming it.
    Scanner,
    /// Makes the other side's next incoming turn-pass a no-op.
    PauseRemote,
    /// Doubles the user's next live hit.
    Overcharger,
    /// Discards the next shot.
    RubbishBin,
}

impl ItemKind {
    /// Draw table for item grants, in declaration order.
    pub const ALL: [ItemKind; 5] = [
        ItemKind::OilDrink,
        ItemKind::Scanner,
        ItemKind::PauseRemote,
        ItemKind::Overcharger,
        ItemKind::RubbishBin,
    ];
}

/// Errors raised by inventory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryError {
    #[error("no empty inventory slot")]
    Full,

    #[error("slot {slot} is empty")]
    EmptySlot { slot: usize },

    #[error("slot {slot} is out of range")]
    InvalidSlot { slot: usize },
}

/// Fixed four-slot item storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    slots: [Option<ItemKind>; GameConfig::MAX_INVENTORY_SLOTS],
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `kind` in the first empty slot and returns that slot.
    pub fn insert(&mut self, kind: ItemKind) -> Result<usize, InventoryError> {
        let (index, slot) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, slot)| slot.is_none())
            .ok_or(InventoryError::Full)?;
        *slot = Some(kind);
        Ok(index)
    }

    /// Empties `slot` and returns what it held.
    pub fn remove(&mut self, slot: usize) -> Result<ItemKind, InventoryError> {
        let entry = self
            .slots
            .get_mut(slot)
            .ok_or(InventoryError::InvalidSlot { slot })?;
        entry.take().ok_or(InventoryError::EmptySlot { slot })
    }

    pub fn get(&self, slot: usize) -> Option<ItemKind> {
        self.slots.get(slot).copied().flatten()
    }

    /// First slot holding `kind`, scanning in slot order.
    pub fn find(&self, kind: ItemKind) -> Option<usize> {
        self.slots.iter().position(|slot| *slot == Some(kind))
    }

    pub fn slots(&self) -> &[Option<ItemKind>; GameConfig::MAX_INVENTORY_SLOTS] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn clear(&mut self) {
        self.slots = Default::default();
    }
}

/// Health and items for one side.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    /// Unclamped; may dip below zero until the round-over check fires.
    pub health: i32,
    pub inventory: Inventory,
}

impl Combatant {
    pub fn new(starting_health: i32) -> Self {
        Self {
            health: starting_health,
            inventory: Inventory::new(),
        }
    }

    /// Adds `delta` to health with no ceiling or floor.
    pub fn adjust_health(&mut self, delta: i32) {
        self.health = self.health.saturating_add(delta);
    }

    pub fn grant_item(&mut self, kind: ItemKind) -> Result<usize, InventoryError> {
        self.inventory.insert(kind)
    }

    pub fn take_item(&mut self, slot: usize) -> Result<ItemKind, InventoryError> {
        self.inventory.remove(slot)
    }

    pub fn is_down(&self) -> bool {
        self.health <= 0
    }

    /// Restores starting health and empties every slot.
    pub fn reset(&mut self, starting_health: i32) {
        self.health = starting_health;
        self.inventory.clear();
    }
}

impl Default for Combatant {
    fn default() -> Self {
        Self::new(GameConfig::DEFAULT_STARTING_HEALTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn grants_fill_first_empty_slot() {
        let mut combatant = Combatant::default();
        assert_eq!(combatant.grant_item(ItemKind::Scanner), Ok(0));
        assert_eq!(combatant.grant_item(ItemKind::OilDrink), Ok(1));

        combatant.take_item(0).unwrap();
        assert_eq!(combatant.grant_item(ItemKind::RubbishBin), Ok(0));
        assert_eq!(combatant.inventory.get(0), Some(ItemKind::RubbishBin));
    }

    #[test]
    fn grant_into_full_inventory_fails() {
        let mut combatant = Combatant::default();
        for kind in ItemKind::iter().take(GameConfig::MAX_INVENTORY_SLOTS) {
            combatant.grant_item(kind).unwrap();
        }
        assert!(combatant.inventory.is_full());
        assert_eq!(
            combatant.grant_item(ItemKind::OilDrink),
            Err(InventoryError::Full)
        );
    }

    #[test]
    fn take_item_clears_slot_once() {
        let mut combatant = Combatant::default();
        combatant.grant_item(ItemKind::Overcharger).unwrap();

        assert_eq!(combatant.take_item(0), Ok(ItemKind::Overcharger));
        assert_eq!(
            combatant.take_item(0),
            Err(InventoryError::EmptySlot { slot: 0 })
        );
        assert_eq!(
            combatant.take_item(4),
            Err(InventoryError::InvalidSlot { slot: 4 })
        );
    }

    #[test]
    fn health_is_unclamped() {
        let mut combatant = Combatant::new(1);
        combatant.adjust_health(-2);
        assert_eq!(combatant.health, -1);
        assert!(combatant.is_down());

        combatant.adjust_health(10);
        assert_eq!(combatant.health, 9);
    }

    #[test]
    fn reset_restores_health_and_empties_inventory() {
        let mut combatant = Combatant::new(2);
        combatant.grant_item(ItemKind::PauseRemote).unwrap();
        combatant.reset(5);
        assert_eq!(combatant.health, 5);
        assert!(combatant.inventory.is_empty());
    }

    #[test]
    fn draw_table_covers_every_kind() {
        assert_eq!(ItemKind::ALL.len(), ItemKind::COUNT);
        assert!(ItemKind::iter().eq(ItemKind::ALL));
    }

    #[test]
    fn sides_are_opposed() {
        assert_eq!(Side::Player.other(), Side::Opponent);
        assert_eq!(Side::Opponent.other().other(), Side::Opponent);
        assert_eq!(Side::Opponent.to_string(), "opponent");
    }
}
