use bitflags::bitflags;

use roulette_core::ItemKind;

bitflags! {
    /// Stages already resolved in the current decision cycle.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct PolicyStages: u8 {
        const HEAL    = 1 << 0;
        const DISCARD = 1 << 1;
        const PAUSE   = 1 << 2;
        const SCAN    = 1 << 3;
        const CHARGE  = 1 << 4;
        const FIRE    = 1 << 5;
    }
}

impl PolicyStages {
    /// Item stages in evaluation order, with the counter value each one must
    /// exceed.
    pub const ITEM_STAGES: [(PolicyStages, ItemKind, u32); 5] = [
        (PolicyStages::HEAL, ItemKind::OilDrink, 30),
        (PolicyStages::DISCARD, ItemKind::RubbishBin, 60),
        (PolicyStages::PAUSE, ItemKind::PauseRemote, 90),
        (PolicyStages::SCAN, ItemKind::Scanner, 120),
        (PolicyStages::CHARGE, ItemKind::Overcharger, 150),
    ];

    /// Counter value the final firing decision must exceed.
    pub const FIRE_THRESHOLD: u32 = 180;
}
