//! ECS Resources - Shared simulation state

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::components::ResourceKind;

// ============================================================================
// TOWN LEDGER
// ============================================================================

/// Economic tier. Advancing debits the ledger; the age never decreases
/// and never skips a tier.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Age {
    I,
    II,
    III,
}

impl Age {
    pub fn next(self) -> Option<Age> {
        match self {
            Age::I => Some(Age::II),
            Age::II => Some(Age::III),
            Age::III => None,
        }
    }

    /// Ordinal 1..=3 for display.
    pub fn ordinal(self) -> u8 {
        match self {
            Age::I => 1,
            Age::II => 2,
            Age::III => 3,
        }
    }
}

/// Price of an economy action. Food is never spent.
#[derive(Clone, Copy, Debug)]
pub struct Cost {
    pub wood: i32,
    pub gold: i32,
    pub stone: i32,
}

/// Research flags. Set once, never cleared.
#[derive(Default, Clone, Copy, Debug)]
pub struct ResearchedTech {
    pub swordsman_attack: bool,
}

/// Town-level state: stockpiles, age, and research. Deposits arrive as
/// whole units (the fractional remainder of a carried load is discarded),
/// so the ledger holds integers. Counters never go negative: every debit
/// is preceded by a can_afford check.
#[derive(Resource, Clone, Debug)]
pub struct Town {
    pub wood: i32,
    pub gold: i32,
    pub stone: i32,
    pub food: i32,
    pub age: Age,
    pub research: ResearchedTech,
}

impl Default for Town {
    fn default() -> Self {
        Self {
            wood: 0,
            gold: 0,
            stone: 0,
            food: 0,
            age: Age::I,
            research: ResearchedTech::default(),
        }
    }
}

impl Town {
    pub fn stock(&self, kind: ResourceKind) -> i32 {
        match kind {
            ResourceKind::Wood => self.wood,
            ResourceKind::Gold => self.gold,
            ResourceKind::Stone => self.stone,
            ResourceKind::Food => self.food,
        }
    }

    /// Credit a deposit of whole resource units.
    pub fn deposit(&mut self, kind: ResourceKind, amount: i32) {
        match kind {
            ResourceKind::Wood => self.wood += amount,
            ResourceKind::Gold => self.gold += amount,
            ResourceKind::Stone => self.stone += amount,
            ResourceKind::Food => self.food += amount,
        }
    }

    pub fn can_afford(&self, cost: &Cost) -> bool {
        self.wood >= cost.wood && self.gold >= cost.gold && self.stone >= cost.stone
    }

    /// Debit a cost the caller has already checked with can_afford.
    pub fn debit(&mut self, cost: &Cost) {
        self.wood -= cost.wood;
        self.gold -= cost.gold;
        self.stone -= cost.stone;
    }
}

// ============================================================================
// GAME STATUS
// ============================================================================

/// Terminal state of the match. Lost when the town center falls, won on
/// reaching Age III.
#[derive(Resource, Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    #[default]
    Running,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Running
    }
}

// ============================================================================
// UI SINK
// ============================================================================

/// Plain-text summaries for a host UI. Refreshed every tick; the core
/// never reads anything back from it.
#[derive(Resource, Default, Clone, Debug)]
pub struct UiSummary {
    /// Resource totals, e.g. "wood 120  gold 45  stone 0  food 7".
    pub resources: String,
    /// Current age line.
    pub age: String,
    /// Stats of the selection: single-unit detail or a count.
    pub selection: String,
}

// ============================================================================
// RANDOMNESS
// ============================================================================

/// Seeded RNG for world generation and spawn jitter. One shared stream so
/// runs with the same settings are reproducible.
#[derive(Resource)]
pub struct SimRng(pub StdRng);

impl Default for SimRng {
    fn default() -> Self {
        Self(StdRng::seed_from_u64(0))
    }
}

// ============================================================================
// SCREEN PROJECTION SEAM
// ============================================================================

/// Projection supplied by the host renderer. The core only needs it to
/// test drag-box selection against unit screen positions and to turn
/// click coordinates back into ground positions.
pub trait Project: Send + Sync {
    fn world_to_screen(&self, world: Vec2) -> Vec2;
    fn screen_to_world(&self, screen: Vec2) -> Vec2;
}

/// Identity projection: world units are screen units. Stands in until a
/// host installs its camera.
pub struct IdentityProjection;

impl Project for IdentityProjection {
    fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world
    }

    fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen
    }
}

/// The installed projection.
#[derive(Resource)]
pub struct ScreenMap(pub Box<dyn Project>);

impl Default for ScreenMap {
    fn default() -> Self {
        Self(Box::new(IdentityProjection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_check_then_debit() {
        let mut town = Town::default();
        town.wood = 500;
        town.gold = 200;
        let cost = Cost { wood: 500, gold: 200, stone: 0 };
        assert!(town.can_afford(&cost));
        town.debit(&cost);
        assert_eq!((town.wood, town.gold, town.stone), (0, 0, 0));
        assert!(!town.can_afford(&Cost { wood: 1, gold: 0, stone: 0 }));
    }

    #[test]
    fn age_never_skips() {
        assert_eq!(Age::I.next(), Some(Age::II));
        assert_eq!(Age::II.next(), Some(Age::III));
        assert_eq!(Age::III.next(), None);
    }
}
