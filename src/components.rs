//! ECS Components - Units, buildings, and resource nodes

use std::collections::VecDeque;

use bevy::prelude::*;

// ============================================================================
// CORE COMPONENTS
// ============================================================================

/// World position on the ground plane.
#[derive(Component, Clone, Copy, Debug)]
pub struct Position(pub Vec2);

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    pub fn distance(&self, other: Vec2) -> f32 {
        self.0.distance(other)
    }
}

/// Movement speed in world units per second.
#[derive(Component, Clone, Copy)]
pub struct Speed(pub f32);

impl Default for Speed {
    fn default() -> Self {
        Self(crate::constants::UNIT_SPEED)
    }
}

/// Current hitpoints. An entity dies when this reaches 0.
#[derive(Component, Clone, Copy)]
pub struct Health(pub f32);

/// Entity is dead and pending removal. Set by death_system, despawned by
/// death_cleanup_system; target-validity checks treat it as already gone.
#[derive(Component)]
pub struct Dead;

// ============================================================================
// UNIT ROLE MARKERS
// ============================================================================

/// Worker unit: gathers resources and raises buildings.
#[derive(Component)]
pub struct Villager;

/// Melee combat unit.
#[derive(Component)]
pub struct Swordsman;

// ============================================================================
// UNIT STATE
// ============================================================================

/// The resources a villager can gather and a town can stockpile.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ResourceKind {
    Wood,
    Gold,
    Stone,
    Food,
}

impl ResourceKind {
    /// Units gathered per second while in range of a matching node.
    pub fn gather_rate(&self) -> f32 {
        match self {
            Self::Wood => 2.0,
            Self::Gold => 1.0,
            Self::Stone => 1.5,
            Self::Food => 1.5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Gold => "gold",
            Self::Stone => "stone",
            Self::Food => "food",
        }
    }
}

/// What the unit is doing. Exactly one activity at a time.
/// Villagers use everything except `Attacking`; swordsmen use
/// `Waiting`/`Walking`/`Attacking`.
#[derive(Component, Default, Clone, Copy, Debug, PartialEq)]
pub enum Activity {
    #[default]
    Waiting,
    Walking,
    Building,
    Gathering(ResourceKind),
    Depositing(ResourceKind),
    Attacking,
}

impl Activity {
    /// Display name for UI/debug.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Walking => "walking",
            Self::Building => "building",
            Self::Gathering(ResourceKind::Wood) => "gathering wood",
            Self::Gathering(ResourceKind::Gold) => "gathering gold",
            Self::Gathering(ResourceKind::Stone) => "gathering stone",
            Self::Gathering(ResourceKind::Food) => "gathering food",
            Self::Depositing(_) => "depositing",
            Self::Attacking => "attacking",
        }
    }
}

/// Resources a villager is carrying, one accumulator per kind.
/// Accumulators only grow while gathering and reset to 0 on deposit.
#[derive(Component, Default, Clone, Copy, Debug)]
pub struct Carrying {
    pub wood: f32,
    pub gold: f32,
    pub stone: f32,
    pub food: f32,
}

impl Carrying {
    pub fn amount(&self, kind: ResourceKind) -> f32 {
        match kind {
            ResourceKind::Wood => self.wood,
            ResourceKind::Gold => self.gold,
            ResourceKind::Stone => self.stone,
            ResourceKind::Food => self.food,
        }
    }

    pub fn amount_mut(&mut self, kind: ResourceKind) -> &mut f32 {
        match kind {
            ResourceKind::Wood => &mut self.wood,
            ResourceKind::Gold => &mut self.gold,
            ResourceKind::Stone => &mut self.stone,
            ResourceKind::Food => &mut self.food,
        }
    }
}

// ============================================================================
// TARGETING / PATHS
// ============================================================================

/// Weak reference to the entity a unit is working on or attacking.
/// Never dereferenced blindly: systems look the entity up each tick and
/// fall back to `Activity::Waiting` when it is gone or `Dead`.
#[derive(Component, Clone, Copy)]
pub struct Target(pub Entity);

/// Point a unit is steering toward when it has no grid path (deposit trips,
/// swordsman walk orders).
#[derive(Component, Clone, Copy)]
pub struct TargetPosition(pub Vec2);

/// Queued grid path, front = next cell. Computed once at command time and
/// never replanned if the grid changes mid-traversal.
#[derive(Component, Default)]
pub struct Path(pub VecDeque<IVec2>);

/// Unit is in the current selection set.
#[derive(Component)]
pub struct Selected;

// ============================================================================
// COMBAT COMPONENTS
// ============================================================================

/// Static combat values for a swordsman.
#[derive(Component, Clone, Copy)]
pub struct AttackStats {
    pub attack: f32,
    pub defense: f32,
}

/// Count-down timer for attacks. The unit can strike when it reaches 0.
#[derive(Component, Default)]
pub struct AttackTimer(pub f32);

// ============================================================================
// WORLD ENTITIES
// ============================================================================

/// Immovable resource node. Trees yield wood, mines gold/stone, built
/// farms food.
#[derive(Component, Clone, Copy)]
pub struct ResourceNode(pub ResourceKind);

/// Player-visible building kinds.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BuildingKind {
    TownCenter,
    Barracks,
    Farm,
}

impl BuildingKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TownCenter => "town center",
            Self::Barracks => "barracks",
            Self::Farm => "farm",
        }
    }
}

/// Immovable building. A building site is a building that still carries
/// `UnderConstruction`.
#[derive(Component, Clone, Copy)]
pub struct Building(pub BuildingKind);

/// Construction state of a placed building. Removed when progress reaches
/// the build time; a finished farm additionally becomes a food node.
#[derive(Component, Default)]
pub struct UnderConstruction {
    pub progress: f32,
}

/// The town center. Deposit destination; its destruction is game over.
#[derive(Component)]
pub struct TownCenter;
