//! ECS Messages - Commands from the input/UI collaborators and internal
//! simulation events. Hosts write the input messages; the core writes
//! `GameOverMsg` back.

use bevy::prelude::*;

use crate::components::BuildingKind;

// ============================================================================
// INPUT MESSAGES (host -> core)
// ============================================================================

/// What a right-click resolved to after the host's raycast.
#[derive(Clone, Copy, Debug)]
pub enum PickTarget {
    /// An entity was hit: a resource node, building, or unit.
    Entity(Entity),
    /// Open ground at this world position.
    Ground(Vec2),
}

/// Right-click order for the current selection.
#[derive(Message, Clone, Copy)]
pub struct CommandMsg {
    pub pick: PickTarget,
}

/// Exclusive single-click selection. `None` clears the selection.
#[derive(Message, Clone, Copy)]
pub struct SelectMsg {
    pub pick: Option<Entity>,
}

/// Inclusive drag-box selection, in screen coordinates. Tested against
/// each unit's projected position.
#[derive(Message, Clone, Copy)]
pub struct BoxSelectMsg {
    pub min: Vec2,
    pub max: Vec2,
}

/// Confirm building-mode placement at a ground position. Spawns a site
/// and sends the first selected villager to build it.
#[derive(Message, Clone, Copy)]
pub struct PlaceBuildingMsg {
    pub kind: BuildingKind,
    pub position: Vec2,
}

// ============================================================================
// UI BUTTON MESSAGES
// ============================================================================

/// Advance to the next age if the ledger covers it.
#[derive(Message, Clone, Copy)]
pub struct AdvanceAgeMsg;

/// Research the swordsman attack upgrade.
#[derive(Message, Clone, Copy)]
pub struct ResearchAttackMsg;

/// Train a swordsman at the given barracks.
#[derive(Message, Clone, Copy)]
pub struct TrainSwordsmanMsg {
    pub barracks: Entity,
}

// ============================================================================
// INTERNAL MESSAGES
// ============================================================================

/// Spawn a villager at a position.
#[derive(Message, Clone, Copy)]
pub struct SpawnVillagerMsg {
    pub position: Vec2,
}

/// Spawn a swordsman at a position.
#[derive(Message, Clone, Copy)]
pub struct SpawnSwordsmanMsg {
    pub position: Vec2,
}

/// Damage to apply to an entity this tick.
#[derive(Message, Clone, Copy)]
pub struct DamageMsg {
    pub target: Entity,
    pub amount: f32,
}

/// The town center was destroyed. The host UI presents the end screen.
#[derive(Message, Clone, Copy)]
pub struct GameOverMsg;
