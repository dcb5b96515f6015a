//! Constants - Tuning parameters for the simulation

use crate::resources::Cost;

/// Simulation ticks per second. The fixed timestep is decoupled from
/// whatever rate a host renderer runs at.
pub const SIM_TICK_HZ: f64 = 60.0;

// ============================================================================
// GRID / MOVEMENT
// ============================================================================

/// Walkability grid is GRID_SIZE x GRID_SIZE cells, centered on the origin.
pub const GRID_SIZE: i32 = 100;

/// Distance from a path node at which it counts as reached.
pub const ARRIVAL_EPSILON: f32 = 0.1;

/// Base movement speed in world units per second.
pub const UNIT_SPEED: f32 = 2.0;

/// Radius of the circle move orders fan selected units out onto.
pub const MOVE_FAN_RADIUS: f32 = 3.0;

// ============================================================================
// GATHERING / BUILDING
// ============================================================================

/// Range within which a unit can gather, deposit, or build.
pub const INTERACT_RANGE: f32 = 2.0;

/// Carried resource amount that forces a deposit trip.
pub const CARRY_CAPACITY: f32 = 10.0;

/// Cumulative in-range build seconds to finish a building site.
pub const BUILD_TIME: f32 = 5.0;

// ============================================================================
// COMBAT
// ============================================================================

/// Melee attack reach in world units.
pub const ATTACK_RANGE: f32 = 2.0;

/// Seconds between swordsman attacks.
pub const ATTACK_COOLDOWN: f32 = 1.0;

/// Damage multiplier granted by the swordsman attack research.
pub const RESEARCH_ATTACK_MULT: f32 = 1.2;

/// Villager hitpoints.
pub const VILLAGER_HP: f32 = 10.0;

/// Swordsman hitpoints.
pub const SWORDSMAN_HP: f32 = 50.0;

/// Swordsman base attack value.
pub const SWORDSMAN_ATTACK: f32 = 10.0;

/// Swordsman defense value (displayed, not yet applied to damage).
pub const SWORDSMAN_DEFENSE: f32 = 5.0;

/// Town center hitpoints. Its destruction ends the game.
pub const TOWN_CENTER_HP: f32 = 500.0;

// ============================================================================
// ECONOMY COSTS
// ============================================================================

/// Advance from Age I to Age II.
pub const AGE_II_COST: Cost = Cost { wood: 500, gold: 200, stone: 0 };

/// Advance from Age II to Age III.
pub const AGE_III_COST: Cost = Cost { wood: 1000, gold: 500, stone: 300 };

/// Research the swordsman attack upgrade (requires Age II).
pub const RESEARCH_ATTACK_COST: Cost = Cost { wood: 0, gold: 100, stone: 50 };

/// Train one swordsman at a barracks.
pub const SWORDSMAN_COST: Cost = Cost { wood: 20, gold: 60, stone: 0 };

/// Max world-unit offset from the barracks a trained swordsman spawns at.
pub const TRAIN_SPAWN_JITTER: f32 = 1.0;
