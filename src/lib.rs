//! Bastion - headless real-time-strategy simulation core.
//!
//! Villagers gather and build, a barracks trains swordsmen, units path
//! across a walkability grid. Rendering, cameras, and UI live in host
//! layers: a renderer reads `Position` components, an input layer writes
//! the messages in [`messages`], a UI reads [`resources::UiSummary`].

// ============================================================================
// MODULES
// ============================================================================

pub mod api;
pub mod components;
pub mod config;
pub mod constants;
pub mod messages;
pub mod resources;
pub mod systems;
pub mod world;

#[cfg(test)]
mod tests;

// ============================================================================
// IMPORTS
// ============================================================================

use bevy::ecs::schedule::ApplyDeferred;
use bevy::prelude::*;

use constants::SIM_TICK_HZ;
use messages::*;
use resources::*;
use systems::*;
use world::NavGrid;

// ============================================================================
// BEVY APP - Simulation schedule and resources
// ============================================================================

/// Simulation phases, chained inside `FixedUpdate`. Input runs first so
/// fresh orders take effect the same tick; Combat stages are chained
/// internally so damage, death, and cleanup observe each other in order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Input,    // Selection + command dispatch + building placement
    Spawn,    // Create unit entities from spawn messages
    Movement, // Path following and arrival transitions
    Work,     // Villager gather/deposit/build
    Combat,   // Cooldowns, attacks, damage, death
    Economy,  // Age, research, training
    Status,   // UI summary refresh
}

/// Wire the simulation into a Bevy app. Everything runs in `FixedUpdate`
/// at [`SIM_TICK_HZ`], decoupled from however fast a host renders.
pub fn build_app(app: &mut App) {
    app.add_message::<SelectMsg>()
        .add_message::<BoxSelectMsg>()
        .add_message::<CommandMsg>()
        .add_message::<PlaceBuildingMsg>()
        .add_message::<AdvanceAgeMsg>()
        .add_message::<ResearchAttackMsg>()
        .add_message::<TrainSwordsmanMsg>()
        .add_message::<SpawnVillagerMsg>()
        .add_message::<SpawnSwordsmanMsg>()
        .add_message::<DamageMsg>()
        .add_message::<GameOverMsg>()
        .init_resource::<Town>()
        .init_resource::<GameStatus>()
        .init_resource::<UiSummary>()
        .init_resource::<NavGrid>()
        .init_resource::<ScreenMap>()
        .init_resource::<SimRng>()
        .init_resource::<config::SimSettings>()
        .insert_resource(Time::<Fixed>::from_hz(SIM_TICK_HZ))
        .configure_sets(
            FixedUpdate,
            (
                Step::Input,
                Step::Spawn,
                Step::Movement,
                Step::Work,
                Step::Combat,
                Step::Economy,
                Step::Status,
            )
                .chain(),
        )
        // Flush commands after Spawn so Movement sees new entities
        .add_systems(FixedUpdate, ApplyDeferred.after(Step::Spawn).before(Step::Movement))
        .add_systems(
            FixedUpdate,
            (select_system, place_building_system, command_system)
                .chain()
                .in_set(Step::Input),
        )
        .add_systems(
            FixedUpdate,
            (spawn_villager_system, spawn_swordsman_system).in_set(Step::Spawn),
        )
        .add_systems(FixedUpdate, follow_path_system.in_set(Step::Movement))
        .add_systems(
            FixedUpdate,
            (gather_system, deposit_system, build_system)
                .chain()
                .in_set(Step::Work),
        )
        .add_systems(
            FixedUpdate,
            (
                cooldown_system,
                attack_system,
                damage_system,
                death_system,
                death_cleanup_system,
            )
                .chain()
                .in_set(Step::Combat),
        )
        .add_systems(
            FixedUpdate,
            (advance_age_system, research_attack_system, train_swordsman_system)
                .chain()
                .in_set(Step::Economy),
        )
        .add_systems(FixedUpdate, ui_summary_system.in_set(Step::Status));
}
