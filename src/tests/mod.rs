//! Test harness - headless simulation apps stepped one fixed tick at a time.
//!
//! Each scenario file builds its own little world with the placement
//! helpers below, issues commands through `crate::api`, and asserts on
//! component/resource state. No renderer, no real clock.

mod combat;
mod command;
mod movement;

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::components::*;
use crate::constants::SIM_TICK_HZ;
use crate::resources::{SimRng, Town};
use crate::world::{self, NavGrid};

/// Build a simulation app over an empty world with a fixed seed.
pub fn test_app() -> App {
    let mut app = App::new();
    app.insert_resource(SimRng(StdRng::seed_from_u64(7)));
    crate::build_app(&mut app);
    app
}

/// Advance the simulation one fixed tick.
pub fn tick(app: &mut App) {
    let step = app.world().resource::<Time<Fixed>>().timestep();
    app.world_mut().resource_mut::<Time<Fixed>>().advance_by(step);
    app.world_mut().run_schedule(FixedUpdate);
}

/// Run the simulation for `seconds` of game time.
pub fn run_secs(app: &mut App, seconds: f32) {
    let ticks = (seconds as f64 * SIM_TICK_HZ).round() as usize;
    for _ in 0..ticks {
        tick(app);
    }
}

// ============================================================================
// PLACEMENT HELPERS (drive the real world.rs spawn functions)
// ============================================================================

fn with_grid<R>(app: &mut App, f: impl FnOnce(&mut Commands, &mut NavGrid) -> R) -> R {
    let world = app.world_mut();
    let result = world.resource_scope(|world, mut grid: Mut<NavGrid>| {
        let mut commands = world.commands();
        f(&mut commands, &mut *grid)
    });
    world.flush();
    result
}

pub fn place_town_center(app: &mut App, position: Vec2) -> Entity {
    with_grid(app, |c, g| world::spawn_town_center(c, g, position))
}

pub fn place_tree(app: &mut App, position: Vec2) -> Entity {
    with_grid(app, |c, g| world::spawn_tree(c, g, position))
}

pub fn place_gold_mine(app: &mut App, position: Vec2) -> Entity {
    with_grid(app, |c, g| world::spawn_gold_mine(c, g, position))
}

pub fn place_site(app: &mut App, kind: BuildingKind, position: Vec2) -> Entity {
    with_grid(app, |c, g| world::spawn_site(c, g, kind, position))
}

pub fn place_barracks(app: &mut App, position: Vec2) -> Entity {
    with_grid(app, |c, g| world::spawn_barracks(c, g, position))
}

pub fn place_villager(app: &mut App, position: Vec2) -> Entity {
    app.world_mut().spawn(world::villager_bundle(position)).id()
}

pub fn place_swordsman(app: &mut App, position: Vec2) -> Entity {
    app.world_mut().spawn(world::swordsman_bundle(position)).id()
}

// ============================================================================
// STATE ACCESSORS
// ============================================================================

pub fn activity(app: &App, entity: Entity) -> Activity {
    *app.world().entity(entity).get::<Activity>().expect("unit has an activity")
}

pub fn carrying(app: &App, entity: Entity) -> Carrying {
    *app.world().entity(entity).get::<Carrying>().expect("villager carries resources")
}

pub fn position(app: &App, entity: Entity) -> Vec2 {
    app.world().entity(entity).get::<Position>().expect("entity has a position").0
}

pub fn health(app: &App, entity: Entity) -> f32 {
    app.world().entity(entity).get::<Health>().expect("entity has health").0
}

pub fn town(app: &App) -> Town {
    app.world().resource::<Town>().clone()
}

pub fn is_gone(app: &App, entity: Entity) -> bool {
    app.world().get_entity(entity).is_err()
}
