//! Host-facing command surface.
//!
//! Hosts that run their own Bevy systems can write the messages in
//! [`crate::messages`] directly; hosts that only hold a `World` (or an
//! `App` they tick by hand) use these helpers.

use bevy::prelude::*;

use crate::components::BuildingKind;
use crate::messages::*;
use crate::resources::ScreenMap;

fn post<M: Message>(world: &mut World, message: M) {
    world.resource_mut::<Messages<M>>().write(message);
}

/// Exclusive single-click selection; `None` clears the selection.
pub fn select(world: &mut World, pick: Option<Entity>) {
    post(world, SelectMsg { pick });
}

/// Inclusive drag-box selection over screen coordinates.
pub fn box_select(world: &mut World, min: Vec2, max: Vec2) {
    post(world, BoxSelectMsg { min, max });
}

/// Right-click order on an entity.
pub fn command_entity(world: &mut World, target: Entity) {
    post(world, CommandMsg { pick: PickTarget::Entity(target) });
}

/// Right-click order on open ground (world coordinates).
pub fn command_ground(world: &mut World, point: Vec2) {
    post(world, CommandMsg { pick: PickTarget::Ground(point) });
}

/// Confirm building-mode placement at a world position.
pub fn place_building(world: &mut World, kind: BuildingKind, position: Vec2) {
    post(world, PlaceBuildingMsg { kind, position });
}

/// UI button: advance to the next age.
pub fn advance_age(world: &mut World) {
    post(world, AdvanceAgeMsg);
}

/// UI button: research the swordsman attack upgrade.
pub fn research_attack(world: &mut World) {
    post(world, ResearchAttackMsg);
}

/// UI button: train a swordsman at the given barracks.
pub fn train_swordsman(world: &mut World, barracks: Entity) {
    post(world, TrainSwordsmanMsg { barracks });
}

/// Translate a click's screen coordinates to ground coordinates through
/// the installed projection.
pub fn screen_to_ground(world: &World, screen: Vec2) -> Vec2 {
    world.resource::<ScreenMap>().0.screen_to_world(screen)
}
