//! Spawn systems - Create unit entities from spawn messages

use bevy::prelude::*;

use crate::messages::{SpawnSwordsmanMsg, SpawnVillagerMsg};
use crate::world::{swordsman_bundle, villager_bundle};

/// Process villager spawn messages.
pub fn spawn_villager_system(
    mut commands: Commands,
    mut events: MessageReader<SpawnVillagerMsg>,
) {
    for event in events.read() {
        commands.spawn(villager_bundle(event.position));
    }
}

/// Process swordsman spawn messages (written by the barracks train action).
pub fn spawn_swordsman_system(
    mut commands: Commands,
    mut events: MessageReader<SpawnSwordsmanMsg>,
) {
    for event in events.read() {
        commands.spawn(swordsman_bundle(event.position));
    }
}
