//! Health systems - Damage, death detection, cleanup

use bevy::prelude::*;

use crate::components::*;
use crate::messages::{DamageMsg, GameOverMsg};
use crate::resources::GameStatus;

/// Apply queued damage to Health components.
pub fn damage_system(mut events: MessageReader<DamageMsg>, mut query: Query<&mut Health>) {
    for event in events.read() {
        if let Ok(mut health) = query.get_mut(event.target) {
            health.0 = (health.0 - event.amount).max(0.0);
        }
    }
}

/// Mark dead entities. The town center going down is the terminal case:
/// the match is lost and the host UI is signalled.
pub fn death_system(
    mut commands: Commands,
    query: Query<(Entity, &Health, Option<&TownCenter>), Without<Dead>>,
    mut status: ResMut<GameStatus>,
    mut game_over: MessageWriter<GameOverMsg>,
) {
    for (entity, health, town_center) in query.iter() {
        if health.0 <= 0.0 {
            commands.entity(entity).insert(Dead);
            if town_center.is_some() {
                *status = GameStatus::Lost;
                game_over.write(GameOverMsg);
                warn!("town center destroyed — game over");
            }
        }
    }
}

/// Remove dead entities from the world. Units still holding a Target to
/// them fall back to waiting on their next tick.
pub fn death_cleanup_system(mut commands: Commands, query: Query<Entity, With<Dead>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
