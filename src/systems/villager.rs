//! Villager work systems - Gather, deposit, build

use bevy::prelude::*;

use crate::components::*;
use crate::constants::{BUILD_TIME, CARRY_CAPACITY, INTERACT_RANGE};
use crate::resources::Town;

/// Accumulate carried resources while in range of the targeted node,
/// closing back in on it when a deposit trip left the villager out of
/// range. A full load (>= capacity) starts a deposit trip to the town
/// center; a destroyed node drops the villager back to waiting.
pub fn gather_system(
    time: Res<Time<Fixed>>,
    mut commands: Commands,
    mut villagers: Query<
        (Entity, &mut Position, &Speed, &mut Carrying, &mut Activity, Option<&Target>, &Path),
        (With<Villager>, Without<Dead>),
    >,
    nodes: Query<&Position, (With<ResourceNode>, Without<Dead>, Without<Villager>)>,
    centers: Query<&Position, (With<TownCenter>, Without<Dead>, Without<Villager>)>,
) {
    let dt = time.delta_secs();

    for (entity, mut pos, speed, mut carrying, mut activity, target, path) in villagers.iter_mut()
    {
        let Activity::Gathering(kind) = *activity else { continue };
        if !path.0.is_empty() {
            continue; // still walking up to the node
        }

        let Some(target) = target else {
            *activity = Activity::Waiting;
            continue;
        };
        let Ok(node_pos) = nodes.get(target.0) else {
            // Node destroyed mid-gather.
            *activity = Activity::Waiting;
            commands.entity(entity).remove::<Target>();
            continue;
        };

        if pos.distance(node_pos.0) >= INTERACT_RANGE {
            let dir = (node_pos.0 - pos.0).normalize_or_zero();
            pos.0 += dir * speed.0 * dt;
            continue;
        }

        let amount = carrying.amount_mut(kind);
        *amount += kind.gather_rate() * dt;

        if *amount >= CARRY_CAPACITY {
            if let Some(center) = centers.iter().next() {
                commands.entity(entity).insert(TargetPosition(center.0));
                *activity = Activity::Depositing(kind);
            }
        }
    }
}

/// Walk a loaded villager to the town center and flush whole resource
/// units into the ledger; the fractional remainder is discarded. The
/// villager then returns to gathering the node it still targets.
pub fn deposit_system(
    time: Res<Time<Fixed>>,
    mut commands: Commands,
    mut town: ResMut<Town>,
    mut villagers: Query<
        (Entity, &mut Position, &Speed, &mut Carrying, &mut Activity, &TargetPosition),
        (With<Villager>, Without<Dead>),
    >,
) {
    let dt = time.delta_secs();

    for (entity, mut pos, speed, mut carrying, mut activity, drop_off) in villagers.iter_mut() {
        let Activity::Depositing(kind) = *activity else { continue };

        if pos.distance(drop_off.0) > INTERACT_RANGE {
            let dir = (drop_off.0 - pos.0).normalize_or_zero();
            pos.0 += dir * speed.0 * dt;
            continue;
        }

        let amount = carrying.amount_mut(kind);
        let whole = amount.floor() as i32;
        *amount = 0.0;
        town.deposit(kind, whole);
        *activity = Activity::Gathering(kind);
        commands.entity(entity).remove::<TargetPosition>();
        debug!("deposited {} {}", whole, kind.name());
    }
}

/// Walk a builder to its site, then advance construction while it stays
/// in range. At the build-time threshold the site becomes a finished
/// building; a finished farm immediately becomes a food node and its
/// builder starts gathering from it.
pub fn build_system(
    time: Res<Time<Fixed>>,
    mut commands: Commands,
    mut villagers: Query<
        (Entity, &mut Position, &Speed, &mut Activity, Option<&Target>, &Path),
        (With<Villager>, Without<Dead>),
    >,
    mut sites: Query<
        (&Position, &Building, &mut UnderConstruction),
        (Without<Dead>, Without<Villager>),
    >,
) {
    let dt = time.delta_secs();

    for (entity, mut pos, speed, mut activity, target, path) in villagers.iter_mut() {
        if *activity != Activity::Building {
            continue;
        }
        if !path.0.is_empty() {
            continue;
        }

        let Some(target) = target else {
            *activity = Activity::Waiting;
            continue;
        };
        let Ok((site_pos, building, mut site)) = sites.get_mut(target.0) else {
            // Site gone, or another builder already finished it.
            *activity = Activity::Waiting;
            commands.entity(entity).remove::<Target>();
            continue;
        };

        if pos.distance(site_pos.0) >= INTERACT_RANGE {
            let dir = (site_pos.0 - pos.0).normalize_or_zero();
            pos.0 += dir * speed.0 * dt;
            continue;
        }

        site.progress += dt;
        if site.progress >= BUILD_TIME {
            commands.entity(target.0).remove::<UnderConstruction>();
            info!("{} complete", building.0.name());

            if building.0 == BuildingKind::Farm {
                // A fresh farm is worked right away by its builder.
                commands.entity(target.0).insert(ResourceNode(ResourceKind::Food));
                *activity = Activity::Gathering(ResourceKind::Food);
            } else {
                *activity = Activity::Waiting;
                commands.entity(entity).remove::<Target>();
            }
        }
    }
}
