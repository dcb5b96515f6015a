//! Command dispatch - Selection and right-click orders

use bevy::prelude::*;

use crate::components::*;
use crate::constants::MOVE_FAN_RADIUS;
use crate::messages::{BoxSelectMsg, CommandMsg, PickTarget, PlaceBuildingMsg, SelectMsg};
use crate::resources::ScreenMap;
use crate::world::{self, NavGrid};

/// What kind of thing a right-click landed on.
#[derive(Clone, Copy)]
enum PickClass {
    /// Gatherable resource node.
    Node,
    /// Unbuilt building site.
    Site,
    /// Something with hitpoints: a unit or the town center.
    Healthy,
    /// A finished building with nothing to attack or gather.
    Built,
}

/// What a selected unit should do about it.
#[derive(Clone, Copy)]
enum Order {
    Gather,
    Build,
    Attack,
    Walk,
}

/// Maintain the selection set: single click replaces it with one unit,
/// a drag box replaces it with every unit whose projected position falls
/// inside the rectangle.
pub fn select_system(
    mut commands: Commands,
    mut single: MessageReader<SelectMsg>,
    mut boxes: MessageReader<BoxSelectMsg>,
    selected: Query<Entity, With<Selected>>,
    units: Query<(Entity, &Position), (Without<Dead>, Or<(With<Villager>, With<Swordsman>)>)>,
    screen: Res<ScreenMap>,
) {
    for msg in single.read() {
        for entity in selected.iter() {
            commands.entity(entity).remove::<Selected>();
        }
        if let Some(pick) = msg.pick
            && units.contains(pick)
        {
            commands.entity(pick).insert(Selected);
        }
    }

    for msg in boxes.read() {
        for entity in selected.iter() {
            commands.entity(entity).remove::<Selected>();
        }
        for (entity, pos) in units.iter() {
            let projected = screen.0.world_to_screen(pos.0);
            if projected.x >= msg.min.x
                && projected.x <= msg.max.x
                && projected.y >= msg.min.y
                && projected.y <= msg.max.y
            {
                commands.entity(entity).insert(Selected);
            }
        }
    }
}

/// Classify the clicked target and hand every selected unit a path plus
/// the matching activity. Ground orders fan units out on a circle so a
/// group move does not stack them on one point. When no path exists the
/// unit keeps its current status.
pub fn command_system(
    mut commands: Commands,
    mut events: MessageReader<CommandMsg>,
    grid: Res<NavGrid>,
    mut selected: Query<
        (Entity, &Position, &mut Activity, &mut Path, Has<Villager>, Has<Swordsman>),
        (With<Selected>, Without<Dead>),
    >,
    nodes: Query<&Position, (With<ResourceNode>, Without<Dead>)>,
    sites: Query<&Position, (With<UnderConstruction>, Without<Dead>)>,
    healthy: Query<&Position, (With<Health>, Without<Dead>)>,
    buildings: Query<&Position, (With<Building>, Without<Dead>)>,
) {
    for event in events.read() {
        match event.pick {
            PickTarget::Ground(point) => {
                let count = selected.iter().count().max(1);
                for (i, (entity, pos, mut activity, mut path, _, _)) in
                    selected.iter_mut().enumerate()
                {
                    let angle = i as f32 * std::f32::consts::TAU / count as f32;
                    let goal = point + Vec2::new(angle.cos(), angle.sin()) * MOVE_FAN_RADIUS;
                    let Some(cells) =
                        grid.find_path(grid.world_to_cell(pos.0), grid.world_to_cell(goal))
                    else {
                        debug!("no path for move order");
                        continue;
                    };
                    path.0 = cells.into();
                    *activity = Activity::Walking;
                    commands.entity(entity).remove::<Target>();
                }
            }
            PickTarget::Entity(picked) => {
                let class = if let Ok(p) = nodes.get(picked) {
                    Some((p.0, PickClass::Node))
                } else if let Ok(p) = sites.get(picked) {
                    Some((p.0, PickClass::Site))
                } else if let Ok(p) = healthy.get(picked) {
                    Some((p.0, PickClass::Healthy))
                } else if let Ok(p) = buildings.get(picked) {
                    Some((p.0, PickClass::Built))
                } else {
                    None
                };
                let Some((goal, class)) = class else {
                    debug!("order for an unknown entity");
                    continue;
                };

                for (entity, pos, mut activity, mut path, is_villager, is_swordsman) in
                    selected.iter_mut()
                {
                    if picked == entity {
                        continue;
                    }
                    let order = match class {
                        PickClass::Node if is_villager => Order::Gather,
                        PickClass::Site if is_villager => Order::Build,
                        PickClass::Healthy if is_swordsman => Order::Attack,
                        _ => Order::Walk,
                    };
                    let Some(cells) =
                        grid.approach_path(grid.world_to_cell(pos.0), grid.world_to_cell(goal))
                    else {
                        debug!("no path to order target");
                        continue;
                    };
                    path.0 = cells.into();
                    match order {
                        Order::Gather => {
                            *activity = Activity::Walking;
                            commands.entity(entity).insert(Target(picked));
                        }
                        Order::Build => {
                            *activity = Activity::Building;
                            commands.entity(entity).insert(Target(picked));
                        }
                        Order::Attack => {
                            *activity = Activity::Attacking;
                            commands.entity(entity).insert(Target(picked));
                        }
                        Order::Walk => {
                            *activity = Activity::Walking;
                            commands.entity(entity).remove::<Target>();
                        }
                    }
                }
            }
        }
    }
}

/// Confirm building-mode placement: spawn the site (blocking its cell)
/// and put the first selected villager to work on it.
pub fn place_building_system(
    mut commands: Commands,
    mut events: MessageReader<PlaceBuildingMsg>,
    mut grid: ResMut<NavGrid>,
    mut builders: Query<
        (Entity, &Position, &mut Activity, &mut Path),
        (With<Selected>, With<Villager>, Without<Dead>),
    >,
) {
    for event in events.read() {
        if event.kind == BuildingKind::TownCenter {
            warn!("cannot place another town center");
            continue;
        }
        let site = world::spawn_site(&mut commands, &mut grid, event.kind, event.position);
        info!("{} site placed at {:.1},{:.1}", event.kind.name(), event.position.x, event.position.y);

        if let Some((entity, pos, mut activity, mut path)) = builders.iter_mut().next() {
            let Some(cells) =
                grid.approach_path(grid.world_to_cell(pos.0), grid.world_to_cell(event.position))
            else {
                debug!("builder has no path to the new site");
                continue;
            };
            path.0 = cells.into();
            *activity = Activity::Building;
            commands.entity(entity).insert(Target(site));
        }
    }
}
