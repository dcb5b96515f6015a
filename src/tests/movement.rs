//! Path following and arrival scenarios.

use bevy::prelude::*;

use crate::api;
use crate::components::*;

use super::*;

#[test]
fn walk_order_arrives_and_goes_idle() {
    let mut app = test_app();
    let villager = place_villager(&mut app, Vec2::ZERO);
    app.world_mut().entity_mut(villager).insert(Selected);

    // A lone unit fans to point + (radius, 0) = (6, 0).
    api::command_ground(app.world_mut(), Vec2::new(3.0, 0.0));
    tick(&mut app);
    assert_eq!(activity(&app, villager), Activity::Walking);

    run_secs(&mut app, 5.0);
    assert_eq!(activity(&app, villager), Activity::Waiting);
    let path = app.world().entity(villager).get::<Path>().expect("path component");
    assert!(path.0.is_empty());
    let arrived = position(&app, villager);
    assert!(arrived.distance(Vec2::new(6.0, 0.0)) < 0.2, "arrived at {arrived}");
}

#[test]
fn arrival_at_a_node_switches_to_its_gather_state() {
    let mut app = test_app();
    place_town_center(&mut app, Vec2::ZERO);
    let mine = place_gold_mine(&mut app, Vec2::new(6.0, 0.0));
    let villager = place_villager(&mut app, Vec2::new(2.0, 0.0));
    app.world_mut().entity_mut(villager).insert(Selected);

    api::command_entity(app.world_mut(), mine);
    tick(&mut app);

    run_secs(&mut app, 3.0);
    assert_eq!(activity(&app, villager), Activity::Gathering(ResourceKind::Gold));
}

#[test]
fn target_lost_mid_walk_ends_in_waiting() {
    let mut app = test_app();
    place_town_center(&mut app, Vec2::ZERO);
    let tree = place_tree(&mut app, Vec2::new(8.0, 0.0));
    let villager = place_villager(&mut app, Vec2::ZERO);
    app.world_mut().entity_mut(villager).insert(Selected);

    api::command_entity(app.world_mut(), tree);
    tick(&mut app);
    run_secs(&mut app, 1.0);

    // The tree is felled while the villager is still on the road.
    app.world_mut().despawn(tree);
    run_secs(&mut app, 4.0);
    assert_eq!(activity(&app, villager), Activity::Waiting);
}
