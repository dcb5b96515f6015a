//! Selection and command dispatch scenarios.

use bevy::prelude::*;

use crate::api;
use crate::components::*;
use crate::world::NavGrid;

use super::*;

fn is_selected(app: &App, entity: Entity) -> bool {
    app.world().entity(entity).get::<Selected>().is_some()
}

#[test]
fn single_click_selection_is_exclusive() {
    let mut app = test_app();
    let a = place_villager(&mut app, Vec2::ZERO);
    let b = place_villager(&mut app, Vec2::new(3.0, 0.0));

    api::select(app.world_mut(), Some(a));
    tick(&mut app);
    assert!(is_selected(&app, a) && !is_selected(&app, b));

    api::select(app.world_mut(), Some(b));
    tick(&mut app);
    assert!(!is_selected(&app, a) && is_selected(&app, b));

    api::select(app.world_mut(), None);
    tick(&mut app);
    assert!(!is_selected(&app, a) && !is_selected(&app, b));
}

#[test]
fn drag_box_selects_every_unit_inside() {
    let mut app = test_app();
    let near = place_villager(&mut app, Vec2::ZERO);
    let mid = place_swordsman(&mut app, Vec2::new(5.0, 5.0));
    let far = place_villager(&mut app, Vec2::new(20.0, 20.0));

    // Identity projection: screen coordinates are world coordinates.
    api::box_select(app.world_mut(), Vec2::new(-1.0, -1.0), Vec2::new(6.0, 6.0));
    tick(&mut app);

    assert!(is_selected(&app, near));
    assert!(is_selected(&app, mid));
    assert!(!is_selected(&app, far));
}

#[test]
fn ground_order_fans_units_around_the_point() {
    let mut app = test_app();
    let units: Vec<Entity> = (0..4)
        .map(|i| place_swordsman(&mut app, Vec2::new(i as f32, 0.0)))
        .collect();
    for unit in &units {
        app.world_mut().entity_mut(*unit).insert(Selected);
    }

    api::command_ground(app.world_mut(), Vec2::new(10.0, 10.0));
    tick(&mut app);

    let mut destinations = Vec::new();
    for unit in &units {
        let path = app.world().entity(*unit).get::<Path>().expect("unit has a path");
        assert!(!path.0.is_empty(), "move order produced a path");
        destinations.push(*path.0.back().unwrap());
        assert_eq!(activity(&app, *unit), Activity::Walking);
    }
    destinations.sort_by_key(|c| (c.x, c.y));
    destinations.dedup();
    assert_eq!(destinations.len(), units.len(), "no two units stack on one cell");
}

#[test]
fn node_order_splits_by_role() {
    let mut app = test_app();
    place_town_center(&mut app, Vec2::ZERO);
    let tree = place_tree(&mut app, Vec2::new(8.0, 0.0));
    let villager = place_villager(&mut app, Vec2::new(2.0, 0.0));
    let swordsman = place_swordsman(&mut app, Vec2::new(2.0, 2.0));
    app.world_mut().entity_mut(villager).insert(Selected);
    app.world_mut().entity_mut(swordsman).insert(Selected);

    api::command_entity(app.world_mut(), tree);
    tick(&mut app);

    // Villager will gather on arrival; swordsman just walks over.
    assert_eq!(activity(&app, villager), Activity::Walking);
    assert!(app.world().entity(villager).get::<Target>().is_some());
    assert_eq!(activity(&app, swordsman), Activity::Walking);
    assert!(app.world().entity(swordsman).get::<Target>().is_none());
}

#[test]
fn attack_order_only_binds_swordsmen() {
    let mut app = test_app();
    let enemy = place_swordsman(&mut app, Vec2::new(10.0, 0.0));
    let swordsman = place_swordsman(&mut app, Vec2::ZERO);
    let villager = place_villager(&mut app, Vec2::new(0.0, 2.0));
    app.world_mut().entity_mut(swordsman).insert(Selected);
    app.world_mut().entity_mut(villager).insert(Selected);

    api::command_entity(app.world_mut(), enemy);
    tick(&mut app);

    assert_eq!(activity(&app, swordsman), Activity::Attacking);
    assert!(app.world().entity(swordsman).get::<Target>().is_some());
    assert_eq!(activity(&app, villager), Activity::Walking);
}

#[test]
fn unreachable_order_keeps_current_status() {
    let mut app = test_app();
    let villager = place_villager(&mut app, Vec2::ZERO);
    app.world_mut().entity_mut(villager).insert(Selected);

    // Block the fan destination cell for a lone unit: point + (3, 0).
    let blocked = {
        let grid = app.world().resource::<NavGrid>();
        grid.world_to_cell(Vec2::new(13.0, 10.0))
    };
    app.world_mut().resource_mut::<NavGrid>().block(blocked);

    api::command_ground(app.world_mut(), Vec2::new(10.0, 10.0));
    tick(&mut app);

    assert_eq!(activity(&app, villager), Activity::Waiting, "no path, no state change");
    let path = app.world().entity(villager).get::<Path>().expect("path component");
    assert!(path.0.is_empty());
}
