//! Swordsman combat scenarios.

use bevy::prelude::*;

use crate::components::*;
use crate::messages::GameOverMsg;
use crate::resources::{GameStatus, Town};

use super::*;

fn order_attack(app: &mut App, attacker: Entity, victim: Entity) {
    app.world_mut()
        .entity_mut(attacker)
        .insert((Activity::Attacking, Target(victim)));
}

#[test]
fn base_damage_gated_by_cooldown() {
    let mut app = test_app();
    let attacker = place_swordsman(&mut app, Vec2::ZERO);
    let victim = place_swordsman(&mut app, Vec2::new(1.0, 0.0));
    order_attack(&mut app, attacker, victim);

    // First strike lands immediately.
    tick(&mut app);
    assert_eq!(health(&app, victim), 40.0, "base attack is 10");

    // No second strike inside the 1s cooldown.
    run_secs(&mut app, 0.9);
    assert_eq!(health(&app, victim), 40.0);

    // Cooldown elapsed: second strike.
    run_secs(&mut app, 0.2);
    assert_eq!(health(&app, victim), 30.0);
}

#[test]
fn researched_attack_hits_for_twelve() {
    let mut app = test_app();
    let attacker = place_swordsman(&mut app, Vec2::ZERO);
    let victim = place_swordsman(&mut app, Vec2::new(1.0, 0.0));
    app.world_mut().resource_mut::<Town>().research.swordsman_attack = true;
    order_attack(&mut app, attacker, victim);

    tick(&mut app);
    let hp = health(&app, victim);
    assert!((hp - 38.0).abs() < 1e-3, "10 x 1.2 after research, got hp {hp}");
}

#[test]
fn kill_removes_victim_and_resets_attacker() {
    let mut app = test_app();
    let attacker = place_swordsman(&mut app, Vec2::ZERO);
    let victim = place_villager(&mut app, Vec2::new(1.0, 0.0));
    order_attack(&mut app, attacker, victim);

    // One 10-damage strike fells a 10hp villager.
    tick(&mut app);
    tick(&mut app);
    assert!(is_gone(&app, victim), "dead victim removed from the world");
    assert_eq!(activity(&app, attacker), Activity::Waiting);
    assert!(app.world().entity(attacker).get::<Target>().is_none());
}

#[test]
fn town_center_destruction_ends_the_game() {
    let mut app = test_app();
    let center = place_town_center(&mut app, Vec2::ZERO);
    app.world_mut().entity_mut(center).insert(Health(15.0));
    let attacker = place_swordsman(&mut app, Vec2::new(1.0, 0.0));
    order_attack(&mut app, attacker, center);

    run_secs(&mut app, 1.5);
    assert_eq!(*app.world().resource::<GameStatus>(), GameStatus::Lost);
    assert!(is_gone(&app, center));
    assert!(
        !app.world().resource::<Messages<GameOverMsg>>().is_empty(),
        "host is signalled"
    );
}

#[test]
fn attacker_chases_distant_target() {
    let mut app = test_app();
    let attacker = place_swordsman(&mut app, Vec2::ZERO);
    let victim = place_swordsman(&mut app, Vec2::new(6.0, 0.0));
    order_attack(&mut app, attacker, victim);

    // 4 units to close at speed 2, then the first strike.
    run_secs(&mut app, 2.5);
    assert!(health(&app, victim) < 50.0, "chase closed the gap and struck");
}

#[test]
fn dead_target_mid_fight_resets_attacker() {
    let mut app = test_app();
    let attacker = place_swordsman(&mut app, Vec2::ZERO);
    let victim = place_swordsman(&mut app, Vec2::new(1.0, 0.0));
    order_attack(&mut app, attacker, victim);

    tick(&mut app);
    app.world_mut().despawn(victim);
    tick(&mut app);
    assert_eq!(activity(&app, attacker), Activity::Waiting);
}
