//! Bastion - headless demo runner.
//!
//! Generates a world, orders the starting villagers to the nearest tree,
//! and logs the town summary while the simulation runs at its fixed tick
//! rate. Exits after `demo_seconds`.

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use bastion::components::*;
use bastion::messages::{CommandMsg, PickTarget};
use bastion::resources::{SimRng, UiSummary};
use bastion::{Step, config, world};

fn main() {
    let settings = config::load_settings();

    let mut app = App::new();
    app.add_plugins(
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_millis(16))),
    )
    .add_plugins(LogPlugin::default())
    .insert_resource(SimRng(StdRng::seed_from_u64(settings.seed)))
    .insert_resource(settings);

    bastion::build_app(&mut app);

    app.add_systems(Startup, world::world_gen_system)
        .add_systems(FixedUpdate, (demo_orders_system, demo_report_system).after(Step::Status));

    app.run();
}

/// One-shot scripted input: once the starting villagers exist, select
/// them all and send them to the tree nearest the town center.
fn demo_orders_system(
    mut commands: Commands,
    mut done: Local<bool>,
    villagers: Query<Entity, (With<Villager>, Without<Dead>)>,
    nodes: Query<(Entity, &Position, &ResourceNode), Without<Dead>>,
    mut orders: MessageWriter<CommandMsg>,
) {
    if *done || villagers.is_empty() {
        return;
    }

    let mut nearest: Option<(Entity, f32)> = None;
    for (entity, pos, node) in nodes.iter() {
        if node.0 != ResourceKind::Wood {
            continue;
        }
        let dist = pos.0.length();
        if nearest.is_none_or(|(_, best)| dist < best) {
            nearest = Some((entity, dist));
        }
    }
    let Some((tree, _)) = nearest else { return };

    let mut count = 0;
    for villager in villagers.iter() {
        commands.entity(villager).insert(Selected);
        count += 1;
    }
    orders.write(CommandMsg { pick: PickTarget::Entity(tree) });
    info!("demo: sent {} villagers to chop wood", count);
    *done = true;
}

/// Log the UI summary once a second of simulation time; exit when the
/// configured demo duration is up.
fn demo_report_system(
    time: Res<Time<Fixed>>,
    summary: Res<UiSummary>,
    settings: Res<config::SimSettings>,
    mut next_report: Local<f32>,
    mut exit: MessageWriter<AppExit>,
) {
    let elapsed = time.elapsed_secs();
    if elapsed >= *next_report {
        info!("[t={:>5.1}s] {} | {}", elapsed, summary.resources, summary.age);
        *next_report = elapsed + 1.0;
    }
    if elapsed >= settings.demo_seconds {
        info!("demo finished after {:.1}s of simulation", elapsed);
        exit.write(AppExit::Success);
    }
}
