//! Economy systems - Age advancement, research, unit training
//!
//! Every action is an atomic check-then-debit: on any unmet requirement
//! the ledger is untouched and a diagnostic is logged.

use bevy::prelude::*;
use rand::Rng;

use crate::components::*;
use crate::constants::*;
use crate::messages::{AdvanceAgeMsg, ResearchAttackMsg, SpawnSwordsmanMsg, TrainSwordsmanMsg};
use crate::resources::{Age, GameStatus, SimRng, Town};

/// Advance to the next age when the ledger covers the threshold.
/// The age never decreases and never skips a tier.
pub fn advance_age_system(
    mut events: MessageReader<AdvanceAgeMsg>,
    mut town: ResMut<Town>,
    mut status: ResMut<GameStatus>,
) {
    for _ in events.read() {
        let (next, cost) = match town.age {
            Age::I => (Age::II, AGE_II_COST),
            Age::II => (Age::III, AGE_III_COST),
            Age::III => {
                warn!("already at the final age");
                continue;
            }
        };
        if !town.can_afford(&cost) {
            warn!("not enough resources to advance age");
            continue;
        }
        town.debit(&cost);
        town.age = next;
        info!("advanced to age {}", town.age.ordinal());

        if town.age == Age::III {
            *status = GameStatus::Won;
            info!("age III reached — victory");
        }
    }
}

/// Research the swordsman attack upgrade. One-shot: a second request
/// after success is a no-op.
pub fn research_attack_system(mut events: MessageReader<ResearchAttackMsg>, mut town: ResMut<Town>) {
    for _ in events.read() {
        if town.research.swordsman_attack {
            warn!("swordsman attack already researched");
            continue;
        }
        if town.age < Age::II {
            warn!("swordsman attack research requires age II");
            continue;
        }
        if !town.can_afford(&RESEARCH_ATTACK_COST) {
            warn!("not enough resources to research swordsman attack");
            continue;
        }
        town.debit(&RESEARCH_ATTACK_COST);
        town.research.swordsman_attack = true;
        info!("swordsman attack upgraded");
    }
}

/// Train a swordsman at a finished barracks. Spawns next tick, slightly
/// offset so repeated orders don't stack units on one point.
pub fn train_swordsman_system(
    mut events: MessageReader<TrainSwordsmanMsg>,
    mut town: ResMut<Town>,
    mut rng: ResMut<SimRng>,
    barracks: Query<(&Position, &Building), (Without<UnderConstruction>, Without<Dead>)>,
    mut spawns: MessageWriter<SpawnSwordsmanMsg>,
) {
    for event in events.read() {
        let Ok((pos, building)) = barracks.get(event.barracks) else {
            warn!("train order for a missing or unbuilt barracks");
            continue;
        };
        if building.0 != BuildingKind::Barracks {
            warn!("train order for a {}", building.0.name());
            continue;
        }
        if !town.can_afford(&SWORDSMAN_COST) {
            warn!("not enough resources to train a swordsman");
            continue;
        }
        town.debit(&SWORDSMAN_COST);

        let jitter = Vec2::new(
            rng.0.random_range(-TRAIN_SPAWN_JITTER..TRAIN_SPAWN_JITTER),
            rng.0.random_range(-TRAIN_SPAWN_JITTER..TRAIN_SPAWN_JITTER),
        );
        spawns.write(SpawnSwordsmanMsg { position: pos.0 + jitter });
        info!("swordsman trained");
    }
}
