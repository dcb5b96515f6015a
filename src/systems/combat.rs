//! Combat systems - Swordsman chase/attack cycle

use bevy::prelude::*;
use hashbrown::HashMap;

use crate::components::*;
use crate::constants::{ATTACK_COOLDOWN, ATTACK_RANGE, RESEARCH_ATTACK_MULT};
use crate::messages::DamageMsg;
use crate::resources::Town;

/// Decrement attack cooldown timers each tick.
pub fn cooldown_system(time: Res<Time<Fixed>>, mut query: Query<&mut AttackTimer>) {
    let dt = time.delta_secs();
    for mut timer in query.iter_mut() {
        if timer.0 > 0.0 {
            timer.0 = (timer.0 - dt).max(0.0);
        }
    }
}

/// Attacking swordsmen close on their target and strike when in range,
/// gated by the cooldown timer. Damage goes through DamageMsg so the
/// health pipeline owns all hitpoint mutation. A missing or dead target
/// drops the attacker back to waiting.
pub fn attack_system(
    time: Res<Time<Fixed>>,
    mut commands: Commands,
    mut set: ParamSet<(
        Query<(Entity, &Position), (With<Health>, Without<Dead>)>,
        Query<
            (
                Entity,
                &mut Position,
                &Speed,
                &AttackStats,
                &mut AttackTimer,
                &mut Activity,
                Option<&Target>,
                &Path,
            ),
            (With<Swordsman>, Without<Dead>),
        >,
    )>,
    town: Res<Town>,
    mut damage: MessageWriter<DamageMsg>,
) {
    let dt = time.delta_secs();

    // Snapshot attackable positions so chasing can move attackers freely.
    let victims: HashMap<Entity, Vec2> = set.p0().iter().map(|(e, p)| (e, p.0)).collect();

    for (entity, mut pos, speed, stats, mut timer, mut activity, target, path) in
        set.p1().iter_mut()
    {
        if *activity != Activity::Attacking {
            continue;
        }
        let Some(target) = target else {
            *activity = Activity::Waiting;
            continue;
        };
        if target.0 == entity {
            *activity = Activity::Waiting;
            commands.entity(entity).remove::<Target>();
            continue;
        }
        let Some(&victim_pos) = victims.get(&target.0) else {
            // Target destroyed or already dying.
            *activity = Activity::Waiting;
            commands.entity(entity).remove::<Target>();
            continue;
        };
        if !path.0.is_empty() {
            continue; // still on the queued path toward the order point
        }

        if pos.distance(victim_pos) > ATTACK_RANGE {
            let dir = (victim_pos - pos.0).normalize_or_zero();
            pos.0 += dir * speed.0 * dt;
        } else if timer.0 <= 0.0 {
            let mut amount = stats.attack;
            if town.research.swordsman_attack {
                amount *= RESEARCH_ATTACK_MULT;
            }
            damage.write(DamageMsg { target: target.0, amount });
            timer.0 = ATTACK_COOLDOWN;
        }
    }
}
