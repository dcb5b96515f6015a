//! Movement systems - Path following and arrival transitions

use bevy::prelude::*;

use crate::components::*;
use crate::constants::ARRIVAL_EPSILON;
use crate::world::NavGrid;

/// Advance units along their queued grid path at fixed speed, popping
/// cells inside the arrival epsilon. When the last cell is reached the
/// follow-up action resolves: builders keep building (the build system
/// takes over), units sent to a live resource node start gathering its
/// kind, plain walkers stop. A unit whose target died on the way falls
/// back to waiting.
pub fn follow_path_system(
    grid: Res<NavGrid>,
    time: Res<Time<Fixed>>,
    mut units: Query<
        (&mut Position, &Speed, &mut Path, &mut Activity, Option<&Target>),
        Without<Dead>,
    >,
    nodes: Query<&ResourceNode, Without<Dead>>,
) {
    let dt = time.delta_secs();

    for (mut pos, speed, mut path, mut activity, target) in units.iter_mut() {
        let Some(&next) = path.0.front() else { continue };

        let waypoint = grid.cell_to_world(next);
        if pos.distance(waypoint) > ARRIVAL_EPSILON {
            let dir = (waypoint - pos.0).normalize_or_zero();
            pos.0 += dir * speed.0 * dt;
            continue;
        }

        path.0.pop_front();
        if !path.0.is_empty() {
            continue;
        }

        // Path exhausted: resolve the follow-up action.
        match *activity {
            Activity::Building => {}
            _ => {
                let node_kind = target.and_then(|t| nodes.get(t.0).ok()).map(|n| n.0);
                if let Some(kind) = node_kind {
                    *activity = Activity::Gathering(kind);
                } else if *activity == Activity::Walking {
                    *activity = Activity::Waiting;
                }
            }
        }
    }
}
