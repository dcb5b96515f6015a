//! Stats system - Plain-text summaries for the host UI

use bevy::prelude::*;

use crate::components::*;
use crate::resources::{GameStatus, Town, UiSummary};

/// Refresh the UI sink every tick: resource totals, the age line, and a
/// description of the current selection. The core never reads these back.
pub fn ui_summary_system(
    town: Res<Town>,
    status: Res<GameStatus>,
    mut summary: ResMut<UiSummary>,
    selected: Query<(&Activity, &Health, Option<&Carrying>, Option<&AttackStats>), With<Selected>>,
) {
    summary.resources = format!(
        "wood {}  gold {}  stone {}  food {}",
        town.wood, town.gold, town.stone, town.food
    );
    summary.age = match *status {
        GameStatus::Running => format!("age {}", town.age.ordinal()),
        GameStatus::Won => "victory — age III reached".to_string(),
        GameStatus::Lost => "defeat — town center destroyed".to_string(),
    };

    let count = selected.iter().count();
    summary.selection = match count {
        0 => String::new(),
        1 => selected
            .iter()
            .next()
            .map(|(activity, health, carrying, stats)| match (carrying, stats) {
                (Some(c), _) => format!(
                    "villager — {} | hp {:.0} | wood {} gold {} stone {} food {}",
                    activity.name(),
                    health.0,
                    c.wood.floor(),
                    c.gold.floor(),
                    c.stone.floor(),
                    c.food.floor()
                ),
                (_, Some(s)) => format!(
                    "swordsman — {} | hp {:.0} | attack {:.0} defense {:.0}",
                    activity.name(),
                    health.0,
                    s.attack,
                    s.defense
                ),
                _ => format!("unit — {} | hp {:.0}", activity.name(), health.0),
            })
            .unwrap_or_default(),
        n => format!("{n} units selected"),
    };
}
