//! World - Walkability grid, A* adapter, entity placement, world generation

use bevy::prelude::*;
use hashbrown::HashSet;
use pathfinding::prelude::astar;
use rand::Rng;

use crate::components::*;
use crate::config::SimSettings;
use crate::constants::{
    GRID_SIZE, SWORDSMAN_ATTACK, SWORDSMAN_DEFENSE, SWORDSMAN_HP, TOWN_CENTER_HP, VILLAGER_HP,
};
use crate::messages::SpawnVillagerMsg;
use crate::resources::SimRng;

// ============================================================================
// NAV GRID
// ============================================================================

/// Fixed-size walkability grid centered on the world origin. Cells under
/// any placed entity are blocked at creation time and never unblocked:
/// terrain is static, and computed paths are not replanned.
#[derive(Resource)]
pub struct NavGrid {
    size: i32,
    blocked: HashSet<IVec2>,
}

impl Default for NavGrid {
    fn default() -> Self {
        Self { size: GRID_SIZE, blocked: HashSet::new() }
    }
}

impl NavGrid {
    /// World position to grid cell: floor(world + size/2) per axis.
    pub fn world_to_cell(&self, world: Vec2) -> IVec2 {
        let half = (self.size / 2) as f32;
        IVec2::new(
            (world.x + half).floor() as i32,
            (world.y + half).floor() as i32,
        )
    }

    /// Grid cell back to its world position.
    pub fn cell_to_world(&self, cell: IVec2) -> Vec2 {
        let half = (self.size / 2) as f32;
        Vec2::new(cell.x as f32 - half, cell.y as f32 - half)
    }

    pub fn in_bounds(&self, cell: IVec2) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.size && cell.y < self.size
    }

    pub fn is_walkable(&self, cell: IVec2) -> bool {
        self.in_bounds(cell) && !self.blocked.contains(&cell)
    }

    /// Mark the cell under a placed entity as unwalkable.
    pub fn block(&mut self, cell: IVec2) {
        if self.in_bounds(cell) {
            self.blocked.insert(cell);
        }
    }

    pub fn block_world(&mut self, world: Vec2) {
        let cell = self.world_to_cell(world);
        self.block(cell);
    }

    fn neighbors(&self, cell: IVec2) -> impl Iterator<Item = (IVec2, u32)> + '_ {
        const STEPS: [IVec2; 4] = [
            IVec2::new(1, 0),
            IVec2::new(-1, 0),
            IVec2::new(0, 1),
            IVec2::new(0, -1),
        ];
        STEPS
            .iter()
            .map(move |s| cell + *s)
            .filter(|c| self.is_walkable(*c))
            .map(|c| (c, 1))
    }

    /// Shortest path from start to goal inclusive, or None when the goal
    /// cell is blocked or unreachable. The search never mutates the grid,
    /// so concurrent-looking requests cannot interfere.
    pub fn find_path(&self, start: IVec2, goal: IVec2) -> Option<Vec<IVec2>> {
        if !self.is_walkable(goal) {
            return None;
        }
        let manhattan = |c: &IVec2| ((c.x - goal.x).abs() + (c.y - goal.y).abs()) as u32;
        astar(&start, |c| self.neighbors(*c), manhattan, |c| *c == goal)
            .map(|(cells, _cost)| cells)
    }

    /// Path to the goal, or to the nearest walkable cell adjacent to it
    /// when the goal itself is blocked. Placed entities block their own
    /// cell, so orders targeting them path to an approach cell.
    pub fn approach_path(&self, start: IVec2, goal: IVec2) -> Option<Vec<IVec2>> {
        if self.is_walkable(goal) {
            return self.find_path(start, goal);
        }
        let mut candidates: Vec<IVec2> = self
            .neighbors_of(goal)
            .filter(|c| self.is_walkable(*c))
            .collect();
        candidates.sort_by_key(|c| (c.x - start.x).abs() + (c.y - start.y).abs());
        candidates.into_iter().find_map(|c| self.find_path(start, c))
    }

    fn neighbors_of(&self, cell: IVec2) -> impl Iterator<Item = IVec2> {
        const STEPS: [IVec2; 4] = [
            IVec2::new(1, 0),
            IVec2::new(-1, 0),
            IVec2::new(0, 1),
            IVec2::new(0, -1),
        ];
        STEPS.iter().map(move |s| cell + *s)
    }
}

// ============================================================================
// ENTITY PLACEMENT
// ============================================================================

/// Place the town center. There is exactly one; deposits flow to it and
/// its destruction ends the game.
pub fn spawn_town_center(commands: &mut Commands, grid: &mut NavGrid, position: Vec2) -> Entity {
    grid.block_world(position);
    commands
        .spawn((
            Position(position),
            Building(BuildingKind::TownCenter),
            TownCenter,
            Health(TOWN_CENTER_HP),
        ))
        .id()
}

pub fn spawn_tree(commands: &mut Commands, grid: &mut NavGrid, position: Vec2) -> Entity {
    grid.block_world(position);
    commands
        .spawn((Position(position), ResourceNode(ResourceKind::Wood)))
        .id()
}

pub fn spawn_gold_mine(commands: &mut Commands, grid: &mut NavGrid, position: Vec2) -> Entity {
    grid.block_world(position);
    commands
        .spawn((Position(position), ResourceNode(ResourceKind::Gold)))
        .id()
}

pub fn spawn_stone_mine(commands: &mut Commands, grid: &mut NavGrid, position: Vec2) -> Entity {
    grid.block_world(position);
    commands
        .spawn((Position(position), ResourceNode(ResourceKind::Stone)))
        .id()
}

/// Place an unbuilt barracks or farm. Blocks its cell immediately; a
/// villager has to raise it before it functions.
pub fn spawn_site(
    commands: &mut Commands,
    grid: &mut NavGrid,
    kind: BuildingKind,
    position: Vec2,
) -> Entity {
    grid.block_world(position);
    commands
        .spawn((Position(position), Building(kind), UnderConstruction::default()))
        .id()
}

/// Place an already-finished barracks (tests and scripted scenarios).
pub fn spawn_barracks(commands: &mut Commands, grid: &mut NavGrid, position: Vec2) -> Entity {
    grid.block_world(position);
    commands
        .spawn((Position(position), Building(BuildingKind::Barracks)))
        .id()
}

/// Place an already-finished farm, gatherable for food.
pub fn spawn_farm(commands: &mut Commands, grid: &mut NavGrid, position: Vec2) -> Entity {
    grid.block_world(position);
    commands
        .spawn((
            Position(position),
            Building(BuildingKind::Farm),
            ResourceNode(ResourceKind::Food),
        ))
        .id()
}

// ============================================================================
// WORLD GENERATION
// ============================================================================

/// Startup world generation: town center at the origin, scattered trees
/// and mines, starting villagers near the center. Counts come from
/// SimSettings.
pub fn world_gen_system(
    mut commands: Commands,
    mut grid: ResMut<NavGrid>,
    mut rng: ResMut<SimRng>,
    settings: Res<SimSettings>,
    mut villagers: MessageWriter<SpawnVillagerMsg>,
) {
    spawn_town_center(&mut commands, &mut grid, Vec2::ZERO);

    for _ in 0..settings.trees {
        let pos = scatter(&mut rng.0, settings.resource_spread);
        spawn_tree(&mut commands, &mut grid, pos);
    }
    for _ in 0..settings.gold_mines {
        let pos = scatter(&mut rng.0, settings.resource_spread);
        spawn_gold_mine(&mut commands, &mut grid, pos);
    }
    for _ in 0..settings.stone_mines {
        let pos = scatter(&mut rng.0, settings.resource_spread);
        spawn_stone_mine(&mut commands, &mut grid, pos);
    }
    for _ in 0..settings.villagers {
        let pos = scatter(&mut rng.0, settings.villager_spread);
        villagers.write(SpawnVillagerMsg { position: pos });
    }

    info!(
        "world generated: {} trees, {} gold mines, {} stone mines, {} villagers",
        settings.trees, settings.gold_mines, settings.stone_mines, settings.villagers
    );
}

fn scatter(rng: &mut impl Rng, spread: f32) -> Vec2 {
    Vec2::new(
        rng.random_range(-spread..spread),
        rng.random_range(-spread..spread),
    )
}

/// Component bundle for a fresh villager.
pub fn villager_bundle(position: Vec2) -> impl Bundle {
    (
        Position(position),
        Villager,
        Speed::default(),
        Health(VILLAGER_HP),
        Carrying::default(),
        Activity::Waiting,
        Path::default(),
    )
}

/// Component bundle for a fresh swordsman.
pub fn swordsman_bundle(position: Vec2) -> impl Bundle {
    (
        Position(position),
        Swordsman,
        Speed::default(),
        Health(SWORDSMAN_HP),
        AttackStats { attack: SWORDSMAN_ATTACK, defense: SWORDSMAN_DEFENSE },
        AttackTimer::default(),
        Activity::Waiting,
        Path::default(),
    )
}
