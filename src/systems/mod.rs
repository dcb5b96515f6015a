//! Bevy ECS Systems - Simulation logic that operates on components

mod combat;
mod command;
mod economy;
mod health;
mod movement;
mod spawn;
mod stats;
mod villager;

pub use combat::*;
pub use command::*;
pub use economy::*;
pub use health::*;
pub use movement::*;
pub use spawn::*;
pub use stats::*;
pub use villager::*;
