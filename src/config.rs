//! Simulation settings - load/save config to JSON file.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Persisted simulation settings. Saved to `bastion.json` next to the
/// binary (or wherever the host points `load_settings_from`).
#[derive(Resource, Serialize, Deserialize, Clone)]
pub struct SimSettings {
    // World gen
    pub trees: usize,
    pub gold_mines: usize,
    pub stone_mines: usize,
    pub villagers: usize,
    /// Half-extent of the square resource nodes scatter over.
    #[serde(default = "default_resource_spread")]
    pub resource_spread: f32,
    /// Half-extent of the square starting villagers scatter over.
    #[serde(default = "default_villager_spread")]
    pub villager_spread: f32,
    // Determinism
    #[serde(default)]
    pub seed: u64,
    // Demo runner
    #[serde(default = "default_demo_seconds")]
    pub demo_seconds: f32,
}

fn default_resource_spread() -> f32 { 40.0 }
fn default_villager_spread() -> f32 { 20.0 }
fn default_demo_seconds() -> f32 { 60.0 }

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            trees: 20,
            gold_mines: 5,
            stone_mines: 5,
            villagers: 10,
            resource_spread: 40.0,
            villager_spread: 20.0,
            seed: 0,
            demo_seconds: 60.0,
        }
    }
}

fn settings_path() -> PathBuf {
    PathBuf::from("bastion.json")
}

pub fn save_settings(settings: &SimSettings) {
    let path = settings_path();
    match serde_json::to_string_pretty(settings) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&path, json) {
                warn!("Failed to save settings: {}", e);
            }
        }
        Err(e) => warn!("Failed to serialize settings: {}", e),
    }
}

pub fn load_settings() -> SimSettings {
    load_settings_from(&settings_path())
}

pub fn load_settings_from(path: &Path) -> SimSettings {
    match std::fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => SimSettings::default(),
    }
}
