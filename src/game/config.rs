use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::grid::MAX_GRID_SIZE;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the first board
    pub initial_size: usize,
    /// Side length the board stops growing at
    pub max_size: usize,
    /// Energy the collector starts with
    pub initial_energy: i32,

    /// Fraction of cells turned into items on every repopulation
    pub item_density: f64,
    /// Fraction of cells turned into obstacles on every repopulation
    pub obstacle_density: f64,

    /// Energy lost per radioactive neighbour after each successful move
    pub proximity_damage: i32,
    /// First phase in which radioactive cells can be transposed
    pub transpose_min_phase: u32,

    /// Start from a randomized board instead of the hand-placed layout
    pub random_start: bool,
    /// Seed for board generation; entropy when unset
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_size: 10,
            max_size: MAX_GRID_SIZE,
            initial_energy: 5,
            item_density: 0.06,
            obstacle_density: 0.12,
            proximity_damage: 10,
            transpose_min_phase: 2,
            random_start: false,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Default configuration with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file, filling missing fields with defaults
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Check that every board size the game can reach is populatable
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_size == 0 {
            return Err("initial_size must be positive".to_string());
        }

        if self.initial_size > self.max_size {
            return Err(format!(
                "initial_size ({}) must not exceed max_size ({})",
                self.initial_size, self.max_size
            ));
        }

        if self.max_size > MAX_GRID_SIZE {
            return Err(format!(
                "max_size must be at most {MAX_GRID_SIZE}, got {}",
                self.max_size
            ));
        }

        if !(0.0..=1.0).contains(&self.item_density) {
            return Err(format!(
                "item_density must be in [0, 1], got {}",
                self.item_density
            ));
        }

        if !(0.0..=1.0).contains(&self.obstacle_density) {
            return Err(format!(
                "obstacle_density must be in [0, 1], got {}",
                self.obstacle_density
            ));
        }

        if self.proximity_damage < 0 {
            return Err(format!(
                "proximity_damage must be non-negative, got {}",
                self.proximity_damage
            ));
        }

        // Radioactive cell and the collector each need a free cell
        for size in self.initial_size..=self.max_size {
            let area = size * size;
            let placed = placement_count(self.item_density, size)
                + placement_count(self.obstacle_density, size)
                + 2;
            if placed > area {
                return Err(format!(
                    "densities leave no free cells on a {size}x{size} board"
                ));
            }
        }

        Ok(())
    }
}

/// Number of cells a density fills on a board of the given side, capped at its area
pub fn placement_count(density: f64, size: usize) -> usize {
    let area = size * size;
    let count = (density * area as f64).round() as usize;
    count.min(area)
}
