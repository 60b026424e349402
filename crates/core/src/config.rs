//! Session configuration
//!
//! Defaults reproduce the classic tuning. A config can be loaded from JSON;
//! omitted fields keep their defaults.
//!
//! ```
//! use tetris2d_core::GameConfig;
//!
//! let config = GameConfig::from_json_str(r#"{ "seed": 7, "level_cost": 10 }"#).unwrap();
//! assert_eq!(config.seed, 7);
//! assert_eq!(config.level_cost, 10);
//! assert_eq!(config.shift_repeat_ms, 110);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Board;
use crate::pieces::{offsets, spawn_rotations};
use crate::types::{
    PieceKind, LEVEL_COST, LEVEL_FALL_MS, SHIFT_REPEAT_MS, SOFT_DROP_FALL_MS, SPAWN_X, SPAWN_Y,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("level fall table must not be empty")]
    EmptyLevelTable,
    #[error("level fall table entry {index} is zero")]
    ZeroFallInterval { index: usize },
    #[error("level fall table must not slow down: level {level} is {ms}ms after {previous_ms}ms")]
    LevelTableNotMonotonic { level: usize, ms: u32, previous_ms: u32 },
    #[error("soft drop interval must be positive")]
    ZeroSoftDrop,
    #[error("level cost must be positive")]
    ZeroLevelCost,
    #[error("spawn anchor ({x}, {y}) leaves {kind:?} outside the board")]
    SpawnOutOfBounds { x: i8, y: i8, kind: PieceKind },
}

/// Tunable session parameters, in milliseconds where timed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Gravity interval per level; entry 0 is level 1, the last entry is the
    /// highest level
    pub level_fall_ms: Vec<u32>,
    pub shift_repeat_ms: u32,
    pub soft_drop_fall_ms: u32,
    /// Lines per level
    pub level_cost: u32,
    pub spawn_x: i8,
    pub spawn_y: i8,
    /// Seed for the default piece generator
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            level_fall_ms: LEVEL_FALL_MS.to_vec(),
            shift_repeat_ms: SHIFT_REPEAT_MS,
            soft_drop_fall_ms: SOFT_DROP_FALL_MS,
            level_cost: LEVEL_COST,
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Default tuning with the given seed
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Highest reachable level
    pub fn max_level(&self) -> u32 {
        self.level_fall_ms.len() as u32
    }

    pub fn spawn_anchor(&self) -> (i8, i8) {
        (self.spawn_x, self.spawn_y)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.level_fall_ms.is_empty() {
            return Err(ConfigError::EmptyLevelTable);
        }
        if let Some(index) = self.level_fall_ms.iter().position(|&ms| ms == 0) {
            return Err(ConfigError::ZeroFallInterval { index });
        }
        for (i, pair) in self.level_fall_ms.windows(2).enumerate() {
            if pair[1] > pair[0] {
                return Err(ConfigError::LevelTableNotMonotonic {
                    level: i + 2,
                    ms: pair[1],
                    previous_ms: pair[0],
                });
            }
        }
        if self.soft_drop_fall_ms == 0 {
            return Err(ConfigError::ZeroSoftDrop);
        }
        if self.level_cost == 0 {
            return Err(ConfigError::ZeroLevelCost);
        }

        let (x, y) = self.spawn_anchor();
        for kind in PieceKind::ALL {
            for &rotation in spawn_rotations(kind) {
                let inside = offsets(kind, rotation)
                    .iter()
                    .all(|&(dx, dy)| match (x.checked_add(dx), y.checked_add(dy)) {
                        (Some(cx), Some(cy)) => Board::is_inside(cx, cy),
                        _ => false,
                    });
                if !inside {
                    return Err(ConfigError::SpawnOutOfBounds { x, y, kind });
                }
            }
        }

        Ok(())
    }
}
