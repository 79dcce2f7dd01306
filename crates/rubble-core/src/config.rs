//! Runtime configuration toggles that change damage resolution.

use serde::{Deserialize, Serialize};

use crate::bullet_class::BulletClassId;

/// Errors raised while loading configuration or data tables.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bullet class {0:?} is missing from the table")]
    MissingClass(BulletClassId),

    #[error("Invalid {field} range for {class:?}: low {low} > high {high}")]
    InvalidRange {
        class: BulletClassId,
        field: &'static str,
        low: i32,
        high: i32,
    },
}

/// Sound settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    /// Play hit sounds at all.
    pub hits: bool,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self { hits: true }
    }
}

/// Gameplay rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    /// Shots knock characters back.
    pub shots_pushback: bool,
    /// Player-side attacks can hurt player-side characters.
    pub friendly_fire: bool,
    /// Deathmatch mode: same-team tile items may be hit.
    pub dogfight: bool,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            shots_pushback: true,
            friendly_fire: false,
            dogfight: false,
        }
    }
}

/// Global configuration read by the damage engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub sound: SoundConfig,
    pub game: GameRules,
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config; missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
