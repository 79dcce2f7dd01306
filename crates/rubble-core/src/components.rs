//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::enums::CollisionTeam;
use crate::flags::ActorFlags;

/// A character (player or AI actor) that attacks can hit and damage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Player index when player-controlled.
    pub player_index: Option<u8>,
    pub flags: ActorFlags,
    pub team: CollisionTeam,
    pub health: i32,
    pub dead: bool,
}

impl Character {
    pub fn new(health: i32, flags: ActorFlags) -> Self {
        Self {
            player_index: None,
            flags,
            team: CollisionTeam::None,
            health,
            dead: false,
        }
    }

    pub fn player(player_index: u8, health: i32) -> Self {
        Self {
            player_index: Some(player_index),
            ..Self::new(health, ActorFlags::GOOD_GUY)
        }
    }
}

/// Real-space position and footprint of a character.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Placement {
    pub pos: IVec2,
    pub size: IVec2,
}

/// Knock-back velocity accumulated from impulses, in full units.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Impulse {
    pub vel: IVec2,
}

/// Timed status effects applied by special damage.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StatusEffects {
    pub poisoned_ticks: i32,
    pub confused_ticks: i32,
    /// Ticks left on the hit flash.
    pub hit_flash_ticks: i32,
}
