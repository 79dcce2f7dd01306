//! Events emitted by the simulation and the queue they travel through.
//!
//! Producers only append. The queue is drained after the producing pass has
//! finished, so consumers may release slots without invalidating it.

use std::collections::VecDeque;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::bullet_class::BulletClassId;
use crate::enums::*;
use crate::flags::HitFlags;
use crate::types::{ActorId, SlotId};

/// Deferred simulation events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// An attack connected with a character. Drives feedback only.
    HitCharacter {
        flags: HitFlags,
        player_index: Option<u8>,
        target: ActorId,
        special: SpecialDamage,
        has_hit_sound: bool,
    },
    /// Health loss for a character that was allowed to take damage.
    DamageCharacter {
        power: i32,
        player_index: Option<u8>,
        target: ActorId,
        /// Player index of the target when it is player-controlled.
        target_player_index: Option<u8>,
    },
    /// Knock-back velocity for a character.
    ActorImpulse { target: ActorId, vel: IVec2 },
    Score { player_index: u8, score: i32 },
    ScreenShake { amount: i32 },
    /// Release a mobile object slot once the update pass is over.
    MobileObjectRemove { id: SlotId },
    /// Leave cosmetic wreckage at a full-precision position.
    FireballWreckageSpawn { full_pos: IVec2 },
    /// Play a sound at a real position.
    Sound { sound: SoundKind, pos: IVec2 },
}

/// Request to spawn a fireball-like mobile object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireballSpawn {
    pub full_pos: IVec2,
    pub class: BulletClassId,
    /// Direction of travel in radians; 0 points up the screen.
    pub angle: f64,
    pub dz: i32,
    pub flags: HitFlags,
    pub player_index: Option<u8>,
    /// Initial age. Negative values delay movement.
    pub count: i32,
}

/// Append-only FIFO of `GameEvent`.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }

    pub fn pop(&mut self) -> Option<GameEvent> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
