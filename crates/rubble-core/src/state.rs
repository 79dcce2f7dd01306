//! Frame report: committed state handed to rendering and audio after a tick.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::flags::ObjectFlags;
use crate::types::SlotId;

/// Everything the presentation side needs after one simulation tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameReport {
    pub tick: u64,
    pub objects: Vec<ObjectView>,
    pub mobile_objects: Vec<MobileObjectView>,
    /// Events drained this tick, in the order they were applied.
    pub events: Vec<GameEvent>,
    /// Running score per player index.
    pub scores: Vec<i32>,
    /// Largest shake requested this tick.
    pub screen_shake: i32,
}

/// A scenery object for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectView {
    pub id: SlotId,
    pub pos: IVec2,
    pub kind: ObjectType,
    pub structure: i32,
    pub flags: ObjectFlags,
    pub is_wreck: bool,
    pub pic_name: Option<String>,
}

/// A mobile object for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MobileObjectView {
    pub id: SlotId,
    /// Real-space position.
    pub pos: IVec2,
    pub z: i32,
    pub count: i32,
    pub draw: DrawStyle,
    pub tint: Tint,
}
