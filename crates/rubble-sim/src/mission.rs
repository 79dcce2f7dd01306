//! Mission objective bookkeeping fed by object destruction.

use std::collections::HashMap;

use glam::IVec2;

use rubble_core::enums::ObjectiveKind;
use rubble_core::flags::TileFlags;

/// Receives notifications that may advance mission objectives.
pub trait ObjectiveTracker {
    fn notify_destroyed(
        &mut self,
        tile_flags: TileFlags,
        kind: ObjectiveKind,
        player: Option<u8>,
        pos: IVec2,
    );
}

/// Counts completed objective events per objective index.
#[derive(Debug, Clone, Default)]
pub struct MissionProgress {
    done: HashMap<(u8, ObjectiveKind), u32>,
}

impl MissionProgress {
    pub fn completed(&self, objective: u8, kind: ObjectiveKind) -> u32 {
        self.done.get(&(objective, kind)).copied().unwrap_or(0)
    }
}

impl ObjectiveTracker for MissionProgress {
    fn notify_destroyed(
        &mut self,
        tile_flags: TileFlags,
        kind: ObjectiveKind,
        player: Option<u8>,
        pos: IVec2,
    ) {
        let Some(objective) = tile_flags.objective() else {
            return;
        };
        let count = self.done.entry((objective, kind)).or_default();
        *count += 1;
        log::debug!(
            "objective {objective} {kind:?} progressed to {count} by {player:?} at {pos}"
        );
    }
}
