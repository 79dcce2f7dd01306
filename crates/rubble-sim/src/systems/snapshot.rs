//! Snapshot system: builds a `FrameReport` from the registries.
//!
//! Read-only: never modifies simulation state.

use rubble_core::state::{FrameReport, MobileObjectView, ObjectView};
use rubble_core::types::full_to_real;

use crate::mobile_objects::MobileObjects;
use crate::objects::Objects;
use crate::systems::drain::Drained;

pub fn build_report(
    tick: u64,
    objects: &Objects,
    mobs: &MobileObjects,
    drained: Drained,
    scores: &[i32],
) -> FrameReport {
    FrameReport {
        tick,
        objects: build_objects(objects),
        mobile_objects: build_mobile_objects(mobs),
        events: drained.events,
        scores: scores.to_vec(),
        screen_shake: drained.screen_shake,
    }
}

fn build_objects(objects: &Objects) -> Vec<ObjectView> {
    objects
        .iter()
        .map(|(id, obj)| ObjectView {
            id,
            pos: obj.tile.pos,
            kind: obj.kind,
            structure: obj.structure,
            flags: obj.flags,
            is_wreck: obj.is_wreck(),
            pic_name: obj.pic_name.clone(),
        })
        .collect()
}

fn build_mobile_objects(mobs: &MobileObjects) -> Vec<MobileObjectView> {
    mobs.iter()
        .map(|(id, obj)| MobileObjectView {
            id,
            pos: full_to_real(obj.pos),
            z: obj.z,
            count: obj.count,
            draw: obj.draw,
            tint: obj.tint,
        })
        .collect()
}
