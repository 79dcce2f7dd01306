//! Fundamental identity and coordinate types.
//!
//! Positions come in two precisions. "Real" coordinates are map pixels.
//! "Full" coordinates carry `FULL_SHIFT` extra fractional bits and are what
//! mobile objects integrate their motion in.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::constants::FULL_SHIFT;
use crate::enums::CollisionTeam;
use crate::flags::TileFlags;

/// Handle to a record in a slot pool.
///
/// `index` is the slot position. `generation` is bumped every time the slot
/// is released, so an id held across a release no longer matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotId {
    pub index: u32,
    pub generation: u32,
}

impl SlotId {
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "S{}g{}", self.index, self.generation)
    }
}

/// Stable handle to a character (actor). Opaque outside the actor store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u64);

/// Something registered in the spatial index, tagged by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileItemRef {
    Character(ActorId),
    Object(SlotId),
    MobileObject(SlotId),
    Particle(u32),
}

/// Spatial footprint of a tile item: real-space centre, size and flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileItem {
    pub pos: IVec2,
    pub size: IVec2,
    pub flags: TileFlags,
    pub team: CollisionTeam,
}

impl TileItem {
    pub fn new(pos: IVec2, size: IVec2, flags: TileFlags) -> Self {
        Self {
            pos,
            size,
            flags,
            team: CollisionTeam::None,
        }
    }

    /// Whether two footprints overlap (centre distance under half the summed size).
    pub fn overlaps(&self, pos: IVec2, size: IVec2) -> bool {
        let d = (self.pos - pos).abs();
        let reach = (self.size + size) / 2;
        d.x < reach.x.max(1) && d.y < reach.y.max(1)
    }
}

/// Convert full-precision coordinates to map pixels.
pub fn full_to_real(v: IVec2) -> IVec2 {
    IVec2::new(v.x >> FULL_SHIFT, v.y >> FULL_SHIFT)
}

/// Convert map pixels to full-precision coordinates.
pub fn real_to_full(v: IVec2) -> IVec2 {
    IVec2::new(v.x << FULL_SHIFT, v.y << FULL_SHIFT)
}

/// Unit direction for `radians` in full precision. 0 points up the screen.
pub fn full_vector_for_radians(radians: f64) -> IVec2 {
    let scale = (1 << FULL_SHIFT) as f64;
    IVec2::new(
        (radians.sin() * scale).round() as i32,
        (-radians.cos() * scale).round() as i32,
    )
}
