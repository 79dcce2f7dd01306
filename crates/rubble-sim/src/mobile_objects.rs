//! Mobile object registry: fireballs, gas clouds and wreckage sparks.
//!
//! Objects age every tick and run their `UpdateBehavior`. Expiry is never
//! applied during the update pass; it is requested with a
//! `MobileObjectRemove` event and applied when the queue is drained. Hit
//! probes found during the pass are returned to the caller and resolved
//! afterwards.

use glam::IVec2;
use rand::Rng;

use rubble_core::bullet_class::{BulletClassId, BulletClasses};
use rubble_core::constants::*;
use rubble_core::enums::*;
use rubble_core::events::{EventQueue, FireballSpawn, GameEvent};
use rubble_core::flags::{HitFlags, TileFlags};
use rubble_core::types::{full_to_real, full_vector_for_radians, SlotId, TileItem, TileItemRef};

use crate::damage::{self, DamageContext, Impact};
use crate::slot_pool::SlotPool;
use crate::spatial::SpatialIndex;

/// A transient physics-driven object.
#[derive(Debug, Clone)]
pub struct MobileObject {
    pub id: SlotId,
    /// Full-precision position.
    pub pos: IVec2,
    /// Height above ground, full precision.
    pub z: i32,
    /// Full units per tick.
    pub vel: IVec2,
    pub dz: i32,
    pub count: i32,
    pub range: i32,
    pub sound_lock: i32,
    pub player: Option<u8>,
    pub flags: HitFlags,
    pub class: Option<BulletClassId>,
    pub kind: MobileObjectKind,
    pub update: UpdateBehavior,
    pub draw: DrawStyle,
    pub tint: Tint,
    /// Footprint in real pixels.
    pub size: IVec2,
}

impl MobileObject {
    fn new(id: SlotId, pos: IVec2, player: Option<u8>) -> Self {
        Self {
            id,
            pos,
            z: 0,
            vel: IVec2::ZERO,
            dz: 0,
            count: 0,
            range: 0,
            sound_lock: 0,
            player,
            flags: HitFlags::NONE,
            class: None,
            kind: MobileObjectKind::Generic,
            update: UpdateBehavior::Expire,
            draw: DrawStyle::None,
            tint: Tint::None,
            size: IVec2::ZERO,
        }
    }

    pub fn tile_item(&self) -> TileItem {
        TileItem::new(full_to_real(self.pos), self.size, TileFlags::NONE)
    }

    fn tile_ref(&self) -> TileItemRef {
        TileItemRef::MobileObject(self.id)
    }
}

/// Result of one behaviour step.
struct Step {
    alive: bool,
    /// Full-precision position to test for hits.
    probe: Option<IVec2>,
}

fn run_behavior(obj: &mut MobileObject, ticks: i32, map: &dyn SpatialIndex) -> Step {
    let in_range = |obj: &MobileObject| obj.count <= obj.range;
    match obj.update {
        UpdateBehavior::Expire => Step {
            alive: in_range(obj),
            probe: None,
        },
        // Negative count means the spawn is still delayed.
        _ if obj.count < 0 => Step {
            alive: true,
            probe: None,
        },
        UpdateBehavior::Fireball => {
            obj.pos += obj.vel * ticks;
            obj.z = (obj.z + obj.dz * ticks).max(0);
            obj.dz = if obj.z > 0 {
                obj.dz - FIREBALL_GRAVITY * ticks
            } else {
                0
            };
            if !map.contains(full_to_real(obj.pos)) {
                return Step {
                    alive: false,
                    probe: None,
                };
            }
            Step {
                alive: in_range(obj),
                probe: Some(obj.pos),
            }
        }
        UpdateBehavior::GasCloud => {
            obj.pos += obj.vel * ticks;
            let before = (obj.count - ticks).max(0) / GAS_CLOUD_DRAG_INTERVAL;
            if obj.count / GAS_CLOUD_DRAG_INTERVAL != before {
                obj.vel /= 2;
            }
            if !map.contains(full_to_real(obj.pos)) {
                return Step {
                    alive: false,
                    probe: None,
                };
            }
            Step {
                alive: in_range(obj),
                probe: Some(obj.pos),
            }
        }
    }
}

/// Registry of all mobile objects.
#[derive(Debug, Clone, Default)]
pub struct MobileObjects {
    pool: SlotPool<MobileObject>,
}

impl MobileObjects {
    pub fn new() -> Self {
        Self {
            pool: SlotPool::with_capacity(1024),
        }
    }

    /// Add a generic object at a full-precision position. It expires once its
    /// count passes its range.
    pub fn add(&mut self, full_pos: IVec2, player: Option<u8>, map: &mut dyn SpatialIndex) -> SlotId {
        let id = self
            .pool
            .insert_with(|id| MobileObject::new(id, full_pos, player));
        let obj = self.pool.get(id);
        map.move_item(obj.tile_ref(), &obj.tile_item());
        id
    }

    /// Spawn a fireball-like object of the requested class.
    pub fn spawn_fireball(
        &mut self,
        spawn: &FireballSpawn,
        classes: &BulletClasses,
        rng: &mut impl Rng,
        map: &mut dyn SpatialIndex,
    ) -> SlotId {
        let class = classes.get(spawn.class);
        let id = self.add(spawn.full_pos, spawn.player_index, map);
        let speed = rng.gen_range(class.speed_low..=class.speed_high);
        let range = rng.gen_range(class.range_low..=class.range_high);

        let obj = self.pool.get_mut(id);
        obj.class = Some(spawn.class);
        obj.vel = full_to_real(full_vector_for_radians(spawn.angle) * speed);
        obj.dz = spawn.dz;
        obj.update = class.update;
        obj.draw = class.draw;
        obj.tint = match class.special {
            SpecialDamage::Poison => Tint::Poison,
            SpecialDamage::Confuse => Tint::Purple,
            _ => Tint::None,
        };
        obj.size = class.size;
        obj.kind = MobileObjectKind::Fireball;
        obj.range = range;
        obj.flags = spawn.flags;
        obj.count = spawn.count;
        map.move_item(obj.tile_ref(), &obj.tile_item());
        id
    }

    /// Advance every live object by `ticks`.
    ///
    /// Membership is untouched: expired objects are reported through
    /// `MobileObjectRemove` events. Returns this pass's hit probes as
    /// `(id, full_pos)`, all for objects still in use.
    pub fn update_all(
        &mut self,
        ticks: i32,
        map: &mut dyn SpatialIndex,
        events: &mut EventQueue,
    ) -> Vec<(SlotId, IVec2)> {
        let mut probes = Vec::new();
        for index in 0..self.pool.capacity() {
            let Some(id) = self.pool.id_at(index) else {
                continue;
            };
            let obj = self.pool.get_mut(id);
            obj.count += ticks;
            obj.sound_lock = (obj.sound_lock - ticks).max(0);

            let step = run_behavior(obj, ticks, &*map);
            map.move_item(obj.tile_ref(), &obj.tile_item());
            if let Some(probe) = step.probe {
                probes.push((id, probe));
            }
            if !step.alive {
                events.enqueue(GameEvent::MobileObjectRemove { id });
            }
        }
        probes
    }

    /// Remove a live object from the index and release its slot.
    ///
    /// # Panics
    /// If `id` is not in use.
    pub fn destroy(&mut self, id: SlotId, map: &mut dyn SpatialIndex) {
        let obj = self.pool.release(id);
        map.remove_item(obj.tile_ref());
    }

    /// Destroy every live object, then drop the storage.
    pub fn clear(&mut self, map: &mut dyn SpatialIndex) {
        for id in self.pool.ids() {
            self.destroy(id, map);
        }
        self.pool.clear();
    }

    pub fn get(&self, id: SlotId) -> &MobileObject {
        self.pool.get(id)
    }

    pub fn try_get(&self, id: SlotId) -> Option<&MobileObject> {
        self.pool.try_get(id)
    }

    pub fn get_mut(&mut self, id: SlotId) -> &mut MobileObject {
        self.pool.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &MobileObject)> {
        self.pool.iter()
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}

/// Test a mobile object against whatever is shootable at `full_pos` and
/// resolve the impact. Returns whether something was hit.
pub fn resolve_hit(ctx: &mut DamageContext<'_>, id: SlotId, full_pos: IVec2) -> bool {
    let obj = ctx.fx.mobs.get(id);
    let Some(class_id) = obj.class else {
        return false;
    };
    let class = ctx.fx.classes.get(class_id);
    if class.is_harmless() {
        return false;
    }

    let sound_ready = obj.sound_lock <= 0;
    let impact = Impact {
        hit_vector: obj.vel,
        power: class.power,
        flags: obj.flags,
        player: obj.player,
        special: class.special,
        has_hit_sound: sound_ready,
    };
    let target = ctx.fx.map.shootable_at(
        obj.tile_ref(),
        full_to_real(full_pos),
        TileFlags::CAN_BE_SHOT,
        CollisionTeam::None,
        ctx.config.game.dogfight,
    );

    let hit = damage::damage_something(ctx, &impact, target);
    if hit && sound_ready {
        ctx.fx.mobs.get_mut(id).sound_lock += SOUND_LOCK_MOBILE_OBJECT;
    }
    hit
}
