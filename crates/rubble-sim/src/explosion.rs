//! Explosion patterns spawned by destroyed objects.

use std::f64::consts::TAU;

use glam::IVec2;
use rand_chacha::ChaCha8Rng;

use rubble_core::bullet_class::{BulletClassId, BulletClasses};
use rubble_core::constants::*;
use rubble_core::enums::{ExplosionKind, SoundKind};
use rubble_core::events::{EventQueue, FireballSpawn, GameEvent};
use rubble_core::flags::{HitFlags, ObjectFlags};
use rubble_core::types::{full_to_real, SlotId};

use crate::mission::ObjectiveTracker;
use crate::mobile_objects::MobileObjects;
use crate::spatial::SpatialIndex;

/// Everything a destruction cascade may touch besides the object registry.
pub struct Effects<'a> {
    pub map: &'a mut dyn SpatialIndex,
    pub mobs: &'a mut MobileObjects,
    pub classes: &'a BulletClasses,
    pub rng: &'a mut ChaCha8Rng,
    pub events: &'a mut EventQueue,
    pub mission: &'a mut dyn ObjectiveTracker,
}

/// Explosion matching an object's flags, by priority
/// explosive > flammable > poisonous > confusing.
pub fn explosion_kind(flags: ObjectFlags) -> Option<ExplosionKind> {
    if flags.contains(ObjectFlags::EXPLOSIVE) {
        Some(ExplosionKind::Explosion)
    } else if flags.contains(ObjectFlags::FLAMMABLE) {
        Some(ExplosionKind::Fire)
    } else if flags.contains(ObjectFlags::POISONOUS) {
        Some(ExplosionKind::Poison)
    } else if flags.contains(ObjectFlags::CONFUSING) {
        Some(ExplosionKind::Confuse)
    } else {
        None
    }
}

fn ring(
    out: &mut Vec<FireballSpawn>,
    base: FireballSpawn,
    count: u32,
    offset: f64,
) {
    for i in 0..count {
        out.push(FireballSpawn {
            angle: i as f64 * TAU / count as f64 + offset,
            ..base
        });
    }
}

/// Fireballs making up an explosion of `kind` centred on `full_pos`.
pub fn explosion_pattern(
    kind: ExplosionKind,
    full_pos: IVec2,
    flags: HitFlags,
    player: Option<u8>,
) -> Vec<FireballSpawn> {
    let base = |class, dz, count| FireballSpawn {
        full_pos,
        class,
        angle: 0.0,
        dz,
        flags,
        player_index: player,
        count,
    };
    let mut out = Vec::new();
    match kind {
        ExplosionKind::Explosion => {
            let step = TAU / EXPLOSION_RING_SIZE as f64;
            let flags = flags | HitFlags::HURT_ALWAYS;
            let base = |class, dz, count| FireballSpawn {
                flags,
                ..base(class, dz, count)
            };
            ring(&mut out, base(BulletClassId::Fireball1, 8, 0), EXPLOSION_RING_SIZE, 0.0);
            ring(&mut out, base(BulletClassId::Fireball2, 8, -8), EXPLOSION_RING_SIZE, step / 2.0);
            ring(&mut out, base(BulletClassId::Fireball3, 11, -16), EXPLOSION_RING_SIZE, 0.0);
        }
        ExplosionKind::Fire => {
            ring(&mut out, base(BulletClassId::Flame, 10, 0), EXPLOSION_RING_SIZE, 0.0);
        }
        ExplosionKind::Poison => {
            ring(&mut out, base(BulletClassId::GasCloudPoison, 0, 0), GAS_CLOUD_COUNT, 0.0);
        }
        ExplosionKind::Confuse => {
            ring(&mut out, base(BulletClassId::GasCloudConfuse, 0, 0), GAS_CLOUD_COUNT, 0.0);
        }
    }
    out
}

/// Spawn an explosion immediately. Returns the new mobile object ids.
pub fn add_explosion(
    fx: &mut Effects<'_>,
    kind: ExplosionKind,
    full_pos: IVec2,
    flags: HitFlags,
    player: Option<u8>,
) -> Vec<SlotId> {
    let ids: Vec<SlotId> = explosion_pattern(kind, full_pos, flags, player)
        .iter()
        .map(|spawn| fx.mobs.spawn_fireball(spawn, fx.classes, &mut *fx.rng, &mut *fx.map))
        .collect();
    if kind == ExplosionKind::Explosion {
        fx.events.enqueue(GameEvent::Sound {
            sound: SoundKind::Explosion,
            pos: full_to_real(full_pos),
        });
        fx.events.enqueue(GameEvent::ScreenShake {
            amount: SHAKE_SMALL_AMOUNT,
        });
    }
    log::debug!("{kind:?} spawned {} mobile objects", ids.len());
    ids
}

/// Scatter harmless sparks where a plain object was wrecked.
pub fn add_fireball_wreckage(fx: &mut Effects<'_>, full_pos: IVec2) -> Vec<SlotId> {
    let base = FireballSpawn {
        full_pos,
        class: BulletClassId::Wreck,
        angle: 0.0,
        dz: 4,
        flags: HitFlags::NONE,
        player_index: None,
        count: 0,
    };
    let mut spawns = Vec::new();
    ring(&mut spawns, base, WRECKAGE_SPARK_COUNT, TAU / 8.0);
    spawns
        .iter()
        .map(|spawn| fx.mobs.spawn_fireball(spawn, fx.classes, &mut *fx.rng, &mut *fx.map))
        .collect()
}
