//! Character storage on top of hecs and application of character events.

use glam::IVec2;
use hecs::{Entity, World};

use rubble_core::components::{Character, Impulse, Placement, StatusEffects};
use rubble_core::constants::{CONFUSE_TICKS, POISON_TICKS};
use rubble_core::enums::{SoundKind, SpecialDamage};
use rubble_core::events::GameEvent;
use rubble_core::flags::TileFlags;
use rubble_core::types::{ActorId, TileItem, TileItemRef};

use crate::spatial::SpatialIndex;

/// Ticks a character flashes after being hit.
const HIT_FLASH_TICKS: i32 = 8;

pub fn actor_id(entity: Entity) -> ActorId {
    ActorId(entity.to_bits().get())
}

pub fn entity(id: ActorId) -> Option<Entity> {
    Entity::from_bits(id.0)
}

/// Spawn a character and register it as shootable at `pos` (real space).
pub fn spawn_character(
    world: &mut World,
    map: &mut dyn SpatialIndex,
    character: Character,
    pos: IVec2,
    size: IVec2,
) -> ActorId {
    let team = character.team;
    let entity = world.spawn((
        character,
        Placement { pos, size },
        Impulse::default(),
        StatusEffects::default(),
    ));
    let id = actor_id(entity);
    let mut tile = TileItem::new(pos, size, TileFlags::CAN_BE_SHOT);
    tile.team = team;
    map.move_item(TileItemRef::Character(id), &tile);
    id
}

/// Apply a character event. Returns a follow-up event for presentation
/// (the hit sound), if any. Events for characters that no longer exist are
/// dropped.
pub fn apply_event(
    world: &mut World,
    map: &mut dyn SpatialIndex,
    event: &GameEvent,
) -> Option<GameEvent> {
    match *event {
        GameEvent::HitCharacter {
            target,
            special,
            has_hit_sound,
            ..
        } => {
            let Some(Ok((status, placement))) = entity(target)
                .map(|e| world.query_one_mut::<(&mut StatusEffects, &Placement)>(e))
            else {
                log::warn!("hit for missing character {target:?}");
                return None;
            };
            status.hit_flash_ticks = HIT_FLASH_TICKS;
            match special {
                SpecialDamage::Poison => status.poisoned_ticks = POISON_TICKS,
                SpecialDamage::Confuse => status.confused_ticks = CONFUSE_TICKS,
                _ => {}
            }
            has_hit_sound.then(|| GameEvent::Sound {
                sound: SoundKind::Hit(special),
                pos: placement.pos,
            })
        }
        GameEvent::DamageCharacter { power, target, .. } => {
            let Some(Ok(character)) =
                entity(target).map(|e| world.query_one_mut::<&mut Character>(e))
            else {
                log::warn!("damage for missing character {target:?}");
                return None;
            };
            if character.dead {
                return None;
            }
            character.health -= power;
            if character.health <= 0 {
                character.dead = true;
                map.remove_item(TileItemRef::Character(target));
                log::debug!("character {target:?} died");
            }
            None
        }
        GameEvent::ActorImpulse { target, vel } => {
            match entity(target).map(|e| world.query_one_mut::<&mut Impulse>(e)) {
                Some(Ok(impulse)) => impulse.vel += vel,
                _ => log::warn!("impulse for missing character {target:?}"),
            }
            None
        }
        _ => None,
    }
}

/// Tick down timed status effects.
pub fn update_status(world: &mut World, ticks: i32) {
    for (_entity, status) in world.query_mut::<&mut StatusEffects>() {
        status.poisoned_ticks = (status.poisoned_ticks - ticks).max(0);
        status.confused_ticks = (status.confused_ticks - ticks).max(0);
        status.hit_flash_ticks = (status.hit_flash_ticks - ticks).max(0);
    }
}
