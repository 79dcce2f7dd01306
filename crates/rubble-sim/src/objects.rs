//! Destructible object registry: scenery that can be shot, wrecked or blown up.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use rubble_core::constants::SHAKE_BIG_AMOUNT;
use rubble_core::enums::{ExplosionKind, ObjectType, ObjectiveKind, SoundKind};
use rubble_core::events::GameEvent;
use rubble_core::flags::{ObjectFlags, TileFlags};
use rubble_core::types::{real_to_full, SlotId, TileItem, TileItemRef};

use crate::damage::Impact;
use crate::explosion::{self, Effects};
use crate::slot_pool::SlotPool;
use crate::spatial::SpatialIndex;

/// Legacy sprite: picture index plus draw offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetPic {
    pub pic_index: u16,
    pub dx: i32,
    pub dy: i32,
}

/// A picture known to the sprite store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PicInfo {
    pub id: u32,
    pub size: IVec2,
    /// Default draw offset of the picture.
    pub offset: IVec2,
}

/// Sprite store lookups used to resolve what an object looks like.
pub trait PicLookup {
    fn named(&self, name: &str) -> Option<PicInfo>;
    fn old(&self, index: u16) -> Option<PicInfo>;
}

/// Picture and draw offset chosen for an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSprite {
    pub pic: PicInfo,
    pub offset: IVec2,
}

/// A scenery object.
#[derive(Debug, Clone)]
pub struct Object {
    pub id: SlotId,
    pub tile: TileItem,
    pub pic: Option<OffsetPic>,
    pub wrecked_pic: Option<OffsetPic>,
    pub pic_name: Option<String>,
    /// Remaining health; 0 means indestructible or already destroyed.
    pub structure: i32,
    pub flags: ObjectFlags,
    pub kind: ObjectType,
}

impl Object {
    fn tile_ref(&self) -> TileItemRef {
        TileItemRef::Object(self.id)
    }

    pub fn is_wreck(&self) -> bool {
        self.tile.flags.contains(TileFlags::IS_WRECK)
    }
}

/// Parameters for a destructible object.
#[derive(Debug, Clone, Default)]
pub struct NewDestructible {
    /// Real-space centre.
    pub pos: IVec2,
    pub size: IVec2,
    pub pic: Option<OffsetPic>,
    pub wrecked_pic: Option<OffsetPic>,
    pub pic_name: Option<String>,
    pub structure: i32,
    pub flags: ObjectFlags,
    pub tile_flags: TileFlags,
}

/// How an object's destruction played out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destruction {
    /// Swapped to its wrecked sprite and left in place as terrain.
    Wrecked,
    /// Blew up and was removed.
    Exploded(ExplosionKind),
    /// Left wreckage sparks and was removed.
    Removed,
}

/// Result of `Objects::apply_damage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Structure was already 0.
    Ignored,
    Damaged { structure: i32 },
    Destroyed(Destruction),
}

/// Registry of all scenery objects.
#[derive(Debug, Clone, Default)]
pub struct Objects {
    pool: SlotPool<Object>,
}

impl Objects {
    pub fn new() -> Self {
        Self {
            pool: SlotPool::with_capacity(1024),
        }
    }

    /// Add a non-destructible object at a real-space position.
    pub fn add(
        &mut self,
        pos: IVec2,
        size: IVec2,
        pic_name: Option<&str>,
        kind: ObjectType,
        tile_flags: TileFlags,
        map: &mut dyn SpatialIndex,
    ) -> SlotId {
        let id = self.pool.insert_with(|id| Object {
            id,
            tile: TileItem::new(pos, size, tile_flags),
            pic: None,
            wrecked_pic: None,
            pic_name: pic_name.map(str::to_owned),
            structure: 0,
            flags: ObjectFlags::NONE,
            kind,
        });
        let obj = self.pool.get(id);
        map.move_item(obj.tile_ref(), &obj.tile);
        id
    }

    /// Add a non-destructible object drawn with a legacy offset pic.
    pub fn add_old(
        &mut self,
        pos: IVec2,
        size: IVec2,
        pic: OffsetPic,
        kind: ObjectType,
        tile_flags: TileFlags,
        map: &mut dyn SpatialIndex,
    ) -> SlotId {
        let id = self.add(pos, size, None, kind, tile_flags, map);
        self.pool.get_mut(id).pic = Some(pic);
        id
    }

    /// Add an object that can take structural damage.
    pub fn add_destructible(&mut self, new: NewDestructible, map: &mut dyn SpatialIndex) -> SlotId {
        let id = self.add(
            new.pos,
            new.size,
            new.pic_name.as_deref(),
            ObjectType::None,
            new.tile_flags,
            map,
        );
        let obj = self.pool.get_mut(id);
        obj.pic = new.pic;
        obj.wrecked_pic = new.wrecked_pic;
        obj.structure = new.structure.max(0);
        obj.flags = new.flags;
        id
    }

    /// Resolve the sprite to draw. The named pic wins when it resolves; the
    /// offset pic supplies the picture otherwise and always the offset.
    pub fn sprite(&self, id: SlotId, pics: &dyn PicLookup) -> Option<ResolvedSprite> {
        let obj = self.pool.get(id);
        let named = obj
            .pic_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .and_then(|name| pics.named(name));
        match (obj.pic, named) {
            (None, None) => None,
            (None, Some(pic)) => Some(ResolvedSprite {
                pic,
                offset: pic.size / -2,
            }),
            (Some(old), named) => {
                let pic = match named {
                    Some(pic) => pic,
                    None => pics.old(old.pic_index)?,
                };
                Some(ResolvedSprite {
                    pic,
                    offset: IVec2::new(old.dx, old.dy),
                })
            }
        }
    }

    /// Apply structural damage and run the destruction cascade when the
    /// object's structure reaches zero. `impact.has_hit_sound` is the final
    /// sound decision.
    pub fn apply_damage(&mut self, id: SlotId, impact: &Impact, fx: &mut Effects<'_>) -> DamageOutcome {
        let obj = self.pool.get_mut(id);
        if obj.structure <= 0 {
            return DamageOutcome::Ignored;
        }

        obj.structure -= impact.power.max(0);
        let pos = obj.tile.pos;
        if impact.has_hit_sound && impact.power > 0 {
            fx.events.enqueue(GameEvent::Sound {
                sound: SoundKind::Hit(impact.special),
                pos,
            });
        }
        if obj.structure > 0 {
            return DamageOutcome::Damaged {
                structure: obj.structure,
            };
        }

        obj.structure = 0;
        fx.mission
            .notify_destroyed(obj.tile.flags, ObjectiveKind::Destroy, impact.player, pos);
        if obj.flags.contains(ObjectFlags::QUAKE) {
            fx.events.enqueue(GameEvent::ScreenShake {
                amount: SHAKE_BIG_AMOUNT,
            });
        }

        let full_pos = real_to_full(pos);
        let destruction = if let Some(wrecked) = obj.wrecked_pic {
            obj.tile.flags = TileFlags::IS_WRECK;
            obj.pic = Some(wrecked);
            obj.pic_name = None;
            fx.map.move_item(obj.tile_ref(), &obj.tile);
            Destruction::Wrecked
        } else if let Some(kind) = explosion::explosion_kind(obj.flags) {
            self.destroy(id, fx.map);
            explosion::add_explosion(fx, kind, full_pos, impact.flags, impact.player);
            Destruction::Exploded(kind)
        } else {
            self.destroy(id, fx.map);
            fx.events
                .enqueue(GameEvent::FireballWreckageSpawn { full_pos });
            fx.events.enqueue(GameEvent::Sound {
                sound: SoundKind::Wreck,
                pos,
            });
            Destruction::Removed
        };
        log::debug!("object {id} destroyed at {pos}: {destruction:?}");
        DamageOutcome::Destroyed(destruction)
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

    pub fn get(&self, id: SlotId) -> &Object {
        self.pool.get(id)
    }

    pub fn try_get(&self, id: SlotId) -> Option<&Object> {
        self.pool.try_get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &Object)> {
        self.pool.iter()
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}
