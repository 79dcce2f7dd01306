//! Damage resolution: turns an impact on a tile item into events or
//! structural damage.
//!
//! Characters never change here; everything that happens to them is queued
//! as events. Hit (feedback) and damage (health) are separate events so a
//! character can visibly react to an attack it fully resists.

use glam::IVec2;

use rubble_core::components::Character;
use rubble_core::config::GameConfig;
use rubble_core::constants::{IMPULSE_DIVISOR, PENALTY_MULTIPLIER};
use rubble_core::enums::SpecialDamage;
use rubble_core::events::GameEvent;
use rubble_core::flags::{ActorFlags, HitFlags};
use rubble_core::types::{ActorId, TileItemRef};

use crate::actors;
use crate::explosion::Effects;
use crate::objects::Objects;
use crate::policy::TeamPolicy;

/// One attack landing somewhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    /// Direction and speed of the attack, used for knock-back.
    pub hit_vector: IVec2,
    /// May be 0 for effects that only carry a special.
    pub power: i32,
    pub flags: HitFlags,
    /// Attacking player; `None` for the environment.
    pub player: Option<u8>,
    pub special: SpecialDamage,
    pub has_hit_sound: bool,
}

/// Borrowed world state needed to resolve an impact.
pub struct DamageContext<'a> {
    pub config: &'a GameConfig,
    pub policy: &'a dyn TeamPolicy,
    pub actors: &'a hecs::World,
    pub objects: &'a mut Objects,
    pub fx: Effects<'a>,
}

/// Resolve `impact` against `target`. Returns whether the attack connected.
pub fn damage_something(
    ctx: &mut DamageContext<'_>,
    impact: &Impact,
    target: Option<TileItemRef>,
) -> bool {
    let Some(target) = target else {
        return false;
    };

    match target {
        TileItemRef::Character(id) => damage_character(ctx, impact, id),
        TileItemRef::Object(id) => {
            let impact = Impact {
                has_hit_sound: ctx.config.sound.hits && impact.has_hit_sound,
                ..*impact
            };
            ctx.objects.apply_damage(id, &impact, &mut ctx.fx);
            true
        }
        TileItemRef::Particle(_) | TileItemRef::MobileObject(_) => true,
    }
}

fn damage_character(ctx: &mut DamageContext<'_>, impact: &Impact, id: ActorId) -> bool {
    let character: Character = match actors::entity(id).map(|e| ctx.actors.get::<&Character>(e)) {
        Some(Ok(character)) => (*character).clone(),
        _ => panic!("cannot damage nonexistent character {id:?}"),
    };

    let can_hit = ctx.policy.can_hit(impact.flags, impact.player, &character);
    if !can_hit {
        return false;
    }

    let events = &mut *ctx.fx.events;
    events.enqueue(GameEvent::HitCharacter {
        flags: impact.flags,
        player_index: impact.player,
        target: id,
        special: impact.special,
        has_hit_sound: ctx.config.sound.hits && impact.has_hit_sound,
    });
    if ctx.config.game.shots_pushback {
        events.enqueue(GameEvent::ActorImpulse {
            target: id,
            vel: impact.hit_vector * impact.power / IMPULSE_DIVISOR,
        });
    }
    if ctx
        .policy
        .can_damage(impact.flags, impact.player, &character, impact.special)
    {
        events.enqueue(GameEvent::DamageCharacter {
            power: impact.power,
            player_index: impact.player,
            target: id,
            target_player_index: character.player_index,
        });
        if let Some(player_index) = impact.player.filter(|_| impact.power != 0) {
            let score = if character.flags.contains(ActorFlags::PENALTY) {
                PENALTY_MULTIPLIER * impact.power
            } else {
                impact.power
            };
            events.enqueue(GameEvent::Score {
                player_index,
                score,
            });
        }
    }
    true
}
