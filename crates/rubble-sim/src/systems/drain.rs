//! Event drain: applies queued events in FIFO order once the update pass and
//! hit resolution are over.

use hecs::World;

use rubble_core::events::GameEvent;

use crate::actors;
use crate::explosion::{self, Effects};

/// What the drain observed, for the frame report.
#[derive(Debug, Default)]
pub struct Drained {
    pub events: Vec<GameEvent>,
    pub screen_shake: i32,
}

/// Drain `fx.events` until empty. Events enqueued while draining are applied
/// in the same pass, after everything already queued.
pub fn run(fx: &mut Effects<'_>, world: &mut World, scores: &mut Vec<i32>) -> Drained {
    let mut drained = Drained::default();
    while let Some(event) = fx.events.pop() {
        match event {
            GameEvent::MobileObjectRemove { id } => {
                if fx.mobs.try_get(id).is_some() {
                    fx.mobs.destroy(id, &mut *fx.map);
                } else {
                    log::warn!("remove for mobile object {id} that is not in use");
                }
            }
            GameEvent::FireballWreckageSpawn { full_pos } => {
                explosion::add_fireball_wreckage(fx, full_pos);
            }
            GameEvent::HitCharacter { .. }
            | GameEvent::DamageCharacter { .. }
            | GameEvent::ActorImpulse { .. } => {
                if let Some(follow_up) = actors::apply_event(world, &mut *fx.map, &event) {
                    fx.events.enqueue(follow_up);
                }
            }
            GameEvent::Score {
                player_index,
                score,
            } => {
                let index = usize::from(player_index);
                if scores.len() <= index {
                    scores.resize(index + 1, 0);
                }
                scores[index] += score;
            }
            GameEvent::ScreenShake { amount } => {
                drained.screen_shake = drained.screen_shake.max(amount);
            }
            GameEvent::Sound { .. } => {}
        }
        drained.events.push(event);
    }
    drained
}
