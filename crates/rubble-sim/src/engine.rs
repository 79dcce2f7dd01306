//! Simulation harness.
//!
//! `Simulation` owns the spatial index, the character world, both registries
//! and the event queue, and runs one tick as: update pass, buffered hit
//! resolution, FIFO event drain, report. Completely headless, so a seeded
//! run is reproducible.

use glam::IVec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use rubble_core::bullet_class::BulletClasses;
use rubble_core::components::Character;
use rubble_core::config::{ConfigError, GameConfig};
use rubble_core::enums::{CollisionTeam, ObjectType};
use rubble_core::events::{EventQueue, FireballSpawn};
use rubble_core::flags::TileFlags;
use rubble_core::state::FrameReport;
use rubble_core::types::{ActorId, SlotId, TileItemRef};

use crate::actors;
use crate::damage::{self, DamageContext, Impact};
use crate::explosion::Effects;
use crate::mission::MissionProgress;
use crate::mobile_objects::{self, MobileObjects};
use crate::objects::{NewDestructible, Objects, OffsetPic};
use crate::policy::TeamRules;
use crate::spatial::{SpatialIndex, TileMap};
use crate::systems;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub game: GameConfig,
    /// Map size in tiles.
    pub map_size: IVec2,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
            map_size: IVec2::new(64, 64),
        }
    }
}

/// The simulation. Owns every registry and the event queue.
pub struct Simulation {
    config: GameConfig,
    policy: TeamRules,
    classes: BulletClasses,
    rng: ChaCha8Rng,
    map: TileMap,
    actors: World,
    objects: Objects,
    mobile_objects: MobileObjects,
    events: EventQueue,
    mission: MissionProgress,
    scores: Vec<i32>,
    tick: u64,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Self {
        Self {
            policy: TeamRules::from_rules(&config.game.game),
            config: config.game,
            classes: BulletClasses::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            map: TileMap::new(config.map_size.x, config.map_size.y),
            actors: World::new(),
            objects: Objects::new(),
            mobile_objects: MobileObjects::new(),
            events: EventQueue::new(),
            mission: MissionProgress::default(),
            scores: Vec::new(),
            tick: 0,
        }
    }

    /// Replace the bullet class table after validating it.
    pub fn with_bullet_classes(mut self, classes: BulletClasses) -> Result<Self, ConfigError> {
        classes.validate()?;
        self.classes = classes;
        Ok(self)
    }

    /// Spawn a character centred on `pos` (real space).
    pub fn spawn_character(&mut self, character: Character, pos: IVec2, size: IVec2) -> ActorId {
        actors::spawn_character(&mut self.actors, &mut self.map, character, pos, size)
    }

    /// Add a non-destructible object drawn by sprite name.
    pub fn add_object(
        &mut self,
        pos: IVec2,
        size: IVec2,
        pic_name: Option<&str>,
        kind: ObjectType,
        tile_flags: TileFlags,
    ) -> SlotId {
        self.objects
            .add(pos, size, pic_name, kind, tile_flags, &mut self.map)
    }

    /// Add a non-destructible object drawn with a legacy offset pic.
    pub fn add_old_object(
        &mut self,
        pos: IVec2,
        size: IVec2,
        pic: OffsetPic,
        kind: ObjectType,
        tile_flags: TileFlags,
    ) -> SlotId {
        self.objects
            .add_old(pos, size, pic, kind, tile_flags, &mut self.map)
    }

    pub fn add_destructible(&mut self, new: NewDestructible) -> SlotId {
        self.objects.add_destructible(new, &mut self.map)
    }

    /// Add a generic mobile object at a full-precision position.
    pub fn add_mobile_object(&mut self, full_pos: IVec2, player: Option<u8>) -> SlotId {
        self.mobile_objects.add(full_pos, player, &mut self.map)
    }

    pub fn spawn_fireball(&mut self, spawn: &FireballSpawn) -> SlotId {
        self.mobile_objects
            .spawn_fireball(spawn, &self.classes, &mut self.rng, &mut self.map)
    }

    /// Resolve an external bullet (particle `bullet`) landing at `pos` (real
    /// space). Same-team targets are skipped unless dogfight is on. Returns
    /// whether something was hit.
    pub fn hit_at(
        &mut self,
        bullet: u32,
        pos: IVec2,
        team: CollisionTeam,
        impact: &Impact,
    ) -> bool {
        let target = self.map.shootable_at(
            TileItemRef::Particle(bullet),
            pos,
            TileFlags::CAN_BE_SHOT,
            team,
            self.config.game.dogfight,
        );
        let mut ctx = self.damage_context();
        damage::damage_something(&mut ctx, impact, target)
    }

    /// Borrow everything damage resolution touches.
    pub fn damage_context(&mut self) -> DamageContext<'_> {
        DamageContext {
            config: &self.config,
            policy: &self.policy,
            actors: &self.actors,
            objects: &mut self.objects,
            fx: Effects {
                map: &mut self.map,
                mobs: &mut self.mobile_objects,
                classes: &self.classes,
                rng: &mut self.rng,
                events: &mut self.events,
                mission: &mut self.mission,
            },
        }
    }

    /// Advance the simulation by `ticks` and report what happened.
    pub fn tick(&mut self, ticks: i32) -> FrameReport {
        actors::update_status(&mut self.actors, ticks);
        let probes = self
            .mobile_objects
            .update_all(ticks, &mut self.map, &mut self.events);
        {
            let mut ctx = self.damage_context();
            for (id, full_pos) in probes {
                mobile_objects::resolve_hit(&mut ctx, id, full_pos);
            }
        }

        let drained = {
            let mut fx = Effects {
                map: &mut self.map,
                mobs: &mut self.mobile_objects,
                classes: &self.classes,
                rng: &mut self.rng,
                events: &mut self.events,
                mission: &mut self.mission,
            };
            systems::drain::run(&mut fx, &mut self.actors, &mut self.scores)
        };
        self.tick += 1;
        log::trace!(
            "tick {}: {} objects, {} mobile objects, {} events",
            self.tick,
            self.objects.len(),
            self.mobile_objects.len(),
            drained.events.len()
        );

        systems::snapshot::build_report(
            self.tick,
            &self.objects,
            &self.mobile_objects,
            drained,
            &self.scores,
        )
    }

    /// Tear everything down: both registries, the characters and any queued
    /// events.
    pub fn shutdown(&mut self) {
        self.mobile_objects.clear(&mut self.map);
        self.objects.clear(&mut self.map);
        for (entity, _) in self.actors.query_mut::<&Character>() {
            self.map
                .remove_item(TileItemRef::Character(actors::actor_id(entity)));
        }
        self.actors.clear();
        self.events.clear();
        log::info!("simulation shut down after {} ticks", self.tick);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn classes(&self) -> &BulletClasses {
        &self.classes
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn actors(&self) -> &World {
        &self.actors
    }

    pub fn objects(&self) -> &Objects {
        &self.objects
    }

    pub fn mobile_objects(&self) -> &MobileObjects {
        &self.mobile_objects
    }

    pub fn mobile_objects_mut(&mut self) -> &mut MobileObjects {
        &mut self.mobile_objects
    }

    pub fn mission(&self) -> &MissionProgress {
        &self.mission
    }

    pub fn scores(&self) -> &[i32] {
        &self.scores
    }

    /// Events queued but not yet drained.
    pub fn pending_events(&self) -> &EventQueue {
        &self.events
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }
}
