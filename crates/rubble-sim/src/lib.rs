//! Scenery and projectile simulation for rubble.
//!
//! Owns the destructible object and mobile object registries, resolves
//! damage against characters and scenery, and produces `FrameReport`s for
//! the presentation side.

pub mod actors;
pub mod damage;
pub mod engine;
pub mod explosion;
pub mod mission;
pub mod mobile_objects;
pub mod objects;
pub mod policy;
pub mod slot_pool;
pub mod spatial;
pub mod systems;

pub use rubble_core as core;
pub use engine::{SimConfig, Simulation};
