//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Collision team used to filter spatial queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollisionTeam {
    #[default]
    None,
    Red,
    Blue,
}

/// Extra effect carried by an attack on top of raw power.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialDamage {
    #[default]
    None,
    Poison,
    Confuse,
    Explosion,
    Fire,
}

/// Classification tag of a scenery object. Carried through to the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectType {
    #[default]
    None,
    Objective,
}

/// Sub-behaviour tag of a mobile object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MobileObjectKind {
    #[default]
    Generic,
    Fireball,
}

/// Per-tick update strategy of a mobile object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateBehavior {
    /// Only ages; expires once `count` passes `range`.
    #[default]
    Expire,
    /// Ballistic fireball: moves, rises and falls, hits what it touches.
    Fireball,
    /// Slow drifting cloud that lingers and hits what it touches.
    GasCloud,
}

/// How the renderer should draw a mobile object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawStyle {
    #[default]
    None,
    Fireball,
    Flame,
    GasCloud,
    Spark,
}

/// Colour tint applied to a mobile object sprite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    #[default]
    None,
    Poison,
    Purple,
}

/// Explosion pattern spawned by a destroyed object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplosionKind {
    Explosion,
    Fire,
    Poison,
    Confuse,
}

/// Mission objective category reported to the objective tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectiveKind {
    Kill,
    Collect,
    Destroy,
    Rescue,
}

/// Sounds requested by the simulation. Playback is external.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundKind {
    Hit(SpecialDamage),
    Wreck,
    Explosion,
}
