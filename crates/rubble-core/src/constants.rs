//! Simulation constants and tuning parameters.

/// Fractional bits between full-precision and real (pixel) coordinates.
pub const FULL_SHIFT: i32 = 8;

// --- Map ---

/// Tile width in real pixels.
pub const TILE_WIDTH: i32 = 16;

/// Tile height in real pixels.
pub const TILE_HEIGHT: i32 = 12;

// --- Mobile objects ---

/// Ticks a mobile object stays silent after a hit sound.
pub const SOUND_LOCK_MOBILE_OBJECT: i32 = 12;

/// Downward acceleration applied to a fireball's `dz` per tick.
pub const FIREBALL_GRAVITY: i32 = 1;

/// Gas clouds halve their velocity every this many ticks.
pub const GAS_CLOUD_DRAG_INTERVAL: i32 = 8;

// --- Damage ---

/// Divisor applied to `hit_vector * power` for knock-back impulses.
pub const IMPULSE_DIVISOR: i32 = 25;

/// Score multiplier for hitting a penalty character.
pub const PENALTY_MULTIPLIER: i32 = -3;

// --- Screen shake ---

/// Shake requested by a quake object.
pub const SHAKE_BIG_AMOUNT: i32 = 15;

/// Shake requested by an explosion.
pub const SHAKE_SMALL_AMOUNT: i32 = 5;

// --- Explosions ---

/// Fireballs per ring of an explosion.
pub const EXPLOSION_RING_SIZE: u32 = 16;

/// Clouds spawned by a gas explosion.
pub const GAS_CLOUD_COUNT: u32 = 8;

/// Sparks spawned by a plain wreck.
pub const WRECKAGE_SPARK_COUNT: u32 = 4;

// --- Characters ---

/// Ticks of poison applied by a poisoning hit.
pub const POISON_TICKS: i32 = 140;

/// Ticks of confusion applied by a confusing hit.
pub const CONFUSE_TICKS: i32 = 140;
