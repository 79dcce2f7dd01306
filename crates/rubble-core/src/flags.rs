//! Bit-flag newtypes for tile items, objects, hits and characters.

use serde::{Deserialize, Serialize};

macro_rules! bit_flags {
    ($(#[$meta:meta])* $name:ident { $($(#[$fmeta:meta])* $flag:ident = $bit:expr;)* }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            pub const NONE: Self = Self(0);
            $($(#[$fmeta])* pub const $flag: Self = Self($bit);)*

            pub fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            pub fn intersects(self, other: Self) -> bool {
                self.0 & other.0 != 0
            }

            pub fn is_empty(self) -> bool {
                self.0 == 0
            }
        }

        impl std::ops::BitOr for $name {
            type Output = Self;
            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl std::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }
    };
}

bit_flags! {
    /// Flags on a spatial-index entry.
    TileFlags {
        CAN_BE_SHOT = 1 << 0;
        IS_WRECK = 1 << 1;
        /// Entry belongs to a mission objective; index in `OBJECTIVE_MASK`.
        OBJECTIVE = 1 << 2;
    }
}

/// Objective index bits inside `TileFlags`.
pub const OBJECTIVE_SHIFT: u32 = 8;
pub const OBJECTIVE_MASK: u32 = 0xff << OBJECTIVE_SHIFT;

impl TileFlags {
    /// Mark this entry as part of objective `index`.
    pub fn with_objective(self, index: u8) -> Self {
        Self((self.0 & !OBJECTIVE_MASK) | Self::OBJECTIVE.0 | ((index as u32) << OBJECTIVE_SHIFT))
    }

    /// The objective index, if this entry belongs to one.
    pub fn objective(self) -> Option<u8> {
        if self.contains(Self::OBJECTIVE) {
            Some(((self.0 & OBJECTIVE_MASK) >> OBJECTIVE_SHIFT) as u8)
        } else {
            None
        }
    }
}

bit_flags! {
    /// Destruction behaviour of a scenery object.
    ObjectFlags {
        EXPLOSIVE = 1 << 0;
        FLAMMABLE = 1 << 1;
        POISONOUS = 1 << 2;
        CONFUSING = 1 << 3;
        QUAKE = 1 << 4;
    }
}

bit_flags! {
    /// Ownership bits carried by an attack.
    HitFlags {
        /// Fired by a player-side shooter.
        PLAYERS = 1 << 0;
        /// Hits anyone regardless of side.
        HURT_ALWAYS = 1 << 1;
    }
}

bit_flags! {
    /// Character state and allegiance bits.
    ActorFlags {
        /// Player-side character.
        GOOD_GUY = 1 << 0;
        /// Hitting this character costs score.
        PENALTY = 1 << 1;
        INVULNERABLE = 1 << 2;
    }
}
