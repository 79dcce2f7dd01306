//! Team and ownership rules deciding whether an attack hits or hurts.

use rubble_core::components::Character;
use rubble_core::config::GameRules;
use rubble_core::enums::SpecialDamage;
use rubble_core::flags::{ActorFlags, HitFlags};

/// Friendly-fire and invulnerability policy consulted for character targets.
pub trait TeamPolicy {
    /// Whether the attack connects at all (feedback, knock-back).
    fn can_hit(&self, flags: HitFlags, source: Option<u8>, target: &Character) -> bool;

    /// Whether a connecting attack also takes health.
    fn can_damage(
        &self,
        flags: HitFlags,
        source: Option<u8>,
        target: &Character,
        special: SpecialDamage,
    ) -> bool;
}

/// Default rules driven by `GameRules`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamRules {
    pub friendly_fire: bool,
}

impl TeamRules {
    pub fn from_rules(rules: &GameRules) -> Self {
        Self {
            friendly_fire: rules.friendly_fire,
        }
    }
}

impl TeamPolicy for TeamRules {
    fn can_hit(&self, flags: HitFlags, source: Option<u8>, target: &Character) -> bool {
        if target.dead {
            return false;
        }
        if flags.contains(HitFlags::HURT_ALWAYS) {
            return true;
        }
        if source.is_some() && source == target.player_index {
            return false;
        }
        let from_players = flags.contains(HitFlags::PLAYERS);
        let target_good = target.flags.contains(ActorFlags::GOOD_GUY);
        match (from_players, target_good) {
            (true, true) => self.friendly_fire,
            (false, false) => false,
            _ => true,
        }
    }

    fn can_damage(
        &self,
        flags: HitFlags,
        source: Option<u8>,
        target: &Character,
        _special: SpecialDamage,
    ) -> bool {
        self.can_hit(flags, source, target) && !target.flags.contains(ActorFlags::INVULNERABLE)
    }
}
