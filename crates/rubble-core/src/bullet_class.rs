//! Static bullet-class data: power, speed and range bounds, behaviour selectors.

use std::collections::HashMap;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::enums::{DrawStyle, SpecialDamage, UpdateBehavior};

/// Identifier of a bullet class in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BulletClassId {
    Fireball1,
    Fireball2,
    Fireball3,
    Flame,
    GasCloudPoison,
    GasCloudConfuse,
    /// Cosmetic sparks left by a plain wreck.
    Wreck,
}

impl BulletClassId {
    pub const ALL: [BulletClassId; 7] = [
        BulletClassId::Fireball1,
        BulletClassId::Fireball2,
        BulletClassId::Fireball3,
        BulletClassId::Flame,
        BulletClassId::GasCloudPoison,
        BulletClassId::GasCloudConfuse,
        BulletClassId::Wreck,
    ];
}

/// One row of the bullet-class table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletClass {
    pub power: i32,
    /// Speed bounds in full units per tick, inclusive.
    pub speed_low: i32,
    pub speed_high: i32,
    /// Lifetime bounds in ticks, inclusive.
    pub range_low: i32,
    pub range_high: i32,
    #[serde(default)]
    pub special: SpecialDamage,
    /// Footprint in real pixels.
    pub size: IVec2,
    #[serde(default)]
    pub update: UpdateBehavior,
    #[serde(default)]
    pub draw: DrawStyle,
}

impl BulletClass {
    /// Cosmetic classes never register hits.
    pub fn is_harmless(&self) -> bool {
        self.power <= 0 && matches!(self.special, SpecialDamage::None | SpecialDamage::Explosion)
    }
}

/// Lookup table from `BulletClassId` to `BulletClass`.
///
/// Every table is complete and has ordered bounds: the built-in table is,
/// and every other way in (`set`, `from_json`, deserializing) validates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "HashMap<BulletClassId, BulletClass>",
    into = "HashMap<BulletClassId, BulletClass>"
)]
pub struct BulletClasses {
    classes: HashMap<BulletClassId, BulletClass>,
}

impl BulletClasses {
    pub fn get(&self, id: BulletClassId) -> &BulletClass {
        &self.classes[&id]
    }

    /// Replace a class. An invalid row is rejected and the table is left
    /// unchanged.
    pub fn set(&mut self, id: BulletClassId, class: BulletClass) -> Result<(), ConfigError> {
        check_bounds(id, &class)?;
        self.classes.insert(id, class);
        Ok(())
    }

    /// Load a JSON object of class overrides on top of the built-in table.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let overrides: HashMap<BulletClassId, BulletClass> = serde_json::from_str(json)?;
        let mut table = Self::default();
        for (id, class) in overrides {
            table.set(id, class)?;
        }
        Ok(table)
    }

    /// Check every class is present with ordered speed and range bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for id in BulletClassId::ALL {
            let class = self
                .classes
                .get(&id)
                .ok_or(ConfigError::MissingClass(id))?;
            check_bounds(id, class)?;
        }
        Ok(())
    }
}

fn check_bounds(id: BulletClassId, class: &BulletClass) -> Result<(), ConfigError> {
    if class.speed_low > class.speed_high {
        return Err(ConfigError::InvalidRange {
            class: id,
            field: "speed",
            low: class.speed_low,
            high: class.speed_high,
        });
    }
    if class.range_low > class.range_high {
        return Err(ConfigError::InvalidRange {
            class: id,
            field: "range",
            low: class.range_low,
            high: class.range_high,
        });
    }
    Ok(())
}

impl TryFrom<HashMap<BulletClassId, BulletClass>> for BulletClasses {
    type Error = ConfigError;

    fn try_from(classes: HashMap<BulletClassId, BulletClass>) -> Result<Self, Self::Error> {
        let table = Self { classes };
        table.validate()?;
        Ok(table)
    }
}

impl From<BulletClasses> for HashMap<BulletClassId, BulletClass> {
    fn from(table: BulletClasses) -> Self {
        table.classes
    }
}

impl Default for BulletClasses {
    fn default() -> Self {
        let fireball = |power, speed_low, speed_high, range_low, range_high| BulletClass {
            power,
            speed_low,
            speed_high,
            range_low,
            range_high,
            special: SpecialDamage::Explosion,
            size: IVec2::new(7, 5),
            update: UpdateBehavior::Fireball,
            draw: DrawStyle::Fireball,
        };
        let gas = |special| BulletClass {
            power: 0,
            speed_low: 64,
            speed_high: 96,
            range_low: 140,
            range_high: 180,
            special,
            size: IVec2::new(10, 10),
            update: UpdateBehavior::GasCloud,
            draw: DrawStyle::GasCloud,
        };

        let classes = HashMap::from([
            (BulletClassId::Fireball1, fireball(10, 256, 512, 40, 50)),
            (BulletClassId::Fireball2, fireball(8, 192, 384, 45, 55)),
            (BulletClassId::Fireball3, fireball(6, 128, 256, 50, 60)),
            (
                BulletClassId::Flame,
                BulletClass {
                    power: 6,
                    speed_low: 160,
                    speed_high: 320,
                    range_low: 60,
                    range_high: 90,
                    special: SpecialDamage::Fire,
                    size: IVec2::new(5, 5),
                    update: UpdateBehavior::Fireball,
                    draw: DrawStyle::Flame,
                },
            ),
            (BulletClassId::GasCloudPoison, gas(SpecialDamage::Poison)),
            (BulletClassId::GasCloudConfuse, gas(SpecialDamage::Confuse)),
            (
                BulletClassId::Wreck,
                BulletClass {
                    power: 0,
                    speed_low: 64,
                    speed_high: 192,
                    range_low: 20,
                    range_high: 30,
                    special: SpecialDamage::None,
                    size: IVec2::new(3, 3),
                    update: UpdateBehavior::Fireball,
                    draw: DrawStyle::Spark,
                },
            ),
        ]);
        Self { classes }
    }
}
