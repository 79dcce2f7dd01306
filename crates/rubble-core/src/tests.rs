#[cfg(test)]
mod tests {
    use glam::IVec2;

    use crate::bullet_class::{BulletClassId, BulletClasses};
    use crate::config::{ConfigError, GameConfig};
    use crate::enums::*;
    use crate::events::{EventQueue, GameEvent};
    use crate::flags::*;
    use crate::state::FrameReport;
    use crate::types::*;

    /// Verify GameEvent round-trips through serde (tagged union).
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::HitCharacter {
                flags: HitFlags::PLAYERS,
                player_index: Some(1),
                target: ActorId(99),
                special: SpecialDamage::Poison,
                has_hit_sound: true,
            },
            GameEvent::DamageCharacter {
                power: 7,
                player_index: None,
                target: ActorId(3),
                target_player_index: Some(0),
            },
            GameEvent::ActorImpulse {
                target: ActorId(3),
                vel: IVec2::new(-4, 2),
            },
            GameEvent::Score {
                player_index: 0,
                score: -21,
            },
            GameEvent::ScreenShake { amount: 15 },
            GameEvent::MobileObjectRemove {
                id: SlotId::new(4, 2),
            },
            GameEvent::FireballWreckageSpawn {
                full_pos: IVec2::new(2560, 1280),
            },
            GameEvent::Sound {
                sound: SoundKind::Hit(SpecialDamage::Fire),
                pos: IVec2::new(10, 10),
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_event_queue_is_fifo() {
        let mut queue = EventQueue::new();
        queue.enqueue(GameEvent::ScreenShake { amount: 1 });
        queue.enqueue(GameEvent::ScreenShake { amount: 2 });
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some(GameEvent::ScreenShake { amount: 1 }));
        assert_eq!(queue.pop(), Some(GameEvent::ScreenShake { amount: 2 }));
        assert!(queue.pop().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_tile_flags_objective_index() {
        let flags = TileFlags::CAN_BE_SHOT.with_objective(3);
        assert!(flags.contains(TileFlags::CAN_BE_SHOT));
        assert_eq!(flags.objective(), Some(3));
        assert_eq!(TileFlags::CAN_BE_SHOT.objective(), None);
    }

    #[test]
    fn test_object_flags_ops() {
        let flags = ObjectFlags::EXPLOSIVE | ObjectFlags::QUAKE;
        assert!(flags.contains(ObjectFlags::QUAKE));
        assert!(!flags.contains(ObjectFlags::FLAMMABLE));
        assert!(flags.intersects(ObjectFlags::EXPLOSIVE | ObjectFlags::POISONOUS));
        assert!(ObjectFlags::NONE.is_empty());
    }

    #[test]
    fn test_full_real_conversion() {
        let real = IVec2::new(37, -5);
        assert_eq!(full_to_real(real_to_full(real)), real);
        // Sub-pixel part is truncated.
        assert_eq!(full_to_real(IVec2::new(256 * 3 + 255, 0)), IVec2::new(3, 0));
    }

    #[test]
    fn test_full_vector_directions() {
        assert_eq!(full_vector_for_radians(0.0), IVec2::new(0, -256));
        assert_eq!(
            full_vector_for_radians(std::f64::consts::FRAC_PI_2),
            IVec2::new(256, 0)
        );
        assert_eq!(full_vector_for_radians(std::f64::consts::PI), IVec2::new(0, 256));
    }

    #[test]
    fn test_tile_item_overlap() {
        let item = TileItem::new(IVec2::new(100, 100), IVec2::new(10, 10), TileFlags::NONE);
        assert!(item.overlaps(IVec2::new(104, 96), IVec2::ZERO));
        assert!(!item.overlaps(IVec2::new(106, 100), IVec2::ZERO));
        assert!(item.overlaps(IVec2::new(106, 100), IVec2::new(4, 4)));
    }

    #[test]
    fn test_harmless_classes() {
        let table = BulletClasses::default();
        assert!(table.get(BulletClassId::Wreck).is_harmless());
        assert!(!table.get(BulletClassId::Fireball1).is_harmless());
        // Zero power but a real special still counts as a hit.
        assert!(!table.get(BulletClassId::GasCloudPoison).is_harmless());
        table.validate().unwrap();
    }

    #[test]
    fn test_bullet_classes_json_override() {
        let json = r#"{
            "Flame": {
                "power": 2, "speed_low": 10, "speed_high": 20,
                "range_low": 5, "range_high": 9, "special": "Fire",
                "size": [4, 4], "update": "Fireball", "draw": "Flame"
            }
        }"#;
        let table = BulletClasses::from_json(json).unwrap();
        assert_eq!(table.get(BulletClassId::Flame).power, 2);
        assert_eq!(table.get(BulletClassId::Flame).size, IVec2::new(4, 4));
        // Untouched classes keep their defaults.
        assert_eq!(
            table.get(BulletClassId::Fireball1),
            BulletClasses::default().get(BulletClassId::Fireball1)
        );
    }

    #[test]
    fn test_bullet_classes_rejects_inverted_range() {
        let json = r#"{
            "Wreck": {
                "power": 0, "speed_low": 50, "speed_high": 10,
                "range_low": 5, "range_high": 9, "size": [1, 1]
            }
        }"#;
        match BulletClasses::from_json(json) {
            Err(ConfigError::InvalidRange { class, field, .. }) => {
                assert_eq!(class, BulletClassId::Wreck);
                assert_eq!(field, "speed");
            }
            other => panic!("expected InvalidRange, got {other:?}"),
        }
    }

    #[test]
    fn test_bullet_classes_set_rejects_inverted_range() {
        let mut table = BulletClasses::default();
        let mut flame = table.get(BulletClassId::Flame).clone();
        flame.speed_low = 10;
        flame.speed_high = 5;

        let err = table.set(BulletClassId::Flame, flame).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidRange {
                class: BulletClassId::Flame,
                field: "speed",
                low: 10,
                high: 5,
            }
        ));
        // Rejected rows leave the table untouched.
        assert_eq!(table, BulletClasses::default());
        table.validate().unwrap();
    }

    #[test]
    fn test_bullet_classes_deserialize_validates() {
        let err = serde_json::from_str::<BulletClasses>("{}").unwrap_err();
        assert!(err.to_string().contains("missing from the table"), "{err}");

        let json = serde_json::to_string(&BulletClasses::default()).unwrap();
        let back: BulletClasses = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BulletClasses::default());
    }

    #[test]
    fn test_game_config_partial_json() {
        let config = GameConfig::from_json(r#"{ "game": { "dogfight": true } }"#).unwrap();
        assert!(config.game.dogfight);
        assert!(config.game.shots_pushback, "missing keys take defaults");
        assert!(config.sound.hits);

        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    /// Verify FrameReport can be serialized to JSON.
    #[test]
    fn test_frame_report_serde() {
        let report = FrameReport::default();
        let json = serde_json::to_string(&report).unwrap();
        let back: FrameReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report.tick, back.tick);
        assert!(back.events.is_empty());
    }
}
