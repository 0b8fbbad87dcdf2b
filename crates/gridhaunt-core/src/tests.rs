#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::PlayerCommand;
    use crate::config::{ConfigError, HumanSpawn, LevelConfig};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::types::{GridBounds, GridCell, SimTime};

    #[test]
    fn test_neighbor_order_up_down_left_right() {
        let cell = GridCell::new(2, 2);
        assert_eq!(
            cell.neighbors(),
            [
                GridCell::new(2, 3),
                GridCell::new(2, 1),
                GridCell::new(1, 2),
                GridCell::new(3, 2),
            ]
        );
    }

    #[test]
    fn test_distance_is_euclidean() {
        let a = GridCell::new(0, 0);
        let b = GridCell::new(3, 4);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-6);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_cell_ordering_is_x_then_y() {
        let mut cells = vec![
            GridCell::new(1, 0),
            GridCell::new(0, 5),
            GridCell::new(0, 1),
        ];
        cells.sort();
        assert_eq!(
            cells,
            vec![GridCell::new(0, 1), GridCell::new(0, 5), GridCell::new(1, 0)]
        );
    }

    #[test]
    fn test_bounds_are_half_open() {
        let bounds = GridBounds::new(GridCell::new(-2, 3), 4, 2);
        assert!(bounds.contains(GridCell::new(-2, 3)));
        assert!(bounds.contains(GridCell::new(1, 4)));
        assert!(!bounds.contains(GridCell::new(2, 4)));
        assert!(!bounds.contains(GridCell::new(1, 5)));
        assert!(!bounds.contains(GridCell::new(-3, 3)));
        assert_eq!(bounds.cell_count(), 8);
        assert!(GridBounds::sized(0, 5).is_empty());
    }

    #[test]
    fn test_spirit_round_robin() {
        let assigned: Vec<SpiritType> = (0..6).map(SpiritType::from_index).collect();
        assert_eq!(
            assigned,
            vec![
                SpiritType::Red,
                SpiritType::Blue,
                SpiritType::Green,
                SpiritType::Yellow,
                SpiritType::Red,
                SpiritType::Blue,
            ]
        );
    }

    #[test]
    fn test_seed_offsets_disjoint_for_all_ids() {
        let ghost = AgentKind::Ghost.seed_offset();
        let human = AgentKind::Human.seed_offset();
        assert!((human - ghost).unsigned_abs() >= MAX_AGENTS_PER_KIND as u64);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(0.25);
        time.advance(0.25);
        assert_eq!(time.tick, 2);
        assert!((time.elapsed_secs - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_phase_finished() {
        assert!(GamePhase::LevelComplete.is_finished());
        assert!(GamePhase::GameOver.is_finished());
        assert!(!GamePhase::Active.is_finished());
        assert!(!GamePhase::Paused.is_finished());
    }

    // ---- Level config ----

    #[test]
    fn test_default_level_is_valid() {
        assert!(LevelConfig::default().validate().is_ok());
    }

    #[test]
    fn test_level_json_fills_defaults() {
        let json = r#"{ "index": 2, "bounds": { "origin": { "x": 0, "y": 0 }, "width": 5, "height": 5 } }"#;
        let level: LevelConfig = serde_json::from_str(json).unwrap();
        assert_eq!(level.index, 2);
        assert_eq!(level.bounds.width, 5);
        assert_eq!(level.regen_period, DEFAULT_REGEN_PERIOD);
        assert_eq!(level.portal_count, DEFAULT_PORTAL_COUNT);
        assert!(level.tiles.is_none());
    }

    #[test]
    fn test_world_origin_from_json_and_checked() {
        let json = r#"{ "world_origin": [3.5, -1.0] }"#;
        let level: LevelConfig = serde_json::from_str(json).unwrap();
        assert_eq!(level.world_origin, Vec2::new(3.5, -1.0));
        assert_eq!(LevelConfig::default().world_origin, Vec2::ZERO);

        let level = LevelConfig {
            world_origin: Vec2::new(f32::NAN, 0.0),
            ..Default::default()
        };
        assert!(matches!(
            level.validate(),
            Err(ConfigError::InvalidWorldOrigin(_))
        ));
    }

    #[test]
    fn test_empty_grid_rejected() {
        let level = LevelConfig {
            bounds: GridBounds::sized(0, 3),
            ..Default::default()
        };
        assert!(matches!(level.validate(), Err(ConfigError::EmptyGrid)));
    }

    #[test]
    fn test_bounds_past_i32_rejected() {
        let cases = [
            GridBounds::new(GridCell::new(i32::MAX - 1, 0), 5, 1),
            GridBounds::new(GridCell::new(0, i32::MAX), 1, 1),
            GridBounds::new(GridCell::new(0, 0), u32::MAX, 1),
            GridBounds::new(GridCell::new(-10, -10), 1 << 12, 1 << 12),
        ];
        for bounds in cases {
            let level = LevelConfig {
                bounds,
                ..Default::default()
            };
            assert!(
                matches!(level.validate(), Err(ConfigError::BoundsOverflow { .. })),
                "{bounds:?} accepted"
            );
        }
    }

    #[test]
    fn test_bounds_ranges_saturate() {
        let bounds = GridBounds::new(GridCell::new(i32::MAX - 1, i32::MIN), u32::MAX, 3);
        assert!(!bounds.fits_coordinates());
        assert_eq!(bounds.x_range(), i32::MAX - 1..i32::MAX);
        assert_eq!(bounds.y_range(), i32::MIN..i32::MIN + 3);
        assert!(bounds.contains(GridCell::new(i32::MAX - 1, i32::MIN)));
        assert!(GridBounds::new(GridCell::new(i32::MAX - 4, 0), 4, 1).fits_coordinates());
    }

    #[test]
    fn test_bad_regen_period_rejected() {
        for period in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let level = LevelConfig {
                regen_period: period,
                ..Default::default()
            };
            assert!(matches!(
                level.validate(),
                Err(ConfigError::InvalidRegenPeriod(_))
            ));
        }
    }

    #[test]
    fn test_tile_layout_shape_checked() {
        let level = LevelConfig {
            bounds: GridBounds::sized(3, 2),
            tiles: Some(vec!["###".into()]),
            ..Default::default()
        };
        assert!(matches!(
            level.validate(),
            Err(ConfigError::TileRowCount {
                found: 1,
                expected: 2
            })
        ));

        let level = LevelConfig {
            bounds: GridBounds::sized(3, 2),
            tiles: Some(vec!["###".into(), "##".into()]),
            ..Default::default()
        };
        assert!(matches!(
            level.validate(),
            Err(ConfigError::TileRowWidth { row: 1, found: 2, .. })
        ));
    }

    #[test]
    fn test_spawn_point_mismatch() {
        let level = LevelConfig {
            index: 7,
            initial_human_count: 3,
            human_spawns: vec![HumanSpawn {
                cell: GridCell::new(1, 1),
                spirit: SpiritType::Green,
            }],
            ..Default::default()
        };
        match level.validate() {
            Err(ConfigError::SpawnPointMismatch {
                level,
                spawn_points,
                required,
            }) => {
                assert_eq!(level, 7);
                assert_eq!(spawn_points, 1);
                assert_eq!(required, 3);
            }
            other => panic!("expected SpawnPointMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_spawn_outside_grid() {
        let level = LevelConfig {
            bounds: GridBounds::sized(4, 4),
            initial_human_count: 1,
            human_spawns: vec![HumanSpawn {
                cell: GridCell::new(4, 0),
                spirit: SpiritType::Red,
            }],
            ..Default::default()
        };
        assert!(matches!(
            level.validate(),
            Err(ConfigError::SpawnOutsideGrid { .. })
        ));
    }

    #[test]
    fn test_extra_spawn_points_are_ignored() {
        let spawn = HumanSpawn {
            cell: GridCell::new(0, 0),
            spirit: SpiritType::Blue,
        };
        let level = LevelConfig {
            initial_human_count: 2,
            human_spawns: vec![spawn; 5],
            ..Default::default()
        };
        assert!(level.validate().is_ok());
        assert_eq!(level.active_human_spawns().len(), 2);
    }

    // ---- Wire shapes ----

    #[test]
    fn test_command_tagged_json() {
        let json = serde_json::to_string(&PlayerCommand::OpenPortal { portal_id: 3 }).unwrap();
        assert_eq!(json, r#"{"type":"OpenPortal","portal_id":3}"#);
        let back: PlayerCommand = serde_json::from_str(r#"{"type":"StartLevel","index":1}"#).unwrap();
        assert_eq!(back, PlayerCommand::StartLevel { index: 1 });
    }

    #[test]
    fn test_event_tagged_json() {
        let event = SimEvent::GameOver { level_index: 0 };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"GameOver""#));
        let back: SimEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
