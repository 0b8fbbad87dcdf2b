#[cfg(test)]
mod tests {
    use glam::Vec2;

    use gridhaunt_core::config::LevelConfig;
    use gridhaunt_core::types::{GridBounds, GridCell};

    use crate::geometry::CellGeometry;
    use crate::tilemap::TileMap;
    use crate::topology::GridTopology;

    fn layout(rows: &[&str]) -> Vec<String> {
        rows.iter().map(|r| r.to_string()).collect()
    }

    fn open_topology(width: u32, height: u32) -> GridTopology {
        GridTopology::with_map(TileMap::open(
            GridBounds::sized(width, height),
            CellGeometry::default(),
        ))
    }

    // ---- Geometry ----

    #[test]
    fn test_cell_to_world_centers_cell() {
        let geometry = CellGeometry::new(Vec2::new(10.0, -4.0), 2.0);
        assert_eq!(geometry.cell_to_world(GridCell::new(0, 0)), Vec2::new(11.0, -3.0));
        assert_eq!(geometry.cell_to_world(GridCell::new(3, -1)), Vec2::new(17.0, -5.0));
    }

    #[test]
    fn test_world_to_cell_inverts_cell_to_world() {
        let geometry = CellGeometry::new(Vec2::new(0.5, 0.5), 0.75);
        for cell in [GridCell::new(0, 0), GridCell::new(-3, 7), GridCell::new(12, -9)] {
            assert_eq!(geometry.world_to_cell(geometry.cell_to_world(cell)), cell);
        }
    }

    // ---- Tile map ----

    #[test]
    fn test_layout_top_row_is_highest_y() {
        let map = TileMap::from_layout(
            GridBounds::sized(3, 2),
            &layout(&["#..", "..#"]),
            CellGeometry::default(),
        );
        assert!(map.has_tile(GridCell::new(0, 1)));
        assert!(map.has_tile(GridCell::new(2, 0)));
        assert!(!map.has_tile(GridCell::new(0, 0)));
        assert!(!map.has_tile(GridCell::new(2, 1)));
        assert_eq!(map.tile_count(), 2);
    }

    #[test]
    fn test_layout_respects_origin() {
        let map = TileMap::from_layout(
            GridBounds::new(GridCell::new(-1, -1), 2, 1),
            &layout(&[".#"]),
            CellGeometry::default(),
        );
        assert!(map.has_tile(GridCell::new(0, -1)));
        assert!(!map.has_tile(GridCell::new(-1, -1)));
    }

    #[test]
    fn test_out_of_bounds_has_no_tile() {
        let map = TileMap::open(GridBounds::sized(2, 2), CellGeometry::default());
        assert!(map.has_tile(GridCell::new(1, 1)));
        assert!(!map.has_tile(GridCell::new(2, 0)));
        assert!(!map.has_tile(GridCell::new(0, -1)));
    }

    #[test]
    fn test_from_level_uses_cell_size() {
        let level = LevelConfig {
            cell_size: 4.0,
            ..Default::default()
        };
        let map = TileMap::from_level(&level);
        assert_eq!(map.geometry().cell_size, 4.0);
        assert_eq!(map.tile_count(), level.bounds.cell_count());
    }

    #[test]
    fn test_from_level_places_world_origin() {
        let level = LevelConfig {
            cell_size: 2.0,
            world_origin: Vec2::new(10.0, -2.0),
            ..Default::default()
        };
        let topology = GridTopology::with_map(TileMap::from_level(&level));
        assert_eq!(topology.cell_to_world(GridCell::new(0, 0)), Vec2::new(11.0, -1.0));
        assert_eq!(topology.cell_to_world(GridCell::new(2, 1)), Vec2::new(15.0, 1.0));
    }

    // ---- Topology ----

    #[test]
    fn test_unloaded_topology_rejects_everything() {
        let topology = GridTopology::new();
        assert!(!topology.is_loaded());
        assert!(!topology.is_valid_cell(GridCell::new(0, 0)));
        assert_eq!(
            topology.next_step(GridCell::new(0, 0), GridCell::new(5, 5)),
            GridCell::new(0, 0)
        );
    }

    #[test]
    fn test_next_step_moves_toward_target() {
        let topology = open_topology(5, 5);
        let step = topology.next_step(GridCell::new(0, 0), GridCell::new(4, 0));
        assert_eq!(step, GridCell::new(1, 0));
        let step = topology.next_step(GridCell::new(2, 2), GridCell::new(2, 0));
        assert_eq!(step, GridCell::new(2, 1));
    }

    #[test]
    fn test_next_step_tie_prefers_up_then_down_then_left() {
        let topology = open_topology(5, 5);
        // Target diagonal up-right: up and right are equally close, up wins.
        let step = topology.next_step(GridCell::new(2, 2), GridCell::new(3, 3));
        assert_eq!(step, GridCell::new(2, 3));
        // Target diagonal down-left: down and left tie, down wins.
        let step = topology.next_step(GridCell::new(2, 2), GridCell::new(1, 1));
        assert_eq!(step, GridCell::new(2, 1));
    }

    #[test]
    fn test_next_step_at_target_still_moves() {
        // Every neighbor is one away; the first valid one (up) is picked.
        let topology = open_topology(3, 3);
        let step = topology.next_step(GridCell::new(1, 1), GridCell::new(1, 1));
        assert_eq!(step, GridCell::new(1, 2));
    }

    #[test]
    fn test_next_step_skips_missing_tiles() {
        let map = TileMap::from_layout(
            GridBounds::sized(3, 3),
            &layout(&["###", "#.#", "###"]),
            CellGeometry::default(),
        );
        let topology = GridTopology::with_map(map);
        // Straight line through the hole is blocked; must go around.
        let step = topology.next_step(GridCell::new(1, 0), GridCell::new(1, 2));
        assert_ne!(step, GridCell::new(1, 1));
        assert!(topology.is_valid_cell(step));
    }

    #[test]
    fn test_isolated_cell_stalls() {
        let map = TileMap::from_layout(
            GridBounds::sized(3, 3),
            &layout(&["...", ".#.", "..."]),
            CellGeometry::default(),
        );
        let topology = GridTopology::with_map(map);
        let here = GridCell::new(1, 1);
        assert_eq!(topology.next_step(here, GridCell::new(0, 0)), here);
    }

    #[test]
    fn test_unload_clears_map() {
        let mut topology = open_topology(2, 2);
        assert!(topology.is_valid_cell(GridCell::new(0, 0)));
        topology.unload();
        assert!(!topology.is_valid_cell(GridCell::new(0, 0)));
        assert!(topology.bounds().is_none());
    }

    #[test]
    fn test_removed_tile_forces_detour() {
        let mut map = TileMap::open(GridBounds::sized(3, 1), CellGeometry::default());
        map.set_tile(GridCell::new(1, 0), false);
        map.set_tile(GridCell::new(9, 9), false);
        assert_eq!(map.tile_count(), 2);

        let topology = GridTopology::with_map(map);
        let start = GridCell::new(0, 0);
        assert_eq!(topology.next_step(start, GridCell::new(2, 0)), start);
    }
}
