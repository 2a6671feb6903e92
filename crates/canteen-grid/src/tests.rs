//! Unit tests for canteen-grid.

use canteen_core::{EntityId, Position, Zone};

use crate::layout::{CAFETERIA_HEIGHT, CAFETERIA_WIDTH};
use crate::{Grid, ZoneLayout, ZoneLayoutBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

/// 6×4 grid:
///
/// ```text
///   y=0  B B B B B B
///   y=1  . Q Q . T X
///   y=2  . D D . S X
///   y=3  B B B B B B
/// ```
fn small_layout() -> ZoneLayout {
    ZoneLayoutBuilder::new()
        .zone(Zone::Boundary, (0..6).map(|x| p(x, 0)).chain((0..6).map(|x| p(x, 3))))
        .zone(Zone::CashierQueue, [p(1, 1), p(2, 1)])
        .zone(Zone::DiningArea, [p(1, 2), p(2, 2)])
        .zone(Zone::BigTable, [p(4, 1)])
        .zone(Zone::Store, [p(4, 2)])
        .zone(Zone::Exit, [p(5, 1), p(5, 2)])
        .entry(3, 1, 2)
        .build()
}

fn small_grid() -> Grid {
    Grid::new(6, 4, small_layout()).unwrap()
}

// ── Layout ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod layout_tests {
    use super::*;

    #[test]
    fn cafeteria_zone_counts() {
        let layout = ZoneLayout::cafeteria();
        assert_eq!(layout.cells(Zone::Boundary).len(), 44 + 44 + 22);
        assert_eq!(layout.cashier_queues().len(), 24);
        assert_eq!(layout.dining_areas().len(), 152);
        assert_eq!(layout.exits().len(), 22);
        assert_eq!(layout.cells(Zone::Store).len(), 72);
        assert_eq!(layout.cells(Zone::BigTable).len(), 16);
        assert!(layout.cells(Zone::None).is_empty());
    }

    #[test]
    fn cafeteria_queue_order_is_interleaved() {
        let layout = ZoneLayout::cafeteria();
        let xs: Vec<i32> = layout.cashier_queues().iter().take(7).map(|q| q.x).collect();
        assert_eq!(xs, [2, 6, 10, 14, 18, 22, 3]);
        assert!(layout.cashier_queues().iter().all(|q| q.y == 19));
    }

    #[test]
    fn cafeteria_entry_column_inside_walls() {
        let layout = ZoneLayout::cafeteria();
        assert_eq!(layout.entry_column(), 41);
        assert_eq!(layout.entry_rows(), (1, 22));
        assert_eq!(layout.entry_cells().count(), 22);
    }

    #[test]
    fn cafeteria_builds_on_default_grid() {
        let grid = Grid::new(CAFETERIA_WIDTH, CAFETERIA_HEIGHT, ZoneLayout::cafeteria()).unwrap();
        assert_eq!(grid.zone_at(p(7, 4)), Some(Zone::BigTable));
        assert_eq!(grid.zone_at(p(43, 10)), Some(Zone::Exit));
        assert_eq!(grid.zone_at(p(10, 21)), Some(Zone::Store));
        assert_eq!(grid.zone_at(p(0, 12)), Some(Zone::Boundary));
        assert_eq!(grid.zone_at(p(41, 12)), Some(Zone::None));
    }

    #[test]
    fn cafeteria_does_not_fit_small_grid() {
        assert!(Grid::new(30, 24, ZoneLayout::cafeteria()).is_err());
    }

    #[test]
    fn zones_iterates_every_kind() {
        let layout = small_layout();
        let total: usize = layout.zones().map(|(_, c)| c.len()).sum();
        assert_eq!(total, layout.tagged_cell_count());
        assert_eq!(total, 12 + 2 + 2 + 1 + 1 + 2);
    }
}

// ── Construction errors ───────────────────────────────────────────────────────

#[cfg(test)]
mod construction_tests {
    use super::*;
    use crate::GridError;

    #[test]
    fn zero_dimensions_rejected() {
        let err = Grid::new(0, 4, small_layout()).err().unwrap();
        assert!(matches!(err, GridError::InvalidDimensions { .. }));
        assert!(Grid::new(6, -1, small_layout()).is_err());
    }

    #[test]
    fn zone_out_of_bounds_rejected() {
        let layout = ZoneLayoutBuilder::new()
            .zone(Zone::Exit, [p(1, 1)])
            .zone(Zone::DiningArea, [p(9, 9)])
            .entry(0, 0, 0)
            .build();
        let err = Grid::new(4, 4, layout).err().unwrap();
        assert!(matches!(err, GridError::OutOfBounds { zone: Zone::DiningArea, .. }));
    }

    #[test]
    fn overlapping_zones_rejected() {
        let layout = ZoneLayoutBuilder::new()
            .zone(Zone::Exit, [p(1, 1)])
            .zone(Zone::Store, [p(1, 1)])
            .entry(0, 0, 0)
            .build();
        let err = Grid::new(4, 4, layout).err().unwrap();
        assert!(matches!(err, GridError::ZoneOverlap { first: Zone::Exit, second: Zone::Store, .. }));
    }

    #[test]
    fn missing_exits_rejected() {
        let layout = ZoneLayoutBuilder::new().entry(0, 0, 0).build();
        let err = Grid::new(4, 4, layout).err().unwrap();
        assert!(matches!(err, GridError::EmptyZone(Zone::Exit)));
    }

    #[test]
    fn entry_on_wall_rejected() {
        let layout = ZoneLayoutBuilder::new()
            .zone(Zone::Exit, [p(3, 1)])
            .zone(Zone::Boundary, [p(0, 0)])
            .entry(0, 0, 2)
            .build();
        let err = Grid::new(4, 4, layout).err().unwrap();
        assert!(matches!(err, GridError::EntryNotPassable(_)));
    }

    #[test]
    fn entry_outside_grid_rejected() {
        let layout = ZoneLayoutBuilder::new()
            .zone(Zone::Exit, [p(3, 1)])
            .entry(2, 1, 7)
            .build();
        assert!(Grid::new(4, 4, layout).is_err());
    }
}

// ── Queries and occupancy ─────────────────────────────────────────────────────

#[cfg(test)]
mod grid_tests {
    use super::*;

    #[test]
    fn passability() {
        let grid = small_grid();
        assert!(!grid.is_passable(p(0, 0)), "boundary");
        assert!(!grid.is_passable(p(4, 1)), "big table");
        assert!(!grid.is_passable(p(4, 2)), "store");
        assert!(!grid.is_passable(p(-1, 1)), "out of bounds");
        assert!(!grid.is_passable(p(6, 1)), "out of bounds");
        assert!(grid.is_passable(p(1, 1)), "queue");
        assert!(grid.is_passable(p(1, 2)), "seat");
        assert!(grid.is_passable(p(5, 1)), "exit");
        assert!(grid.is_passable(p(3, 1)), "floor");
    }

    #[test]
    fn static_zones_do_not_block_emptiness() {
        let mut grid = small_grid();
        grid.attach_fixture(p(1, 2), EntityId(100)).unwrap();
        assert!(grid.is_cell_empty(p(1, 2)));
        assert_eq!(grid.fixture_at(p(1, 2)), Some(EntityId(100)));
        assert!(grid.is_cell_empty(p(0, 0)), "walls hold no customers");
    }

    #[test]
    fn out_of_bounds_is_not_empty() {
        let grid = small_grid();
        assert!(!grid.is_cell_empty(p(-1, 0)));
        assert!(grid.occupants(p(99, 99)).is_empty());
    }

    #[test]
    fn multi_occupancy() {
        let mut grid = small_grid();
        grid.place_customer(EntityId(1), p(3, 1)).unwrap();
        grid.place_customer(EntityId(2), p(3, 1)).unwrap();
        assert_eq!(grid.occupants(p(3, 1)).len(), 2);
        assert!(!grid.is_cell_empty(p(3, 1)));
        assert_eq!(grid.customer_count(), 2);
    }

    #[test]
    fn place_on_impassable_rejected() {
        let mut grid = small_grid();
        assert!(grid.place_customer(EntityId(1), p(4, 2)).is_err());
        assert!(grid.place_customer(EntityId(1), p(10, 10)).is_err());
        assert_eq!(grid.customer_count(), 0);
    }

    #[test]
    fn move_relocates() {
        let mut grid = small_grid();
        grid.place_customer(EntityId(1), p(3, 1)).unwrap();
        assert!(grid.move_customer(EntityId(1), p(3, 1), p(2, 1)));
        assert!(grid.is_cell_empty(p(3, 1)));
        assert_eq!(grid.occupants(p(2, 1)), &[EntityId(1)]);
        assert_eq!(grid.customer_count(), 1);
    }

    #[test]
    fn move_into_impassable_is_noop() {
        let mut grid = small_grid();
        grid.place_customer(EntityId(1), p(3, 1)).unwrap();
        assert!(!grid.move_customer(EntityId(1), p(3, 1), p(4, 1)));
        assert!(!grid.move_customer(EntityId(1), p(3, 1), p(3, 0)));
        assert_eq!(grid.occupants(p(3, 1)), &[EntityId(1)]);
    }

    #[test]
    fn move_from_wrong_cell_is_noop() {
        let mut grid = small_grid();
        grid.place_customer(EntityId(1), p(3, 1)).unwrap();
        assert!(!grid.move_customer(EntityId(1), p(2, 2), p(2, 1)));
        assert!(grid.is_cell_empty(p(2, 1)));
    }

    #[test]
    fn remove_customer() {
        let mut grid = small_grid();
        grid.place_customer(EntityId(7), p(5, 1)).unwrap();
        assert!(grid.remove_customer(EntityId(7), p(5, 1)));
        assert!(!grid.remove_customer(EntityId(7), p(5, 1)));
        assert_eq!(grid.customer_count(), 0);
    }

    #[test]
    fn neighbors_filtered_to_bounds() {
        let grid = small_grid();
        assert_eq!(grid.neighbors(p(0, 0)).count(), 3);
        assert_eq!(grid.neighbors(p(2, 1)).count(), 8);
        assert_eq!(grid.neighbors(p(5, 3)).count(), 3);
        assert!(grid.neighbors(p(2, 1)).all(|n| n != p(2, 1)));
    }

    #[test]
    fn cells_view_is_row_major_and_complete() {
        let mut grid = small_grid();
        grid.place_customer(EntityId(3), p(1, 1)).unwrap();
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(cells.len(), 24);
        assert_eq!(cells[0].0, p(0, 0));
        assert_eq!(cells[7].0, p(1, 1));
        assert_eq!(cells[7].1, Zone::CashierQueue);
        assert_eq!(cells[7].2, &[EntityId(3)]);
    }
}

// ── Allocator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod allocator_tests {
    use canteen_core::AgentRng;

    use super::*;
    use crate::allocator::{manhattan_distance, nearest};
    use crate::{Allocator, SelectionPolicy};

    fn rng() -> AgentRng {
        AgentRng::new(11, EntityId(0))
    }

    #[test]
    fn manhattan() {
        assert_eq!(manhattan_distance(p(1, 1), p(4, 5)), 7);
    }

    #[test]
    fn nearest_breaks_ties_by_order() {
        let cells = [p(5, 5), p(1, 3), p(3, 1)];
        // (1,3) and (3,1) are both 2 away from (1,1); the earlier wins.
        assert_eq!(nearest(&cells, p(1, 1)), Some(p(1, 3)));
        assert_eq!(nearest(&[], p(1, 1)), None);
    }

    #[test]
    fn queue_unavailable_when_all_taken() {
        let mut grid = small_grid();
        grid.place_customer(EntityId(1), p(1, 1)).unwrap();
        grid.place_customer(EntityId(2), p(2, 1)).unwrap();
        let alloc = Allocator::new(&grid, SelectionPolicy::RandomOrNearest);
        let mut r = rng();
        for _ in 0..20 {
            assert_eq!(alloc.find_empty_queue(p(3, 2), &mut r), None);
        }
    }

    #[test]
    fn seat_never_occupied() {
        let mut grid = small_grid();
        grid.place_customer(EntityId(1), p(2, 2)).unwrap();
        let alloc = Allocator::new(&grid, SelectionPolicy::RandomOrNearest);
        let mut r = rng();
        for _ in 0..50 {
            assert_eq!(alloc.find_empty_seat(p(3, 2), &mut r), Some(p(1, 2)));
        }
    }

    #[test]
    fn nearest_policy_picks_closest_queue() {
        let grid = small_grid();
        let alloc = Allocator::new(&grid, SelectionPolicy::Nearest);
        let mut r = rng();
        assert_eq!(alloc.find_empty_queue(p(3, 1), &mut r), Some(p(2, 1)));
    }

    #[test]
    fn random_policy_covers_all_candidates() {
        let grid = small_grid();
        let alloc = Allocator::new(&grid, SelectionPolicy::Random);
        let mut r = rng();
        let picks: Vec<_> = (0..64).filter_map(|_| alloc.find_empty_queue(p(3, 1), &mut r)).collect();
        assert!(picks.contains(&p(1, 1)));
        assert!(picks.contains(&p(2, 1)));
    }

    #[test]
    fn split_policy_mixes_nearest_and_random() {
        let grid = Grid::new(CAFETERIA_WIDTH, CAFETERIA_HEIGHT, ZoneLayout::cafeteria()).unwrap();
        let from = p(41, 12);
        let closest = nearest(grid.layout().cashier_queues(), from).unwrap();
        assert_eq!(closest, p(25, 19));

        let alloc = Allocator::new(&grid, SelectionPolicy::RandomOrNearest);
        let mut r = rng();
        let picks: Vec<_> = (0..200).map(|_| alloc.find_empty_queue(from, &mut r).unwrap()).collect();
        let hits = picks.iter().filter(|&&q| q == closest).count();

        // Expected share is 1/2 + 1/48; uniform-only would give 1/24.
        assert!(hits > 60, "nearest picked only {hits}/200 times");
        assert!(hits < 160, "nearest picked {hits}/200 times");
        assert!(picks.iter().any(|&q| q != closest));
    }

    #[test]
    fn split_policy_only_returns_free_cells() {
        let grid = Grid::new(CAFETERIA_WIDTH, CAFETERIA_HEIGHT, ZoneLayout::cafeteria()).unwrap();
        let alloc = Allocator::new(&grid, SelectionPolicy::default());
        let mut r = rng();
        for _ in 0..100 {
            let seat = alloc.find_empty_seat(p(41, 12), &mut r).unwrap();
            assert_eq!(grid.zone_at(seat), Some(Zone::DiningArea));
            let queue = alloc.find_empty_queue(p(41, 12), &mut r).unwrap();
            assert_eq!(grid.zone_at(queue), Some(Zone::CashierQueue));
        }
    }
}
