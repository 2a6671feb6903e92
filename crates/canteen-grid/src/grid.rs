//! The `Grid`: fixed-size cell map with zone tags and customer occupancy.
//!
//! Cells are stored row-major in flat `Vec`s indexed by `y * width + x`.
//! Each cell carries:
//!
//! - a [`Zone`] tag, written once in [`Grid::new`] and never changed;
//! - an optional static fixture id (the inert entity representing the zone
//!   in the scheduler);
//! - any number of customer ids (multi-occupancy).
//!
//! Only customers count toward emptiness.  Passability is purely a function
//! of the zone tag and the bounds.

use canteen_core::{EntityId, MOORE_OFFSETS, Position, Zone};
use log::debug;

use crate::{GridError, GridResult, ZoneLayout};

pub struct Grid {
    width:     i32,
    height:    i32,
    zones:     Vec<Zone>,
    fixtures:  Vec<Option<EntityId>>,
    occupants: Vec<Vec<EntityId>>,
    layout:    ZoneLayout,
    customers: usize,
}

impl Grid {
    /// Build a grid and stamp `layout` onto it.
    ///
    /// Fails if a dimension is not positive, a zone cell or entry cell lies
    /// outside the grid, two zone lists claim the same cell, the entry column
    /// crosses an impassable cell, or the layout has no exits.
    pub fn new(width: i32, height: i32, layout: ZoneLayout) -> GridResult<Grid> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let cell_count = (width as usize) * (height as usize);
        let mut zones = vec![Zone::None; cell_count];

        for (zone, cells) in layout.zones() {
            for &pos in cells {
                if !in_bounds(width, height, pos) {
                    return Err(GridError::OutOfBounds { zone, pos });
                }
                let slot = &mut zones[(pos.y * width + pos.x) as usize];
                if *slot != Zone::None {
                    return Err(GridError::ZoneOverlap { pos, first: *slot, second: zone });
                }
                *slot = zone;
            }
        }

        if layout.exits().is_empty() {
            return Err(GridError::EmptyZone(Zone::Exit));
        }
        let (first_row, last_row) = layout.entry_rows();
        if first_row > last_row {
            return Err(GridError::EntryNotPassable(Position::new(layout.entry_column(), first_row)));
        }
        for pos in layout.entry_cells() {
            let passable = in_bounds(width, height, pos)
                && zones[(pos.y * width + pos.x) as usize].is_passable();
            if !passable {
                return Err(GridError::EntryNotPassable(pos));
            }
        }

        debug!(
            "built {width}x{height} grid with {} tagged cells ({} queues, {} seats, {} exits)",
            layout.tagged_cell_count(),
            layout.cashier_queues().len(),
            layout.dining_areas().len(),
            layout.exits().len(),
        );

        Ok(Grid {
            width,
            height,
            zones,
            fixtures: vec![None; cell_count],
            occupants: vec![Vec::new(); cell_count],
            layout,
            customers: 0,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The static layout this grid was built from.
    #[inline]
    pub fn layout(&self) -> &ZoneLayout {
        &self.layout
    }

    /// Number of customers currently placed.
    #[inline]
    pub fn customer_count(&self) -> usize {
        self.customers
    }

    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        in_bounds(self.width, self.height, pos)
    }

    /// Zone tag at `pos`, `None` if out of bounds.
    #[inline]
    pub fn zone_at(&self, pos: Position) -> Option<Zone> {
        self.index(pos).map(|i| self.zones[i])
    }

    /// `false` for boundary/store/big-table cells and anything out of bounds.
    #[inline]
    pub fn is_passable(&self, pos: Position) -> bool {
        self.zone_at(pos).is_some_and(Zone::is_passable)
    }

    /// `true` if no customer occupies `pos`.  Out-of-bounds cells are
    /// reported as not empty so they are never offered as destinations.
    #[inline]
    pub fn is_cell_empty(&self, pos: Position) -> bool {
        self.index(pos).is_some_and(|i| self.occupants[i].is_empty())
    }

    /// Customers currently at `pos` (empty slice if out of bounds).
    pub fn occupants(&self, pos: Position) -> &[EntityId] {
        match self.index(pos) {
            Some(i) => &self.occupants[i],
            None    => &[],
        }
    }

    /// The static fixture registered on `pos`, if any.
    pub fn fixture_at(&self, pos: Position) -> Option<EntityId> {
        self.index(pos).and_then(|i| self.fixtures[i])
    }

    /// In-bounds Moore neighbours of `pos` (center excluded).
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        MOORE_OFFSETS
            .iter()
            .map(move |&(dx, dy)| pos.offset(dx, dy))
            .filter(move |&p| self.in_bounds(p))
    }

    /// Row-major iterator over `(position, zone, customers)` for every cell.
    ///
    /// This is the read-only occupancy view external renderers consume.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Zone, &[EntityId])> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| {
                let i = (y * self.width + x) as usize;
                (Position::new(x, y), self.zones[i], self.occupants[i].as_slice())
            })
        })
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Record the static fixture entity that represents the zone at `pos`.
    pub fn attach_fixture(&mut self, pos: Position, fixture: EntityId) -> GridResult<()> {
        let i = self.index(pos).ok_or(GridError::OutOfBounds {
            zone: Zone::None,
            pos,
        })?;
        self.fixtures[i] = Some(fixture);
        Ok(())
    }

    /// Put a new customer on `pos`.  Impassable or out-of-bounds cells are
    /// rejected.
    pub fn place_customer(&mut self, customer: EntityId, pos: Position) -> GridResult<()> {
        if !self.is_passable(pos) {
            return Err(GridError::NotPassable(pos));
        }
        let i = self.cell_index(pos);
        self.occupants[i].push(customer);
        self.customers += 1;
        Ok(())
    }

    /// Relocate `customer` from `from` to `to`.
    ///
    /// A no-op returning `false` if `to` is impassable or `customer` is not
    /// at `from`.
    pub fn move_customer(&mut self, customer: EntityId, from: Position, to: Position) -> bool {
        if !self.is_passable(to) || !self.detach(customer, from) {
            return false;
        }
        let i = self.cell_index(to);
        self.occupants[i].push(customer);
        true
    }

    /// Take `customer` off the grid.  Returns `false` if it was not at `pos`.
    pub fn remove_customer(&mut self, customer: EntityId, pos: Position) -> bool {
        let removed = self.detach(customer, pos);
        if removed {
            self.customers -= 1;
        }
        removed
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn detach(&mut self, customer: EntityId, pos: Position) -> bool {
        let Some(i) = self.index(pos) else {
            return false;
        };
        let cell = &mut self.occupants[i];
        match cell.iter().position(|&c| c == customer) {
            Some(slot) => {
                cell.swap_remove(slot);
                true
            }
            None => false,
        }
    }

    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos).then(|| self.cell_index(pos))
    }

    /// Caller guarantees `pos` is in bounds.
    #[inline]
    fn cell_index(&self, pos: Position) -> usize {
        (pos.y * self.width + pos.x) as usize
    }
}

#[inline]
fn in_bounds(width: i32, height: i32, pos: Position) -> bool {
    pos.x >= 0 && pos.y >= 0 && pos.x < width && pos.y < height
}
