//! Static zone layout.
//!
//! A `ZoneLayout` is an immutable value: it is assembled once with
//! [`ZoneLayoutBuilder`] (or taken from [`ZoneLayout::cafeteria`]), handed to
//! [`Grid::new`][crate::Grid::new] for validation, and from then on only read.
//! No method hands out mutable access to the coordinate lists.
//!
//! The order of cells within each list is significant: the allocator breaks
//! distance ties by iteration order.

use canteen_core::{Position, Zone};

/// Width of the default cafeteria floor plan.
pub const CAFETERIA_WIDTH: i32 = 44;
/// Height of the default cafeteria floor plan.
pub const CAFETERIA_HEIGHT: i32 = 24;

/// Every zone kind a layout can hold, in the order fixtures are registered.
const ZONE_ORDER: [Zone; 6] = [
    Zone::Boundary,
    Zone::DiningArea,
    Zone::Exit,
    Zone::Store,
    Zone::BigTable,
    Zone::CashierQueue,
];

/// Coordinates of every static zone plus the customer entry column.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneLayout {
    boundaries:     Vec<Position>,
    dining_areas:   Vec<Position>,
    exits:          Vec<Position>,
    store:          Vec<Position>,
    big_tables:     Vec<Position>,
    cashier_queues: Vec<Position>,
    entry_column:   i32,
    /// Inclusive row range new customers are spawned in.
    entry_rows:     (i32, i32),
}

impl ZoneLayout {
    /// Cells tagged `zone`.  `Zone::None` has no explicit cells.
    pub fn cells(&self, zone: Zone) -> &[Position] {
        match zone {
            Zone::None         => &[],
            Zone::Boundary     => &self.boundaries,
            Zone::DiningArea   => &self.dining_areas,
            Zone::Exit         => &self.exits,
            Zone::Store        => &self.store,
            Zone::BigTable     => &self.big_tables,
            Zone::CashierQueue => &self.cashier_queues,
        }
    }

    /// Iterate `(zone, cells)` for every tagged zone kind.
    pub fn zones(&self) -> impl Iterator<Item = (Zone, &[Position])> + '_ {
        ZONE_ORDER.iter().map(move |&z| (z, self.cells(z)))
    }

    #[inline]
    pub fn dining_areas(&self) -> &[Position] {
        &self.dining_areas
    }

    #[inline]
    pub fn cashier_queues(&self) -> &[Position] {
        &self.cashier_queues
    }

    #[inline]
    pub fn exits(&self) -> &[Position] {
        &self.exits
    }

    #[inline]
    pub fn entry_column(&self) -> i32 {
        self.entry_column
    }

    /// Inclusive `(first_row, last_row)` of the entry column.
    #[inline]
    pub fn entry_rows(&self) -> (i32, i32) {
        self.entry_rows
    }

    /// All cells customers may be spawned on.
    pub fn entry_cells(&self) -> impl Iterator<Item = Position> + '_ {
        let (lo, hi) = self.entry_rows;
        (lo..=hi).map(move |y| Position::new(self.entry_column, y))
    }

    /// Total number of tagged cells across all zones.
    pub fn tagged_cell_count(&self) -> usize {
        self.zones().map(|(_, cells)| cells.len()).sum()
    }

    /// The 44×24 cafeteria floor plan: a walled west side, 24 cashier queue
    /// cells in front of the serving counter, four rows of paired seats,
    /// four big tables ringed by seats, and an exit column on the east wall.
    ///
    /// Customers enter on column 41 anywhere between the top and bottom
    /// walls.
    pub fn cafeteria() -> ZoneLayout {
        let w = CAFETERIA_WIDTH;
        let h = CAFETERIA_HEIGHT;

        let boundaries = (0..w)
            .map(|x| Position::new(x, 0))
            .chain((0..w).map(|x| Position::new(x, h - 1)))
            // Corners are already covered by the two rows.
            .chain((1..h - 1).map(|y| Position::new(0, y)));

        // Queue order is interleaved by counter position; the nearest-queue
        // tie-break depends on it.
        let queues = (0..4).flat_map(|offset| (0..6).map(move |k| Position::new(2 + offset + 4 * k, 19)));

        let store = (20..=22).flat_map(|y| (2..=25).map(move |x| Position::new(x, y)));

        let mut dining = Vec::new();
        for y in [14, 15, 10, 11] {
            dining.extend((1..=11).map(|i| Position::new(3 * i, y)));
            dining.extend((1..=11).map(|i| Position::new(3 * i + 1, y)));
        }
        dining.extend(
            [
                (33, 2), (33, 3), (34, 2), (34, 3),
                (33, 5), (33, 6), (34, 5), (34, 6),
                (33, 20), (34, 20), (33, 21), (34, 21),
                (31, 20), (30, 20), (31, 21), (30, 21),
            ]
            .into_iter()
            .map(Position::from),
        );

        let mut big_tables = Vec::new();
        for left in [6, 13, 20, 27] {
            // Seats ring a 2×2 table whose top-left corner is (left+1, 4).
            dining.extend((3..=6).map(|y| Position::new(left, y)));
            dining.extend([(left + 1, 3), (left + 1, 6), (left + 2, 3), (left + 2, 6)].map(Position::from));
            dining.extend((3..=6).map(|y| Position::new(left + 3, y)));
            big_tables.extend(
                [(left + 1, 4), (left + 1, 5), (left + 2, 4), (left + 2, 5)].map(Position::from),
            );
        }

        ZoneLayoutBuilder::new()
            .zone(Zone::Boundary, boundaries)
            .zone(Zone::DiningArea, dining)
            .zone(Zone::Exit, (1..h - 1).map(|y| Position::new(w - 1, y)))
            .zone(Zone::Store, store)
            .zone(Zone::BigTable, big_tables)
            .zone(Zone::CashierQueue, queues)
            .entry(w - 3, 1, h - 2)
            .build()
    }
}

// ── ZoneLayoutBuilder ─────────────────────────────────────────────────────────

/// Incremental builder for a [`ZoneLayout`].
///
/// The builder does not validate against grid dimensions; that happens in
/// [`Grid::new`][crate::Grid::new], which knows the width and height.
///
/// ```rust
/// use canteen_core::{Position, Zone};
/// use canteen_grid::ZoneLayoutBuilder;
///
/// let layout = ZoneLayoutBuilder::new()
///     .zone(Zone::CashierQueue, [Position::new(1, 1)])
///     .zone(Zone::Exit, [Position::new(4, 2)])
///     .entry(3, 0, 3)
///     .build();
/// assert_eq!(layout.cashier_queues().len(), 1);
/// ```
#[derive(Default)]
pub struct ZoneLayoutBuilder {
    layout: ZoneLayout,
}

impl ZoneLayoutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `cells` to the list for `zone`.  `Zone::None` is ignored.
    pub fn zone<I>(mut self, zone: Zone, cells: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let target = match zone {
            Zone::None         => return self,
            Zone::Boundary     => &mut self.layout.boundaries,
            Zone::DiningArea   => &mut self.layout.dining_areas,
            Zone::Exit         => &mut self.layout.exits,
            Zone::Store        => &mut self.layout.store,
            Zone::BigTable     => &mut self.layout.big_tables,
            Zone::CashierQueue => &mut self.layout.cashier_queues,
        };
        target.extend(cells);
        self
    }

    /// Spawn customers on `column`, rows `first_row..=last_row`.
    pub fn entry(mut self, column: i32, first_row: i32, last_row: i32) -> Self {
        self.layout.entry_column = column;
        self.layout.entry_rows = (first_row, last_row);
        self
    }

    pub fn build(self) -> ZoneLayout {
        self.layout
    }
}
