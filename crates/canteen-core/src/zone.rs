//! Static zone tag carried by every grid cell.

use std::fmt;

/// Semantic role of a grid cell, fixed when the grid is built.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Zone {
    /// Open floor.
    #[default]
    None,
    Boundary,
    DiningArea,
    Exit,
    Store,
    BigTable,
    CashierQueue,
}

impl Zone {
    /// `false` for zones customers may never step onto.
    #[inline]
    pub fn is_passable(self) -> bool {
        !matches!(self, Zone::Boundary | Zone::Store | Zone::BigTable)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Zone::None         => "none",
            Zone::Boundary     => "boundary",
            Zone::DiningArea   => "dining_area",
            Zone::Exit         => "exit",
            Zone::Store        => "store",
            Zone::BigTable     => "big_table",
            Zone::CashierQueue => "cashier_queue",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
