//! Strongly typed entity identifier.
//!
//! Every schedulable thing in a run (customers and static zone fixtures)
//! gets an `EntityId` from a single monotonically increasing counter, so ids
//! are unique for the lifetime of a run and never reused after removal.

use std::fmt;

/// Identifier of a customer or static fixture.  Max ~4.3 billion per run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// The id following `self`, used by the store's id allocator.
    #[inline(always)]
    pub fn next(self) -> EntityId {
        EntityId(self.0 + 1)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl From<EntityId> for u64 {
    #[inline(always)]
    fn from(id: EntityId) -> u64 {
        id.0 as u64
    }
}
