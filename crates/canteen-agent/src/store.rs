//! `EntityStore`: the set of live entities the scheduler activates.
//!
//! Entities live in a dense `Vec` so activation order can be produced by
//! shuffling a plain id list.  Removal is `swap_remove` plus an index fix-up,
//! so ids stay valid handles while slots move.
//!
//! Ids come from one counter shared by fixtures and customers and are never
//! reused.  The store also keeps the lifetime `spawned`/`removed` customer
//! counters the conservation check is built on:
//!
//! ```text
//! live customers == customers_spawned - customers_removed
//! ```

use rustc_hash::FxHashMap;

use canteen_core::{EntityId, Position, Zone};

use crate::{Customer, CustomerState, Entity, Fixture, StateCounts};

#[derive(Default)]
pub struct EntityStore {
    entities:          Vec<Entity>,
    index:             FxHashMap<EntityId, usize>,
    next_id:           u32,
    live_customers:    usize,
    customers_spawned: u64,
    customers_removed: u64,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next unused id.
    pub fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Register a static fixture for `zone` at `position` and return its id.
    pub fn add_fixture(&mut self, position: Position, zone: Zone) -> EntityId {
        let id = self.allocate_id();
        self.insert(Entity::Fixture(Fixture { id, position, zone }));
        id
    }

    /// Register a customer whose id came from [`allocate_id`](Self::allocate_id).
    pub fn add_customer(&mut self, customer: Customer) {
        self.live_customers += 1;
        self.customers_spawned += 1;
        self.insert(Entity::Customer(customer));
    }

    /// Remove an entity, returning it.  Removing a customer bumps the
    /// `customers_removed` counter.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let slot = self.index.remove(&id)?;
        let entity = self.entities.swap_remove(slot);
        if let Some(moved) = self.entities.get(slot) {
            self.index.insert(moved.id(), slot);
        }
        if matches!(entity, Entity::Customer(_)) {
            self.live_customers -= 1;
            self.customers_removed += 1;
        }
        Some(entity)
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.index.get(&id).map(|&i| &self.entities[i])
    }

    #[inline]
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.index.get(&id).map(|&i| &mut self.entities[i])
    }

    #[inline]
    pub fn customer(&self, id: EntityId) -> Option<&Customer> {
        self.get(id).and_then(Entity::as_customer)
    }

    #[inline]
    pub fn contains(&self, id: EntityId) -> bool {
        self.index.contains_key(&id)
    }

    /// Ids of every live entity in storage order.
    pub fn ids(&self) -> Vec<EntityId> {
        self.entities.iter().map(Entity::id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.entities.iter()
    }

    pub fn customers(&self) -> impl Iterator<Item = &Customer> + '_ {
        self.entities.iter().filter_map(Entity::as_customer)
    }

    pub fn fixtures(&self) -> impl Iterator<Item = &Fixture> + '_ {
        self.entities.iter().filter_map(|e| match e {
            Entity::Fixture(f)  => Some(f),
            Entity::Customer(_) => None,
        })
    }

    // ── Counters ──────────────────────────────────────────────────────────

    /// Number of live entities of either kind.
    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    #[inline]
    pub fn live_customers(&self) -> usize {
        self.live_customers
    }

    #[inline]
    pub fn customers_spawned(&self) -> u64 {
        self.customers_spawned
    }

    #[inline]
    pub fn customers_removed(&self) -> u64 {
        self.customers_removed
    }

    /// Live customers per lifecycle state.
    pub fn count_by_state(&self) -> StateCounts {
        StateCounts::tally(self.customers().map(Customer::state))
    }

    /// Live customers currently in `state`.
    pub fn count_in_state(&self, state: CustomerState) -> usize {
        self.customers().filter(|c| c.state() == state).count()
    }

    fn insert(&mut self, entity: Entity) {
        let id = entity.id();
        debug_assert!(!self.index.contains_key(&id), "{id} registered twice");
        self.index.insert(id, self.entities.len());
        self.entities.push(entity);
    }
}
