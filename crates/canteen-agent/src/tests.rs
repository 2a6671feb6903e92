//! Unit tests for canteen-agent.

use canteen_core::{EntityId, Position, Zone};

use crate::{Customer, CustomerState, Entity, EntityKind, EntityStore, StateCounts};

fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

#[cfg(test)]
mod state_tests {
    use super::*;

    #[test]
    fn lifecycle_ordering() {
        assert!(CustomerState::Entering < CustomerState::Queuing);
        assert!(CustomerState::Queuing < CustomerState::Ordering);
        assert!(CustomerState::Ordering < CustomerState::Eating);
        assert!(CustomerState::Eating < CustomerState::Exiting);
    }

    #[test]
    fn all_matches_index() {
        for (i, s) in CustomerState::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
    }

    #[test]
    fn names() {
        let names: Vec<_> = CustomerState::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, ["entering", "queuing", "ordering", "eating", "exiting"]);
    }

    #[test]
    fn tally_and_total() {
        let counts = StateCounts::tally([
            CustomerState::Entering,
            CustomerState::Eating,
            CustomerState::Eating,
            CustomerState::Exiting,
        ]);
        assert_eq!(counts.entering, 1);
        assert_eq!(counts.eating, 2);
        assert_eq!(counts.get(CustomerState::Exiting), 1);
        assert_eq!(counts.queuing, 0);
        assert_eq!(counts.total(), 4);
    }
}

#[cfg(test)]
mod customer_tests {
    use super::*;

    #[test]
    fn new_customer_is_entering() {
        let c = Customer::new(EntityId(3), p(41, 5), 9);
        assert_eq!(c.state(), CustomerState::Entering);
        assert_eq!(c.steps_eating, 0);
        assert_eq!(c.steps_queuing, 0);
        assert_eq!(c.position, p(41, 5));
    }

    #[test]
    fn forward_transitions_allowed() {
        let mut c = Customer::new(EntityId(0), p(1, 1), 0);
        c.transition(CustomerState::Ordering);
        c.transition(CustomerState::Eating);
        c.transition(CustomerState::Exiting);
        assert!(c.is_exiting());
    }

    #[test]
    fn early_exit_allowed() {
        let mut c = Customer::new(EntityId(0), p(1, 1), 0);
        c.transition(CustomerState::Exiting);
        assert!(c.is_exiting());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "cannot go from")]
    fn backward_transition_panics_in_debug() {
        let mut c = Customer::new(EntityId(0), p(1, 1), 0);
        c.transition(CustomerState::Exiting);
        c.transition(CustomerState::Entering);
    }
}

#[cfg(test)]
mod store_tests {
    use super::*;

    fn spawn(store: &mut EntityStore, pos: Position) -> EntityId {
        let id = store.allocate_id();
        store.add_customer(Customer::new(id, pos, 1));
        id
    }

    #[test]
    fn ids_are_unique_across_kinds() {
        let mut store = EntityStore::new();
        let f = store.add_fixture(p(0, 0), Zone::Boundary);
        let c = spawn(&mut store, p(2, 2));
        assert_ne!(f, c);
        assert_eq!(store.len(), 2);
        assert_eq!(store.live_customers(), 1);
    }

    #[test]
    fn kinds_are_tagged() {
        let mut store = EntityStore::new();
        let f = store.add_fixture(p(0, 0), Zone::Store);
        let c = spawn(&mut store, p(2, 2));
        assert_eq!(store.get(f).unwrap().kind(), EntityKind::Fixture(Zone::Store));
        assert_eq!(store.get(c).unwrap().kind(), EntityKind::Customer);
        assert!(store.customer(f).is_none());
        assert!(store.customer(c).is_some());
        assert_eq!(store.fixtures().count(), 1);
        assert_eq!(store.customers().count(), 1);
    }

    #[test]
    fn remove_keeps_index_consistent() {
        let mut store = EntityStore::new();
        let a = spawn(&mut store, p(1, 1));
        let b = spawn(&mut store, p(2, 2));
        let c = spawn(&mut store, p(3, 3));

        let removed = store.remove(a).unwrap();
        assert_eq!(removed.id(), a);
        assert!(!store.contains(a));
        // `c` was swapped into slot 0; both survivors still resolve.
        assert_eq!(store.get(b).unwrap().position(), p(2, 2));
        assert_eq!(store.get(c).unwrap().position(), p(3, 3));
        assert!(store.remove(a).is_none());
    }

    #[test]
    fn conservation_counters() {
        let mut store = EntityStore::new();
        store.add_fixture(p(0, 0), Zone::Exit);
        let ids: Vec<_> = (0..5).map(|i| spawn(&mut store, p(i, 1))).collect();
        store.remove(ids[1]);
        store.remove(ids[3]);
        assert_eq!(store.customers_spawned(), 5);
        assert_eq!(store.customers_removed(), 2);
        assert_eq!(store.live_customers(), 3);
        assert_eq!(
            store.count_by_state().total() as u64,
            store.customers_spawned() - store.customers_removed()
        );
    }

    #[test]
    fn removing_fixture_does_not_touch_customer_counters() {
        let mut store = EntityStore::new();
        let f = store.add_fixture(p(0, 0), Zone::Exit);
        store.remove(f);
        assert_eq!(store.customers_removed(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn count_by_state_tracks_transitions() {
        let mut store = EntityStore::new();
        let a = spawn(&mut store, p(1, 1));
        spawn(&mut store, p(2, 2));
        if let Some(Entity::Customer(c)) = store.get_mut(a) {
            c.transition(CustomerState::Eating);
        }
        let counts = store.count_by_state();
        assert_eq!(counts.entering, 1);
        assert_eq!(counts.eating, 1);
        assert_eq!(store.count_in_state(CustomerState::Eating), 1);
    }
}
