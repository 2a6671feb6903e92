//! The tagged `Entity` type shared by customers and static fixtures.

use canteen_core::{EntityId, Position, Zone};

use crate::Customer;

/// An inert stand-in for one zone cell.  Registered with the scheduler so
/// that "all agents" enumerations see zones and customers uniformly.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fixture {
    pub id:       EntityId,
    pub position: Position,
    pub zone:     Zone,
}

/// Discriminant of [`Entity`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EntityKind {
    Customer,
    Fixture(Zone),
}

/// Anything the scheduler activates.
#[derive(Debug)]
pub enum Entity {
    Customer(Customer),
    Fixture(Fixture),
}

impl Entity {
    #[inline]
    pub fn id(&self) -> EntityId {
        match self {
            Entity::Customer(c) => c.id,
            Entity::Fixture(f)  => f.id,
        }
    }

    #[inline]
    pub fn position(&self) -> Position {
        match self {
            Entity::Customer(c) => c.position,
            Entity::Fixture(f)  => f.position,
        }
    }

    #[inline]
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Customer(_) => EntityKind::Customer,
            Entity::Fixture(f)  => EntityKind::Fixture(f.zone),
        }
    }

    #[inline]
    pub fn as_customer(&self) -> Option<&Customer> {
        match self {
            Entity::Customer(c) => Some(c),
            Entity::Fixture(_)  => None,
        }
    }

    #[inline]
    pub fn as_customer_mut(&mut self) -> Option<&mut Customer> {
        match self {
            Entity::Customer(c) => Some(c),
            Entity::Fixture(_)  => None,
        }
    }
}
