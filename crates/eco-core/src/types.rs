//! Core type definitions for the simulation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two competing species living in the river
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    /// Dominant species; wins every cross-species collision
    Predator,
    /// Eaten when it collides with a predator
    Prey,
}

impl Species {
    /// Whether `self` wins a collision against `other`.
    ///
    /// Only the predator/prey pairing dominates. Two members of the same
    /// species never dominate each other.
    pub fn dominates(self, other: Species) -> bool {
        matches!((self, other), (Species::Predator, Species::Prey))
    }

    pub fn all() -> [Species; 2] {
        [Species::Predator, Species::Prey]
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Species::Predator => write!(f, "predator"),
            Species::Prey => write!(f, "prey"),
        }
    }
}

/// An occupant of a river cell.
///
/// Entities carry no identity or internal state beyond their species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    pub species: Species,
}

impl Entity {
    pub fn new(species: Species) -> Self {
        Self { species }
    }

    pub fn same_species(&self, other: &Entity) -> bool {
        self.species == other.species
    }

    pub fn dominates(&self, other: &Entity) -> bool {
        self.species.dominates(other.species)
    }
}

/// Create a fresh offspring of the given species
pub fn spawn(species: Species) -> Entity {
    Entity::new(species)
}

/// One slot of the river: empty or holding exactly one entity
pub type Cell = Option<Entity>;
