//! Population counts over a river state.

use eco_core::{Cell, Species};
use serde::{Deserialize, Serialize};

/// Occupancy breakdown of a cell sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    pub predators: usize,
    pub prey: usize,
    pub empty: usize,
}

impl Census {
    pub fn of(cells: &[Cell]) -> Self {
        cells.iter().fold(Self::default(), |mut census, cell| {
            match cell.map(|entity| entity.species) {
                Some(Species::Predator) => census.predators += 1,
                Some(Species::Prey) => census.prey += 1,
                None => census.empty += 1,
            }
            census
        })
    }

    /// Number of non-empty cells
    pub fn occupied(&self) -> usize {
        self.predators + self.prey
    }

    pub fn total(&self) -> usize {
        self.occupied() + self.empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eco_core::spawn;

    #[test]
    fn test_census_counts() {
        let cells = vec![
            Some(spawn(Species::Predator)),
            None,
            Some(spawn(Species::Prey)),
            Some(spawn(Species::Prey)),
        ];
        let census = Census::of(&cells);
        assert_eq!(census.predators, 1);
        assert_eq!(census.prey, 2);
        assert_eq!(census.empty, 1);
        assert_eq!(census.occupied(), 3);
        assert_eq!(census.total(), 4);
    }

    #[test]
    fn test_empty_river() {
        assert_eq!(Census::of(&[]), Census::default());
    }
}
