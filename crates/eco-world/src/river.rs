//! The river state machine.

use crate::census::Census;
use crate::random::RandomSource;
use eco_core::{spawn, validate_params, Cell, Entity, Result, RiverConfig, Species};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

/// A fixed-length, one-dimensional river of cells.
///
/// Each [`River::step`] builds a complete next state from the current one
/// and then swaps it in, so every entity moves against the same snapshot.
pub struct River<R = ChaCha8Rng> {
    cells: Vec<Cell>,
    rng: R,
    tick: u64,
}

/// Event counts for a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    /// Tick number reached by this step
    pub tick: u64,
    /// Entities whose target differed from their source cell
    pub moved: usize,
    /// Offspring placed after same-species collisions
    pub births: usize,
    /// Offspring dropped because the next state had no empty cell
    pub discarded_births: usize,
    /// Cross-species collisions (the dominated entity is eaten)
    pub predations: usize,
}

impl River<ChaCha8Rng> {
    /// Create a river seeded from configuration
    pub fn from_config(config: &RiverConfig) -> Result<Self> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::new(config.size, config.fill_probability, rng)
    }
}

impl<R: RandomSource> River<R> {
    /// Populate a river of `size` cells.
    ///
    /// Each cell draws one uniform value `r`: below `fill_probability / 2` it
    /// holds a predator, below `fill_probability` a prey, otherwise nothing.
    pub fn new(size: usize, fill_probability: f64, mut rng: R) -> Result<Self> {
        validate_params(size, fill_probability)?;

        let cells = (0..size)
            .map(|_| initial_cell(rng.unit(), fill_probability))
            .collect();
        let river = Self::from_cells(cells, rng);

        let census = river.census();
        info!(
            size,
            fill_probability,
            predators = census.predators,
            prey = census.prey,
            "River populated"
        );

        Ok(river)
    }

    /// Create a river from an explicit layout
    pub fn from_cells(cells: Vec<Cell>, rng: R) -> Self {
        Self {
            cells,
            rng,
            tick: 0,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of completed steps
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn census(&self) -> Census {
        Census::of(&self.cells)
    }

    /// Advance the river by one step.
    ///
    /// Sources are visited in ascending index order, so when two entities
    /// target the same cell the lower source index is the one already there.
    pub fn step(&mut self) -> StepReport {
        let size = self.cells.len();
        let mut next: Vec<Cell> = vec![None; size];
        let mut report = StepReport {
            tick: self.tick + 1,
            ..Default::default()
        };

        for (source, cell) in self.cells.iter().enumerate() {
            let Some(entity) = *cell else {
                continue;
            };

            let target = clamp_target(source, self.rng.offset(), size);
            if target != source {
                report.moved += 1;
            }

            match next[target] {
                None => next[target] = Some(entity),
                Some(existing) if existing.same_species(&entity) => {
                    // The first arrival keeps the cell; the pair yields one offspring.
                    if place_offspring(&mut next, spawn(existing.species), &mut self.rng) {
                        report.births += 1;
                    } else {
                        report.discarded_births += 1;
                    }
                    trace!(
                        source,
                        target,
                        species = %existing.species,
                        "Same-species collision"
                    );
                }
                Some(existing) => {
                    let winner = resolve_predation(existing, entity);
                    next[target] = Some(winner);
                    report.predations += 1;
                    trace!(source, target, winner = %winner.species, "Predation");
                }
            }
        }

        self.cells = next;
        self.tick += 1;

        let census = self.census();
        debug!(
            tick = self.tick,
            moved = report.moved,
            births = report.births,
            discarded_births = report.discarded_births,
            predations = report.predations,
            predators = census.predators,
            prey = census.prey,
            "Step complete"
        );

        report
    }
}

fn initial_cell(roll: f64, fill_probability: f64) -> Cell {
    if roll < fill_probability / 2.0 {
        Some(spawn(Species::Predator))
    } else if roll < fill_probability {
        Some(spawn(Species::Prey))
    } else {
        None
    }
}

/// Movement never wraps; the ends of the river hold entities in place.
fn clamp_target(source: usize, offset: isize, size: usize) -> usize {
    let last = size as isize - 1;
    (source as isize + offset).clamp(0, last) as usize
}

fn resolve_predation(existing: Entity, incoming: Entity) -> Entity {
    if existing.dominates(&incoming) {
        existing
    } else if incoming.dominates(&existing) {
        incoming
    } else {
        unreachable!(
            "no dominance between {} and {}",
            existing.species, incoming.species
        )
    }
}

/// Place `offspring` in the first empty cell found scanning circularly from
/// a random start. Returns `false` when the buffer is full.
fn place_offspring<R: RandomSource + ?Sized>(
    next: &mut [Cell],
    offspring: Entity,
    rng: &mut R,
) -> bool {
    let size = next.len();
    let start = rng.index(size);

    for i in 0..size {
        let index = (start + i) % size;
        if next[index].is_none() {
            next[index] = Some(offspring);
            return true;
        }
    }

    false
}
