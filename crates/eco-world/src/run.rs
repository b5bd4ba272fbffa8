//! Lazy multi-step runs over a river.

use crate::census::Census;
use crate::random::RandomSource;
use crate::river::River;
use eco_core::Cell;
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;
use tracing::info;

/// Read-only copy of the river at one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub cells: Vec<Cell>,
}

impl Snapshot {
    pub fn census(&self) -> Census {
        Census::of(&self.cells)
    }
}

impl<R: RandomSource> River<R> {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick(),
            cells: self.cells().to_vec(),
        }
    }

    /// Lazily run `steps` transitions.
    ///
    /// The iterator yields the current state first and then one snapshot per
    /// step, `steps + 1` items in total. Steps are only taken as the iterator
    /// is advanced.
    pub fn run(&mut self, steps: u64) -> Run<'_, R> {
        info!(steps, size = self.len(), start_tick = self.tick(), "Starting run");
        Run {
            river: self,
            remaining: steps,
            started: false,
        }
    }
}

/// Iterator returned by [`River::run`]
pub struct Run<'a, R> {
    river: &'a mut River<R>,
    remaining: u64,
    started: bool,
}

impl<R: RandomSource> Iterator for Run<'_, R> {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        if !self.started {
            self.started = true;
            return Some(self.river.snapshot());
        }

        if self.remaining == 0 {
            return None;
        }

        self.river.step();
        self.remaining -= 1;

        if self.remaining == 0 {
            let census = self.river.census();
            info!(
                tick = self.river.tick(),
                predators = census.predators,
                prey = census.prey,
                "Run complete"
            );
        }

        Some(self.river.snapshot())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = u64::from(!self.started).saturating_add(self.remaining);
        match usize::try_from(pending) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<R: RandomSource> FusedIterator for Run<'_, R> {}
