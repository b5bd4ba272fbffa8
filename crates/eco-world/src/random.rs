//! The draws the engine consumes from its random source.

use rand::Rng;

/// Source of every random decision the river makes.
///
/// The engine owns its source and consumes it in a fixed order, so a seeded
/// generator (or a scripted one in tests) fully determines a run.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`, one per cell at construction
    fn unit(&mut self) -> f64;

    /// Movement offset in `{-1, 0, +1}`, one per occupied cell per step
    fn offset(&mut self) -> isize;

    /// Uniform index in `[0, bound)`, one per birth event. `bound` is never zero.
    fn index(&mut self, bound: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn offset(&mut self) -> isize {
        self.gen_range(-1..=1)
    }

    fn index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}
