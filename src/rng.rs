//! A seeded RNG threaded explicitly through the solver, never read from an
//! ambient global source, so that identical `(request, seed)` pairs produce
//! byte-identical results.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct Jitter(StdRng);

impl Jitter {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// A uniform value in `[0, 1)`, used as the scorer's tie-breaking term.
    pub fn next(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}
