//! Per-step displacement sources
//!
//! The arena asks its source for one `(dx, dy)` per entity per step. The
//! production source is a seeded PCG stream so a run can be replayed from its
//! seed; tests plug in fixed sources.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::MAX_STEP;

/// Something that yields integer step displacements
pub trait DisplacementSource {
    fn next_displacement(&mut self) -> IVec2;
}

/// Uniform random walk: each axis drawn independently from `[-MAX_STEP, MAX_STEP]`
#[derive(Debug, Clone)]
pub struct RandomWalk {
    seed: u64,
    rng: Pcg32,
}

impl RandomWalk {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DisplacementSource for RandomWalk {
    fn next_displacement(&mut self) -> IVec2 {
        let dx = self.rng.random_range(-MAX_STEP..=MAX_STEP);
        let dy = self.rng.random_range(-MAX_STEP..=MAX_STEP);
        IVec2::new(dx, dy)
    }
}

/// Always returns the same displacement
#[derive(Debug, Clone, Copy)]
pub struct ConstantDisplacement(pub IVec2);

impl DisplacementSource for ConstantDisplacement {
    fn next_displacement(&mut self) -> IVec2 {
        self.0
    }
}

impl<S: DisplacementSource + ?Sized> DisplacementSource for &mut S {
    fn next_displacement(&mut self) -> IVec2 {
        (**self).next_displacement()
    }
}

impl<S: DisplacementSource + ?Sized> DisplacementSource for Box<S> {
    fn next_displacement(&mut self) -> IVec2 {
        (**self).next_displacement()
    }
}
