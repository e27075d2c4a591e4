use rand::prelude::*;

use super::*;

/// Uniform draw over every [`Shape`], reproducible from its seed.
#[derive(Clone, Debug)]
pub struct RandomShapeSource {
    seed: u64,
    rng: SmallRng,
}

impl RandomShapeSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl ShapeSource for RandomShapeSource {
    fn next_shape(&mut self) -> Shape {
        let index = self.rng.random_range(0..Shape::COUNT);
        Shape::ALL[index]
    }
}
