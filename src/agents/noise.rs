use super::*;
use crate::ACTION_SPACE;
use crate::Index;
use crate::env::Info;
use crate::observe::Observation;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Samples the whole action space and ignores legality, the way an
/// untrained policy head does.
pub struct Noise(SmallRng);

impl Noise {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Agent for Noise {
    fn act(&mut self, _: &Observation, _: &Info) -> Index {
        self.0.random_range(0..ACTION_SPACE)
    }
}
