use super::*;
use crate::Index;
use crate::env::Info;
use crate::observe::Observation;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Chooses uniformly among the legal actions.
pub struct Fish(SmallRng);

impl Fish {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Agent for Fish {
    fn act(&mut self, _: &Observation, info: &Info) -> Index {
        info.valid_actions
            .choose(&mut self.0)
            .copied()
            .unwrap_or_default()
    }
}
