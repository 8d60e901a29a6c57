use super::*;
use crate::Index;
use crate::env::Info;
use crate::observe::Observation;

/// Always takes the first legal action. Deterministic baseline.
pub struct First;

impl Agent for First {
    fn act(&mut self, _: &Observation, info: &Info) -> Index {
        info.valid_actions.first().copied().unwrap_or_default()
    }
}
