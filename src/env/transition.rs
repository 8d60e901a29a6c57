use super::*;
use crate::Reward;
use crate::episode::Ending;
use crate::observe::Observation;
use serde::Serialize;

/// Everything one call to `step` produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    pub observation: Observation,
    pub reward: Reward,
    pub terminated: bool,
    pub truncated: bool,
    pub info: Info,
    pub ending: Option<Ending>,
    /// Set by [`VecEnv`] when it reset the environment after termination:
    /// `observation` and `info` then belong to the new episode and this holds
    /// the last observation and info of the old one.
    pub terminal: Option<(Observation, Info)>,
}

impl Transition {
    /// Observation and info of the step that was actually taken, whether or
    /// not an auto-reset has since replaced them.
    pub fn last(&self) -> (&Observation, &Info) {
        match self.terminal {
            Some((ref observation, ref info)) => (observation, info),
            None => (&self.observation, &self.info),
        }
    }
}
