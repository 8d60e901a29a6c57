use crate::Reward;
use crate::engine::Phase;
use crate::env::Transition;
use crate::episode::Ending;
use colored::Colorize;
use serde::Serialize;

/// Running totals of one episode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub seed: u64,
    pub steps: usize,
    pub reward: Reward,
    pub remaps: usize,
    pub blinds: usize,
    pub phase: Option<Phase>,
    pub ending: Option<Ending>,
}

impl Summary {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            steps: 0,
            reward: 0.0,
            remaps: 0,
            blinds: 0,
            phase: None,
            ending: None,
        }
    }

    /// Fold one transition in. Uses the pre-reset view when the transition
    /// came out of an auto-resetting batch.
    pub fn absorb(&mut self, transition: &Transition) {
        let (_, info) = transition.last();
        self.steps += 1;
        self.reward += transition.reward;
        self.remaps += info.action_mapped as usize;
        self.blinds += (transition.ending == Some(Ending::Blind)) as usize;
        self.phase = info.phase;
        self.ending = transition.ending;
    }

    pub fn is_done(&self) -> bool {
        self.ending.is_some()
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let ending = match self.ending {
            Some(ending) => format!("{:?}", ending).green(),
            None => "Running".yellow(),
        };
        write!(
            f,
            "seed {:<10} steps {:>5} reward {:>10.2} remaps {:>4} {}",
            self.seed, self.steps, self.reward, self.remaps, ending
        )
    }
}
