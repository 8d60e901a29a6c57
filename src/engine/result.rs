use super::*;
use crate::Index;
use serde::Deserialize;
use serde::Serialize;

/// One entry of the legal-action set: engine index plus a human label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub index: Index,
    pub label: String,
}

impl From<(Index, &str)> for Choice {
    fn from((index, label): (Index, &str)) -> Self {
        Self {
            index,
            label: label.to_string(),
        }
    }
}

/// How a finished run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub restart: bool,
}

/// Everything the engine reports back from a single call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    pub status: Status,
    pub phase: Option<Phase>,
    pub actions: Vec<Choice>,
    pub finished: Option<Outcome>,
}

impl StepResult {
    pub fn input(phase: Phase, actions: Vec<Choice>) -> Self {
        Self {
            status: Status::NeedsInput,
            phase: Some(phase),
            actions,
            finished: None,
        }
    }
    pub fn progressed(phase: Option<Phase>) -> Self {
        Self {
            status: Status::Progressed,
            phase,
            actions: Vec::new(),
            finished: None,
        }
    }
    pub fn finished(phase: Option<Phase>, restart: bool) -> Self {
        Self {
            status: Status::Finished,
            phase,
            actions: Vec::new(),
            finished: Some(Outcome { restart }),
        }
    }
    /// legal indices in engine order
    pub fn legal(&self) -> Vec<Index> {
        self.actions.iter().map(|c| c.index).collect()
    }
    /// decision point with nothing to decide. the engine promised not to do this.
    pub fn is_starved(&self) -> bool {
        self.status == Status::NeedsInput && self.actions.is_empty()
    }
}
