use colored::*;
use serde::Deserialize;
use serde::Serialize;

/// What the engine did with the last call.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Engine is parked at a decision point and offers a legal-action set.
    NeedsInput,
    /// Engine moved on without needing a choice.
    Progressed,
    /// The run is over.
    Finished,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NeedsInput => write!(f, "{}", "NeedsInput".white()),
            Self::Progressed => write!(f, "{}", "Progressed".dimmed()),
            Self::Finished => write!(f, "{}", "Finished".red()),
        }
    }
}
