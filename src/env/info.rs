use crate::Index;
use crate::Money;
use crate::Score;
use crate::engine::Outcome;
use crate::engine::Phase;
use crate::engine::Status;
use crate::engine::StepResult;
use crate::remap::Resolution;
use crate::tracker::Tier;
use crate::tracker::Tracker;
use serde::Serialize;

/// Diagnostics returned alongside every observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Info {
    pub phase: Option<Phase>,
    pub status: Status,
    pub valid_actions: Vec<Index>,
    pub score: Score,
    pub money: Money,
    pub action_mapped: bool,
    pub original_action: Option<Index>,
    pub mapped_action: Option<Index>,
    pub finished: Option<Outcome>,
    pub tier: Tier,
}

impl Info {
    pub fn reset(result: &StepResult, tracker: &Tracker) -> Self {
        Self {
            phase: result.phase,
            status: result.status,
            valid_actions: tracker.legal().to_vec(),
            score: tracker.current().score(),
            money: tracker.current().money(),
            action_mapped: false,
            original_action: None,
            mapped_action: None,
            finished: result.finished,
            tier: tracker.tier(),
        }
    }
    pub fn step(result: &StepResult, tracker: &Tracker, resolution: &Resolution) -> Self {
        Self {
            action_mapped: resolution.remapped,
            original_action: Some(resolution.requested),
            mapped_action: Some(resolution.effective),
            ..Self::reset(result, tracker)
        }
    }
}
