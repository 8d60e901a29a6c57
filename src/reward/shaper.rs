use crate::BLIND_BONUS;
use crate::MONEY_WEIGHT;
use crate::Reward;
use crate::STEP_REWARD;
use crate::engine::StepResult;
use crate::tracker::Tracker;
use serde::Serialize;

/// Components of a single step's reward.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct Breakdown {
    pub score: Reward,
    pub money: Reward,
    pub step: Reward,
    pub bonus: Reward,
    pub remap: Reward,
}

impl Breakdown {
    pub fn total(&self) -> Reward {
        self.score + self.money + self.step + self.bonus + self.remap
    }
    /// score and money share, never negative
    pub fn gain(&self) -> Reward {
        self.score + self.money
    }
    pub fn paid_bonus(&self) -> bool {
        self.bonus > 0.0
    }
}

/// Shape the reward for the step that produced `result`.
///
/// Expects the tracker to have observed `result` but not yet been settled,
/// so `current - previous` is this step's movement. Only gains count: a drop
/// in score or money contributes nothing rather than something negative.
pub fn shape(tracker: &Tracker, result: &StepResult, remap: Reward) -> Breakdown {
    let current = tracker.current();
    let previous = tracker.previous();
    let score = (current.score() - previous.score()).max(0) as Reward;
    let money = (current.money() - previous.money()).max(0) as Reward;
    Breakdown {
        score,
        money: money * MONEY_WEIGHT,
        step: STEP_REWARD,
        bonus: match tracker.bonus_due(result.phase) {
            true => BLIND_BONUS,
            false => 0.0,
        },
        remap,
    }
}
