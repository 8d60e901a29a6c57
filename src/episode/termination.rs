use crate::engine::Phase;
use crate::engine::Status;
use crate::engine::StepResult;
use crate::tracker::Tracker;
use serde::Serialize;

/// Why an episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Ending {
    /// Engine reported the run finished.
    Finished,
    /// The blind that was started reached round end.
    Blind,
    /// The step budget ran out.
    Budget,
}

/// Termination decision for one step.
///
/// `truncated` is always false: running out of budget is reported as a
/// regular termination, same as a natural end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Termination {
    pub ending: Option<Ending>,
}

impl Termination {
    pub fn decide(result: &StepResult, tracker: &Tracker, budget: usize) -> Self {
        let ending = match (result.status, result.phase) {
            (Status::Finished, _) => Some(Ending::Finished),
            (_, Some(Phase::RoundEnd)) if tracker.blind_started() => Some(Ending::Blind),
            _ if tracker.step_count() >= budget => Some(Ending::Budget),
            (Status::NeedsInput | Status::Progressed, _) => None,
        };
        Self { ending }
    }
    pub fn terminated(&self) -> bool {
        self.ending.is_some()
    }
    pub fn truncated(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Choice;
    use crate::engine::Snapshot;

    fn at(phase: Phase) -> StepResult {
        StepResult::input(phase, vec![Choice::from((0, "x"))])
    }
    fn tracker(phases: &[Phase]) -> Tracker {
        let mut tracker = Tracker::default();
        tracker.begin(&at(Phase::BlindSelect));
        for phase in phases {
            tracker.tick();
            tracker.observe(&at(*phase), || Some(Snapshot::default()));
        }
        tracker
    }

    #[test]
    fn finished_status_terminates() {
        let result = StepResult::finished(Some(Phase::GameOver), false);
        let t = Termination::decide(&result, &tracker(&[]), 1000);
        assert!(t.terminated());
        assert!(t.ending == Some(Ending::Finished));
        assert!(!t.truncated());
    }

    #[test]
    fn round_end_terminates_only_after_blind_started() {
        let t = Termination::decide(&at(Phase::RoundEnd), &tracker(&[Phase::Shop]), 1000);
        assert!(!t.terminated());
        let played = tracker(&[Phase::Playing, Phase::RoundEnd]);
        let t = Termination::decide(&at(Phase::RoundEnd), &played, 1000);
        assert!(t.ending == Some(Ending::Blind));
    }

    #[test]
    fn budget_terminates_without_truncating() {
        let state = tracker(&[Phase::Shop, Phase::Shop, Phase::Shop]);
        let t = Termination::decide(&at(Phase::Shop), &state, 3);
        assert!(t.ending == Some(Ending::Budget));
        assert!(t.terminated());
        assert!(!t.truncated());
        let t = Termination::decide(&at(Phase::Shop), &state, 4);
        assert!(!t.terminated());
    }

    #[test]
    fn equivalence_over_grid() {
        for phase in Phase::all() {
            for started in [false, true] {
                for budget in [1, 2, 100] {
                    let state = match started {
                        true => tracker(&[Phase::Playing, *phase]),
                        false => tracker(&[Phase::Shop, *phase]),
                    };
                    let result = at(*phase);
                    let expected = (*phase == Phase::RoundEnd && state.blind_started())
                        || state.step_count() >= budget;
                    let t = Termination::decide(&result, &state, budget);
                    assert!(t.terminated() == expected);
                    assert!(!t.truncated());
                }
            }
        }
    }
}
