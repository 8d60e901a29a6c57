use super::*;
use crate::Index;
use crate::engine::Phase;
use crate::engine::Snapshot;
use crate::engine::StepResult;

/// Per-environment bookkeeping across steps.
///
/// Follows the engine's visible phase and derives the blind lifecycle from
/// consecutive `(prev_phase, phase)` pairs. Score and money are kept relative
/// to the blind's starting baseline; `previous` holds the values as of the
/// last completed step so rewards can be computed from deltas.
#[derive(Debug, Default, Clone)]
pub struct Tracker {
    phase: Option<Phase>,
    prev_phase: Option<Phase>,
    blind_started: bool,
    blind_finished: bool,
    bonus_paid: bool,
    baseline: Option<Baseline>,
    current: Snapshot,
    previous: Snapshot,
    tier: Tier,
    step_count: usize,
    last_valid_actions: Vec<Index>,
}

impl Tracker {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Seed from the probe that follows engine (re)initialization.
    /// No lifecycle transition fires on entry.
    pub fn begin(&mut self, result: &StepResult) {
        self.phase = result.phase;
        self.prev_phase = result.phase;
        self.last_valid_actions = result.legal();
    }

    pub fn tick(&mut self) {
        self.step_count += 1;
    }

    /// Fold one engine result into the tracked state. `read` is only called
    /// on transitions that want authoritative score/money.
    pub fn observe<F>(&mut self, result: &StepResult, mut read: F)
    where
        F: FnMut() -> Option<Snapshot>,
    {
        let prev = self.prev_phase;
        match result.phase {
            Some(Phase::BlindSelect) => self.open_cycle(),
            Some(Phase::Playing) if prev != Some(Phase::Playing) => self.start_blind(read()),
            Some(Phase::Playing) if self.blind_started => self.refresh(read()),
            Some(Phase::Playing) => {}
            Some(Phase::RoundEnd) if self.blind_started => self.finish_blind(read()),
            Some(Phase::RoundEnd) => {}
            Some(Phase::Shop) | Some(Phase::ShopPackSelection) | Some(Phase::GameOver) => {}
            None => {}
        }
        self.phase = result.phase;
        self.prev_phase = result.phase;
        self.last_valid_actions = result.legal();
        log::trace!(
            "step {:>4} {:?} -> {:?} started={} finished={} score={} money={} ({:?})",
            self.step_count,
            prev,
            self.phase,
            self.blind_started,
            self.blind_finished,
            self.current.score(),
            self.current.money(),
            self.tier,
        );
    }

    /// Close out a step after the reward was shaped: deltas restart from
    /// here, and a paid bonus stays paid until the next blind cycle.
    pub fn settle(&mut self, bonus: bool) {
        self.previous = self.current;
        self.bonus_paid |= bonus;
    }

    /// Blind completion bonus is owed on this step.
    pub fn bonus_due(&self, phase: Option<Phase>) -> bool {
        phase == Some(Phase::RoundEnd) && self.blind_started && self.blind_finished && !self.bonus_paid
    }

    fn open_cycle(&mut self) {
        self.blind_started = false;
        self.blind_finished = false;
        self.bonus_paid = false;
        self.baseline = None;
    }
    fn start_blind(&mut self, read: Option<Snapshot>) {
        self.blind_started = true;
        self.baseline = Some(Baseline::capture(self.baseline, read, self.current));
        log::trace!("blind started with baseline {:?}", self.baseline);
    }
    fn finish_blind(&mut self, read: Option<Snapshot>) {
        self.blind_finished = true;
        self.refresh(read);
    }
    /// Authoritative values replace local ones. Without a read the local
    /// values stand as they were.
    fn refresh(&mut self, read: Option<Snapshot>) {
        match (read, self.baseline) {
            (Some(absolute), Some(baseline)) => {
                self.current = absolute - baseline.snapshot();
                self.tier = Tier::Engine;
            }
            _ => self.tier = Tier::Local,
        }
    }

    pub fn phase(&self) -> Option<Phase> {
        self.phase
    }
    pub fn prev_phase(&self) -> Option<Phase> {
        self.prev_phase
    }
    pub fn blind_started(&self) -> bool {
        self.blind_started
    }
    pub fn blind_finished(&self) -> bool {
        self.blind_finished
    }
    pub fn baseline(&self) -> Option<Baseline> {
        self.baseline
    }
    pub fn current(&self) -> Snapshot {
        self.current
    }
    pub fn previous(&self) -> Snapshot {
        self.previous
    }
    pub fn tier(&self) -> Tier {
        self.tier
    }
    pub fn step_count(&self) -> usize {
        self.step_count
    }
    pub fn legal(&self) -> &[Index] {
        &self.last_valid_actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Choice;

    fn at(phase: Phase) -> StepResult {
        StepResult::input(phase, vec![Choice::from((0, "x")), Choice::from((3, "y"))])
    }
    fn snap(score: i64, money: i64) -> Option<Snapshot> {
        Some(Snapshot::from((score, money)))
    }
    fn entered(tracker: &mut Tracker, phase: Phase, read: Option<Snapshot>) {
        tracker.tick();
        tracker.observe(&at(phase), || read);
        tracker.settle(false);
    }

    #[test]
    fn begin_sets_both_phases_without_transition() {
        let mut tracker = Tracker::default();
        tracker.begin(&at(Phase::BlindSelect));
        assert!(tracker.phase() == Some(Phase::BlindSelect));
        assert!(tracker.prev_phase() == Some(Phase::BlindSelect));
        assert!(tracker.legal() == &[0, 3]);
        assert!(!tracker.blind_started());
    }

    #[test]
    fn entering_playing_starts_blind_and_captures_baseline() {
        let mut tracker = Tracker::default();
        tracker.begin(&at(Phase::BlindSelect));
        entered(&mut tracker, Phase::Playing, snap(100, 4));
        assert!(tracker.blind_started());
        assert!(!tracker.blind_finished());
        assert!(tracker.baseline() == Some(Baseline::Engine(Snapshot::from((100, 4)))));
    }

    #[test]
    fn playing_refreshes_relative_values() {
        let mut tracker = Tracker::default();
        tracker.begin(&at(Phase::BlindSelect));
        entered(&mut tracker, Phase::Playing, snap(100, 4));
        entered(&mut tracker, Phase::Playing, snap(250, 6));
        assert!(tracker.current() == Snapshot::from((150, 2)));
        assert!(tracker.tier() == Tier::Engine);
    }

    #[test]
    fn round_end_finishes_blind() {
        let mut tracker = Tracker::default();
        tracker.begin(&at(Phase::BlindSelect));
        entered(&mut tracker, Phase::Playing, snap(100, 4));
        tracker.tick();
        tracker.observe(&at(Phase::RoundEnd), || snap(400, 9));
        assert!(tracker.blind_finished());
        assert!(tracker.current() == Snapshot::from((300, 5)));
        assert!(tracker.bonus_due(Some(Phase::RoundEnd)));
        tracker.settle(true);
        assert!(!tracker.bonus_due(Some(Phase::RoundEnd)));
    }

    #[test]
    fn round_end_without_blind_is_inert() {
        let mut tracker = Tracker::default();
        tracker.begin(&at(Phase::Shop));
        let mut asked = false;
        tracker.tick();
        tracker.observe(&at(Phase::RoundEnd), || {
            asked = true;
            snap(1, 1)
        });
        assert!(!asked);
        assert!(!tracker.blind_finished());
        assert!(!tracker.bonus_due(Some(Phase::RoundEnd)));
    }

    #[test]
    fn blind_select_opens_new_cycle() {
        let mut tracker = Tracker::default();
        tracker.begin(&at(Phase::BlindSelect));
        entered(&mut tracker, Phase::Playing, snap(0, 0));
        tracker.tick();
        tracker.observe(&at(Phase::RoundEnd), || snap(300, 5));
        tracker.settle(true);
        entered(&mut tracker, Phase::BlindSelect, None);
        assert!(!tracker.blind_started());
        assert!(!tracker.blind_finished());
        assert!(tracker.baseline().is_none());
    }

    #[test]
    fn failed_reads_keep_local_values() {
        let mut tracker = Tracker::default();
        tracker.begin(&at(Phase::BlindSelect));
        entered(&mut tracker, Phase::Playing, snap(10, 0));
        entered(&mut tracker, Phase::Playing, snap(60, 0));
        entered(&mut tracker, Phase::Playing, None);
        assert!(tracker.current() == Snapshot::from((50, 0)));
        assert!(tracker.tier() == Tier::Local);
    }

    #[test]
    fn fallback_keeps_authoritative_baseline() {
        let mut tracker = Tracker::default();
        tracker.begin(&at(Phase::BlindSelect));
        entered(&mut tracker, Phase::Playing, snap(10, 2));
        entered(&mut tracker, Phase::Shop, None);
        entered(&mut tracker, Phase::Playing, None);
        assert!(tracker.baseline() == Some(Baseline::Engine(Snapshot::from((10, 2)))));
    }

    #[test]
    fn missing_phase_touches_nothing_but_phase() {
        let mut tracker = Tracker::default();
        tracker.begin(&at(Phase::BlindSelect));
        entered(&mut tracker, Phase::Playing, snap(10, 2));
        tracker.tick();
        tracker.observe(&StepResult::progressed(None), || snap(99, 99));
        assert!(tracker.blind_started());
        assert!(tracker.phase().is_none());
        assert!(tracker.legal().is_empty());
    }
}
