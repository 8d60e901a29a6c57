//! Scripted engine for tests: replays a fixed list of decision points.
use super::*;
use crate::Index;
use crate::Money;
use crate::Score;

pub struct Frame {
    result: StepResult,
    snapshot: Option<Snapshot>,
}

impl Frame {
    pub fn new(result: StepResult, snapshot: Option<Snapshot>) -> Self {
        Self { result, snapshot }
    }
    pub fn select(score: Score, money: Money) -> Self {
        let actions = vec![(1, "Play next blind"), (2, "Skip blind")];
        Self::decision(Phase::BlindSelect, actions, score, money)
    }
    pub fn playing(score: Score, money: Money) -> Self {
        let mut actions = vec![(0, "Play"), (1, "Discard")];
        actions.extend((2..10).map(|i| (i, "Toggle card")));
        Self::decision(Phase::Playing, actions, score, money)
    }
    pub fn round_end(score: Score, money: Money) -> Self {
        Self::decision(Phase::RoundEnd, vec![(0, "Cash out")], score, money)
    }
    pub fn shop(score: Score, money: Money) -> Self {
        Self::decision(Phase::Shop, vec![(0, "Next round"), (1, "Reroll")], score, money)
    }
    pub fn game_over() -> Self {
        Self::decision(Phase::GameOver, vec![(1, "Play again"), (4, "Exit")], 0, 0)
    }
    pub fn finished() -> Self {
        Self::new(StepResult::finished(Some(Phase::GameOver), false), None)
    }
    fn decision(phase: Phase, actions: Vec<(Index, &str)>, score: Score, money: Money) -> Self {
        let actions = actions.into_iter().map(Choice::from).collect();
        Self::new(
            StepResult::input(phase, actions),
            Some(Snapshot::from((score, money))),
        )
    }
}

pub struct Script {
    frames: Vec<Frame>,
    cursor: usize,
    received: Vec<Index>,
    blind: bool,
    setup: Option<(Deck, Stake)>,
}

impl Script {
    /// seed that makes [`Engine::seeded`] fail
    pub const BROKEN: u64 = u64::MAX;

    pub fn new(frames: Vec<Frame>) -> Self {
        Self {
            frames,
            cursor: 0,
            received: Vec::new(),
            blind: false,
            setup: None,
        }
    }
    /// one blind played to completion, then a second blind that ends the run
    pub fn scenario() -> Self {
        Self::new(vec![
            Frame::select(0, 4),
            Frame::playing(0, 4),
            Frame::playing(120, 4),
            Frame::round_end(300, 9),
            Frame::shop(300, 9),
            Frame::select(300, 9),
            Frame::playing(300, 9),
            Frame::game_over(),
            Frame::finished(),
        ])
    }
    /// snapshots fail, forcing the local tier
    pub fn blind(mut self) -> Self {
        self.blind = true;
        self
    }
    pub fn received(&self) -> &[Index] {
        &self.received
    }
    pub fn setup(&self) -> Option<(Deck, Stake)> {
        self.setup
    }

    fn frame(&self) -> anyhow::Result<&Frame> {
        self.frames
            .get(self.cursor)
            .ok_or_else(|| anyhow::anyhow!("script exhausted at frame {}", self.cursor))
    }
}

impl Engine for Script {
    fn seeded(seed: u64) -> anyhow::Result<Self> {
        match seed {
            Self::BROKEN => Err(anyhow::anyhow!("no engine for seed {}", seed)),
            _ => Ok(Self::scenario()),
        }
    }
    fn configure(&mut self, deck: Deck, stake: Stake) {
        self.setup = Some((deck, stake));
    }
    fn start(&mut self) -> anyhow::Result<()> {
        self.cursor = 0;
        Ok(())
    }
    fn step(&mut self, action: Option<Index>) -> anyhow::Result<StepResult> {
        if let Some(action) = action {
            self.received.push(action);
            self.cursor += 1;
        }
        self.frame().map(|f| f.result.clone())
    }
    fn snapshot(&self) -> anyhow::Result<Snapshot> {
        if self.blind {
            return Err(anyhow::anyhow!("snapshots disabled"));
        }
        self.frame()?
            .snapshot
            .ok_or_else(|| anyhow::anyhow!("no snapshot at frame {}", self.cursor))
    }
}
