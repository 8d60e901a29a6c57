use super::*;
use crate::ACTION_SPACE;
use crate::DEFAULT_ANTE;
use crate::DEFAULT_DISCARDS;
use crate::DEFAULT_HANDS;
use crate::DEFAULT_ROUND;
use crate::GAME_INFO;
use crate::Index;
use crate::PHASES;
use crate::engine::Phase;
use crate::tracker::Tracker;
use serde::Serialize;

/// Fixed-shape view of the environment handed to the learner.
///
/// `game_info` layout: score, money, ante, round, hands remaining, discards
/// remaining, blind started, blind finished, step count, phase index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub phase: usize,
    pub available: Mask,
    pub game_info: [f32; GAME_INFO],
}

impl Observation {
    pub fn score(&self) -> f32 {
        self.game_info[0]
    }
    pub fn money(&self) -> f32 {
        self.game_info[1]
    }
    pub fn step_count(&self) -> f32 {
        self.game_info[8]
    }
    /// one-hot phase, action mask and game info, concatenated
    pub fn features(&self) -> Vec<f32> {
        let mut features = Vec::with_capacity(PHASES + ACTION_SPACE + GAME_INFO);
        features.extend((0..PHASES).map(|i| (i == self.phase) as u8 as f32));
        features.extend(self.available.bits().map(f32::from));
        features.extend(self.game_info.iter().copied());
        features
    }
}

/// Encode the observation for a phase, legal set and tracked state.
pub fn encode(phase: Option<Phase>, legal: &[Index], tracker: &Tracker) -> Observation {
    let phase = Phase::encode(phase);
    let current = tracker.current();
    Observation {
        phase,
        available: Mask::from(legal),
        game_info: [
            current.score() as f32,
            current.money() as f32,
            DEFAULT_ANTE,
            DEFAULT_ROUND,
            DEFAULT_HANDS,
            DEFAULT_DISCARDS,
            tracker.blind_started() as u8 as f32,
            tracker.blind_finished() as u8 as f32,
            tracker.step_count() as f32,
            phase as f32,
        ],
    }
}
