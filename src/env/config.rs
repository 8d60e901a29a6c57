use crate::MAX_EPISODE_STEPS;
use crate::engine::Deck;
use crate::engine::Stake;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// Construction-time settings for one environment.
/// Missing fields fall back to [`Config::default`] when loaded from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Engine seed. Drawn at random when absent.
    pub seed: Option<u64>,
    pub deck: Deck,
    pub stake: Stake,
    pub max_episode_steps: usize,
    /// Silence engine output on stdout/stderr.
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            deck: Deck::Red,
            stake: Stake::White,
            max_episode_steps: MAX_EPISODE_STEPS,
            quiet: true,
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parse config {}", path.display()))
    }
    pub fn seeded(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }
    pub fn loud(self) -> Self {
        Self {
            quiet: false,
            ..self
        }
    }
    pub fn budget(self, max_episode_steps: usize) -> Self {
        Self {
            max_episode_steps,
            ..self
        }
    }
}
