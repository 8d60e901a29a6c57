use super::*;
use crate::Index;
use crate::engine::Adapter;
use crate::engine::Engine;
use crate::episode::Termination;
use crate::observe;
use crate::observe::Observation;
use crate::remap;
use crate::reward;
use crate::tracker::Tracker;
use anyhow::Context;
use rand::Rng;

/// One episodic environment over one engine instance.
///
/// Owns its engine handle and its tracked state outright. Parallel
/// collection builds several of these, never shares one.
pub struct BalatroEnv<E> {
    config: Config,
    seed: u64,
    adapter: Option<Adapter<E>>,
    tracker: Tracker,
}

impl<E> BalatroEnv<E>
where
    E: Engine,
{
    /// Builds and starts the engine straight away so a missing or broken
    /// engine is reported here rather than on first use.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let seed = config
            .seed
            .unwrap_or_else(|| rand::rng().random_range(0..1u64 << 31));
        let adapter = Adapter::launch(seed, config.deck, config.stake, config.quiet)?;
        Ok(Self {
            config,
            seed,
            adapter: Some(adapter),
            tracker: Tracker::default(),
        })
    }

    /// Start a fresh run and return its first decision point.
    /// A given seed replaces the stored one for this and later resets.
    pub fn reset(&mut self, seed: Option<u64>) -> anyhow::Result<(Observation, Info)> {
        if let Some(seed) = seed {
            self.seed = seed;
        }
        let mut adapter = Adapter::launch(
            self.seed,
            self.config.deck,
            self.config.stake,
            self.config.quiet,
        )?;
        let result = adapter.probe().context("probe first decision point")?;
        self.adapter = Some(adapter);
        self.tracker.reset();
        self.tracker.begin(&result);
        if result.is_starved() {
            log::warn!("run opened at {:?} with no legal actions", result.phase);
        }
        let observation = observe::encode(result.phase, &result.legal(), &self.tracker);
        let info = Info::reset(&result, &self.tracker);
        log::debug!("reset seed={} phase={:?} legal={:?}", self.seed, result.phase, info.valid_actions);
        Ok((observation, info))
    }

    /// Advance by one agent action. Illegal actions are remapped and
    /// penalised, never rejected.
    pub fn step(&mut self, action: Index) -> anyhow::Result<Transition> {
        let adapter = self
            .adapter
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("environment closed"))?;
        let resolution = remap::resolve(action, self.tracker.legal());
        if resolution.remapped {
            log::debug!(
                "remapped action {} -> {} ({})",
                resolution.requested,
                resolution.effective,
                resolution.penalty
            );
        }
        let result = adapter
            .advance(resolution.effective)
            .with_context(|| format!("engine step with action {}", resolution.effective))?;
        self.tracker.tick();
        if result.is_starved() {
            log::warn!("engine needs input at {:?} but offered no actions", result.phase);
        }
        self.tracker.observe(&result, || adapter.snapshot());
        let observation = observe::encode(result.phase, &result.legal(), &self.tracker);
        let shaped = reward::shape(&self.tracker, &result, resolution.penalty);
        self.tracker.settle(shaped.paid_bonus());
        let termination = Termination::decide(&result, &self.tracker, self.config.max_episode_steps);
        let info = Info::step(&result, &self.tracker, &resolution);
        if let Some(ending) = termination.ending {
            log::debug!(
                "episode ended ({:?}) after {} steps",
                ending,
                self.tracker.step_count()
            );
        }
        Ok(Transition {
            observation,
            reward: shaped.total(),
            terminated: termination.terminated(),
            truncated: termination.truncated(),
            info,
            ending: termination.ending,
            terminal: None,
        })
    }

    /// Drop the engine and the tracked state. `reset` brings both back.
    pub fn close(&mut self) {
        self.adapter = None;
        self.tracker.reset();
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }
    pub fn is_closed(&self) -> bool {
        self.adapter.is_none()
    }
}
