use super::*;
use crate::Index;
use anyhow::Context;

/// Owns one engine handle and funnels every call through [`Silence`].
pub struct Adapter<E> {
    engine: E,
    quiet: bool,
}

impl<E> Adapter<E>
where
    E: Engine,
{
    pub fn new(engine: E, quiet: bool) -> Self {
        Self { engine, quiet }
    }

    /// Build, configure and start a fresh run.
    pub fn launch(seed: u64, deck: Deck, stake: Stake, quiet: bool) -> anyhow::Result<Self> {
        let engine = E::seeded(seed).with_context(|| {
            format!("engine unavailable (seed {}, deck {}, stake {})", seed, deck, stake)
        })?;
        let mut adapter = Self::new(engine, quiet);
        adapter.engine.configure(deck, stake);
        adapter
            .silenced(|e| e.start())
            .with_context(|| format!("start run (seed {})", seed))?;
        log::debug!("launched run seed={} deck={} stake={}", seed, deck, stake);
        Ok(adapter)
    }

    /// `None` reads the current decision point, `Some` advances the run.
    pub fn probe_or_advance(&mut self, action: Option<Index>) -> anyhow::Result<StepResult> {
        self.silenced(|e| e.step(action))
    }
    pub fn probe(&mut self) -> anyhow::Result<StepResult> {
        self.probe_or_advance(None)
    }
    pub fn advance(&mut self, action: Index) -> anyhow::Result<StepResult> {
        self.probe_or_advance(Some(action))
    }

    /// Authoritative score and money, if the engine will give them up.
    /// Failures stay here.
    pub fn snapshot(&mut self) -> Option<Snapshot> {
        match self.silenced(|e| e.snapshot()) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                log::trace!("snapshot unavailable: {}", e);
                None
            }
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
    pub fn quiet(&self) -> bool {
        self.quiet
    }

    fn silenced<T>(&mut self, call: impl FnOnce(&mut E) -> T) -> T {
        let _guard = if self.quiet { Silence::acquire() } else { None };
        call(&mut self.engine)
    }
}
