use super::*;
use crate::Index;

/// The stepping protocol of the external game engine.
///
/// Nothing about the rules leaks through here: the engine is parked at a
/// decision point, hands back the legal-action set, and advances when given
/// one of those indices. Score and money can be read back through
/// [`Engine::snapshot`] when the engine supports it.
pub trait Engine {
    /// Build a fresh engine. Failing here is a bootstrap problem.
    fn seeded(seed: u64) -> anyhow::Result<Self>
    where
        Self: Sized;
    /// Select deck and stake. Called once before [`Engine::start`].
    fn configure(&mut self, deck: Deck, stake: Stake);
    /// Begin a run with the configured deck and stake.
    fn start(&mut self) -> anyhow::Result<()>;
    /// `None` probes the current decision point without mutating the run.
    /// `Some(index)` advances it.
    fn step(&mut self, action: Option<Index>) -> anyhow::Result<StepResult>;
    /// Authoritative absolute score and money. Optional capability.
    fn snapshot(&self) -> anyhow::Result<Snapshot> {
        Err(anyhow::anyhow!("engine does not expose snapshots"))
    }
}
