use crate::engine::Snapshot;
use serde::Deserialize;
use serde::Serialize;

/// Where a score/money figure came from.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    /// Read from the engine's own snapshot. Always preferred.
    Engine,
    /// Carried over from the adapter's own bookkeeping because the engine
    /// could not be asked.
    #[default]
    Local,
}

/// Absolute score and money captured when a blind started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    Engine(Snapshot),
    Local(Snapshot),
}

impl Baseline {
    pub fn snapshot(&self) -> Snapshot {
        match self {
            Self::Engine(s) | Self::Local(s) => *s,
        }
    }
    pub fn tier(&self) -> Tier {
        match self {
            Self::Engine(_) => Tier::Engine,
            Self::Local(_) => Tier::Local,
        }
    }
    /// A fresh authoritative read always wins. A fallback only fills the
    /// slot when nothing authoritative was captured this cycle.
    pub fn capture(existing: Option<Self>, read: Option<Snapshot>, local: Snapshot) -> Self {
        match (existing, read) {
            (_, Some(snapshot)) => Self::Engine(snapshot),
            (Some(Self::Engine(snapshot)), None) => Self::Engine(snapshot),
            (Some(Self::Local(_)), None) | (None, None) => Self::Local(local),
        }
    }
}
