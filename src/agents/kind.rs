use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Named agent choices for command lines and configs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kind {
    #[default]
    Fish,
    First,
    Noise,
}

impl Kind {
    pub fn build(&self, seed: u64) -> Box<dyn Agent> {
        match self {
            Self::Fish => Box::new(Fish::seeded(seed)),
            Self::First => Box::new(First),
            Self::Noise => Box::new(Noise::seeded(seed)),
        }
    }
}

impl std::str::FromStr for Kind {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fish" => Ok(Self::Fish),
            "first" => Ok(Self::First),
            "noise" => Ok(Self::Noise),
            _ => Err(anyhow::anyhow!("unknown agent: {} (fish | first | noise)", s)),
        }
    }
}
