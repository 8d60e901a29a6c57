use serde::Deserialize;
use serde::Serialize;

/// Difficulty stake, ordered from easiest to hardest.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stake {
    #[default]
    White,
    Red,
    Green,
    Blue,
    Black,
    Purple,
    Orange,
    Gold,
}

impl Stake {
    pub const fn all() -> &'static [Self] {
        &[
            Self::White,
            Self::Red,
            Self::Green,
            Self::Blue,
            Self::Black,
            Self::Purple,
            Self::Orange,
            Self::Gold,
        ]
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Black => "Black",
            Self::Purple => "Purple",
            Self::Orange => "Orange",
            Self::Gold => "Gold",
        }
    }
}

impl TryFrom<&str> for Stake {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .iter()
            .copied()
            .find(|x| x.name() == s)
            .ok_or_else(|| anyhow::anyhow!("invalid stake level: {}", s))
    }
}

impl std::str::FromStr for Stake {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Stake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
