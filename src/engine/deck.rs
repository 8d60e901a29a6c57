use serde::Deserialize;
use serde::Serialize;

/// Starting deck chosen before a run begins.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Deck {
    #[default]
    Red,
    Blue,
    Yellow,
    Green,
    Black,
    Magic,
    Nebula,
    Ghost,
    Abandoned,
    Checkered,
    Zodiac,
    Painted,
    Anaglyph,
    Plasma,
    Erratic,
}

impl Deck {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Red,
            Self::Blue,
            Self::Yellow,
            Self::Green,
            Self::Black,
            Self::Magic,
            Self::Nebula,
            Self::Ghost,
            Self::Abandoned,
            Self::Checkered,
            Self::Zodiac,
            Self::Painted,
            Self::Anaglyph,
            Self::Plasma,
            Self::Erratic,
        ]
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
            Self::Black => "Black",
            Self::Magic => "Magic",
            Self::Nebula => "Nebula",
            Self::Ghost => "Ghost",
            Self::Abandoned => "Abandoned",
            Self::Checkered => "Checkered",
            Self::Zodiac => "Zodiac",
            Self::Painted => "Painted",
            Self::Anaglyph => "Anaglyph",
            Self::Plasma => "Plasma",
            Self::Erratic => "Erratic",
        }
    }
}

impl TryFrom<&str> for Deck {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .iter()
            .copied()
            .find(|d| d.name() == s)
            .ok_or_else(|| anyhow::anyhow!("invalid deck type: {}", s))
    }
}

impl std::str::FromStr for Deck {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
