use colored::*;
use serde::Deserialize;
use serde::Serialize;

/// Visible phases of a run, in observation-index order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Shop = 0isize,
    ShopPackSelection = 1isize,
    BlindSelect = 2isize,
    Playing = 3isize,
    RoundEnd = 4isize,
    GameOver = 5isize,
}

impl Phase {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Shop,
            Self::ShopPackSelection,
            Self::BlindSelect,
            Self::Playing,
            Self::RoundEnd,
            Self::GameOver,
        ]
    }
    pub const fn index(&self) -> usize {
        *self as usize
    }
    /// observation index of an optional phase. unknown phases share slot 0.
    pub fn encode(phase: Option<Self>) -> usize {
        phase.map(|p| p.index()).unwrap_or(0)
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Shop => "Shop",
            Self::ShopPackSelection => "ShopPackSelection",
            Self::BlindSelect => "BlindSelect",
            Self::Playing => "Playing",
            Self::RoundEnd => "RoundEnd",
            Self::GameOver => "GameOver",
        }
    }
}

impl TryFrom<&str> for Phase {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.name() == s)
            .ok_or_else(|| anyhow::anyhow!("invalid phase: {}", s))
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shop => write!(f, "{}", self.name().yellow()),
            Self::ShopPackSelection => write!(f, "{}", self.name().yellow()),
            Self::BlindSelect => write!(f, "{}", self.name().cyan()),
            Self::Playing => write!(f, "{}", self.name().green()),
            Self::RoundEnd => write!(f, "{}", self.name().magenta()),
            Self::GameOver => write!(f, "{}", self.name().red()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_declaration_order() {
        for (i, phase) in Phase::all().iter().enumerate() {
            assert!(phase.index() == i);
        }
    }

    #[test]
    fn missing_phase_encodes_as_zero() {
        assert!(Phase::encode(None) == 0);
        assert!(Phase::encode(Some(Phase::GameOver)) == 5);
    }

    #[test]
    fn bijective_name() {
        for phase in Phase::all() {
            assert!(Phase::try_from(phase.name()).ok() == Some(*phase));
        }
        assert!(Phase::try_from("Menu").is_err());
    }
}
