use crate::Money;
use crate::Score;
use serde::Deserialize;
use serde::Serialize;

/// Absolute score and money as the engine sees them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    score: Score,
    money: Money,
}

impl Snapshot {
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn money(&self) -> Money {
        self.money
    }
}

impl From<(Score, Money)> for Snapshot {
    fn from((score, money): (Score, Money)) -> Self {
        Self { score, money }
    }
}

impl std::ops::Sub for Snapshot {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            score: self.score - rhs.score,
            money: self.money - rhs.money,
        }
    }
}
