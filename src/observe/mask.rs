use crate::ACTION_SPACE;
use crate::Index;
use serde::Serialize;
use serde::Serializer;

/// Fixed-width binary mask over the action space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask([bool; ACTION_SPACE]);

impl Mask {
    pub fn get(&self, index: Index) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }
    pub fn count(&self) -> usize {
        self.0.iter().filter(|b| **b).count()
    }
    pub fn indices(&self) -> Vec<Index> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(|(i, _)| i)
            .collect()
    }
    pub fn bits(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().map(|b| *b as u8)
    }
}

impl Default for Mask {
    fn default() -> Self {
        Self([false; ACTION_SPACE])
    }
}

/// Indices past the action space are dropped, not reported.
impl From<&[Index]> for Mask {
    fn from(legal: &[Index]) -> Self {
        let mut mask = Self::default();
        for index in legal.iter().copied().filter(|i| *i < ACTION_SPACE) {
            mask.0[index] = true;
        }
        mask
    }
}

impl Serialize for Mask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.bits())
    }
}
