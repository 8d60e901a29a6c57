use crate::EMPTY_PENALTY;
use crate::Index;
use crate::REMAP_PENALTY;
use crate::Reward;
use serde::Serialize;

/// What actually gets sent to the engine for a requested action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Resolution {
    pub requested: Index,
    pub effective: Index,
    pub penalty: Reward,
    pub remapped: bool,
}

/// Reconcile a requested index with the last legal-action set.
///
/// Illegal requests never fail: they are redirected to the first legal index
/// (or to 0 when the engine offered nothing) and carry a penalty instead.
pub fn resolve(requested: Index, legal: &[Index]) -> Resolution {
    match legal.first() {
        _ if legal.contains(&requested) => Resolution {
            requested,
            effective: requested,
            penalty: 0.0,
            remapped: false,
        },
        Some(first) => Resolution {
            requested,
            effective: *first,
            penalty: REMAP_PENALTY,
            remapped: true,
        },
        None => {
            log::warn!("no legal actions cached, sending 0 in place of {}", requested);
            Resolution {
                requested,
                effective: 0,
                penalty: EMPTY_PENALTY,
                remapped: true,
            }
        }
    }
}
