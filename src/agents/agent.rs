use crate::Index;
use crate::env::Info;
use crate::observe::Observation;

/// Something that picks an action index from what the environment shows.
/// The index need not be legal: the environment remaps and penalises.
pub trait Agent: Send {
    fn act(&mut self, observation: &Observation, info: &Info) -> Index;
}
