mod adapter;
mod deck;
mod engine;
mod phase;
mod result;
mod sandbox;
#[cfg(test)]
mod script;
mod silence;
mod snapshot;
mod stake;
mod status;

pub use adapter::*;
pub use deck::*;
pub use engine::*;
pub use phase::*;
pub use result::*;
pub use sandbox::*;
#[cfg(test)]
pub use script::*;
pub use silence::*;
pub use snapshot::*;
pub use stake::*;
pub use status::*;
