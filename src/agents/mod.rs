mod agent;
mod first;
mod fish;
mod kind;
mod noise;

pub use agent::*;
pub use first::*;
pub use fish::*;
pub use kind::*;
pub use noise::*;
