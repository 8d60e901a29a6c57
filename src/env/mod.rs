mod config;
mod env;
mod info;
mod transition;
mod vector;

pub use config::*;
pub use env::*;
pub use info::*;
pub use transition::*;
pub use vector::*;
