mod runner;
mod summary;

pub use runner::*;
pub use summary::*;
