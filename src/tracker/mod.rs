mod baseline;
mod tracker;

pub use baseline::*;
pub use tracker::*;
