mod termination;

pub use termination::*;
