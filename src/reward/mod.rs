mod shaper;

pub use shaper::*;
