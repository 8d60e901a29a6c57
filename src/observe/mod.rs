mod mask;
mod observation;

pub use mask::*;
pub use observation::*;
