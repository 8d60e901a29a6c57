mod resolution;

pub use resolution::*;
