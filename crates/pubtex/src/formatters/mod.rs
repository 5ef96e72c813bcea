//! Output formatters.

mod latex;

pub use latex::*;
