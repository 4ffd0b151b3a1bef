mod analyze;
mod generate;

pub use analyze::*;
pub use generate::*;
