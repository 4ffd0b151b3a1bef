//! Synthetic log generation
//!
//! Producer threads build batches of lines and hand them over a bounded
//! channel to a single writer that owns the output file.
//!
//! producers (LineGenerator)
//! sync_channel<String>
//! writer (BufWriter<File>)

mod constants;
mod error;
mod line;
mod run;

#[cfg(test)]
mod tests;

pub use constants::{AVG_LINE_BYTES, lines_for_size_mb};
pub use error::GenerateError;
pub use line::LineGenerator;
pub use run::*;
