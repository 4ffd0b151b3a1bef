mod log_stats;


pub use log_stats::*;
