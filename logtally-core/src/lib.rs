pub mod cli;
pub mod conf;
pub mod generate;
pub mod logging;
pub mod record;
pub mod report;
pub mod scan;
pub mod stats;
