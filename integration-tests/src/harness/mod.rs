mod fixtures;
pub mod tracing;

pub use fixtures::{LogFixture, generated_fixture, workers};
pub use self::tracing::{CapturedEvent, init_test_tracing};
