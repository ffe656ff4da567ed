mod config;
pub mod tracing;

pub use config::{fixture_path, load_fixture, names};
pub use tracing::{CapturedEvent, init_test_tracing};
