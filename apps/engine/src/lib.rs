#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod errors;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use domain::bidding::BidCollector;
pub use domain::progression::RoundProgression;
pub use domain::scoreboard::{PlayerScore, Scoreboard};
pub use domain::snapshot::GameSnapshot;
pub use domain::state::{Phase, PlayerId};
pub use errors::DomainError;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
