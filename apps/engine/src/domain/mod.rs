//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod progression;
pub mod rules;
pub mod scoreboard;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod tests_props_bidding;

// Re-exports for ergonomics
pub use bidding::BidCollector;
pub use progression::RoundProgression;
pub use rules::{hands_for_round, valid_bid_range, MAX_ROUND, MIN_ROUND};
pub use scoreboard::{PlayerScore, Scoreboard};
pub use snapshot::GameSnapshot;
pub use state::{Phase, PlayerId};
