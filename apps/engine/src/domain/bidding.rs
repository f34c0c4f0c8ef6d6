use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::domain::rules::valid_bid_range;
use crate::domain::state::PlayerId;
use crate::errors::domain::{DomainError, PreconditionKind, ValidationKind};

/// Collects one bid per player for the active round.
///
/// The collector is the validation boundary for raw driver input, so
/// `collect_bid` takes wide integers and narrows only after the checks pass.
/// The check order is part of the contract: round-not-started, then negative
/// bid, then bid over the round maximum, then player id range. A call that
/// violates several rules always reports the first one.
#[derive(Debug, Clone)]
pub struct BidCollector {
    num_players: u8,
    /// Active round; 0 is the pre-game sentinel (no round started yet).
    current_round: i32,
    bids: BTreeMap<PlayerId, i32>,
}

impl BidCollector {
    pub fn new(num_players: u8) -> Self {
        Self {
            num_players,
            current_round: 0,
            bids: BTreeMap::new(),
        }
    }

    pub fn num_players(&self) -> u8 {
        self.num_players
    }

    /// Begin collecting for `round_number`, discarding any bids from a prior
    /// round. Returns a two-line display summary (round and hands available).
    pub fn start_round(&mut self, round_number: i32) -> Result<String, DomainError> {
        if round_number < 1 {
            return Err(DomainError::validation(
                ValidationKind::InvalidRound,
                "Round number must be at least 1",
            ));
        }

        self.current_round = round_number;
        self.bids.clear();
        info!(round = round_number, "Bid collection started");

        Ok(format!(
            "\n--- Round {round_number} ---\nHands available: {round_number}"
        ))
    }

    /// Record `bid` for `player_id`, overwriting any earlier bid from the
    /// same player (last write wins).
    pub fn collect_bid(&mut self, player_id: i32, bid: i32) -> Result<(), DomainError> {
        if self.current_round == 0 {
            return Err(DomainError::precondition(
                PreconditionKind::RoundNotStarted,
                "No round has been started yet",
            ));
        }

        if bid < 0 {
            return Err(DomainError::validation(
                ValidationKind::NegativeBid,
                format!("Bid cannot be negative, got {bid}"),
            ));
        }

        if !valid_bid_range(self.current_round).contains(&bid) {
            return Err(DomainError::validation(
                ValidationKind::BidExceedsRound,
                format!(
                    "Bid {bid} exceeds maximum for round {round} (max: {round})",
                    round = self.current_round
                ),
            ));
        }

        if player_id < 0 || player_id >= i32::from(self.num_players) {
            return Err(DomainError::validation(
                ValidationKind::PlayerOutOfRange,
                format!(
                    "Invalid player_id {player_id}. Must be between 0 and {}",
                    i32::from(self.num_players) - 1
                ),
            ));
        }

        debug!(round = self.current_round, player_id, bid, "Bid collected");
        self.bids.insert(player_id as PlayerId, bid);
        Ok(())
    }

    /// True once every player id in `[0, num_players)` has a recorded bid.
    pub fn all_bids_collected(&self) -> bool {
        self.bids.len() == usize::from(self.num_players)
    }

    /// Defensive copy of the full bid set; rejected until all players bid.
    pub fn bids(&self) -> Result<BTreeMap<PlayerId, i32>, DomainError> {
        if !self.all_bids_collected() {
            return Err(DomainError::precondition(
                PreconditionKind::BidsIncomplete,
                format!(
                    "Not all players have bid yet. Collected: {}/{}",
                    self.bids.len(),
                    self.num_players
                ),
            ));
        }
        Ok(self.bids.clone())
    }

    /// Player ids with no recorded bid, ascending.
    pub fn missing_players(&self) -> Vec<PlayerId> {
        (0..self.num_players)
            .filter(|id| !self.bids.contains_key(id))
            .collect()
    }

    /// Hand-off point to scoring: the full bid set, or an error naming every
    /// missing player in ascending order.
    pub fn proceed_to_scoring(&self) -> Result<BTreeMap<PlayerId, i32>, DomainError> {
        if !self.all_bids_collected() {
            let missing = self.missing_players();
            return Err(DomainError::precondition(
                PreconditionKind::BidsIncomplete,
                format!("Cannot proceed to scoring. Missing bids from players: {missing:?}"),
            ));
        }
        info!(round = self.current_round, "All bids in, proceeding to scoring");
        self.bids()
    }
}
