//! Property tests for bid collection (pure domain).
//!
//! Contract under test:
//! - Bids in [0..=round] from in-range players are accepted
//! - Violations report errors in a fixed precedence order:
//!   round-not-started, negative bid, bid over maximum, player out of range
//! - Missing players are always reported in ascending order

use proptest::prelude::*;

use crate::domain::bidding::BidCollector;
use crate::domain::rules::valid_bid_range;
use crate::errors::domain::{DomainError, PreconditionKind, ValidationKind};

proptest! {
    /// Property: any bid inside the round's range from any valid player is
    /// accepted and stored verbatim.
    #[test]
    fn prop_in_range_bids_accepted(
        num_players in 1u8..=8,
        round in 1i32..=10,
        player_offset in 0u8..8,
        bid_offset in 0i32..=10,
    ) {
        let player = i32::from(player_offset % num_players);
        let bid = bid_offset % (round + 1);

        let mut collector = BidCollector::new(num_players);
        collector.start_round(round).unwrap();

        prop_assert!(collector.collect_bid(player, bid).is_ok());
        prop_assert!(valid_bid_range(round).contains(&bid));

        // Fill in everyone else and read the stored value back
        for p in 0..num_players {
            collector.collect_bid(i32::from(p), 0).unwrap();
        }
        collector.collect_bid(player, bid).unwrap();
        let bids = collector.bids().unwrap();
        prop_assert_eq!(bids.get(&(player as u8)), Some(&bid));
    }

    /// Property: before start_round, every call fails with RoundNotStarted
    /// regardless of how invalid the arguments are.
    #[test]
    fn prop_round_not_started_takes_precedence(
        num_players in 0u8..=8,
        player in -100i32..100,
        bid in -100i32..100,
    ) {
        let mut collector = BidCollector::new(num_players);
        let err = collector.collect_bid(player, bid).unwrap_err();
        prop_assert!(matches!(
            err,
            DomainError::Precondition(PreconditionKind::RoundNotStarted, _)
        ));
    }

    /// Property: with a round active, a multi-violation call reports the
    /// first failing rule in contract order.
    #[test]
    fn prop_validation_precedence(
        num_players in 1u8..=8,
        round in 1i32..=10,
        player in -100i32..100,
        bid in -100i32..100,
    ) {
        let mut collector = BidCollector::new(num_players);
        collector.start_round(round).unwrap();

        let result = collector.collect_bid(player, bid);
        let expected_kind = if bid < 0 {
            Some(ValidationKind::NegativeBid)
        } else if bid > round {
            Some(ValidationKind::BidExceedsRound)
        } else if player < 0 || player >= i32::from(num_players) {
            Some(ValidationKind::PlayerOutOfRange)
        } else {
            None
        };

        match expected_kind {
            None => prop_assert!(result.is_ok()),
            Some(kind) => match result {
                Err(DomainError::Validation(got, _)) => prop_assert_eq!(got, kind),
                other => prop_assert!(false, "expected {:?}, got: {:?}", kind, other),
            },
        }
    }

    /// Property: a rejected bid never changes the collected set.
    #[test]
    fn prop_rejection_preserves_state(
        round in 1i32..=10,
        player in -100i32..100,
        bid in -100i32..100,
    ) {
        let mut collector = BidCollector::new(4);
        collector.start_round(round).unwrap();
        collector.collect_bid(0, 0).unwrap();

        let before = collector.missing_players();
        if collector.collect_bid(player, bid).is_err() {
            prop_assert_eq!(collector.missing_players(), before);
        }
    }

    /// Property: missing players are exactly the complement of the bidders,
    /// in ascending order.
    #[test]
    fn prop_missing_players_sorted_complement(
        num_players in 1u8..=8,
        bidder_mask in 0u16..256,
    ) {
        let mut collector = BidCollector::new(num_players);
        collector.start_round(5).unwrap();

        let mut expected_missing = Vec::new();
        for p in 0..num_players {
            if bidder_mask & (1 << p) != 0 {
                collector.collect_bid(i32::from(p), 1).unwrap();
            } else {
                expected_missing.push(p);
            }
        }

        prop_assert_eq!(collector.missing_players(), expected_missing.clone());
        prop_assert_eq!(collector.all_bids_collected(), expected_missing.is_empty());

        if !expected_missing.is_empty() {
            match collector.proceed_to_scoring() {
                Err(DomainError::Precondition(PreconditionKind::BidsIncomplete, msg)) => {
                    let expected_fmt = format!("{expected_missing:?}");
                    prop_assert!(msg.contains(&expected_fmt));
                }
                other => prop_assert!(false, "expected BidsIncomplete, got: {:?}", other),
            }
        }
    }
}
