use std::ops::RangeInclusive;

pub const MIN_ROUND: u8 = 1;
pub const MAX_ROUND: u8 = 10;

// Hand schedule: one hand in round 1 up to ten hands in round 10.
// hands = round number.
pub fn hands_for_round(round_no: u8) -> Option<u8> {
    if round_no < MIN_ROUND || round_no > MAX_ROUND {
        return None;
    }
    Some(round_no)
}

/// Legal bids for a round: `0..=round_no`, the per-round maximum being the
/// round number itself. The round is an explicit parameter so bid validation
/// stays testable in isolation from the progression machine.
pub fn valid_bid_range(round_no: i32) -> RangeInclusive<i32> {
    0..=round_no
}
