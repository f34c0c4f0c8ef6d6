use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

pub type PlayerId = u8; // 0..=num_players-1

/// Overall game progression phases.
///
/// This is the one canonical phase type: the progression machine, the
/// snapshot API, and the scoreboard all share it so the components cannot
/// drift apart.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Round created but bidding not yet open.
    Setup,
    /// Players submit bids.
    Bidding,
    /// Externally computed round scores are tallied.
    Scoring,
    /// Round complete; at the final round this is terminal.
    Complete,
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Phase::Setup => write!(f, "setup"),
            Phase::Bidding => write!(f, "bidding"),
            Phase::Scoring => write!(f, "scoring"),
            Phase::Complete => write!(f, "complete"),
        }
    }
}
