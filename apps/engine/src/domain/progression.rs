use tracing::debug;

use crate::domain::rules::{MAX_ROUND, MIN_ROUND};
use crate::domain::state::Phase;
use crate::errors::domain::{DomainError, PreconditionKind};

/// Round/phase progression for a fixed 10-round game.
///
/// Each round cycles Setup -> Bidding -> Scoring -> Complete; Complete rolls
/// over into the next round's Setup until round 10, where Complete is
/// terminal. Every transition is total: a rejected call leaves round and
/// phase untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundProgression {
    current_round: u8,
    current_phase: Phase,
}

impl Default for RoundProgression {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundProgression {
    /// Fresh game: round 1, Setup.
    pub fn new() -> Self {
        Self {
            current_round: MIN_ROUND,
            current_phase: Phase::Setup,
        }
    }

    /// Current round number (1..=10).
    pub fn current_round(&self) -> u8 {
        self.current_round
    }

    pub fn current_phase(&self) -> Phase {
        self.current_phase
    }

    /// Hands to be played in the current round (equals the round number).
    pub fn hands_in_current_round(&self) -> u8 {
        self.current_round
    }

    /// True once round 10 has completed. No further transition is legal.
    pub fn is_game_complete(&self) -> bool {
        self.current_round == MAX_ROUND && self.current_phase == Phase::Complete
    }

    /// Advance exactly one step in the phase sequence.
    ///
    /// From Complete the game rolls into the next round's Setup, except at
    /// round 10 where the call fails with `InvalidTransition` and changes
    /// nothing.
    pub fn advance_phase(&mut self) -> Result<(), DomainError> {
        let next = match self.current_phase {
            Phase::Setup => Phase::Bidding,
            Phase::Bidding => Phase::Scoring,
            Phase::Scoring => Phase::Complete,
            Phase::Complete => {
                if self.current_round >= MAX_ROUND {
                    return Err(DomainError::precondition(
                        PreconditionKind::InvalidTransition,
                        format!("Cannot advance beyond round {MAX_ROUND}. Game is complete."),
                    ));
                }
                self.current_round += 1;
                self.current_phase = Phase::Setup;
                debug!(round = self.current_round, "Transition: Complete -> Setup");
                return Ok(());
            }
        };
        debug!(
            round = self.current_round,
            from = %self.current_phase,
            to = %next,
            "Phase advanced"
        );
        self.current_phase = next;
        Ok(())
    }

    /// Open the current round (Setup -> Bidding).
    ///
    /// Exists so callers cannot jump into Bidding mid-round: any phase other
    /// than Setup is rejected, naming the phase that was required.
    pub fn start_round(&mut self) -> Result<(), DomainError> {
        if self.current_phase != Phase::Setup {
            return Err(DomainError::precondition(
                PreconditionKind::InvalidTransition,
                format!(
                    "Cannot start round {}. Current phase is {}, but must be in setup phase to start.",
                    self.current_round, self.current_phase
                ),
            ));
        }
        self.advance_phase()
    }

    /// Unconditionally return to round 1, Setup.
    pub fn reset(&mut self) {
        debug!(
            round = self.current_round,
            phase = %self.current_phase,
            "Progression reset"
        );
        self.current_round = MIN_ROUND;
        self.current_phase = Phase::Setup;
    }
}
