//! Domain-level error type used across the engine.
//!
//! This error type is transport-agnostic. Every variant is a rejected
//! operation: the state observed before the failing call is left intact, so
//! callers may retry with corrected input.

use thiserror::Error;

/// Input validation failures (malformed arguments).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Round number below the 1-based minimum.
    InvalidRound,
    /// Bid below zero.
    NegativeBid,
    /// Bid above the active round's maximum.
    BidExceedsRound,
    /// Player id outside `[0, num_players)`.
    PlayerOutOfRange,
    Other(String),
}

/// Operations invoked in a state that forbids them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PreconditionKind {
    /// Phase transition not in the legal sequence.
    InvalidTransition,
    /// Bid submitted before any round was started.
    RoundNotStarted,
    /// Bids queried before every player has bid.
    BidsIncomplete,
    Other(String),
}

/// Domain-level not found entities (minimal set; extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Player,
    Other(String),
}

/// Domain-level conflict kinds (extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    PlayerExists,
    Other(String),
}

/// Central domain error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    #[error("validation {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Operation not legal in the current state
    #[error("precondition {0:?}: {1}")]
    Precondition(PreconditionKind, String),
    /// Missing resource in domain terms
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
    /// Semantic conflict
    #[error("conflict {0:?}: {1}")]
    Conflict(ConflictKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn precondition(kind: PreconditionKind, detail: impl Into<String>) -> Self {
        Self::Precondition(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
}
