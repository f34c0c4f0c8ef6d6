//! Error handling for the engine.

pub mod domain;

pub use domain::{ConflictKind, DomainError, NotFoundKind, PreconditionKind, ValidationKind};
