//! Domain-level error type used across the registry operations.
//!
//! Mutations return `Result<_, DomainError>` rather than silently
//! no-opping on a miss, so callers and tests can tell a real removal
//! from a typo'd id.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Team,
    Player,
    Match,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(d) => write!(f, "validation error: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    /// True when the error is a `NotFound` of the given kind.
    pub fn is_not_found(&self, kind: &NotFoundKind) -> bool {
        matches!(self, DomainError::NotFound(k, _) if k == kind)
    }
}
