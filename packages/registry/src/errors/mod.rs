//! Error handling for the registry core.

pub mod domain;

pub use domain::{DomainError, NotFoundKind};
