//! Test-only helpers shared across the workspace.
//!
//! Provides an idempotent tracing bootstrap for test binaries and
//! generators for unique team/player fixture data.

pub mod logging;
pub mod unique_helpers;

pub use unique_helpers::{unique_cpf, unique_email, unique_str};
