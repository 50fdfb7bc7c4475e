//! Generators for unique test data.
//!
//! Team names, contact emails and CPFs must differ between fixtures so
//! that assertions on lookups and aggregates cannot pass by accident.

use std::sync::atomic::{AtomicU64, Ordering};

use ulid::Ulid;

/// Unique string in the format `{prefix}-{ulid}`.
///
/// # Examples
/// ```
/// use test_support::unique_str;
///
/// let a = unique_str("team");
/// let b = unique_str("team");
/// assert_ne!(a, b);
/// assert!(a.starts_with("team-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Unique email address in the format `{prefix}-{ulid}@example.test`.
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new())
}

static NEXT_CPF: AtomicU64 = AtomicU64::new(1);

/// Unique CPF-shaped string (`000.000.000-00`).
///
/// Digits come from a process-wide counter; the check digits are not
/// valid, which is fine because the registry treats CPFs as opaque text.
pub fn unique_cpf() -> String {
    let n = NEXT_CPF.fetch_add(1, Ordering::Relaxed);
    let body = n % 1_000_000_000;
    format!(
        "{:03}.{:03}.{:03}-{:02}",
        body / 1_000_000,
        (body / 1_000) % 1_000,
        body % 1_000,
        n % 100
    )
}
