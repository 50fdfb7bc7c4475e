//! Authoritative in-memory state: the team registry and its derived
//! dashboard views.

pub mod registry;
pub mod snapshot;

#[cfg(test)]
mod tests_props_registry;
#[cfg(test)]
mod tests_snapshot;

pub use registry::{Registration, TeamRegistry};
pub use snapshot::{snapshot, DashboardSnapshot};
