//! Entity identity.
//!
//! Every team, player and match receives an opaque v4 UUID at creation.
//! Ids are unique for the process lifetime and never reused; removing an
//! entity does not free its id.

use uuid::Uuid;

pub type TeamId = Uuid;
pub type PlayerId = Uuid;
pub type MatchId = Uuid;

/// Mint a fresh entity id.
#[inline]
pub fn new_id() -> Uuid {
    Uuid::new_v4()
}
