use thiserror::Error;

use super::types::{SessionId, UserProfile};

/// Broken invariants of the queue/registry pair.
///
/// None of these can be caused by a client: they only surface when the locking around
/// pairing or teardown is wrong, and callers treat them as fatal.
#[derive(Debug, Error)]
pub enum MechanicsError {
    #[error("player {0} cannot be paired with themself")]
    SelfPairing(UserProfile),
    #[error("player {user} is already registered in session {session}")]
    AlreadyRegistered { user: UserProfile, session: SessionId },
    #[error("session {0} is registered twice")]
    DuplicateSession(SessionId),
}
