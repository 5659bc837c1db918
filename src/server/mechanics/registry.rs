//! Who is playing, and with whom.
//!
//! Each active session is stored once and indexed by both of its players. Both index
//! entries are always inserted and removed together, so callers never observe half a
//! session. The registry itself is not synchronized; [`GameMechService`] owns it behind
//! the same lock as the queue.
//!
//! [`GameMechService`]: super::service::GameMechService

use serde::Serialize;
use std::collections::HashMap;

use super::error::MechanicsError;
use super::session::GameSession;
use super::types::{SessionId, UserProfile};

#[derive(Debug, Default)]
pub struct SessionRegistry {
    players: HashMap<UserProfile, SessionId>,
    sessions: HashMap<SessionId, GameSession>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `session` under both of its players.
    pub fn register_pair(&mut self, session: GameSession) -> Result<(), MechanicsError> {
        let id = session.id();
        if self.sessions.contains_key(&id) {
            return Err(MechanicsError::DuplicateSession(id));
        }
        for player in session.players() {
            if let Some(existing) = self.players.get(&player.user) {
                return Err(MechanicsError::AlreadyRegistered {
                    user: player.user.clone(),
                    session: *existing,
                });
            }
        }
        self.players.insert(session.first().user.clone(), id);
        self.players.insert(session.second().user.clone(), id);
        self.sessions.insert(id, session);
        Ok(())
    }

    /// Tear down the session `user` belongs to, removing both players' entries.
    ///
    /// Returns `None` if `user` is not registered, which is the case for the second of two
    /// racing teardowns of the same session.
    pub fn remove_player(&mut self, user: &UserProfile) -> Option<GameSession> {
        let id = self.players.remove(user)?;
        let session = self.sessions.remove(&id)?;
        if let Some(opponent) = session.opponent_of(user) {
            self.players.remove(&opponent.user);
        }
        Some(session)
    }

    pub fn session_of(&self, user: &UserProfile) -> Option<&GameSession> {
        self.players.get(user).and_then(|id| self.sessions.get(id))
    }

    pub fn session_of_mut(&mut self, user: &UserProfile) -> Option<&mut GameSession> {
        let id = self.players.get(user)?;
        self.sessions.get_mut(id)
    }

    pub fn contains(&self, user: &UserProfile) -> bool {
        self.players.contains_key(user)
    }

    /// Number of player entries (twice the number of sessions).
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            entries: self.players.iter().map(|(user, id)| (user.clone(), *id)).collect(),
            sessions: self
                .sessions
                .values()
                .map(|s| SessionView {
                    id: s.id(),
                    first: s.first().user.clone(),
                    second: s.second().user.clone(),
                })
                .collect(),
        }
    }
}

/// Read-only copy of the registry, for tests and operational views.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrySnapshot {
    pub entries: Vec<(UserProfile, SessionId)>,
    pub sessions: Vec<SessionView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub id: SessionId,
    pub first: UserProfile,
    pub second: UserProfile,
}

impl RegistrySnapshot {
    pub fn session(&self, id: SessionId) -> Option<&SessionView> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn session_of(&self, user: &UserProfile) -> Option<&SessionView> {
        self.entries
            .iter()
            .find(|(u, _)| u == user)
            .and_then(|(_, id)| self.session(*id))
    }
}
