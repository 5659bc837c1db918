use serde::{Serialize, Deserialize};
use uuid::Uuid;

/// Identity of a player, as handed over by the account layer.
///
/// Opaque to the mechanics: it is only compared, hashed and echoed back in notifications.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,
}

impl UserProfile {
    pub fn new(login: impl Into<String>) -> Self {
        Self { login: login.into() }
    }
}

impl std::fmt::Display for UserProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.login)
    }
}

pub type SessionId = Uuid;
