//! Test doubles for the delivery boundary.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::server::mechanics::types::UserProfile;
use crate::server::messaging::messages::ServerMessage;
use crate::server::messaging::remote_point::RemotePoint;

/// Records every message instead of delivering it. Everyone counts as connected.
#[derive(Default)]
pub struct RecordingRemotePoint {
    messages: Mutex<HashMap<UserProfile, Vec<ServerMessage>>>,
}

impl RecordingRemotePoint {
    pub fn messages_for(&self, user: &UserProfile) -> Vec<ServerMessage> {
        self.messages.lock().unwrap().get(user).cloned().unwrap_or_default()
    }

    pub fn total(&self) -> usize {
        self.messages.lock().unwrap().values().map(Vec::len).sum()
    }

    pub fn count_where(&self, pred: impl Fn(&ServerMessage) -> bool) -> usize {
        self.messages.lock().unwrap().values().flatten().filter(|m| pred(*m)).count()
    }

    pub fn clear(&self) {
        self.messages.lock().unwrap().clear();
    }
}

impl RemotePoint for RecordingRemotePoint {
    fn send_message_to_user(&self, user: &UserProfile, message: ServerMessage) {
        self.messages.lock().unwrap().entry(user.clone()).or_default().push(message);
    }

    fn is_connected(&self, _user: &UserProfile) -> bool {
        true
    }
}
