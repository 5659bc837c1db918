//! Delivery boundary between the mechanics and connected clients.
//!
//! The mechanics only ever see the [`RemotePoint`] trait. [`RemotePointService`] is the
//! websocket-backed implementation used by the server.

use actix::Addr;
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::server::mechanics::types::UserProfile;
use crate::server::messaging::messages::ServerMessage;
use crate::server::socket::PlayerSocket;

/// Fire-and-forget delivery of notifications to a player.
pub trait RemotePoint: Send + Sync {
    fn send_message_to_user(&self, user: &UserProfile, message: ServerMessage);

    /// Advisory only; sending to a disconnected user is allowed and silently dropped.
    fn is_connected(&self, user: &UserProfile) -> bool;
}

/// Live websocket actors, keyed by the login they authenticated with.
#[derive(Default)]
pub struct RemotePointService {
    sockets: Mutex<HashMap<UserProfile, Addr<PlayerSocket>>>,
}

impl RemotePointService {
    pub fn new() -> Self {
        Self::default()
    }

    fn sockets(&self) -> MutexGuard<'_, HashMap<UserProfile, Addr<PlayerSocket>>> {
        self.sockets.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a socket for `user`. Returns false (and keeps the existing one) if the user
    /// already has a live socket.
    pub fn register(&self, user: UserProfile, addr: Addr<PlayerSocket>) -> bool {
        let mut sockets = self.sockets();
        if let Some(existing) = sockets.get(&user) {
            if existing.connected() {
                warn!("[RemotePoint] {} already has a live socket, refusing the new one", user);
                return false;
            }
        }
        debug!("[RemotePoint] {} registered", user);
        sockets.insert(user, addr);
        true
    }

    /// Remove `user`'s socket, but only if it is still `addr`.
    pub fn unregister(&self, user: &UserProfile, addr: &Addr<PlayerSocket>) {
        let mut sockets = self.sockets();
        if sockets.get(user).is_some_and(|current| current == addr) {
            sockets.remove(user);
            debug!("[RemotePoint] {} unregistered", user);
        }
    }

    pub fn connected_count(&self) -> usize {
        self.sockets().len()
    }
}

impl RemotePoint for RemotePointService {
    fn send_message_to_user(&self, user: &UserProfile, message: ServerMessage) {
        match self.sockets().get(user) {
            Some(addr) => addr.do_send(message),
            None => debug!("[RemotePoint] Dropping message for disconnected user {}", user),
        }
    }

    fn is_connected(&self, user: &UserProfile) -> bool {
        self.sockets().get(user).is_some_and(Addr::connected)
    }
}
