// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the mechanics service and the remote point it delivers through.
//! Used to share state between HTTP/WebSocket handlers.

use std::sync::Arc;

use crate::server::mechanics::GameMechService;
use crate::server::messaging::remote_point::RemotePointService;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    pub mechanics: Arc<GameMechService>,
    /// Live player sockets; also the mechanics' delivery target.
    pub remote_point: Arc<RemotePointService>,
}

impl AppState {
    pub fn new() -> Self {
        let remote_point = Arc::new(RemotePointService::new());
        let mechanics = Arc::new(GameMechService::new(remote_point.clone()));
        AppState {
            mechanics,
            remote_point,
        }
    }
}
