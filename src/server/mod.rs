// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the main backend server components, including:
//! - Application state management
//! - HTTP/WebSocket routing
//! - Game mechanics (matchmaking queue, session registry, action routing, disconnects)
//! - Messaging (notification payloads and delivery to connected players)

pub mod state;
pub mod router;
pub mod mechanics;
pub mod messaging;
pub mod socket;
pub mod stats;
pub mod anti_spam;
pub mod ws_actor_utils;
pub mod ws_error;
