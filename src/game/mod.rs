//! Noughts-and-crosses game logic.
//!
//! Pure state and rules; knows nothing about players, sessions or transport.

pub mod types;
pub mod state;
pub mod rules;
