/// Mechanics module: matchmaking queue, session registry, and the service tying them together.

pub mod types;
pub mod error;
pub mod queue;
pub mod session;
pub mod registry;
pub mod service;

#[cfg(test)]
pub mod testing;

pub use service::GameMechService;
