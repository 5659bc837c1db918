/// Main configuration module.
/// 
/// Re-exports submodules for server, game and anti-spam configuration.
pub mod server;
pub mod game;
pub mod anti_spam;
