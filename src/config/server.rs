/// HTTP server configuration constants.
///
/// Log verbosity is not configured here: `env_logger` reads it from `RUST_LOG`.
pub const BIND_HOST: &str = "127.0.0.1";

/// Port the HTTP/WebSocket server listens on.
pub const BIND_PORT: u16 = 8080;

/// Maximum accepted length of a login passed on the websocket endpoint.
pub const MAX_LOGIN_LEN: usize = 64;
