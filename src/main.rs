//! Main entry point for the backend server.
//!
//! Initializes logging, builds the shared mechanics state, and launches the HTTP server
//! with the player WebSocket endpoint.

use actix_web::{web, App, HttpServer};
use log::info;

use config::server::{BIND_HOST, BIND_PORT};
use server::state::AppState;

pub mod config;
mod server;
mod game;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(AppState::new());

    info!("[Server] Listening on {}:{}", BIND_HOST, BIND_PORT);
    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind((BIND_HOST, BIND_PORT))?
    .run()
    .await
}
