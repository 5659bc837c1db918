//! HTTP and WebSocket routing configuration.
//!
//! Players connect on a single websocket endpoint; `/stats` exposes operational counters.

use actix_web::web;
use crate::server::socket::ws_game;
use crate::server::stats::stats;

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/ws/game")
            .route(web::get().to(ws_game))
    )
    .service(
        web::resource("/stats")
            .route(web::get().to(stats))
    );
}
