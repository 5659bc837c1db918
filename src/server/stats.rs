//! Operational counters, read from the mechanics' snapshot interface.

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::server::mechanics::service::MechanicsStats;
use crate::server::state::AppState;

#[derive(Serialize)]
struct StatsResponse {
    #[serde(flatten)]
    mechanics: MechanicsStats,
    connected: usize,
}

pub async fn stats(data: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(StatsResponse {
        mechanics: data.mechanics.stats(),
        connected: data.remote_point.connected_count(),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use serde_json::Value;

    use crate::server::mechanics::types::UserProfile;
    use crate::server::state::AppState;

    #[actix_web::test]
    async fn test_stats_endpoint() {
        let state = web::Data::new(AppState::new());
        state.mechanics.add_player(UserProfile::new("a"));
        state.mechanics.add_player(UserProfile::new("b"));
        state.mechanics.add_player(UserProfile::new("c"));

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(crate::server::router::config),
        )
        .await;
        let req = test::TestRequest::get().uri("/stats").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["queued"], 1);
        assert_eq!(body["registered_players"], 2);
        assert_eq!(body["active_sessions"], 1);
        assert_eq!(body["connected"], 0);
    }

    #[actix_web::test]
    async fn test_ws_requires_login() {
        let state = web::Data::new(AppState::new());
        let app = test::init_service(
            App::new()
                .app_data(state)
                .configure(crate::server::router::config),
        )
        .await;
        let req = test::TestRequest::get().uri("/ws/game").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
