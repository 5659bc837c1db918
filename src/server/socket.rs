/// WebSocket session handler for a player.
///
/// This actor owns one client connection. It registers itself with the [`RemotePointService`]
/// so the mechanics can reach it, forwards `FindGame` and `Action` messages to the
/// [`GameMechService`], and reports a disconnect when the connection stops.
use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse, http::StatusCode};
use actix_web_actors::ws;
use log::{debug, error, info};
use std::borrow::Cow;
use std::sync::Arc;

use crate::config::server::MAX_LOGIN_LEN;
use crate::server::anti_spam::AntiSpamState;
use crate::server::mechanics::GameMechService;
use crate::server::mechanics::types::UserProfile;
use crate::server::messaging::messages::{ClientWsMessage, ServerMessage};
use crate::server::messaging::remote_point::{RemotePoint, RemotePointService};
use crate::server::state::AppState;
use crate::server::ws_actor_utils::WsActorUtils;
use crate::server::ws_error::{http_error_response, ws_error_message};

pub struct PlayerSocket {
    pub user: UserProfile,
    mechanics: Arc<GameMechService>,
    remote_point: Arc<RemotePointService>,
    anti_spam: AntiSpamState,
    /// Set once the remote point accepted this socket; only then does stopping count as a disconnect.
    registered: bool,
    /// Queued or playing. `FindGame` is refused until the current game ends.
    in_game: bool,
}

impl PlayerSocket {
    pub fn new(
        user: UserProfile,
        mechanics: Arc<GameMechService>,
        remote_point: Arc<RemotePointService>,
    ) -> Self {
        Self {
            user,
            mechanics,
            remote_point,
            anti_spam: AntiSpamState::new(),
            registered: false,
            in_game: false,
        }
    }

    fn handle_client_message(&mut self, msg: ClientWsMessage, ctx: &mut ws::WebsocketContext<Self>) {
        match msg {
            ClientWsMessage::FindGame => {
                if self.in_game {
                    self.send_error_and_maybe_ban(
                        ctx,
                        "ALREADY_IN_GAME",
                        "You are already searching or playing.",
                        None,
                    );
                    return;
                }
                self.in_game = true;
                self.anti_spam.reset_on_valid_action();
                self.mechanics.add_player(self.user.clone());
            }
            ClientWsMessage::Action(action) => {
                self.mechanics.add_player_action(&self.user, action);
            }
            ClientWsMessage::Ping => {
                self.send_json_or_ban(ctx, r#"{"type":"Pong"}"#.to_string());
            }
        }
    }
}

impl WsActorUtils for PlayerSocket {
    fn anti_spam(&mut self) -> &mut AntiSpamState {
        &mut self.anti_spam
    }

    fn login(&self) -> &str {
        &self.user.login
    }
}

impl Actor for PlayerSocket {
    type Context = ws::WebsocketContext<Self>;

    /// Makes the socket reachable for notifications, or refuses a second socket for the same login.
    fn started(&mut self, ctx: &mut Self::Context) {
        if !self.remote_point.register(self.user.clone(), ctx.address()) {
            ctx.text(ws_error_message(
                "ALREADY_CONNECTED",
                "Another session is already connected with this login.",
                None,
            ));
            ctx.close(Some(ws::CloseReason {
                code: ws::CloseCode::Policy,
                description: Some("Already connected".into()),
            }));
            ctx.stop();
            return;
        }
        self.registered = true;
        info!("[PlayerSocket] {} connected", self.user);
    }

    fn stopped(&mut self, ctx: &mut Self::Context) {
        if !self.registered {
            return;
        }
        self.remote_point.unregister(&self.user, &ctx.address());
        self.mechanics.handle_disconnect(&self.user);
        info!("[PlayerSocket] {} disconnected", self.user);
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for PlayerSocket {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => {
                if self.anti_spam.record_request(&self.user.login) {
                    self.send_ban_and_close(ctx);
                    return;
                }
                match serde_json::from_str::<ClientWsMessage>(&text) {
                    Ok(msg) => self.handle_client_message(msg, ctx),
                    Err(e) => {
                        debug!("[PlayerSocket] Invalid message from {}: {}", self.user, e);
                        self.send_error_and_maybe_ban(ctx, "INVALID_MESSAGE", "Invalid client message", None);
                    }
                }
            }
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Err(e) => {
                debug!("[PlayerSocket] Protocol error for {}: {}", self.user, e);
                ctx.stop();
            }
            _ => (),
        }
    }
}

impl Handler<ServerMessage> for PlayerSocket {
    type Result = ();

    /// Forwards a notification from the mechanics to the client.
    fn handle(&mut self, msg: ServerMessage, ctx: &mut Self::Context) {
        if msg.ends_game() {
            self.in_game = false;
        }
        match serde_json::to_string(&msg) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                error!("[PlayerSocket] Failed to serialize ServerMessage: {}", e);
                ctx.text(ws_error_message("INTERNAL_ERROR", "Internal server error", None));
            }
        }
    }
}

/// Extracts and decodes the `login` query parameter.
fn login_from_query(query: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|kv| kv.split_once('='))
        .find(|(key, _)| *key == "login")
        .map(|(_, value)| {
            urlencoding::decode(value)
                .unwrap_or(Cow::Borrowed(""))
                .trim()
                .to_string()
        })
        .filter(|login| !login.is_empty())
}

/// WebSocket endpoint for players.
///
/// Expects the `login` query parameter, as authenticated by the account layer.
pub async fn ws_game(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let Some(login) = login_from_query(req.query_string()) else {
        return Ok(http_error_response(
            "MISSING_LOGIN",
            "Missing login",
            None,
            StatusCode::BAD_REQUEST,
        ));
    };
    if login.chars().count() > MAX_LOGIN_LEN {
        return Ok(http_error_response(
            "INVALID_LOGIN",
            "Login is too long",
            Some(serde_json::json!({ "max_len": MAX_LOGIN_LEN })),
            StatusCode::BAD_REQUEST,
        ));
    }

    let user = UserProfile::new(login);
    if data.remote_point.is_connected(&user) {
        return Ok(http_error_response(
            "ALREADY_CONNECTED",
            "Another session is already connected with this login.",
            Some(serde_json::json!({ "login": user.login })),
            StatusCode::CONFLICT,
        ));
    }

    ws::start(
        PlayerSocket::new(user, data.mechanics.clone(), data.remote_point.clone()),
        &req,
        stream,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_from_query() {
        assert_eq!(login_from_query("login=alice"), Some("alice".to_string()));
        assert_eq!(login_from_query("x=1&login=bob%20smith"), Some("bob smith".to_string()));
        assert_eq!(login_from_query("login="), None);
        assert_eq!(login_from_query("user=alice"), None);
        assert_eq!(login_from_query(""), None);
    }
}
