use actix::ActorContext;
use actix_web_actors::ws;
use serde_json::Value;

use crate::server::anti_spam::AntiSpamState;
use crate::server::ws_error::ws_error_message;

/// Helpers shared by websocket actors that reply directly to their client.
pub trait WsActorUtils {
    fn anti_spam(&mut self) -> &mut AntiSpamState;
    fn login(&self) -> &str;

    /// Send a ban notice, close and stop the actor.
    fn send_ban_and_close<A>(&mut self, ctx: &mut ws::WebsocketContext<A>)
    where
        A: actix::Actor<Context = ws::WebsocketContext<A>>,
    {
        let ban_remaining_secs = self.anti_spam().ban_remaining_secs();
        let context = serde_json::json!({
            "login": self.login(),
            "ban_remaining_secs": ban_remaining_secs,
        });
        ctx.text(ws_error_message(
            "BANNED",
            "You have been banned for spamming. Please try again later.",
            Some(context),
        ));
        ctx.close(Some(ws::CloseReason {
            code: ws::CloseCode::Policy,
            description: Some("Banned for spam".into()),
        }));
        ctx.stop();
    }

    /// Send an error unless it repeats the previous one; ban if the reply budget is exceeded.
    fn send_error_and_maybe_ban<A>(
        &mut self,
        ctx: &mut ws::WebsocketContext<A>,
        code: &str,
        message: &str,
        context: Option<Value>,
    )
    where
        A: actix::Actor<Context = ws::WebsocketContext<A>>,
    {
        let login = self.login().to_string();
        if self.anti_spam().should_send_error(code, &login) {
            if self.anti_spam().record_response(&login) {
                self.send_ban_and_close(ctx);
                return;
            }
            ctx.text(ws_error_message(code, message, context));
        }
    }

    /// Send a JSON reply, or ban if the reply budget is exceeded.
    fn send_json_or_ban<A>(&mut self, ctx: &mut ws::WebsocketContext<A>, json_str: String)
    where
        A: actix::Actor<Context = ws::WebsocketContext<A>>,
    {
        let login = self.login().to_string();
        if self.anti_spam().record_response(&login) {
            self.send_ban_and_close(ctx);
            return;
        }
        ctx.text(json_str);
    }
}
