//! Builds notification payloads for a session and hands them to the [`RemotePoint`].

use log::debug;
use std::sync::Arc;

use crate::server::mechanics::session::{GameSession, Player};
use crate::server::mechanics::types::UserProfile;
use crate::server::messaging::messages::{GameOverSnap, ServerMessage, ServerSnap};
use crate::server::messaging::remote_point::RemotePoint;

#[derive(Clone)]
pub struct ServerSnapService {
    remote_point: Arc<dyn RemotePoint>,
}

impl ServerSnapService {
    pub fn new(remote_point: Arc<dyn RemotePoint>) -> Self {
        Self { remote_point }
    }

    fn send(&self, user: &UserProfile, message: ServerMessage) {
        if !self.remote_point.is_connected(user) {
            debug!("[Snaps] {} looks disconnected, sending anyway", user);
        }
        self.remote_point.send_message_to_user(user, message);
    }

    /// One `Joined` message per participant, each naming the recipient's opponent and mark.
    pub fn send_join_snaps(&self, session: &GameSession) {
        for player in session.players() {
            let opponent = session
                .opponent_of(&player.user)
                .map(|p| p.user.login.clone())
                .unwrap_or_default();
            self.send(&player.user, ServerMessage::Joined {
                session_id: session.id(),
                player: player.user.login.clone(),
                opponent,
                mark: player.mark,
            });
        }
    }

    /// Broadcast the current board to both participants, whoever acted.
    pub fn send_state_snaps(&self, session: &GameSession) {
        let snap = ServerSnap::from_state(session.id(), session.state());
        for player in session.players() {
            self.send(&player.user, ServerMessage::StateUpdate(snap.clone()));
        }
    }

    /// Tell the participant who stayed that `leaver` is gone.
    pub fn send_opponent_left(&self, session: &GameSession, leaver: &UserProfile) {
        if let Some(survivor) = session.opponent_of(leaver) {
            self.send(&survivor.user, ServerMessage::OpponentLeft {
                player: survivor.user.login.clone(),
                opponent: leaver.login.clone(),
            });
        }
    }

    /// Each participant learns their own login and whether they won. `None` is a draw.
    pub fn send_game_over_snaps(&self, session: &GameSession, winner: Option<&Player>) {
        for player in session.players() {
            let win = winner.is_some_and(|w| w.user == player.user);
            self.send(&player.user, ServerMessage::GameOver(GameOverSnap {
                player: player.user.login.clone(),
                win,
            }));
        }
    }
}
