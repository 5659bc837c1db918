/// Game mechanics service.
///
/// Owns the matchmaking queue and the session registry and exposes the three operations the
/// transport layer drives: join the queue, submit an action, disconnect.
///
/// Queue and registry sit behind one mutex, so pairing (pop two, build a session, register
/// both players) and teardown (remove both entries) are each a single atomic step. Notifications
/// are dispatched while the lock is held: dispatch is a non-blocking hand-off to the
/// [`RemotePoint`], and doing it under the lock keeps every session's updates in the order its
/// actions were applied.

use log::{debug, error, info};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::game::state::PlayerAction;
use crate::game::types::ActionOutcome;
use crate::server::messaging::remote_point::RemotePoint;
use crate::server::messaging::snap_service::ServerSnapService;
use super::error::MechanicsError;
use super::queue::MatchmakingQueue;
use super::registry::{RegistrySnapshot, SessionRegistry};
use super::session::GameSession;
use super::types::UserProfile;

#[derive(Default)]
struct Mechanics {
    queue: MatchmakingQueue,
    registry: SessionRegistry,
}

pub struct GameMechService {
    mechanics: Mutex<Mechanics>,
    snaps: ServerSnapService,
}

/// Counters exposed on the stats endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MechanicsStats {
    pub queued: usize,
    pub registered_players: usize,
    pub active_sessions: usize,
}

impl GameMechService {
    pub fn new(remote_point: Arc<dyn RemotePoint>) -> Self {
        Self {
            mechanics: Mutex::new(Mechanics::default()),
            snaps: ServerSnapService::new(remote_point),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Mechanics> {
        // A poisoned lock means an invariant check already panicked and was logged.
        self.mechanics.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue `user` and pair as many waiting players as possible.
    ///
    /// The caller must not submit a user that is already queued or playing.
    pub fn add_player(&self, user: UserProfile) {
        let mut mechanics = self.lock();
        debug!("[Mechanics] {} queued", user);
        mechanics.queue.push(user);

        while let Some((first, second)) = mechanics.queue.pop_pair() {
            let session = GameSession::new(first, second).unwrap_or_else(|e| invariant_violated(e));
            info!(
                "[Mechanics] Session {} created: {} vs {}",
                session.id(),
                session.first().user,
                session.second().user
            );
            self.snaps.send_join_snaps(&session);
            if let Err(e) = mechanics.registry.register_pair(session) {
                invariant_violated(e);
            }
        }
    }

    /// Apply `action` to `user`'s game and broadcast the new board to both players.
    ///
    /// Dropped silently when `user` is not playing, e.g. the game ended just before the action
    /// arrived. A concluding action also tears the session down and sends the final result.
    pub fn add_player_action(&self, user: &UserProfile, action: PlayerAction) {
        let mut mechanics = self.lock();
        let Some(session) = mechanics.registry.session_of_mut(user) else {
            debug!("[Mechanics] Dropping action from {}: not in a game", user);
            return;
        };

        let outcome = session.apply_action(user, &action);
        self.snaps.send_state_snaps(session);
        if !outcome.is_final() {
            return;
        }

        if let Some(session) = mechanics.registry.remove_player(user) {
            let winner = match outcome {
                ActionOutcome::Won(mark) => Some(session.player_with_mark(mark)),
                _ => None,
            };
            info!(
                "[Mechanics] Session {} over, winner: {}",
                session.id(),
                winner.map_or("none".to_string(), |p| p.user.login.clone())
            );
            self.snaps.send_game_over_snaps(&session, winner);
        }
    }

    /// Remove `user` from the queue, or tear down their session and notify the opponent.
    ///
    /// Idempotent: a user that is neither queued nor playing (including the loser of a
    /// concurrent teardown of the same session) is a no-op.
    pub fn handle_disconnect(&self, user: &UserProfile) {
        let mut mechanics = self.lock();
        if mechanics.queue.remove(user) {
            debug!("[Mechanics] {} left the queue", user);
            return;
        }

        match mechanics.registry.remove_player(user) {
            Some(mut session) => {
                session.finish();
                info!("[Mechanics] {} disconnected, session {} torn down", user, session.id());
                self.snaps.send_opponent_left(&session, user);
            }
            None => debug!("[Mechanics] {} disconnected, nothing to tear down", user),
        }
    }

    pub fn queue_snapshot(&self) -> Vec<UserProfile> {
        self.lock().queue.snapshot()
    }

    pub fn registry_snapshot(&self) -> RegistrySnapshot {
        self.lock().registry.snapshot()
    }

    pub fn stats(&self) -> MechanicsStats {
        let mechanics = self.lock();
        MechanicsStats {
            queued: mechanics.queue.len(),
            registered_players: mechanics.registry.len(),
            active_sessions: mechanics.registry.session_count(),
        }
    }
}

fn invariant_violated(e: MechanicsError) -> ! {
    error!("[Mechanics] Invariant violated: {}", e);
    panic!("mechanics invariant violated: {e}");
}
