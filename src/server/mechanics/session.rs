//! Game session model: two players in a fixed order plus the shared board.

use serde::Serialize;
use uuid::Uuid;

use crate::config::game::BOARD_SIZE;
use crate::game::state::{GameState, PlayerAction};
use crate::game::types::{ActionOutcome, Mark};
use super::error::MechanicsError;
use super::types::{SessionId, UserProfile};

/// A participant of one session. Owned by that session and dropped with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub user: UserProfile,
    pub mark: Mark,
}

impl Player {
    pub fn new(user: UserProfile, mark: Mark) -> Self {
        Self { user, mark }
    }
}

/// Two distinct players and their game.
///
/// `first` is the player who queued earlier; it plays `X`. The pair never changes after
/// construction, so either participant can always locate the other.
#[derive(Debug)]
pub struct GameSession {
    id: SessionId,
    first: Player,
    second: Player,
    state: GameState,
    over: bool,
}

impl GameSession {
    pub fn new(first: UserProfile, second: UserProfile) -> Result<Self, MechanicsError> {
        if first == second {
            return Err(MechanicsError::SelfPairing(first));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            first: Player::new(first, Mark::X),
            second: Player::new(second, Mark::O),
            state: GameState::new(BOARD_SIZE),
            over: false,
        })
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn first(&self) -> &Player {
        &self.first
    }

    pub fn second(&self) -> &Player {
        &self.second
    }

    pub fn players(&self) -> [&Player; 2] {
        [&self.first, &self.second]
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn player_of(&self, user: &UserProfile) -> Option<&Player> {
        self.players().into_iter().find(|p| &p.user == user)
    }

    /// The other participant, if `user` belongs to this session.
    pub fn opponent_of(&self, user: &UserProfile) -> Option<&Player> {
        if &self.first.user == user {
            Some(&self.second)
        } else if &self.second.user == user {
            Some(&self.first)
        } else {
            None
        }
    }

    pub fn player_with_mark(&self, mark: Mark) -> &Player {
        if self.first.mark == mark { &self.first } else { &self.second }
    }

    /// Apply `action` for `user`. Actions on a finished game or from a stranger are ignored.
    pub fn apply_action(&mut self, user: &UserProfile, action: &PlayerAction) -> ActionOutcome {
        if self.over {
            return ActionOutcome::Continue;
        }
        let Some(mark) = self.player_of(user).map(|p| p.mark) else {
            return ActionOutcome::Continue;
        };
        let outcome = self.state.apply_player_action(action, mark);
        if outcome.is_final() {
            self.over = true;
        }
        outcome
    }

    /// Mark the session as finished (e.g. after a disconnect teardown).
    pub fn finish(&mut self) {
        self.over = true;
    }
}
