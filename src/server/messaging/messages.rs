use actix::prelude::*;
use serde::{Serialize, Deserialize};

use crate::game::state::{GameState, PlayerAction};
use crate::game::types::{Cell, Mark};
use crate::server::mechanics::types::SessionId;

// Message client -> serveur
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "action", content = "data")]
pub enum ClientWsMessage {
    FindGame,
    Action(PlayerAction),
    Ping,
}

/// Board snapshot broadcast to both participants after every applied action.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ServerSnap {
    pub session_id: SessionId,
    pub board: Vec<Vec<Cell>>,
    pub next: Mark,
    pub moves: u32,
}

impl ServerSnap {
    pub fn from_state(session_id: SessionId, state: &GameState) -> Self {
        Self {
            session_id,
            board: state.board.clone(),
            next: state.next,
            moves: state.moves,
        }
    }
}

/// Final result, addressed to one recipient: `player` is always the recipient's own login.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GameOverSnap {
    pub player: String,
    pub win: bool,
}

// Message serveur -> client
#[derive(Message, Serialize, Deserialize, Clone, Debug)]
#[rtype(result = "()")]
#[serde(tag = "type", content = "content")]
pub enum ServerMessage {
    Joined {
        session_id: SessionId,
        player: String,
        opponent: String,
        mark: Mark,
    },
    StateUpdate(ServerSnap),
    OpponentLeft {
        player: String,
        opponent: String,
    },
    GameOver(GameOverSnap),
}

impl ServerMessage {
    /// Whether this message ends the recipient's current game.
    pub fn ends_game(&self) -> bool {
        matches!(self, ServerMessage::OpponentLeft { .. } | ServerMessage::GameOver(_))
    }
}
