use serde::{Serialize, Deserialize};
use log::debug;

use crate::game::types::{ActionOutcome, Cell, Mark, Position};
use crate::game::rules::{is_board_full, winner_through};

/// A player's move. `cell: None` is a pass: it changes nothing but still counts as an action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAction {
    #[serde(default)]
    pub cell: Option<Position>,
}

impl PlayerAction {
    pub fn place(x: usize, y: usize) -> Self {
        Self { cell: Some(Position { x, y }) }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub board: Vec<Vec<Cell>>,
    pub next: Mark,
    pub moves: u32,
}

impl GameState {
    // Crée un plateau vide, X commence
    pub fn new(size: usize) -> Self {
        GameState {
            board: vec![vec![Cell::Empty; size]; size],
            next: Mark::X,
            moves: 0,
        }
    }

    /// Apply `action` on behalf of `mark`.
    ///
    /// Out-of-turn, out-of-bounds and occupied-cell moves are ignored and leave the board as is.
    pub fn apply_player_action(&mut self, action: &PlayerAction, mark: Mark) -> ActionOutcome {
        let Some(pos) = action.cell else {
            return ActionOutcome::Continue;
        };
        if mark != self.next {
            debug!("[Game] {:?} tried to play out of turn", mark);
            return ActionOutcome::Continue;
        }
        match self.board.get_mut(pos.y).and_then(|row| row.get_mut(pos.x)) {
            Some(cell) if *cell == Cell::Empty => *cell = Cell::Taken(mark),
            _ => {
                debug!("[Game] {:?} tried an invalid cell ({}, {})", mark, pos.x, pos.y);
                return ActionOutcome::Continue;
            }
        }
        self.moves += 1;
        self.next = mark.other();

        if let Some(winner) = winner_through(&self.board, pos) {
            ActionOutcome::Won(winner)
        } else if is_board_full(&self.board) {
            ActionOutcome::Draw
        } else {
            ActionOutcome::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_changes_nothing() {
        let mut state = GameState::new(3);
        assert_eq!(state.apply_player_action(&PlayerAction::default(), Mark::X), ActionOutcome::Continue);
        assert_eq!(state.moves, 0);
        assert_eq!(state.next, Mark::X);
    }

    #[test]
    fn test_out_of_turn_is_ignored() {
        let mut state = GameState::new(3);
        state.apply_player_action(&PlayerAction::place(0, 0), Mark::O);
        assert_eq!(state.board[0][0], Cell::Empty);
        assert_eq!(state.moves, 0);
    }

    #[test]
    fn test_occupied_and_out_of_bounds_are_ignored() {
        let mut state = GameState::new(3);
        state.apply_player_action(&PlayerAction::place(1, 1), Mark::X);
        state.apply_player_action(&PlayerAction::place(1, 1), Mark::O);
        state.apply_player_action(&PlayerAction::place(5, 0), Mark::O);
        assert_eq!(state.board[1][1], Cell::Taken(Mark::X));
        assert_eq!(state.next, Mark::O);
        assert_eq!(state.moves, 1);
    }

    #[test]
    fn test_column_win() {
        let mut state = GameState::new(3);
        let moves = [(0, 0, Mark::X), (1, 0, Mark::O), (0, 1, Mark::X), (1, 1, Mark::O)];
        for (x, y, mark) in moves {
            assert_eq!(state.apply_player_action(&PlayerAction::place(x, y), mark), ActionOutcome::Continue);
        }
        assert_eq!(state.apply_player_action(&PlayerAction::place(0, 2), Mark::X), ActionOutcome::Won(Mark::X));
    }

    #[test]
    fn test_draw() {
        // X O X
        // X O O
        // O X X
        let mut state = GameState::new(3);
        let moves = [
            (0, 0), (1, 0), (2, 0), (1, 1), (0, 1),
            (2, 1), (1, 2), (0, 2), (2, 2),
        ];
        let mut last = ActionOutcome::Continue;
        for (i, (x, y)) in moves.into_iter().enumerate() {
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            last = state.apply_player_action(&PlayerAction::place(x, y), mark);
        }
        assert_eq!(last, ActionOutcome::Draw);
    }
}
