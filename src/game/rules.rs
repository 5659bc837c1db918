use crate::config::game::WIN_LENGTH;
use crate::game::types::{Cell, Mark, Position};

/// Returns the mark owning a full line through `last`, if any.
///
/// Only lines passing through the last placed mark can have been completed by it,
/// so the whole board does not need to be scanned.
pub fn winner_through(board: &[Vec<Cell>], last: Position) -> Option<Mark> {
    let mark = match board.get(last.y)?.get(last.x)? {
        Cell::Taken(mark) => *mark,
        Cell::Empty => return None,
    };

    const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];
    DIRECTIONS
        .iter()
        .any(|&(dx, dy)| {
            1 + run_length(board, last, mark, dx, dy) + run_length(board, last, mark, -dx, -dy)
                >= WIN_LENGTH
        })
        .then_some(mark)
}

/// Number of consecutive `mark` cells starting next to `from` in direction (dx, dy).
fn run_length(board: &[Vec<Cell>], from: Position, mark: Mark, dx: isize, dy: isize) -> usize {
    let mut count = 0;
    let (mut x, mut y) = (from.x as isize, from.y as isize);
    loop {
        x += dx;
        y += dy;
        if x < 0 || y < 0 {
            return count;
        }
        match board.get(y as usize).and_then(|row| row.get(x as usize)) {
            Some(Cell::Taken(m)) if *m == mark => count += 1,
            _ => return count,
        }
    }
}

pub fn is_board_full(board: &[Vec<Cell>]) -> bool {
    board.iter().flatten().all(|cell| *cell != Cell::Empty)
}
