use super::board::{BOARD_SIZE, Board};
use super::types::Mark;

/// Scans the 3 rows, 3 columns, and 2 diagonals for a complete line.
pub fn check_win(board: &Board) -> Option<Mark> {
    let cells = board.cells();

    for row in cells {
        if let Some(mark) = line_winner(row[0], row[1], row[2]) {
            return Some(mark);
        }
    }

    for col in 0..BOARD_SIZE {
        if let Some(mark) = line_winner(cells[0][col], cells[1][col], cells[2][col]) {
            return Some(mark);
        }
    }

    if let Some(mark) = line_winner(cells[0][0], cells[1][1], cells[2][2]) {
        return Some(mark);
    }

    line_winner(cells[0][2], cells[1][1], cells[2][0])
}

pub fn has_win(board: &Board, mark: Mark) -> bool {
    check_win(board) == Some(mark)
}

// Draw is board fullness only; callers must check for a win first.
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}

fn line_winner(a: Mark, b: Mark, c: Mark) -> Option<Mark> {
    if a != Mark::Empty && a == b && b == c {
        Some(a)
    } else {
        None
    }
}
