use super::board::Board;
use super::session_rng::SessionRng;

// Uniform pick from the explicit list of empty cells; None on a full board.
pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<(usize, usize)> {
    let available = board.available_moves();
    if available.is_empty() {
        return None;
    }
    let index = rng.random_range(0..available.len());
    Some(available[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Mark;

    #[test]
    fn test_full_board_yields_no_move() {
        let board = Board::from_cells([
            ['X', 'O', 'X'],
            ['O', 'X', 'O'],
            ['X', 'O', 'X'],
        ]);
        let mut rng = SessionRng::new(1);
        assert_eq!(calculate_random_move(&board, &mut rng), None);
    }

    #[test]
    fn test_move_always_targets_an_empty_cell() {
        let mut board = Board::new();
        let mut rng = SessionRng::new(99);
        let mut mark = Mark::X;

        while let Some((row, col)) = calculate_random_move(&board, &mut rng) {
            assert!(board.is_valid_move(row, col));
            board.set(row, col, mark);
            mark = if mark == Mark::X { Mark::O } else { Mark::X };
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_single_empty_cell_is_forced() {
        let board = Board::from_cells([
            ['X', 'O', 'X'],
            ['O', ' ', 'O'],
            ['X', 'O', 'X'],
        ]);
        let mut rng = SessionRng::new(5);
        assert_eq!(calculate_random_move(&board, &mut rng), Some((1, 1)));
    }

    #[test]
    fn test_seeded_selection_is_reproducible() {
        let board = Board::new();
        let mut a = SessionRng::new(1234);
        let mut b = SessionRng::new(1234);
        for _ in 0..8 {
            assert_eq!(
                calculate_random_move(&board, &mut a),
                calculate_random_move(&board, &mut b)
            );
        }
    }
}
