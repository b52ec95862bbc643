use super::board::{BOARD_SIZE, Board};
use super::types::{GameMode, GameStatus, Mark};
use super::win_detector::{check_win, is_draw};

#[derive(Debug)]
pub struct GameSession {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub mode: GameMode,
}

impl GameSession {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            mode,
        }
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn place_mark(&mut self, row: i32, col: i32) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if row < 0 || col < 0 || row as usize >= BOARD_SIZE || col as usize >= BOARD_SIZE {
            return Err("Position out of bounds".to_string());
        }
        let (row, col) = (row as usize, col as usize);

        if !self.board.is_valid_move(row, col) {
            return Err("Cell is already marked".to_string());
        }

        self.board.set(row, col, self.current_mark);
        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }

    fn check_game_over(&mut self) {
        if let Some(winner) = check_win(&self.board) {
            self.status = match winner {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if is_draw(&self.board) {
            self.status = GameStatus::Draw;
        }
    }
}
