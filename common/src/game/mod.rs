mod board;
mod bot_controller;
mod game_state;
mod session_rng;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board};
pub use bot_controller::calculate_random_move;
pub use game_state::GameSession;
pub use session_rng::SessionRng;
pub use types::{GameMode, GameStatus, Mark};
pub use win_detector::{check_win, has_win, is_draw};
