#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn to_cell(self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    pub fn win_message(self) -> Option<&'static str> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::XWon => Some("Player X wins!"),
            GameStatus::OWon => Some("Player O wins!"),
            GameStatus::Draw => Some("It's a draw!"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    PlayerVsPlayer,
    PlayerVsAi,
    AiVsAi,
}

impl GameMode {
    pub fn from_index(index: i32) -> Result<GameMode, String> {
        match index {
            0 => Ok(GameMode::PlayerVsPlayer),
            1 => Ok(GameMode::PlayerVsAi),
            2 => Ok(GameMode::AiVsAi),
            other => Err(format!("Unknown game mode index {}", other)),
        }
    }

    pub fn index(self) -> i32 {
        match self {
            GameMode::PlayerVsPlayer => 0,
            GameMode::PlayerVsAi => 1,
            GameMode::AiVsAi => 2,
        }
    }
}
