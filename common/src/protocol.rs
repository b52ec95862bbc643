use serde::{Deserialize, Serialize};

use crate::game::BOARD_SIZE;

// Inbound command record, one JSON object per line. Integer fields are taken
// as-is from the wire; range validation belongs to the move resolver, so an
// out-of-bounds row is an invalid move, not a malformed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum Command {
    #[serde(rename = "MOVE")]
    Move { row: i32, col: i32 },
    #[serde(rename = "RESET")]
    Reset,
    #[serde(rename = "MODE")]
    Mode { mode: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundMessage {
    Info { message: String },
    Error { message: String },
    Board { board: [[char; BOARD_SIZE]; BOARD_SIZE] },
    WinStatus { message: String },
    GameStatus { message: String },
    GameMode { message: String },
}

impl OutboundMessage {
    pub fn info(message: &str) -> Self {
        OutboundMessage::Info {
            message: message.to_string(),
        }
    }

    pub fn error(message: &str) -> Self {
        OutboundMessage::Error {
            message: message.to_string(),
        }
    }

    pub fn board(board: [[char; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        OutboundMessage::Board { board }
    }

    pub fn win_status(message: &str) -> Self {
        OutboundMessage::WinStatus {
            message: message.to_string(),
        }
    }

    pub fn game_status(message: &str) -> Self {
        OutboundMessage::GameStatus {
            message: message.to_string(),
        }
    }

    pub fn game_mode(message: &str) -> Self {
        OutboundMessage::GameMode {
            message: message.to_string(),
        }
    }
}

pub fn decode_command(line: &str) -> Result<Command, serde_json::Error> {
    serde_json::from_str(line.trim())
}

pub fn encode_command(command: &Command) -> Result<String, serde_json::Error> {
    serde_json::to_string(command)
}

pub fn decode_message(line: &str) -> Result<OutboundMessage, serde_json::Error> {
    serde_json::from_str(line.trim())
}

pub fn encode_message(message: &OutboundMessage) -> Result<String, serde_json::Error> {
    serde_json::to_string(message)
}
