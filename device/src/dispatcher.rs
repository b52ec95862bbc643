use common::game::{GameMode, SessionRng};
use common::log;
use common::protocol::{Command, OutboundMessage, decode_command};

use crate::controller::GameController;

pub struct CommandDispatcher {
    controller: GameController,
}

impl CommandDispatcher {
    pub fn new(mode: GameMode, rng: SessionRng) -> Self {
        Self {
            controller: GameController::new(mode, rng),
        }
    }

    pub fn handle_line(&mut self, line: &str) -> Vec<OutboundMessage> {
        // Blank lines are serial noise, not commands.
        if line.trim().is_empty() {
            return Vec::new();
        }

        let command = match decode_command(line) {
            Ok(command) => command,
            Err(e) => {
                log!("Failed to decode command line {:?}: {}", line, e);
                return vec![OutboundMessage::error("Malformed command.")];
            }
        };

        match command {
            Command::Move { row, col } => self.controller.handle_move(row, col),
            Command::Reset => self.controller.handle_reset(),
            Command::Mode { mode } => self.controller.handle_set_mode(mode),
        }
    }

    pub fn autoplay_pending(&self) -> bool {
        self.controller.autoplay_pending()
    }

    pub fn step_autoplay(&mut self) -> Vec<OutboundMessage> {
        self.controller.step_autoplay()
    }
}
