use common::game::{GameMode, GameSession, Mark, SessionRng, calculate_random_move};
use common::log;
use common::protocol::OutboundMessage;

pub struct GameController {
    session: GameSession,
    rng: SessionRng,
    autoplay: bool,
}

impl GameController {
    pub fn new(mode: GameMode, rng: SessionRng) -> Self {
        Self {
            session: GameSession::new(mode),
            rng,
            autoplay: false,
        }
    }

    pub fn handle_move(&mut self, row: i32, col: i32) -> Vec<OutboundMessage> {
        match self.session.mode {
            GameMode::PlayerVsPlayer => match self.apply_move(row, col) {
                Ok(messages) => messages,
                Err(reason) => reject_move(row, col, &reason),
            },
            GameMode::PlayerVsAi => match self.apply_move(row, col) {
                Ok(mut messages) => {
                    // The human is always X; answer a live game with the
                    // bot's countermove for O before yielding the turn.
                    if !self.session.is_over() && self.session.current_mark == Mark::O {
                        messages.extend(self.bot_move());
                    }
                    messages
                }
                Err(reason) => reject_move(row, col, &reason),
            },
            GameMode::AiVsAi => {
                reject_move(row, col, "session plays itself in AI vs AI mode")
            }
        }
    }

    pub fn handle_reset(&mut self) -> Vec<OutboundMessage> {
        self.session.reset();
        self.autoplay = false;
        vec![
            OutboundMessage::game_status("Game reset."),
            OutboundMessage::board(self.session.board.to_cells()),
        ]
    }

    pub fn handle_set_mode(&mut self, index: i32) -> Vec<OutboundMessage> {
        let mode = match GameMode::from_index(index) {
            Ok(mode) => mode,
            Err(reason) => {
                log!("Rejected MODE {}: {}", index, reason);
                return vec![OutboundMessage::error("Invalid mode.")];
            }
        };

        self.session.set_mode(mode);
        self.autoplay = mode == GameMode::AiVsAi;
        log!("Game mode set to {:?}", mode);

        vec![
            OutboundMessage::game_mode(&format!("Game mode set to {}", index)),
            OutboundMessage::game_status("Game reset."),
            OutboundMessage::board(self.session.board.to_cells()),
        ]
    }

    pub fn autoplay_pending(&self) -> bool {
        self.autoplay && !self.session.is_over()
    }

    // One bot move of an armed AI-vs-AI match. The transport loop calls this
    // once per idle poll, so inbound commands stay responsive mid-match.
    pub fn step_autoplay(&mut self) -> Vec<OutboundMessage> {
        if !self.autoplay_pending() {
            return Vec::new();
        }

        let messages = self.bot_move();
        if self.session.is_over() {
            self.autoplay = false;
        }
        messages
    }

    fn apply_move(&mut self, row: i32, col: i32) -> Result<Vec<OutboundMessage>, String> {
        self.session.place_mark(row, col)?;
        Ok(self.state_messages())
    }

    fn bot_move(&mut self) -> Vec<OutboundMessage> {
        let Some((row, col)) = calculate_random_move(&self.session.board, &mut self.rng) else {
            log!("Bot move requested with no empty cells left");
            self.autoplay = false;
            return Vec::new();
        };

        match self.session.place_mark(row as i32, col as i32) {
            Ok(()) => self.state_messages(),
            Err(reason) => {
                log!("Bot failed to place mark at ({}, {}): {}", row, col, reason);
                Vec::new()
            }
        }
    }

    // Board snapshot after every applied move; the terminal message follows
    // the board so clients repaint before announcing the outcome.
    fn state_messages(&self) -> Vec<OutboundMessage> {
        let mut messages = vec![OutboundMessage::board(self.session.board.to_cells())];
        if let Some(text) = self.session.status.win_message() {
            messages.push(OutboundMessage::win_status(text));
        }
        messages
    }
}

fn reject_move(row: i32, col: i32, reason: &str) -> Vec<OutboundMessage> {
    log!("Rejected MOVE ({}, {}): {}", row, col, reason);
    vec![OutboundMessage::error("Invalid move.")]
}
