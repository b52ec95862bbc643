mod controller;
mod dispatcher;
mod transport;

use clap::Parser;
use common::game::{GameMode, SessionRng};
use common::log;
use common::logger;
use common::protocol::OutboundMessage;

use dispatcher::CommandDispatcher;
use transport::{LineReceiver, MessageWriter, Poll};

#[derive(Parser)]
#[command(name = "tictactoe_device")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Fixed RNG seed for reproducible AI matches.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Device".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session RNG seed: {}", rng.seed());

    let mut dispatcher = CommandDispatcher::new(GameMode::PlayerVsPlayer, rng);
    let receiver = LineReceiver::spawn(std::io::stdin());
    let mut writer = MessageWriter::new(std::io::stdout());

    writer.write(&OutboundMessage::info("Tic-Tac-Toe ready."))?;
    log!("Device ready, waiting for commands");

    loop {
        if dispatcher.autoplay_pending() {
            // One bot move per idle poll keeps RESET and MODE responsive
            // in the middle of an AI-vs-AI match.
            match receiver.try_next_line() {
                Poll::Line(line) => {
                    for message in dispatcher.handle_line(&line) {
                        writer.write(&message)?;
                    }
                }
                Poll::Empty => {
                    for message in dispatcher.step_autoplay() {
                        writer.write(&message)?;
                    }
                }
                Poll::Closed => {
                    while dispatcher.autoplay_pending() {
                        for message in dispatcher.step_autoplay() {
                            writer.write(&message)?;
                        }
                    }
                    break;
                }
            }
        } else {
            let Some(line) = receiver.next_line() else {
                break;
            };
            for message in dispatcher.handle_line(&line) {
                writer.write(&message)?;
            }
        }
    }

    log!("Serial channel closed, shutting down");
    Ok(())
}
