use std::io::{BufRead, BufReader, Read, Write};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use common::log;
use common::protocol::{OutboundMessage, encode_message};

pub enum Poll {
    Line(String),
    Empty,
    Closed,
}

// Complete lines from the serial channel, fed by a dedicated reader thread
// so the control loop can poll without blocking while autoplay is armed.
pub struct LineReceiver {
    rx: Receiver<String>,
}

impl LineReceiver {
    pub fn spawn<R: Read + Send + 'static>(input: R) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let reader = BufReader::new(input);
            for line in reader.lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        log!("Serial read error: {}", e);
                        break;
                    }
                };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        Self { rx }
    }

    // Blocks until the next line; None once the channel is closed.
    pub fn next_line(&self) -> Option<String> {
        self.rx.recv().ok()
    }

    pub fn try_next_line(&self) -> Poll {
        match self.rx.try_recv() {
            Ok(line) => Poll::Line(line),
            Err(TryRecvError::Empty) => Poll::Empty,
            Err(TryRecvError::Disconnected) => Poll::Closed,
        }
    }
}

pub struct MessageWriter<W: Write> {
    writer: W,
}

impl<W: Write> MessageWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write(&mut self, message: &OutboundMessage) -> std::io::Result<()> {
        let line = encode_message(message).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::time::Duration;

    #[test]
    fn test_receiver_delivers_lines_then_closes() {
        let receiver = LineReceiver::spawn(Cursor::new("first\nsecond\n"));
        assert_eq!(receiver.next_line(), Some("first".to_string()));
        assert_eq!(receiver.next_line(), Some("second".to_string()));
        assert_eq!(receiver.next_line(), None);
        assert!(matches!(receiver.try_next_line(), Poll::Closed));
    }

    #[test]
    fn test_try_next_line_reports_closed_after_eof() {
        let receiver = LineReceiver::spawn(Cursor::new(""));
        // Give the reader thread time to hit EOF and drop the sender.
        std::thread::sleep(Duration::from_millis(50));
        assert!(matches!(receiver.try_next_line(), Poll::Closed));
    }

    #[test]
    fn test_writer_emits_one_json_line_per_message() {
        let mut writer = MessageWriter::new(Vec::new());
        writer.write(&OutboundMessage::info("Tic-Tac-Toe ready.")).unwrap();
        writer.write(&OutboundMessage::error("Invalid move.")).unwrap();

        let output = String::from_utf8(writer.writer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"type":"info","message":"Tic-Tac-Toe ready."}"#);
        assert_eq!(lines[1], r#"{"type":"error","message":"Invalid move."}"#);
    }
}
