use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command as ProcessCommand, Stdio};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use common::log;
use common::protocol::{Command, OutboundMessage, decode_message, encode_command};

// The serial link stand-in: a launched device process with the JSON line
// protocol running over its piped stdin/stdout. Device stderr is inherited so
// its log stream stays visible in the client terminal.
pub struct DeviceLink {
    child: Child,
    stdin: ChildStdin,
    rx: Receiver<OutboundMessage>,
}

impl DeviceLink {
    pub fn launch(command_line: &str) -> Result<Self, String> {
        let mut parts = command_line.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| "Device command is empty".to_string())?;

        let mut child = ProcessCommand::new(program)
            .args(parts)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| format!("Failed to launch device: {}", e))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| "Device stdin unavailable".to_string())?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| "Device stdout unavailable".to_string())?;

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || read_device_output(stdout, tx));

        Ok(Self { child, stdin, rx })
    }

    pub fn send(&mut self, command: &Command) -> Result<(), String> {
        let line = encode_command(command).map_err(|e| e.to_string())?;
        writeln!(self.stdin, "{}", line).map_err(|e| format!("Device write failed: {}", e))?;
        self.stdin
            .flush()
            .map_err(|e| format!("Device write failed: {}", e))
    }

    pub fn try_recv(&self) -> Option<OutboundMessage> {
        self.rx.try_recv().ok()
    }

    // Closing stdin is the device's shutdown signal; it drains any armed
    // autoplay match and exits on EOF.
    pub fn shutdown(mut self) {
        drop(self.stdin);
        if let Err(e) = self.child.wait() {
            log!("Failed to wait for device exit: {}", e);
        }
    }
}

fn read_device_output(stdout: ChildStdout, tx: Sender<OutboundMessage>) {
    let reader = BufReader::new(stdout);
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }
        match decode_message(&line) {
            Ok(message) => {
                if tx.send(message).is_err() {
                    break;
                }
            }
            Err(e) => {
                log!("Undecodable device line {:?}: {}", line, e);
            }
        }
    }
}
