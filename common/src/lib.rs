pub mod game;
pub mod logger;
pub mod protocol;

pub use protocol::{Command, OutboundMessage};
