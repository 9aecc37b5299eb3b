pub mod engine;
pub mod types;

pub use engine::MonitorEngine;
pub use types::{fault_message, BotError, PollOutcome, FAULT_PREFIX};
