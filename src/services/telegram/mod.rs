pub mod client;
pub mod notifier;

pub use client::{MessageTransport, TelegramClient, TelegramError};
pub use notifier::Notifier;
