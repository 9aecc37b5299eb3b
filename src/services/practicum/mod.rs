pub mod client;
pub mod parser;
pub mod validator;

pub use client::{ApiReply, HomeworkApi, PracticumClient, TransportError};
pub use parser::parse_status;
pub use validator::check_response;
