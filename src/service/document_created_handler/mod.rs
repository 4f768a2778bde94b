mod document_created_handler;
mod dto;

pub use document_created_handler::*;
pub use dto::HandlerOutcome;
