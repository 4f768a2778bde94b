mod answer_created_handler;

pub use answer_created_handler::*;
