pub mod answer_created_handler;
pub mod answers_trigger_service;
pub mod document_created_handler;
