mod answers_trigger_service;
mod answers_trigger_service_invoker;
mod answers_trigger_service_processor;
mod answers_trigger_service_watcher;
mod dto;

pub use answers_trigger_service::*;
pub use dto::AnswersTriggerServiceConfig;
