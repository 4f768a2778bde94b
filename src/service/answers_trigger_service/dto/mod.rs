mod answers_trigger_service_config;

pub use answers_trigger_service_config::*;
