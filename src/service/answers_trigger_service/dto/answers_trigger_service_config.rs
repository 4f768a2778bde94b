use std::time::Duration;

#[derive(Clone)]
pub struct AnswersTriggerServiceConfig {
    /// Watched collection, its name also identifies the stored resume token
    pub collection: String,

    /// Extra attempts after failed invocation
    pub retry_max_count: usize,
    pub retry_interval: Duration,
}
