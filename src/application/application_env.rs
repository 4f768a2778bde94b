use anyhow::anyhow;
use std::time::Duration;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    /// Deployment must be a replica set, change streams are unavailable otherwise
    pub db_connection_string: String,
    pub db_name: String,

    pub answers_collection: String,

    pub retry_max_count: usize,
    pub retry_interval: Duration,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("ANSWER_NOTIFIER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("ANSWER_NOTIFIER_LOG_FILENAME")?;
        let db_connection_string = Self::env_var("ANSWER_NOTIFIER_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("ANSWER_NOTIFIER_DB_NAME")?;
        let answers_collection = Self::env_var("ANSWER_NOTIFIER_ANSWERS_COLLECTION")?;
        let retry_max_count = Self::env_var("ANSWER_NOTIFIER_RETRY_MAX_COUNT")?.parse()?;
        let retry_interval = Self::env_var("ANSWER_NOTIFIER_RETRY_INTERVAL")?.parse()?;
        let retry_interval = Duration::from_secs(retry_interval);

        Ok(Self {
            log_directory,
            log_filename,
            db_connection_string,
            db_name,
            answers_collection,
            retry_max_count,
            retry_interval,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
