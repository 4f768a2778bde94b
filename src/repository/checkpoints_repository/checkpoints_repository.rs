use super::Checkpoint;
use crate::repository::Error;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckpointsRepository: Send + Sync {
    ///
    /// Finds checkpoint of the last fully processed event of the stream
    ///
    async fn find(&self, stream: &str) -> Result<Option<Checkpoint>, Error>;

    ///
    /// Saves checkpoint of the stream, replacing the previous one
    ///
    async fn save(&self, stream: &str, checkpoint: &Checkpoint) -> Result<(), Error>;
}
