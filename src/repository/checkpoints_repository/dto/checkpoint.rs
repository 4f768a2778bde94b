use crate::repository::checkpoints_repository::entity::CheckpointFindEntity;
use mongodb::change_stream::event::ResumeToken;

#[derive(Debug, Clone)]
pub struct Checkpoint {
    pub resume_token: ResumeToken,

    /// Token belongs to an invalidate event, stream can only be started after it
    pub invalidated: bool,
}

impl From<CheckpointFindEntity> for Checkpoint {
    fn from(value: CheckpointFindEntity) -> Self {
        Self {
            resume_token: value.resume_token,
            invalidated: value.invalidated,
        }
    }
}
