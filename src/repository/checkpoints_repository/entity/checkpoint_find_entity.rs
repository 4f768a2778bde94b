use mongodb::change_stream::event::ResumeToken;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CheckpointFindEntity {
    pub _id: String,

    pub resume_token: ResumeToken,

    #[serde(default)]
    pub invalidated: bool,
}
