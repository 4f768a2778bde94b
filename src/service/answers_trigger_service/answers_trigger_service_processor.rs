use super::answers_trigger_service_invoker::AnswersTriggerServiceInvoker;
use crate::{
    dto::input,
    repository::{self, Checkpoint, CheckpointsRepository},
};
use bson::Document;
use mongodb::{
    change_stream::event::{ChangeStreamEvent, OperationType},
    options::ChangeStreamOptions,
};
use std::sync::Arc;

#[derive(Debug, PartialEq, Eq)]
pub enum ProcessedEvent {
    Checkpointed,

    /// Stream ended, next one has to start after the saved token
    Invalidated,
}

pub struct AnswersTriggerServiceProcessor {
    stream: String,

    checkpoints_repository: Arc<dyn CheckpointsRepository>,
    invoker: AnswersTriggerServiceInvoker,
}

impl AnswersTriggerServiceProcessor {
    pub fn new(
        stream: String,
        checkpoints_repository: Arc<dyn CheckpointsRepository>,
        invoker: AnswersTriggerServiceInvoker,
    ) -> Self {
        Self {
            stream,
            checkpoints_repository,
            invoker,
        }
    }

    pub async fn checkpoint(&self) -> Result<Option<Checkpoint>, repository::Error> {
        self.checkpoints_repository.find(&self.stream).await
    }

    ///
    /// Delivers event to the handler and saves its checkpoint afterwards.
    /// Events that cannot be delivered or keep failing are checkpointed as well.
    ///
    /// ### Errors
    /// - checkpoint could not be saved, event will be delivered again
    ///
    pub async fn process(
        &self,
        event: ChangeStreamEvent<Document>,
    ) -> Result<ProcessedEvent, repository::Error> {
        let resume_token = event.id.clone();

        if matches!(event.operation_type, OperationType::Invalidate) {
            tracing::warn!("received invalidate event");

            let checkpoint = Checkpoint {
                resume_token,
                invalidated: true,
            };
            self.checkpoints_repository
                .save(&self.stream, &checkpoint)
                .await?;

            return Ok(ProcessedEvent::Invalidated);
        }

        self.deliver(event).await;

        let checkpoint = Checkpoint {
            resume_token,
            invalidated: false,
        };
        self.checkpoints_repository
            .save(&self.stream, &checkpoint)
            .await?;

        Ok(ProcessedEvent::Checkpointed)
    }

    async fn deliver(&self, event: ChangeStreamEvent<Document>) {
        let event = match input::DocumentCreated::try_from(event) {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!(%err, "skipping change event");
                return;
            }
        };

        let document_id = event.document_id.clone();
        tracing::debug!(document_id, "processing answer");

        match self.invoker.invoke(event).await {
            Ok(outcome) => tracing::debug!(document_id, ?outcome, "answer processed"),
            Err(err) => tracing::error!(document_id, %err, "failed to process answer"),
        }
    }
}

///
/// Resume token of an invalidate event is rejected by `resumeAfter`,
/// stream has to be opened with `startAfter` instead.
///
pub fn change_stream_options(checkpoint: Option<Checkpoint>) -> ChangeStreamOptions {
    match checkpoint {
        Some(Checkpoint {
            resume_token,
            invalidated: true,
        }) => ChangeStreamOptions::builder()
            .start_after(resume_token)
            .build(),
        Some(Checkpoint {
            resume_token,
            invalidated: false,
        }) => ChangeStreamOptions::builder()
            .resume_after(resume_token)
            .build(),
        None => ChangeStreamOptions::default(),
    }
}
