use crate::{
    dto::input,
    error::Error,
    repository::{NotificationInsert, NotificationType, NotificationsRepository},
    service::document_created_handler::{DocumentCreatedHandler, HandlerOutcome},
};
use async_trait::async_trait;
use std::sync::Arc;

pub struct AnswerCreatedHandler {
    repository: Arc<dyn NotificationsRepository>,
}

impl AnswerCreatedHandler {
    pub fn new(repository: Arc<dyn NotificationsRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl DocumentCreatedHandler for AnswerCreatedHandler {
    ///
    /// Appends an `answer` notification for the owner of the answered question.
    /// Answers without owner are skipped silently.
    ///
    /// ### Errors
    /// - [Error::InvalidRecipient] when questionOwnerId is neither string nor object id
    /// - [Error::Database] when notification could not be written
    ///
    #[tracing::instrument(
        name = "Answer Created",
        skip_all,
        fields(
            answer_id = %event.document_id,
        )
    )]
    async fn handle(&self, event: input::DocumentCreated) -> Result<HandlerOutcome, Error> {
        let answer = input::Answer::new(&event.data);

        let Some(recipient_id) = answer.question_owner_id()? else {
            return Ok(HandlerOutcome::Skipped);
        };

        let notification = NotificationInsert {
            notification_type: NotificationType::Answer,
            from_user_id: answer.user_id(),
            question_id: answer.question_id(),
            seen: false,
        };

        let id = self.repository.insert(&recipient_id, notification).await?;

        tracing::info!(%recipient_id, id = id.to_hex(), "notification created");

        Ok(HandlerOutcome::Notified { id })
    }
}
