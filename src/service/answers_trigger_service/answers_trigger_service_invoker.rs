use super::AnswersTriggerServiceConfig;
use crate::{
    dto::input,
    error::Error,
    service::document_created_handler::{DocumentCreatedHandler, HandlerOutcome},
};
use std::{sync::Arc, time::Duration};

pub struct AnswersTriggerServiceInvoker {
    handler: Arc<dyn DocumentCreatedHandler>,

    retry_max_count: usize,
    retry_interval: Duration,
}

impl AnswersTriggerServiceInvoker {
    pub fn new(
        config: &AnswersTriggerServiceConfig,
        handler: Arc<dyn DocumentCreatedHandler>,
    ) -> Self {
        Self {
            handler,
            retry_max_count: config.retry_max_count,
            retry_interval: config.retry_interval,
        }
    }

    ///
    /// Invokes handler until it succeeds or retries run out.
    /// Only database failures are retried, other errors repeat on every attempt.
    ///
    /// ### Errors
    /// - error of the last failed invocation
    ///
    pub async fn invoke(&self, event: input::DocumentCreated) -> Result<HandlerOutcome, Error> {
        let mut retry_count = 0;

        loop {
            match self.handler.handle(event.clone()).await {
                Ok(outcome) => return Ok(outcome),
                Err(err @ Error::Database(_)) if retry_count < self.retry_max_count => {
                    retry_count += 1;
                    tracing::warn!(%err, retry_count, "invocation failed, retrying");
                    tokio::time::sleep(self.retry_interval).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{repository, service::document_created_handler::MockDocumentCreatedHandler};
    use bson::{doc, oid::ObjectId, spec::ElementType};

    fn config(retry_max_count: usize) -> AnswersTriggerServiceConfig {
        AnswersTriggerServiceConfig {
            collection: "answers".to_string(),
            retry_max_count,
            retry_interval: Duration::ZERO,
        }
    }

    fn answer_created() -> input::DocumentCreated {
        input::DocumentCreated {
            document_id: "a1".to_string(),
            data: doc! {
                "questionOwnerId": "u1",
                "userId": "u2",
                "questionId": "q1",
            },
        }
    }

    #[tokio::test]
    async fn invoke_success_called_once() {
        let id = ObjectId::new();

        let mut handler = MockDocumentCreatedHandler::new();
        handler
            .expect_handle()
            .times(1)
            .return_once(move |_| Ok(HandlerOutcome::Notified { id }));
        let invoker = AnswersTriggerServiceInvoker::new(&config(3), Arc::new(handler));

        let outcome = invoker.invoke(answer_created()).await.unwrap();

        assert_eq!(outcome, HandlerOutcome::Notified { id });
    }

    #[tokio::test]
    async fn invoke_skipped_not_retried() {
        let mut handler = MockDocumentCreatedHandler::new();
        handler
            .expect_handle()
            .times(1)
            .return_once(|_| Ok(HandlerOutcome::Skipped));
        let invoker = AnswersTriggerServiceInvoker::new(&config(3), Arc::new(handler));

        let outcome = invoker.invoke(answer_created()).await.unwrap();

        assert_eq!(outcome, HandlerOutcome::Skipped);
    }

    #[tokio::test]
    async fn invoke_failure_retried_until_success() {
        let mut calls = 0;

        let mut handler = MockDocumentCreatedHandler::new();
        handler.expect_handle().times(2).returning(move |_| {
            calls += 1;
            match calls {
                1 => Err(Error::Database(repository::Error::NoDocumentInserted)),
                _ => Ok(HandlerOutcome::Skipped),
            }
        });
        let invoker = AnswersTriggerServiceInvoker::new(&config(3), Arc::new(handler));

        let result = invoker.invoke(answer_created()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn invoke_failure_retries_exhausted() {
        let mut handler = MockDocumentCreatedHandler::new();
        handler
            .expect_handle()
            .times(3)
            .returning(|_| Err(Error::Database(repository::Error::NoDocumentInserted)));
        let invoker = AnswersTriggerServiceInvoker::new(&config(2), Arc::new(handler));

        let result = invoker.invoke(answer_created()).await;

        assert!(matches!(result, Err(Error::Database(_))));
    }

    #[tokio::test]
    async fn invoke_invalid_recipient_not_retried() {
        let mut handler = MockDocumentCreatedHandler::new();
        handler
            .expect_handle()
            .times(1)
            .returning(|_| Err(Error::InvalidRecipient(ElementType::Int32)));
        let invoker = AnswersTriggerServiceInvoker::new(&config(3), Arc::new(handler));

        let result = invoker.invoke(answer_created()).await;

        assert!(matches!(result, Err(Error::InvalidRecipient(_))));
    }

    #[tokio::test]
    async fn invoke_no_retries_configured() {
        let mut handler = MockDocumentCreatedHandler::new();
        handler
            .expect_handle()
            .times(1)
            .returning(|_| Err(Error::Database(repository::Error::NoDocumentInserted)));
        let invoker = AnswersTriggerServiceInvoker::new(&config(0), Arc::new(handler));

        let result = invoker.invoke(answer_created()).await;

        assert!(result.is_err());
    }
}
