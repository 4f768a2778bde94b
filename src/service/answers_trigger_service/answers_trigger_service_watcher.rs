use super::{
    answers_trigger_service_invoker::AnswersTriggerServiceInvoker,
    answers_trigger_service_processor::{
        change_stream_options, AnswersTriggerServiceProcessor, ProcessedEvent,
    },
    AnswersTriggerServiceConfig,
};
use crate::{
    repository::CheckpointsRepository, service::document_created_handler::DocumentCreatedHandler,
};
use bson::{doc, Document};
use futures_util::TryStreamExt;
use mongodb::Collection;
use std::{sync::Arc, time::Duration};
use tokio::sync::Notify;

pub struct AnswersTriggerServiceWatcher {
    stream: String,
    retry_interval: Duration,

    collection: Collection<Document>,
    processor: AnswersTriggerServiceProcessor,
}

impl AnswersTriggerServiceWatcher {
    pub fn new(
        config: AnswersTriggerServiceConfig,
        collection: Collection<Document>,
        checkpoints_repository: Arc<dyn CheckpointsRepository>,
        handler: Arc<dyn DocumentCreatedHandler>,
    ) -> Self {
        let invoker = AnswersTriggerServiceInvoker::new(&config, handler);
        let processor = AnswersTriggerServiceProcessor::new(
            config.collection.clone(),
            checkpoints_repository,
            invoker,
        );

        Self {
            stream: config.collection,
            retry_interval: config.retry_interval,
            collection,
            processor,
        }
    }

    #[tracing::instrument(
        name = "Answers Trigger",
        skip_all,
        fields(
            collection = %self.stream,
        )
    )]
    pub async fn run(self, close_notify: Arc<Notify>) {
        tokio::select! {
            biased;

            // Wait for signal to close
            _ = close_notify.notified() => {},

            // Reopen change stream whenever it ends
            _ = async { loop {
                match self.watch().await {
                    Ok(()) => tracing::info!("change stream invalidated, starting after it"),
                    Err(err) => tracing::warn!(%err, "change stream failed"),
                }

                tokio::time::sleep(self.retry_interval).await;
            }} => {}
        }
    }

    ///
    /// Consumes change stream until it fails or gets invalidated.
    /// Returns `Ok` only after invalidate event was checkpointed.
    ///
    async fn watch(&self) -> anyhow::Result<()> {
        let checkpoint = self.processor.checkpoint().await?;
        tracing::info!(
            resumed = checkpoint.is_some(),
            invalidated = checkpoint.as_ref().is_some_and(|checkpoint| checkpoint.invalidated),
            "opening change stream"
        );

        let mut change_stream = self
            .collection
            .watch()
            .pipeline([doc! {
                "$match": {
                    "operationType": { "$in": ["insert", "invalidate"] },
                }
            }])
            .with_options(change_stream_options(checkpoint))
            .await?;

        while let Some(event) = change_stream.try_next().await? {
            if let ProcessedEvent::Invalidated = self.processor.process(event).await? {
                return Ok(());
            }
        }

        anyhow::bail!("change stream closed");
    }
}
