use super::{
    answers_trigger_service_watcher::AnswersTriggerServiceWatcher, AnswersTriggerServiceConfig,
};
use crate::{
    repository::CheckpointsRepository,
    service::document_created_handler::DocumentCreatedHandler,
};
use bson::Document;
use mongodb::Database;
use std::sync::Arc;
use tokio::{sync::Notify, task::JoinHandle};

///
/// Delivers every answer inserted into the watched collection to the handler.
/// Delivery is at-least-once: events are redelivered after restart
/// until their resume token was saved.
///
pub struct AnswersTriggerService {
    close_notify: Arc<Notify>,
    watcher_handle: JoinHandle<()>,
}

impl AnswersTriggerService {
    pub fn new(
        config: AnswersTriggerServiceConfig,
        database: Database,
        checkpoints_repository: Arc<dyn CheckpointsRepository>,
        handler: Arc<dyn DocumentCreatedHandler>,
    ) -> Self {
        let collection = database.collection::<Document>(&config.collection);
        let watcher =
            AnswersTriggerServiceWatcher::new(config, collection, checkpoints_repository, handler);

        let close_notify = Arc::new(Notify::new());
        let watcher_handle = tokio::spawn(watcher.run(close_notify.clone()));

        Self {
            close_notify,
            watcher_handle,
        }
    }

    pub async fn close(self) {
        self.close_notify.notify_one();

        if let Err(err) = self.watcher_handle.await {
            tracing::error!(%err, "answers watcher did not finish cleanly");
        }
    }
}
