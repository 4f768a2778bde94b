use super::ApplicationEnv;
use crate::{
    repository::{CheckpointsRepositoryImpl, NotificationsRepositoryImpl},
    service::{
        answer_created_handler::AnswerCreatedHandler,
        answers_trigger_service::{AnswersTriggerService, AnswersTriggerServiceConfig},
    },
};
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

pub struct ApplicationState {
    pub db_client: Client,
    pub answers_trigger_service: AnswersTriggerService,
}

pub async fn create_state(env: &ApplicationEnv) -> anyhow::Result<ApplicationState> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let notifications_repository = NotificationsRepositoryImpl::new(db.clone()).await?;
    let notifications_repository = Arc::new(notifications_repository);

    let checkpoints_repository = CheckpointsRepositoryImpl::new(db.clone()).await?;
    let checkpoints_repository = Arc::new(checkpoints_repository);

    tracing::info!("creating services");
    let answer_created_handler = AnswerCreatedHandler::new(notifications_repository);
    let answer_created_handler = Arc::new(answer_created_handler);

    let config = AnswersTriggerServiceConfig {
        collection: env.answers_collection.clone(),
        retry_max_count: env.retry_max_count,
        retry_interval: env.retry_interval,
    };
    let answers_trigger_service = AnswersTriggerService::new(
        config,
        db,
        checkpoints_repository,
        answer_created_handler,
    );

    Ok(ApplicationState {
        db_client,
        answers_trigger_service,
    })
}
