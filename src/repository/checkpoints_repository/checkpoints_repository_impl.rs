use super::{entity::CheckpointFindEntity, Checkpoint, CheckpointsRepository};
use crate::repository::Error;
use async_trait::async_trait;
use bson::{doc, DateTime};
use mongodb::Database;

const CHECKPOINTS: &str = "trigger_checkpoints";

pub struct CheckpointsRepositoryImpl {
    database: Database,
}

impl CheckpointsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection_names = database.list_collection_names().await?;
        if !collection_names.iter().any(|name| name == CHECKPOINTS) {
            tracing::debug!(collection = CHECKPOINTS, "creating collection");
            database.create_collection(CHECKPOINTS).await?;
        }

        Ok(Self { database })
    }
}

#[async_trait]
impl CheckpointsRepository for CheckpointsRepositoryImpl {
    async fn find(&self, stream: &str) -> Result<Option<Checkpoint>, Error> {
        let checkpoint = self
            .database
            .collection::<CheckpointFindEntity>(CHECKPOINTS)
            .find_one(doc! {
                "_id": stream,
            })
            .await?
            .map(Checkpoint::from);

        Ok(checkpoint)
    }

    async fn save(&self, stream: &str, checkpoint: &Checkpoint) -> Result<(), Error> {
        let resume_token = bson::to_bson(&checkpoint.resume_token)?;

        self.database
            .collection::<CheckpointFindEntity>(CHECKPOINTS)
            .update_one(
                doc! {
                    "_id": stream,
                },
                doc! {
                    "$set": {
                        "resume_token": resume_token,
                        "invalidated": checkpoint.invalidated,
                        "updated_at": DateTime::now(),
                    }
                },
            )
            .upsert(true)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repository::test::{create_test_database, destroy_test_database};
    use bson::Document;
    use mongodb::change_stream::event::ResumeToken;

    fn checkpoint(data: &str, invalidated: bool) -> Checkpoint {
        Checkpoint {
            resume_token: bson::from_document::<ResumeToken>(doc! { "_data": data }).unwrap(),
            invalidated,
        }
    }

    #[tokio::test]
    async fn find_not_exist() {
        let db = create_test_database().await;
        let repository = CheckpointsRepositoryImpl::new(db.clone()).await.unwrap();

        let checkpoint = repository.find("answers").await.unwrap();

        assert!(checkpoint.is_none());

        destroy_test_database(db).await;
    }

    #[tokio::test]
    async fn save_replaces_previous_checkpoint() {
        let db = create_test_database().await;
        let repository = CheckpointsRepositoryImpl::new(db.clone()).await.unwrap();

        let first = checkpoint("0001", false);
        let second = checkpoint("0002", true);
        let expected = bson::to_bson(&second.resume_token).unwrap();

        repository.save("answers", &first).await.unwrap();
        repository.save("answers", &second).await.unwrap();

        let found = repository.find("answers").await.unwrap().unwrap();
        let count = db
            .collection::<Document>(CHECKPOINTS)
            .count_documents(doc! {})
            .await
            .unwrap();

        assert_eq!(bson::to_bson(&found.resume_token).unwrap(), expected);
        assert!(found.invalidated);
        assert_eq!(count, 1);

        destroy_test_database(db).await;
    }

    #[tokio::test]
    async fn find_without_invalidated_field_defaults_to_false() {
        let db = create_test_database().await;
        let repository = CheckpointsRepositoryImpl::new(db.clone()).await.unwrap();

        db.collection::<Document>(CHECKPOINTS)
            .insert_one(doc! {
                "_id": "answers",
                "resume_token": { "_data": "0001" },
                "updated_at": DateTime::now(),
            })
            .await
            .unwrap();

        let found = repository.find("answers").await.unwrap().unwrap();

        assert!(!found.invalidated);

        destroy_test_database(db).await;
    }
}
