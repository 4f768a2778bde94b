use super::{entity::NotificationInsertEntity, NotificationInsert, NotificationsRepository};
use crate::repository::Error;
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::{options::IndexOptions, Collection, Database, IndexModel};

const NOTIFICATIONS: &str = "notifications";
const INDEX_NAME_RECIPIENT_ID_TIMESTAMP: &str = "index_recipient_id_timestamp";

///
/// Items of every recipient share the `notifications` collection,
/// `notifications/{recipientId}/items` are the documents with matching `recipientId`.
///
pub struct NotificationsRepositoryImpl {
    database: Database,
}

impl NotificationsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection_names = database.list_collection_names().await?;
        if !collection_names.iter().any(|name| name == NOTIFICATIONS) {
            tracing::debug!(collection = NOTIFICATIONS, "creating collection");
            database.create_collection(NOTIFICATIONS).await?;
        }

        let collection = database.collection::<Document>(NOTIFICATIONS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_RECIPIENT_ID_TIMESTAMP.to_string()) {
            Self::create_recipient_id_timestamp_index(&collection).await?;
            tracing::debug!(
                collection = NOTIFICATIONS,
                index = INDEX_NAME_RECIPIENT_ID_TIMESTAMP,
                "created index"
            );
        }

        Ok(Self { database })
    }

    async fn create_recipient_id_timestamp_index(
        collection: &Collection<Document>,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! {
                "recipientId": 1,
                "timestamp": -1,
            })
            .options(
                IndexOptions::builder()
                    .name(INDEX_NAME_RECIPIENT_ID_TIMESTAMP.to_string())
                    .build(),
            )
            .build();

        collection.create_index(index).await?;

        Ok(())
    }
}

#[async_trait]
impl NotificationsRepository for NotificationsRepositoryImpl {
    async fn insert(
        &self,
        recipient_id: &str,
        notification: NotificationInsert,
    ) -> Result<ObjectId, Error> {
        let insert_entity = NotificationInsertEntity {
            recipient_id,
            notification_type: notification.notification_type,
            from_user_id: notification.from_user_id,
            question_id: notification.question_id,
            seen: notification.seen,
        };
        let insert_entity = bson::to_document(&insert_entity)?;

        // Upsert on a fresh id is the only way to let the server fill in $currentDate
        let id = ObjectId::new();
        let update_result = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .update_one(
                doc! {
                    "_id": id,
                },
                doc! {
                    "$setOnInsert": insert_entity,
                    "$currentDate": {
                        "timestamp": { "$type": "date" },
                    },
                },
            )
            .upsert(true)
            .await?;

        match update_result.upserted_id {
            Some(Bson::ObjectId(upserted_id)) if upserted_id == id => Ok(id),
            _ => Err(Error::NoDocumentInserted),
        }
    }
}
