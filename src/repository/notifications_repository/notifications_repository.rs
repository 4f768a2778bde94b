use super::NotificationInsert;
use crate::repository::Error;
use async_trait::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsRepository: Send + Sync {
    ///
    /// Appends notification to the items of the recipient.
    /// Timestamp is assigned by the database server.
    ///
    /// ### Errors
    /// - [Error::NoDocumentInserted] when database did not report the new document
    ///
    async fn insert(
        &self,
        recipient_id: &str,
        notification: NotificationInsert,
    ) -> Result<ObjectId, Error>;
}
