use bson::oid::ObjectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerOutcome {
    /// Guard failed, nothing was written
    Skipped,

    /// Notification with given id was created
    Notified { id: ObjectId },
}
