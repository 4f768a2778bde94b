use crate::repository::NotificationType;
use bson::Bson;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationInsertEntity<'a> {
    pub recipient_id: &'a str,

    #[serde(rename = "type")]
    pub notification_type: NotificationType,

    pub from_user_id: Bson,
    pub question_id: Bson,

    pub seen: bool,
}
