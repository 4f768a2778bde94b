use super::NotificationType;
use bson::Bson;

///
/// Notification item appended to the recipient's items.
/// `from_user_id` and `question_id` keep whatever value the source record held.
///
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationInsert {
    pub notification_type: NotificationType,
    pub from_user_id: Bson,
    pub question_id: Bson,
    pub seen: bool,
}
