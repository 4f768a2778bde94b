use crate::error::Error;
use bson::{Bson, Document};

const QUESTION_OWNER_ID: &str = "questionOwnerId";
const USER_ID: &str = "userId";
const QUESTION_ID: &str = "questionId";

///
/// Read-only view over the fields of a created answer record.
///
pub struct Answer<'a> {
    data: &'a Document,
}

impl<'a> Answer<'a> {
    pub fn new(data: &'a Document) -> Self {
        Self { data }
    }

    ///
    /// Returns id of the user who asked the question.
    /// `None` means the answer has no owner to notify.
    ///
    /// ### Errors
    /// - [Error::InvalidRecipient] when value is set but it is neither string nor object id
    ///
    pub fn question_owner_id(&self) -> Result<Option<String>, Error> {
        match self.data.get(QUESTION_OWNER_ID) {
            Some(value) if is_truthy(value) => match value {
                Bson::String(id) => Ok(Some(id.clone())),
                Bson::ObjectId(id) => Ok(Some(id.to_hex())),
                other => Err(Error::InvalidRecipient(other.element_type())),
            },
            _ => Ok(None),
        }
    }

    pub fn user_id(&self) -> Bson {
        self.field(USER_ID)
    }

    pub fn question_id(&self) -> Bson {
        self.field(QUESTION_ID)
    }

    fn field(&self, key: &str) -> Bson {
        self.data.get(key).cloned().unwrap_or(Bson::Null)
    }
}

fn is_truthy(value: &Bson) -> bool {
    match value {
        Bson::Null | Bson::Undefined => false,
        Bson::Boolean(value) => *value,
        Bson::Int32(value) => *value != 0,
        Bson::Int64(value) => *value != 0,
        Bson::Double(value) => *value != 0.0 && !value.is_nan(),
        Bson::String(value) => !value.is_empty(),
        _ => true,
    }
}
