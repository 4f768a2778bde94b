use crate::repository;
use bson::spec::ElementType;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid recipient: questionOwnerId of type {0:?} cannot address a recipient")]
    InvalidRecipient(ElementType),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}
