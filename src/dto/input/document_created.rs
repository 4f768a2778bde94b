use anyhow::anyhow;
use bson::{Bson, Document};
use mongodb::change_stream::event::{ChangeStreamEvent, OperationType};

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentCreated {
    /// Id matched by the watched path, e.g. `{id}` of `answers/{id}`
    pub document_id: String,
    pub data: Document,
}

impl TryFrom<ChangeStreamEvent<Document>> for DocumentCreated {
    type Error = anyhow::Error;

    fn try_from(value: ChangeStreamEvent<Document>) -> Result<Self, Self::Error> {
        if !matches!(value.operation_type, OperationType::Insert) {
            anyhow::bail!(
                "invalid event: expected insert, got {:?}",
                value.operation_type
            );
        }

        let data = value
            .full_document
            .ok_or_else(|| anyhow!("invalid event: missing fullDocument field"))?;

        let id = value
            .document_key
            .as_ref()
            .and_then(|document_key| document_key.get("_id"))
            .or_else(|| data.get("_id"))
            .ok_or_else(|| anyhow!("invalid event: missing document id"))?;
        let document_id = match id {
            Bson::ObjectId(id) => id.to_hex(),
            Bson::String(id) => id.clone(),
            other => other.to_string(),
        };

        Ok(Self { document_id, data })
    }
}
