//! Repository implementations backed by a [`DocumentStore`](crate::store::DocumentStore)

mod user;
mod verification;


pub use user::DocumentUserRepository;
pub use verification::DocumentVerificationRepository;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::store::Document;
use crate::InfrastructureError;

pub(crate) fn to_document<T: Serialize>(entity: &T) -> Result<Document, InfrastructureError> {
    match serde_json::to_value(entity)? {
        Value::Object(document) => Ok(document),
        other => Err(InfrastructureError::General(format!(
            "Expected an object document, got {}",
            other
        ))),
    }
}

pub(crate) fn from_document<T: DeserializeOwned>(document: Document) -> Result<T, InfrastructureError> {
    Ok(serde_json::from_value(Value::Object(document))?)
}
