use anyhow::anyhow;
use serde_json::Value;

use crate::error::HandlerError;

/// Body of a run request: a document reference and the questions to answer.
///
/// `documents` is kept as raw JSON because callers send anything from a blob
/// URL to an inline object.
#[derive(Debug, Clone, PartialEq)]
pub struct HackRxRequest {
    pub documents: Value,
    pub questions: Vec<Value>,
}

impl HackRxRequest {
    /// Validates the shape of a parsed body. `documents` must be present and
    /// non-null, `questions` must be an array. A `null` body has no fields to
    /// read at all and is an internal error rather than a format error.
    pub fn from_json(payload: Value) -> Result<Self, HandlerError> {
        let mut fields = match payload {
            Value::Object(fields) => fields,
            Value::Null => {
                return Err(HandlerError::Internal(anyhow!(
                    "Cannot read documents or questions from a null request body"
                )))
            }
            _ => return Err(HandlerError::InvalidFormat),
        };

        let documents = match fields.remove("documents") {
            Some(documents) if !documents.is_null() => documents,
            _ => return Err(HandlerError::InvalidFormat),
        };

        let questions = match fields.remove("questions") {
            Some(Value::Array(questions)) => questions,
            _ => return Err(HandlerError::InvalidFormat),
        };

        Ok(Self {
            documents,
            questions,
        })
    }
}
