pub mod arts;
pub mod categories;

use artcraft_core::document::{document_to_json, json_to_document};
use axum::extract::rejection::JsonRejection;
use axum::Json;
use bson::Document;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Unwrap a JSON body into a BSON document, reporting extractor
/// rejections (bad content type, unparsable JSON) as `BAD_REQUEST`.
pub(crate) fn body_document(payload: Result<Json<Value>, JsonRejection>) -> AppResult<Document> {
    let Json(body) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    Ok(json_to_document(body)?)
}

/// Render a list of stored documents as a JSON array.
pub(crate) fn documents_json(docs: Vec<Document>) -> Value {
    Value::Array(docs.into_iter().map(document_to_json).collect())
}
