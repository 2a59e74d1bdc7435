//! Handlers for the `arts` collection.
//!
//! Every handler is a direct pass-through: build a filter or document from
//! the path and body, call one [`ArtRepo`] primitive, relay the result.

use artcraft_core::document::document_to_json;
use artcraft_core::types::parse_doc_id;
use artcraft_db::models::art::ArtFilter;
use artcraft_db::repositories::ArtRepo;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;

use super::{body_document, documents_json};
use crate::error::AppResult;
use crate::state::AppState;

/// POST /arts
///
/// Insert the body as a new art document.
pub async fn create_art(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let art = body_document(payload)?;
    let ack = ArtRepo::create(&state.gateway, art).await?;

    tracing::info!(inserted_id = %ack.inserted_id, "Art created");

    Ok(Json(ack))
}

/// GET /arts
pub async fn list_arts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let arts = ArtRepo::list_all(&state.gateway).await?;

    Ok(Json(documents_json(arts)))
}

/// GET /arts/id/{id}
///
/// Responds with the document, or `null` when no art has this id.
pub async fn get_art(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_doc_id(&id)?;
    let art = ArtRepo::find_by_id(&state.gateway, id).await?;

    Ok(Json(art.map(document_to_json)))
}

/// GET /arts/email/{email}
pub async fn list_arts_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<impl IntoResponse> {
    let arts = ArtRepo::list_filtered(&state.gateway, &ArtFilter::by_email(email)).await?;

    Ok(Json(documents_json(arts)))
}

/// GET /arts/filter/{email}/{customizable}
///
/// `customizable` is `true` only for the literal string `true`.
pub async fn filter_arts(
    State(state): State<AppState>,
    Path((email, customizable)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let filter = ArtFilter::from_route_segments(email, &customizable);
    let arts = ArtRepo::list_filtered(&state.gateway, &filter).await?;

    Ok(Json(documents_json(arts)))
}

/// PUT /arts/id/{id}
///
/// Set the body's fields on the art, creating it if the id is unused.
pub async fn upsert_art(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_doc_id(&id)?;
    let fields = body_document(payload)?;
    let ack = ArtRepo::upsert(&state.gateway, id, fields).await?;

    tracing::info!(
        %id,
        matched = ack.matched_count,
        upserted = ack.upserted_count,
        "Art upserted",
    );

    Ok(Json(ack))
}

/// DELETE /arts/id/{id}
///
/// Deleting an unknown id is not an error; the ack reports zero.
pub async fn delete_art(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_doc_id(&id)?;
    let ack = ArtRepo::delete(&state.gateway, id).await?;

    tracing::info!(%id, deleted = ack.deleted_count, "Art deleted");

    Ok(Json(ack))
}
